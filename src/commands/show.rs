//! Show command - prints the dashboard to the terminal.

use std::io::{self, Write};
use std::time::Duration;

use crate::config::{Config, LOADING_DOTS, LOADING_DOT_DELAY_MS, LOADING_MESSAGE};
use crate::domain::{DashboardView, TimeInfo};
use crate::errors::AppResult;
use crate::services::DashboardService;
use crate::utils::text::divider;

/// Execute the show command
pub async fn execute(config: Config) -> AppResult<()> {
    let service = DashboardService::from_config(&config)?;
    let mut out = io::stdout();

    render_header(&mut out, &TimeInfo::now())?;

    // Sources are fetched while the dots are printing
    let (animation, view) = tokio::join!(
        loading_animation(&mut out, Duration::from_millis(LOADING_DOT_DELAY_MS)),
        service.build()
    );
    animation?;

    render_body(&mut out, &view)?;
    out.flush()?;
    Ok(())
}

/// Banner, date and time.
pub fn render_header<W: Write>(out: &mut W, time: &TimeInfo) -> io::Result<()> {
    writeln!(out, "{}", divider('='))?;
    writeln!(out, "🌟 YOUR DAILY DASHBOARD 🌟")?;
    writeln!(out, "{}", divider('='))?;
    writeln!(out, "📅 Date: {}", time.date)?;
    writeln!(out, "⏰ Time: {}", time.time)?;
    writeln!(out, "{}", divider('-'))
}

/// Print the loading message, one dot per `delay`, then a newline.
pub async fn loading_animation<W: Write>(out: &mut W, delay: Duration) -> io::Result<()> {
    write!(out, "{}", LOADING_MESSAGE)?;
    out.flush()?;
    for _ in 0..LOADING_DOTS {
        tokio::time::sleep(delay).await;
        write!(out, ".")?;
        out.flush()?;
    }
    writeln!(out)
}

/// Every section, the first forecast entries, and the sign-off.
pub fn render_body<W: Write>(out: &mut W, view: &DashboardView) -> io::Result<()> {
    for section in [
        &view.weather,
        &view.quote,
        &view.programming_quote,
        &view.fun_fact,
        &view.joke,
    ] {
        writeln!(out, "{}", section)?;
        writeln!(out)?;
    }

    writeln!(out, "📊 5-Hour Forecast:")?;
    for forecast in view.visible_forecasts() {
        writeln!(out, "   {}", forecast)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", divider('='))?;
    writeln!(out, "Have a great day! 🚀")?;
    writeln!(out, "{}", divider('='))
}

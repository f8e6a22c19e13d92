//! Dashboard view model shared by the terminal and HTML renderers.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

use crate::config::FORECAST_DISPLAY_ENTRIES;

/// Formatted date and time shown in the dashboard header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeInfo {
    /// e.g. "Friday, October 16, 2026"
    pub date: String,
    /// e.g. "09:05 AM"
    pub time: String,
}

impl TimeInfo {
    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    pub fn at<Tz: TimeZone>(moment: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            date: moment.format("%A, %B %d, %Y").to_string(),
            time: moment.format("%I:%M %p").to_string(),
        }
    }
}

/// Everything one dashboard render needs. Every field is already display text.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub time: TimeInfo,
    pub weather: String,
    pub quote: String,
    pub programming_quote: String,
    pub fun_fact: String,
    pub joke: String,
    /// Up to five entries; renderers show only the first three
    pub forecasts: Vec<String>,
}

impl DashboardView {
    /// Forecast entries the presentation layer should display.
    pub fn visible_forecasts(&self) -> &[String] {
        let end = self.forecasts.len().min(FORECAST_DISPLAY_ENTRIES);
        &self.forecasts[..end]
    }
}

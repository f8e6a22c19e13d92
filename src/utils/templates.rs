//! HTML page templates.
//!
//! Pages are assembled with `format!`. Every dynamic value passes through
//! [`escape_html`] before it is interpolated; callers hand in raw text.

use crate::config::{LOGIN_PATH, LOGOUT_PATH, REGISTER_PATH};
use crate::domain::DashboardView;

const DASHBOARD_STYLE: &str = r#"
        body {
            font-family: Arial, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            background-color: #f5f5f5;
        }
        .dashboard-item {
            background: white;
            padding: 15px;
            margin: 10px 0;
            border-radius: 5px;
            box-shadow: 0 2px 5px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            padding: 20px;
            background: #007bff;
            color: white;
            border-radius: 5px;
            margin-bottom: 20px;
        }
        .header a { color: white; }
        .refresh-btn {
            display: block;
            margin: 20px auto;
            padding: 10px 20px;
            background: #28a745;
            color: white;
            border: none;
            border-radius: 5px;
            cursor: pointer;
        }
        .refresh-btn:hover {
            background: #218838;
        }
"#;

const FORM_STYLE: &str = r#"
        body { font-family: Arial; max-width: 500px; margin: 2em auto; padding: 1em; }
        .form-group { margin-bottom: 1em; }
        input { width: 100%; padding: 8px; margin-top: 5px; }
        button { background: #007bff; color: white; padding: 10px 20px; border: none; cursor: pointer; }
        .error { color: red; }
"#;

/// Escape text for safe interpolation into HTML element content or
/// double-quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The authenticated dashboard page.
pub fn dashboard_page(view: &DashboardView, username: &str) -> String {
    let forecasts: String = view
        .visible_forecasts()
        .iter()
        .map(|forecast| format!("        <p>{}</p>\n", escape_html(forecast)))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Daily Dashboard</title>
    <style>{style}</style>
</head>
<body>
    <div class="header">
        <h1>🌟 YOUR DAILY DASHBOARD 🌟</h1>
        <p>{date} | {time}</p>
        <p>Signed in as {username} · <a href="{logout}">Log out</a></p>
    </div>

    <div class="dashboard-item">
        {weather}
    </div>

    <div class="dashboard-item">
        {quote}
    </div>

    <div class="dashboard-item">
        {programming_quote}
    </div>

    <div class="dashboard-item">
        {fun_fact}
    </div>

    <div class="dashboard-item">
        {joke}
    </div>

    <div class="dashboard-item">
        <h3>📊 5-Hour Forecast:</h3>
{forecasts}    </div>

    <button class="refresh-btn" onclick="location.reload()">🔄 Refresh Dashboard</button>
</body>
</html>
"#,
        style = DASHBOARD_STYLE,
        date = escape_html(&view.time.date),
        time = escape_html(&view.time.time),
        username = escape_html(username),
        logout = LOGOUT_PATH,
        weather = escape_html(&view.weather),
        quote = escape_html(&view.quote),
        programming_quote = escape_html(&view.programming_quote),
        fun_fact = escape_html(&view.fun_fact),
        joke = escape_html(&view.joke),
        forecasts = forecasts,
    )
}

/// Login form, optionally with an error message above it.
pub fn login_page(message: Option<&str>) -> String {
    format!(
        r#"<html>
<head>
    <title>Login</title>
    <style>{style}</style>
</head>
<body>
    <h2>Login</h2>
{messages}    <form method="POST">
        <div class="form-group">
            <label>Username</label>
            <input type="text" name="username" required>
        </div>
        <div class="form-group">
            <label>Password</label>
            <input type="password" name="password" required>
        </div>
        <button type="submit">Login</button>
    </form>
    <p>New user? <a href="{register}">Register here</a></p>
</body>
</html>
"#,
        style = FORM_STYLE,
        messages = flash(message),
        register = REGISTER_PATH,
    )
}

/// Registration form, optionally with an error message above it.
pub fn register_page(message: Option<&str>) -> String {
    format!(
        r#"<html>
<head>
    <title>Register</title>
    <style>{style}</style>
</head>
<body>
    <h2>Register</h2>
{messages}    <form method="POST">
        <div class="form-group">
            <label>Username</label>
            <input type="text" name="username" required>
        </div>
        <div class="form-group">
            <label>Email</label>
            <input type="email" name="email" required>
        </div>
        <div class="form-group">
            <label>Password</label>
            <input type="password" name="password" required>
        </div>
        <button type="submit">Register</button>
    </form>
    <p>Already have an account? <a href="{login}">Login here</a></p>
</body>
</html>
"#,
        style = FORM_STYLE,
        messages = flash(message),
        login = LOGIN_PATH,
    )
}

pub fn too_many_requests_page() -> String {
    simple_page(
        "⚠️ Too Many Requests",
        "Please slow down! Try again in a few minutes.",
    )
}

pub fn not_found_page() -> String {
    simple_page(
        "🔍 Page Not Found",
        "The page you're looking for doesn't exist.",
    )
}

pub fn internal_error_page() -> String {
    simple_page(
        "🔧 Oops! Something went wrong",
        "We're having some technical difficulties. Please try again later.",
    )
}

/// Minimal page around an already-escaped message.
pub fn message_page(escaped_message: &str) -> String {
    simple_page("Request could not be completed", escaped_message)
}

fn simple_page(heading: &str, body: &str) -> String {
    format!(
        r#"<h1>{heading}</h1>
<p>{body}</p>
<p><a href="/">Go back home</a></p>
"#
    )
}

fn flash(message: Option<&str>) -> String {
    message
        .map(|m| format!("    <div class=\"error\">{}</div>\n", escape_html(m)))
        .unwrap_or_default()
}

//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Sessions
// =============================================================================

/// Default session lifetime in hours
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Minimum secret key length (cookie signing requirement)
pub const MIN_SECRET_KEY_LENGTH: usize = 32;

/// Secret used in debug builds when SECRET_KEY is unset
pub const DEV_SECRET_KEY: &str = "dev-secret-key-please-change-me!!";

/// Name of the cookie carrying the signed session token
pub const SESSION_COOKIE_NAME: &str = "dashboard_session";

/// Generic login failure message, identical for unknown users and bad passwords
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Registration rejection for a taken username
pub const USERNAME_TAKEN_MESSAGE: &str = "Username already exists";

/// Registration rejection for a taken email
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already registered";

/// Shown when a submitted form is missing fields or cannot be decoded
pub const INCOMPLETE_FORM_MESSAGE: &str = "Please fill in every field";

// =============================================================================
// Routes
// =============================================================================

pub const DASHBOARD_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const LOGOUT_PATH: &str = "/logout";
pub const HEALTH_PATH: &str = "/health";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (SQLite file next to the binary)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";

// =============================================================================
// Rate Limiting
// =============================================================================

/// Hourly ceiling per client
pub const RATE_LIMIT_HOURLY_REQUESTS: u64 = 50;

/// Daily ceiling per client
pub const RATE_LIMIT_DAILY_REQUESTS: u64 = 200;

pub const SECONDS_PER_HOUR: u64 = 3600;
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Client ids seen since the last sweep before idle entries are dropped early
pub const RATE_LIMIT_SWEEP_THRESHOLD: usize = 10_000;

// =============================================================================
// Data Sources
// =============================================================================

/// City shown when DASHBOARD_CITY is unset
pub const DEFAULT_CITY: &str = "Houston";

/// Uniform timeout for every outbound request
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;

pub const DEFAULT_WEATHER_API_BASE: &str = "http://api.openweathermap.org";
pub const DEFAULT_QUOTE_API_URL: &str = "https://api.quotable.io/random";
pub const DEFAULT_JOKE_API_URL: &str = "https://official-joke-api.appspot.com/random_joke";

/// Unit system requested from the weather provider
pub const WEATHER_UNITS: &str = "imperial";

/// Entries kept from the forecast response
pub const FORECAST_MAX_ENTRIES: usize = 5;

/// Entries shown by either presentation
pub const FORECAST_DISPLAY_ENTRIES: usize = 3;

// =============================================================================
// Terminal
// =============================================================================

pub const DIVIDER_LENGTH: usize = 60;
pub const LOADING_MESSAGE: &str = "Loading your personalized info";
pub const LOADING_DOTS: usize = 3;
pub const LOADING_DOT_DELAY_MS: u64 = 500;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum username length (matches the column size)
pub const MAX_USERNAME_LENGTH: u64 = 80;

/// Maximum email length (matches the column size)
pub const MAX_EMAIL_LENGTH: u64 = 120;

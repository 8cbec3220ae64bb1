// src/constants.rs
//
// Application-wide constants shared by the presenter, the config layer and the renderer.

/// Base URL of the backend API when neither flag, environment nor config file sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Directory below the platform config dir holding `config.toml`.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_DIR_NAME: &str = "crmview";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Placeholder for missing optional fields and timestamps.
pub const NOT_AVAILABLE: &str = "N/A";

/// Rendering of timestamps in the details overlay.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Delay in milliseconds after launching the browser before the process may exit.
///
/// The rendered page lives in a temporary directory that is removed on exit;
/// the browser needs a moment to read it first.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;

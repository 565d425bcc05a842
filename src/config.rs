//! Build-time Configuration
//!
//! Values baked into the WASM bundle. Override with environment variables
//! when building, e.g. `BOSCOV_API_BASE=https://api.example.com trunk build`.

use log::LevelFilter;

const DEFAULT_API_BASE: &str = "http://localhost:3030";

/// How long success/error notices stay on screen
pub const NOTICE_DISMISS_MS: u32 = 2000;
/// Delay before a rating modal closes after a successful submit
pub const RATING_MODAL_CLOSE_MS: u32 = 1200;

/// Origin prepended to every API path
pub fn api_base() -> &'static str {
    option_env!("BOSCOV_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

pub fn log_level() -> LevelFilter {
    option_env!("BOSCOV_LOG")
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

pub mod fetch_utils;
pub mod http_client;
pub mod season_utils;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export fetch helpers
pub use fetch_utils::{ContentKind, fetch_json, fetch_json_value, fetch_text};
// Re-export season helpers
pub use season_utils::{current_season_year, resolve_season, season_year_at};

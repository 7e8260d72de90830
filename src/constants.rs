//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 20;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Browser-like User-Agent; several providers reject obvious bots
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Size of the normalization population (all Division I teams)
pub const POPULATION_SIZE: u32 = 365;

/// Number of entries in a top-25 poll
pub const POLL_SIZE: u32 = 25;

/// Ranking sizes used to decide whether a fetched list is plausible
pub mod thresholds {
    /// A full-ranking strategy must return more entries than this
    pub const MIN_FULL_RANKING_RESULTS: usize = 50;

    /// A poll strategy must return more entries than this
    pub const MIN_POLL_RESULTS: usize = 0;

    /// Smallest list accepted as the canonical roster
    pub const MIN_ROSTER_SIZE: usize = 20;

    /// Largest roster kept from the roster source
    pub const MAX_ROSTER_SIZE: usize = 365;
}

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// TTL for the aggregated rankings snapshot (4 hours)
    pub const RANKINGS_SECONDS: u64 = 4 * 60 * 60;
}

/// Per-strategy timeouts in seconds
pub mod strategy_timeout {
    /// Lightweight JSON APIs
    pub const JSON_API_SECONDS: u64 = 12;

    /// Regular HTML pages
    pub const HTML_PAGE_SECONDS: u64 = 20;

    /// Large pages such as the compare-rankings table
    pub const LARGE_PAGE_SECONDS: u64 = 25;

    /// Strategies probing several endpoints in a row
    pub const MULTI_ENDPOINT_SECONDS: u64 = 25;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "CBB_RANKINGS_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "CBB_RANKINGS_HTTP_TIMEOUT";

    /// Environment variable for rankings cache TTL override in seconds
    pub const CACHE_TTL: &str = "CBB_RANKINGS_CACHE_TTL";

    /// Environment variable for season year override
    pub const SEASON: &str = "CBB_RANKINGS_SEASON";
}

/// Retry configuration for transient HTTP failures
pub mod retry {
    /// Maximum number of retries after the first attempt
    pub const MAX_RETRIES: u32 = 2;

    /// Initial backoff between attempts (milliseconds), doubled every retry
    pub const BASE_DELAY_MS: u64 = 250;

    /// Upper bound for a server-provided Retry-After value (seconds)
    pub const MAX_RETRY_AFTER_SECONDS: u64 = 5;
}

/// Default provider base URLs
pub mod endpoints {
    pub const NCAA: &str = "https://www.ncaa.com";
    pub const NCAA_RATINGS: &str = "https://ratings.ncaa.com";
    pub const WARREN_NOLAN: &str = "https://warrennolan.com";
    pub const ESPN_SITE: &str = "https://site.api.espn.com";
    pub const TORVIK: &str = "https://barttorvik.com";
}

/// Terminal report defaults
pub mod report {
    /// Rows printed when `--top` is not given
    pub const DEFAULT_TOP_ROWS: usize = 50;

    /// Records shown per source in the diagnostics report
    pub const DIAGNOSTIC_SAMPLE_SIZE: usize = 3;
}

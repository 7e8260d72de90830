//! URL building utilities for ranking provider endpoints
//!
//! Every builder takes the provider base URL from configuration so tests can
//! point them at a mock server.

/// Referer sent to NCAA.com and ratings.ncaa.com
pub const NCAA_REFERER: &str = "https://www.ncaa.com/";
/// Referer sent to Warren Nolan pages
pub const WARREN_NOLAN_REFERER: &str = "https://warrennolan.com/";
/// Referer sent to ESPN site APIs
pub const ESPN_REFERER: &str = "https://www.espn.com/mens-college-basketball/";
/// Referer sent to barttorvik.com
pub const TORVIK_REFERER: &str = "https://barttorvik.com/";

/// Builds the NCAA.com NET rankings page URL.
///
/// # Example
/// ```
/// use cbb_rankings::data_fetcher::api::build_ncaa_net_url;
///
/// let url = build_ncaa_net_url("https://www.ncaa.com");
/// assert_eq!(
///     url,
///     "https://www.ncaa.com/rankings/basketball-men/d1/ncaa-mens-basketball-net-rankings"
/// );
/// ```
pub fn build_ncaa_net_url(ncaa: &str) -> String {
    format!("{ncaa}/rankings/basketball-men/d1/ncaa-mens-basketball-net-rankings")
}

/// Builds the NCAA.com poll page URL for a poll slug
/// (`associated-press` or `usa-today-coaches`).
///
/// # Example
/// ```
/// use cbb_rankings::data_fetcher::api::build_ncaa_poll_url;
///
/// let url = build_ncaa_poll_url("https://www.ncaa.com", "associated-press");
/// assert_eq!(url, "https://www.ncaa.com/rankings/basketball-men/d1/associated-press");
/// ```
pub fn build_ncaa_poll_url(ncaa: &str, poll_slug: &str) -> String {
    format!("{ncaa}/rankings/basketball-men/d1/{poll_slug}")
}

/// Builds the ratings.ncaa.com team rankings JSON URL.
///
/// The API picks the latest ranking period when week and year are blank.
pub fn build_ncaa_ratings_url(ncaa_ratings: &str) -> String {
    format!(
        "{ncaa_ratings}/national_team_rankings?week=&year=&ranking_period_id=&division_id=1&sport_code=MBB"
    )
}

/// Builds the Warren Nolan NET page URL for a season.
///
/// # Example
/// ```
/// use cbb_rankings::data_fetcher::api::build_warren_nolan_net_url;
///
/// let url = build_warren_nolan_net_url("https://warrennolan.com", 2025);
/// assert_eq!(url, "https://warrennolan.com/basketball/2025/net");
/// ```
pub fn build_warren_nolan_net_url(warren_nolan: &str, season: i32) -> String {
    format!("{warren_nolan}/basketball/{season}/net")
}

/// Builds the Warren Nolan compare-rankings page URL for a season.
///
/// # Example
/// ```
/// use cbb_rankings::data_fetcher::api::build_compare_rankings_url;
///
/// let url = build_compare_rankings_url("https://warrennolan.com", 2025);
/// assert_eq!(url, "https://warrennolan.com/basketball/2025/compare-rankings");
/// ```
pub fn build_compare_rankings_url(warren_nolan: &str, season: i32) -> String {
    format!("{warren_nolan}/basketball/{season}/compare-rankings")
}

/// ESPN endpoints that have carried BPI ranks at one time or another,
/// in the order they are tried.
pub fn build_espn_bpi_urls(espn_site: &str) -> Vec<String> {
    vec![
        format!(
            "{espn_site}/apis/site/v2/sports/basketball/mens-college-basketball/teams?limit=400&enable=bpi"
        ),
        format!("{espn_site}/apis/v2/sports/basketball/mens-college-basketball/bpi?limit=400"),
        format!("{espn_site}/apis/site/v2/sports/basketball/college-basketball/bpi?limit=200"),
    ]
}

/// Builds the ESPN poll rankings URL (AP and Coaches share one payload).
///
/// # Example
/// ```
/// use cbb_rankings::data_fetcher::api::build_espn_rankings_url;
///
/// let url = build_espn_rankings_url("https://site.api.espn.com");
/// assert_eq!(
///     url,
///     "https://site.api.espn.com/apis/site/v2/sports/basketball/mens-college-basketball/rankings"
/// );
/// ```
pub fn build_espn_rankings_url(espn_site: &str) -> String {
    format!("{espn_site}/apis/site/v2/sports/basketball/mens-college-basketball/rankings")
}

/// Builds the barttorvik JSON URL covering the whole season window
/// (November 1 of the previous year through May 1).
///
/// # Example
/// ```
/// use cbb_rankings::data_fetcher::api::build_torvik_json_url;
///
/// let url = build_torvik_json_url("https://barttorvik.com", 2025);
/// assert!(url.starts_with("https://barttorvik.com/getjson.php?year=2025&"));
/// assert!(url.contains("begin=20241101&end=20250501"));
/// ```
pub fn build_torvik_json_url(torvik: &str, season: i32) -> String {
    let previous = season - 1;
    format!(
        "{torvik}/getjson.php?year={season}&tvalue=100&conlimit=All&state=All&begin={previous}1101&end={season}0501&top=0&revquad=0&site=All&type=All&quad=5&sortby=2"
    )
}

/// Builds the barttorvik T-Rank HTML page URL
pub fn build_torvik_html_url(torvik: &str) -> String {
    format!("{torvik}/trank.php")
}

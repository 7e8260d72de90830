//! Season year detection

use chrono::{DateTime, Datelike, Local, Utc};

/// Season year used in provider URLs.
///
/// College basketball seasons are named after the year they end in. From
/// November onward the current season is next calendar year's.
pub fn current_season_year() -> i32 {
    let now = Utc::now().with_timezone(&Local);
    season_year_at(now)
}

/// Internal function that determines the season year for a given time.
/// This allows for testing with mocked current times.
pub fn season_year_at(current_time: DateTime<Local>) -> i32 {
    if current_time.month() >= 11 {
        current_time.year() + 1
    } else {
        current_time.year()
    }
}

/// Returns `override_season` when set, otherwise the derived season year
pub fn resolve_season(override_season: Option<i32>) -> i32 {
    override_season.unwrap_or_else(current_season_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(year: i32, month: u32, day: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .expect("valid local time")
    }

    #[test]
    fn test_season_year_rolls_over_in_november() {
        assert_eq!(season_year_at(local(2024, 10, 31)), 2024);
        assert_eq!(season_year_at(local(2024, 11, 1)), 2025);
        assert_eq!(season_year_at(local(2024, 12, 31)), 2025);
    }

    #[test]
    fn test_season_year_during_spring() {
        assert_eq!(season_year_at(local(2025, 1, 15)), 2025);
        assert_eq!(season_year_at(local(2025, 3, 20)), 2025);
        assert_eq!(season_year_at(local(2025, 7, 4)), 2025);
    }

    #[test]
    fn test_resolve_season_prefers_override() {
        assert_eq!(resolve_season(Some(2019)), 2019);
        assert!(resolve_season(None) >= 2024);
    }
}

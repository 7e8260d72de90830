use crossterm::style::Color;

use crate::data_fetcher::models::SourceStatus;

// Palette for the terminal report
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn muted_fg() -> Color {
    Color::AnsiValue(245)
} // Grey
pub fn score_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn warning_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red

pub fn status_fg(status: SourceStatus) -> Color {
    match status {
        SourceStatus::Success => subheader_fg(),
        SourceStatus::Error => error_fg(),
        SourceStatus::Pending => warning_fg(),
    }
}

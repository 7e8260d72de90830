//! Terminal report for rankings, diagnostics and alias audits

pub mod colors;
pub mod format;
pub mod render;

pub use render::{
    ReportOptions, render_diagnostics, render_no_data, render_rankings, render_stale_aliases,
};

//! HTML table helpers shared by the page-scraping strategies

use scraper::{ElementRef, Html, Selector};

use super::extract::collapse_whitespace;
use crate::error::AppError;

/// Parses a CSS selector, reporting failures as HTML parse errors
pub fn selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css).map_err(|e| AppError::html_parse(format!("bad selector '{css}': {e}"), css))
}

/// Text content of an element with whitespace collapsed
pub fn element_text(element: &ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Data cells of every `table tbody tr` row in the document
pub fn body_rows<'a>(document: &'a Html) -> Result<Vec<Vec<ElementRef<'a>>>, AppError> {
    rows_matching(document, "table tbody tr")
}

/// Data cells of every row matched by `row_css`; rows without `td` cells
/// are skipped
pub fn rows_matching<'a>(
    document: &'a Html,
    row_css: &str,
) -> Result<Vec<Vec<ElementRef<'a>>>, AppError> {
    let row_selector = selector(row_css)?;
    let cell_selector = selector("td")?;

    Ok(document
        .select(&row_selector)
        .map(|row| row.select(&cell_selector).collect::<Vec<_>>())
        .filter(|cells| !cells.is_empty())
        .collect())
}

/// Text of the first link inside `cell`, if any has text
pub fn first_link_text(cell: &ElementRef<'_>) -> Option<String> {
    let links = selector("a").ok()?;
    cell.select(&links)
        .map(|link| element_text(&link))
        .find(|text| !text.is_empty())
}

/// Text of the last link inside `cell`, if it has text
pub fn last_link_text(cell: &ElementRef<'_>) -> Option<String> {
    let links = selector("a").ok()?;
    cell.select(&links)
        .last()
        .map(|link| element_text(&link))
        .filter(|text| !text.is_empty())
}

/// Index of the first header cell (`table thead tr th`) whose text equals one
/// of `names`, compared case-insensitively
pub fn header_index(document: &Html, names: &[&str]) -> Result<Option<usize>, AppError> {
    let header_selector = selector("table thead tr th")?;
    let headers: Vec<String> = document
        .select(&header_selector)
        .map(|th| element_text(&th).to_lowercase())
        .collect();

    Ok(names.iter().find_map(|name| {
        let wanted = name.to_lowercase();
        headers.iter().position(|header| *header == wanted)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <table>
          <thead><tr><th>Team</th><th> NET </th><th>kenpom</th></tr></thead>
          <tbody>
            <tr><td><img/><a href="/a">logo</a> <a href="/b">Iowa
                 State</a></td><td>6</td><td>8</td></tr>
            <tr><td>Plain Name</td><td>7</td><td>9</td></tr>
            <tr><th>Not data</th></tr>
          </tbody>
        </table>"#;

    #[test]
    fn test_body_rows_skip_rows_without_cells() {
        let document = Html::parse_document(PAGE);
        let rows = body_rows(&document).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(element_text(&rows[1][0]), "Plain Name");
    }

    #[test]
    fn test_link_text_helpers() {
        let document = Html::parse_document(PAGE);
        let rows = body_rows(&document).unwrap();
        assert_eq!(first_link_text(&rows[0][0]).as_deref(), Some("logo"));
        assert_eq!(last_link_text(&rows[0][0]).as_deref(), Some("Iowa State"));
        assert_eq!(last_link_text(&rows[1][0]), None);
    }

    #[test]
    fn test_header_index_matches_aliases_case_insensitively() {
        let document = Html::parse_document(PAGE);
        assert_eq!(header_index(&document, &["NET"]).unwrap(), Some(1));
        assert_eq!(header_index(&document, &["POM", "KenPom"]).unwrap(), Some(2));
        assert_eq!(header_index(&document, &["BPI"]).unwrap(), None);
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        assert!(matches!(selector("td[["), Err(AppError::HtmlParse { .. })));
    }
}

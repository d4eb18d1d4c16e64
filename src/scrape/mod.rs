//! HTML extraction pipelines and the tree-navigation helpers they share.
//!
//! The upstream site has no stable ids, so each pipeline finds its data by
//! landmark: a headline matched by text prefix, the nearest `.box` container
//! around it, and the first table inside that. Field rules live behind named
//! accessor functions in the per-page modules so a layout change on the site
//! stays a one-accessor change here.

pub mod club_profile;
pub mod player_search;
pub mod team_search;

use scraper::{ElementRef, Html, Selector};

/// Locate the results table for a section headline.
///
/// Scans `h2.content-box-headline` elements for the first whose trimmed text
/// starts with `heading_prefix`, walks up to the nearest `.box` ancestor and
/// returns the first `table` inside it. `None` when the document has no such
/// section; an unparseable document simply has none.
pub(crate) fn landmark_table<'a>(
    document: &'a Html,
    heading_prefix: &str,
) -> Option<ElementRef<'a>> {
    let heading_selector = Selector::parse("h2.content-box-headline").unwrap();
    let table_selector = Selector::parse("table").unwrap();

    let heading = document
        .select(&heading_selector)
        .find(|h| text_of(*h).starts_with(heading_prefix))?;

    let container = heading
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| has_class(el, "box"))?;

    container.select(&table_selector).next()
}

/// Rows of a table's own `tbody`, skipping rows of tables nested inside cells.
pub(crate) fn body_rows<'a>(table: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    table
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "tbody")
        .flat_map(|tbody| tbody.children().filter_map(ElementRef::wrap))
        .filter(|el| el.value().name() == "tr")
        .collect()
}

/// Trimmed text content of an element and its descendants.
pub(crate) fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

pub(crate) fn has_class(element: &ElementRef, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// Text of the row's Nth cell carrying the centered-alignment class.
pub(crate) fn centered_cell(row: &ElementRef, index: usize) -> String {
    let selector = Selector::parse("td.zentriert").unwrap();
    row.select(&selector)
        .nth(index)
        .map(text_of)
        .unwrap_or_default()
}

/// Text of the row's last centered cell.
pub(crate) fn last_centered_cell(row: &ElementRef) -> String {
    let selector = Selector::parse("td.zentriert").unwrap();
    row.select(&selector).last().map(text_of).unwrap_or_default()
}

/// Text of the row's last right-aligned headline-link cell, where the site
/// puts market values.
pub(crate) fn last_value_cell(row: &ElementRef) -> String {
    let selector = Selector::parse("td.rechts.hauptlink").unwrap();
    row.select(&selector).last().map(text_of).unwrap_or_default()
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Prefix site-relative paths with the site root; absolute URLs pass through.
pub(crate) fn absolutize(base_url: &str, path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_table_found() {
        let html = r#"
            <div class="box">
                <h2 class="content-box-headline">Search results for players</h2>
                <div><table><tbody><tr><td>x</td></tr></tbody></table></div>
            </div>
        "#;
        let document = Html::parse_document(html);

        let table = landmark_table(&document, "Search results for players");
        assert!(table.is_some());
    }

    #[test]
    fn test_landmark_requires_matching_prefix() {
        let html = r#"
            <div class="box">
                <h2 class="content-box-headline">Search results: Clubs</h2>
                <table><tbody><tr><td>x</td></tr></tbody></table>
            </div>
        "#;
        let document = Html::parse_document(html);

        assert!(landmark_table(&document, "Search results for players").is_none());
    }

    #[test]
    fn test_landmark_requires_box_ancestor() {
        let html = r#"
            <div class="content">
                <h2 class="content-box-headline">Search results for players</h2>
                <table><tbody><tr><td>x</td></tr></tbody></table>
            </div>
        "#;
        let document = Html::parse_document(html);

        assert!(landmark_table(&document, "Search results for players").is_none());
    }

    #[test]
    fn test_landmark_on_garbage_input_is_none() {
        let document = Html::parse_document("not <markup <at all");
        assert!(landmark_table(&document, "Search results for players").is_none());
    }

    #[test]
    fn test_body_rows_skips_nested_tables() {
        let html = r#"
            <table id="outer"><tbody>
                <tr><td><table class="inline-table"><tbody>
                    <tr><td>nested</td></tr>
                    <tr><td>nested</td></tr>
                </tbody></table></td></tr>
                <tr><td>second</td></tr>
            </tbody></table>
        "#;
        let document = Html::parse_document(html);
        let selector = Selector::parse("table#outer").unwrap();
        let table = document.select(&selector).next().unwrap();

        assert_eq!(body_rows(&table).len(), 2);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  €1.2bn \n  Total value  "), "€1.2bn Total value");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_absolutize() {
        let base = "https://www.transfermarkt.com";
        assert_eq!(
            absolutize(base, "/images/crest.png"),
            "https://www.transfermarkt.com/images/crest.png"
        );
        assert_eq!(
            absolutize(base, "https://cdn.example.com/crest.png"),
            "https://cdn.example.com/crest.png"
        );
    }
}

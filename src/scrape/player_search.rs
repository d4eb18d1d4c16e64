//! Player rows from the quick-search results page.

use scraper::{ElementRef, Html, Selector};

use crate::scrape::{body_rows, centered_cell, landmark_table, last_value_cell, text_of};
use crate::SearchedPlayer;

/// Headline marking the player section of the search results page. The club
/// section uses a different wording; the two are not interchangeable.
const PLAYER_HEADING: &str = "Search results for players";

/// Extract every player row from a search results document.
///
/// A document without the player landmark (including a failed search or a
/// page the site restyled) yields an empty list, not an error. Rows missing
/// a name are skipped.
pub fn parse(html: &str) -> Vec<SearchedPlayer> {
    let document = Html::parse_document(html);

    let Some(table) = landmark_table(&document, PLAYER_HEADING) else {
        return Vec::new();
    };

    let mut players = Vec::new();
    for row in body_rows(&table) {
        let name = name(&row);
        if name.is_empty() {
            continue;
        }
        players.push(SearchedPlayer {
            name,
            nationality: nationalities(&row),
            age: centered_cell(&row, 2),
            club: club(&row),
            market_value: last_value_cell(&row),
        });
    }

    log::info!("Parsed {} player rows", players.len());
    players
}

/// Player name from the headline link of the nested inline table.
fn name(row: &ElementRef) -> String {
    let selector = Selector::parse("td table.inline-table td.hauptlink a").unwrap();
    row.select(&selector).next().map(text_of).unwrap_or_default()
}

/// Comma-joined flag titles from the nationality column (5th centered cell).
/// Flags without a title are left out rather than joined as blanks.
fn nationalities(row: &ElementRef) -> String {
    let cell_selector = Selector::parse("td.zentriert").unwrap();
    let flag_selector = Selector::parse("img.flaggenrahmen").unwrap();

    let Some(cell) = row.select(&cell_selector).nth(4) else {
        return String::new();
    };
    cell.select(&flag_selector)
        .filter_map(|img| img.value().attr("title"))
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Club label from the 2nd centered cell: the crest image title when present,
/// else the cell's own text.
fn club(row: &ElementRef) -> String {
    let cell_selector = Selector::parse("td.zentriert").unwrap();
    let img_selector = Selector::parse("img").unwrap();

    let Some(cell) = row.select(&cell_selector).nth(1) else {
        return String::new();
    };
    cell.select(&img_selector)
        .next()
        .and_then(|img| img.value().attr("title"))
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| text_of(cell))
}

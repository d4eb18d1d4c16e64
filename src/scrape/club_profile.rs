//! A club's profile page: header name, total market value, squad table.
//!
//! The profile page is reached directly by slug, so there is no landmark
//! heading to find; the squad lives in the page's `table.items`.

use scraper::{ElementRef, Html, Selector};

use crate::scrape::{body_rows, centered_cell, last_centered_cell, last_value_cell};
use crate::scrape::{collapse_whitespace, text_of};
use crate::{ClubProfile, SquadPlayer};

/// Extract the club profile plus squad from a profile document.
///
/// Header fields degrade to empty strings and a missing squad table to an
/// empty player list; the page never produces a not-found outcome.
pub fn parse(html: &str) -> ClubProfile {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table.items").unwrap();

    let mut players = Vec::new();
    if let Some(table) = document.select(&table_selector).next() {
        for row in body_rows(&table) {
            let name = player_name(&row);
            if name.is_empty() {
                continue;
            }
            players.push(SquadPlayer {
                name,
                nationality: nationality(&row),
                age: centered_cell(&row, 1),
                contract_end: last_centered_cell(&row),
                value: last_value_cell(&row),
            });
        }
    }

    log::info!("Parsed {} squad rows", players.len());

    ClubProfile {
        name: club_name(&document),
        total_market_value: total_market_value(&document),
        players,
    }
}

/// Club name from the tagged headline, else the first plain `h1`.
fn club_name(document: &Html) -> String {
    let tagged = Selector::parse(r#"h1[data-testid="headline"]"#).unwrap();
    let plain = Selector::parse("h1").unwrap();

    let name = document.select(&tagged).next().map(text_of).unwrap_or_default();
    if !name.is_empty() {
        return name;
    }
    document.select(&plain).next().map(text_of).unwrap_or_default()
}

/// Total market value. The site has shipped this in three different spots;
/// all three are tried in order and the first non-empty one wins.
fn total_market_value(document: &Html) -> String {
    let header_wrapper = Selector::parse("a.data-header__market-value-wrapper").unwrap();
    let viewport_scoped =
        Selector::parse(r#"div[data-viewport="Mannschaftswert"] .dataMarktwert"#).unwrap();
    let generic = Selector::parse("div.dataMarktwert").unwrap();

    let from_header = document
        .select(&header_wrapper)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default();
    if !from_header.is_empty() {
        return from_header;
    }

    for selector in [&viewport_scoped, &generic] {
        let value = document.select(selector).next().map(text_of).unwrap_or_default();
        if !value.is_empty() {
            return value;
        }
    }
    String::new()
}

/// Player name from the position+name column: first anchor with any text.
fn player_name(row: &ElementRef) -> String {
    let selector = Selector::parse("td.posrela a").unwrap();
    row.select(&selector)
        .map(text_of)
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

/// Country label from the first flag in the nationality column.
fn nationality(row: &ElementRef) -> String {
    let selector = Selector::parse("td.nat img").unwrap();
    row.select(&selector)
        .next()
        .and_then(|img| img.value().attr("title"))
        .map(|title| title.trim().to_string())
        .unwrap_or_default()
}

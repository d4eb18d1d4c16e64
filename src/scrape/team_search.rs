//! Club rows from the quick-search results page.

use scraper::{ElementRef, Html, Selector};

use crate::scrape::{absolutize, body_rows, landmark_table, text_of};
use crate::SearchedTeam;

/// Headline marking the club section of the search results page. Worded
/// differently from the player headline; matched as its own literal.
const CLUB_HEADING: &str = "Search results: Clubs";

/// Extract every club row from a search results document.
///
/// Rows lacking a name or a profile link are skipped. Whether an empty list
/// counts as "not found" is the caller's policy, not decided here.
pub fn parse(html: &str, base_url: &str) -> Vec<SearchedTeam> {
    let document = Html::parse_document(html);

    let Some(table) = landmark_table(&document, CLUB_HEADING) else {
        return Vec::new();
    };

    let mut teams = Vec::new();
    for row in body_rows(&table) {
        let Some((name, href)) = name_and_link(&row) else {
            continue;
        };
        teams.push(SearchedTeam {
            name,
            url: absolutize(base_url, &href),
            logo: logo(&row, base_url),
        });
    }

    log::info!("Parsed {} club rows", teams.len());
    teams
}

/// Club name and profile link from the second column's nested headline
/// anchor. Both are required.
fn name_and_link(row: &ElementRef) -> Option<(String, String)> {
    let selector = Selector::parse("td:nth-child(2) table.inline-table td.hauptlink a").unwrap();

    let anchor = row.select(&selector).next()?;
    let name = text_of(anchor);
    let href = anchor.value().attr("href").unwrap_or_default();
    if name.is_empty() || href.is_empty() {
        return None;
    }
    Some((name, href.to_string()))
}

/// Crest URL from the logo column, absolutized against the site root.
fn logo(row: &ElementRef, base_url: &str) -> Option<String> {
    let selector = Selector::parse("td.suche-vereinswappen img").unwrap();

    let src = row.select(&selector).next()?.value().attr("src")?;
    if src.is_empty() {
        return None;
    }
    Some(absolutize(base_url, src))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.transfermarkt.com";

    fn team_row(crest: &str, anchor: &str) -> String {
        format!(
            r#"<tr>
                <td class="suche-vereinswappen">{crest}</td>
                <td>
                    <table class="inline-table">
                        <tr><td class="hauptlink">{anchor}</td></tr>
                        <tr><td>Premier League</td></tr>
                    </table>
                </td>
                <td class="zentriert">England</td>
            </tr>"#
        )
    }

    fn search_page(rows: &str) -> String {
        format!(
            r#"<html><body>
                <div class="box">
                    <h2 class="content-box-headline">Search results: Clubs</h2>
                    <table class="items"><tbody>{rows}</tbody></table>
                </div>
            </body></html>"#
        )
    }

    #[test]
    fn test_parse_club_row() {
        let rows = team_row(
            r#"<img src="/images/wappen/arsenal.png">"#,
            r#"<a href="/arsenal-fc/startseite/verein/11">Arsenal FC</a>"#,
        );

        let teams = parse(&search_page(&rows), BASE);

        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name, "Arsenal FC");
        assert_eq!(teams[0].url, format!("{BASE}/arsenal-fc/startseite/verein/11"));
        assert_eq!(
            teams[0].logo.as_deref(),
            Some("https://www.transfermarkt.com/images/wappen/arsenal.png")
        );
    }

    #[test]
    fn test_absolute_crest_passes_through() {
        let rows = team_row(
            r#"<img src="https://cdn.example.com/crest.png">"#,
            r#"<a href="/x/startseite/verein/9">Some FC</a>"#,
        );

        let teams = parse(&search_page(&rows), BASE);

        assert_eq!(teams[0].logo.as_deref(), Some("https://cdn.example.com/crest.png"));
    }

    #[test]
    fn test_missing_crest_yields_no_logo() {
        let rows = team_row("", r#"<a href="/x/startseite/verein/9">Some FC</a>"#);

        let teams = parse(&search_page(&rows), BASE);

        assert_eq!(teams[0].logo, None);
    }

    #[test]
    fn test_rows_without_link_or_name_are_dropped() {
        let rows = format!(
            "{}{}{}",
            team_row(r#"<img src="/a.png">"#, "<a>No Href FC</a>"),
            team_row(r#"<img src="/b.png">"#, r#"<a href="/kept/startseite/verein/1">Kept FC</a>"#),
            team_row(r#"<img src="/c.png">"#, r#"<a href="/nameless/startseite/verein/2"></a>"#),
        );

        let teams = parse(&search_page(&rows), BASE);

        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name, "Kept FC");
    }

    #[test]
    fn test_missing_landmark_yields_empty() {
        assert!(parse("<html><body><p>nothing</p></body></html>", BASE).is_empty());
    }
}

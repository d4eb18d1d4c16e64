//! The three query pipelines: validate, fetch, extract, reply.
//!
//! Replies are transport-agnostic: an HTTP-equivalent status code plus a JSON
//! body, ready for whatever surface dispatches the query. The empty-result
//! policy differs per pipeline and is kept that way on purpose: player search
//! answers an empty array with 200, club search answers 404.

use reqwest::Url;
use serde_json::{json, Value};

use crate::fetch::PageFetcher;
use crate::scrape;
use crate::{Config, MercatoError, Result, SearchedPlayer, SearchedTeam};

/// HTTP-equivalent reply: status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    fn ok(body: Value) -> Self {
        Reply { status: 200, body }
    }

    fn error(status: u16, message: &str) -> Self {
        Reply {
            status,
            body: json!({ "error": message }),
        }
    }
}

/// Search players by name.
///
/// A blank query is rejected before any fetch. A document with no player
/// section is a valid empty result, not a failure.
pub fn search_players(fetcher: &dyn PageFetcher, config: &Config, query: &str) -> Reply {
    match player_results(fetcher, config, query) {
        Ok(players) => Reply::ok(json!(players)),
        Err(MercatoError::MissingQuery) => Reply::error(400, "Missing query"),
        Err(e) => {
            log::error!("Player search failed: {}", e);
            Reply::error(500, "Failed to fetch player data.")
        }
    }
}

/// Search clubs by name.
///
/// A blank name is rejected before any fetch. Unlike player search, an empty
/// result set is reported as not found.
pub fn search_teams(fetcher: &dyn PageFetcher, config: &Config, name: &str) -> Reply {
    match team_results(fetcher, config, name) {
        Ok(teams) if teams.is_empty() => Reply::error(404, "No teams found on Transfermarkt."),
        Ok(teams) => Reply::ok(json!(teams)),
        Err(MercatoError::MissingQuery) => Reply::error(400, "Missing query"),
        Err(e) => {
            log::error!("Team search failed: {}", e);
            Reply::error(500, "Failed to fetch team data.")
        }
    }
}

/// Fetch a club's profile page by slug and extract header plus squad.
///
/// Never answers not-found: a club without a squad table is still a profile,
/// just with an empty player list.
pub fn club_profile(fetcher: &dyn PageFetcher, config: &Config, slug: &str) -> Reply {
    let url = format!(
        "{}/{}",
        config.base_url.trim_end_matches('/'),
        slug.trim_start_matches('/')
    );

    match fetcher.fetch(&url) {
        Ok(html) => Reply::ok(json!(scrape::club_profile::parse(&html))),
        Err(e) => {
            log::error!("Club profile fetch failed: {}", e);
            Reply::error(500, "Failed to fetch club data.")
        }
    }
}

fn player_results(
    fetcher: &dyn PageFetcher,
    config: &Config,
    query: &str,
) -> Result<Vec<SearchedPlayer>> {
    if query.trim().is_empty() {
        return Err(MercatoError::MissingQuery);
    }
    let html = fetcher.fetch(&search_url(config, query)?)?;
    Ok(scrape::player_search::parse(&html))
}

fn team_results(
    fetcher: &dyn PageFetcher,
    config: &Config,
    name: &str,
) -> Result<Vec<SearchedTeam>> {
    if name.trim().is_empty() {
        return Err(MercatoError::MissingQuery);
    }
    let html = fetcher.fetch(&search_url(config, name)?)?;
    Ok(scrape::team_search::parse(&html, &config.base_url))
}

/// Quick-search URL with the query percent-encoded.
fn search_url(config: &Config, query: &str) -> Result<String> {
    let endpoint = format!(
        "{}/schnellsuche/ergebnis/schnellsuche",
        config.base_url.trim_end_matches('/')
    );
    let url = Url::parse_with_params(&endpoint, &[("query", query)])
        .map_err(|e| MercatoError::Url(e.to_string()))?;
    Ok(url.to_string())
}

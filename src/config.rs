//! Scrape configuration
//!
//! The deployment targets a single published division/season page. The
//! endpoint, table selectors, and header mapping live here rather than as
//! inline literals so tests can point the pipeline at fixture HTML and a
//! local fixture server.

use std::collections::HashMap;

use url::Url;

use crate::extraction::headers::default_header_map;

/// The published standings page for the configured division and season.
pub const DEFAULT_SOURCE_URL: &str =
    "https://football.mitoo.co.uk/LeagueTab.cfm?TblName=Matches&DivisionID=856&LeagueCode=MHRML2025";

/// Row selector for the league table as published.
pub const LEAGUE_TABLE_ROWS: &str = "table.leagueTable tr";

/// Lenient row selector used when the targeted table is absent.
pub const FALLBACK_ROWS: &str = "tr";

/// Configuration for the fetch-and-extract pipeline.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Standings page to fetch. No caller-supplied parameters are ever
    /// appended to this URL.
    pub source: Url,
    /// Selector matching the rows of the league table.
    pub table_rows_selector: String,
    /// Selector used when `table_rows_selector` matches nothing.
    pub fallback_rows_selector: String,
    /// Exact-match header label → short code mapping.
    pub header_map: HashMap<String, String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            source: Url::parse(DEFAULT_SOURCE_URL).expect("default source URL is valid"),
            table_rows_selector: LEAGUE_TABLE_ROWS.to_string(),
            fallback_rows_selector: FALLBACK_ROWS.to_string(),
            header_map: default_header_map(),
        }
    }
}

impl ScrapeConfig {
    /// Create a configuration with the production defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the source URL, keeping everything else.
    pub fn with_source(mut self, source: Url) -> Self {
        self.source = source;
        self
    }
}

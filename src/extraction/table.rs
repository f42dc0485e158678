//! League-table extraction
//!
//! Locates the standings table in a fetched document and converts it to a
//! matrix of trimmed text cells. The first surviving row is the header and
//! is run through the label mapping; spacer rows with no cells are dropped.

use std::collections::HashMap;

use scraper::{Html, Selector};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::config::ScrapeConfig;
use crate::error::{ExtractionError, Result};
use crate::extraction::headers::normalize_label;
use crate::extraction::text::CellTextPipeline;

/// One extracted row of trimmed cell texts.
pub type RawRow = Vec<String>;

/// The extracted table: header row first (labels already normalized), data
/// rows after, plus a name→index map over the header built once so column
/// lookups don't rescan the header.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawTable {
    /// Header row first, then data rows, in document order.
    pub rows: Vec<RawRow>,
    #[serde(skip)]
    column_index: HashMap<String, usize>,
}

impl RawTable {
    /// Build a table from extracted rows, indexing the header.
    ///
    /// When two columns share a label the first keeps the index, matching
    /// a left-to-right header scan.
    pub fn new(rows: Vec<RawRow>) -> Self {
        let column_index = rows
            .first()
            .map(|header| {
                let mut index = HashMap::with_capacity(header.len());
                for (i, label) in header.iter().enumerate() {
                    index.entry(label.clone()).or_insert(i);
                }
                index
            })
            .unwrap_or_default();
        Self { rows, column_index }
    }

    /// Whether nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The normalized header row, if any row was extracted.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// All rows after the header.
    pub fn data_rows(&self) -> &[RawRow] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Index of the column whose normalized header matches `name` exactly.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.column_index.get(name).copied()
    }

    /// Index of the first column whose header contains `needle`,
    /// case-insensitively.
    pub fn column_containing(&self, needle: &str) -> Option<usize> {
        let needle = needle.to_lowercase();
        self.header()?
            .iter()
            .position(|label| label.to_lowercase().contains(&needle))
    }
}

/// Extracts the standings table from raw HTML.
pub struct TableExtractor {
    config: ScrapeConfig,
    text: CellTextPipeline,
}

impl TableExtractor {
    /// Create an extractor for the given configuration.
    pub fn new(config: ScrapeConfig) -> Self {
        Self {
            config,
            text: CellTextPipeline::new(),
        }
    }

    /// Extract the league table from a full HTML document.
    ///
    /// Rows come from the configured table selector, or from the lenient
    /// fallback selector when the page carries no such table. Header and
    /// data cells are taken in document order; rows with no cells at all
    /// are dropped before the header/data split.
    #[instrument(skip_all)]
    pub fn extract(&self, html: &str) -> Result<RawTable> {
        let document = Html::parse_document(html);
        let cell_selector = parse_selector("th, td")?;

        let primary = parse_selector(&self.config.table_rows_selector)?;
        let mut row_elements: Vec<_> = document.select(&primary).collect();
        if row_elements.is_empty() {
            debug!(
                selector = %self.config.table_rows_selector,
                "target table absent, using fallback row selector"
            );
            let fallback = parse_selector(&self.config.fallback_rows_selector)?;
            row_elements = document.select(&fallback).collect();
        }

        let mut rows: Vec<RawRow> = Vec::new();
        for row in row_elements {
            let cells: RawRow = row
                .select(&cell_selector)
                .map(|cell| self.text.cell_text(&cell.inner_html()))
                .collect();
            if cells.is_empty() {
                continue;
            }
            if rows.is_empty() {
                rows.push(
                    cells
                        .into_iter()
                        .map(|label| normalize_label(&self.config.header_map, &label))
                        .collect(),
                );
            } else {
                rows.push(cells);
            }
        }

        if rows.is_empty() {
            warn!("no table rows extracted from document");
        } else {
            debug!(rows = rows.len(), "extracted league table");
        }
        Ok(RawTable::new(rows))
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ExtractionError::InvalidSelector(format!("{css}: {e}")).into())
}

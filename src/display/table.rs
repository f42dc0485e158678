//! Display normalization
//!
//! Derives the table actually shown from the extracted rows: header
//! rename/merge, goals-for/against merged into one `+/-` column, team-name
//! cleanup, and position-based row classification.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::display::stripe::{classify, StripeClass};
use crate::display::team::TeamNameCleaner;
use crate::extraction::RawTable;

/// Column indices the display transforms key on.
///
/// Resolution is by normalized header name, never by fixed index, since
/// the published column order and wording shift between seasons. Position
/// falls back to column 0, where the league conventionally prints it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Team name column, matched loosely ("Team", "13 Teams").
    pub team: Option<usize>,
    /// "GF" column, exact match.
    pub goals_for: Option<usize>,
    /// "GA" column, exact match.
    pub goals_against: Option<usize>,
    /// Position column, defaulting to 0.
    pub position: usize,
}

impl ColumnLayout {
    /// Resolve columns against the table's normalized header.
    pub fn resolve(table: &RawTable) -> Self {
        Self {
            team: table.column_containing("team"),
            goals_for: table.column("GF"),
            goals_against: table.column("GA"),
            position: table
                .column_containing("pos")
                .or_else(|| table.column("Position"))
                .unwrap_or(0),
        }
    }

    /// The GF/GA pair, present only when both columns resolved.
    fn merged_goals(&self) -> Option<(usize, usize)> {
        self.goals_for.zip(self.goals_against)
    }
}

/// One display row: rendered cells plus the row's highlight zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    /// Rendered cells, goals-against omitted when merged.
    pub cells: Vec<String>,
    /// Highlight zone, absent for mid-table rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe: Option<StripeClass>,
}

/// The normalized table actually shown.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayTable {
    /// Derived headers, dropped columns excluded, original order kept.
    pub headers: Vec<String>,
    /// Data rows in published order; no re-sorting is applied.
    pub rows: Vec<DisplayRow>,
    /// When the source page was fetched and normalized.
    pub fetched_at: DateTime<Utc>,
}

/// Derives display tables from extracted rows.
pub struct Normalizer {
    cleaner: TeamNameCleaner,
}

impl Normalizer {
    /// Create a normalizer with the default age-tag patterns.
    pub fn new() -> Self {
        Self {
            cleaner: TeamNameCleaner::new(),
        }
    }

    /// Derive the display table.
    ///
    /// Column-dependent transforms (goal merge, team cleanup, position
    /// stripes) each apply only where their columns resolve; a table
    /// missing them still renders as-is.
    #[instrument(skip_all)]
    pub fn normalize(&self, table: &RawTable) -> DisplayTable {
        let layout = ColumnLayout::resolve(table);
        let headers = display_headers(table, &layout);
        let data = table.data_rows();
        let total = data.len();
        let rows = data
            .iter()
            .map(|row| self.display_row(row, &layout, total))
            .collect();
        debug!(columns = headers.len(), rows = total, "normalized display table");
        DisplayTable {
            headers,
            rows,
            fetched_at: Utc::now(),
        }
    }

    fn display_row(&self, row: &[String], layout: &ColumnLayout, total_rows: usize) -> DisplayRow {
        let position = row
            .get(layout.position)
            .and_then(|cell| cell.trim().parse::<i64>().ok());
        let stripe = classify(position, total_rows);
        let merged = layout.merged_goals();

        let cells = row
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| {
                if let Some((gf, ga)) = merged {
                    if i == ga {
                        return None;
                    }
                    if i == gf {
                        // Short rows keep their cell rather than merging
                        // against a column they don't have.
                        return match row.get(ga) {
                            Some(against) => Some(format!("{cell}-{against}")),
                            None => Some(cell.clone()),
                        };
                    }
                }
                if Some(i) == layout.team {
                    return Some(self.cleaner.clean(cell));
                }
                Some(cell.clone())
            })
            .collect();

        DisplayRow { cells, stripe }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive display headers in header order, excluding dropped entries.
fn display_headers(table: &RawTable, layout: &ColumnLayout) -> Vec<String> {
    let Some(header) = table.header() else {
        return Vec::new();
    };
    let merged = layout.merged_goals();
    header
        .iter()
        .enumerate()
        .filter_map(|(i, label)| {
            if let Some((gf, ga)) = merged {
                if i == gf {
                    return Some("+/-".to_string());
                }
                if i == ga {
                    return None;
                }
            }
            if is_team_label(label) {
                return Some("Team".to_string());
            }
            if is_position_label(label) {
                return Some("#".to_string());
            }
            Some(label.clone())
        })
        .collect()
}

/// "Team", "Team Name", "13 Teams" all count as the team column.
fn is_team_label(label: &str) -> bool {
    label.to_lowercase().contains("team")
}

/// "Pos", "Position", "Pos." all count as the position column.
fn is_position_label(label: &str) -> bool {
    label.to_lowercase().contains("pos") || label == "Position"
}

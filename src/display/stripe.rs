//! Position-based row classification
//!
//! Derives a row's highlight zone from its numeric league position.

use serde::{Deserialize, Serialize};

/// Highlight zone for a data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StripeClass {
    /// League leader (position 1).
    Leader,
    /// Promotion/playoff places (positions 2 and 3).
    Promotion,
    /// Bottom two positions.
    Relegation,
}

/// Classify a row by numeric position.
///
/// Checks run leader → promotion → relegation and the first match wins,
/// which also settles overlap in short tables: with two teams, position 2
/// is promotion, not relegation. `total_rows` counts data rows, header
/// excluded. `None` positions (unparseable cell) get no zone.
pub fn classify(position: Option<i64>, total_rows: usize) -> Option<StripeClass> {
    let position = position?;
    if position == 1 {
        Some(StripeClass::Leader)
    } else if position == 2 || position == 3 {
        Some(StripeClass::Promotion)
    } else if position >= total_rows as i64 - 1 {
        Some(StripeClass::Relegation)
    } else {
        None
    }
}

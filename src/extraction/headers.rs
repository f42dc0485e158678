//! Header label normalization
//!
//! The published table uses long-form column labels whose wording varies
//! between seasons ("Games Played" vs "Played"). A fixed exact-match table
//! maps them to the short codes the rest of the pipeline keys on; anything
//! unrecognized passes through unchanged.

use std::collections::HashMap;

/// Long-form label → short code pairs for the league table header.
pub const HEADER_LABELS: &[(&str, &str)] = &[
    ("Position", "Pos"),
    ("Team Name", "Team"),
    ("Games Played", "Pl"),
    ("Played", "Pl"),
    ("Games Won", "W"),
    ("Won", "W"),
    ("Games Drawn", "D"),
    ("Drawn", "D"),
    ("Games Lost", "L"),
    ("Lost", "L"),
    ("Goals For", "GF"),
    ("Goals Against", "GA"),
    ("Goal Difference", "GD"),
    ("Points", "Pts"),
];

/// Build the default header mapping as an owned lookup table.
pub fn default_header_map() -> HashMap<String, String> {
    HEADER_LABELS
        .iter()
        .map(|&(long, short)| (long.to_string(), short.to_string()))
        .collect()
}

/// Map one header label. Exact and case-sensitive; unmapped labels pass
/// through unchanged.
pub fn normalize_label(map: &HashMap<String, String>, label: &str) -> String {
    map.get(label)
        .cloned()
        .unwrap_or_else(|| label.to_string())
}

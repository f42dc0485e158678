//! Per-cell text extraction
//!
//! Cells arrive as inner HTML fragments. Line-break tags are replaced with
//! spaces *before* the remaining markup is stripped, so text split across a
//! `<br>` keeps its word boundary. Entities are then decoded and whitespace
//! collapsed.

use regex::Regex;

/// Compiled patterns for turning a cell's inner HTML into trimmed text.
#[derive(Debug, Clone)]
pub struct CellTextPipeline {
    line_break: Regex,
    tag: Regex,
    whitespace: Regex,
}

impl CellTextPipeline {
    /// Compile the pipeline's patterns.
    pub fn new() -> Self {
        Self {
            // <br>, <br/>, <BR /> and friends
            line_break: Regex::new(r"(?i)<br\s*/?>").unwrap(),
            tag: Regex::new(r"<[^>]+>").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Convert one cell's inner HTML to trimmed plain text.
    pub fn cell_text(&self, inner_html: &str) -> String {
        let spaced = self.line_break.replace_all(inner_html, " ");
        let stripped = self.tag.replace_all(&spaced, "");
        let decoded = decode_entities(&stripped);
        self.normalize_whitespace(&decoded)
    }

    /// Collapse whitespace runs to single spaces and trim. Idempotent.
    pub fn normalize_whitespace(&self, text: &str) -> String {
        self.whitespace.replace_all(text, " ").trim().to_string()
    }
}

impl Default for CellTextPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode HTML entities, keeping the raw text when decoding fails.
fn decode_entities(text: &str) -> String {
    htmlescape::decode_html(text).unwrap_or_else(|_| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_break_becomes_space() {
        let pipeline = CellTextPipeline::new();
        assert_eq!(pipeline.cell_text("Alpha<br>FC"), "Alpha FC");
        assert_eq!(pipeline.cell_text("Alpha<br/>FC"), "Alpha FC");
        assert_eq!(pipeline.cell_text("Alpha<BR />FC"), "Alpha FC");
    }

    #[test]
    fn test_strips_inline_markup() {
        let pipeline = CellTextPipeline::new();
        assert_eq!(pipeline.cell_text("<b>Oakwood</b> <i>FC</i>"), "Oakwood FC");
        assert_eq!(pipeline.cell_text("<a href=\"/team/12\">Riverside</a>"), "Riverside");
    }

    #[test]
    fn test_decodes_entities() {
        let pipeline = CellTextPipeline::new();
        assert_eq!(pipeline.cell_text("Town&nbsp;Colts"), "Town Colts");
        assert_eq!(pipeline.cell_text("A &amp; B"), "A & B");
    }

    #[test]
    fn test_collapses_whitespace() {
        let pipeline = CellTextPipeline::new();
        assert_eq!(pipeline.cell_text("  Hill \n\t Rovers  "), "Hill Rovers");
    }

    #[test]
    fn test_whitespace_normalization_idempotent() {
        let pipeline = CellTextPipeline::new();
        let once = pipeline.normalize_whitespace("  a \n b\t\tc ");
        let twice = pipeline.normalize_whitespace(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "a b c");
    }

    #[test]
    fn test_empty_cell() {
        let pipeline = CellTextPipeline::new();
        assert_eq!(pipeline.cell_text(""), "");
        assert_eq!(pipeline.cell_text("<br>"), "");
        assert_eq!(pipeline.cell_text("&nbsp;"), "");
    }
}

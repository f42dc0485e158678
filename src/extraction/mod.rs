//! Table extraction module
//!
//! This module turns the fetched standings page into a matrix of trimmed
//! text cells: per-cell text extraction, header label normalization, and
//! the row/column table structure.

pub mod headers;
pub mod table;
pub mod text;

pub use table::{RawRow, RawTable, TableExtractor};
pub use text::CellTextPipeline;

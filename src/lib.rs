//! Standings Web - League Table Scrape-and-Serve Pipeline
//!
//! This crate fetches the published HTML standings page for a youth
//! football league, extracts the league table, and serves it as JSON in
//! both raw and display-normalized forms.
//!
//! # Architecture
//!
//! ```text
//! Source Page ──▶ PageSource (reqwest) ──▶ TableExtractor ──▶ RawTable
//!                                                                │
//!                           Normalizer ◀────────────────────────┘
//!                                │
//!                                ▼
//!                 DisplayTable (merged goals, cleaned names,
//!                               position highlight zones)
//! ```
//!
//! Data flows one way: raw markup → row/cell matrix → normalized display
//! matrix. Nothing is persisted; every request re-fetches and re-parses.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use standings_web::{Normalizer, ScrapeConfig, TableExtractor};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let html = std::fs::read_to_string("table.html")?;
//!
//!     let extractor = TableExtractor::new(ScrapeConfig::default());
//!     let table = extractor.extract(&html)?;
//!     let display = Normalizer::new().normalize(&table);
//!
//!     println!("{}", serde_json::to_string_pretty(&display)?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod display;
pub mod error;
pub mod extraction;
pub mod fetch;
pub mod handlers;

// Re-exports for convenience
pub use config::ScrapeConfig;
pub use display::{DisplayRow, DisplayTable, Normalizer, StripeClass};
pub use error::{Error, Result};
pub use extraction::{RawTable, TableExtractor};
pub use fetch::{HttpSource, PageSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

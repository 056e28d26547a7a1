//! gettext-stats - translation completeness report for gettext catalogs
//!
//! Runs `msgfmt --statistics` on every PO file under a directory, parses the
//! counts msgfmt prints, and reports them per locale.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `locale`: Locale identifiers derived from catalog file names
//! - `render`: Text, JSON and HTML report output
//! - `scanner`: Catalog file discovery
//! - `stats`: Statistics collection, parsing and aggregation
//! - `tool`: The msgfmt subprocess runner

pub mod cli;
pub mod config;
pub mod locale;
pub mod render;
pub mod scanner;
pub mod stats;
pub mod tool;

//! Report renderers.
//!
//! Each renderer writes the locale-sorted view of [`Stats`] to any writer, so
//! the library can be used without printing side effects.

pub mod html;
pub mod json;
pub mod text;

use std::io::{self, Write};

use clap::ValueEnum;

use crate::stats::Stats;

/// Output format of the `report` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
    Html,
}

pub fn render_to<W: Write>(stats: &Stats, format: Format, writer: &mut W) -> io::Result<()> {
    match format {
        Format::Text => text::render_to(stats, writer),
        Format::Json => json::render_to(stats, writer),
        Format::Html => html::render_to(stats, writer),
    }
}

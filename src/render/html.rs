//! Standalone HTML report page, rendered from the same DTOs as the JSON output.

use std::io::{self, Write};

use tera::{Context, Tera};

use super::json::ReportDto;
use crate::stats::Stats;

pub const TITLE: &str = "Gettext Statistics Report";

const TEMPLATE_NAME: &str = "report.html";
const TEMPLATE: &str = include_str!("templates/report.html");

/// Render the page into a string. Values are HTML-escaped by the template engine.
fn render(stats: &Stats) -> tera::Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;

    let report = ReportDto::from(stats);
    let mut context = Context::new();
    context.insert("title", TITLE);
    context.insert("catalogs", &report.catalogs);
    tera.render(TEMPLATE_NAME, &context)
}

pub fn render_to<W: Write>(stats: &Stats, writer: &mut W) -> io::Result<()> {
    let page = render(stats).map_err(io::Error::other)?;
    writer.write_all(page.as_bytes())
}

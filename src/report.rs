use std::fmt::Write as _;
use std::io::{self, Write};

use crate::models::HashReport;

pub const HEADER_BANNER: &str = "=== Password Hash Generator ===";
pub const FOOTER_BANNER: &str = "=== End ===";

/// Renders the full stdout block for `report`.
pub fn render(report: &HashReport) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(text, "\n{}", HEADER_BANNER);
    let _ = writeln!(text, "Password: {}", report.password);
    let _ = writeln!(text, "Hash: {}", report.hash);
    let _ = writeln!(text, "\nSQL Update Command:");
    let _ = writeln!(text, "{}", report.sql_update());
    let _ = writeln!(text, "\n{}\n", FOOTER_BANNER);
    text
}

/// Writes the rendered report in one call and flushes.
pub fn write_report<W: Write>(out: &mut W, report: &HashReport) -> io::Result<()> {
    out.write_all(render(report).as_bytes())?;
    out.flush()
}

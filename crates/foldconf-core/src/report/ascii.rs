use super::ReportError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Replaces decorative glyphs with ASCII equivalents; any other non-ASCII character becomes `?`.
pub fn to_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2192}' => out.push_str("->"),
            '\u{2713}' | '\u{2714}' => out.push_str("[OK]"),
            '\u{2717}' | '\u{2718}' => out.push_str("[X]"),
            '\u{00B1}' => out.push_str("+/-"),
            '\u{26A0}' => out.push_str("[!]"),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            c if c.is_ascii() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// Writes the ASCII rendition of `report` to `path`, replacing any existing file.
pub fn write_report(report: &str, path: &Path) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|e| ReportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(to_ascii(report).as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| ReportError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    info!("Report written to {}", path.display());
    Ok(())
}

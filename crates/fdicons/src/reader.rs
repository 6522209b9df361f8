//! Sectioned key/value file reading.
//!
//! Both `index.theme` files and the theme preference files are INI-style
//! documents. This module parses them with `rust-ini` and hands every entry to
//! a callback as a `(section, key, value)` triple, in file order.
//!
//! Reading is lenient. Invalid UTF-8 is replaced, and a line `rust-ini`
//! rejects is logged and skipped while the rest of the file is still read.
//! A section is parsed in one go when it is well formed and line by line
//! when it is not.

use std::fs;
use std::path::Path;

use ini::{Ini, ParseOption};

use crate::error::{Error, Result};
use crate::targets;

/// Parse options shared by every file we read.
///
/// Backslashes and quotes are kept verbatim; theme files never use either
/// as syntax.
fn parse_options() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

fn is_section_header(line: &str) -> bool {
    line.trim_start().starts_with('[')
}

/// Invoke `on_entry` for every keyed entry of a parsed fragment.
///
/// Keys that appear before the first section header are skipped.
fn for_each_entry<F>(ini: &Ini, on_entry: &mut F)
where
    F: FnMut(&str, &str, &str),
{
    for (section, props) in ini.iter() {
        let Some(section) = section else {
            continue;
        };
        for (key, value) in props.iter() {
            on_entry(section, key, value);
        }
    }
}

/// Record a line `rust-ini` refused.
fn skipped_line(path: &Path, number: usize, line: &str, err: ini::Error) -> Error {
    let reason = match err {
        ini::Error::Parse(e) => e.msg.to_string(),
        ini::Error::Io(e) => e.to_string(),
    };
    let err = Error::parse(path, format!("line {number}: {reason}: '{}'", line.trim()));
    tracing::warn!(target: targets::READER, "Skipping {}", err);
    err
}

/// Parse `text`, the contents of the file at `path`.
///
/// `on_entry` is invoked once per entry, in file order. Returns the lines that
/// were skipped, as [`Error::Parse`] values; each has already been logged.
pub fn parse_entries<F>(path: &Path, text: &str, mut on_entry: F) -> Vec<Error>
where
    F: FnMut(&str, &str, &str),
{
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.lines().collect();
    let mut skipped = Vec::new();
    // Last header that parsed; lines under a broken header stay in the
    // section before it.
    let mut header: Option<&str> = None;

    let mut start = 0;
    while start < lines.len() {
        let end = (start + 1..lines.len())
            .find(|&i| is_section_header(lines[i]))
            .unwrap_or(lines.len());

        let mut body = start;
        if is_section_header(lines[start]) {
            body += 1;
            match Ini::load_from_str_opt(lines[start], parse_options()) {
                Ok(_) => header = Some(lines[start]),
                Err(e) => skipped.push(skipped_line(path, start + 1, lines[start], ini::Error::Parse(e))),
            }
        }

        let prefix = header.unwrap_or("");
        let chunk = format!("{prefix}\n{}", lines[body..end].join("\n"));
        match Ini::load_from_str_opt(&chunk, parse_options()) {
            Ok(ini) => for_each_entry(&ini, &mut on_entry),
            Err(_) => {
                for (offset, line) in lines[body..end].iter().enumerate() {
                    match Ini::load_from_str_opt(&format!("{prefix}\n{line}"), parse_options()) {
                        Ok(ini) => for_each_entry(&ini, &mut on_entry),
                        Err(e) => skipped.push(skipped_line(path, body + offset + 1, line, ini::Error::Parse(e))),
                    }
                }
            }
        }

        start = end;
    }

    skipped
}

/// Read the file at `path`, invoking `on_entry` once per entry.
///
/// Only failing to read the file is an error. Lines that do not parse are
/// skipped and returned, see [`parse_entries`].
pub fn read_entries<F>(path: &Path, on_entry: F) -> Result<Vec<Error>>
where
    F: FnMut(&str, &str, &str),
{
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(parse_entries(path, &text, on_entry))
}

/// Read a single value from the file at `path`.
///
/// Returns `Ok(None)` when the file exists but lacks the key. If the key is
/// repeated, the last occurrence wins.
pub fn read_value(path: &Path, section: &str, key: &str) -> Result<Option<String>> {
    let mut found = None;
    read_entries(path, |sec, k, value| {
        if sec == section && k == key {
            found = Some(value.to_string());
        }
    })?;
    Ok(found)
}

//! `index.theme` interpretation.
//!
//! The parser is fed one `(section, key, value)` entry at a time and fills in
//! a [`Theme`]. The `[Icon Theme]` section describes the theme itself; every
//! other section describes one icon directory, created the first time one of
//! its keys is seen. The `Directories` list is not consulted.

use std::path::{Path, PathBuf};

use super::types::{Directory, DirectoryType, Theme, ThemeId};
use crate::error::Result;
use crate::reader;
use crate::targets;

/// File name of a theme's index inside its directory.
pub const INDEX_FILE: &str = "index.theme";

/// Section describing the theme as a whole.
const THEME_SECTION: &str = "Icon Theme";

/// A value in an index file that could not be used.
///
/// The field falls back to its default and parsing continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{theme}/{directory}: invalid {key} '{value}'")]
pub struct IndexWarning {
    /// Internal name of the theme.
    pub theme: String,
    /// Directory section the entry belongs to.
    pub directory: String,
    /// Key of the rejected entry.
    pub key: String,
    /// Rejected value.
    pub value: String,
}

/// Incremental builder for one theme.
#[derive(Debug)]
pub struct ThemeIndexParser {
    theme: Theme,
    warnings: Vec<IndexWarning>,
}

impl ThemeIndexParser {
    /// Start parsing a theme with the given identity.
    pub fn new(id: ThemeId, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            theme: Theme::new(id, name, path),
            warnings: Vec::new(),
        }
    }

    /// Feed one entry.
    pub fn entry(&mut self, section: &str, key: &str, value: &str) {
        if section == THEME_SECTION {
            self.theme_entry(key, value);
        } else {
            self.directory_entry(section, key, value);
        }
    }

    /// Finish parsing.
    pub fn finish(self) -> (Theme, Vec<IndexWarning>) {
        (self.theme, self.warnings)
    }

    fn theme_entry(&mut self, key: &str, value: &str) {
        let theme = &mut self.theme;
        match key {
            "Name" => theme.display_name = Some(value.to_string()),
            "Comment" => theme.comment = Some(value.to_string()),
            "Inherits" => theme.inherits = Some(value.to_string()),
            "Hidden" => theme.hidden = parse_bool(value),
            "Example" => theme.example = Some(value.to_string()),
            _ => {}
        }
    }

    fn directory_entry(&mut self, section: &str, key: &str, value: &str) {
        let dir = self.theme.directory_mut_or_insert(section);
        let valid = match key {
            "Size" => {
                let size = parse_int(value).filter(|&n| n > 0);
                dir.size = size.unwrap_or(0);
                size.is_some()
            }
            "Scale" => {
                let scale = parse_int(value).filter(|&n| n >= 1);
                dir.scale = scale.unwrap_or(1);
                scale.is_some()
            }
            "Context" => {
                dir.context = Some(value.to_string());
                true
            }
            "Type" => {
                dir.directory_type = DirectoryType::parse(value);
                dir.directory_type != DirectoryType::Unspecified
            }
            "MinSize" => {
                let min = parse_int(value);
                dir.min_size = min.unwrap_or(0);
                min.is_some()
            }
            "MaxSize" => {
                let max = parse_int(value);
                dir.max_size = max.unwrap_or(0);
                max.is_some()
            }
            "Threshold" => {
                let threshold = parse_int(value).filter(|&n| n > 0);
                dir.threshold = threshold.unwrap_or(Directory::DEFAULT_THRESHOLD);
                threshold.is_some()
            }
            _ => true,
        };

        if !valid {
            let warning = IndexWarning {
                theme: self.theme.name.clone(),
                directory: section.to_string(),
                key: key.to_string(),
                value: value.to_string(),
            };
            tracing::warn!(target: targets::INDEX, "{}", warning);
            self.warnings.push(warning);
        }
    }
}

/// Parse the index of the theme rooted at `path`.
///
/// Fails only if the index cannot be read. Lines that do not parse are
/// logged and skipped, and the rest of the file still counts.
pub fn parse_theme_dir(
    id: ThemeId,
    name: &str,
    path: &Path,
) -> Result<(Theme, Vec<IndexWarning>)> {
    let mut parser = ThemeIndexParser::new(id, name, path);
    reader::read_entries(&path.join(INDEX_FILE), |section, key, value| {
        parser.entry(section, key, value)
    })?;
    Ok(parser.finish())
}

/// Truthy values are `true`, `yes` and `on`, in any case.
fn parse_bool(s: &str) -> bool {
    ["true", "yes", "on"]
        .iter()
        .any(|t| s.eq_ignore_ascii_case(t))
}

/// Parse a whole value as a non-negative integer.
fn parse_int(s: &str) -> Option<u32> {
    s.parse::<i64>()
        .ok()
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| i32::try_from(n).is_ok())
}

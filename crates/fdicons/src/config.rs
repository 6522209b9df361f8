//! Default icon theme preference.
//!
//! The preferred theme name is read from a small `theme.conf` file:
//!
//! ```text
//! [Settings]
//! icon-theme-name=Papirus
//! ```
//!
//! When no such file exists anywhere, the GTK 3 `settings.ini` is consulted
//! instead and the value found there is written back to the user's
//! `theme.conf`, so later runs no longer depend on the toolkit file.

use std::fs;
use std::path::{Path, PathBuf};

use ini::Ini;

use crate::env::XdgEnv;
use crate::error::{Error, Result};
use crate::reader;
use crate::targets;

/// Name of the theme every other theme ultimately falls back to.
pub const FALLBACK_THEME: &str = "hicolor";

/// Section holding the preference in both `theme.conf` and `settings.ini`.
const SETTINGS_SECTION: &str = "Settings";
/// Preference key in `theme.conf`.
const THEME_NAME_KEY: &str = "icon-theme-name";
/// Preference key in GTK's `settings.ini`.
const GTK_THEME_NAME_KEY: &str = "gtk-icon-theme-name";

/// Where the default theme name came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceSource {
    /// A `theme.conf` file.
    ThemeConf(PathBuf),
    /// A GTK `settings.ini` file.
    Toolkit(PathBuf),
    /// Nothing usable was found.
    Fallback,
}

/// The resolved default theme preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePreference {
    /// Theme name to use when a lookup does not name one.
    pub name: String,
    /// File the name was read from.
    pub source: PreferenceSource,
}

impl ThemePreference {
    /// The `hicolor` preference.
    pub fn fallback() -> Self {
        Self {
            name: FALLBACK_THEME.to_string(),
            source: PreferenceSource::Fallback,
        }
    }

    /// Resolve the preference from the files named by `env`.
    ///
    /// The first existing `theme.conf` decides the outcome, even if it lacks
    /// the key. Only when none exists is the toolkit file tried.
    pub fn load(env: &XdgEnv) -> Self {
        if let Some((path, value)) = first_readable(&env.theme_conf_paths(), THEME_NAME_KEY) {
            tracing::debug!(
                target: targets::CONFIG,
                "Using theme preference file {}",
                path.display()
            );
            return match value {
                Some(name) => Self {
                    name,
                    source: PreferenceSource::ThemeConf(path),
                },
                None => Self::fallback(),
            };
        }

        let Some((path, value)) = first_readable(&env.gtk_settings_paths(), GTK_THEME_NAME_KEY)
        else {
            return Self::fallback();
        };
        let Some(name) = value else {
            return Self::fallback();
        };

        tracing::debug!(
            target: targets::CONFIG,
            "Using icon theme '{}' from {}",
            name,
            path.display()
        );
        if let Some(written) = persist(env, &name) {
            tracing::debug!(
                target: targets::CONFIG,
                "Saved icon theme preference to {}",
                written.display()
            );
        }

        Self {
            name,
            source: PreferenceSource::Toolkit(path),
        }
    }
}

/// Read `key` from the first file in `candidates` that can be opened.
///
/// A file that exists but lacks the key still ends the search; it yields no
/// value.
fn first_readable(candidates: &[PathBuf], key: &str) -> Option<(PathBuf, Option<String>)> {
    for path in candidates {
        match reader::read_value(path, SETTINGS_SECTION, key) {
            Ok(value) => return Some((path.clone(), value)),
            Err(e) if e.is_not_found() => {}
            Err(e) => {
                tracing::debug!(target: targets::CONFIG, "{}", e);
            }
        }
    }
    None
}

/// Write `name` to the first writable `theme.conf` location.
///
/// Returns the path written, or `None` if every location failed.
fn persist(env: &XdgEnv, name: &str) -> Option<PathBuf> {
    for path in env.theme_conf_write_paths() {
        match write_theme_conf(&path, name) {
            Ok(()) => return Some(path),
            Err(e) => {
                tracing::debug!(target: targets::CONFIG, "{}", e);
            }
        }
    }
    None
}

/// Write a `theme.conf` naming `name`, creating parent directories.
pub fn write_theme_conf(path: &Path, name: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let mut conf = Ini::new();
    conf.with_section(Some(SETTINGS_SECTION))
        .set(THEME_NAME_KEY, name);
    conf.write_to_file(path).map_err(|e| Error::io(path, e))
}

//! The icon theme database.
//!
//! An [`IconDatabase`] owns every theme discovered under its search paths,
//! in discovery order, together with the name of the default theme used by
//! lookups that do not pick one.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ThemePreference;
use crate::env::XdgEnv;
use crate::error::Error;
use crate::lookup::{self, Criteria, DEFAULT_EXTENSIONS, Icon};
use crate::targets;
use crate::theme::{self, Directory, DirectoryRef, INDEX_FILE, Theme, ThemeId};

/// An icon file present in a theme directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// Icon name (file name without extension).
    pub name: String,
    /// File extension.
    pub extension: String,
    /// Path of the file.
    pub path: PathBuf,
    /// Directory containing the file.
    pub directory: DirectoryRef,
}

/// Installed icon themes and the default theme preference.
///
/// # Example
///
/// ```no_run
/// use fdicons::{Criteria, IconDatabase};
///
/// let mut database = IconDatabase::new();
/// database.add_default_paths();
///
/// if let Some(icon) = database.resolve(&Criteria::new(["firefox", "web-browser"], 48)) {
///     println!("{}", icon.path.display());
/// }
/// ```
#[derive(Debug)]
pub struct IconDatabase {
    /// Discovered themes; a theme's id is its index here.
    themes: Vec<Theme>,
    /// Theme used when criteria do not name one.
    default_theme: String,
    /// Roots passed to `add_path`, in order.
    search_paths: Vec<PathBuf>,
    /// Environment used for the default search paths.
    env: XdgEnv,
}

impl IconDatabase {
    /// Create an empty database configured from the process environment.
    ///
    /// The default theme comes from the user's theme preference; see
    /// [`ThemePreference::load`].
    pub fn new() -> Self {
        Self::with_env(XdgEnv::from_env())
    }

    /// Create an empty database configured from `env`.
    pub fn with_env(env: XdgEnv) -> Self {
        let preference = ThemePreference::load(&env);
        tracing::debug!(
            target: targets::DATABASE,
            "Default icon theme is {} ({:?})",
            preference.name,
            preference.source
        );
        Self {
            themes: Vec::new(),
            default_theme: preference.name,
            search_paths: Vec::new(),
            env,
        }
    }

    /// Create an empty database with an explicit default theme.
    ///
    /// No preference files are read, and
    /// [`add_default_paths`](Self::add_default_paths) only adds the system
    /// directories.
    pub fn with_default_theme(name: impl Into<String>) -> Self {
        Self {
            themes: Vec::new(),
            default_theme: name.into(),
            search_paths: Vec::new(),
            env: XdgEnv::default(),
        }
    }

    /// Add the standard icon search paths, highest precedence first.
    pub fn add_default_paths(&mut self) {
        for path in self.env.icon_search_paths() {
            self.add_path(path);
        }
    }

    /// Add every theme found directly under `path`.
    ///
    /// A subdirectory is a theme if it contains an `index.theme`; its name
    /// becomes the theme name. Themes whose name is already known are
    /// skipped. A missing or unreadable `path` adds nothing.
    ///
    /// Returns the number of themes added.
    pub fn add_path(&mut self, path: impl AsRef<Path>) -> usize {
        let path = path.as_ref();
        self.search_paths.push(path.to_path_buf());

        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(target: targets::DATABASE, "{}", Error::io(path, e));
                return 0;
            }
        };

        let mut names: Vec<String> = entries
            .flatten()
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();

        let mut added = 0;
        for name in names {
            let theme_path = path.join(&name);
            if !theme_path.join(INDEX_FILE).is_file() {
                continue;
            }
            if self.theme(&name).is_some() {
                tracing::debug!(
                    target: targets::DATABASE,
                    "Skipping {}: theme {} already known",
                    theme_path.display(),
                    name
                );
                continue;
            }

            let theme = self.load_theme(&name, &theme_path);
            tracing::debug!(
                target: targets::DATABASE,
                "Found theme {} at {} ({} directories)",
                theme.name,
                theme.path.display(),
                theme.directories.len()
            );
            self.themes.push(theme);
            added += 1;
        }
        added
    }

    /// Parse one theme. An unreadable index still yields a theme, just one
    /// without directories.
    fn load_theme(&self, name: &str, path: &Path) -> Theme {
        let id = ThemeId(self.themes.len());
        match theme::parse_theme_dir(id, name, path) {
            Ok((theme, warnings)) => {
                if !warnings.is_empty() {
                    tracing::debug!(
                        target: targets::DATABASE,
                        "Theme {} has {} invalid index values",
                        name,
                        warnings.len()
                    );
                }
                theme
            }
            Err(e) => {
                tracing::warn!(target: targets::DATABASE, "{}", e);
                Theme::new(id, name, path)
            }
        }
    }

    /// All themes, in discovery order.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Look up a theme by name.
    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// Look up a theme by id.
    pub fn theme_by_id(&self, id: ThemeId) -> Option<&Theme> {
        self.themes.get(id.0)
    }

    /// Look up a theme directory.
    pub fn directory(&self, directory: DirectoryRef) -> Option<&Directory> {
        self.theme_by_id(directory.theme)?
            .directories
            .get(directory.index)
    }

    /// Override the default theme name.
    ///
    /// The theme does not need to be installed; lookups fall back to
    /// `hicolor` when it is not.
    pub fn set_theme(&mut self, name: impl Into<String>) {
        self.default_theme = name.into();
    }

    /// Name of the theme used when criteria do not pick one.
    pub fn default_theme_name(&self) -> &str {
        &self.default_theme
    }

    /// Search roots added so far, in order.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Find the best icon file for `criteria`.
    ///
    /// Returns `None` when no theme in the search chain, including
    /// `hicolor`, has a file for any of the names.
    ///
    /// # Panics
    ///
    /// Panics if `criteria` has no names or a zero size.
    pub fn resolve(&self, criteria: &Criteria) -> Option<Icon> {
        lookup::resolve(self, criteria)
    }

    /// Find an icon by names, in order of preference, at `size`.
    pub fn get_icon<I, S>(&self, size: u32, names: I) -> Option<Icon>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resolve(&Criteria::new(names, size))
    }

    /// List the icon files in every directory of `theme`.
    ///
    /// Only files with one of the [`DEFAULT_EXTENSIONS`] are listed. Files
    /// are ordered by directory, then by file name.
    pub fn list_icons(&self, theme: &Theme) -> Vec<IconEntry> {
        let mut icons = Vec::new();
        for (index, dir) in theme.directories.iter().enumerate() {
            let dir_path = theme.directory_path(dir);
            let Ok(entries) = fs::read_dir(&dir_path) else {
                continue;
            };

            let mut files: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
            files.sort();

            for path in files {
                let (Some(name), Some(extension)) = (
                    path.file_stem().and_then(|s| s.to_str()),
                    path.extension().and_then(|s| s.to_str()),
                ) else {
                    continue;
                };
                if !DEFAULT_EXTENSIONS.contains(&extension) {
                    continue;
                }
                icons.push(IconEntry {
                    name: name.to_string(),
                    extension: extension.to_string(),
                    path: path.clone(),
                    directory: DirectoryRef {
                        theme: theme.id(),
                        index,
                    },
                });
            }
        }
        icons
    }
}

impl Default for IconDatabase {
    fn default() -> Self {
        Self::new()
    }
}

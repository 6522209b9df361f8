//! Icon theme and theme directory records.

use std::fmt;
use std::path::PathBuf;

/// Index of a theme within its [`IconDatabase`](crate::IconDatabase).
///
/// Themes are never removed, so an id stays valid for the lifetime of the
/// database that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThemeId(pub(crate) usize);

impl ThemeId {
    /// Position of the theme in discovery order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to one directory of one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectoryRef {
    /// Theme the directory belongs to.
    pub theme: ThemeId,
    /// Position of the directory within the theme.
    pub index: usize,
}

/// How icons in a directory may be scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryType {
    /// No (or an unrecognised) `Type` key. Never matches.
    #[default]
    Unspecified,
    /// Icons are only usable at exactly their nominal size.
    Fixed,
    /// Icons may be scaled anywhere between `MinSize` and `MaxSize`.
    Scalable,
    /// Icons are usable within `Threshold` pixels of their nominal size.
    Threshold,
}

impl DirectoryType {
    /// Parse a `Type` value. Case-insensitive.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("fixed") {
            Self::Fixed
        } else if s.eq_ignore_ascii_case("scalable") {
            Self::Scalable
        } else if s.eq_ignore_ascii_case("threshold") {
            Self::Threshold
        } else {
            Self::Unspecified
        }
    }

    /// Get the type as it is spelled in index files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "Unspecified",
            Self::Fixed => "Fixed",
            Self::Scalable => "Scalable",
            Self::Threshold => "Threshold",
        }
    }
}

impl fmt::Display for DirectoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One icon directory section of a theme's `index.theme`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    /// Theme this directory belongs to.
    pub theme: ThemeId,
    /// Path relative to the theme root, e.g. `48x48/apps`.
    pub name: String,
    /// Nominal icon size in pixels. Zero when missing or invalid.
    pub size: u32,
    /// Scale factor the icons are designed for.
    pub scale: u32,
    /// Free-text usage category (`Applications`, `Places`, ...).
    pub context: Option<String>,
    /// Scaling behaviour.
    pub directory_type: DirectoryType,
    /// Lower scaling bound for `Scalable`. Zero means "same as size".
    pub min_size: u32,
    /// Upper scaling bound for `Scalable`. Zero means "same as size".
    pub max_size: u32,
    /// Size tolerance for `Threshold`.
    pub threshold: u32,
}

impl Directory {
    /// Default `Threshold` value.
    pub const DEFAULT_THRESHOLD: u32 = 2;

    /// Create a directory with default attributes.
    pub fn new(theme: ThemeId, name: impl Into<String>) -> Self {
        Self {
            theme,
            name: name.into(),
            size: 0,
            scale: 1,
            context: None,
            directory_type: DirectoryType::Unspecified,
            min_size: 0,
            max_size: 0,
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    /// Whether the directory declared a usable size.
    ///
    /// Unusable directories are kept so listings stay faithful to the index
    /// file, but they never take part in a lookup.
    pub fn is_usable(&self) -> bool {
        self.size > 0
    }

    /// `MinSize`, defaulting to `Size`.
    pub fn effective_min_size(&self) -> u32 {
        if self.min_size != 0 { self.min_size } else { self.size }
    }

    /// `MaxSize`, defaulting to `Size`.
    pub fn effective_max_size(&self) -> u32 {
        if self.max_size != 0 { self.max_size } else { self.size }
    }

    /// Check whether icons here may be used as-is for `size` at `scale`.
    pub fn matches_size(&self, size: u32, scale: u32) -> bool {
        if !self.is_usable() || self.scale != scale {
            return false;
        }

        match self.directory_type {
            DirectoryType::Fixed => self.size == size,
            DirectoryType::Scalable => {
                self.effective_min_size() <= size && size <= self.effective_max_size()
            }
            DirectoryType::Threshold => {
                let (nominal, threshold, size) = (
                    i64::from(self.size),
                    i64::from(self.threshold),
                    i64::from(size),
                );
                nominal - threshold <= size && size <= nominal + threshold
            }
            DirectoryType::Unspecified => false,
        }
    }

    /// Distance between this directory's icons and `size` at `scale`.
    ///
    /// `None` means the directory offers no finite distance: it is
    /// unusable, of unspecified type, or the scaled request already falls
    /// inside its bounds.
    ///
    /// `Scalable` bounds are tested against the directory scale but the
    /// distance is measured against the requested scale, while `Threshold`
    /// uses the directory scale on both sides.
    pub fn size_distance(&self, size: u32, scale: u32) -> Option<i64> {
        if !self.is_usable() {
            return None;
        }

        let scale = i64::from(scale);
        let size = scale * i64::from(size);
        let nominal = i64::from(self.size);
        let dir_scale = i64::from(self.scale);
        let min = i64::from(self.effective_min_size());
        let max = i64::from(self.effective_max_size());

        match self.directory_type {
            DirectoryType::Fixed => Some((nominal * dir_scale - size).abs()),
            DirectoryType::Scalable => {
                if size < min * dir_scale {
                    Some(min * scale - size)
                } else if size > max * dir_scale {
                    Some(size - max * scale)
                } else {
                    None
                }
            }
            DirectoryType::Threshold => {
                let threshold = i64::from(self.threshold);
                if size < (nominal - threshold) * dir_scale {
                    Some(min * dir_scale - size)
                } else if size > (nominal + threshold) * dir_scale {
                    Some(size - max * dir_scale)
                } else {
                    None
                }
            }
            DirectoryType::Unspecified => None,
        }
    }
}

/// An installed icon theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Position in the database's theme list.
    pub(crate) id: ThemeId,
    /// Internal name: the name of the theme's directory.
    pub name: String,
    /// Theme root on disk.
    pub path: PathBuf,
    /// Human-readable name (`Name` key).
    pub display_name: Option<String>,
    /// Description (`Comment` key).
    pub comment: Option<String>,
    /// Name of the theme to fall back to (`Inherits` key).
    pub inherits: Option<String>,
    /// Whether theme selectors should hide this theme.
    pub hidden: bool,
    /// Icon name that represents the theme in a selector.
    pub example: Option<String>,
    /// Icon directories, in the order they appear in the index.
    pub directories: Vec<Directory>,
}

impl Theme {
    /// Create an empty theme record.
    pub fn new(id: ThemeId, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            name: name.into(),
            path: path.into(),
            display_name: None,
            comment: None,
            inherits: None,
            hidden: false,
            example: None,
            directories: Vec::new(),
        }
    }

    /// Handle of this theme in its database.
    pub fn id(&self) -> ThemeId {
        self.id
    }

    /// Display name, or the internal name when the index has none.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Whether the theme should be offered in theme selectors.
    pub fn visible(&self) -> bool {
        !self.hidden
    }

    /// Look up a directory by name.
    pub fn directory(&self, name: &str) -> Option<&Directory> {
        self.directories.iter().find(|d| d.name == name)
    }

    /// Absolute path of one of this theme's directories.
    pub fn directory_path(&self, directory: &Directory) -> PathBuf {
        self.path.join(&directory.name)
    }

    pub(crate) fn directory_mut_or_insert(&mut self, name: &str) -> &mut Directory {
        let index = match self.directories.iter().position(|d| d.name == name) {
            Some(index) => index,
            None => {
                self.directories.push(Directory::new(self.id, name));
                self.directories.len() - 1
            }
        };
        &mut self.directories[index]
    }
}

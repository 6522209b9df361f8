//! Lookup results.

use std::path::PathBuf;

use crate::database::IconDatabase;
use crate::theme::{Directory, DirectoryRef, Theme};

/// Area of an icon in which an application may draw text.
///
/// Pixel coordinates, or a 1000x1000 space for SVG icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

/// Point at which an emblem may be drawn over an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttachPoint {
    pub x: i32,
    pub y: i32,
}

/// An icon file found by a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    /// Path of the icon file.
    pub path: PathBuf,
    /// The requested name that matched.
    pub name: String,
    /// Display name from the icon's `.icon` file.
    pub display_name: Option<String>,
    /// Theme directory the file was found in.
    pub directory: DirectoryRef,
    /// Text area from the icon's `.icon` file.
    ///
    /// `.icon` files are not read, so this is always `None`.
    pub embedded_text_rectangle: Option<TextRect>,
    /// Emblem attach points from the icon's `.icon` file.
    ///
    /// `.icon` files are not read, so this is always empty.
    pub attach_points: Vec<AttachPoint>,
}

impl Icon {
    pub(crate) fn new(path: PathBuf, name: impl Into<String>, directory: DirectoryRef) -> Self {
        Self {
            path,
            name: name.into(),
            display_name: None,
            directory,
            embedded_text_rectangle: None,
            attach_points: Vec::new(),
        }
    }

    /// Display name, or the matched icon name.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// The directory the icon was found in.
    pub fn directory<'a>(&self, database: &'a IconDatabase) -> Option<&'a Directory> {
        database.directory(self.directory)
    }

    /// The theme the icon was found in.
    pub fn theme<'a>(&self, database: &'a IconDatabase) -> Option<&'a Theme> {
        database.theme_by_id(self.directory.theme)
    }
}

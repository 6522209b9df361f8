//! Icon search criteria.

use crate::theme::ThemeId;

/// Extensions tried, in order, when the criteria name none.
pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "svg", "xpm"];

/// What to look for.
///
/// # Examples
///
/// ```
/// use fdicons::Criteria;
///
/// let criteria = Criteria::new(["org.gnome.Nautilus", "folder"], 48)
///     .with_scale(2)
///     .with_extensions(["svg", "png"]);
///
/// assert_eq!(criteria.names[0], "org.gnome.Nautilus");
/// assert_eq!(criteria.extensions(), vec!["svg", "png"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    /// Icon names in order of preference. Must not be empty.
    pub names: Vec<String>,
    /// Desired size in pixels. Must not be zero.
    pub size: u32,
    /// Acceptable file extensions in order of preference.
    ///
    /// Empty means [`DEFAULT_EXTENSIONS`].
    pub extensions: Vec<String>,
    /// Theme to search instead of the database's default theme.
    pub theme: Option<ThemeId>,
    /// Desired scale. Zero means 1.
    pub scale: u32,
}

impl Criteria {
    /// Create criteria for `names` at `size`.
    pub fn new<I, S>(names: I, size: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            size,
            extensions: Vec::new(),
            theme: None,
            scale: 0,
        }
    }

    /// Set the scale factor.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Restrict the accepted file extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Search a specific theme.
    pub fn with_theme(mut self, theme: ThemeId) -> Self {
        self.theme = Some(theme);
        self
    }

    /// The scale lookups compare against.
    pub fn effective_scale(&self) -> u32 {
        if self.scale == 0 { 1 } else { self.scale }
    }

    /// The extensions to try, in order.
    pub fn extensions(&self) -> Vec<&str> {
        if self.extensions.is_empty() {
            DEFAULT_EXTENSIONS.to_vec()
        } else {
            self.extensions.iter().map(String::as_str).collect()
        }
    }
}

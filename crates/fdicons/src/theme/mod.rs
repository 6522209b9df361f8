//! Icon themes and their `index.theme` files.

mod index;
mod types;

pub use index::{INDEX_FILE, IndexWarning, ThemeIndexParser, parse_theme_dir};
pub use types::{Directory, DirectoryRef, DirectoryType, Theme, ThemeId};

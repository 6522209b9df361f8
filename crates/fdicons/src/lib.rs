//! freedesktop icon theme lookup.
//!
//! This crate finds icon files the way the freedesktop Icon Theme
//! Specification describes:
//!
//! - **Discovery**: icon themes are found under a list of search roots,
//!   each theme being a directory holding an `index.theme`
//! - **Index parsing**: every `index.theme` is read into a [`Theme`] and its
//!   ordered [`Directory`] records (size, scale, context, type)
//! - **Resolution**: a [`Criteria`] (names in order of preference, size,
//!   scale, extensions) is matched against a theme's directories, falling
//!   back along the `Inherits` chain and finally to `hicolor`
//!
//! # Example
//!
//! ```no_run
//! use fdicons::{Criteria, IconDatabase};
//!
//! let mut database = IconDatabase::new();
//! database.add_default_paths();
//!
//! let criteria = Criteria::new(["org.mozilla.firefox", "firefox", "web-browser"], 48)
//!     .with_scale(2);
//! match database.resolve(&criteria) {
//!     Some(icon) => println!("{} -> {}", icon.name, icon.path.display()),
//!     None => println!("no icon"),
//! }
//! ```
//!
//! # Logging
//!
//! Diagnostics are emitted through `tracing` under the targets listed in
//! [`targets`]. Malformed index entries and unparsable lines are reported at
//! `warn` level.

pub mod config;
pub mod env;
pub mod reader;
pub mod theme;

mod database;
mod error;
mod lookup;
mod shared;

pub use config::{FALLBACK_THEME, PreferenceSource, ThemePreference};
pub use database::{IconDatabase, IconEntry};
pub use env::XdgEnv;
pub use error::{Error, Result};
pub use lookup::{AttachPoint, Criteria, DEFAULT_EXTENSIONS, Icon, TextRect};
pub use shared::SharedIconDatabase;
pub use theme::{
    Directory, DirectoryRef, DirectoryType, IndexWarning, Theme, ThemeId, ThemeIndexParser,
};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=fdicons::lookup=trace`.
pub mod targets {
    /// Theme discovery.
    pub const DATABASE: &str = "fdicons::database";
    /// Sectioned key/value file reading.
    pub const READER: &str = "fdicons::reader";
    /// `index.theme` parsing.
    pub const INDEX: &str = "fdicons::index";
    /// Icon resolution.
    pub const LOOKUP: &str = "fdicons::lookup";
    /// Default theme preference.
    pub const CONFIG: &str = "fdicons::config";
}

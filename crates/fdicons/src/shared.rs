//! A database that can be shared between threads.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::database::IconDatabase;
use crate::lookup::{Criteria, Icon};

/// Thread-safe handle to an [`IconDatabase`].
///
/// Lookups hold a read lock and run concurrently; changing the default theme
/// takes the write lock and waits for running lookups to finish.
#[derive(Debug, Clone)]
pub struct SharedIconDatabase {
    inner: Arc<RwLock<IconDatabase>>,
}

impl SharedIconDatabase {
    /// Wrap a populated database.
    pub fn new(database: IconDatabase) -> Self {
        Self {
            inner: Arc::new(RwLock::new(database)),
        }
    }

    /// Find the best icon file for `criteria`.
    pub fn resolve(&self, criteria: &Criteria) -> Option<Icon> {
        self.inner.read().resolve(criteria)
    }

    /// Find an icon by names, in order of preference, at `size`.
    pub fn get_icon<I, S>(&self, size: u32, names: I) -> Option<Icon>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resolve(&Criteria::new(names, size))
    }

    /// Override the default theme name.
    pub fn set_theme(&self, name: impl Into<String>) {
        self.inner.write().set_theme(name);
    }

    /// Name of the current default theme.
    pub fn default_theme_name(&self) -> String {
        self.inner.read().default_theme_name().to_string()
    }

    /// Lock the database for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, IconDatabase> {
        self.inner.read()
    }

    /// Lock the database for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, IconDatabase> {
        self.inner.write()
    }
}

impl From<IconDatabase> for SharedIconDatabase {
    fn from(database: IconDatabase) -> Self {
        Self::new(database)
    }
}

//! Icon resolution.
//!
//! A theme is searched directory by directory, in index order. The first
//! file whose directory fits the requested size exactly wins. Failing that,
//! the file with the smallest size distance seen in the theme is used.
//! Only when the theme holds no candidate file at all does the search move
//! on to the theme it inherits from. If the whole chain comes up empty,
//! `hicolor` is searched as a last resort.

use std::fs;
use std::path::{Path, PathBuf};

use super::criteria::Criteria;
use super::icon::Icon;
use crate::config::FALLBACK_THEME;
use crate::database::IconDatabase;
use crate::targets;
use crate::theme::{DirectoryRef, DirectoryType, Theme, ThemeId};

/// Closest inexact candidate seen so far in one theme.
struct Nearest {
    directory: DirectoryRef,
    path: PathBuf,
    name: String,
    distance: i64,
}

/// Resolve `criteria` against `database`.
///
/// # Panics
///
/// Panics if `criteria` has no names or a zero size.
pub(crate) fn resolve(database: &IconDatabase, criteria: &Criteria) -> Option<Icon> {
    assert!(
        !criteria.names.is_empty(),
        "icon criteria need at least one name"
    );
    assert!(criteria.size > 0, "icon criteria need a non-zero size");

    let hicolor = database.theme(FALLBACK_THEME);
    let start = starting_theme(database, criteria).or(hicolor)?;

    let mut visited = Vec::new();
    if let Some(icon) = search_theme(database, start, criteria, &mut visited) {
        return Some(icon);
    }

    let hicolor = hicolor.filter(|h| h.id() != start.id())?;
    tracing::debug!(
        target: targets::LOOKUP,
        "Falling back to {} for {:?}",
        FALLBACK_THEME,
        criteria.names
    );
    search_theme(database, hicolor, criteria, &mut visited)
}

fn starting_theme<'a>(database: &'a IconDatabase, criteria: &Criteria) -> Option<&'a Theme> {
    if let Some(id) = criteria.theme {
        match database.theme_by_id(id) {
            Some(theme) => return Some(theme),
            None => tracing::debug!(
                target: targets::LOOKUP,
                "Ignoring unknown theme id {}",
                id.index()
            ),
        }
    }
    database.theme(database.default_theme_name())
}

/// Search one theme, then its ancestors.
///
/// `visited` collects every theme already searched so an inheritance cycle
/// ends the search instead of recursing forever.
fn search_theme(
    database: &IconDatabase,
    theme: &Theme,
    criteria: &Criteria,
    visited: &mut Vec<ThemeId>,
) -> Option<Icon> {
    if visited.contains(&theme.id()) {
        tracing::debug!(
            target: targets::LOOKUP,
            "Theme {} already searched",
            theme.name
        );
        return None;
    }
    visited.push(theme.id());

    let scale = criteria.effective_scale();
    let extensions = criteria.extensions();
    let mut nearest: Option<Nearest> = None;

    for (index, dir) in theme.directories.iter().enumerate() {
        if !dir.is_usable() || dir.directory_type == DirectoryType::Unspecified {
            continue;
        }

        let dir_path = theme.directory_path(dir);
        let directory = DirectoryRef {
            theme: theme.id(),
            index,
        };

        for name in &criteria.names {
            for ext in &extensions {
                let path = dir_path.join(format!("{name}.{ext}"));
                if !is_regular_file(&path) {
                    continue;
                }

                if dir.matches_size(criteria.size, scale) {
                    tracing::debug!(
                        target: targets::LOOKUP,
                        "Found {} in {}",
                        path.display(),
                        theme.name
                    );
                    return Some(Icon::new(path, name.as_str(), directory));
                }

                if let Some(distance) = dir.size_distance(criteria.size, scale)
                    && nearest.as_ref().is_none_or(|n| distance < n.distance)
                {
                    nearest = Some(Nearest {
                        directory,
                        path,
                        name: name.clone(),
                        distance,
                    });
                }
            }
        }
    }

    if let Some(nearest) = nearest {
        tracing::debug!(
            target: targets::LOOKUP,
            "Using {} (size distance {}) from {}",
            nearest.path.display(),
            nearest.distance,
            theme.name
        );
        return Some(Icon::new(nearest.path, nearest.name, nearest.directory));
    }

    let parent_name = theme.inherits.as_deref()?;
    match database.theme(parent_name) {
        Some(parent) => search_theme(database, parent, criteria, visited),
        None => {
            tracing::debug!(
                target: targets::LOOKUP,
                "Theme {} inherits unknown theme {}",
                theme.name,
                parent_name
            );
            None
        }
    }
}

fn is_regular_file(path: &Path) -> bool {
    let found = fs::metadata(path).is_ok_and(|m| m.is_file());
    tracing::trace!(
        target: targets::LOOKUP,
        "{} {}",
        if found { "hit" } else { "miss" },
        path.display()
    );
    found
}

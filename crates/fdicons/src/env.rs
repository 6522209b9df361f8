//! XDG base directory inputs.
//!
//! The database reads a handful of environment variables to find icon search
//! roots and preference files. They are captured once into an [`XdgEnv`] so
//! the rest of the crate works from plain values.

use std::path::PathBuf;

/// System data directory used when `XDG_DATA_DIRS` is unset.
pub const DATADIR: &str = "/usr/share";

/// Snapshot of the environment variables the database depends on.
///
/// A `None` field means the variable is undefined; any candidate path built
/// from it is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XdgEnv {
    /// `$HOME`
    pub home: Option<PathBuf>,
    /// `$XDG_CONFIG_HOME`
    pub config_home: Option<PathBuf>,
    /// `$XDG_DATA_HOME`
    pub data_home: Option<PathBuf>,
    /// `$XDG_DATA_DIRS`, unsplit
    pub data_dirs: Option<String>,
    /// Prefix applied to the fixed system paths (`/etc`, `/usr/share`).
    ///
    /// Empty for the real system; tests point it into a scratch directory.
    pub root: PathBuf,
}

impl XdgEnv {
    /// Capture the current process environment.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var_os(name).filter(|v| !v.is_empty());
        Self {
            home: var("HOME").map(PathBuf::from).or_else(dirs::home_dir),
            config_home: var("XDG_CONFIG_HOME").map(PathBuf::from),
            data_home: var("XDG_DATA_HOME").map(PathBuf::from),
            data_dirs: var("XDG_DATA_DIRS").and_then(|v| v.into_string().ok()),
            root: PathBuf::new(),
        }
    }

    /// An environment with only `$HOME` set, rooted at `root`.
    pub fn with_home(home: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
            root: root.into(),
            ..Self::default()
        }
    }

    /// Resolve an absolute system path against [`root`](Self::root).
    pub fn system_path(&self, path: &str) -> PathBuf {
        if self.root.as_os_str().is_empty() {
            PathBuf::from(path)
        } else {
            self.root.join(path.trim_start_matches('/'))
        }
    }

    fn home_join(&self, rel: &str) -> Option<PathBuf> {
        self.home.as_ref().map(|h| h.join(rel))
    }

    fn config_home_join(&self, rel: &str) -> Option<PathBuf> {
        self.config_home.as_ref().map(|c| c.join(rel))
    }

    /// Default icon search roots, highest precedence first.
    ///
    /// `~/.icons`, then the user data directory, then the legacy pixmaps
    /// directory, then each entry of `$XDG_DATA_DIRS` with `/icons` appended.
    pub fn icon_search_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        paths.extend(self.home_join(".icons"));
        match &self.data_home {
            Some(data_home) => paths.push(data_home.join("icons")),
            None => paths.extend(self.home_join(".local/share/icons")),
        }

        paths.push(self.system_path(&format!("{DATADIR}/pixmaps")));

        match &self.data_dirs {
            Some(dirs) => {
                for dir in dirs.split(':').filter(|d| !d.is_empty()) {
                    paths.push(PathBuf::from(dir).join("icons"));
                }
            }
            None => paths.push(self.system_path(&format!("{DATADIR}/icons"))),
        }

        paths
    }

    /// Candidate locations of the user theme preference file, in order.
    pub fn theme_conf_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        paths.extend(self.config_home_join("theme.conf"));
        paths.extend(self.home_join(".config/theme.conf"));
        paths.extend(self.home_join(".theme.conf"));
        paths.push(self.system_path("/etc/theme.conf"));
        paths
    }

    /// Locations the preference file may be written to, in order.
    pub fn theme_conf_write_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        paths.extend(self.config_home_join("theme.conf"));
        paths.extend(self.home_join(".config/theme.conf"));
        paths
    }

    /// Candidate locations of the GTK 3 settings file, in order.
    pub fn gtk_settings_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        paths.extend(self.config_home_join("gtk-3.0/settings.ini"));
        paths.extend(self.home_join(".config/gtk-3.0/settings.ini"));
        paths.extend(self.home_join(".gtk-3.0/settings.ini"));
        paths.push(self.system_path("/etc/gtk-3.0/settings.ini"));
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_paths_defaults() {
        let env = XdgEnv {
            home: Some(PathBuf::from("/home/u")),
            ..XdgEnv::default()
        };
        assert_eq!(
            env.icon_search_paths(),
            vec![
                PathBuf::from("/home/u/.icons"),
                PathBuf::from("/home/u/.local/share/icons"),
                PathBuf::from("/usr/share/pixmaps"),
                PathBuf::from("/usr/share/icons"),
            ]
        );
    }

    #[test]
    fn test_search_paths_from_xdg_vars() {
        let env = XdgEnv {
            home: Some(PathBuf::from("/home/u")),
            data_home: Some(PathBuf::from("/data")),
            data_dirs: Some("/opt/share::/usr/share".to_string()),
            ..XdgEnv::default()
        };
        assert_eq!(
            env.icon_search_paths(),
            vec![
                PathBuf::from("/home/u/.icons"),
                PathBuf::from("/data/icons"),
                PathBuf::from("/usr/share/pixmaps"),
                PathBuf::from("/opt/share/icons"),
                PathBuf::from("/usr/share/icons"),
            ]
        );
    }

    #[test]
    fn test_undefined_vars_skip_candidates() {
        let env = XdgEnv::default();
        assert_eq!(env.theme_conf_paths(), vec![PathBuf::from("/etc/theme.conf")]);
        assert!(env.theme_conf_write_paths().is_empty());
        assert_eq!(
            env.gtk_settings_paths(),
            vec![PathBuf::from("/etc/gtk-3.0/settings.ini")]
        );
    }

    #[test]
    fn test_system_path_rooted() {
        let env = XdgEnv::with_home("/h", "/tmp/scratch");
        assert_eq!(
            env.system_path("/etc/theme.conf"),
            PathBuf::from("/tmp/scratch/etc/theme.conf")
        );
        assert_eq!(
            env.theme_conf_paths(),
            vec![
                PathBuf::from("/h/.config/theme.conf"),
                PathBuf::from("/h/.theme.conf"),
                PathBuf::from("/tmp/scratch/etc/theme.conf"),
            ]
        );
    }
}

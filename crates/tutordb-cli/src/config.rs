//! Configuration file handling for tutordb.
//!
//! Looks for `.config/tutordb.styx` in the current directory or any parent directory.

pub use tutordb_config::Config;

use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE: &str = ".config/tutordb.styx";

/// A loaded configuration and the directory it applies to.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub config: Config,
    /// The config file, if one was found.
    pub path: Option<PathBuf>,
    /// The directory holding `.config/`, or the start directory without a file.
    pub root: PathBuf,
}

impl Loaded {
    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(self.config.snapshot())
    }
}

/// Load configuration from `.config/tutordb.styx`, searching up the directory tree.
pub fn load() -> Result<Loaded, ConfigError> {
    let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
    load_from(&cwd)
}

/// Load configuration starting from a specific directory.
///
/// Without a config file anywhere up the tree, the defaults apply.
pub fn load_from(start: &Path) -> Result<Loaded, ConfigError> {
    let Some(config_path) = find_config_file(start) else {
        return Ok(Loaded {
            config: Config::default(),
            path: None,
            root: start.to_path_buf(),
        });
    };

    let content = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
        path: config_path.clone(),
        source,
    })?;

    let config: Config = facet_styx::from_str(&content).map_err(|e| ConfigError::Parse {
        path: config_path.clone(),
        message: e.to_string(),
    })?;

    let root = config_path
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| start.to_path_buf());

    Ok(Loaded {
        config,
        path: Some(config_path),
        root,
    })
}

/// Find `.config/tutordb.styx` by searching up the directory tree.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tutordb-config-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = scratch_dir("missing");
        let loaded = load_from(&dir).unwrap();
        assert!(loaded.path.is_none());
        assert_eq!(loaded.config, Config::default());
        assert_eq!(loaded.snapshot_path(), dir.join("schema.snapshot"));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_found_in_parent_directory() {
        let dir = scratch_dir("parent");
        std::fs::create_dir_all(dir.join(".config")).unwrap();
        std::fs::write(
            dir.join(".config/tutordb.styx"),
            "snapshot db/schema.snapshot\nlegacy_tables (pt_backup qb_back_up)\n",
        )
        .unwrap();
        let nested = dir.join("crates/app");
        std::fs::create_dir_all(&nested).unwrap();

        let loaded = load_from(&nested).unwrap();
        assert_eq!(loaded.path, Some(dir.join(".config/tutordb.styx")));
        assert_eq!(loaded.root, dir);
        assert_eq!(loaded.snapshot_path(), dir.join("db/schema.snapshot"));
        assert_eq!(loaded.config.legacy_tables, vec!["pt_backup", "qb_back_up"]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = scratch_dir("invalid");
        std::fs::create_dir_all(dir.join(".config")).unwrap();
        std::fs::write(dir.join(".config/tutordb.styx"), "legacy_tables {{{").unwrap();

        let err = load_from(&dir).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("tutordb.styx"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}

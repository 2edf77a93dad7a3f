//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find the config file, searching upward from `start`.
///
/// Absolute names are checked as-is.
///
/// ```text
/// /home/user/site/src/components/   ← start
/// /home/user/site/iconpress.toml    ← found
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src/components");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("iconpress.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("iconpress.toml")).unwrap();
        assert_eq!(found, dir.path().join("iconpress.toml"));
    }

    #[test]
    fn test_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file(dir.path(), Path::new("no-such-config-file.toml")).is_none());
    }

    #[test]
    fn test_absolute_missing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(find_config_file(dir.path(), &missing).is_none());
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default location of the persisted save path, one plain-text line
pub const CONFIG_FILE: &str = "config.txt";

/// Store for the single persisted setting: the directory MP3 files are
/// saved to. Injected into the session so tests can relocate the file.
#[derive(Debug, Clone)]
pub struct SavePathStore {
    config_file: PathBuf,
}

impl SavePathStore {
    pub fn new(config_file: impl Into<PathBuf>) -> Self {
        Self {
            config_file: config_file.into(),
        }
    }

    /// Read the persisted save path. None when the file is missing or
    /// empty, or when the stored directory no longer exists on disk.
    pub fn load(&self) -> Option<PathBuf> {
        let contents = fs::read_to_string(&self.config_file).ok()?;
        let stored = contents.trim();
        if stored.is_empty() {
            return None;
        }

        let path = PathBuf::from(stored);
        path.is_dir().then_some(path)
    }

    /// True when a path is persisted but its directory has since
    /// disappeared. Only picks the user-facing message; control flow is
    /// the same as for a missing config.
    pub fn is_stale(&self) -> bool {
        let Ok(contents) = fs::read_to_string(&self.config_file) else {
            return false;
        };
        let stored = contents.trim();
        !stored.is_empty() && !Path::new(stored).is_dir()
    }

    /// Persist a save path: create the directory if missing, then
    /// overwrite the config file with the path exactly as given.
    pub fn save(&self, dir: &str) -> Result<PathBuf> {
        let path = PathBuf::from(dir);
        if !path.exists() {
            fs::create_dir_all(&path)?;
        }

        fs::write(&self.config_file, dir)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_creates_directory_and_writes_exact_path() {
        let root = tempfile::tempdir().unwrap();
        let store = SavePathStore::new(root.path().join("config.txt"));

        let target = root.path().join("music");
        let target_str = target.to_str().unwrap();
        assert!(!target.exists());

        let saved = store.save(target_str).unwrap();
        assert_eq!(saved, target);
        assert!(target.is_dir());
        assert_eq!(
            fs::read_to_string(root.path().join("config.txt")).unwrap(),
            target_str
        );
    }

    #[test]
    fn load_returns_none_when_config_missing() {
        let root = tempfile::tempdir().unwrap();
        let store = SavePathStore::new(root.path().join("config.txt"));
        assert_eq!(store.load(), None);
        assert!(!store.is_stale());
    }

    #[test]
    fn load_rejects_stale_path() {
        let root = tempfile::tempdir().unwrap();
        let store = SavePathStore::new(root.path().join("config.txt"));

        let target = root.path().join("music");
        store.save(target.to_str().unwrap()).unwrap();
        fs::remove_dir(&target).unwrap();

        assert_eq!(store.load(), None);
        assert!(store.is_stale());
    }

    #[test]
    fn load_round_trips_an_existing_directory() {
        let root = tempfile::tempdir().unwrap();
        let store = SavePathStore::new(root.path().join("config.txt"));

        let target = root.path().join("music");
        store.save(target.to_str().unwrap()).unwrap();

        assert_eq!(store.load(), Some(target));
        assert!(!store.is_stale());
    }
}

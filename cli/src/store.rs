use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use minigames_core::{Storage, StorageError};

/// One JSON file per key inside a directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `dir` when configured, otherwise the platform data dir.
    pub fn open(dir: Option<&Path>) -> Option<Self> {
        let dir = match dir {
            Some(dir) => dir.to_path_buf(),
            None => crate::config::project_dirs()?.data_dir().to_path_buf(),
        };
        log::debug!("Storing data in {}", dir.display());
        Some(Self::new(dir))
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Unavailable(err.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(self.path(key), value))
            .map_err(|err| StorageError::WriteRejected(err.to_string()))
    }
}

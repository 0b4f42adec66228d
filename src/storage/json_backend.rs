//! Filesystem-backed storage: one JSON document per collection key.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use super::{Result, StoragePort};
use crate::utils;

const FILE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Durable [`StoragePort`] writing each collection to `<root>/<key>.json`.
/// Writes go through a temp file and rename so a crash mid-write never
/// leaves a half-written collection behind.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    root: PathBuf,
}

impl JsonFileStorage {
    /// Opens storage rooted at `root`, creating the directory when missing.
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Opens storage in the default application data directory
    /// (`~/.cashbook`, overridable via `CASHBOOK_HOME`).
    pub fn new_default() -> Result<Self> {
        Self::new(utils::app_data_dir())
    }

    pub fn collection_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.{FILE_EXTENSION}"))
    }
}

impl StoragePort for JsonFileStorage {
    fn read(&mut self, key: &str) -> Result<Option<String>> {
        let path = self.collection_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        write_atomic(&self.collection_path(key), value)
    }
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut tmp_path = path.to_path_buf();
    let tmp_ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp_path.set_extension(tmp_ext);

    let mut file = File::create(&tmp_path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    drop(file);

    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_collection_reads_as_none() {
        let dir = tempdir().expect("tempdir");
        let mut storage = JsonFileStorage::new(dir.path().to_path_buf()).expect("storage");
        assert_eq!(storage.read("transaksi_data").unwrap(), None);
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempdir().expect("tempdir");
        let mut storage = JsonFileStorage::new(dir.path().to_path_buf()).expect("storage");
        storage.write("buku_kas_data", "[{\"id\":\"a\"}]").unwrap();
        assert_eq!(
            storage.read("buku_kas_data").unwrap().as_deref(),
            Some("[{\"id\":\"a\"}]")
        );
        assert!(storage.collection_path("buku_kas_data").exists());
    }

    #[test]
    fn failed_write_preserves_original_file() {
        let dir = tempdir().expect("tempdir");
        let mut storage = JsonFileStorage::new(dir.path().to_path_buf()).expect("storage");
        storage.write("utang_data", "[1]").unwrap();

        // A directory squatting on the temp file name forces File::create to fail.
        let mut tmp_path = storage.collection_path("utang_data");
        tmp_path.set_extension(format!("{FILE_EXTENSION}.{TMP_SUFFIX}"));
        fs::create_dir_all(&tmp_path).unwrap();

        assert!(storage.write("utang_data", "[2]").is_err());
        assert_eq!(storage.read("utang_data").unwrap().as_deref(), Some("[1]"));
    }
}

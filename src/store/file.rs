use super::{ScoreBackend, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Stores each key as `<dir>/<key>.json`. The directory is created on first
/// write.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty()
        || key == "."
        || key.contains("..")
        || key.contains(['/', '\\'])
        || key.contains('\0')
    {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

impl ScoreBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ScoreStore;
    use crate::types::model::Scores;
    use tempfile::TempDir;

    #[test]
    fn read_missing_file_is_none() {
        let dir = TempDir::new().expect("temp dir should be created");
        let backend = FileBackend::new(dir.path());
        assert!(backend.read("absent").expect("read should succeed").is_none());
    }

    #[test]
    fn write_creates_directory_and_overwrites() {
        let dir = TempDir::new().expect("temp dir should be created");
        let backend = FileBackend::new(dir.path().join("nested/scores"));

        backend.write("model-v1", "{\"a\":1}").expect("first write");
        backend.write("model-v1", "{}").expect("second write");

        let stored = fs::read_to_string(dir.path().join("nested/scores/model-v1.json"))
            .expect("file should exist");
        assert_eq!(stored, "{}");
    }

    #[test]
    fn rejects_keys_that_escape_the_directory() {
        let backend = FileBackend::new("/tmp/unused");
        for key in ["", ".", "../x", "a/b", "a\\b"] {
            assert!(
                matches!(backend.read(key), Err(StorageError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn garbage_file_loads_empty_through_store() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("model-v1.json"), "garbage!").expect("write garbage");

        let store = ScoreStore::new(FileBackend::new(dir.path()));
        assert!(store.load("model-v1").is_empty());
        assert_eq!(
            fs::read_to_string(dir.path().join("model-v1.json")).expect("file kept"),
            "garbage!"
        );
    }

    #[test]
    fn store_persists_across_instances() {
        let dir = TempDir::new().expect("temp dir should be created");
        let scores = Scores::from_iter([("appShell", 2), ("routing", 1)]);

        ScoreStore::new(FileBackend::new(dir.path())).save("platform-v1", &scores);
        let reloaded = ScoreStore::new(FileBackend::new(dir.path())).load("platform-v1");
        assert_eq!(reloaded, scores);
    }
}

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::StoreError;

/// JSON-file-backed store for a list of catalog records.
///
/// The record shape is whatever the caller saved; the store neither
/// validates nor transforms it, so save-then-load is an identity.
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the record list as 4-space-indented JSON, replacing any
    /// existing content.
    pub fn save(&self, records: &[Value]) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut ser)?;

        if let Err(e) = std::fs::write(&self.path, buf) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write record file");
            return Err(e.into());
        }
        Ok(())
    }

    /// Read the record list back. A missing file is an empty list, not an
    /// error; a file that exists but holds invalid JSON is an error.
    pub fn load(&self) -> Result<Vec<Value>, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    /// Like [`load`](Self::load), but masks failures: anything that is not a
    /// loadable record list comes back as an empty one, logged at warn level.
    pub fn load_or_default(&self) -> Vec<Value> {
        match self.load() {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to load record file");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_records() -> Vec<Value> {
        vec![
            json!({
                "id": 113813,
                "title": { "romaji": "Kanojo, Okarishimasu" },
                "episodes": 12
            }),
            json!({
                "id": 15125,
                "title": { "romaji": "Teekyuu" }
            }),
        ]
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("anime_history.json"));

        let records = sample_records();
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_save_overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("anime_history.json"));

        store.save(&sample_records()).unwrap();
        store.save(&[json!({ "id": 1 })]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0]["id"], 1);
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("anime_history.json"));

        store.save(&[json!({ "id": 1 })]).unwrap();
        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("[\n    {"));
        assert!(text.contains("\n        \"id\": 1"));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("nope.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json {{{").unwrap();

        let store = RecordStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Parse(_))));
    }

    #[test]
    fn test_load_or_default_masks_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json {{{").unwrap();

        let store = RecordStore::new(&path);
        assert!(store.load_or_default().is_empty());
    }

    #[test]
    fn test_save_into_missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("missing").join("anime_history.json"));
        assert!(matches!(
            store.save(&sample_records()),
            Err(StoreError::Io(_))
        ));
    }
}

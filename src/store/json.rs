use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use super::{MemoryStyleStore, SavedStyle, StyleStore};
use crate::common::QRResult;
use crate::style::StyleConfig;

/// Store backed by a single JSON array on disk. The whole file is rewritten on every change,
/// through a sibling temp file and a rename so a crash never leaves it half written.
///
/// Changes are applied to a staged copy of the cache and only replace it once the file is
/// written, so the cache never holds a style the file lacks.
#[derive(Debug)]
pub struct JsonStyleStore {
    path: PathBuf,
    cache: MemoryStyleStore,
}

impl JsonStyleStore {
    /// Opens `path`, starting empty if it does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> QRResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut cache = MemoryStyleStore::new();
        if path.exists() {
            let text = fs::read_to_string(&path)?;
            let styles: Vec<SavedStyle> = serde_json::from_str(&text)?;
            debug!(path = %path.display(), count = styles.len(), "Loaded style store");
            cache.extend(styles);
        }
        Ok(Self { path, cache })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn commit(&mut self, staged: MemoryStyleStore) -> QRResult<()> {
        write_styles(&self.path, staged.styles()).inspect_err(|err| {
            warn!(path = %self.path.display(), %err, "Style store not written, change dropped");
        })?;
        self.cache = staged;
        Ok(())
    }
}

fn write_styles(path: &Path, styles: &[SavedStyle]) -> QRResult<()> {
    let json = serde_json::to_string_pretty(styles)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    Ok(())
}

impl StyleStore for JsonStyleStore {
    fn list_styles(&self, user_id: &str) -> QRResult<Vec<SavedStyle>> {
        self.cache.list_styles(user_id)
    }

    fn save_style(
        &mut self,
        user_id: &str,
        name: &str,
        config: &StyleConfig,
    ) -> QRResult<SavedStyle> {
        let mut staged = self.cache.clone();
        let saved = staged.save_style(user_id, name, config)?;
        self.commit(staged)?;
        Ok(saved)
    }

    fn load_style(&self, id: Uuid) -> QRResult<StyleConfig> {
        self.cache.load_style(id)
    }

    fn delete_style(&mut self, id: Uuid) -> QRResult<()> {
        let mut staged = self.cache.clone();
        staged.delete_style(id)?;
        self.commit(staged)
    }
}

#[cfg(test)]
mod json_store_tests {
    use std::fs;

    use tempfile::TempDir;

    use super::JsonStyleStore;
    use crate::common::QRError;
    use crate::render::EyeFrameShape;
    use crate::store::store_tests::exercise_store;
    use crate::store::StyleStore;
    use crate::style::DEFAULT_STYLE;

    #[test]
    fn test_json_store() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonStyleStore::open(dir.path().join("styles.json")).unwrap();
        exercise_store(&mut store);
    }

    #[test]
    fn test_reopen_keeps_styles() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("styles.json");
        let style = DEFAULT_STYLE.with_eye_frame_shape(EyeFrameShape::Leaf).with_size(333);

        let saved = {
            let mut store = JsonStyleStore::open(&path).unwrap();
            store.save_style("carol", "leafy", &style).unwrap()
        };
        assert!(!dir.path().join("styles.json.tmp").exists());

        let store = JsonStyleStore::open(&path).unwrap();
        assert_eq!(store.load_style(saved.id).unwrap(), style);
        assert_eq!(store.list_styles("carol").unwrap(), [saved]);
    }

    #[test]
    fn test_failed_save_leaves_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonStyleStore::open(dir.path().join("missing/sub/styles.json")).unwrap();

        let err = store.save_style("erin", "lost", &DEFAULT_STYLE).unwrap_err();
        assert!(matches!(err, QRError::Storage(_)));
        assert!(store.list_styles("erin").unwrap().is_empty());
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn test_failed_delete_keeps_style() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        let mut store = JsonStyleStore::open(sub.join("styles.json")).unwrap();
        let saved = store.save_style("finn", "kept", &DEFAULT_STYLE).unwrap();

        fs::remove_dir_all(&sub).unwrap();
        assert!(matches!(store.delete_style(saved.id), Err(QRError::Storage(_))));
        assert_eq!(store.load_style(saved.id).unwrap(), DEFAULT_STYLE);
        assert_eq!(store.list_styles("finn").unwrap(), [saved.clone()]);

        fs::create_dir(&sub).unwrap();
        store.delete_style(saved.id).unwrap();
        assert!(matches!(store.load_style(saved.id), Err(QRError::StyleNotFound(_))));
        let reopened = JsonStyleStore::open(sub.join("styles.json")).unwrap();
        assert!(reopened.list_styles("finn").unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("styles.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(JsonStyleStore::open(&path), Err(QRError::Storage(_))));
    }
}

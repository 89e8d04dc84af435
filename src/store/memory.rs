use uuid::Uuid;

use super::{SavedStyle, StyleStore};
use crate::common::{QRError, QRResult};
use crate::style::StyleConfig;

/// In-process store, insertion ordered.
#[derive(Debug, Clone, Default)]
pub struct MemoryStyleStore {
    styles: Vec<SavedStyle>,
}

impl MemoryStyleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub(super) fn styles(&self) -> &[SavedStyle] {
        &self.styles
    }

    pub(super) fn extend(&mut self, styles: impl IntoIterator<Item = SavedStyle>) {
        self.styles.extend(styles);
    }
}

impl StyleStore for MemoryStyleStore {
    fn list_styles(&self, user_id: &str) -> QRResult<Vec<SavedStyle>> {
        Ok(self.styles.iter().filter(|s| s.user_id == user_id).cloned().collect())
    }

    fn save_style(
        &mut self,
        user_id: &str,
        name: &str,
        config: &StyleConfig,
    ) -> QRResult<SavedStyle> {
        let saved = SavedStyle::new(user_id, name, *config);
        self.styles.push(saved.clone());
        Ok(saved)
    }

    fn load_style(&self, id: Uuid) -> QRResult<StyleConfig> {
        self.styles
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.config)
            .ok_or_else(|| QRError::StyleNotFound(id.to_string()))
    }

    fn delete_style(&mut self, id: Uuid) -> QRResult<()> {
        let idx = self
            .styles
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| QRError::StyleNotFound(id.to_string()))?;
        self.styles.remove(idx);
        Ok(())
    }
}

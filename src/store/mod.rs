//! Persistence of named styles. The renderer never calls into this module; callers load a
//! [`StyleConfig`] here and hand it to the pipeline like any other.

mod json;
mod memory;

pub use json::JsonStyleStore;
pub use memory::MemoryStyleStore;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::QRResult;
use crate::style::StyleConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedStyle {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub config: StyleConfig,
}

impl SavedStyle {
    pub fn new(user_id: &str, name: &str, config: StyleConfig) -> Self {
        Self { id: Uuid::new_v4(), user_id: user_id.to_owned(), name: name.to_owned(), config }
    }
}

pub trait StyleStore {
    /// Styles owned by `user_id`, oldest first.
    fn list_styles(&self, user_id: &str) -> QRResult<Vec<SavedStyle>>;

    fn save_style(
        &mut self,
        user_id: &str,
        name: &str,
        config: &StyleConfig,
    ) -> QRResult<SavedStyle>;

    /// Fails with [`QRError::StyleNotFound`](crate::QRError::StyleNotFound) for unknown ids.
    fn load_style(&self, id: Uuid) -> QRResult<StyleConfig>;

    fn delete_style(&mut self, id: Uuid) -> QRResult<()>;
}

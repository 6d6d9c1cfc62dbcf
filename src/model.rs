//! Bottom-sheet menu entries
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BottomSheetItem {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub text_style: Option<String>,
    #[serde(default)]
    pub is_selected: bool,
}

impl BottomSheetItem {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        BottomSheetItem {
            id,
            title: title.into(),
            text_style: None,
            is_selected: false,
        }
    }
}

/// Selects the entry with `id` and clears every other one. Returns false, leaving the
/// selection unchanged, when no entry has that id.
pub fn select_single(items: &mut [BottomSheetItem], id: u32) -> bool {
    if !items.iter().any(|item| item.id == id) {
        return false;
    }
    for item in items.iter_mut() {
        item.is_selected = item.id == id;
    }
    true
}

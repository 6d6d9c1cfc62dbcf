// /src/errors.rs
//! Error handling for the fallible edges of the crate. Reconciliation itself never fails.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReconcilerError {
    #[error("Duplicate item identity '{item_id}' in submitted list")]
    DuplicateIdentity { item_id: String },

    #[error("{action} at index {index} is out of bounds for list of length {len}")]
    IndexOutOfBounds {
        action: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Position {position} does not refer to a displayed row (len {len})")]
    InvalidPosition { position: usize, len: usize },

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

// Bounds check shared by the replay helpers
#[macro_export]
macro_rules! check_index {
    ($action:expr, $index:expr, $len:expr) => {{
        if $index >= $len {
            return Err($crate::errors::ReconcilerError::IndexOutOfBounds {
                action: $action,
                index: $index,
                len: $len,
            });
        }
    }};
}

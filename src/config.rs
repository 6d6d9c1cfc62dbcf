//! Reconciler settings
use crate::errors::ReconcilerError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcilerConfig {
    /// Report reordered rows as moves. When off they are removed and re-inserted.
    pub detect_moves: bool,
    /// Scan each submitted list for repeated identities and log them.
    pub check_unique_ids: bool,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        ReconcilerConfig {
            detect_moves: true,
            check_unique_ids: false,
        }
    }
}

impl ReconcilerConfig {
    pub fn from_json(json: &str) -> Result<Self, ReconcilerError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = ReconcilerConfig::from_json(r#"{"check_unique_ids": true}"#).unwrap();
        assert!(config.detect_moves);
        assert!(config.check_unique_ids);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ReconcilerConfig::from_json("detect_moves").is_err());
    }
}

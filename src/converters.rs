//! JSON conversion at the crate boundary
use crate::errors::ReconcilerError;
use crate::types::{LiveEvent, Operation};

/// Parse a JSON array of live events
pub fn parse_live_events(json: &str) -> Result<Vec<LiveEvent>, ReconcilerError> {
    Ok(serde_json::from_str(json)?)
}

/// `[{"action":"MOVE","from":1,"to":0}, {"action":"UPDATE","index":0}]`
pub fn operations_to_json(operations: &[Operation]) -> Result<serde_json::Value, ReconcilerError> {
    Ok(serde_json::to_value(operations)?)
}

//! Live event records, their frozen snapshots, and the operations a reconciliation emits
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiveEventState {
    Created,
    Ready,
    Ongoing,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiveEventType {
    #[default]
    Video,
    AudioOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    pub user_id: String,
}

impl Host {
    pub fn new(user_id: impl Into<String>) -> Self {
        Host { user_id: user_id.into() }
    }
}

/// A live event as delivered by the upstream source. Fields may change between passes;
/// only `item_id` is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveEvent {
    pub item_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    pub state: LiveEventState,
    #[serde(default)]
    pub event_type: LiveEventType,
    #[serde(default)]
    pub participant_count: u32,
    #[serde(default)]
    pub hosts: Vec<Host>,
    #[serde(default)]
    pub is_host_streaming: bool,
}

impl LiveEvent {
    pub fn new(item_id: impl Into<String>, state: LiveEventState) -> Self {
        LiveEvent {
            item_id: item_id.into(),
            title: None,
            cover_url: None,
            state,
            event_type: LiveEventType::Video,
            participant_count: 0,
            hosts: Vec::new(),
            is_host_streaming: false,
        }
    }

    /// Host user ids joined with ", " in host-list order.
    pub fn host_names(&self) -> String {
        self.hosts
            .iter()
            .map(|h| h.user_id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Frozen copy of the display-relevant fields of a [`LiveEvent`], taken when it was
/// last reconciled. Holds no reference back to the source record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    item_id: String,
    pub title: Option<String>,
    pub cover_url: Option<String>,
    pub state: LiveEventState,
    pub participant_count: u32,
    pub host_names: String,
    pub is_host_streaming: bool,
}

impl Snapshot {
    pub fn capture(event: &LiveEvent) -> Self {
        Snapshot {
            item_id: event.item_id.clone(),
            title: event.title.clone(),
            cover_url: event.cover_url.clone(),
            state: event.state,
            participant_count: event.participant_count,
            host_names: event.host_names(),
            is_host_streaming: event.is_host_streaming,
        }
    }

    pub fn capture_all(events: &[LiveEvent]) -> Vec<Snapshot> {
        events.iter().map(Snapshot::capture).collect()
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn same_identity(&self, new: &LiveEvent) -> bool {
        self.item_id == new.item_id
    }

    /// Host names are re-derived from the new record's host list on every comparison.
    pub fn same_content(&self, new: &LiveEvent) -> bool {
        self.state == new.state
            && self.title == new.title
            && self.cover_url == new.cover_url
            && self.is_host_streaming == new.is_host_streaming
            && self.participant_count == new.participant_count
            && self.host_names == new.host_names()
    }
}

/// One step of a reconciliation. Indices refer to the list as it stands after every
/// preceding operation in the same sequence has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Insert { index: usize },
    Remove { index: usize },
    Move { from: usize, to: usize },
    Update { index: usize },
}

impl Operation {
    pub fn action_name(&self) -> &'static str {
        match self {
            Operation::Insert { .. } => "INSERT",
            Operation::Remove { .. } => "REMOVE",
            Operation::Move { .. } => "MOVE",
            Operation::Update { .. } => "UPDATE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert { index }
            | Operation::Remove { index }
            | Operation::Update { index } => write!(f, "{}({})", self.action_name(), index),
            Operation::Move { from, to } => write!(f, "MOVE({} -> {})", from, to),
        }
    }
}

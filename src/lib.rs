//! Keyed list reconciliation for live event lists.
//!
//! A [`Reconciler`] keeps frozen [`Snapshot`]s of what is on screen. Each submitted
//! list is diffed against them and the result comes back as an ordered sequence of
//! [`Operation`]s (remove, move, insert, update) that converge the displayed list onto
//! the new one with the fewest edits. [`LiveEventListAdapter`] wires that to an
//! [`OperationSink`], an empty-state signal, and click routing.
pub mod adapter;
pub mod config;
pub mod converters;
pub mod diff_engine;
pub mod errors;
pub mod live_data;
pub mod model;
pub mod reconciler;
pub mod row;
pub mod sink;
pub mod types;

pub use adapter::{LiveEventListAdapter, OnItemClickListener};
pub use config::ReconcilerConfig;
pub use converters::{operations_to_json, parse_live_events};
pub use diff_engine::DiffEngine;
pub use errors::ReconcilerError;
pub use live_data::LiveData;
pub use model::{BottomSheetItem, select_single};
pub use reconciler::{Reconciler, validate_unique_ids};
pub use row::{Cover, LiveEventRow};
pub use sink::{OperationSink, RecordingSink, dispatch_all, replay};
pub use types::{Host, LiveEvent, LiveEventState, LiveEventType, Operation, Snapshot};

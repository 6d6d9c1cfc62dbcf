//! Display projection of a single live event row
use crate::types::{LiveEvent, LiveEventState, LiveEventType};
use serde::Serialize;

pub const PLACEHOLDER_COVER_SLOTS: usize = 5;
const DEFAULT_TITLE: &str = "Live event";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Cover {
    Url(String),
    Placeholder(usize),
}

/// Everything a row shows, computed from the event alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveEventRow {
    pub title: String,
    pub subtitle: String,
    pub participant_count: String,
    pub is_live_indicator: bool,
    pub type_label: &'static str,
    pub status_label: &'static str,
    pub cover: Cover,
}

impl LiveEventRow {
    pub fn bind(event: &LiveEvent) -> Self {
        let title = match event.title.as_deref() {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => DEFAULT_TITLE.to_string(),
        };
        let cover = match event.cover_url.as_deref() {
            Some(url) if !url.trim().is_empty() => Cover::Url(url.to_string()),
            _ => Cover::Placeholder(placeholder_slot(&event.item_id)),
        };

        LiveEventRow {
            title,
            subtitle: event.host_names(),
            participant_count: format_participant_count(event.participant_count),
            is_live_indicator: event.state == LiveEventState::Ongoing,
            type_label: match event.event_type {
                LiveEventType::AudioOnly => "AUDIO ONLY",
                LiveEventType::Video => "VIDEO",
            },
            status_label: status_label(event.state),
            cover,
        }
    }
}

pub fn status_label(state: LiveEventState) -> &'static str {
    match state {
        LiveEventState::Created => "UPCOMING",
        LiveEventState::Ready => "OPEN",
        LiveEventState::Ongoing => "LIVE",
        LiveEventState::Ended => "ENDED",
    }
}

/// Placeholder cover keyed on identity, so a row keeps its cover when the list reorders.
pub fn placeholder_slot(item_id: &str) -> usize {
    let hash = item_id
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    hash as usize % PLACEHOLDER_COVER_SLOTS
}

/// `999`, `1.2K`, `34K`, `5.6M`. Truncates rather than rounds.
pub fn format_participant_count(count: u32) -> String {
    fn scaled(count: u32, unit: u32, suffix: char) -> String {
        let tenths = count / (unit / 10);
        let (whole, frac) = (tenths / 10, tenths % 10);
        if frac == 0 {
            format!("{}{}", whole, suffix)
        } else {
            format!("{}.{}{}", whole, frac, suffix)
        }
    }

    match count {
        0..=999 => count.to_string(),
        1_000..=999_999 => scaled(count, 1_000, 'K'),
        _ => scaled(count, 1_000_000, 'M'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Host;

    #[test]
    fn counts_are_abbreviated() {
        assert_eq!(format_participant_count(0), "0");
        assert_eq!(format_participant_count(999), "999");
        assert_eq!(format_participant_count(1_000), "1K");
        assert_eq!(format_participant_count(1_250), "1.2K");
        assert_eq!(format_participant_count(999_999), "999.9K");
        assert_eq!(format_participant_count(3_400_000), "3.4M");
    }

    #[test]
    fn bind_falls_back_for_missing_fields() {
        let mut event = LiveEvent::new("ev-7", LiveEventState::Created);
        event.title = Some(String::new());
        event.cover_url = Some("   ".into());
        let row = LiveEventRow::bind(&event);

        assert_eq!(row.title, "Live event");
        assert_eq!(row.status_label, "UPCOMING");
        assert_eq!(row.type_label, "VIDEO");
        assert!(!row.is_live_indicator);
        assert_eq!(row.cover, Cover::Placeholder(placeholder_slot("ev-7")));
    }

    #[test]
    fn bind_uses_event_fields() {
        let mut event = LiveEvent::new("ev-1", LiveEventState::Ongoing);
        event.title = Some("Q&A".into());
        event.cover_url = Some("https://cdn.example/c.png".into());
        event.event_type = LiveEventType::AudioOnly;
        event.participant_count = 4_200;
        event.hosts = vec![Host::new("kim"), Host::new("lee")];
        let row = LiveEventRow::bind(&event);

        assert_eq!(row.title, "Q&A");
        assert_eq!(row.subtitle, "kim, lee");
        assert_eq!(row.participant_count, "4.2K");
        assert_eq!(row.type_label, "AUDIO ONLY");
        assert_eq!(row.status_label, "LIVE");
        assert!(row.is_live_indicator);
        assert_eq!(row.cover, Cover::Url("https://cdn.example/c.png".into()));
    }

    #[test]
    fn placeholder_is_stable_and_in_range() {
        for id in ["a", "b", "live-123", ""] {
            let slot = placeholder_slot(id);
            assert!(slot < PLACEHOLDER_COVER_SLOTS);
            assert_eq!(slot, placeholder_slot(id));
        }
    }
}

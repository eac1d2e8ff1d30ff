// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only projection of session records: filter tabs and display helpers.

use chrono::{DateTime, Utc};
use strum::{Display, EnumString};

use crate::model::SessionRecord;

/// The dashboard's filter tabs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum FilterTab {
    #[default]
    All,
    Chats,
    Mood,
}

impl FilterTab {
    /// The tab's predicate over a single record.
    pub fn matches(&self, record: &SessionRecord) -> bool {
        match self {
            FilterTab::All => true,
            FilterTab::Chats => record.has_chat(),
            FilterTab::Mood => record.has_mood(),
        }
    }
}

/// Partitions `records` by the tab's predicate, preserving input order.
///
/// `All` returns the full input unchanged.
pub fn filter_sessions<'a>(
    records: &'a [SessionRecord],
    tab: FilterTab,
) -> Vec<&'a SessionRecord> {
    records.iter().filter(|r| tab.matches(r)).collect()
}

/// Relative-time label for a session's last activity.
///
/// Mirrors the dashboard's display: "just now" under a minute, then
/// minutes, hours, and days, falling back to the date after a week.
/// A timestamp in the future is treated as "just now".
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let secs = elapsed.num_seconds();

    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", elapsed.num_minutes())
    } else if secs < 86_400 {
        format!("{}h ago", elapsed.num_hours())
    } else if secs < 7 * 86_400 {
        format!("{}d ago", elapsed.num_days())
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}

/// Badge text for a chat's unread counter, `None` when everything is read.
pub fn unread_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 unread message".to_string()),
        n => Some(format!("{n} unread messages")),
    }
}

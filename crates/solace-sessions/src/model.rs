// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session record types for the counselor dashboard.
//!
//! Records are immutable from this crate's perspective: they arrive from
//! the backend (or a fixture file) and are only projected, never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use solace_core::SessionId;
use strum::{Display, EnumString};

/// What a session consists of: a chat, mood reports, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Chat,
    Mood,
    Both,
}

/// Lifecycle status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Closed,
}

/// Mood kinds reported through the mood tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Anxious,
    Sad,
    Angry,
    Stressed,
}

impl Mood {
    /// Emoji shown next to the mood in the dashboard summary line.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Calm => "😌",
            Mood::Anxious => "😰",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Stressed => "😫",
        }
    }
}

/// The latest mood report attached to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodReport {
    pub mood: Mood,
    /// Self-reported intensity, 1..=10.
    pub intensity: u8,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
}

/// One anonymous counseling session as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: SessionId,
    #[serde(rename = "type")]
    pub kind: SessionKind,
    pub status: SessionStatus,
    pub last_activity: DateTime<Utc>,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub mood_report: Option<MoodReport>,
}

impl SessionRecord {
    /// True if the session carries a chat component.
    pub fn has_chat(&self) -> bool {
        matches!(self.kind, SessionKind::Chat | SessionKind::Both)
    }

    /// True if the session carries mood reports.
    pub fn has_mood(&self) -> bool {
        matches!(self.kind, SessionKind::Mood | SessionKind::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_from_backend_shape() {
        let json = serde_json::json!({
            "id": "1042",
            "type": "both",
            "status": "active",
            "lastActivity": "2026-08-20T14:30:00Z",
            "lastMessage": "Thanks, that helped a lot.",
            "unreadCount": 2,
            "moodReport": {
                "mood": "anxious",
                "intensity": 7,
                "notes": "exam week",
                "triggers": ["deadlines"]
            }
        });

        let record: SessionRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.id, SessionId("1042".into()));
        assert_eq!(record.kind, SessionKind::Both);
        assert!(record.has_chat());
        assert!(record.has_mood());
        let report = record.mood_report.unwrap();
        assert_eq!(report.mood, Mood::Anxious);
        assert_eq!(report.intensity, 7);
    }

    #[test]
    fn optional_fields_default() {
        let json = serde_json::json!({
            "id": "7",
            "type": "mood",
            "status": "closed",
            "lastActivity": "2026-08-01T09:00:00Z"
        });

        let record: SessionRecord = serde_json::from_value(json).unwrap();
        assert!(!record.has_chat());
        assert_eq!(record.unread_count, 0);
        assert!(record.last_message.is_none());
        assert!(record.mood_report.is_none());
    }
}

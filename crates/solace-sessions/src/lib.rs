// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session records and the counselor dashboard projection.
//!
//! This crate is read-only: it models the session records the backend
//! serves and projects them through the dashboard's filter tabs. There is
//! no mutation and no concurrency here.

pub mod model;
pub mod view;

pub use model::{Mood, MoodReport, SessionKind, SessionRecord, SessionStatus};
pub use view::{filter_sessions, time_ago, unread_label, FilterTab};

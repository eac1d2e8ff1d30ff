// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification trait for surfacing transient user-visible messages.

use async_trait::async_trait;

use crate::types::Notice;

/// Sink for transient user-visible notifications.
///
/// Delivery is fire-and-forget: a notifier must not fail the operation
/// that produced the notice, so `notify` is infallible. Implementations
/// that hit a presentation error should log it and move on.
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    /// Delivers one notice to the user.
    async fn notify(&self, notice: Notice);
}

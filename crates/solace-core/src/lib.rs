// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Solace client workspace.
//!
//! This crate provides the shared error type, common types, and the
//! notification trait used by the settings and sessions crates. Hosts
//! (the CLI, tests) implement [`Notifier`] to decide how transient
//! messages reach the user.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SolaceError;
pub use traits::Notifier;
pub use types::{Notice, NoticeLevel, SessionId};

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn solace_error_has_all_variants() {
        // Verify all 5 error variants exist and can be constructed.
        let _config = SolaceError::Config("test".into());
        let _api = SolaceError::Api {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _unknown = SolaceError::UnknownSetting {
            category: "security".into(),
            setting: "nope".into(),
        };
        let _invalid = SolaceError::InvalidValue {
            category: "system".into(),
            setting: "logLevel".into(),
            value: "loud".into(),
        };
        let _internal = SolaceError::Internal("test".into());
    }

    #[test]
    fn error_display_includes_path() {
        let err = SolaceError::UnknownSetting {
            category: "security".into(),
            setting: "sessionTimeot".into(),
        };
        assert_eq!(err.to_string(), "unknown setting: security.sessionTimeot");
    }

    #[test]
    fn notice_constructors_set_level() {
        let ok = Notice::success("saved");
        let bad = Notice::error("rejected");
        assert_eq!(ok.level, NoticeLevel::Success);
        assert_eq!(bad.level, NoticeLevel::Error);
        assert_eq!(ok.message, "saved");
        assert_eq!(bad.message, "rejected");
    }

    #[test]
    fn notice_level_serialization_round_trips() {
        let json = serde_json::to_string(&NoticeLevel::Error).expect("should serialize");
        assert_eq!(json, "\"error\"");
        let parsed: NoticeLevel = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(parsed, NoticeLevel::Error);
    }

    struct CountingNotifier(Arc<AtomicUsize>);

    #[async_trait]
    impl Notifier for CountingNotifier {
        async fn notify(&self, _notice: Notice) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn notifier_is_usable_as_a_trait_object() {
        let delivered = Arc::new(AtomicUsize::new(0));
        let notifier: Box<dyn Notifier> = Box::new(CountingNotifier(delivered.clone()));

        notifier.notify(Notice::success("one")).await;
        notifier.notify(Notice::error("two")).await;

        assert_eq!(delivered.load(Ordering::SeqCst), 2);
    }
}

// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the optimistic-write / revert-by-resync protocol.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use solace_core::{Notice, NoticeLevel, Notifier, SolaceError};
use solace_settings::{SettingCategory, SettingValue, Settings, SettingsClient, SettingsStore};
use tokio::sync::Mutex;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Notifier that records every notice for later assertions.
#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    async fn count(&self, level: NoticeLevel) -> usize {
        self.notices
            .lock()
            .await
            .iter()
            .filter(|n| n.level == level)
            .count()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notice: Notice) {
        self.notices.lock().await.push(notice);
    }
}

fn test_store(base_url: &str) -> (SettingsStore, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let client = SettingsClient::new(base_url, "test-token", Duration::from_secs(5)).unwrap();
    (SettingsStore::new(client, notifier.clone()), notifier)
}

fn snapshot_body(settings: &Settings) -> serde_json::Value {
    serde_json::json!({ "success": true, "settings": settings })
}

#[tokio::test]
async fn load_replaces_snapshot_wholesale() {
    let server = MockServer::start().await;

    let mut remote = Settings::default();
    remote.security.session_timeout = 45;
    remote.notifications.email_notifications = false;

    Mock::given(method("GET"))
        .and(path("/api/admin/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body(&remote)))
        .mount(&server)
        .await;

    let (store, notifier) = test_store(&server.uri());
    assert!(store.is_loading());

    assert!(store.load().await);
    assert!(!store.is_loading());
    assert_eq!(store.snapshot().await, remote);
    assert_eq!(notifier.count(NoticeLevel::Error).await, 0);
}

#[tokio::test]
async fn reload_with_unchanged_remote_is_idempotent() {
    let server = MockServer::start().await;

    let mut remote = Settings::default();
    remote.security.password_expiry = 60;

    Mock::given(method("GET"))
        .and(path("/api/admin/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body(&remote)))
        .expect(2)
        .mount(&server)
        .await;

    let (store, _) = test_store(&server.uri());

    store.load().await;
    let first = store.snapshot().await;
    store.load().await;
    let second = store.snapshot().await;

    assert_eq!(first, second);
    assert_eq!(first, remote);
}

#[tokio::test]
async fn failed_load_keeps_prior_snapshot() {
    let server = MockServer::start().await;

    let mut remote = Settings::default();
    remote.security.session_timeout = 45;

    // First fetch succeeds, every later one fails.
    Mock::given(method("GET"))
        .and(path("/api/admin/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body(&remote)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/settings"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let (store, notifier) = test_store(&server.uri());

    assert!(store.load().await);
    assert!(!store.load().await);

    assert!(!store.is_loading());
    assert_eq!(store.snapshot().await, remote);
    assert_eq!(notifier.count(NoticeLevel::Error).await, 1);
}

#[tokio::test]
async fn confirmed_update_keeps_optimistic_value_without_resync() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/settings"))
        .and(body_partial_json(serde_json::json!({
            "category": "security",
            "setting": "sessionTimeout",
            "value": 45
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
        )
        .expect(1)
        .mount(&server)
        .await;
    // A resync after a confirmed write would be a protocol violation.
    Mock::given(method("GET"))
        .and(path("/api/admin/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body(&Settings::default())))
        .expect(0)
        .mount(&server)
        .await;

    let (store, notifier) = test_store(&server.uri());

    let committed = store
        .update_field(
            SettingCategory::Security,
            "sessionTimeout",
            SettingValue::Int(45),
        )
        .await
        .unwrap();

    assert!(committed);
    assert_eq!(store.snapshot().await.security.session_timeout, 45);
    assert_eq!(notifier.count(NoticeLevel::Success).await, 1);
    assert_eq!(notifier.count(NoticeLevel::Error).await, 0);
}

#[tokio::test]
async fn rejected_update_reverts_via_full_resync() {
    let server = MockServer::start().await;

    // Remote authority holds sessionTimeout = 30 throughout.
    Mock::given(method("PUT"))
        .and(path("/api/admin/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "value not allowed"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body(&Settings::default())))
        .expect(1)
        .mount(&server)
        .await;

    let (store, notifier) = test_store(&server.uri());
    assert_eq!(store.snapshot().await.security.session_timeout, 30);

    let committed = store
        .update_field(
            SettingCategory::Security,
            "sessionTimeout",
            SettingValue::Int(999),
        )
        .await
        .unwrap();

    assert!(!committed);
    // Final state is whatever the corrective fetch returned, not 999.
    assert_eq!(store.snapshot().await.security.session_timeout, 30);
    // Exactly one error notification, carrying the envelope message.
    assert_eq!(notifier.count(NoticeLevel::Error).await, 1);
    let notices = notifier.notices.lock().await;
    assert!(notices[0].message.contains("value not allowed"));
}

#[tokio::test]
async fn update_mutates_only_the_named_field() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/settings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
        )
        .mount(&server)
        .await;

    let (store, _) = test_store(&server.uri());

    store
        .update_field(
            SettingCategory::Notifications,
            "emailNotifications",
            SettingValue::Bool(false),
        )
        .await
        .unwrap();

    let mut expected = Settings::default();
    expected.notifications.email_notifications = false;
    assert_eq!(store.snapshot().await, expected);
}

#[tokio::test]
async fn unknown_setting_is_rejected_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/settings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
        )
        .expect(0)
        .mount(&server)
        .await;

    let (store, notifier) = test_store(&server.uri());

    let err = store
        .update_field(
            SettingCategory::Security,
            "sessionTimeot",
            SettingValue::Int(45),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, SolaceError::UnknownSetting { .. }));
    assert_eq!(store.snapshot().await, Settings::default());
    assert_eq!(notifier.count(NoticeLevel::Error).await, 0);
}

#[tokio::test]
async fn overlapping_writes_are_serialized_by_the_gate() {
    let server = MockServer::start().await;

    // The first write is rejected slowly; its corrective resync returns the
    // remote snapshot, which has debugMode = false.
    Mock::given(method("PUT"))
        .and(path("/api/admin/settings"))
        .and(body_partial_json(
            serde_json::json!({"setting": "sessionTimeout"}),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": false}))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/settings"))
        .and(body_partial_json(serde_json::json!({"setting": "debugMode"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body(&Settings::default())))
        .expect(1)
        .mount(&server)
        .await;

    let (store, _) = test_store(&server.uri());

    // The second write is issued while the first is still in flight.
    // Without the write gate, the first write's corrective resync could
    // land after the second write's optimistic apply and silently discard
    // it; with the gate, the second write waits out the resync.
    let (first, second) = tokio::join!(
        store.update_field(
            SettingCategory::Security,
            "sessionTimeout",
            SettingValue::Int(45),
        ),
        async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            store
                .update_field(SettingCategory::System, "debugMode", SettingValue::Bool(true))
                .await
        },
    );

    assert!(!first.unwrap());
    assert!(second.unwrap());

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.security.session_timeout, 30);
    assert!(snapshot.system.debug_mode);
}

// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The settings store: owned snapshot plus the optimistic-write protocol.
//!
//! [`SettingsStore`] is the sole in-memory owner of the current settings
//! snapshot; the remote authority owns the durable copy. Reads replace the
//! snapshot wholesale, writes mutate one field optimistically and fall back
//! to a full resynchronization when the remote rejects them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use solace_core::{Notice, Notifier, SolaceError};
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::client::SettingsClient;
use crate::types::{SettingCategory, SettingValue, Settings, UpdateRequest};

/// In-memory settings store with optimistic single-field writes.
///
/// Writes are serialized through an internal gate: at most one
/// [`update_field`](Self::update_field) round trip, including its
/// corrective resync, is in flight at a time. Overlapping callers queue
/// on the gate instead of interleaving, so a later write can never be
/// silently discarded by an earlier write's resynchronization.
pub struct SettingsStore {
    client: SettingsClient,
    notifier: Arc<dyn Notifier>,
    current: RwLock<Settings>,
    loading: AtomicBool,
    write_gate: Mutex<()>,
}

impl SettingsStore {
    /// Creates a store seeded with the hardcoded defaults.
    ///
    /// The store starts in the loading state; the first [`load`](Self::load)
    /// resolution clears it.
    pub fn new(client: SettingsClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            current: RwLock::new(Settings::default()),
            loading: AtomicBool::new(true),
            write_gate: Mutex::new(()),
        }
    }

    /// Returns a clone of the current snapshot.
    pub async fn snapshot(&self) -> Settings {
        self.current.read().await.clone()
    }

    /// True while the initial fetch has not yet resolved.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Fetches the full snapshot from the remote authority.
    ///
    /// On success the snapshot is replaced wholesale; on any failure the
    /// prior snapshot is retained and an error notice is emitted. Either
    /// way the loading flag is clear afterwards and the snapshot is never
    /// a partial merge. Returns whether the snapshot was refreshed.
    pub async fn load(&self) -> bool {
        let refreshed = self.resync().await;
        self.loading.store(false, Ordering::SeqCst);
        refreshed
    }

    /// Applies `value` optimistically, then confirms it with the remote.
    ///
    /// The caller is responsible for range validation (clamping bounded
    /// integers, restricting enumerated strings); the store only rejects
    /// category/field pairs outside the schema, before any network traffic.
    ///
    /// On remote rejection the optimistic value is discarded by re-fetching
    /// the entire snapshot, never by a single-field rollback: the remote
    /// may have independently changed other fields. The failed write is
    /// never retried.
    ///
    /// Returns `Ok(true)` when the write was confirmed, `Ok(false)` when it
    /// was rejected and the snapshot resynchronized, and `Err` only for
    /// schema violations detected before the write was issued.
    pub async fn update_field(
        &self,
        category: SettingCategory,
        setting: &str,
        value: SettingValue,
    ) -> Result<bool, SolaceError> {
        // Held across the remote round trip and any corrective resync.
        let _gate = self.write_gate.lock().await;

        {
            let mut current = self.current.write().await;
            current.apply(category, setting, &value)?;
        }

        let request = UpdateRequest {
            category,
            setting: setting.to_string(),
            value,
        };

        match self.client.put_setting(&request).await {
            Ok(()) => {
                info!(category = %category, setting, "setting update confirmed");
                self.notifier
                    .notify(Notice::success("Setting updated successfully"))
                    .await;
                Ok(true)
            }
            Err(err) => {
                warn!(category = %category, setting, error = %err, "setting update rejected, resynchronizing");
                self.notifier.notify(Notice::error(err.to_string())).await;
                self.resync().await;
                Ok(false)
            }
        }
    }

    /// Replaces the snapshot with a fresh read from the remote authority.
    async fn resync(&self) -> bool {
        match self.client.fetch_settings().await {
            Ok(snapshot) => {
                *self.current.write().await = snapshot;
                true
            }
            Err(err) => {
                warn!(error = %err, "settings fetch failed, keeping prior snapshot");
                self.notifier
                    .notify(Notice::error("Failed to load settings"))
                    .await;
                false
            }
        }
    }
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("loading", &self.is_loading())
            .finish_non_exhaustive()
    }
}

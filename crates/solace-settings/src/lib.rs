// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System settings for the Solace admin panel.
//!
//! Three pieces, layered bottom-up:
//!
//! - [`types`] / [`schema`]: the fixed two-level settings mapping
//!   (category -> field -> value) and its static schema with bounds,
//! - [`client`]: the HTTP client for the settings endpoint (bearer auth,
//!   envelope decoding),
//! - [`store`]: [`SettingsStore`], the owned snapshot with the
//!   optimistic-write / revert-by-resync protocol.

pub mod client;
pub mod schema;
pub mod store;
pub mod types;

pub use client::SettingsClient;
pub use schema::{FieldKind, FieldSpec, SCHEMA};
pub use store::SettingsStore;
pub use types::{
    BackupFrequency, LogLevel, SettingCategory, SettingValue, Settings, UpdateRequest,
};

// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `solace settings` subcommands: show the panel, set a single field.
//!
//! This module is the presentation layer in front of the store: it clamps
//! bounded integers and validates enumerated strings against the schema
//! before calling `update_field`, which trusts its caller on range.

use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use solace_config::SolaceConfig;
use solace_core::{Notifier, SolaceError};
use solace_settings::schema::{self, FieldKind, FieldSpec};
use solace_settings::{SettingCategory, SettingValue, SettingsClient, SettingsStore};

use crate::notify::TermNotifier;

fn build_store(config: &SolaceConfig) -> Result<SettingsStore, SolaceError> {
    let token = config
        .api
        .token
        .as_deref()
        .ok_or_else(|| SolaceError::Config("api.token is not set".into()))?;
    let client = SettingsClient::new(
        &config.api.base_url,
        token,
        Duration::from_secs(config.api.timeout_secs),
    )?;
    let notifier: Arc<dyn Notifier> = Arc::new(TermNotifier);
    Ok(SettingsStore::new(client, notifier))
}

/// Fetches and prints the full settings panel, grouped by category.
///
/// Returns `Ok(false)` when the snapshot could not be loaded; the store
/// has already surfaced the error notice in that case.
pub async fn show(config: &SolaceConfig) -> Result<bool, SolaceError> {
    let store = build_store(config)?;

    if !store.load().await {
        return Ok(false);
    }

    let snapshot = store.snapshot().await;
    for category in [
        SettingCategory::Notifications,
        SettingCategory::Security,
        SettingCategory::System,
    ] {
        println!("{}", heading(category).bold());
        for spec in schema::category_fields(category) {
            let Some(value) = snapshot.get(category, spec.name) else {
                continue;
            };
            println!(
                "  {:<22} {}",
                schema::display_label(spec.name),
                render_value(spec, &value)
            );
        }
        println!();
    }

    Ok(true)
}

/// Sets one field through the optimistic-write protocol.
///
/// Returns `Ok(true)` when the write was confirmed and `Ok(false)` when the
/// remote rejected it and the snapshot was resynchronized.
pub async fn set(
    config: &SolaceConfig,
    category: SettingCategory,
    setting: &str,
    raw_value: &str,
) -> Result<bool, SolaceError> {
    let spec = schema::field_spec(category, setting).ok_or_else(|| {
        SolaceError::UnknownSetting {
            category: category.to_string(),
            setting: setting.to_string(),
        }
    })?;
    let value = parse_value(spec, raw_value)?;

    let store = build_store(config)?;
    let committed = store.update_field(category, setting, value).await?;

    if !committed
        && let Some(current) = store.snapshot().await.get(category, setting)
    {
        println!(
            "{} is back to {}",
            schema::display_label(setting),
            current.to_string().bold()
        );
    }

    Ok(committed)
}

/// Parses the raw CLI argument into a typed value, clamping bounded fields.
fn parse_value(spec: &FieldSpec, raw: &str) -> Result<SettingValue, SolaceError> {
    let invalid = || SolaceError::InvalidValue {
        category: spec.category.to_string(),
        setting: spec.name.to_string(),
        value: raw.to_string(),
    };

    match spec.kind {
        FieldKind::Toggle => match raw {
            "on" | "true" => Ok(SettingValue::Bool(true)),
            "off" | "false" => Ok(SettingValue::Bool(false)),
            _ => Err(invalid()),
        },
        FieldKind::Bounded { .. } => {
            let parsed: i64 = raw.parse().map_err(|_| invalid())?;
            Ok(SettingValue::Int(schema::clamp(spec, parsed)))
        }
        FieldKind::Choice { options } => {
            if options.contains(&raw) {
                Ok(SettingValue::Text(raw.to_string()))
            } else {
                Err(invalid())
            }
        }
    }
}

fn heading(category: SettingCategory) -> &'static str {
    match category {
        SettingCategory::Notifications => "Notification Settings",
        SettingCategory::Security => "Security Settings",
        SettingCategory::System => "System Settings",
    }
}

fn render_value(spec: &FieldSpec, value: &SettingValue) -> String {
    match (spec.kind, value) {
        (FieldKind::Toggle, SettingValue::Bool(true)) => "on".green().to_string(),
        (FieldKind::Toggle, SettingValue::Bool(false)) => "off".dimmed().to_string(),
        _ => value.to_string(),
    }
}

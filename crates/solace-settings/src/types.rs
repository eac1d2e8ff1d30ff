// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings snapshot types and wire envelopes.
//!
//! The wire format is camelCase JSON matching the settings endpoint; the
//! field set is closed (see [`crate::schema`]) and applying a value to an
//! unrecognized category/setting pair is an error.

use serde::{Deserialize, Serialize};
use solace_core::SolaceError;
use strum::{Display, EnumString};

/// The fixed setting categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SettingCategory {
    Notifications,
    Security,
    System,
}

/// Log verbosity selected in the system category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize, Default,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Info,
    Warn,
    Error,
    Debug,
}

/// Backup cadence selected in the system category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize, Default,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BackupFrequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

/// A single setting value as carried on the wire.
///
/// Values are heterogeneous per field: toggles are booleans, bounded
/// fields are integers, enumerated fields are strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingValue::Bool(v) => write!(f, "{v}"),
            SettingValue::Int(v) => write!(f, "{v}"),
            SettingValue::Text(v) => write!(f, "{v}"),
        }
    }
}

/// Notification toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub system_alerts: bool,
    pub maintenance_alerts: bool,
    pub security_alerts: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            system_alerts: true,
            maintenance_alerts: true,
            security_alerts: true,
        }
    }
}

/// Bounded security parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    /// Days until password reset is required.
    pub password_expiry: u32,
    /// Minutes until automatic logout.
    pub session_timeout: u32,
    /// Failed attempts before account lockout.
    pub max_login_attempts: u32,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            password_expiry: 90,
            session_timeout: 30,
            max_login_attempts: 5,
        }
    }
}

/// System-wide toggles and enumerated options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub maintenance_mode: bool,
    pub debug_mode: bool,
    pub log_level: LogLevel,
    pub backup_frequency: BackupFrequency,
}

/// The full settings snapshot: category -> field -> value.
///
/// The store owns the in-memory copy; the remote authority owns the
/// durable one. A snapshot is only ever replaced wholesale (on fetch)
/// or mutated one field at a time (on a confirmed or optimistic write).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub notifications: NotificationSettings,
    pub security: SecuritySettings,
    pub system: SystemSettings,
}

impl Settings {
    /// Applies `value` to `category.setting`, mutating exactly that field.
    ///
    /// The field set is closed: an unrecognized pair is
    /// [`SolaceError::UnknownSetting`], a value of the wrong kind (or a
    /// string outside an enumerated field's options) is
    /// [`SolaceError::InvalidValue`]. On error nothing is mutated.
    pub fn apply(
        &mut self,
        category: SettingCategory,
        setting: &str,
        value: &SettingValue,
    ) -> Result<(), SolaceError> {
        use SettingCategory::*;
        use SettingValue::*;

        match (category, setting) {
            (Notifications, "emailNotifications") => {
                self.notifications.email_notifications = expect_bool(category, setting, value)?;
            }
            (Notifications, "systemAlerts") => {
                self.notifications.system_alerts = expect_bool(category, setting, value)?;
            }
            (Notifications, "maintenanceAlerts") => {
                self.notifications.maintenance_alerts = expect_bool(category, setting, value)?;
            }
            (Notifications, "securityAlerts") => {
                self.notifications.security_alerts = expect_bool(category, setting, value)?;
            }
            (Security, "passwordExpiry") => {
                self.security.password_expiry = expect_int(category, setting, value)?;
            }
            (Security, "sessionTimeout") => {
                self.security.session_timeout = expect_int(category, setting, value)?;
            }
            (Security, "maxLoginAttempts") => {
                self.security.max_login_attempts = expect_int(category, setting, value)?;
            }
            (System, "maintenanceMode") => {
                self.system.maintenance_mode = expect_bool(category, setting, value)?;
            }
            (System, "debugMode") => {
                self.system.debug_mode = expect_bool(category, setting, value)?;
            }
            (System, "logLevel") => {
                let Text(s) = value else {
                    return Err(invalid(category, setting, value));
                };
                self.system.log_level =
                    s.parse().map_err(|_| invalid(category, setting, value))?;
            }
            (System, "backupFrequency") => {
                let Text(s) = value else {
                    return Err(invalid(category, setting, value));
                };
                self.system.backup_frequency =
                    s.parse().map_err(|_| invalid(category, setting, value))?;
            }
            _ => {
                return Err(SolaceError::UnknownSetting {
                    category: category.to_string(),
                    setting: setting.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Reads the current value of `category.setting`, if recognized.
    pub fn get(&self, category: SettingCategory, setting: &str) -> Option<SettingValue> {
        use SettingCategory::*;
        use SettingValue::*;

        let value = match (category, setting) {
            (Notifications, "emailNotifications") => Bool(self.notifications.email_notifications),
            (Notifications, "systemAlerts") => Bool(self.notifications.system_alerts),
            (Notifications, "maintenanceAlerts") => Bool(self.notifications.maintenance_alerts),
            (Notifications, "securityAlerts") => Bool(self.notifications.security_alerts),
            (Security, "passwordExpiry") => Int(self.security.password_expiry.into()),
            (Security, "sessionTimeout") => Int(self.security.session_timeout.into()),
            (Security, "maxLoginAttempts") => Int(self.security.max_login_attempts.into()),
            (System, "maintenanceMode") => Bool(self.system.maintenance_mode),
            (System, "debugMode") => Bool(self.system.debug_mode),
            (System, "logLevel") => Text(self.system.log_level.to_string()),
            (System, "backupFrequency") => Text(self.system.backup_frequency.to_string()),
            _ => return None,
        };
        Some(value)
    }
}

fn expect_bool(
    category: SettingCategory,
    setting: &str,
    value: &SettingValue,
) -> Result<bool, SolaceError> {
    match value {
        SettingValue::Bool(v) => Ok(*v),
        _ => Err(invalid(category, setting, value)),
    }
}

fn expect_int(
    category: SettingCategory,
    setting: &str,
    value: &SettingValue,
) -> Result<u32, SolaceError> {
    match value {
        SettingValue::Int(v) if *v >= 0 && *v <= u32::MAX as i64 => Ok(*v as u32),
        _ => Err(invalid(category, setting, value)),
    }
}

fn invalid(category: SettingCategory, setting: &str, value: &SettingValue) -> SolaceError {
    SolaceError::InvalidValue {
        category: category.to_string(),
        setting: setting.to_string(),
        value: value.to_string(),
    }
}

// --- Wire envelopes ---

/// Response envelope for `GET /api/admin/settings`.
#[derive(Debug, Deserialize)]
pub struct SettingsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub settings: Option<Settings>,
}

/// Request body for `PUT /api/admin/settings`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRequest {
    pub category: SettingCategory,
    pub setting: String,
    pub value: SettingValue,
}

/// Response envelope for `PUT /api/admin/settings`.
#[derive(Debug, Deserialize)]
pub struct UpdateEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_wire_format_is_camel_case() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["notifications"]["emailNotifications"], true);
        assert_eq!(json["security"]["sessionTimeout"], 30);
        assert_eq!(json["system"]["logLevel"], "info");
        assert_eq!(json["system"]["backupFrequency"], "daily");
    }

    #[test]
    fn snapshot_round_trips_through_wire_format() {
        let mut settings = Settings::default();
        settings.security.session_timeout = 45;
        settings.system.log_level = LogLevel::Debug;

        let json = serde_json::to_string(&settings).unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn apply_mutates_exactly_one_field() {
        let mut settings = Settings::default();
        settings
            .apply(
                SettingCategory::Notifications,
                "emailNotifications",
                &SettingValue::Bool(false),
            )
            .unwrap();

        let mut expected = Settings::default();
        expected.notifications.email_notifications = false;
        assert_eq!(settings, expected);
    }

    #[test]
    fn apply_parses_enumerated_strings() {
        let mut settings = Settings::default();
        settings
            .apply(
                SettingCategory::System,
                "backupFrequency",
                &SettingValue::Text("weekly".into()),
            )
            .unwrap();
        assert_eq!(settings.system.backup_frequency, BackupFrequency::Weekly);
    }

    #[test]
    fn apply_rejects_unknown_setting_without_mutation() {
        let mut settings = Settings::default();
        let err = settings
            .apply(
                SettingCategory::Security,
                "sessionTimeot",
                &SettingValue::Int(45),
            )
            .unwrap_err();
        assert!(matches!(err, SolaceError::UnknownSetting { .. }));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn apply_rejects_wrong_kind() {
        let mut settings = Settings::default();
        let err = settings
            .apply(
                SettingCategory::Security,
                "sessionTimeout",
                &SettingValue::Bool(true),
            )
            .unwrap_err();
        assert!(matches!(err, SolaceError::InvalidValue { .. }));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn apply_rejects_out_of_range_enum_text() {
        let mut settings = Settings::default();
        let err = settings
            .apply(
                SettingCategory::System,
                "logLevel",
                &SettingValue::Text("loud".into()),
            )
            .unwrap_err();
        assert!(matches!(err, SolaceError::InvalidValue { .. }));
    }

    #[test]
    fn get_reads_back_applied_values() {
        let mut settings = Settings::default();
        settings
            .apply(
                SettingCategory::Security,
                "maxLoginAttempts",
                &SettingValue::Int(7),
            )
            .unwrap();
        assert_eq!(
            settings.get(SettingCategory::Security, "maxLoginAttempts"),
            Some(SettingValue::Int(7))
        );
        assert_eq!(settings.get(SettingCategory::System, "nope"), None);
    }

    #[test]
    fn update_request_serializes_heterogeneous_values() {
        let req = UpdateRequest {
            category: SettingCategory::System,
            setting: "logLevel".into(),
            value: SettingValue::Text("debug".into()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["category"], "system");
        assert_eq!(json["setting"], "logLevel");
        assert_eq!(json["value"], "debug");
    }
}

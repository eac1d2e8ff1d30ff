// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static schema for the settings panel.
//!
//! The schema is fixed at compile time: categories and field sets are not
//! discovered dynamically. The presentation layer uses it to clamp bounded
//! integers and to validate enumerated strings before calling the store;
//! the store itself only checks that the category/field pair exists.

use crate::types::SettingCategory;

/// The kind of a settings field, with its input constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Boolean on/off switch.
    Toggle,
    /// Integer clamped to an inclusive range by the presentation layer.
    Bounded { min: i64, max: i64 },
    /// One of a fixed set of string options.
    Choice { options: &'static [&'static str] },
}

/// One field of the settings schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub category: SettingCategory,
    pub name: &'static str,
    pub kind: FieldKind,
}

/// All fields of the settings panel, grouped by category in display order.
pub const SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        category: SettingCategory::Notifications,
        name: "emailNotifications",
        kind: FieldKind::Toggle,
    },
    FieldSpec {
        category: SettingCategory::Notifications,
        name: "systemAlerts",
        kind: FieldKind::Toggle,
    },
    FieldSpec {
        category: SettingCategory::Notifications,
        name: "maintenanceAlerts",
        kind: FieldKind::Toggle,
    },
    FieldSpec {
        category: SettingCategory::Notifications,
        name: "securityAlerts",
        kind: FieldKind::Toggle,
    },
    FieldSpec {
        category: SettingCategory::Security,
        name: "passwordExpiry",
        kind: FieldKind::Bounded { min: 1, max: 365 },
    },
    FieldSpec {
        category: SettingCategory::Security,
        name: "sessionTimeout",
        kind: FieldKind::Bounded { min: 5, max: 240 },
    },
    FieldSpec {
        category: SettingCategory::Security,
        name: "maxLoginAttempts",
        kind: FieldKind::Bounded { min: 3, max: 10 },
    },
    FieldSpec {
        category: SettingCategory::System,
        name: "maintenanceMode",
        kind: FieldKind::Toggle,
    },
    FieldSpec {
        category: SettingCategory::System,
        name: "debugMode",
        kind: FieldKind::Toggle,
    },
    FieldSpec {
        category: SettingCategory::System,
        name: "logLevel",
        kind: FieldKind::Choice {
            options: &["info", "warn", "error", "debug"],
        },
    },
    FieldSpec {
        category: SettingCategory::System,
        name: "backupFrequency",
        kind: FieldKind::Choice {
            options: &["daily", "weekly", "monthly"],
        },
    },
];

/// Looks up the spec for `category.name`.
pub fn field_spec(category: SettingCategory, name: &str) -> Option<&'static FieldSpec> {
    SCHEMA
        .iter()
        .find(|spec| spec.category == category && spec.name == name)
}

/// All fields belonging to one category, in display order.
pub fn category_fields(category: SettingCategory) -> impl Iterator<Item = &'static FieldSpec> {
    SCHEMA.iter().filter(move |spec| spec.category == category)
}

/// Clamps `value` into the field's range. Identity for non-bounded fields.
pub fn clamp(spec: &FieldSpec, value: i64) -> i64 {
    match spec.kind {
        FieldKind::Bounded { min, max } => value.clamp(min, max),
        _ => value,
    }
}

/// Turns a camelCase field name into a human-readable label,
/// e.g. `emailNotifications` -> `Email Notifications`.
pub fn display_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label
}

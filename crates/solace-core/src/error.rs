// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Solace client workspace.

use thiserror::Error;

/// The primary error type used across the Solace client crates.
#[derive(Debug, Error)]
pub enum SolaceError {
    /// Configuration errors (invalid TOML, missing token, bad header material).
    #[error("configuration error: {0}")]
    Config(String),

    /// Remote API errors (transport failure, non-success status, failure
    /// envelope, malformed payload).
    #[error("api error: {message}")]
    Api {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The category/setting pair is not part of the settings schema.
    #[error("unknown setting: {category}.{setting}")]
    UnknownSetting { category: String, setting: String },

    /// The value cannot be applied to the named setting (wrong kind, or a
    /// string outside the field's enumerated options).
    #[error("invalid value `{value}` for {category}.{setting}")]
    InvalidValue {
        category: String,
        setting: String,
        value: String,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

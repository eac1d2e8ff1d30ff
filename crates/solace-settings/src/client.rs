// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the admin settings endpoint.
//!
//! Provides [`SettingsClient`] which handles request construction, bearer
//! authentication, and envelope decoding. There is no retry here: a failed
//! write always resolves through the store's full resynchronization.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use solace_core::SolaceError;
use tracing::debug;

use crate::types::{Settings, SettingsEnvelope, UpdateEnvelope, UpdateRequest};

/// Path of the settings resource under the API base URL.
const SETTINGS_PATH: &str = "/api/admin/settings";

/// HTTP client for settings reads and writes.
///
/// The bearer credential is baked into the default headers at construction;
/// callers never reach into ambient storage for it.
#[derive(Debug, Clone)]
pub struct SettingsClient {
    client: reqwest::Client,
    base_url: String,
}

impl SettingsClient {
    /// Creates a new settings client.
    ///
    /// # Arguments
    /// * `base_url` - API origin, e.g. `http://localhost:5000`
    /// * `token` - opaque bearer credential presented with each request
    /// * `timeout` - per-request timeout
    pub fn new(
        base_url: impl Into<String>,
        token: &str,
        timeout: Duration,
    ) -> Result<Self, SolaceError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| SolaceError::Config(format!("invalid bearer token header value: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert("accept", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| SolaceError::Api {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn settings_url(&self) -> String {
        format!("{}{SETTINGS_PATH}", self.base_url)
    }

    /// Fetches the full settings snapshot.
    ///
    /// Non-2xx status, a `success:false` envelope, and a missing or
    /// malformed payload are all failures; the caller decides what to do
    /// with its previous snapshot.
    pub async fn fetch_settings(&self) -> Result<Settings, SolaceError> {
        let response = self
            .client
            .get(self.settings_url())
            .send()
            .await
            .map_err(|e| SolaceError::Api {
                message: format!("settings fetch failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "settings fetch response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SolaceError::Api {
                message: format!("settings endpoint returned {status}: {body}"),
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| SolaceError::Api {
            message: format!("failed to read settings response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let envelope: SettingsEnvelope =
            serde_json::from_str(&body).map_err(|e| SolaceError::Api {
                message: format!("failed to parse settings response: {e}"),
                source: Some(Box::new(e)),
            })?;

        if !envelope.success {
            return Err(SolaceError::Api {
                message: "settings endpoint reported failure".into(),
                source: None,
            });
        }

        envelope.settings.ok_or_else(|| SolaceError::Api {
            message: "settings envelope is missing the settings payload".into(),
            source: None,
        })
    }

    /// Writes a single setting.
    ///
    /// A `success:false` envelope is a failure even under a 2xx status;
    /// its `message`, when present, is surfaced in the returned error.
    pub async fn put_setting(&self, request: &UpdateRequest) -> Result<(), SolaceError> {
        let response = self
            .client
            .put(self.settings_url())
            .json(request)
            .send()
            .await
            .map_err(|e| SolaceError::Api {
                message: format!("settings update failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(
            status = %status,
            category = %request.category,
            setting = %request.setting,
            "settings update response received"
        );

        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            let message = match serde_json::from_str::<UpdateEnvelope>(&body) {
                Ok(UpdateEnvelope {
                    message: Some(msg), ..
                }) => format!("settings endpoint rejected update ({status}): {msg}"),
                _ => format!("settings endpoint returned {status}: {body}"),
            };
            return Err(SolaceError::Api {
                message,
                source: None,
            });
        }

        let envelope: UpdateEnvelope =
            serde_json::from_str(&body).map_err(|e| SolaceError::Api {
                message: format!("failed to parse update response: {e}"),
                source: Some(Box::new(e)),
            })?;

        if !envelope.success {
            let message = match envelope.message {
                Some(msg) => format!("settings endpoint rejected update: {msg}"),
                None => "settings endpoint rejected update".into(),
            };
            return Err(SolaceError::Api {
                message,
                source: None,
            });
        }

        Ok(())
    }
}

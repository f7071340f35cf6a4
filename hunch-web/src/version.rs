//! Deployment variant probe.
//!
//! Asks the serving deployment which build answered this session. The reply
//! decides between the stable and canary page chrome; a failed probe falls
//! back to the stable track so the game stays playable.

use serde::{Deserialize, Serialize};

/// Payload served by `GET /api/version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: String,
    pub is_canary: bool,
    pub timestamp: String,
}

impl VersionInfo {
    /// Stable-track stand-in used when the probe cannot be completed.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            version: "stable".to_string(),
            is_canary: false,
            timestamp: now_iso(),
        }
    }
}

fn now_iso() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().to_iso_string().into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Fetch `/api/version` from the serving deployment.
///
/// # Errors
/// Returns a readable message when the request, body read, or decode fails.
#[allow(clippy::future_not_send)] // `JsFuture` is not `Send`.
pub async fn fetch_version_info() -> Result<VersionInfo, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let body = crate::dom::fetch_text("/api/version")
            .await
            .map_err(|err| crate::dom::js_error_message(&err))?;
        serde_json::from_str(&body).map_err(|err| err.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(VersionInfo::fallback())
    }
}

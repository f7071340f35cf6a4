//! Axum HTTP probes for the Hunch canary rollout.
//!
//! The deployment pipeline runs one instance of this service per track and
//! flips `APP_VERSION` between `stable` and `canary`. The front end asks
//! `/api/version` which track it is talking to; the orchestrator polls
//! `/api/health` to decide whether the rollout may proceed.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/health` | Liveness with uptime and configured version |
//! | GET | `/api/version` | Configured version string and canary flag |

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{Json, Router, extract::State, routing::get};
use chrono::{SecondsFormat, Utc};
use hunch_game::Variant;
use tower_http::cors::{Any, CorsLayer};

pub const DEFAULT_VERSION: &str = "stable";
pub const DEFAULT_PORT: u16 = 3000;

/// Immutable service configuration resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub version: String,
    pub port: u16,
}

impl ServiceConfig {
    /// Resolve configuration from `APP_VERSION` and `PORT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var("APP_VERSION").ok(),
            std::env::var("PORT").ok(),
        )
    }

    /// Resolve configuration from raw environment values. Missing values
    /// fall back to defaults; an unparseable port is logged and replaced.
    #[must_use]
    pub fn resolve(version: Option<String>, port: Option<String>) -> Self {
        let version = version
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let port = match port.as_deref() {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("ignoring unparseable PORT value {raw:?}");
                DEFAULT_PORT
            }),
        };
        Self { version, port }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        Variant::from_version(&self.version)
    }
}

/// Shared handler context: the configured version and the process start
/// time the uptime figure is measured against.
pub struct StatusContext {
    version: String,
    started: Instant,
}

impl StatusContext {
    #[must_use]
    pub fn new(version: String) -> Self {
        Self {
            version,
            started: Instant::now(),
        }
    }

    fn uptime(&self) -> Duration {
        self.started.elapsed()
    }
}

pub type AppState = Arc<StatusContext>;

pub fn create_router(ctx: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(handle_health))
        .route("/api/version", get(handle_version))
        .layer(cors)
        .with_state(ctx)
}

// ── Payloads ────────────────────────────────────────────────────────

fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn health_payload(version: &str, uptime: Duration) -> serde_json::Value {
    serde_json::json!({
        "status": "healthy",
        "timestamp": timestamp_now(),
        "version": version,
        "uptime": uptime.as_secs_f64(),
    })
}

fn version_payload(version: &str) -> serde_json::Value {
    serde_json::json!({
        "version": version,
        "isCanary": Variant::from_version(version) == Variant::Canary,
        "timestamp": timestamp_now(),
    })
}

// ── GET handlers ────────────────────────────────────────────────────

async fn handle_health(State(ctx): State<AppState>) -> Json<serde_json::Value> {
    Json(health_payload(&ctx.version, ctx.uptime()))
}

async fn handle_version(State(ctx): State<AppState>) -> Json<serde_json::Value> {
    Json(version_payload(&ctx.version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_fills_in_defaults() {
        let config = ServiceConfig::resolve(None, None);
        assert_eq!(config.version, "stable");
        assert_eq!(config.port, 3000);
        assert_eq!(config.variant(), Variant::Stable);
    }

    #[test]
    fn resolve_accepts_explicit_values() {
        let config =
            ServiceConfig::resolve(Some("canary".to_string()), Some("8080".to_string()));
        assert_eq!(config.version, "canary");
        assert_eq!(config.port, 8080);
        assert_eq!(config.variant(), Variant::Canary);
    }

    #[test]
    fn resolve_replaces_unusable_values() {
        let config = ServiceConfig::resolve(Some(String::new()), Some("eighty".to_string()));
        assert_eq!(config.version, "stable");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn health_payload_reports_the_uptime() {
        let payload = health_payload("stable", Duration::from_millis(5250));
        assert_eq!(payload["status"], "healthy");
        assert_eq!(payload["version"], "stable");
        let uptime = payload["uptime"].as_f64().unwrap();
        assert!((uptime - 5.25).abs() < 1e-9);
    }

    #[test]
    fn version_payload_flags_the_canary_track() {
        let payload = version_payload("canary");
        assert_eq!(payload["version"], "canary");
        assert_eq!(payload["isCanary"], true);

        let payload = version_payload("v2.1");
        assert_eq!(payload["version"], "v2.1");
        assert_eq!(payload["isCanary"], false);
    }

    #[test]
    fn timestamps_are_millisecond_utc() {
        let stamp = timestamp_now();
        assert!(stamp.ends_with('Z'));
        chrono::DateTime::parse_from_rfc3339(&stamp).unwrap();
    }
}

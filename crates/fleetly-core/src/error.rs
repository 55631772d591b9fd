// ── Core error types ──
//
// User-facing errors from fleetly-core. Consumers never see raw HTTP
// plumbing; the `From<fleetly_api::Error>` impl translates transport
// failures into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach server at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Report request timed out")]
    Timeout,

    // ── Report errors ────────────────────────────────────────────────
    /// The server rejected the request; `message` is its diagnostic text.
    #[error("Report request failed: {message}")]
    Report {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    #[error("Malformed report payload: {message}")]
    MalformedPayload { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<fleetly_api::Error> for CoreError {
    fn from(err: fleetly_api::Error) -> Self {
        match err {
            fleetly_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.to_string())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Report {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            fleetly_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            fleetly_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            fleetly_api::Error::Server { status, message } => CoreError::Report {
                message,
                status: Some(status),
            },
            fleetly_api::Error::Deserialization { message, body: _ } => {
                CoreError::MalformedPayload { message }
            }
        }
    }
}

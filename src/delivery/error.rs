/// Errors that can occur while delivering a booking request.
///
/// All variants collapse into the same generic error banner; the
/// details exist for diagnostics only and are never branched on.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The HTTP transport failed before a response was received.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The delivery service answered with a non-success status.
    #[error("delivery rejected with status {status}: {body}")]
    Rejected {
        /// HTTP status code of the rejection.
        status: u16,
        /// Response body, truncated for display.
        body: String,
    },

    /// No delivery channel was available at submit time (missing
    /// credentials in the hosting environment).
    #[error("delivery channel is not configured")]
    Unconfigured,
}

/// Errors reading delivery credentials from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),
}

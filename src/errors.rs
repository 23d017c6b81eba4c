use thiserror::Error;

/// Detailed error type for sweep operations.
///
/// Every variant is fatal once it reaches `main`; there is no retryable
/// class of failure here.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Credentials file could not be read
    #[error("Failed to read credentials file {0}: {1}")]
    CredentialsRead(String, #[source] std::io::Error),

    /// Credentials file is not valid JSON for the expected shape.
    /// A missing Key, Token or CardID lands here too.
    #[error("Credentials file {0} is not valid: {1}")]
    CredentialsParse(String, #[source] serde_json::Error),

    /// HTTP transport failed (connect, TLS, timeout)
    #[error("{0} request failed: {1}")]
    Transport(&'static str, #[source] reqwest::Error),

    /// Server rejected the checklist fetch for a card
    #[error("Server returned {0} fetching checklists for card {1}")]
    ServerStatus(u16, String),

    /// Response body did not decode into a list of checklists
    #[error("Failed to parse checklists response: {0}")]
    Decode(#[source] reqwest::Error),
}

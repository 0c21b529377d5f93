//! Channel delivery errors.

use thiserror::Error;

/// A send to a notification channel failed.
///
/// Transient failures are retried by the dispatch queue with backoff;
/// permanent ones go straight to the dead-letter surface. Either way the
/// error stays inside the delivery path and is never re-raised into the
/// comparison cycle that produced the message.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// The channel endpoint answered with a non-success status.
    #[error("channel endpoint returned status {status}: {body}")]
    Endpoint { status: u16, body: String },

    /// The endpoint was not reachable at all.
    #[error("failed to reach channel endpoint: {0}")]
    Network(#[from] reqwest::Error),

    /// A job ran out of retry attempts and was dead-lettered.
    #[error("delivery gave up after {attempts} attempts: {last_error}")]
    AttemptsExhausted { attempts: u32, last_error: String },
}

impl DeliveryError {
    /// Whether another attempt could plausibly succeed.
    ///
    /// Rate limiting (429) and server-side errors are worth retrying; other
    /// client errors mean the request itself is wrong and will keep failing.
    pub fn is_transient(&self) -> bool {
        match self {
            DeliveryError::Endpoint { status, .. } => *status == 429 || *status >= 500,
            DeliveryError::Network(_) => true,
            DeliveryError::AttemptsExhausted { .. } => false,
        }
    }
}

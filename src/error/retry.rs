//! Retry classification for delivery attempts.

use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context.
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient infrastructure failures).
    Retry,
    /// Failed permanently (bad request, programming error).
    Fail,
}

impl Error {
    /// Determine the retry strategy for this error.
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Channel sends carry their own transient/permanent split:
            // 429 and 5xx responses and network failures are retryable,
            // other client errors mean the request itself is wrong.
            Error::DeliveryError(delivery_error) => {
                if delivery_error.is_transient() {
                    ErrorRetryStrategy::Retry
                } else {
                    ErrorRetryStrategy::Fail
                }
            }

            Error::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition and connection errors are
                    // transient and worth retrying.
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // All other database errors (query errors, constraint
                    // violations, type conversions, missing records) indicate
                    // bugs or data issues that won't resolve with retry.
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // Redis communication issues are transient.
            Error::RedisError(_) => ErrorRetryStrategy::Retry,

            // A bare HTTP error outside a channel send (client construction,
            // middleware) is not retried; sends report DeliveryError instead.
            Error::HttpError(_) => ErrorRetryStrategy::Fail,

            // Configuration errors are permanent; the process should not have
            // started.
            Error::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Malformed payloads and failed facets are input problems; the
            // next scrape produces fresh input, retrying the same one won't.
            Error::PayloadError(_) => ErrorRetryStrategy::Fail,
            Error::ComparisonError(_) => ErrorRetryStrategy::Fail,

            // Worker errors are validation/serialization bugs.
            Error::WorkerError(_) => ErrorRetryStrategy::Fail,

            // JSON errors are serialization bugs.
            Error::JsonError(_) => ErrorRetryStrategy::Fail,

            // Internal errors are bugs by definition.
            Error::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

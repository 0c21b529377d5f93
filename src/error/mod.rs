//! Error types for the Gjallar service.
//!
//! Specialized error types per domain (payload normalization, facet
//! comparison, channel delivery, worker queue, configuration), aggregated
//! into a single `Error` enum via `thiserror`'s `#[from]` conversions so the
//! `?` operator works across layer boundaries.

pub mod comparison;
pub mod config;
pub mod delivery;
pub mod payload;
pub mod retry;
pub mod worker;

use thiserror::Error;

use crate::error::{
    comparison::ComparisonError, config::ConfigError, delivery::DeliveryError,
    payload::PayloadError, worker::WorkerError,
};

/// Main error type for the Gjallar service.
///
/// Aggregates all domain-specific error types and external library errors.
/// Retry classification lives in [`retry`](crate::error::retry): the delivery
/// workers ask an error for its [`ErrorRetryStrategy`](retry::ErrorRetryStrategy)
/// instead of matching on variants themselves.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A raw match payload could not be normalized into a snapshot.
    #[error(transparent)]
    PayloadError(#[from] PayloadError),
    /// One comparison facet could not be evaluated.
    #[error(transparent)]
    ComparisonError(#[from] ComparisonError),
    /// A send to a notification channel failed.
    #[error(transparent)]
    DeliveryError(#[from] DeliveryError),
    /// Worker queue error (job serialization, scheduling).
    #[error(transparent)]
    WorkerError(#[from] WorkerError),
    /// Internal error indicating a bug in Gjallar's code.
    #[error("Internal error with Gjallar's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Redis error (connection, command execution, Lua scripts).
    #[error(transparent)]
    RedisError(#[from] fred::error::Error),
    /// HTTP client error outside a channel send (client construction etc.).
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// JSON serialization error (queue job encoding).
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

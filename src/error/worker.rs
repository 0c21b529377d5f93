//! Worker queue error types.

use thiserror::Error;

/// Delivery queue error.
///
/// These occur during job serialization, queue pushes, or claim parsing and
/// indicate either Redis infrastructure issues or corrupted queue entries.
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Failed to serialize or deserialize a DeliveryJob.
    ///
    /// On the claim path this usually means a corrupted or hand-edited queue
    /// entry; the entry is dropped to the dead-letter list rather than
    /// poisoning the dispatcher loop.
    #[error("Failed to serialize/deserialize DeliveryJob: {0}")]
    SerializationError(String),

    /// A queue entry did not have the expected `sequence|payload` shape.
    #[error("Malformed queue entry: {0:?}")]
    MalformedEntry(String),

    /// Failed to hand a job to the delivery queue.
    #[error("Failed to schedule delivery: {0}")]
    Scheduler(String),
}

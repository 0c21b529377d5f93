//! Domain value types shared across the pipeline.
//!
//! These are the shapes that flow between the snapshot builder, the comparator
//! engine, the notification router, and the delivery queue. Persisted rows live
//! in the `entity` crate; everything here is ephemeral.

pub mod aggregate;
pub mod message;
pub mod payload;
pub mod signal;
pub mod snapshot;
pub mod worker;

//! Business logic of the check cycle.
//!
//! `snapshot` normalizes raw payloads, `comparer` diffs them against
//! persisted state, `notification` turns fired signals into messages, and
//! `update` ties a cycle together: evaluate, apply, route, enqueue.

pub mod comparer;
pub mod notification;
pub mod snapshot;
pub mod update;

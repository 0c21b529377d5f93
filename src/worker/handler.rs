use tracing::debug;

use crate::{channel::ChannelSet, error::delivery::DeliveryError, model::worker::DeliveryJob};

/// Handler for processing delivery jobs from the queue.
///
/// One job is one send attempt on one channel; the handler only resolves the
/// job's channel kind to the right adapter. Retry decisions stay with the
/// pool, which knows the attempt budget.
pub struct DeliveryHandler {
    channels: ChannelSet,
}

impl DeliveryHandler {
    pub fn new(channels: ChannelSet) -> Self {
        Self { channels }
    }

    /// Perform one delivery attempt.
    pub async fn handle(&self, job: &DeliveryJob) -> Result<(), DeliveryError> {
        debug!("Processing {}", job);

        self.channels.deliver(job).await?;

        debug!("Delivered {}", job);

        Ok(())
    }
}

use super::channel::{Delivery, ReadingChannel};
use super::console::Console;

/// Drains the channel, displaying each reading, until shutdown is observed
/// on an empty queue.
pub struct Consumer<C> {
    channel: ReadingChannel,
    console: C,
}

impl<C: Console> Consumer<C> {
    pub fn new(channel: ReadingChannel, console: C) -> Self {
        Self { channel, console }
    }

    /// Task flavour. Returns how many readings were displayed.
    pub async fn run(mut self) -> usize {
        let mut delivered = 0;
        loop {
            match self.channel.pop().await {
                Delivery::Reading(reading) => {
                    tracing::trace!(sensor = %reading.sensor_name, at = %reading.timestamp, "reading");
                    self.console.reading(&reading);
                    delivered += 1;
                }
                Delivery::Shutdown => break,
            }
        }
        tracing::debug!(delivered, "consumer done");
        delivered
    }

    /// Thread flavour of [`Consumer::run`], for use off the executor.
    pub fn run_blocking(mut self) -> usize {
        let mut delivered = 0;
        while let Delivery::Reading(reading) = self.channel.pop_blocking() {
            self.console.reading(&reading);
            delivered += 1;
        }
        tracing::debug!(delivered, "consumer done");
        delivered
    }
}

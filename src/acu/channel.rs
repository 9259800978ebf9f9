use async_channel::{unbounded, Receiver, Sender};
use chrono::Utc;

/// One sample taken from one sensor during one cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    pub sensor_name: String,
    pub value: f64,
    pub timestamp: chrono::DateTime<Utc>,
}

impl Reading {
    pub fn new(sensor_name: impl Into<String>, value: f64) -> Self {
        Self {
            sensor_name: sensor_name.into(),
            value,
            timestamp: Utc::now(),
        }
    }
}

/// Outcome of a pop: either the next reading or the end of the stream.
#[derive(Clone, Debug, PartialEq)]
pub enum Delivery {
    Reading(Reading),
    /// The channel was shut down and every queued reading has been handed
    /// out. Every later pop returns this again without blocking.
    Shutdown,
}

#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("reading channel is shut down, rejected reading from {}", .0.sensor_name)]
    Closed(Reading),
}

/// Unbounded FIFO handoff from the producer task to the consumer task.
///
/// Handles are cheap to clone and all refer to the same queue. The channel
/// stays open until [`ReadingChannel::shutdown`] is called, regardless of how
/// many handles are alive.
#[derive(Clone, Debug)]
pub struct ReadingChannel {
    sender: Sender<Reading>,
    receiver: Receiver<Reading>,
}

impl Default for ReadingChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingChannel {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Append a reading to the tail of the queue and wake a waiting consumer.
    ///
    /// Never blocks. Fails only once the channel has been shut down, handing
    /// the reading back.
    pub fn push(&self, reading: Reading) -> Result<(), ChannelError> {
        self.sender
            .try_send(reading)
            .map_err(|e| ChannelError::Closed(e.into_inner()))
    }

    /// Block the calling thread until a reading is queued or the channel is
    /// shut down and drained.
    pub fn pop_blocking(&self) -> Delivery {
        match self.receiver.recv_blocking() {
            Ok(reading) => Delivery::Reading(reading),
            Err(_) => Delivery::Shutdown,
        }
    }

    /// Suspend the calling task until a reading is queued or the channel is
    /// shut down and drained.
    pub async fn pop(&self) -> Delivery {
        match self.receiver.recv().await {
            Ok(reading) => Delivery::Reading(reading),
            Err(_) => Delivery::Shutdown,
        }
    }

    /// Signal that no more readings are coming and wake every waiter.
    ///
    /// Readings already queued stay available. Returns `true` only for the
    /// call that actually closed the channel.
    pub fn shutdown(&self) -> bool {
        let closed = self.sender.close();
        if closed {
            tracing::debug!(pending = self.len(), "reading channel shut down");
        }
        closed
    }

    pub fn is_active(&self) -> bool {
        !self.sender.is_closed()
    }

    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

use super::channel::{Reading, ReadingChannel};
use super::console::Console;
use super::sensor::Sensor;
use async_broadcast::{Receiver, RecvError};
use async_io::Timer;
use fastrand::Rng;
use futures_lite::future;
use std::time::Duration;

/// What the producer did before it stopped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProducerReport {
    pub cycles: u32,
    pub pushed: usize,
    pub warnings: usize,
    pub interrupted: bool,
}

enum Pace {
    Tick,
    Interrupted,
}

/// Samples every registered sensor once per cycle and pushes the readings.
///
/// The producer never shuts the channel down itself; that is left to
/// whoever awaits its completion.
pub struct Producer<C> {
    sensors: Vec<Box<dyn Sensor>>,
    channel: ReadingChannel,
    console: C,
    rng: Rng,
    cycle_count: u32,
    delay: Duration,
    ctrl_c_receiver: Receiver<()>,
}

impl<C: Console> Producer<C> {
    pub fn new(
        sensors: Vec<Box<dyn Sensor>>,
        channel: ReadingChannel,
        console: C,
        rng: Rng,
        ctrl_c_receiver: Receiver<()>,
    ) -> Self {
        Self {
            sensors,
            channel,
            console,
            rng,
            cycle_count: 0,
            delay: Duration::ZERO,
            ctrl_c_receiver,
        }
    }

    pub fn with_cycles(mut self, cycle_count: u32, delay: Duration) -> Self {
        self.cycle_count = cycle_count;
        self.delay = delay;
        self
    }

    pub async fn run(mut self) -> ProducerReport {
        let mut report = ProducerReport::default();
        for cycle in 0..self.cycle_count {
            self.sample_all(&mut report);
            report.cycles += 1;
            tracing::debug!(cycle, pushed = report.pushed, "cycle complete");

            if cycle + 1 == self.cycle_count {
                break;
            }
            if let Pace::Interrupted = self.pace().await {
                tracing::info!(cycle, "Ctrl+C received, stopping producer");
                report.interrupted = true;
                break;
            }
        }

        for sensor in self.sensors.drain(..) {
            tracing::debug!(sensor = sensor.name(), "sensor released");
        }
        report
    }

    fn sample_all(&mut self, report: &mut ProducerReport) {
        for sensor in self.sensors.iter_mut() {
            let value = sensor.read_data(&mut self.rng);
            if let Some(warning) = sensor.check_warning(value) {
                self.console.warning(&warning);
                report.warnings += 1;
            }
            match self.channel.push(Reading::new(sensor.name(), value)) {
                Ok(()) => report.pushed += 1,
                Err(e) => tracing::warn!(error = %e, "skipping reading"),
            }
        }
    }

    /// Wait out the inter-cycle delay unless Ctrl+C arrives first. A closed
    /// interrupt channel never interrupts.
    async fn pace(&mut self) -> Pace {
        let delay = self.delay;
        let tick = async move {
            Timer::after(delay).await;
            Pace::Tick
        };
        let ctrl_c_receiver = &mut self.ctrl_c_receiver;
        let interrupt = async move {
            match ctrl_c_receiver.recv().await {
                Ok(()) | Err(RecvError::Overflowed(_)) => Pace::Interrupted,
                Err(RecvError::Closed) => future::pending().await,
            }
        };
        future::or(interrupt, tick).await
    }
}

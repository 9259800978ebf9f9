mod altimeter;
mod channel;
mod console;
mod consumer;
mod producer;
mod sensor;
mod thermometer;

pub use altimeter::Altimeter;
pub use channel::{ChannelError, Delivery, Reading, ReadingChannel};
pub use console::{Console, Line, MemoryConsole, Stdout};
pub use consumer::Consumer;
pub use producer::{Producer, ProducerReport};
pub use sensor::{Sensor, Warning, WarningKind};
pub use thermometer::Thermometer;

use crate::config::Config;
use fastrand::Rng;
use smol_macros::Executor;
use std::time::Duration;

const STARTUP_BANNER: &str = "----[SYSTEM] Avionic Control Unit Initiating------";
const SHUTDOWN_BANNER: &str = "----[SYSTEM] Avionic Control Unit Shut Down------";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub producer: ProducerReport,
    pub delivered: usize,
}

/// Avionics control unit: wires one producer to one consumer and shuts the
/// channel down once the producer is done.
pub struct Acu<C> {
    sensors: Vec<Box<dyn Sensor>>,
    cycle_count: u32,
    delay: Duration,
    rng: Rng,
    console: C,
}

impl<C: Console + Clone + 'static> Acu<C> {
    pub fn new(config: &Config, sensors: Vec<Box<dyn Sensor>>, console: C) -> Self {
        Self {
            sensors,
            cycle_count: config.cycle_count,
            delay: config.delay,
            rng: config.rng(),
            console,
        }
    }

    pub fn from_config(config: &Config, console: C) -> Self {
        Self::new(config, config.build_sensors(), console)
    }

    pub async fn run(
        mut self,
        ex: &Executor<'_>,
        ctrl_c_receiver: async_broadcast::Receiver<()>,
    ) -> RunReport {
        self.console.banner(STARTUP_BANNER);
        tracing::info!(
            sensors = self.sensors.len(),
            cycles = self.cycle_count,
            delay_ms = self.delay.as_millis() as u64,
            "control unit starting",
        );

        let channel = ReadingChannel::new();
        let consumer = Consumer::new(channel.clone(), self.console.clone());
        let producer = Producer::new(
            self.sensors,
            channel.clone(),
            self.console.clone(),
            self.rng,
            ctrl_c_receiver,
        )
        .with_cycles(self.cycle_count, self.delay);

        let consumer = ex.spawn(consumer.run());
        let producer = ex.spawn(producer.run());

        let producer = producer.await;
        channel.shutdown();
        let delivered = consumer.await;

        self.console.banner(SHUTDOWN_BANNER);
        RunReport {
            producer,
            delivered,
        }
    }
}

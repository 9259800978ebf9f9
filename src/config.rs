//! Compiled-in run configuration.

use crate::acu::{Altimeter, Sensor, Thermometer};
use std::time::Duration;

const CYCLE_COUNT: u32 = 10;
const DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorKind {
    Altimeter,
    Thermometer,
}

/// One registry entry: which kind of sensor to build, under which name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SensorSpec {
    pub kind: SensorKind,
    pub name: String,
}

impl SensorSpec {
    pub fn new(kind: SensorKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn build(&self) -> Box<dyn Sensor> {
        match self.kind {
            SensorKind::Altimeter => Box::new(Altimeter::new(self.name.as_str())),
            SensorKind::Thermometer => Box::new(Thermometer::new(self.name.as_str())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of producer cycles.
    pub cycle_count: u32,
    /// Pause between two cycles.
    pub delay: Duration,
    /// Sensors sampled each cycle, in order.
    pub sensor_registry: Vec<SensorSpec>,
    /// Fixed seed for reproducible readings; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cycle_count: CYCLE_COUNT,
            delay: DELAY,
            sensor_registry: vec![
                SensorSpec::new(SensorKind::Altimeter, "Main Altimeter"),
                SensorSpec::new(SensorKind::Altimeter, "Backup Altimeter"),
                SensorSpec::new(SensorKind::Thermometer, "Engine Thermometer"),
                SensorSpec::new(SensorKind::Thermometer, "Cabin Thermometer"),
            ],
            seed: None,
        }
    }
}

impl Config {
    pub fn with_cycle_count(mut self, cycle_count: u32) -> Self {
        self.cycle_count = cycle_count;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_registry(mut self, sensor_registry: Vec<SensorSpec>) -> Self {
        self.sensor_registry = sensor_registry;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build_sensors(&self) -> Vec<Box<dyn Sensor>> {
        self.sensor_registry.iter().map(SensorSpec::build).collect()
    }

    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_keeps_insertion_order() {
        let config = Config::default();
        let names: Vec<String> = config
            .build_sensors()
            .iter()
            .map(|s| s.name().to_owned())
            .collect();

        assert_eq!(config.cycle_count, 10);
        assert_eq!(config.delay, Duration::from_secs(1));
        assert_eq!(
            names,
            [
                "Main Altimeter",
                "Backup Altimeter",
                "Engine Thermometer",
                "Cabin Thermometer"
            ]
        );
    }

    #[test]
    fn spec_builds_matching_kind() {
        let altimeter = SensorSpec::new(SensorKind::Altimeter, "A").build();
        let thermometer = SensorSpec::new(SensorKind::Thermometer, "T").build();

        assert_eq!(altimeter.name(), "A");
        assert!(altimeter.check_warning(1005.0).is_some());
        assert!(altimeter.check_warning(1020.0).is_none());
        assert_eq!(thermometer.name(), "T");
        assert!(thermometer.check_warning(29.0).is_some());
        assert!(thermometer.check_warning(25.0).is_none());
    }

    #[test]
    fn seeded_configs_share_a_sequence() {
        let config = Config::default().with_seed(99);
        let (mut a, mut b) = (config.rng(), config.rng());
        assert_eq!(a.u64(..), b.u64(..));
    }
}

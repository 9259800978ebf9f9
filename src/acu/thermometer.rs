use super::sensor::{tenths, Sensor, Warning, WarningKind};
use fastrand::Rng;

const BASE_C: u32 = 20;
const SPAN_TENTHS: u32 = 100;
const HIGH_LIMIT_C: f64 = 28.0;

pub struct Thermometer {
    name: String,
}

impl Thermometer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Sensor for Thermometer {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_data(&mut self, rng: &mut Rng) -> f64 {
        tenths(rng, BASE_C, SPAN_TENTHS)
    }

    fn check_warning(&self, value: f64) -> Option<Warning> {
        (value > HIGH_LIMIT_C).then(|| Warning::new(self.name.as_str(), WarningKind::TooHigh))
    }
}

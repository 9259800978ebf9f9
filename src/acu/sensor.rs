use fastrand::Rng;
use std::fmt;

/// A simulated avionics sensor.
///
/// Implementations are pure: reading draws from the generator handed in by
/// the caller and classification depends only on the value.
pub trait Sensor: Send {
    fn name(&self) -> &str;

    /// Produce one reading in the sensor's nominal range.
    fn read_data(&mut self, rng: &mut Rng) -> f64;

    /// Flag a value the crew should be warned about.
    fn check_warning(&self, value: f64) -> Option<Warning>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WarningKind {
    TooLow,
    TooHigh,
}

/// An anomalous reading, rendered as `<sensor> is too low|high`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    pub sensor: String,
    pub kind: WarningKind,
}

impl Warning {
    pub fn new(sensor: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            sensor: sensor.into(),
            kind,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::TooLow => write!(f, "{} is too low", self.sensor),
            WarningKind::TooHigh => write!(f, "{} is too high", self.sensor),
        }
    }
}

/// Uniform value with one decimal of resolution: `base + n / 10` for
/// `n` in `0..span_tenths`.
pub(super) fn tenths(rng: &mut Rng, base: u32, span_tenths: u32) -> f64 {
    f64::from(base * 10 + rng.u32(0..span_tenths)) / 10.0
}

use avionics_acu::{Sensor, Warning};
use fastrand::Rng;

/// Wraps a real sensor but always reports the same value. Classification is
/// still the wrapped sensor's own.
pub struct Pinned<S> {
    inner: S,
    value: f64,
}

impl<S: Sensor> Pinned<S> {
    pub fn new(inner: S, value: f64) -> Self {
        Self { inner, value }
    }
}

impl<S: Sensor> Sensor for Pinned<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn read_data(&mut self, _rng: &mut Rng) -> f64 {
        self.value
    }

    fn check_warning(&self, value: f64) -> Option<Warning> {
        self.inner.check_warning(value)
    }
}

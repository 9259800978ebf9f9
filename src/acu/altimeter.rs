use super::sensor::{tenths, Sensor, Warning, WarningKind};
use fastrand::Rng;

const BASE_FT: u32 = 1000;
// 50.0 ft of spread at 0.1 ft resolution
const SPAN_TENTHS: u32 = 500;
const LOW_LIMIT_FT: f64 = 1010.0;

pub struct Altimeter {
    name: String,
}

impl Altimeter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Sensor for Altimeter {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_data(&mut self, rng: &mut Rng) -> f64 {
        tenths(rng, BASE_FT, SPAN_TENTHS)
    }

    fn check_warning(&self, value: f64) -> Option<Warning> {
        (value < LOW_LIMIT_FT).then(|| Warning::new(self.name.as_str(), WarningKind::TooLow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_fall_in_nominal_range() {
        let mut altimeter = Altimeter::new("Main Altimeter");
        let mut rng = Rng::with_seed(42);
        for _ in 0..1_000 {
            let value = altimeter.read_data(&mut rng);
            assert!((1000.0..1050.0).contains(&value), "{value} out of range");
        }
    }

    #[test]
    fn warns_only_below_limit() {
        let altimeter = Altimeter::new("Backup Altimeter");

        assert_eq!(
            altimeter.check_warning(1009.9),
            Some(Warning::new("Backup Altimeter", WarningKind::TooLow))
        );
        assert_eq!(altimeter.check_warning(1010.0), None);
        assert_eq!(altimeter.check_warning(1049.9), None);
    }

    #[test]
    fn same_seed_same_readings() {
        let mut first = Altimeter::new("A");
        let mut second = Altimeter::new("A");
        let (mut rng_a, mut rng_b) = (Rng::with_seed(3), Rng::with_seed(3));

        let a: Vec<f64> = (0..16).map(|_| first.read_data(&mut rng_a)).collect();
        let b: Vec<f64> = (0..16).map(|_| second.read_data(&mut rng_b)).collect();
        assert_eq!(a, b);
    }
}

//! Center-aligned carrier comparison.
//!
//! A timer counting up then down produces a triangular carrier over one
//! regulation period. Each phase high-side switch conducts while its duty
//! cycle is above the carrier, so the pulses are centered on the period
//! edges and the null vector v0 sits in the middle of the period.

use crate::{space_vector::SwitchingState, svpwm::DutyCycles};

/// State of the two complementary switches of one inverter leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    pub high: bool,
    pub low: bool,
}

impl Gate {
    fn new(high: bool) -> Self {
        Self { high, low: !high }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Carrier {
    samples: usize,
}

impl Carrier {
    /// Carrier sampled at `samples` evenly spaced points of the period,
    /// including both ends. At least two samples are taken.
    pub fn new(samples: usize) -> Self {
        Self {
            samples: samples.max(2),
        }
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Time of a sample, in regulation periods.
    pub fn time(&self, sample: usize) -> f64 {
        sample as f64 / (self.samples - 1) as f64
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.samples).map(|i| self.time(i))
    }

    /// Carrier level at a sample, rising from 0 over the first half of the
    /// samples and falling back over the second half.
    pub fn level(&self, sample: usize) -> f64 {
        let t = self.time(sample);
        if sample < self.samples / 2 {
            2. * t
        } else {
            2. - 2. * t
        }
    }

    pub fn levels(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.samples).map(|i| self.level(i))
    }

    pub fn gate(&self, duty: f64) -> impl Iterator<Item = Gate> + '_ {
        self.levels().map(move |level| Gate::new(duty > level))
    }

    /// Inverter switching state at each sample.
    pub fn states(&self, duties: DutyCycles<f64>) -> impl Iterator<Item = SwitchingState> + '_ {
        self.levels().map(move |level| {
            SwitchingState::from_gates(duties.a > level, duties.b > level, duties.c > level)
        })
    }

    /// Fraction of the samples during which the high-side switch conducts.
    pub fn on_fraction(&self, duty: f64) -> f64 {
        let on = self.gate(duty).filter(|gate| gate.high).count();
        on as f64 / self.samples as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{svpwm, Sector};

    #[test]
    fn triangle() {
        let carrier = Carrier::new(200);
        assert_eq!(carrier.level(0), 0.);
        assert_eq!(carrier.level(199), 0.);
        assert!(carrier.level(99) > 0.99);
        assert!(carrier.level(100) > 0.99);
        assert!(carrier.levels().all(|level| (0. ..=1.).contains(&level)));
        assert_eq!(carrier.times().last(), Some(1.));
    }

    #[test]
    fn too_few_samples() {
        let carrier = Carrier::new(0);
        assert_eq!(carrier.samples(), 2);
        assert_eq!(carrier.time(1), 1.);
    }

    #[test]
    fn on_time_follows_duty() {
        let carrier = Carrier::new(200);
        for duty in [0., 0.1, 0.25, 0.5, 0.77, 1.] {
            let fraction = carrier.on_fraction(duty);
            assert!((fraction - duty).abs() <= 0.02, "{duty}: {fraction}");
        }
    }

    #[test]
    fn complementary_and_centered() {
        let carrier = Carrier::new(200);
        for duty in [0.3, 0.77] {
            let gates: Vec<_> = carrier.gate(duty).collect();
            assert!(gates.iter().all(|gate| gate.high != gate.low));
            // High at both edges, low in the middle
            assert!(gates[0].high);
            assert!(gates[99].low);
            for i in 0..100 {
                assert_eq!(gates[i], gates[199 - i], "sample {i}");
            }
        }
    }

    #[test]
    fn visits_bounding_states() {
        let carrier = Carrier::new(400);
        for sector in Sector::ALL {
            let (start, _) = sector.span();
            let duties = svpwm::duty_cycles(sector, start + 20.);
            let (first, second) = sector.bounding_states();
            for state in carrier.states(duties) {
                assert!(
                    state.is_null() || state == first || state == second,
                    "sector {}: {state:?}",
                    sector.number()
                );
            }
        }
    }
}

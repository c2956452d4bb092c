//! Projections of a space vector onto the three phase axes.
//!
//! The a, b, c values form a balanced three-phase system, their sum is always
//! zero. They are the inputs of the per-sector duty cycle decomposition.

use crate::{Sector, FRAC_1_SQRT_3, FRAC_SQRT_3_2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseProjections {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl PhaseProjections {
    /// Projections of a maximum amplitude (√3/2) space vector at `angle`
    /// degrees from the phase A axis.
    pub fn from_angle(angle: f64) -> Self {
        let alpha = angle.to_radians();
        let (sin, cos) = (libm::sin(alpha), libm::cos(alpha));

        let a = FRAC_SQRT_3_2 * cos - 0.5 * sin;
        let b = sin;
        Self { a, b, c: -(a + b) }
    }

    /// Projections of a vector given in the stationary orthogonal frame.
    pub fn from_alpha_beta(alpha: f64, beta: f64) -> Self {
        let a = alpha - FRAC_1_SQRT_3 * beta;
        let b = 2. * FRAC_1_SQRT_3 * beta;
        Self { a, b, c: -(a + b) }
    }

    /// Sector the projected vector lies in, decided by the projection signs.
    ///
    /// Vectors sitting exactly on a sector edge may land in either of the two
    /// adjacent sectors.
    pub fn sector(&self) -> Sector {
        if self.c < 0. {
            if self.a < 0. {
                Sector::Two
            } else if self.b < 0. {
                Sector::Six
            } else {
                Sector::One
            }
        } else if self.a < 0. {
            if self.b <= 0. {
                Sector::Four
            } else {
                Sector::Three
            }
        } else {
            Sector::Five
        }
    }

    pub fn sum(&self) -> f64 {
        self.a + self.b + self.c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn balanced() {
        for step in -720..=720 {
            let projections = PhaseProjections::from_angle(f64::from(step) * 0.5);
            assert!(projections.sum().abs() < 1e-9);
        }
        let projections = PhaseProjections::from_alpha_beta(0.3, -1.7);
        assert!(projections.sum().abs() < 1e-9);
    }

    #[test]
    fn known_angles() {
        let zero = PhaseProjections::from_angle(0.);
        assert_close(zero.a, FRAC_SQRT_3_2);
        assert_close(zero.b, 0.);
        assert_close(zero.c, -FRAC_SQRT_3_2);

        let thirty = PhaseProjections::from_angle(30.);
        assert_close(thirty.a, 0.5);
        assert_close(thirty.b, 0.5);
        assert_close(thirty.c, -1.);
    }

    #[test]
    fn alpha_beta_matches_angle() {
        for degrees in (0..360).step_by(7) {
            let theta = f64::from(degrees).to_radians();
            let from_frame = PhaseProjections::from_alpha_beta(
                FRAC_SQRT_3_2 * theta.cos(),
                FRAC_SQRT_3_2 * theta.sin(),
            );
            let from_angle = PhaseProjections::from_angle(f64::from(degrees));
            dbg!(degrees, &from_frame, &from_angle);
            assert_close(from_frame.a, from_angle.a);
            assert_close(from_frame.b, from_angle.b);
            assert_close(from_frame.c, from_angle.c);
        }
    }

    #[test]
    fn sector_from_signs() {
        for sector in Sector::ALL {
            let (start, _) = sector.span();
            for offset in [1., 15., 30., 45., 59.] {
                let projections = PhaseProjections::from_angle(start + offset);
                assert_eq!(projections.sector(), sector, "{}", start + offset);
            }
        }
    }
}

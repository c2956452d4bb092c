//! Space vectors of the two-level inverter: the eight switching states, the
//! hexagon they span and the rotating stator current vector.

use core::{
    f64::consts::{FRAC_PI_3, TAU},
    fmt,
    ops::{Add, Mul},
};

use crate::{Sector, FRAC_SQRT_3_2};

/// A vector of the stationary complex plane, real axis along phase A.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpaceVector {
    pub re: f64,
    pub im: f64,
}

impl SpaceVector {
    pub const ZERO: SpaceVector = SpaceVector { re: 0., im: 0. };
    /// Unit vectors of the three phase axes, 120° apart.
    pub const PHASE_A: SpaceVector = SpaceVector { re: 1., im: 0. };
    pub const PHASE_B: SpaceVector = SpaceVector {
        re: -0.5,
        im: FRAC_SQRT_3_2,
    };
    pub const PHASE_C: SpaceVector = SpaceVector {
        re: -0.5,
        im: -FRAC_SQRT_3_2,
    };

    /// Angle in radians.
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        Self {
            re: magnitude * libm::cos(angle),
            im: magnitude * libm::sin(angle),
        }
    }

    pub fn magnitude(&self) -> f64 {
        libm::hypot(self.re, self.im)
    }

    /// Angle in degrees within `[0, 360)`.
    pub fn angle(&self) -> f64 {
        let degrees = libm::atan2(self.im, self.re).to_degrees();
        if degrees < 0. {
            degrees + 360.
        } else {
            degrees
        }
    }
}

impl Add for SpaceVector {
    type Output = SpaceVector;
    fn add(self, rhs: Self) -> Self::Output {
        SpaceVector {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Mul<f64> for SpaceVector {
    type Output = SpaceVector;
    fn mul(self, rhs: f64) -> Self::Output {
        SpaceVector {
            re: self.re * rhs,
            im: self.im * rhs,
        }
    }
}

/// Inverter switching state, one bit per leg: bit 0 is phase a, bit 1 phase
/// b and bit 2 phase c. A set bit means the high-side switch conducts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwitchingState(u8);

impl SwitchingState {
    /// v0 to v7.
    pub const ALL: [SwitchingState; 8] = [
        SwitchingState(0),
        SwitchingState(1),
        SwitchingState(2),
        SwitchingState(3),
        SwitchingState(4),
        SwitchingState(5),
        SwitchingState(6),
        SwitchingState(7),
    ];

    pub const fn from_gates(a: bool, b: bool, c: bool) -> Self {
        SwitchingState(a as u8 | (b as u8) << 1 | (c as u8) << 2)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn gates(self) -> [bool; 3] {
        [self.0 & 1 != 0, self.0 & 2 != 0, self.0 & 4 != 0]
    }

    /// All legs high (v7) or all low (v0).
    pub const fn is_null(self) -> bool {
        self.0 == 0 || self.0 == 7
    }

    pub fn vector(self) -> SpaceVector {
        let [a, b, c] = self.gates().map(f64::from);
        SpaceVector::PHASE_A * a + SpaceVector::PHASE_B * b + SpaceVector::PHASE_C * c
    }
}

impl fmt::Display for SwitchingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{} ({:03b})", self.0, self.0)
    }
}

impl Sector {
    /// The active states whose vectors bound the sector, in counter-clockwise
    /// order.
    pub const fn bounding_states(self) -> (SwitchingState, SwitchingState) {
        // Active states ordered by the angle of their vector, 0° to 300°.
        const RING: [u8; 6] = [1, 3, 2, 6, 4, 5];
        let i = self.index() as usize;
        (
            SwitchingState(RING[i]),
            SwitchingState(RING[(i + 1) % 6]),
        )
    }
}

/// Outline of the hexagon spanned by the active vectors, closed so that the
/// first and last vertices coincide.
pub fn hexagon() -> [SpaceVector; 7] {
    core::array::from_fn(|k| SpaceVector::from_polar(1., k as f64 * FRAC_PI_3))
}

/// Balanced unit-amplitude stator currents and the resulting space vector.
#[derive(Debug, Clone, Copy)]
pub struct StatorCurrent {
    /// Instantaneous phase currents a, b and c.
    pub phases: [f64; 3],
    /// Contribution of each phase along its own axis.
    pub contributions: [SpaceVector; 3],
    /// Sum of the contributions, modulus 3/2 and aligned with the rotor.
    pub total: SpaceVector,
}

impl StatorCurrent {
    /// Currents for a rotor angle in radians.
    pub fn at(angle: f64) -> Self {
        let phases = [0., 1., 2.].map(|k| libm::cos(angle - k * TAU / 3.));
        let axes = [
            SpaceVector::PHASE_A,
            SpaceVector::PHASE_B,
            SpaceVector::PHASE_C,
        ];
        let contributions = [0, 1, 2].map(|k| axes[k] * phases[k]);
        let total = contributions[0] + contributions[1] + contributions[2];

        Self {
            phases,
            contributions,
            total,
        }
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
    fn null_and_active_vectors() {
        for state in SwitchingState::ALL {
            let vector = state.vector();
            dbg!(state.to_string(), vector);
            if state.is_null() {
                assert!(vector.magnitude() < 1e-9);
            } else {
                assert_close(vector.magnitude(), 1.);
            }
        }
        assert_close(SwitchingState(1).vector().angle(), 0.);
        assert_close(SwitchingState(3).vector().angle(), 60.);
        assert_close(SwitchingState(2).vector().angle(), 120.);
        assert_close(SwitchingState(6).vector().angle(), 180.);
        assert_close(SwitchingState(4).vector().angle(), 240.);
        assert_close(SwitchingState(5).vector().angle(), 300.);
    }

    #[test]
    fn gates_round_trip() {
        for state in SwitchingState::ALL {
            let [a, b, c] = state.gates();
            assert_eq!(SwitchingState::from_gates(a, b, c), state);
        }
        assert_eq!(SwitchingState(3).to_string(), "v3 (011)");
    }

    #[test]
    fn sectors_bounded_by_adjacent_states() {
        for sector in Sector::ALL {
            let (first, second) = sector.bounding_states();
            let (start, end) = sector.span();
            assert_close(first.vector().angle(), start);
            assert_close(second.vector().angle(), end % 360.);
            assert_eq!(second, sector.next().bounding_states().0);
        }
    }

    #[test]
    fn closed_hexagon() {
        let vertices = hexagon();
        assert_close(vertices[0].re, vertices[6].re);
        assert_close(vertices[0].im, vertices[6].im);
        let (first, _) = Sector::One.bounding_states();
        assert_close(vertices[0].re, first.vector().re);
        assert_close(vertices[2].im, SwitchingState(2).vector().im);
    }

    #[test]
    fn stator_current_rotates() {
        for degrees in (0..360).step_by(2) {
            let angle = f64::from(degrees).to_radians();
            let current = StatorCurrent::at(angle);
            assert_close(current.phases.iter().sum::<f64>(), 0.);
            assert_close(current.total.magnitude(), 1.5);
            if degrees != 0 {
                assert_close(current.total.angle(), f64::from(degrees));
            }
        }
    }
}

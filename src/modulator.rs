//! Space vector modulator driven from the stationary orthogonal frame, the
//! way a current control loop hands its voltage command to the PWM stage.

use fixed::types::I16F16;

use crate::{
    projection::PhaseProjections,
    svpwm::{self, DutyCycles},
    Sector, FRAC_SQRT_3_2,
};

#[derive(Debug, Clone)]
pub struct TwoPhaseStationaryOrthogonalReferenceFrame {
    pub alpha: I16F16,
    pub beta: I16F16,
}

#[derive(Debug, Clone)]
pub struct SpaceVectorModulator {
    sector: Option<Sector>,
    duties: DutyCycles<f64>,
    d_min: f64,
    d_max: f64,
}

impl Default for SpaceVectorModulator {
    fn default() -> Self {
        Self::new()
    }
}

impl SpaceVectorModulator {
    pub fn new() -> Self {
        Self {
            sector: None,
            duties: DutyCycles {
                a: 0.,
                b: 0.,
                c: 0.,
            },
            d_min: 0.,
            d_max: 1.,
        }
    }

    /// Restrict the duty cycles to `[d_min, d_max]`, e.g. to leave room for
    /// bootstrap charging or current sampling.
    pub fn with_limits(mut self, d_min: f64, d_max: f64) -> Self {
        self.d_min = d_min;
        self.d_max = d_max;
        self
    }

    /// Sector of the last vector set, `None` until the first call to
    /// [`Self::set`].
    pub fn sector(&self) -> Option<Sector> {
        self.sector
    }

    pub fn duties(&self) -> DutyCycles<f64> {
        self.duties
    }

    /// Duties in fixed point, saturating at the `I16F16` range when the
    /// limits allow values that do not fit.
    pub fn fixed_duties(&self) -> [I16F16; 3] {
        self.duties.map(I16F16::saturating_from_num).into_array()
    }

    pub fn max_duty(&self) -> f64 {
        self.duties.max()
    }

    /// Set the voltage vector to modulate.
    ///
    /// Vectors longer than sqrt(3)/2 are scaled down to that modulus, keeping
    /// their angle, so that the output never overmodulates.
    pub fn set(&mut self, value: TwoPhaseStationaryOrthogonalReferenceFrame) {
        let mut alpha = value.alpha.to_num::<f64>();
        let mut beta = value.beta.to_num::<f64>();

        let modulus = libm::sqrt(alpha * alpha + beta * beta);
        if modulus > FRAC_SQRT_3_2 {
            alpha = alpha / modulus * FRAC_SQRT_3_2;
            beta = beta / modulus * FRAC_SQRT_3_2;
        }

        let projections = PhaseProjections::from_alpha_beta(alpha, beta);
        let sector = projections.sector();
        let (d_min, d_max) = (self.d_min, self.d_max);

        self.sector = Some(sector);
        self.duties = svpwm::decompose(sector, &projections).map(|d| d.max(d_min).min(d_max));
    }

    /// Set the voltage vector from its angle in radians, within `0..2π`, and
    /// amplitude.
    pub fn set_angle(&mut self, angle: I16F16, amplitude: I16F16) {
        let (sin_angle, cos_angle) = cordic::sin_cos(angle);
        self.set(TwoPhaseStationaryOrthogonalReferenceFrame {
            alpha: amplitude * cos_angle,
            beta: amplitude * sin_angle,
        });
    }
}

//! Space vector PWM building blocks used to explain and plot SVPWM theory:
//! sector duty cycles, abc phase projections, the firmware modulator,
//! center-aligned carrier comparison and the hexagon of switching states.
#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod carrier;
mod error;
pub mod modulator;
pub mod projection;
mod sector;
pub mod space_vector;
pub mod svpwm;

pub use error::InvalidSectorError;
pub use sector::Sector;
pub use svpwm::{compute_duty_cycles, DutyCycles};

/// sqrt(3)
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;
/// sqrt(3) / 2, the largest amplitude reachable without overmodulation.
pub const FRAC_SQRT_3_2: f64 = SQRT_3 / 2.;
/// 1 / sqrt(3)
pub const FRAC_1_SQRT_3: f64 = 1. / SQRT_3;

//! Carrier comparison of the duty cycles over one sector: for each frame the
//! duty levels, the triangular carrier and the resulting gate signals.

use serde::Serialize;
use svpwm_theory::{carrier::Carrier, compute_duty_cycles, DutyCycles};

mod common;

/// Samples per regulation period.
const SAMPLES: usize = 200;
/// Angle advance per frame, in degrees.
const STEP_DEG: f64 = 0.5;
const FRAME_NS: u64 = 50_000_000;

#[derive(Serialize)]
struct Values {
    angle_deg: f64,
    duty_cycles: [f64; 3],
    /// High-side on time per phase, in percent of the period.
    on_percent: [f64; 3],
    /// Low-side on time per phase, `100 - on_percent`.
    off_percent: [f64; 3],
    time: Vec<f64>,
    carrier: Vec<f64>,
    /// High-side gate per phase, the low side is the complement.
    gates: [Vec<bool>; 3],
    states: Vec<u8>,
}

/// High-side and low-side on times of each phase, in percent of the period.
fn percentages(duties: DutyCycles<f64>) -> ([f64; 3], [f64; 3]) {
    (
        duties.map(|duty| 100. * duty).into_array(),
        duties.map(|duty| 100. * (1. - duty)).into_array(),
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let options = common::Options::with_sector_from_args("currsample-svpwm.mcap")?;
    let sector = options.sector;
    let carrier = Carrier::new(SAMPLES);

    let (start, end) = sector.span();
    let frames = ((end - start) / STEP_DEG) as usize;

    let mut values = Vec::with_capacity(frames);
    for frame in 0..frames {
        let angle_deg = start + frame as f64 * STEP_DEG;
        let duties = compute_duty_cycles(sector.number(), angle_deg)?;

        let gates: [Vec<bool>; 3] = duties
            .map(|duty| carrier.gate(duty).map(|gate| gate.high).collect())
            .into_array();
        let (on_percent, off_percent) = percentages(duties);
        log::debug!(
            "{angle_deg:.1} deg: {:.2} % {:.2} % {:.2} %",
            on_percent[0],
            on_percent[1],
            on_percent[2]
        );

        values.push((
            frame as u64 * FRAME_NS,
            Values {
                angle_deg,
                duty_cycles: duties.into_array(),
                on_percent,
                off_percent,
                time: carrier.times().collect(),
                carrier: carrier.levels().collect(),
                gates,
                states: carrier.states(duties).map(|s| s.index()).collect(),
            },
        ));
    }

    common::write_trace(&options, "svpwm/carrier", values)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_side_complements_high_side() {
        let duties = compute_duty_cycles(1, 30.).unwrap();
        let (on, off) = percentages(duties);
        assert!((on[0] - 100.).abs() < 1e-9);
        assert!((off[0] - 0.).abs() < 1e-9);
        assert!((on[1] - 50.).abs() < 1e-9);
        assert!((off[1] - 50.).abs() < 1e-9);
        assert!((off[2] - 100.).abs() < 1e-9);
        for (on, off) in on.into_iter().zip(off) {
            assert!((on + off - 100.).abs() < 1e-9);
        }
    }
}

//! Stator current space vector built from three balanced phase currents,
//! over one electrical turn in 2° steps.

use std::f64::consts::TAU;

use serde::Serialize;
use svpwm_theory::space_vector::StatorCurrent;

mod common;

const FRAMES: u32 = 180;
const FRAME_NS: u64 = 50_000_000;

#[derive(Serialize)]
struct Values {
    angle_deg: f64,
    phase_currents: [f64; 3],
    phase_vectors: [[f64; 2]; 3],
    stator_current: [f64; 2],
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let options = common::Options::from_args("foc-abcs.mcap")?;

    let values = (0..FRAMES).map(|frame| {
        let angle = TAU * f64::from(frame) / f64::from(FRAMES);
        let current = StatorCurrent::at(angle);
        (
            u64::from(frame) * FRAME_NS,
            Values {
                angle_deg: angle.to_degrees(),
                phase_currents: current.phases,
                phase_vectors: current.contributions.map(|v| [v.re, v.im]),
                stator_current: [current.total.re, current.total.im],
            },
        )
    });

    common::write_trace(&options, "foc/abcs", values)?;

    Ok(())
}

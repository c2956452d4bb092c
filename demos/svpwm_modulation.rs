//! Duty cycles and abc projections of a maximum amplitude vector sweeping
//! one electrical turn in 1° steps.

use serde::Serialize;
use svpwm_theory::{compute_duty_cycles, projection::PhaseProjections, Sector};

mod common;

#[derive(Serialize)]
struct Values {
    angle_deg: f64,
    sector: u8,
    projections: [f64; 3],
    duty_cycles: [f64; 3],
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let options = common::Options::from_args("svpwm-modulation.mcap")?;

    let mut values = Vec::with_capacity(360);
    for sector in Sector::ALL {
        let (start, _) = sector.span();
        let angles: [f64; 60] = std::array::from_fn(|i| start + i as f64);
        let duties = compute_duty_cycles(sector.number(), angles)?;

        for (i, angle_deg) in angles.into_iter().enumerate() {
            let projections = PhaseProjections::from_angle(angle_deg);
            values.push(Values {
                angle_deg,
                sector: sector.number(),
                projections: [projections.a, projections.b, projections.c],
                duty_cycles: [duties.a[i], duties.b[i], duties.c[i]],
            });
        }
        log::debug!("sector {} spans {start}..{}", sector.number(), start + 60.);
    }

    // One sample per millisecond, the same pacing the angle would have at
    // 1000°/s.
    common::write_trace(
        &options,
        "svpwm/modulation",
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i as u64 * 1_000_000, v)),
    )?;

    Ok(())
}

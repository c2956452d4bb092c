//! The eight switching state vectors and the hexagon they span.

use serde::Serialize;
use svpwm_theory::space_vector::{hexagon, SwitchingState};

mod common;

#[derive(Serialize)]
struct State {
    label: String,
    gates: [bool; 3],
    vector: [f64; 2],
}

#[derive(Serialize)]
struct Values {
    states: Vec<State>,
    hexagon: Vec<[f64; 2]>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let options = common::Options::from_args("svpwm-hexagon.mcap")?;

    let states = SwitchingState::ALL
        .into_iter()
        .map(|state| {
            let vector = state.vector();
            log::debug!("{state}: {:.3} at {:.0} deg", vector.magnitude(), vector.angle());
            State {
                label: state.to_string(),
                gates: state.gates(),
                vector: [vector.re, vector.im],
            }
        })
        .collect();
    let hexagon = hexagon().into_iter().map(|v| [v.re, v.im]).collect();

    common::write_trace(&options, "svpwm/hexagon", [(0, Values { states, hexagon })])?;

    Ok(())
}

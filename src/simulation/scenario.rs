//! Build fully-initialized engines from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime [`Engine`]
//! with its parameters validated and every configured particle added in order

use log::info;

use crate::configuration::config::{ParticleConfig, ScenarioConfig};
use crate::error::{Error, Result};
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

/// Map a two-component config vector to an `NVec2`
fn vec2(name: &'static str, xs: &[f64]) -> Result<NVec2> {
    match xs {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(Error::invalid(name, format!("expected 2 components, got {}", xs.len()))),
    }
}

pub fn build_engine(cfg: ScenarioConfig) -> Result<Engine> {
    // Parameters (runtime) from ParametersConfig
    let p_cfg = cfg.parameters;
    let parameters = Parameters {
        t_end: p_cfg.t_end,
        num_steps: p_cfg.num_steps,
        coulomb_k: p_cfg.coulomb_k,
        distance_floor: p_cfg.distance_floor,
    };
    let mut engine = Engine::new(parameters)?;

    // Particles: insertion order is kept for presentation
    for pc in &cfg.particles {
        match pc {
            ParticleConfig::Proton { x, v } => {
                engine.add_proton(vec2("x", x)?, vec2("v", v)?)?;
            }
            ParticleConfig::Electron { x, v } => {
                engine.add_electron(vec2("x", x)?, vec2("v", v)?)?;
            }
            ParticleConfig::Charge { x, v, m, q } => {
                engine.add_particle(vec2("x", x)?, vec2("v", v)?, *m, *q)?;
            }
        }
    }

    info!("built scenario with {} particles", engine.len());
    Ok(engine)
}

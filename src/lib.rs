pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{Error, Result};

pub use simulation::states::{Particle, NVec2};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::forces::{ForceLaw, ForceSet, CoulombForce};
pub use simulation::integrator::{kinematic_sample, sample_times};
pub use simulation::scenario::build_engine;
pub use simulation::constants::{COULOMB_K, ELECTRON_MASS, ELEMENTARY_CHARGE, PROTON_MASS};

pub use configuration::config::{ParametersConfig, ParticleConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_coulomb, bench_simulate_curve};

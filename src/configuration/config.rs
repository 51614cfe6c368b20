//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – time window, sample count and physical constants
//! - [`ParticleConfig`]   – initial state for each particle
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   t_end: 5.0                  # total simulation time (s)
//!   num_steps: 15               # samples, both endpoints included
//!   coulomb_k: 8.9875517923e9   # optional, Coulomb's constant
//!   distance_floor: 1.0e-9      # optional, minimum separation (m)
//!
//! particles:
//!   - kind: electron
//!     x: [ 1.0e-12, 1.0e-12 ]
//!     v: [ 0.0, 0.0 ]
//!   - kind: proton
//!     x: [ 0.0, 1.0e-12 ]
//!     v: [ 0.0, 0.0 ]
//!   - kind: charge              # arbitrary point charge
//!     x: [ 1.0e-12, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 9.109e-31
//!     q: -1.602e-19
//! ```
//!
//! The scenario builder maps this configuration into a ready [`Engine`](crate::Engine).

use serde::Deserialize;

use crate::simulation::constants::{COULOMB_K, DEFAULT_DISTANCE_FLOOR, DEFAULT_NUM_STEPS};

fn default_num_steps() -> usize {
    DEFAULT_NUM_STEPS
}

fn default_coulomb_k() -> f64 {
    COULOMB_K
}

fn default_distance_floor() -> f64 {
    DEFAULT_DISTANCE_FLOOR
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    #[serde(default = "default_num_steps")]
    pub num_steps: usize, // sample count
    #[serde(default = "default_coulomb_k")]
    pub coulomb_k: f64, // Coulomb's constant
    #[serde(default = "default_distance_floor")]
    pub distance_floor: f64, // separation used when two particles coincide
}

/// Configuration for a single particle's initial state.
/// Protons and electrons take their mass and charge from the physical constants.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ParticleConfig {
    Proton {
        x: Vec<f64>, // initial position (m)
        v: Vec<f64>, // initial velocity (m/s)
    },
    Electron {
        x: Vec<f64>,
        v: Vec<f64>,
    },
    Charge {
        x: Vec<f64>,
        v: Vec<f64>,
        m: f64, // mass (kg)
        q: f64, // charge (C)
    },
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Window and physical constants
    pub particles: Vec<ParticleConfig>, // Particles in insertion order
}

//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - length of the simulated window and number of samples,
//! - Coulomb's constant used by the force law,
//! - the distance floor substituted for coincident particles

use crate::error::{Error, Result};
use crate::simulation::constants::{COULOMB_K, DEFAULT_DISTANCE_FLOOR, DEFAULT_NUM_STEPS, DEFAULT_T_END};

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub t_end: f64, // total simulated time
    pub num_steps: usize, // samples over [0, t_end], both ends included
    pub coulomb_k: f64, // force-law constant
    pub distance_floor: f64, // minimum separation, numerical safety net only
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            t_end: DEFAULT_T_END,
            num_steps: DEFAULT_NUM_STEPS,
            coulomb_k: COULOMB_K,
            distance_floor: DEFAULT_DISTANCE_FLOOR,
        }
    }
}

impl Parameters {
    /// Check every field, reporting the first offending one
    pub fn validate(&self) -> Result<()> {
        validate_window(self.t_end, self.num_steps)?;
        if !(self.coulomb_k.is_finite() && self.coulomb_k > 0.0) {
            return Err(Error::invalid("coulomb_k", format!("must be finite and > 0, got {}", self.coulomb_k)));
        }
        if !(self.distance_floor.is_finite() && self.distance_floor > 0.0) {
            return Err(Error::invalid(
                "distance_floor",
                format!("must be finite and > 0, got {}", self.distance_floor),
            ));
        }
        Ok(())
    }
}

/// A window needs a positive duration and at least its two endpoints
pub fn validate_window(total_time: f64, num_steps: usize) -> Result<()> {
    if !(total_time.is_finite() && total_time > 0.0) {
        return Err(Error::invalid("total_time", format!("must be finite and > 0, got {total_time}")));
    }
    if num_steps < 2 {
        return Err(Error::invalid("num_steps", format!("must be >= 2, got {num_steps}")));
    }
    Ok(())
}

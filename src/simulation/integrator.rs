//! Fixed-sample kinematic integrator for the charged-particle system
//!
//! Positions are evaluated analytically at each sample time `t` from the
//! particle's position at the start of the window:
//!
//!   x(t) = x_0 + v t + 1/2 a t^2
//!
//! where `a` is recomputed at every sample from the forces at the positions
//! committed by the previous sample. Velocities are never updated.

use log::trace;

use super::forces::ForceSet;
use super::params::validate_window;
use super::states::{NVec2, Particle};
use crate::error::Result;

/// `num_steps` evenly spaced times over [0, total_time], both ends included
pub fn sample_times(total_time: f64, num_steps: usize) -> Result<Vec<f64>> {
    validate_window(total_time, num_steps)?;

    let step = total_time / (num_steps - 1) as f64;
    Ok((0..num_steps).map(|i| step * i as f64).collect())
}

/// Advance all particles to sample time `t`.
///
/// `origins[i]` is the position particle `i` had when the window started.
/// Every particle gets its force, acceleration and new trajectory point from
/// the same snapshot of current positions; only then are the new positions
/// committed, so no particle sees a neighbour that already moved this sample.
pub fn kinematic_sample(particles: &mut [Particle], origins: &[NVec2], forces: &ForceSet, t: f64) -> Result<()> {
    let n = particles.len();
    if n == 0 { // no particles, return
        return Ok(());
    }
    debug_assert_eq!(origins.len(), n);

    // Net force per particle from the current (committed) positions
    let mut net = vec![NVec2::zeros(); n];
    forces.accumulate_forces(&*particles, &mut net);

    // Force -> acceleration -> candidate position, for ALL particles first
    for ((p, f), x0) in particles.iter_mut().zip(net.iter()).zip(origins.iter()) {
        p.set_force(*f);
        let a = p.compute_acceleration()?;

        let x = x0 + p.velocity() * t + 0.5 * a * (t * t);
        p.append_trajectory_point(x);
        trace!("t = {t:e}: {p}");
    }

    // Commit: the just-appended point becomes the current position
    for p in particles.iter_mut() {
        let last = p.trajectory().last().copied();
        if let Some(x) = last {
            p.set_position(x);
        }
    }

    Ok(())
}

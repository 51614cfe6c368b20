//! Core state types for the charged-particle simulation.
//!
//! `Particle` holds the kinematic state (position, velocity), the physical
//! constants of the body (mass, charge), the per-step force/acceleration and
//! the recorded trajectory. Fields are private so the mass invariant and the
//! append-only trajectory cannot be broken from outside.

use std::fmt;

use nalgebra::Vector2;

use crate::error::{Error, Result};

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    x: NVec2, // position (m)
    v: NVec2, // velocity (m/s)
    m: f64, // mass (kg), always > 0
    q: f64, // charge (C)
    force: Option<NVec2>, // net force for the current step (N)
    accel: Option<NVec2>, // force / mass for the current step (m/s^2)
    trajectory: Vec<NVec2>, // sampled positions, append-only
}

impl Particle {
    /// Create a particle at `x` moving with `v`, with an empty trajectory.
    /// Fails with [`Error::InvalidParameter`] unless `m` is finite and positive.
    pub fn new(x: NVec2, v: NVec2, m: f64, q: f64) -> Result<Self> {
        if !(m.is_finite() && m > 0.0) {
            return Err(Error::invalid("mass", format!("must be finite and > 0, got {m}")));
        }
        if !(x.iter().all(|c| c.is_finite()) && v.iter().all(|c| c.is_finite()) && q.is_finite()) {
            return Err(Error::invalid("particle", "position, velocity and charge must be finite"));
        }

        Ok(Self {
            x,
            v,
            m,
            q,
            force: None,
            accel: None,
            trajectory: Vec::new(),
        })
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn charge(&self) -> f64 {
        self.q
    }

    /// Net force of the current step, `None` until the engine computed it
    pub fn force(&self) -> Option<NVec2> {
        self.force
    }

    /// Acceleration of the current step, `None` until derived from the force
    pub fn acceleration(&self) -> Option<NVec2> {
        self.accel
    }

    /// Overwrite the net force. Forces are never summed across steps.
    pub fn set_force(&mut self, f: NVec2) {
        self.force = Some(f);
        // acceleration belonged to the previous force
        self.accel = None;
    }

    /// a = F / m
    pub fn compute_acceleration(&mut self) -> Result<NVec2> {
        let f = self.force.ok_or(Error::ForceNotComputed)?;
        if self.m == 0.0 {
            return Err(Error::DivisionByZero("acceleration"));
        }
        let a = f / self.m;
        self.accel = Some(a);
        Ok(a)
    }

    pub(crate) fn set_position(&mut self, x: NVec2) {
        self.x = x;
    }

    pub fn append_trajectory_point(&mut self, p: NVec2) {
        self.trajectory.push(p);
    }

    /// Every position sampled so far, oldest first
    pub fn trajectory(&self) -> &[NVec2] {
        &self.trajectory
    }

    /// x components of the trajectory, in sample order
    pub fn x_points(&self) -> impl Iterator<Item = f64> + '_ {
        self.trajectory.iter().map(|p| p.x)
    }

    /// y components of the trajectory, in sample order
    pub fn y_points(&self) -> impl Iterator<Item = f64> + '_ {
        self.trajectory.iter().map(|p| p.y)
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Particle(x=({:e}, {:e}), v=({:e}, {:e}), m={:e}, q={:e}",
            self.x.x, self.x.y, self.v.x, self.v.y, self.m, self.q
        )?;
        match self.force {
            Some(force) => write!(f, ", force=({:e}, {:e})", force.x, force.y)?,
            None => write!(f, ", force=None")?,
        }
        match self.accel {
            Some(a) => write!(f, ", accel=({:e}, {:e}))", a.x, a.y),
            None => write!(f, ", accel=None)"),
        }
    }
}

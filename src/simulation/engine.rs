//! Simulation engine
//!
//! Owns the particle collection (in insertion order), the run parameters and
//! the active force set, and drives the sampling loop over a time window.

use log::{debug, info};

use crate::error::{Error, Result};
use crate::simulation::constants::{ELECTRON_MASS, ELEMENTARY_CHARGE, PROTON_MASS};
use crate::simulation::forces::{CoulombForce, ForceSet};
use crate::simulation::integrator::{kinematic_sample, sample_times};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle};

pub struct Engine {
    particles: Vec<Particle>,
    parameters: Parameters,
    forces: ForceSet,
}

impl Default for Engine {
    fn default() -> Self {
        let parameters = Parameters::default();
        let forces = coulomb_set(&parameters);
        Self {
            particles: Vec::new(),
            parameters,
            forces,
        }
    }
}

/// Force set with Coulomb electrostatics configured from `params`
fn coulomb_set(params: &Parameters) -> ForceSet {
    ForceSet::new().with(CoulombForce {
        k: params.coulomb_k,
        distance_floor: params.distance_floor,
    })
}

impl Engine {
    /// Validate `parameters` and register Coulomb forces built from them
    pub fn new(parameters: Parameters) -> Result<Self> {
        parameters.validate()?;
        let forces = coulomb_set(&parameters);
        Ok(Self {
            particles: Vec::new(),
            parameters,
            forces,
        })
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Particles in insertion order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, i: usize) -> Option<&Particle> {
        self.particles.get(i)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Add a point charge. Fails with [`Error::DuplicatePosition`] if another
    /// particle sits at exactly the same coordinates; nothing is added then.
    pub fn add_particle(&mut self, x: NVec2, v: NVec2, m: f64, q: f64) -> Result<&Particle> {
        if self.particles.iter().any(|p| p.position() == x) {
            return Err(Error::DuplicatePosition { x: x.x, y: x.y });
        }
        let particle = Particle::new(x, v, m, q)?;
        debug!("added particle #{}: {}", self.particles.len(), particle);

        self.particles.push(particle);
        Ok(&self.particles[self.particles.len() - 1])
    }

    pub fn add_proton(&mut self, x: NVec2, v: NVec2) -> Result<&Particle> {
        self.add_particle(x, v, PROTON_MASS, ELEMENTARY_CHARGE)
    }

    pub fn add_electron(&mut self, x: NVec2, v: NVec2) -> Result<&Particle> {
        self.add_particle(x, v, ELECTRON_MASS, -ELEMENTARY_CHARGE)
    }

    /// Set every particle's net force from the current positions without
    /// advancing time
    pub fn compute_forces(&mut self) {
        let mut net = vec![NVec2::zeros(); self.particles.len()];
        self.forces.accumulate_forces(&self.particles, &mut net);
        for (p, f) in self.particles.iter_mut().zip(net) {
            p.set_force(f);
        }
    }

    /// Sample `num_steps` evenly spaced times over [0, total_time] and append
    /// one trajectory point per sample to every particle.
    ///
    /// Fails with [`Error::InvalidParameter`] for `num_steps < 2` or a
    /// non-positive `total_time`, before any particle is touched.
    pub fn simulate(&mut self, total_time: f64, num_steps: usize) -> Result<()> {
        let times = sample_times(total_time, num_steps)?;
        info!(
            "simulating {} particles over {:e} s in {} samples",
            self.particles.len(),
            total_time,
            num_steps
        );

        // Every sample extrapolates from where the particles start this window
        let origins: Vec<NVec2> = self.particles.iter().map(Particle::position).collect();

        for (i, t) in times.into_iter().enumerate() {
            debug!("sample {i}: t = {t:e}");
            kinematic_sample(&mut self.particles, &origins, &self.forces, t)?;
        }
        Ok(())
    }

    /// Simulate the window configured in [`Parameters`]
    pub fn run(&mut self) -> Result<()> {
        let (t_end, num_steps) = (self.parameters.t_end, self.parameters.num_steps);
        self.simulate(t_end, num_steps)
    }
}

//! Force contributors for the charged-particle engine
//!
//! Defines the force-law trait, the set that sums several laws,
//! and direct pairwise Coulomb electrostatics

use crate::simulation::states::{NVec2, Particle};

/// Collection of force laws (Coulomb, external fields, etc.)
/// Each term implements [`ForceLaw`] and their contributions are summed
/// into a single net force per particle
pub struct ForceSet {
    terms: Vec<Box<dyn ForceLaw + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceLaw + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute net forces for all `particles` at their current positions
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, particles: &[Particle], out: &mut [NVec2]) {
        // Zero buffer, the previous step's force must not leak in
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.force(particles, out);
        }
    }
}

/// Trait for force sources operating on a particle slice.
/// Implementations add their contribution into `out[i]` for each particle
/// and only read positions, never write them.
pub trait ForceLaw {
    fn force(&self, particles: &[Particle], out: &mut [NVec2]);
}

/// Coulomb electrostatics, direct O(n^2) sum
pub struct CoulombForce {
    pub k: f64, // Coulomb's constant
    pub distance_floor: f64, // substituted when two particles coincide
}

impl CoulombForce {
    /// Force exerted on `p` by `q`.
    ///
    /// The magnitude is k |q_p q_q| / d^2 along the unit separation vector
    /// from `q` to `p`; like charges push `p` away from `q`, unlike charges
    /// pull it toward `q`.
    ///
    /// A separation of exactly zero is replaced by `distance_floor` so the
    /// division stays finite. This is a numerical safety net and not a
    /// physical model: the separation vector is still zero, so coincident
    /// particles exert no force on each other.
    pub fn force_between(&self, p: &Particle, q: &Particle) -> NVec2 {
        let qq = p.charge() * q.charge();
        if qq == 0.0 {
            return NVec2::zeros();
        }

        let r = p.position() - q.position(); // points from q to p
        let mut d = r.norm();
        if d == 0.0 {
            d = self.distance_floor;
        }

        let magnitude = self.k * qq.abs() / (d * d);

        // positive -> repulsive (along +r), negative -> attractive
        let signed = magnitude * qq.signum();

        (signed / d) * r
    }
}

impl ForceLaw for CoulombForce {
    fn force(&self, particles: &[Particle], out: &mut [NVec2]) {
        let n = particles.len();

        // Unordered pairs (i, j) with i < j; Newton's third law gives j's share
        for i in 0..n {
            for j in (i + 1)..n {
                let f = self.force_between(&particles[i], &particles[j]);
                out[i] += f;
                out[j] -= f;
            }
        }
    }
}

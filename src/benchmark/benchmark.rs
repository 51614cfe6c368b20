use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::forces::{CoulombForce, ForceLaw};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle};
use crate::simulation::constants::{ELECTRON_MASS, ELEMENTARY_CHARGE};
use crate::error::Result;

/// Deterministic, non-coincident electron positions (no rand needed)
fn layout(n: usize) -> impl Iterator<Item = NVec2> {
    (0..n).map(|i| {
        let i_f = i as f64;
        // golden-angle spiral, radius grows with sqrt(i) so no two points meet
        let r = 1.0e-9 * (i_f + 1.0).sqrt();
        let phi = i_f * 2.399_963_229_728_653;
        NVec2::new(r * phi.cos(), r * phi.sin())
    })
}

fn make_particles(n: usize) -> Result<Vec<Particle>> {
    layout(n)
        .map(|x| Particle::new(x, NVec2::zeros(), ELECTRON_MASS, -ELEMENTARY_CHARGE))
        .collect()
}

fn make_engine(n: usize, params: &Parameters) -> Result<Engine> {
    let mut engine = Engine::new(params.clone())?;
    for x in layout(n) {
        engine.add_electron(x, NVec2::zeros())?;
    }
    Ok(engine)
}

/// Time one direct Coulomb force evaluation per particle count
pub fn bench_coulomb() -> Result<()> {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let params = Parameters::default();

    for n in ns {
        let particles = make_particles(n)?;
        let mut out = vec![NVec2::zeros(); n];

        let coulomb = CoulombForce {
            k: params.coulomb_k,
            distance_floor: params.distance_floor,
        };

        // Warm up
        coulomb.force(&particles, &mut out);

        let t0 = Instant::now();
        coulomb.force(&particles, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, coulomb = {dt:8.6} s");
    }
    Ok(())
}

/// Time a full simulate pass per particle count
/// Paste output directly into a spreadsheet to graph
pub fn bench_simulate_curve() -> Result<()> {
    println!("N,samples,ms");

    let params = Parameters {
        t_end: 1.0e-12,
        ..Parameters::default()
    };

    for n in (100..=1600).step_by(100) {
        let mut engine = make_engine(n, &params)?;

        let t0 = Instant::now();
        engine.run()?;
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{},{:.6}", n, params.num_steps, ms);
    }
    Ok(())
}

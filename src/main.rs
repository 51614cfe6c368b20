use coulomb_sim::{build_engine, sample_times, Engine, ScenarioConfig};
use coulomb_sim::{bench_coulomb, bench_simulate_curve};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "three_electrons.yaml")]
    file_name: String,

    /// Run the force/simulate benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;

    log::debug!("{:?}", scenario_cfg);

    Ok(scenario_cfg)
}

/// Trajectories as CSV, the hand-off point for any plotting tool
fn write_trajectories(engine: &Engine, out: &mut impl Write) -> Result<()> {
    let params = engine.parameters();
    let times = sample_times(params.t_end, params.num_steps)?;

    writeln!(out, "particle,sample,t,x,y")?;
    for (i, p) in engine.particles().iter().enumerate() {
        for (s, (x, t)) in p.trajectory().iter().zip(&times).enumerate() {
            writeln!(out, "{},{},{:e},{:e},{:e}", i, s, t, x.x, x.y)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_coulomb()?;
        bench_simulate_curve()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut engine = build_engine(scenario_cfg)?;
    engine.run()?;

    for p in engine.particles() {
        log::info!("final state: {p}");
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_trajectories(&engine, &mut out)?;
    out.flush()?;

    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use courier_core::{build_graph, build_risk_table, solve, HunterSighting, JobParams};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod config;
mod store;

/// Give me the odds: compute the probability that a courier run succeeds.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Compute the success probability for a single mission.
    Solve(SolveArgs),
}

#[derive(clap::Args, Debug)]
struct SolveArgs {
    /// Path to the mission configuration file (autonomy, departure, arrival, routes_db).
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Path to the communication file (countdown and bounty-hunter sightings).
    communication: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Solve(args) => {
            let odds = solve_mission(&args)?;
            println!("{}", serde_json::json!({ "odds": odds }));
        }
    }
    Ok(())
}

fn solve_mission(args: &SolveArgs) -> Result<f64> {
    let falcon: config::FalconConfig = config::read_case_insensitive(&args.config)
        .with_context(|| format!("failed to load configuration from {}", args.config.display()))?;
    let communication: config::CommunicationConfig =
        config::read_case_insensitive(&args.communication).with_context(|| {
            format!(
                "failed to load communication from {}",
                args.communication.display()
            )
        })?;

    let records = store::load_routes(&falcon.routes_db)
        .with_context(|| format!("failed to load routes from {}", falcon.routes_db.display()))?;
    let graph = build_graph(records).context("failed to build the routing graph")?;

    let sightings = communication
        .bounty_hunters
        .into_iter()
        .map(|hunter| HunterSighting::new(hunter.planet, hunter.day));
    let risk_table = build_risk_table(sightings);

    let params = JobParams::new(
        falcon.autonomy,
        falcon.departure,
        falcon.arrival,
        communication.countdown,
    )
    .context("invalid job configuration")?;

    solve(&params, &graph, &risk_table).context("failed to solve the courier job")
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

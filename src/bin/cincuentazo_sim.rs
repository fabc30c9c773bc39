//! Batch simulator: plays many seeded games headlessly and prints win rates.

use clap::Parser;
use tracing::info;

use cincuentazo::sim::{self, SimConfig, UniformMoves};

#[derive(Parser)]
#[command(name = "cincuentazo_sim")]
#[command(about = "Headless simulator for the fifty-ceiling card game")]
struct Args {
    /// Number of automated opponents (1-3)
    #[arg(short, long, default_value = "1")]
    cpus: usize,

    /// Number of games to simulate
    #[arg(short, long, default_value = "100")]
    games: usize,

    /// Master seed; a random one is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Turns before a game is cut off
    #[arg(long, default_value = "500")]
    max_turns: u32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = SimConfig::new()
        .with_cpu_count(args.cpus)
        .with_games(args.games)
        .with_seed(seed)
        .with_max_turns(args.max_turns);

    info!(cpus = config.cpu_count, games = config.games, seed, "starting simulation");

    let mut source = UniformMoves::new(seed ^ 0x5EED);
    let summary = sim::run(&config, &mut source)?;

    println!("games:        {}", summary.games);
    println!("avg turns:    {:.1}", summary.average_turns());
    println!("recycles:     {}", summary.total_recycles);
    for (id, wins) in summary.wins.iter() {
        let label = if id.is_human() { "human" } else { "cpu" };
        println!(
            "{id} ({label}): {wins} wins ({:.1}%)",
            summary.win_rate(id) * 100.0
        );
    }
    println!("no survivor:  {}", summary.no_survivor);
    println!("turn limit:   {}", summary.turn_limit);

    Ok(())
}

//! eigenear - CLI entry point
//!
//! Drives the competitive-learning network against the synthetic frame
//! source and reports what the unit population has learned.

use clap::{Parser, Subcommand};
use eigenear::network::NetworkSnapshot;
use eigenear::stats::{Stats, StatsHistory};
use eigenear::{benchmark, Config, Network, SyntheticSource};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "eigenear")]
#[command(version)]
#[command(about = "Online competitive-learning network for audio spectral frames")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a learning session against the synthetic source
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Number of frames to process
        #[arg(short, long, default_value = "10000")]
        frames: u64,

        /// Output directory for stats and the final snapshot
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Quiet mode (minimal output)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of frames
        #[arg(short, long, default_value = "10000")]
        frames: u64,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },

    /// Analyze a saved network snapshot
    Analyze {
        /// Snapshot file (JSON)
        snapshot: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            frames,
            output,
            seed,
            quiet,
        } => run_session(config, frames, output, seed, quiet),

        Commands::Benchmark { frames } => run_benchmark(frames),

        Commands::Init { output } => generate_config(output),

        Commands::Analyze { snapshot } => analyze_snapshot(snapshot),
    }
}

fn run_session(
    config_path: PathBuf,
    frames: u64,
    output: PathBuf,
    seed: Option<u64>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load or create config
    let config = if config_path.exists() {
        log::info!("Loading config from: {:?}", config_path);
        Config::from_file(&config_path)?
    } else {
        log::info!("Using default configuration");
        Config::default()
    };

    std::fs::create_dir_all(&output)?;

    let seed = seed.unwrap_or_else(rand::random);
    log::info!("Using seed: {}", seed);

    let mut network = Network::new_with_seed(config.network.clone(), seed)?;
    let mut source = SyntheticSource::new(config.source.clone(), seed);

    println!("Starting session");
    println!("  Units: {}", config.network.n_units);
    println!("  Synapses per unit: {}", config.network.synapse_count);
    println!("  Frame length: {}", config.source.frame_len);
    println!("  Frames: {}", frames);
    println!();

    let stats_interval = config.logging.stats_interval;
    let mut stats = Stats::new();
    let mut history = StatsHistory::new(stats_interval);
    let start = Instant::now();

    for i in 0..frames {
        let frame = source.next_frame();
        network.step(&frame)?;

        if i % stats_interval == 0 {
            stats.update(&network);
            stats.steps_per_second =
                network.frames() as f32 / start.elapsed().as_secs_f32().max(1e-9);
            history.record(stats.clone());
            if !quiet {
                println!("{}", stats.summary());
            }
        }
    }

    let elapsed = start.elapsed();

    println!();
    println!("=== Session Complete ===");
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("Frames: {}", network.frames());
    println!(
        "Speed: {:.1} frames/s",
        network.frames() as f64 / elapsed.as_secs_f64()
    );
    print_ranking(&network.snapshot());

    // Save stats history
    let stats_path = output.join("stats_history.json");
    history.save(stats_path.to_str().unwrap())?;
    println!("Stats history: {:?}", stats_path);

    // Save final snapshot for the analyze command or external presenters
    let snapshot_path = output.join("snapshot_final.json");
    let json = serde_json::to_string_pretty(&network.snapshot())?;
    std::fs::write(&snapshot_path, json)?;
    println!("Final snapshot: {:?}", snapshot_path);

    Ok(())
}

fn run_benchmark(frames: u64) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== eigenear Benchmark ===");
    println!("Frames: {}", frames);
    println!();

    let result = benchmark(frames, Config::default(), 42);
    println!("{}", result);

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}

fn analyze_snapshot(snapshot_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Snapshot Analysis ===");
    println!("File: {:?}", snapshot_path);
    println!();

    let json = std::fs::read_to_string(&snapshot_path)?;
    let snapshot: NetworkSnapshot = serde_json::from_str(&json)?;

    println!("Frames processed: {}", snapshot.frames);
    println!("Last winner: unit {}", snapshot.winner);
    println!("Units: {}", snapshot.eigenvalues.len());
    print_ranking(&snapshot);

    Ok(())
}

fn print_ranking(snapshot: &NetworkSnapshot) {
    let mut ranking: Vec<(usize, f32)> = snapshot
        .eigenvalues
        .iter()
        .cloned()
        .enumerate()
        .collect();
    ranking.sort_by(|a, b| b.1.total_cmp(&a.1));

    println!();
    println!("Units by captured energy:");
    for (unit, eval) in &ranking {
        let norm: f32 = snapshot.weights[*unit]
            .iter()
            .map(|w| w * w)
            .sum::<f32>()
            .sqrt();
        println!("  unit {:2}: eigenvalue {:+.5}  |w| {:.3}", unit, eval, norm);
    }
}

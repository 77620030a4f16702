//! CLI frontend for the One Roll Engine dice-pool engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

use ore_core::{ContestMode, Pool, PoolConfig};

#[derive(Parser)]
#[command(
    name = "ore",
    about = "One Roll Engine — roll d10 pools, find matches, resolve contests",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a pool and show its matches and waste
    Roll {
        /// Number of dice to roll
        #[arg(default_value_t = Pool::DEFAULT_SIZE)]
        count: u32,

        /// Penalty dice subtracted before rolling
        #[arg(short, long, default_value = "0")]
        penalty: u32,

        /// Allow more than ten dice
        #[arg(long)]
        over_ten: bool,

        /// Reroll until no set is wider than five
        #[arg(long)]
        limit_width: bool,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Resolve a static (one pool) or dynamic (two pools) contest
    Contest {
        /// First pool: a die count (5) or comma-separated faces (2,2,7)
        first: String,

        /// Opposing pool, same format; omit for a static contest
        second: Option<String>,

        /// Minimum match height for a static success
        #[arg(short, long, default_value = "1")]
        difficulty: u8,

        /// Compare widest sets instead of tallest in a dynamic contest
        #[arg(short, long)]
        width_wins: bool,

        /// What the contest is about
        #[arg(long, default_value = "An ORE contest")]
        desc: String,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Throw gobble dice at a match
    Gobble {
        /// Target match in WIDTHxHEIGHT notation (e.g. 3x6)
        target: String,

        /// Gobble dice in WIDTHxHEIGHT notation (e.g. 3x7)
        gobble: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Roll a pool, then choose the face of a master die
    Master {
        /// Number of dice to roll before the master die
        count: u32,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Roll a pool with an expert die set in advance
    Expert {
        /// Number of dice to roll besides the expert die
        count: u32,

        /// Face of the expert die (prompted for if omitted)
        #[arg(short, long)]
        value: Option<u32>,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            count,
            penalty,
            over_ten,
            limit_width,
            seed,
            json,
        } => {
            let config = PoolConfig::default()
                .with_penalty(penalty)
                .with_over_ten(over_ten)
                .with_limit_width(limit_width);
            commands::roll::run(count, &config, seed, json)
        }
        Commands::Contest {
            first,
            second,
            difficulty,
            width_wins,
            desc,
            seed,
            json,
        } => commands::contest::run(
            &desc,
            &first,
            second.as_deref(),
            difficulty,
            ContestMode::from_width_wins(width_wins),
            seed,
            json,
        ),
        Commands::Gobble {
            target,
            gobble,
            json,
        } => commands::gobble::run(&target, &gobble, json),
        Commands::Master { count, seed } => commands::master::run(count, seed),
        Commands::Expert { count, value, seed } => commands::expert::run(count, value, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

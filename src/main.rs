use std::io::Read;

use anyhow::Context;
use battleship_solitaire::{generate_clues, generate_fleet, init_logging, RngRandomSource};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Battleship Solitaire fleet generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fleet from a configuration JSON payload.
    Fleet {
        /// Configuration JSON; read from stdin when omitted.
        config: Option<String>,
        /// Seed for the random generator, for reproducible fleets.
        #[arg(long)]
        seed: Option<u64>,
        /// Also print the fleet as a text grid on stderr.
        #[arg(long)]
        render: bool,
    },
    /// Compute row/column clues from a fleet JSON payload.
    Clues {
        /// Fleet JSON; read from stdin when omitted.
        fleet: Option<String>,
    },
}

fn read_input(arg: Option<String>) -> anyhow::Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading payload from stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Fleet {
            config,
            seed,
            render,
        } => {
            let input = read_input(config)?;
            let rng = match seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            let mut source = RngRandomSource(rng);
            let output = generate_fleet(&input, &mut source);
            println!("{output}");
            if render {
                if let Ok(fleet) = battleship_solitaire::parse_fleet(&output) {
                    eprintln!("{fleet}");
                }
            }
        }
        Commands::Clues { fleet } => {
            let input = read_input(fleet)?;
            println!("{}", generate_clues(&input));
        }
    }
    Ok(())
}

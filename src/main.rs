//! algobench CLI: interactive explorer and timing driver.

use std::io;
use std::path::PathBuf;

use algobench::{Algorithm, BenchOptions, DEFAULT_OUTPUT, Explorer, perf};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "algobench")]
#[command(about = "Classical numeric algorithms: interactive explorer and performance analysis")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for inputs on stdin and run each algorithm once
    Explore,

    /// Time every algorithm across its reference input sizes
    Analyze {
        /// Output CSV file
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Random seed for reproducible inputs
        #[arg(long)]
        seed: Option<u64>,

        /// Restrict the run to these algorithms (repeatable)
        #[arg(short, long = "algorithm")]
        algorithms: Vec<Algorithm>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Explore => {
            let stdin = io::stdin();
            Explorer::new(stdin.lock(), io::stdout().lock()).run()
        }
        Commands::Analyze { output, seed, algorithms } => {
            let options = BenchOptions {
                output,
                seed,
                algorithms: if algorithms.is_empty() { Algorithm::ALL.to_vec() } else { algorithms },
            };
            perf::run(&options).map(|_| ())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

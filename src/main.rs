use clap::{Parser, Subcommand};
use std::process::ExitCode;

use sat_mock::web::{run_server, Config};

#[derive(Parser)]
#[command(name = "sat-mock")]
#[command(about = "Mock satellite tracking API for frontend development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the mock API server
    Serve {
        /// YAML config file
        #[arg(long)]
        config: Option<String>,
        /// Address to bind, overrides the config file
        #[arg(long)]
        bind: Option<String>,
        /// Fixed RNG seed, overrides the config file
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Validate a config file and print the effective settings
    CheckConfig { config: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, bind, seed } => serve(config.as_deref(), bind, seed).await,
        Commands::CheckConfig { config } => check_config(&config),
    }
}

async fn serve(path: Option<&str>, bind: Option<String>, seed: Option<u64>) -> ExitCode {
    let mut config = match path.map(Config::from_file).transpose() {
        Ok(c) => c.unwrap_or_default(),
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(bind) = bind {
        config.web.bind = bind;
    }
    if seed.is_some() {
        config.simulation.seed = seed;
    }

    match run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn check_config(path: &str) -> ExitCode {
    match Config::from_file(path) {
        Ok(config) => {
            println!("Config is valid");
            println!("  bind: {}", config.web.bind);
            match config.simulation.seed {
                Some(seed) => println!("  seed: {}", seed),
                None => println!("  seed: (entropy)"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {}", e);
            ExitCode::FAILURE
        }
    }
}

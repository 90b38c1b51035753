//! Command-line client for the gateway's operations.
//!
//! Runs the same validation, upstream call and shape checks as the HTTP
//! routes, without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Show the resolved configuration
//! cargo run --bin pokectl -- config
//!
//! # Check that PokeAPI answers
//! cargo run --bin pokectl -- ping
//!
//! # Lookups
//! cargo run --bin pokectl -- id 25
//! cargo run --bin pokectl -- name "Mr-Mime"
//! cargo run --bin pokectl -- list --limit 5 --offset 10
//! cargo run --bin pokectl -- type fire
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `pokeapi_gateway::config`.

use pokeapi_gateway::application::services::PokemonService;
use pokeapi_gateway::config::{self, Config, mask_url_credentials};
use pokeapi_gateway::error::AppError;
use pokeapi_gateway::infrastructure::pokeapi::PokeApiSource;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

/// CLI tool for querying PokeAPI through the gateway's rules.
#[derive(Parser)]
#[command(name = "pokectl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration
    Config,

    /// Check that PokeAPI is reachable
    Ping,

    /// Fetch a Pokemon by ID
    Id {
        /// Pokemon ID (must be positive)
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Fetch a Pokemon by name
    Name {
        /// Pokemon name (case-insensitive)
        name: String,
    },

    /// List Pokemon
    List {
        /// Items per page (1-1000)
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Items to skip
        #[arg(short, long, allow_negative_numbers = true)]
        offset: Option<i64>,
    },

    /// List the names of the Pokemon of a type
    Type {
        /// Type name, e.g. "fire"
        pokemon_type: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let service = PokemonService::new(Arc::new(PokeApiSource::new(config.upstream_settings())));

    match cli.command {
        Commands::Config => {
            print_config(&config);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Ping => Ok(ping(&service).await),
        Commands::Id { id } => render(service.get_by_id(id).await),
        Commands::Name { name } => render(service.get_by_name(&name).await),
        Commands::List { limit, offset } => render(service.list(limit, offset).await),
        Commands::Type { pokemon_type } => render(service.list_by_type(&pokemon_type).await),
    }
}

/// Prints a successful result as pretty JSON, or the error detail in red.
fn render<T: Serialize>(result: Result<T, AppError>) -> Result<ExitCode> {
    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            let envelope = error.into_envelope();
            eprintln!("{} {}", "✗".red().bold(), envelope.detail.red());

            if let Some(violations) = envelope.errors {
                for path in violations.paths() {
                    let messages = violations.get(path).unwrap_or_default().join(" ");
                    eprintln!("  {} {}", path.yellow(), messages);
                }
            }

            Ok(ExitCode::FAILURE)
        }
    }
}

async fn ping(service: &PokemonService<PokeApiSource>) -> ExitCode {
    let base_url = mask_url_credentials(&service.source().settings().base_url);
    let started = Instant::now();

    match service.ping().await {
        Ok(()) => {
            println!(
                "{} PokeAPI reachable at {} ({} ms)",
                "✓".green().bold(),
                base_url.cyan(),
                started.elapsed().as_millis()
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!(
                "{} {} ({})",
                "✗".red().bold(),
                error.to_string().red(),
                base_url.cyan()
            );
            ExitCode::FAILURE
        }
    }
}

fn print_config(config: &Config) {
    println!("{}", "Configuration".bold().underline());
    println!("  {:<18} {}", "Listen:".bold(), config.listen_addr);
    println!(
        "  {:<18} {}",
        "PokeAPI:".bold(),
        mask_url_credentials(&config.pokeapi_base_url).cyan()
    );
    println!(
        "  {:<18} {}s",
        "Timeout:".bold(),
        config.pokeapi_timeout_seconds
    );
    println!("  {:<18} {}", "User agent:".bold(), config.pokeapi_user_agent);
    println!("  {:<18} {}", "Log level:".bold(), config.log_level);
    println!("  {:<18} {}", "Log format:".bold(), config.log_format);
}

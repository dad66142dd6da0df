use clap::Parser;
use std::process;

use hardtimes::cli::commands::{Cli, Commands};
use hardtimes::cli::{earn, save, shell};
use hardtimes::error::HardtimesError;
use hardtimes::output;
use hardtimes::session::Tab;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_output = cli.json;

    let exit_code = match cli.command {
        None => shell::run(Tab::Earn, json_output).await,
        Some(Commands::Shell { tab }) => match Tab::from_str(&tab) {
            Some(tab) => shell::run(tab, json_output).await,
            None => {
                let e =
                    HardtimesError::validation(format!("Unknown tab '{tab}'. Use earn or save."));
                if json_output {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&output::json::error(&e)).unwrap()
                    );
                } else {
                    eprintln!("Error: {}", e.message);
                }
                1
            }
        },
        Some(Commands::Board) => save::run_board(json_output),
        Some(Commands::Generate {
            skills,
            time,
            constraints,
        }) => earn::run_generate(&skills, &time, &constraints, json_output).await,
    };

    process::exit(exit_code);
}

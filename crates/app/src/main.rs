//! Fitness Gate - Application entry point
//!
//! CLI-based entry point that dispatches to the interactive app or to
//! one-shot commands.

use clap::Parser;

use app_lib::{
    cli::{Cli, Commands},
    commands,
    console::StdConsole,
    AppConfig, AppState,
};
use common::telemetry::init_tracing;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration; the CLI flag overrides the environment
    let mut config = AppConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.auth.storage.data_dir = Some(dir);
    }
    tracing::debug!("Configuration loaded: {:?}", config);

    let state = match AppState::from_config(&config, cli.ephemeral) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    };

    // Execute command
    let mut console = StdConsole::new();
    let result = match cli.command {
        Commands::Run => commands::run(state, console).await.map(|()| true),
        Commands::Register(args) => commands::register(state, args, &mut console).await,
        Commands::Login(args) => commands::login(state, args, &mut console).await,
        Commands::Exercises(args) => commands::exercises(state, args, &mut console).await,
    };

    // Handle errors
    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    }
}

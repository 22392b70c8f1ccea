//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Fitness Gate - register, log in and browse exercises from the terminal
#[derive(Parser, Debug)]
#[command(name = "fitness-gate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the stored user record
    #[arg(long, global = true, env = "FITNESS_GATE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep credentials in memory only (lost on exit)
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive app at the GetStarted screen
    Run,

    /// Register a user, replacing any stored one
    Register(RegisterArgs),

    /// Log in and show the home screen once
    Login(LoginArgs),

    /// Show the home screen for a username without logging in
    Exercises(ExercisesArgs),
}

/// Arguments for the register command
#[derive(Parser, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,

    #[arg(long)]
    pub confirm_password: String,
}

/// Arguments for the login command
#[derive(Parser, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub password: String,
}

/// Arguments for the exercises command
#[derive(Parser, Debug)]
pub struct ExercisesArgs {
    #[arg(long)]
    pub username: String,
}

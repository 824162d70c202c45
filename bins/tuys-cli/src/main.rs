//! TUYS CLI - command-line companion for the TUYS storytelling platform
//!
//! Sign in, browse channels and stories, check the ranking, and manage
//! notifications from a terminal.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::ExitCode;

mod commands;
mod output;

use commands::{channels, notifications, ranking, sign_in, sign_out, sign_up, stories, whoami};

/// Command-line companion for the TUYS storytelling platform
#[derive(Parser)]
#[command(name = "tuys")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password
    SignIn {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Register a new account
    SignUp {
        /// Display name
        #[arg(short, long)]
        username: String,

        /// Avatar image URL
        #[arg(short, long)]
        avatar: String,

        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Sign out and clear the stored session
    SignOut,

    /// Show the signed-in user
    Whoami,

    /// List story channels
    Channels,

    /// List stories
    Stories {
        /// Restrict to a single channel
        #[arg(short, long)]
        channel: Option<i32>,
    },

    /// Show the story ranking
    Ranking,

    /// List notifications
    Notifications {
        /// Mark a notification as read instead of listing
        #[arg(long, value_name = "ID")]
        mark_read: Option<i32>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("tuys=debug,tuys_api_client=debug")
            .init();
    }

    let result = match cli.command {
        Commands::SignIn { email, password } => {
            sign_in::run(&email, &password, &cli.format).await
        }

        Commands::SignUp {
            username,
            avatar,
            email,
            password,
        } => sign_up::run(&username, &avatar, &email, &password).await,

        Commands::SignOut => sign_out::run().await,

        Commands::Whoami => whoami::run(&cli.format).await,

        Commands::Channels => channels::run(&cli.format).await,

        Commands::Stories { channel } => stories::run(channel, &cli.format).await,

        Commands::Ranking => ranking::run(&cli.format).await,

        Commands::Notifications { mark_read } => {
            notifications::run(mark_read, &cli.format).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

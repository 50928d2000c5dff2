//! User admin - command line access to the `APP_USER` store.

use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::UpdateUser;
use user_service_lib::config::UserServiceConfig;
use user_service_lib::AdminAction;

#[derive(Parser)]
#[command(name = "user-admin")]
#[command(about = "Manage user accounts stored in APP_USER")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the user table if it does not exist
    InitSchema,
    /// Register a new user
    Create {
        #[arg(long)]
        username: String,
        /// Precomputed password hash
        #[arg(long, env = "USER_PASSWORD_HASH")]
        password_hash: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: Option<NaiveDate>,
    },
    /// Print a user as JSON
    Show { id: i64 },
    /// Change username, birth date or password hash
    Update {
        id: i64,
        #[arg(long)]
        username: Option<String>,
        #[arg(long, conflicts_with = "clear_birth_date")]
        birth_date: Option<NaiveDate>,
        /// Remove the stored birth date
        #[arg(long)]
        clear_birth_date: bool,
        #[arg(long)]
        password_hash: Option<String>,
    },
    /// Delete a user
    Delete { id: i64 },
}

impl From<Commands> for AdminAction {
    fn from(command: Commands) -> Self {
        match command {
            Commands::InitSchema => AdminAction::InitSchema,
            Commands::Create {
                username,
                password_hash,
                birth_date,
            } => AdminAction::Create {
                username,
                password_hash,
                birth_date,
            },
            Commands::Show { id } => AdminAction::Show { id },
            Commands::Update {
                id,
                username,
                birth_date,
                clear_birth_date,
                password_hash,
            } => AdminAction::Update {
                id,
                changes: UpdateUser {
                    username,
                    birth_date: if clear_birth_date {
                        Some(None)
                    } else {
                        birth_date.map(Some)
                    },
                    password_hash,
                },
            },
            Commands::Delete { id } => AdminAction::Delete { id },
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = UserServiceConfig::from_env();

    match user_service_lib::run_admin(&config, cli.command.into()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error [{}]: {}", err.code(), err.user_message());
            ExitCode::FAILURE
        }
    }
}

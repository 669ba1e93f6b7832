mod navigator;
mod seed;
mod verifier;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use neighbourhood_auth::flow::{LoginFlow, Outcome};
use neighbourhood_core::config::AppConfig;
use neighbourhood_core::lifecycle;
use neighbourhood_core::session::SessionEvent;
use neighbourhood_db::schema::Profile;
use neighbourhood_db::surreal::{StorageMode, SurrealProfileStore};
use neighbourhood_db::ProfileStore;

use crate::navigator::{LogNavigator, LogNotifier};
use crate::seed::seed_if_empty;
use crate::verifier::SeededVerifier;

#[derive(Parser)]
#[command(name = "neighbourhood", about = "Neighbourhood portal — resident login")]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the login flow once and report the destination
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Populate an empty profile store with demo data
    Seed,

    /// Create a profile for a subject
    CreateProfile {
        #[arg(long)]
        subject_id: String,
        #[arg(long)]
        display_name: String,
        #[arg(long)]
        role: Option<String>,
    },

    /// List all profiles
    ListProfiles,

    /// Delete the profile of a subject
    DeleteProfile {
        #[arg(long)]
        subject_id: String,
    },
}

async fn create_store(config: &AppConfig) -> Result<SurrealProfileStore> {
    let mode = match config.database.mode.as_str() {
        "memory" => StorageMode::Memory,
        _ => StorageMode::Persistent(config.database.path.clone()),
    };
    let store = SurrealProfileStore::new(mode).await?;
    store.connect().await?;
    store.init_schema().await?;
    Ok(store)
}

#[tokio::main]
async fn main() -> Result<()> {
    lifecycle::init_tracing();
    tracing::info!("Neighbourhood portal starting up");

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(cli.config.as_deref());

    match cli.command {
        Commands::Login { email, password } => {
            let store = create_store(&config).await?;
            seed_if_empty(&store).await?;

            let flow = LoginFlow::new(
                Arc::new(SeededVerifier::from_config(&config.auth)),
                Arc::new(store),
                Arc::new(LogNavigator),
                Arc::new(LogNotifier),
            );
            flow.set_identifier(&email);
            flow.set_secret(&password);

            match flow.submit().await {
                Outcome::Succeeded => {
                    tracing::info!(event = ?SessionEvent::LoginSucceeded, "login outcome");
                    let state = flow.state();
                    println!("{}", state.success_message.unwrap_or_default());
                }
                Outcome::Failed(reason) => {
                    let event = SessionEvent::LoginFailed {
                        reason: reason.clone(),
                    };
                    tracing::info!(event = ?event, "login outcome");
                    println!("Login failed: {reason}");
                    std::process::exit(1);
                }
                Outcome::InFlight => {
                    // Single sequential submission; cannot happen here.
                    println!("A login attempt is already in progress.");
                }
            }
        }

        Commands::Seed => {
            let store = create_store(&config).await?;
            seed_if_empty(&store).await?;
            let profiles = store.list_profiles().await?;
            println!("({} profiles)", profiles.len());
        }

        Commands::CreateProfile {
            subject_id,
            display_name,
            role,
        } => {
            let store = create_store(&config).await?;
            let profile = Profile::new(subject_id, display_name, role);
            let created = store.create_profile(profile).await?;
            let id = created.id_string().unwrap_or_default();
            println!("{id}");
        }

        Commands::ListProfiles => {
            let store = create_store(&config).await?;
            let profiles = store.list_profiles().await?;
            for p in &profiles {
                println!(
                    "{}\t{}\t{}",
                    p.subject_id,
                    p.display_name,
                    p.role.as_deref().unwrap_or("-")
                );
            }
            println!("({} profiles)", profiles.len());
        }

        Commands::DeleteProfile { subject_id } => {
            let store = create_store(&config).await?;
            store.delete_profile(&subject_id).await?;
            println!("Deleted profile for {subject_id}");
        }
    }

    tracing::info!("Neighbourhood portal shutting down");
    Ok(())
}

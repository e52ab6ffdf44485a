//! Standalone CLI for the detector model lifecycle manager.
//!
//! Reads the declared detector model from a JSON file and drives the
//! lifecycle controller against AWS IoT Events. Each invocation is
//! stateless, so operations on an existing resource adopt it (import)
//! before acting on it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use detector_model_manager_lifecycle::{
    DetectorModel, DetectorModelController, DetectorModelError, IotEventsClient, ObservedModel,
    ReadOutcome,
};

#[derive(Parser)]
#[command(
    name = "detector-model-manager",
    version,
    about = "Manage the lifecycle of an AWS IoT Events detector model from a declarative definition"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the detector model declared in a JSON definition file
    Create {
        /// Path to the declared model (JSON)
        file: PathBuf,
    },
    /// Describe the detector model and print its observed state
    Read {
        /// Name of the detector model
        name: String,
    },
    /// Push the declared definition to the existing detector model
    Update {
        /// Path to the declared model (JSON)
        file: PathBuf,
    },
    /// Delete the detector model; succeeds if it is already absent
    Delete {
        /// Name of the detector model
        name: String,
    },
    /// Adopt an existing remote detector model and print its observed state
    Import {
        /// Name of the detector model
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Create { file } => {
            let model = load_model(&file)?;
            let mut controller = new_controller().await;
            let outcome = controller.create(&model).await?;
            log::info!("created detector model '{}'", outcome.identity);
            if let Some(warning) = &outcome.confirmation_failure {
                log::warn!(
                    "detector model '{}' was created but the confirmation read failed: {warning}",
                    outcome.identity
                );
            }
            if let Some(observed) = &outcome.observed {
                print_observed(observed)?;
            }
        }
        Commands::Read { name } | Commands::Import { name } => {
            let mut controller = new_controller().await;
            let observed = controller.import(&name).await?;
            print_observed(&observed)?;
        }
        Commands::Update { file } => {
            let model = load_model(&file)?;
            let mut controller = new_controller().await;
            controller.import(&model.name).await?;
            match controller.update(&model).await? {
                ReadOutcome::Observed(observed) => print_observed(&observed)?,
                ReadOutcome::Missing => log::warn!(
                    "detector model '{}' went missing right after the update",
                    model.name
                ),
            }
        }
        Commands::Delete { name } => {
            let mut controller = new_controller().await;
            match controller.import(&name).await {
                Ok(_) => {
                    controller.delete().await?;
                    println!("deleted detector model '{name}'");
                }
                Err(DetectorModelError::Import { .. }) => {
                    println!("detector model '{name}' is already absent");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    Ok(())
}

async fn new_controller() -> DetectorModelController<IotEventsClient> {
    DetectorModelController::new(IotEventsClient::from_default_chain().await)
}

fn load_model(path: &Path) -> Result<DetectorModel> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read model file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} does not contain a valid detector model", path.display()))
}

fn print_observed(observed: &ObservedModel) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(observed)?);
    Ok(())
}

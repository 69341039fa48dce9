//! wallet_risk entry point: dataset build, HTTP service and one-off lookups.
use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wallet_risk_intel::api::validators::validate_address;
use wallet_risk_intel::api::RiskApiServer;
use wallet_risk_intel::cli::{Cli, Commands};
use wallet_risk_intel::core::{RiskIntelError, Settings};
use wallet_risk_intel::dataset::{write_snapshot, DatasetBuilder};
use wallet_risk_intel::repository::WalletRepository;
use wallet_risk_intel::service::{WalletService, WalletVerificationUseCase};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&settings) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli.command, settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            match e.downcast_ref::<RiskIntelError>() {
                Some(err) if err.is_recoverable() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

async fn run(command: Commands, settings: Settings) -> Result<()> {
    match command {
        Commands::Build { input, output } => {
            let output = output.unwrap_or_else(|| settings.dataset_path.clone());
            build(&input, &output)
        }
        Commands::Serve { host, port } => {
            info!("Starting {} v{}", settings.app_name, env!("CARGO_PKG_VERSION"));
            RiskApiServer::new(settings, host, port).start().await
        }
        Commands::Lookup { address } => {
            let address = validate_address(&address)
                .map_err(|e| RiskIntelError::InvalidInput(e.message))?;
            let verification = use_case(&settings).verify(address)?;
            println!("{}", serde_json::to_string_pretty(&verification)?);
            Ok(())
        }
        Commands::Metadata => {
            let metadata = use_case(&settings).metadata()?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
            Ok(())
        }
    }
}

fn build(input: &Path, output: &Path) -> Result<()> {
    let dataset = DatasetBuilder::build_from_path(input)?;
    write_snapshot(&dataset, output)?;
    println!(
        "Dataset generated at {} with {} wallets",
        output.display(),
        dataset.metadata.records
    );
    Ok(())
}

fn use_case(settings: &Settings) -> WalletVerificationUseCase {
    let repository = Arc::new(WalletRepository::from_path(settings.dataset_path.clone()));
    WalletVerificationUseCase::new(WalletService::from_settings(repository, settings))
}

/// RUST_LOG wins; otherwise the configured level. Logs go to stderr so
/// command output on stdout stays machine-readable.
fn init_logging(settings: &Settings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},hyper=info,h2=info", settings.log_filter())));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

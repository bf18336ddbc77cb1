// crates/edge/src/cli.rs

use adapt::http::build_app;
use adapt::mql::InMemoryDocumentStore;
use adapt::voucher::VoucherService;
use clap::{builder::ValueHint, Parser, Subcommand};
use std::{path::PathBuf, process::ExitCode, sync::Arc, time::Instant};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::seed::load_seed;
use crate::settings::{load_settings, Overrides};
use crate::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Voucher service CLI
#[tokio::main(flavor = "multi_thread")]
#[tracing::instrument(skip_all)]
pub async fn start() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Start(start) => do_start(start).await,
    };

    result.map_or_else(
        |e| {
            error!("Failed to run voucherd: {}", e);
            ExitCode::FAILURE
        },
        |_| {
            info!("voucherd stopped");
            ExitCode::SUCCESS
        },
    )
}

#[tracing::instrument(skip_all)]
async fn do_start(start: StartCmd) -> Result<()> {
    // layered settings -> defaults, file, environment, command line
    let then = Instant::now();
    let overrides = Overrides {
        host: start.host,
        port: start.port,
        seed: start.seed,
    };
    let settings = load_settings(start.config.as_deref(), &overrides)?;
    info!(
        "Settings loaded in {} milliseconds",
        then.elapsed().as_millis()
    );

    let store = Arc::new(InMemoryDocumentStore::new());
    let service = Arc::new(VoucherService::new(store.clone()));

    if let Some(seed) = &settings.seed {
        let then = Instant::now();
        let count = load_seed(&service, seed).await?;
        info!(
            "Seeded {} vouchers from {} in {} milliseconds",
            count,
            seed.display(),
            then.elapsed().as_millis()
        );
    }

    let then = Instant::now();
    let app = build_app(service, settings.max_concurrency);
    let listener = TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    info!(
        "Listening on {} ({} vouchers) after {} milliseconds",
        listener.local_addr()?,
        store.len(),
        then.elapsed().as_millis()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}

#[derive(Parser, Debug)]
#[command(name = "voucherd", version, about = "Voucher query service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Start(StartCmd),
}

#[derive(Parser, Debug)]
pub struct StartCmd {
    /// TOML settings file (or set VOUCHER_CONFIG)
    #[arg(
        long,
        value_name = "FILE",
        env = "VOUCHER_CONFIG",
        value_hint = ValueHint::FilePath,
        value_parser = file_must_exist
    )]
    pub config: Option<PathBuf>,

    /// Listen address (or set VOUCHER_HOST)
    #[arg(long, env = "VOUCHER_HOST")]
    pub host: Option<String>,

    /// Listen port (or set VOUCHER_PORT)
    #[arg(long, env = "VOUCHER_PORT")]
    pub port: Option<u16>,

    /// JSON array of vouchers stored at startup (or set VOUCHER_SEED)
    #[arg(
        long,
        value_name = "FILE",
        env = "VOUCHER_SEED",
        value_hint = ValueHint::FilePath,
        value_parser = file_must_exist
    )]
    pub seed: Option<PathBuf>,
}

fn file_must_exist(s: &str) -> std::result::Result<PathBuf, String> {
    let p = PathBuf::from(s);
    if !p.exists() {
        return Err(format!("Not found: {}", p.display()));
    }
    if !p.is_file() {
        return Err(format!("Not a file: {}", p.display()));
    }
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_start_flags() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from([
            "voucherd", "start", "--host", "0.0.0.0", "--port", "8081", "--seed", path,
        ])
        .unwrap();

        let Commands::Start(start) = cli.command;
        assert_eq!(start.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(start.port, Some(8081));
        assert_eq!(start.seed.as_deref(), Some(file.path()));
    }

    #[test]
    fn rejects_missing_files_and_bad_ports() {
        assert!(Cli::try_parse_from(["voucherd", "start", "--config", "/no/such/file.toml"]).is_err());
        assert!(Cli::try_parse_from(["voucherd", "start", "--port", "99999"]).is_err());
    }

    #[test]
    fn file_must_exist_rejects_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = file_must_exist(dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.starts_with("Not a file"));
    }
}

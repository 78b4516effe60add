use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hawaii_climate::{ClimateConfig, db, queries, server};

#[derive(Parser)]
#[command(
    name = "hawaii-climate",
    version,
    about = "Read-only JSON API over the Hawaii climate observation dataset"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
        /// Override the configured database path
        #[arg(long)]
        database: Option<PathBuf>,
    },
    /// Validate configuration and database, then exit
    Check {
        /// Override the configured database path
        #[arg(long)]
        database: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = ClimateConfig::load_from_path(cli.config)?;

    match cli.command {
        Commands::Serve { port, database } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(database) = database {
                config.database.path = database;
            }
            init_tracing(&config);

            let pool = open_dataset(&config).await?;
            server::run(&config, pool).await
        }
        Commands::Check { database } => {
            if let Some(database) = database {
                config.database.path = database;
            }
            init_tracing(&config);

            let pool = open_dataset(&config).await?;
            let (stations, measurements) = queries::dataset_counts(&pool).await?;
            println!("Configuration OK: {stations} stations, {measurements} measurements");
            Ok(())
        }
    }
}

/// Opens the pool, verifies the schema and logs the dataset size.
async fn open_dataset(config: &ClimateConfig) -> Result<sqlx::SqlitePool> {
    let pool = db::connect(&config.database).await.with_context(|| {
        format!(
            "Failed to open database at {}",
            config.database.path.display()
        )
    })?;
    db::ensure_schema(&pool).await?;

    let (stations, measurements) = queries::dataset_counts(&pool).await?;
    tracing::info!(stations, measurements, "Dataset loaded");

    Ok(pool)
}

fn init_tracing(config: &ClimateConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

//! Main entry point for the Hyrule catalog API server

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use hyrule_api::{config::ApiConfig, errors::ApiResult, redact_url, start_server};
use hyrule_db::{HyruleDb, HyruleDbConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// hyrule-api: GraphQL API server for the Hyrule catalog
#[derive(Debug, Parser)]
#[command(name = "hyrule-api", about = "GraphQL API server for the Hyrule catalog", version)]
struct Args {
    /// Increase output verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Optional path to a configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Port to listen on, replaces the port of the configured bind address
    #[arg(short = 'p', long = "port", env = "PORT")]
    port: Option<u16>,

    /// Database URL, replaces the configured one
    #[arg(short = 'd', long = "database-url", env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> ApiResult<()> {
    let args = Args::parse();

    // Initialize tracing subscriber. Precedence: RUST_LOG env > -v flag > default info
    let env_filter = if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
        EnvFilter::from_default_env()
    } else {
        match args.verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    fmt().with_env_filter(env_filter).with_target(true).compact().init();

    info!(
        verbosity = args.verbose,
        config = args.config.as_ref().map(|p| p.display().to_string()).as_deref(),
        "hyrule-api starting"
    );

    let config = ApiConfig::resolve(args.config.as_deref(), args.port, args.database_url)?;

    info!("Connecting to database: {}", redact_url(&config.database.url));
    let db_config = HyruleDbConfig {
        max_connections: config.database.max_connections,
        ..Default::default()
    };
    let db = HyruleDb::new(&config.database.url, db_config).await?;
    info!("Database connection established");

    start_server(config, Arc::new(db)).await
}

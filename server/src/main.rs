//! Licensor license server
//!
//! Stores license keys in SQLite and exposes them over a JSON API:
//! 1. Admin login check and license create/list/update/delete
//! 2. Public license verification for client applications
//!
//! Usage:
//!   ADMIN_PASSWORD=... licensor-server --port 5000
//!
//! Every option can also be supplied through the environment.

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use licensor_core::{AdminSecret, DEFAULT_ADMIN_PASSWORD};
use licensor_server::build_router;
use licensor_service::{LicenseService, ServiceConfig, DEFAULT_DATABASE_PATH};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "licensor-server")]
#[command(about = "License administration and verification API")]
struct Args {
    /// Address to bind the HTTP API to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Path to the SQLite database file
    #[arg(short, long, env = "LICENSOR_DB", default_value = DEFAULT_DATABASE_PATH)]
    database: PathBuf,

    /// Admin password checked by /api/login
    #[arg(long, env = "ADMIN_PASSWORD", default_value = DEFAULT_ADMIN_PASSWORD, hide_env_values = true, hide_default_value = true)]
    admin_password: String,

    /// Enable verbose debug logging
    #[arg(short, long, env = "LICENSOR_DEBUG")]
    verbose: bool,
}

impl Args {
    fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            admin_secret: AdminSecret::new(self.admin_password.clone()),
            database_path: self.database.clone(),
            debug: self.verbose,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.service_config();

    let log_level = if config.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("Licensor server starting...");
    if config.admin_secret.is_default() {
        warn!("Using the default admin password; set ADMIN_PASSWORD before exposing this server");
    }

    let service = LicenseService::open(&config).with_context(|| {
        format!("Failed to open license database {}", config.database_path.display())
    })?;
    info!("License database: {}", config.database_path.display());

    let app = build_router(Arc::new(service));
    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", args.host, args.port))?;

    print_banner(&args);

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}

fn print_banner(args: &Args) {
    let hosted = std::env::var_os("RAILWAY_ENVIRONMENT").is_some()
        || std::env::var_os("RENDER").is_some();

    println!("\n========================================");
    println!("  Licensor License Server");
    println!("========================================");
    if hosted {
        println!("  Cloud deployment");
        println!("  Port: {}", args.port);
    } else {
        println!("  Open: http://localhost:{}", args.port);
        println!("  Bind: {}:{}", args.host, args.port);
    }
    println!("\n  Set ADMIN_PASSWORD to change the admin password");
    println!("========================================\n");
}

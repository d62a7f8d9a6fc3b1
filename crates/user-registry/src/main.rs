//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! User Registry main binary
//!
//! This binary serves the user registry REST API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_registry::{
    api::UserRegistryApi, init_user_registry, shutdown_user_registry, UserRegistryConfig,
    USER_REGISTRY_VERSION,
};

#[derive(Parser)]
#[command(name = "user-registry")]
#[command(about = "In-memory user registry REST service")]
#[command(version = USER_REGISTRY_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the user registry server
    Serve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/user-registry.toml")]
        config: PathBuf,

        /// API host (overrides configuration)
        #[arg(long)]
        host: Option<String>,

        /// API port (overrides configuration)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "user-registry.toml")]
        output: PathBuf,
    },

    /// Validate configuration file
    Validate {
        /// Configuration file path
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Show current configuration
    Show {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, host, port } => {
            // Load configuration with fallback to defaults
            let mut config = if config.exists() {
                match UserRegistryConfig::from_file(&config) {
                    Ok(cfg) => {
                        info!("Configuration loaded from: {}", config.display());
                        cfg
                    }
                    Err(e) => {
                        error!(
                            "Failed to load configuration from {}: {}",
                            config.display(),
                            e
                        );
                        std::process::exit(1);
                    }
                }
            } else {
                warn!(
                    "Configuration file not found: {}. Using defaults.",
                    config.display()
                );
                match UserRegistryConfig::load_with_defaults() {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        error!("Failed to load default configuration: {}", e);
                        std::process::exit(1);
                    }
                }
            };

            // Override configuration with CLI arguments
            if let Some(host) = host {
                config.api.host = host;
            }
            if let Some(port) = port {
                config.api.port = port;
            }

            // Validate the final configuration
            if let Err(e) = config.validate() {
                error!("Configuration validation failed:");
                eprintln!("{}", e);
                std::process::exit(1);
            }

            // Initialize the registry and API server
            let registry = init_user_registry(config.clone()).await?;
            let api = UserRegistryApi::new(registry.store(), Arc::new(config.clone()));
            let app = api.create_app();

            // Start server
            let addr = SocketAddr::from_str(&format!("{}:{}", config.api.host, config.api.port))?;
            let listener = tokio::net::TcpListener::bind(addr).await?;

            info!("User Registry server starting on {}", addr);

            axum::serve(listener, app).await?;

            // Shutdown
            shutdown_user_registry(registry).await?;
        }

        Commands::Config { command } => match command {
            ConfigCommands::Generate { output } => {
                std::fs::write(&output, UserRegistryConfig::generate_example())?;
                println!("Example configuration written to: {}", output.display());
            }

            ConfigCommands::Validate { config } => {
                let cfg = UserRegistryConfig::from_file(&config)?;
                match cfg.validate() {
                    Ok(()) => println!("Configuration is valid: {}", config.display()),
                    Err(e) => {
                        eprintln!("{}", e);
                        std::process::exit(1);
                    }
                }
            }

            ConfigCommands::Show { config } => {
                let cfg = match config {
                    Some(path) => UserRegistryConfig::from_file(&path)?,
                    None => UserRegistryConfig::load_with_defaults()?,
                };
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            }
        },
    }

    Ok(())
}

//! Subscription cache server.
mod cache;
mod client_builder;
mod config;
mod errors;
mod log_setup;
mod routes;
mod serde_types;
mod subscription;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::{Context, Result};
use clap::Parser;
use crate::config::{load_config, AppConfig, DEFAULT_CONFIG_PATH};
use log_setup::configure_logging;
use routes::main_service;
use std::{net::SocketAddr, path::PathBuf};
use subscription::Subscription;

#[deny(unused_imports)]
#[deny(unused_variables)]
#[deny(unused_mut)]
#[deny(unsafe_code)]
// Dependencies
#[macro_use]
extern crate log;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Log level. Takes precedence over the SUBCACHE__LOG env variable. Default is INFO.
    #[arg(long, default_value = None)]
    log_level: Option<String>,
    /// Listen socket address. Overrides the configuration file.
    #[arg(short, long)]
    listen: Option<SocketAddr>,
    /// Worker count. Overrides the configuration file.
    #[arg(short, long)]
    workers: Option<usize>,
}

impl Cli {
    /// Listen address and worker count, flags first, then the configuration file.
    fn server_settings(&self, config: &AppConfig) -> (SocketAddr, usize) {
        let listen = self.listen.unwrap_or(config.listen);
        let workers = self
            .workers
            .or(config.workers)
            .unwrap_or_else(num_cpus::get);
        (listen, workers)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    configure_logging(cli.log_level.as_deref()).ok();

    let config = load_config(&cli.config).context("failed to load config")?;

    let (listen, workers) = cli.server_settings(&config);

    let subscription = web::Data::new(
        Subscription::new(&config).context("failed to build upstream client")?,
    );

    info!(
        "Serving {} from {} (cache at {})",
        config.url,
        listen,
        subscription.cache().path().display()
    );

    HttpServer::new(move || {
        let logger = Logger::default();
        App::new()
            .wrap(logger)
            .app_data(subscription.clone())
            .default_service(main_service())
    })
    .bind(listen)
    .with_context(|| format!("failed to bind {listen}"))?
    .workers(workers)
    .run()
    .await
    .context("failed to start server")?;

    Ok(())
}

mod cli;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use snip_core::KeyValueStore;
use snip_gateway::{App, AppState};
use snip_generator::{GeneratorSettings, RandomGenerator};
use snip_redirector::RedirectorService;
use snip_shortener::{AllocatorSettings, ShortenerService};
use snip_storage::{InMemoryStore, RedisStore};
use tokio::net::TcpListener;
use tracing::info;

use crate::cli::{StorageBackendArg, CLI};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    snip_telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        storage_backend = %config.storage,
        code_length = config.code_length,
        max_attempts = config.max_attempts,
        "starting snip gateway"
    );

    let generator = RandomGenerator::new(
        GeneratorSettings::builder()
            .length(config.code_length)
            .build(),
    )?;
    let settings = AllocatorSettings::builder()
        .max_attempts(config.max_attempts)
        .build();

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(
                config.listen_addr,
                config.public_base_url,
                Arc::new(InMemoryStore::new()),
                generator,
                settings,
            )
            .await
        }
        StorageBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .context("redis url is required when storage backend is redis")?;
            let store = RedisStore::connect(&redis_url, config.redis_key_prefix)
                .await
                .context("connecting to redis")?;
            run_server(
                config.listen_addr,
                config.public_base_url,
                store,
                generator,
                settings,
            )
            .await
        }
    }
}

async fn run_server<S: KeyValueStore + Clone>(
    listen_addr: SocketAddr,
    public_base_url: String,
    store: S,
    generator: RandomGenerator,
    settings: AllocatorSettings,
) -> anyhow::Result<()> {
    let allocator = ShortenerService::with_settings(store.clone(), generator, settings);
    let resolver = RedirectorService::new(store);
    let state = AppState::new(Arc::new(allocator), Arc::new(resolver), public_base_url);

    let listener = TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("binding {listen_addr}"))?;
    info!(listen_addr = %listener.local_addr()?, "serving http");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received, draining connections");
}

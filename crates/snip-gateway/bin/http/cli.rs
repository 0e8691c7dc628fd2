use clap::{Parser, ValueEnum};
use snip_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "SNIP_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "SNIP_PUBLIC_BASE_URL";
pub const STORAGE_BACKEND_ENV: &str = "SNIP_STORAGE_BACKEND";
pub const REDIS_URL_ENV: &str = "SNIP_REDIS_URL";
pub const REDIS_KEY_PREFIX_ENV: &str = "SNIP_REDIS_KEY_PREFIX";
pub const CODE_LENGTH_ENV: &str = "SNIP_CODE_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "SNIP_MAX_ATTEMPTS";
pub const LOG_FORMAT_ENV: &str = "SNIP_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "redis")]
    Redis,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "snip-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Origin the redirects are served from, used to build short URLs.
    #[arg(long, env = PUBLIC_BASE_URL_ENV, default_value = DEFAULT_PUBLIC_BASE_URL)]
    pub public_base_url: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = REDIS_URL_ENV, required_if_eq("storage", "redis"))]
    pub redis_url: Option<String>,

    #[arg(
        long,
        env = REDIS_KEY_PREFIX_ENV,
        default_value = snip_storage::redis::DEFAULT_KEY_PREFIX
    )]
    pub redis_key_prefix: String,

    #[arg(
        long,
        env = CODE_LENGTH_ENV,
        default_value_t = snip_generator::random::DEFAULT_LENGTH
    )]
    pub code_length: usize,

    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value_t = snip_shortener::service::DEFAULT_MAX_ATTEMPTS
    )]
    pub max_attempts: u32,

    #[arg(long, env = LOG_FORMAT_ENV, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

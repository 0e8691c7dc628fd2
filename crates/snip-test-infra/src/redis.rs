use crate::error::Result;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage};

const REDIS_PORT: u16 = 6379;

/// A single throwaway Redis server running in a container.
///
/// The container is stopped when the value is dropped.
pub struct RedisServer {
    container: ContainerAsync<GenericImage>,
}

impl RedisServer {
    /// Starts a Redis container and waits until it accepts connections.
    pub async fn start() -> Result<Self> {
        let container = GenericImage::new("redis", "8.6.0")
            .with_exposed_port(REDIS_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Ready to accept connections"))
            .start()
            .await?;
        Ok(Self { container })
    }

    pub async fn host(&self) -> Result<String> {
        let host = self.container.get_host().await?.to_string();

        Ok(match host.as_str() {
            "localhost" => String::from("127.0.0.1"),
            _ => host,
        })
    }

    pub async fn port(&self) -> Result<u16> {
        Ok(self.container.get_host_port_ipv4(REDIS_PORT).await?)
    }

    /// Returns a `redis://host:port` url for the running server.
    pub async fn url(&self) -> Result<String> {
        Ok(format!("redis://{}:{}", self.host().await?, self.port().await?))
    }
}

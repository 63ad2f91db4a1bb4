use business::domain::errors::StoreError;

use super::{cli::StartArgs, server_config::ServerConfig, store_config::StoreConfig};

/// Configuration resolved once at startup and never changed afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_args(args: StartArgs) -> Result<Self, StoreError> {
        Ok(Self {
            server: ServerConfig {
                ip: args.hostname,
                port: args.port,
            },
            store: StoreConfig::resolve(args.store, args.redis, args.database_url)?,
        })
    }
}

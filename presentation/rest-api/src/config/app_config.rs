use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// Everything the HTTP layer needs besides the database pool.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let server = ServerConfig::from_env();
        tracing::debug!("Server config: {:?}", server);

        Self {
            server,
            cors: cors_config::init_cors(),
        }
    }
}

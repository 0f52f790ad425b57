use serde::Deserialize;
use crate::config::env::{self, EnvKey};

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            database_url: env::get(EnvKey::DatabaseUrl)?,
            db_max_connections: env::get_parsed(EnvKey::DbMaxConnections, 20),
            db_min_connections: env::get_parsed(EnvKey::DbMinConnections, 5),
            run_migrations: env::get_parsed(EnvKey::RunMigrations, true),
        })
    }
}

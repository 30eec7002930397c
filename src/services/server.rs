use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::database::{self, SqliteSource};
use crate::services::analysis::Analyzer;

pub struct ServerService {
    port: u16,
    db_path: String,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, db_path: String, config: AppConfig) -> Self {
        Self { port, db_path, config }
    }

    pub async fn run(&self) -> Result<()> {
        let pool = database::create_pool(&self.db_path)?;
        let analyzer = Analyzer::new(SqliteSource::new(pool), self.config.clone());
        let state = Arc::new(AppState { analyzer });

        let app = create_router(state)
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Serving statistics from {} on {}", self.db_path, addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

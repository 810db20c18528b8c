use anyhow::Result;
use axum::http::{header, HeaderValue};
use log::info;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::seed;
use crate::store::ReviewStore;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let raw_reviews = seed::load_seed_reviews()?;
        let store = ReviewStore::new(raw_reviews);
        info!("Seeded review store with {} reviews", store.len());

        let state = Arc::new(AppState {
            store: Mutex::new(store),
            config: self.config.clone(),
        });

        let origins: Vec<HeaderValue> = self
            .config
            .server
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        // The dashboard refetches right after a toggle, so responses must
        // never come out of a cache.
        let app = create_router(state)
            .layer(
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(SetResponseHeaderLayer::overriding(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-store, no-cache, must-revalidate, private"),
            ));

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

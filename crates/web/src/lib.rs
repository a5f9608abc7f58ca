pub use crate::common::RouteResult;

use std::{env, sync::Arc};

use axum::{extract::FromRef, routing::get_service, Router};
use preparedness::Storage;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};

pub mod api;
pub mod common;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Clone, FromRef)]
pub struct WebState {
    pub storage: Arc<dyn Storage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub bind_address: String,
}

impl WebConfig {
    /// Reads `BIND_ADDRESS`, falling back to `0.0.0.0:8080`.
    pub fn from_env() -> Self {
        let bind_address = env::var("BIND_ADDRESS")
            .ok()
            .filter(|address| !address.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_owned());
        Self { bind_address }
    }
}

pub fn router(state: WebState) -> Router {
    Router::new()
        .nest_service("/api", api::routes(state))
        .fallback_service(static_content_router())
}

pub async fn start_web_server(config: WebConfig, state: WebState) -> std::io::Result<()> {
    let listener = TcpListener::bind(&config.bind_address).await?;
    log::info!("listening on {}.", config.bind_address);
    axum::serve(listener, router(state).into_make_service()).await?;

    Ok(())
}

/// Serves the built client. Unknown paths get its index page so that client
/// side routes survive a reload.
fn static_content_router() -> Router {
    Router::new().nest_service(
        "/",
        get_service(
            ServeDir::new("./resources/www/")
                .not_found_service(ServeFile::new("./resources/www/index.html")),
        ),
    )
}

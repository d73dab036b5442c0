mod api_doc;
mod config;
mod handlers;
mod models;
mod routes;

use anyhow::Result;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use handlers::{health_handler, search_handler, user_handler};

fn build_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::USER_ITEM, get(user_handler))
        .route(routes::SEARCH, get(search_handler))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("vuln-http-fixture starting");

    let config = Config::from_env()?;
    config.log_startup();

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, build_router()).await?;

    Ok(())
}

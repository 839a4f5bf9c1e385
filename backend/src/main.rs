use dotenvy::dotenv;
use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;
use tokio::net::TcpListener;

mod error;
mod handlers {
    pub mod contact_handlers;
    pub mod contact_dtos;
}
mod api {
    pub mod email_relay;
}
mod config {
    pub mod app_config;
}
mod utils {
    pub mod validation;
}

use api::email_relay::{Mailer, ResendMailer};
use config::app_config::Config;
use error::AppError;
use handlers::contact_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    pub config: Config,
    pub mailer: Arc<dyn Mailer>,
}

fn cors_layer(frontend_origin: Option<HeaderValue>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_TYPE]);

    match frontend_origin {
        Some(origin) => cors.allow_origin(origin),
        None => cors.allow_origin(Any),
    }
}

async fn api_not_found() -> AppError {
    AppError::NotFound
}

/// Builds the full router: the contact relay, a health probe, and the built
/// frontend plus static assets (résumé, profile image) with an SPA fallback.
pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();
    let spa = ServeDir::new(&static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    let api = Router::new()
        .route("/health", get(health_check))
        .route("/contact", post(contact_handlers::submit_contact))
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api)
        .fallback_service(spa)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(state.config.frontend_origin.clone()))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    let _sentry_guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    let mailer: Arc<dyn Mailer> = Arc::new(ResendMailer::new(&config.resend_api_key));
    let bind_addr = config.bind_addr;
    tracing::info!(
        "Serving static files from {} and relaying contact mail to {}",
        config.static_dir.display(),
        config.operator_email
    );

    let state = Arc::new(AppState { config, mailer });
    let app = app(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Listening on {}", bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

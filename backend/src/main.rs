use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod error;
mod config {
    pub mod app_config;
}
mod handlers {
    pub mod contact_handlers;
    pub mod content_handlers;
}
mod api {
    pub mod notifier;
    pub mod resend_mail;
}
mod utils {
    pub mod rate_limit;
}

use config::app_config::AppConfig;
use api::notifier::{ContactNotifier, LogNotifier};
use api::resend_mail::ResendNotifier;
use handlers::contact_handlers;
use handlers::content_handlers;
use utils::rate_limit::ContactRateLimiter;

const RATE_LIMIT_SWEEP: Duration = Duration::from_secs(60);

pub struct AppState {
    config: AppConfig,
    notifier: Arc<dyn ContactNotifier>,
    contact_limiter: ContactRateLimiter,
    http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig, notifier: Arc<dyn ContactNotifier>) -> Self {
        let contact_limiter = ContactRateLimiter::new(config.contact_rate_per_minute);
        Self {
            config,
            notifier,
            contact_limiter,
            http: reqwest::Client::new(),
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}

/// Builds the full router: JSON API under `/api`, the built SPA for everything else.
pub fn app(state: Arc<AppState>) -> Router {
    let dist = state.config.frontend_dist.clone();
    let spa = ServeDir::new(&dist).fallback(ServeFile::new(dist.join("index.html")));

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .route("/api/posts", get(content_handlers::list_posts))
        .fallback_service(spa)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

fn build_notifier(config: &AppConfig) -> Arc<dyn ContactNotifier> {
    match &config.resend_api_key {
        Some(key) => {
            tracing::info!(to = %config.contact_to, "Contact submissions will be emailed via Resend");
            Arc::new(ResendNotifier::new(key, &config.contact_from, &config.contact_to))
        }
        None => {
            tracing::warn!("RESEND_API_KEY not set, contact submissions will only be logged");
            Arc::new(LogNotifier)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    let notifier = build_notifier(&config);
    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config, notifier));

    // Forget limiter entries for clients that have gone quiet.
    let sweep_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(RATE_LIMIT_SWEEP);
        loop {
            interval.tick().await;
            sweep_state.contact_limiter.sweep();
        }
    });

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "kaycore backend listening");
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_answers_ok() {
        let state = Arc::new(AppState::new(AppConfig::for_tests(), Arc::new(LogNotifier)));
        let response = app(state)
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");
    }

    #[test]
    fn limiter_keys_are_swept_within_the_quota_window() {
        assert!(RATE_LIMIT_SWEEP <= Duration::from_secs(60));
    }
}

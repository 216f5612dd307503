use std::sync::Arc;
use std::time::Duration;
use axum::{Json, extract::State};
use kaycore_common::BlogPost;

use crate::error::ApiError;
use crate::AppState;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

/// Relays blog posts from the configured content source. The frontend falls
/// back to its bundled posts on any non-2xx answer.
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let Some(url) = state.config.content_source_url.as_deref() else {
        return Err(ApiError::NotConfigured);
    };

    let response = state
        .http
        .get(url)
        .timeout(UPSTREAM_TIMEOUT)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| {
            tracing::warn!(error = %e, "Content source request failed");
            ApiError::Upstream(e.to_string())
        })?;

    let posts = response.json::<Vec<BlogPost>>().await.map_err(|e| {
        tracing::warn!(error = %e, "Content source returned an unexpected shape");
        ApiError::Upstream(e.to_string())
    })?;

    tracing::debug!(count = posts.len(), "Relayed posts from content source");
    Ok(Json(posts))
}

#[cfg(test)]
mod tests {
    use crate::api::notifier::LogNotifier;
    use crate::config::app_config::AppConfig;
    use crate::{app, AppState};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn posts_without_source_is_not_found() {
        let state = Arc::new(AppState::new(AppConfig::for_tests(), Arc::new(LogNotifier)));
        let response = app(state)
            .oneshot(Request::builder().uri("/api/posts").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn posts_are_relayed_from_source() {
        let upstream = axum::Router::new().route(
            "/posts.json",
            axum::routing::get(|| async {
                axum::Json(serde_json::json!([{
                    "id": 1,
                    "title": "Zero Trust Guide",
                    "slug": "zero-trust-guide",
                    "excerpt": "Never trust, always verify",
                    "date": "2025-01-10",
                    "author": "Kaycore Team",
                    "category": "Cybersecurity",
                    "readTime": "5 min read",
                    "image": "/assets/blog/zero-trust.webp"
                }]))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, upstream).await.unwrap();
        });

        let mut config = AppConfig::for_tests();
        config.content_source_url = Some(format!("http://{addr}/posts.json"));
        let state = Arc::new(AppState::new(config, Arc::new(LogNotifier)));
        let response = app(state)
            .oneshot(Request::builder().uri("/api/posts").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let posts: Vec<kaycore_common::BlogPost> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "zero-trust-guide");
    }

    #[tokio::test]
    async fn unreachable_source_is_bad_gateway() {
        let mut config = AppConfig::for_tests();
        // Port 9 (discard) on loopback refuses connections in test environments.
        config.content_source_url = Some("http://127.0.0.1:9/posts.json".to_string());
        let state = Arc::new(AppState::new(config, Arc::new(LogNotifier)));
        let response = app(state)
            .oneshot(Request::builder().uri("/api/posts").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}

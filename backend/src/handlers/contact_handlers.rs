use std::sync::Arc;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use kaycore_common::ContactRequest;
use serde::Serialize;

use crate::api::notifier::ContactSubmission;
use crate::error::ApiError;
use crate::utils::rate_limit::client_key;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: String,
    pub reference: String,
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let client = client_key(&headers);
    if !state.contact_limiter.check(&client) {
        tracing::warn!(%client, "Contact form rate limit hit");
        return Err(ApiError::RateLimited);
    }

    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(%client, error = %rejection.body_text(), "Unreadable contact submission");
        ApiError::MalformedBody(rejection.body_text())
    })?;

    let request = request.trimmed();
    if let Err(fields) = request.validate() {
        tracing::debug!(%client, invalid = fields.len(), "Rejected contact submission");
        return Err(ApiError::Validation(fields));
    }

    let submission = ContactSubmission::new(request);
    if let Err(e) = state.notifier.deliver(&submission).await {
        tracing::error!(id = %submission.id, error = %e, "Failed to deliver contact submission");
        return Err(e.into());
    }

    Ok(Json(ContactResponse {
        message: "Thanks! We'll be in touch within one business day.".to_string(),
        reference: submission.id.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::notifier::{MockContactNotifier, NotifyError};
    use crate::config::app_config::AppConfig;
    use crate::{app, AppState};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use nonzero_ext::nonzero;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router_with(notifier: MockContactNotifier, config: AppConfig) -> axum::Router {
        app(Arc::new(AppState::new(config, Arc::new(notifier))))
    }

    fn post_contact(body: Value, client: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("content-type", "application/json")
            .header("x-forwarded-for", client)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn valid_body() -> Value {
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "company": "Analytical Engines",
            "useCase": "Data Engineering",
            "situation": "Have a defined project",
            "timeline": "1-3 months",
            "message": "We need a pipeline."
        })
    }

    #[tokio::test]
    async fn invalid_submission_returns_field_errors_without_delivery() {
        let mut notifier = MockContactNotifier::new();
        notifier.expect_deliver().never();
        let router = router_with(notifier, AppConfig::for_tests());

        let response = router
            .oneshot(post_contact(json!({"name": "", "email": "nope"}), "203.0.113.1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["fields"]["name"], "Name is required");
        assert_eq!(body["fields"]["email"], "Please enter a valid email address");
        assert_eq!(body["fields"].as_object().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn valid_submission_is_delivered_once() {
        let mut notifier = MockContactNotifier::new();
        notifier
            .expect_deliver()
            .withf(|s| s.request.name == "Ada Lovelace" && s.request.use_case == "Data Engineering")
            .times(1)
            .returning(|_| Ok(()));
        let router = router_with(notifier, AppConfig::for_tests());

        let response = router.oneshot(post_contact(valid_body(), "203.0.113.2")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["reference"].as_str().is_some_and(|r| !r.is_empty()));
    }

    #[tokio::test]
    async fn fields_are_trimmed_before_delivery() {
        let mut notifier = MockContactNotifier::new();
        notifier
            .expect_deliver()
            .withf(|s| s.request.name == "Ada" && s.request.email == "ada@example.com")
            .times(1)
            .returning(|_| Ok(()));
        let router = router_with(notifier, AppConfig::for_tests());

        let body = json!({"name": "  Ada ", "email": " ada@example.com  "});
        let response = router.oneshot(post_contact(body, "203.0.113.3")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn delivery_failure_maps_to_bad_gateway() {
        let mut notifier = MockContactNotifier::new();
        notifier
            .expect_deliver()
            .returning(|_| Err(NotifyError::Email("smtp down".into())));
        let router = router_with(notifier, AppConfig::for_tests());

        let response = router.oneshot(post_contact(valid_body(), "203.0.113.4")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("try again"));
    }

    fn post_raw(body: &'static str, client: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("content-type", "application/json")
            .header("x-forwarded-for", client)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn unreadable_bodies_get_a_json_error() {
        let mut notifier = MockContactNotifier::new();
        notifier.expect_deliver().never();
        let router = router_with(notifier, AppConfig::for_tests());

        for body in [r#"{"name": 5, "email": "a@b.co"}"#, "not json"] {
            let response = router.clone().oneshot(post_raw(body, "203.0.113.5")).await.unwrap();

            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(
                response.headers().get("content-type").unwrap(),
                "application/json"
            );
            let body = json_body(response).await;
            assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
            assert!(body.get("fields").is_none());
        }
    }

    #[tokio::test]
    async fn unreadable_bodies_count_against_the_rate_limit() {
        let mut notifier = MockContactNotifier::new();
        notifier.expect_deliver().never();
        let mut config = AppConfig::for_tests();
        config.contact_rate_per_minute = nonzero!(2u32);
        let router = router_with(notifier, config);

        for _ in 0..2 {
            let response = router.clone().oneshot(post_raw("not json", "198.51.100.20")).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }

        let response = router.oneshot(post_contact(valid_body(), "198.51.100.20")).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn sixth_request_in_a_minute_is_rate_limited() {
        let mut notifier = MockContactNotifier::new();
        notifier.expect_deliver().times(6).returning(|_| Ok(()));
        let mut config = AppConfig::for_tests();
        config.contact_rate_per_minute = nonzero!(5u32);
        let router = router_with(notifier, config);

        for _ in 0..5 {
            let response = router
                .clone()
                .oneshot(post_contact(valid_body(), "198.51.100.9"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = router
            .clone()
            .oneshot(post_contact(valid_body(), "198.51.100.9"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        // A different client still gets through.
        let response = router
            .oneshot(post_contact(valid_body(), "198.51.100.10"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

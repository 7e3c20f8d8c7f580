pub mod health;
pub mod recommend;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health::health_handler))
        .route("/api/v1/recommend", post(recommend::handle_recommend))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::corpus::Corpus;
    use crate::models::club::ClubRecord;
    use crate::recommender::{KeywordMatchStrategy, RecommenderContext};

    fn test_state() -> AppState {
        let corpus: Corpus = [
            ("1", "Robotics Club", "Robotics", "We build cool robots."),
            ("2", "Art Club", "Art", "Painting and sculpting."),
        ]
        .into_iter()
        .map(|(id, name, short, summary)| ClubRecord {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            short_name: Some(short.to_string()),
            summary: Some(summary.to_string()),
            ..Default::default()
        })
        .collect();

        AppState {
            recommender: Arc::new(RecommenderContext::new(Box::new(
                KeywordMatchStrategy::new(corpus),
            ))),
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::post("/api/v1/recommend")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_ok() {
        let request = Request::get("/api/v1/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn test_recommend_returns_projected_clubs() {
        let (status, body) = send(post_json(r#"{"interests": "engineering, robotics"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "recommendations": [
                    { "name": "Robotics Club", "shortName": "Robotics", "summary": "We build cool robots." }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_recommend_empty_interests_returns_empty_list() {
        let (status, body) = send(post_json(r#"{"interests": ""}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "recommendations": [] }));
    }

    #[tokio::test]
    async fn test_recommend_requires_interests() {
        let (status, body) = send(post_json("{}")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_recommend_rejects_malformed_json() {
        let (status, body) = send(post_json("{ nope")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_recommend_requires_json_content_type() {
        let request = Request::post("/api/v1/recommend")
            .body(Body::from(r#"{"interests": "art"}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}

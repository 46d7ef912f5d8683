//! Tweet handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tunefeed_core::{NewTweet, Tweet};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Tweet>>, ApiError> {
    Ok(Json(state.tweets.list_all().await?))
}

/// A found tweet is answered with 201, matching the established contract of
/// this route.
pub async fn get(
    State(state): State<AppState>,
    Path(timeline): Path<String>,
) -> Result<(StatusCode, Json<Tweet>), ApiError> {
    match state.tweets.get_by_timeline(&timeline).await? {
        Some(tweet) => Ok((StatusCode::CREATED, Json(tweet))),
        None => Err(ApiError::NotFound("tweet not found")),
    }
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewTweet>, JsonRejection>,
) -> Result<(StatusCode, Json<Tweet>), ApiError> {
    let Json(new_tweet) = payload?;
    let tweet = state.tweets.create(new_tweet).await?;
    Ok((StatusCode::CREATED, Json(tweet)))
}

#[cfg(test)]
mod tests {
    use crate::handlers::testing::{
        app, app_with_store, send, Failure, FailingTweetStore, SlowTweetStore,
    };
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_create_generates_id() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/tweets",
            Some(r#"{"timeline":"me","text":"hello world"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["timeline"], "me");
        assert_eq!(body["text"], "hello world");

        let id = body["id"].as_str().unwrap();
        let uuid = uuid::Uuid::parse_str(id).unwrap();
        assert_eq!(uuid.get_version_num(), 1);
    }

    #[tokio::test]
    async fn test_client_id_is_replaced() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/tweets",
            Some(r#"{"id":"mine","timeline":"me","text":"hi"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_ne!(body["id"], "mine");
    }

    #[tokio::test]
    async fn test_list_includes_created() {
        let app = app();

        let (status, body) = send(&app, Method::GET, "/tweets", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let mut created = Vec::new();
        for text in ["one", "two", "three"] {
            let req = json!({ "timeline": "me", "text": text }).to_string();
            let (_, body) = send(&app, Method::POST, "/tweets", Some(&req)).await;
            created.push(body);
        }

        let (status, body) = send(&app, Method::GET, "/tweets", None).await;
        assert_eq!(status, StatusCode::OK);
        let listed = body.as_array().unwrap();
        assert!(listed.len() >= 3);
        for tweet in &created {
            assert!(listed.contains(tweet));
        }
    }

    #[tokio::test]
    async fn test_get_by_timeline() {
        let app = app();
        let (_, created) = send(
            &app,
            Method::POST,
            "/tweets",
            Some(r#"{"timeline":"jazz","text":"Blue Train is out"}"#),
        )
        .await;

        let (status, body) = send(&app, Method::GET, "/tweets/jazz", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, created);
    }

    #[tokio::test]
    async fn test_unknown_timeline_is_404() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/tweets/nobody", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "tweet not found" }));
    }

    #[tokio::test]
    async fn test_invalid_bodies_are_400() {
        let app = app();

        let (status, body) = send(&app, Method::POST, "/tweets", Some(r#"{"text":1}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());

        let (status, body) = send(
            &app,
            Method::POST,
            "/tweets",
            Some(r#"{"timeline":"","text":"nowhere"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid input: timeline must not be empty");
    }

    async fn assert_storage_failure(failure: Failure, expected: StatusCode) {
        let app = app_with_store(Arc::new(FailingTweetStore(failure)), Duration::from_secs(5));

        let requests = [
            (Method::GET, "/tweets", None),
            (Method::GET, "/tweets/me", None),
            (
                Method::POST,
                "/tweets",
                Some(r#"{"timeline":"me","text":"hello"}"#),
            ),
        ];
        for (method, uri, body) in requests {
            let (status, body) = send(&app, method.clone(), uri, body).await;
            assert_eq!(status, expected, "{} {} with {:?}", method, uri, failure);
            assert!(body["message"].is_string(), "{} {}: {}", method, uri, body);
        }
    }

    #[tokio::test]
    async fn test_unavailable_storage_is_503() {
        assert_storage_failure(Failure::Unavailable, StatusCode::SERVICE_UNAVAILABLE).await;
    }

    #[tokio::test]
    async fn test_query_error_is_500() {
        assert_storage_failure(Failure::Query, StatusCode::INTERNAL_SERVER_ERROR).await;
    }

    #[tokio::test]
    async fn test_decode_error_is_500() {
        assert_storage_failure(Failure::Decode, StatusCode::INTERNAL_SERVER_ERROR).await;
    }

    #[tokio::test]
    async fn test_slow_storage_times_out_with_message() {
        let store = SlowTweetStore(Duration::from_secs(5));
        let app = app_with_store(Arc::new(store), Duration::from_millis(50));

        let (status, body) = send(&app, Method::GET, "/tweets", None).await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body, json!({ "message": "request timed out" }));
    }
}

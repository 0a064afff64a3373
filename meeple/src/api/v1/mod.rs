pub mod dto;
pub mod handlers;
pub mod openapi;
pub mod response;
pub mod router;

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::api::routes::create_router;
    use crate::api::state::AppState;
    use crate::config::Config;

    async fn test_state() -> AppState {
        let config = Config::in_memory();

        let raw_db = crate::db::Database::new(&config.database).await.unwrap();
        let db_backend = crate::db::LibSqlBackend::new(raw_db);
        let db: std::sync::Arc<dyn crate::db::DatabaseBackend> = std::sync::Arc::new(db_backend);

        AppState::new(config, db)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_database_ok() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["database"]["status"], "ok");
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn openapi_json_is_valid() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let version = json["openapi"]
            .as_str()
            .expect("openapi field should be a string");
        assert!(
            version.starts_with("3"),
            "OpenAPI version should start with 3, got: {version}"
        );
        assert!(json["paths"]
            .get("/api/v1/users/{userId}/compatibility")
            .is_some());
    }

    #[tokio::test]
    async fn create_game_returns_201() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(post_json(
                "/api/v1/games",
                r#"{"name":"Azul","minPlayers":2,"maxPlayers":4}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["data"]["name"], "Azul");
        assert!(json["data"]["gameId"].is_string());
    }

    #[tokio::test]
    async fn create_game_rejects_inverted_player_range() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(post_json(
                "/api/v1/games",
                r#"{"name":"Azul","minPlayers":5,"maxPlayers":2}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
    }

    #[tokio::test]
    async fn missing_field_renders_error_envelope() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(post_json(
                "/api/v1/users/alice/collection:toggle",
                r#"{"flag":"owned"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json.get("data").is_none());
        assert_eq!(json["error"]["code"], "invalid_request");
        assert_eq!(json["error"]["message"], "Missing required field: gameId");
    }

    #[tokio::test]
    async fn toggle_unknown_game_is_not_found() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(post_json(
                "/api/v1/users/alice/collection:toggle",
                r#"{"gameId":"nope","flag":"favorite"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn list_games_rejects_bad_cursor() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/games?cursor=abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn compatibility_requires_viewer() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/users/alice/compatibility")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("viewerId"));
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn non_numeric_limit_renders_error_envelope() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/games?limit=abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid query string"));
    }

    #[tokio::test]
    async fn compatibility_unavailable_for_empty_viewer() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/users/alice/compatibility?viewerId=bob")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["available"], false);
        assert_eq!(json["data"]["ownerId"], "alice");
        assert_eq!(json["data"]["viewerId"], "bob");
        assert!(json["data"].get("overall").is_none());
    }
}

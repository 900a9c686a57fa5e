use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::passwords;
use super::state::AppState;
use super::tags;

/// Routes under `/api`
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        // Generation
        .route("/passwords/generate", get(passwords::generate_password))
        .route(
            "/passwords/generate-bulk",
            post(passwords::generate_passwords_bulk),
        )
        // Password records
        .route("/passwords/by-tag", get(passwords::list_passwords_by_tag))
        .route(
            "/passwords",
            get(passwords::list_passwords).post(passwords::create_password),
        )
        .route(
            "/passwords/{id}",
            get(passwords::get_password)
                .put(passwords::update_password)
                .delete(passwords::delete_password),
        )
        // Tags
        .route("/tags", get(tags::list_tags).post(tags::create_tag))
        .route(
            "/tags/{id}",
            get(tags::get_tag)
                .put(tags::update_tag)
                .delete(tags::delete_tag),
        )
}

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/api", create_api_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::CacheSettings;
    use axum::body::{to_bytes, Body};
    use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(crate::create_in_memory_app_state(&CacheSettings::default()))
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_probes() {
        let app = app();

        assert_eq!(send(&app, get("/health")).await.0, StatusCode::OK);
        assert_eq!(send(&app, get("/live")).await.0, StatusCode::OK);

        let (status, body) = send(&app, get("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("password_service"));
    }

    #[tokio::test]
    async fn test_generate_returns_plain_text() {
        let app = app();

        let response = app
            .clone()
            .oneshot(get("/api/passwords/generate?length=8&complexity=1&owner=user1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        let password = body.strip_prefix("✅ Пароль для user1: ").unwrap();

        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_digit()));

        // Same parameters hit the generation cache
        let (_, again) = send(
            &app,
            get("/api/passwords/generate?length=8&complexity=1&owner=user1"),
        )
        .await;
        assert_eq!(again, body);
    }

    #[tokio::test]
    async fn test_generate_invalid_parameters() {
        let app = app();

        let (status, body) = send(
            &app,
            get("/api/passwords/generate?length=31&complexity=2&owner=user1"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Длина пароля должна быть от 4 до 30 символов.");

        let (status, body) = send(
            &app,
            get("/api/passwords/generate?length=8&complexity=0&owner=user1"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Уровень сложности должен быть от 1 до 3.");
    }

    #[tokio::test]
    async fn test_generate_bulk() {
        let app = app();

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/api/passwords/generate-bulk",
                json!([
                    {"length": 8, "complexity": 2, "owner": "u1"},
                    null,
                    {"length": 10, "complexity": 3, "owner": "u2"}
                ]),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let passwords: Vec<String> = serde_json::from_str(&body).unwrap();
        assert_eq!(passwords.len(), 2);
        assert_eq!(passwords[0].len(), 8);
        assert_eq!(passwords[1].len(), 10);

        let (status, body) = send(
            &app,
            json_request(Method::POST, "/api/passwords/generate-bulk", Value::Null),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn test_password_lifecycle() {
        let app = app();

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/api/passwords",
                json!({"password": "pass1", "owner": "user1", "tags": [{"name": "work"}]}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let created: Value = serde_json::from_str(&body).unwrap();
        let id = created["id"].as_i64().unwrap();
        assert_eq!(created["owner"], "user1");
        assert_ne!(created["password"], "pass1");

        let (status, body) = send(&app, get("/api/passwords/by-tag?tagName=work")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Vec<Value>>(&body).unwrap().len(), 1);

        let (status, _) = send(
            &app,
            json_request(
                Method::PUT,
                &format!("/api/passwords/{}", id),
                json!({"password": "updatedPass", "owner": "user1"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let delete = Request::builder()
            .method(Method::DELETE)
            .uri(format!("/api/passwords/{}", id))
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(&app, delete).await.0, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, get(&format!("/api/passwords/{}", id))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, body) = send(&app, get("/api/passwords")).await;
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn test_update_missing_password() {
        let app = app();

        let (status, body) = send(
            &app,
            json_request(
                Method::PUT,
                "/api/passwords/99",
                json!({"password": "p", "owner": "user1"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Password not found");
    }

    #[tokio::test]
    async fn test_create_password_validation() {
        let app = app();

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/api/passwords",
                json!({"password": "", "owner": "user1"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(error["error"]["type"], "invalid_request_error");
        assert_eq!(error["error"]["param"], "password");
    }

    #[tokio::test]
    async fn test_tag_lifecycle() {
        let app = app();

        let (status, body) = send(
            &app,
            json_request(Method::POST, "/api/tags", json!({"name": "work"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = serde_json::from_str::<Value>(&body).unwrap()["id"]
            .as_i64()
            .unwrap();

        let (_, body) = send(&app, get("/api/tags")).await;
        assert_eq!(serde_json::from_str::<Vec<Value>>(&body).unwrap().len(), 1);

        let (status, body) = send(
            &app,
            json_request(
                Method::PUT,
                &format!("/api/tags/{}", id),
                json!({"name": "office"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("office"));

        let (_, body) = send(&app, get(&format!("/api/tags/{}", id))).await;
        assert!(body.contains("office"));

        let delete = Request::builder()
            .method(Method::DELETE)
            .uri(format!("/api/tags/{}", id))
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(&app, delete).await.0, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, get(&format!("/api/tags/{}", id))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, body) = send(&app, get("/api/tags")).await;
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn test_update_unknown_tag_is_not_found() {
        let app = app();

        for uri in ["/api/tags/5", "/api/tags/9223372036854775807"] {
            let (status, _) = send(
                &app,
                json_request(Method::PUT, uri, json!({"name": "ghost"})),
            )
            .await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }

        let (_, body) = send(&app, get("/api/tags")).await;
        assert_eq!(body, "[]");
    }
}

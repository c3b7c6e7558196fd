pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions and navigation
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            delete(session::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/screen", get(session::handle_get_screen))
        .route(
            "/api/v1/sessions/:id/screens/:tag",
            get(session::handle_preview_screen),
        )
        .route(
            "/api/v1/sessions/:id/navigate",
            post(session::handle_navigate),
        )
        .route("/api/v1/sessions/:id/fragment", put(session::handle_fragment))
        .route("/api/v1/sessions/:id/search", put(session::handle_search))
        .route(
            "/api/v1/sessions/:id/insights/region",
            put(session::handle_select_region),
        )
        // Screen-local actions
        .route(
            "/api/v1/sessions/:id/review",
            post(session::handle_review_action),
        )
        .route(
            "/api/v1/sessions/:id/signup",
            post(session::handle_signup_action),
        )
        .route(
            "/api/v1/sessions/:id/dashboard",
            post(session::handle_dashboard_action),
        )
        // Catalog
        .route("/api/v1/hubs", get(catalog::handle_list_hubs))
        .route("/api/v1/hubs/:id", get(catalog::handle_get_hub))
        .route("/api/v1/hubs/:id/reviews", get(catalog::handle_hub_reviews))
        .route(
            "/api/v1/hubs/:id/applications",
            post(catalog::handle_apply),
        )
        .route(
            "/api/v1/hubs/:id/curriculum",
            get(catalog::handle_curriculum),
        )
        .route("/api/v1/candidates", get(catalog::handle_list_candidates))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use crate::insights::testing::{CannedFetcher, FailingFetcher};
    use crate::insights::InsightFetcher;
    use crate::session::SessionStore;

    fn test_state(insights: Arc<dyn InsightFetcher>) -> AppState {
        AppState {
            catalog: Arc::new(Catalog::seeded()),
            sessions: SessionStore::default(),
            insights,
            config: Config {
                gemini_api_key: None,
                port: 0,
                rust_log: "debug".to_string(),
                session_idle_secs: 1800,
            },
        }
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn new_session(app: &Router) -> String {
        let (status, body) = send(app, "POST", "/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["view"], "home");
        assert_eq!(body["fragment"], "home");
        body["session_id"].as_str().unwrap().to_string()
    }

    /// Polls the session screen until the insight panel leaves the loading state.
    async fn settled_insight(app: &Router, id: &str) -> Value {
        for _ in 0..50 {
            tokio::task::yield_now().await;
            let (_, body) = send(app, "GET", &format!("/api/v1/sessions/{id}/screen"), None).await;
            let insight = match body["view"].as_str() {
                Some("hub-profile") => body["screen"]["profile"]["insight"].clone(),
                _ => body["screen"]["insight"].clone(),
            };
            if insight["status"] == "ready" {
                return insight;
            }
        }
        panic!("insight never resolved");
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(Arc::new(FailingFetcher)));
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["insights"], "fallback");
    }

    #[tokio::test]
    async fn test_profile_navigation_and_unknown_fragment() {
        let fetcher = Arc::new(CannedFetcher::new("Strong capstone culture."));
        let app = build_router(test_state(fetcher.clone()));
        let id = new_session(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/navigate"),
            Some(json!({"view": "hub-profile", "hub_id": "1"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fragment"], "hub-profile");
        assert_eq!(body["screen"]["view"], "hub-profile");
        assert_eq!(body["screen"]["profile"]["hub"]["name"], "Lagos Tech School");
        assert_eq!(body["screen"]["profile"]["insight"]["status"], "loading");

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/v1/sessions/{id}/fragment"),
            Some(json!({"fragment": "#settings"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changed"], false);
        assert_eq!(body["view"], "hub-profile");

        let insight = settled_insight(&app, &id).await;
        assert_eq!(insight["text"], "Strong capstone culture.");
        assert_eq!(fetcher.prompt_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_insight_renders_fallback_text() {
        let app = build_router(test_state(Arc::new(FailingFetcher)));
        let id = new_session(&app).await;

        send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/navigate"),
            Some(json!({"view": "hub-profile", "hub_id": "2"})),
        )
        .await;
        let insight = settled_insight(&app, &id).await;
        assert_eq!(
            insight["text"],
            "Insights currently unavailable. Please check back later."
        );

        let (_, body) = send(
            &app,
            "PUT",
            &format!("/api/v1/sessions/{id}/fragment"),
            Some(json!({"fragment": "insights"})),
        )
        .await;
        assert_eq!(body["changed"], true);
        let insight = settled_insight(&app, &id).await;
        assert_eq!(insight["text"], "Loading insights for Lagos, Nigeria...");
    }

    #[tokio::test]
    async fn test_profile_without_hub_is_empty_state() {
        let app = build_router(test_state(Arc::new(FailingFetcher)));
        let id = new_session(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/navigate"),
            Some(json!({"view": "hub-profile"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["screen"]["profile"], Value::Null);
    }

    #[tokio::test]
    async fn test_navigate_to_unknown_hub_is_not_found() {
        let app = build_router(test_state(Arc::new(FailingFetcher)));
        let id = new_session(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/navigate"),
            Some(json!({"view": "hub-profile", "hub_id": "42"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let app = build_router(test_state(Arc::new(FailingFetcher)));
        let (status, _) = send(
            &app,
            "GET",
            "/api/v1/sessions/00000000-0000-0000-0000-000000000000/screen",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_deleted_session_is_not_found() {
        let app = build_router(test_state(Arc::new(FailingFetcher)));
        let id = new_session(&app).await;

        let (status, _) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) =
            send(&app, "GET", &format!("/api/v1/sessions/{id}/screen"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_preview_unknown_tag_renders_not_found_screen() {
        let app = build_router(test_state(Arc::new(FailingFetcher)));
        let id = new_session(&app).await;

        let (status, body) = send(
            &app,
            "GET",
            &format!("/api/v1/sessions/{id}/screens/pricing"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "not-found");
        assert_eq!(body["message"], "View not found");
    }

    #[tokio::test]
    async fn test_directory_search() {
        let app = build_router(test_state(Arc::new(FailingFetcher)));
        let id = new_session(&app).await;

        send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/navigate"),
            Some(json!({"view": "hubs"})),
        )
        .await;
        let (_, body) = send(
            &app,
            "PUT",
            &format!("/api/v1/sessions/{id}/search"),
            Some(json!({"query": "react"})),
        )
        .await;
        assert_eq!(body["screen"]["result_count"], 1);
        assert_eq!(body["screen"]["hubs"][0]["name"], "Lagos Tech School");

        let (status, hubs) = send(&app, "GET", "/api/v1/hubs?q=figma", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(hubs.as_array().unwrap().len(), 1);
        assert_eq!(hubs[0]["id"], "3");
    }

    #[tokio::test]
    async fn test_review_wizard_over_http() {
        let app = build_router(test_state(Arc::new(FailingFetcher)));
        let id = new_session(&app).await;
        let uri = format!("/api/v1/sessions/{id}/review");

        send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/navigate"),
            Some(json!({"view": "submit-review"})),
        )
        .await;

        send(&app, "POST", &uri, Some(json!({"action": "select_hub", "hub_id": "1"}))).await;
        let (status, body) = send(&app, "POST", &uri, Some(json!({"action": "next"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        send(&app, "POST", &uri, Some(json!({"action": "rate", "rating": 5}))).await;
        send(&app, "POST", &uri, Some(json!({"action": "next"}))).await;
        send(
            &app,
            "POST",
            &uri,
            Some(json!({"action": "describe", "content": "Hands-on projects."})),
        )
        .await;
        let (_, body) = send(&app, "POST", &uri, Some(json!({"action": "next"}))).await;
        assert_eq!(body["screen"]["step_number"], 3);

        let (status, body) = send(&app, "POST", &uri, Some(json!({"action": "submit"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["submission"]["rating"], 5);
        assert_eq!(body["view"], "hubs");
    }

    #[tokio::test]
    async fn test_dashboard_status_update() {
        let app = build_router(test_state(Arc::new(FailingFetcher)));
        let id = new_session(&app).await;
        let uri = format!("/api/v1/sessions/{id}/dashboard");

        send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/navigate"),
            Some(json!({"view": "hub-dashboard"})),
        )
        .await;
        let (status, body) = send(
            &app,
            "POST",
            &uri,
            Some(json!({"action": "update_status", "trainee_id": "t1", "status": "Placed"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["screen"]["trainees"][0]["status"], "Placed");

        let (status, _) = send(
            &app,
            "POST",
            &uri,
            Some(json!({"action": "update_status", "trainee_id": "nope", "status": "Placed"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_apply_defaults_to_first_program() {
        let app = build_router(test_state(Arc::new(FailingFetcher)));
        let (status, body) = send(&app, "POST", "/api/v1/hubs/1/applications", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["program"]["id"], "p1");

        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/hubs/1/applications",
            Some(json!({"program_id": "p3"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, body) = send(&app, "GET", "/api/v1/hubs/3/curriculum", None).await;
        assert_eq!(
            body["message"],
            "DevBootcamp Cape Town curriculum downloaded successfully!"
        );
    }
}

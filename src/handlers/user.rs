use crate::routes;
use axum::extract::Path;

/// GET /user/:id handler - Build a user lookup query from the raw path segment
///
/// The id is concatenated into the SQL text without sanitization and the
/// resulting query string is returned verbatim as the body. No database query
/// is executed. This passthrough is the behavior scanners are expected to
/// flag (SQL injection).
#[utoipa::path(
    get,
    path = routes::USER_ITEM,
    params(
        ("id" = String, Path, description = "User id, echoed into the query text unmodified")
    ),
    responses(
        (status = 200, description = "The constructed SQL query text", body = String)
    ),
    tag = "fixture"
)]
pub async fn user_handler(Path(id): Path<String>) -> String {
    let query = format!("SELECT * FROM users WHERE id = {}", id);

    tracing::info!("Built user query for id: {}", id);
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        Router::new().route(crate::routes::USER_ITEM, get(user_handler))
    }

    #[tokio::test]
    async fn test_user_endpoint_numeric_id() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/user/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"SELECT * FROM users WHERE id = 42");
    }

    #[tokio::test]
    async fn test_user_endpoint_injection_passthrough() {
        let app = setup_test_app();

        // Percent-encoded spaces decode before concatenation, so a classic
        // tautology payload survives byte for byte.
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/user/1%20OR%201=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"SELECT * FROM users WHERE id = 1 OR 1=1");
    }

    #[tokio::test]
    async fn test_user_endpoint_stacked_statement_passthrough() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/user/1;%20DROP%20TABLE%20users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"SELECT * FROM users WHERE id = 1; DROP TABLE users");
    }

    #[tokio::test]
    async fn test_user_endpoint_missing_id_not_found() {
        let app = setup_test_app();

        // No path segment to bind - axum's default routing returns 404.
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/user/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

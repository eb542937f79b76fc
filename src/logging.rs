//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read request body: {error}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };
    log_request(&parts, &String::from_utf8_lossy(&body_bytes));

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    log_response(&parts, &String::from_utf8_lossy(&body_bytes));

    Response::from_parts(parts, Body::from(body_bytes))
}

async fn read_body(body: Body) -> Result<Bytes, axum::Error> {
    axum::body::to_bytes(body, usize::MAX).await
}

/// The number of bytes of a body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

fn truncate(body: &str) -> Option<&str> {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return None;
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    Some(&body[..end])
}

fn log_request(parts: &axum::http::request::Parts, body: &str) {
    match truncate(body) {
        Some(prefix) => {
            tracing::info!("Received request: {parts:#?}\nbody: {prefix}...");
            tracing::debug!("Full request body: {body:?}");
        }
        None => tracing::info!("Received request: {parts:#?}\nbody: {body:?}"),
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &str) {
    match truncate(body) {
        Some(prefix) => {
            tracing::info!("Sending response: {parts:#?}\nbody: {prefix}...");
            tracing::debug!("Full response body: {body:?}");
        }
        None => tracing::info!("Sending response: {parts:#?}\nbody: {body:?}"),
    }
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, middleware, routing::post};
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use super::{LOG_BODY_LENGTH_LIMIT, logging_middleware, truncate};

    #[test]
    fn short_body_is_not_truncated() {
        assert_eq!(truncate("{}"), None);
    }

    #[test]
    fn long_body_is_truncated_to_limit() {
        let body = "x".repeat(LOG_BODY_LENGTH_LIMIT + 10);

        assert_eq!(truncate(&body), Some(&body[..LOG_BODY_LENGTH_LIMIT]));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = format!("{}é{}", "x".repeat(LOG_BODY_LENGTH_LIMIT - 1), "y".repeat(10));

        let got = truncate(&body).unwrap();

        assert_eq!(got.len(), LOG_BODY_LENGTH_LIMIT - 1);
    }

    #[tokio::test]
    async fn bodies_pass_through_unchanged() {
        let app = Router::new()
            .route("/echo", post(|Json(body): Json<Value>| async move { Json(body) }))
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::new(app);
        let body = json!({"cust_address": "x".repeat(2 * LOG_BODY_LENGTH_LIMIT)});

        let response = server.post("/echo").json(&body).await;

        response.assert_status_ok();
        response.assert_json(&body);
    }
}

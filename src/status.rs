//! The status envelope returned for requests that succeed or fail logically.

use std::fmt::Display;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// A response body of the form `{"status": "success"}` or
/// `{"status": "failure", "error": "..."}`.
///
/// Logical failures, such as a rejected account, are still sent with
/// `200 OK`. Clients must check `status` to detect them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StatusResponse {
    /// The request did what was asked.
    Success,
    /// The request was understood but could not be carried out.
    Failure {
        /// A human readable description of what went wrong.
        error: String,
    },
}

impl StatusResponse {
    /// Create a failure envelope with the message of `error`.
    pub fn failure(error: impl Display) -> Self {
        Self::Failure {
            error: error.to_string(),
        }
    }
}

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use super::StatusResponse;

    #[test]
    fn success_has_only_status() {
        let got = serde_json::to_value(StatusResponse::Success).unwrap();

        assert_eq!(got, json!({"status": "success"}));
    }

    #[test]
    fn failure_message_is_a_json_string() {
        let got = serde_json::to_string(&StatusResponse::failure("Attribute type missing")).unwrap();

        assert_eq!(got, r#"{"status":"failure","error":"Attribute type missing"}"#);
    }

    #[test]
    fn failure_message_is_escaped() {
        let envelope = StatusResponse::failure(r#"a "quoted" message"#);

        let text = serde_json::to_string(&envelope).unwrap();
        let round_trip: StatusResponse = serde_json::from_str(&text).unwrap();

        assert_eq!(round_trip, envelope);
    }

    #[test]
    fn failure_is_sent_with_ok_status() {
        let response = StatusResponse::failure("nope").into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }
}

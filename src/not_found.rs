use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::status::StatusResponse;

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        StatusResponse::failure("the requested resource could not be found"),
    )
        .into_response()
}

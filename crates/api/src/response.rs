//! Success envelopes for API handlers.
//!
//! Every successful body is `{ "data": ... }`. Handlers return
//! [`DataResponse`] for `200 OK` and [`Created`] for `201 Created`; both
//! serialize the payload as JSON.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// `200 OK` with a `{ "data": T }` body.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// `201 Created` with a `{ "data": T }` body.
#[derive(Debug)]
pub struct Created<T>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, DataResponse::new(self.0)).into_response()
    }
}

use crate::errors::{
    error::ErrorResponse, repository::RepositoryError, reservation::ReservationError,
    service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    UnprocessableEntity(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Reservation(res_err) => match res_err {
                ReservationError::ProductNotFound => {
                    HttpError::NotFound("Product not found".into())
                }

                err @ ReservationError::InsufficientStock { .. } => {
                    HttpError::UnprocessableEntity(err.to_string())
                }

                ReservationError::Timeout => {
                    HttpError::ServiceUnavailable("Store operation timed out".into())
                }

                err @ (ReservationError::StockUpdateFailed(_)
                | ReservationError::OrderPersistFailed(_)
                | ReservationError::CompensationFailed { .. }) => {
                    HttpError::Internal(err.to_string())
                }
            },

            ServiceError::Timeout => {
                HttpError::ServiceUnavailable("Operation timed out".into())
            }

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

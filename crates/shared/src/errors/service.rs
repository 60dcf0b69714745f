use crate::errors::repository::RepositoryError;
use crate::errors::reservation::ReservationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error(transparent)]
    Reservation(#[from] ReservationError),

    #[error("Operation timed out")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

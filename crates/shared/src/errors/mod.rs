mod error;
mod http;
mod repository;
mod reservation;
mod service;

pub use self::error::ErrorResponse;
pub use self::http::HttpError;
pub use self::repository::RepositoryError;
pub use self::reservation::ReservationError;
pub use self::service::ServiceError;

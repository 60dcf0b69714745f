use crate::errors::repository::RepositoryError;
use thiserror::Error;

/// Terminal outcomes of one stock-reservation invocation.
///
/// A reservation either walks `Start -> StockChecked -> StockReserved ->
/// OrderPersisted` or escapes through exactly one of these variants.
#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i32, available: i32 },

    #[error("Stock update failed: {0}")]
    StockUpdateFailed(#[source] RepositoryError),

    /// Order write failed but the reserved stock was rolled back.
    #[error("Order persist failed, reserved stock restored: {0}")]
    OrderPersistFailed(#[source] RepositoryError),

    /// Stock is decremented with no matching order and the rollback write
    /// also failed. Requires manual reconciliation.
    #[error(
        "Compensation failed for product {product_id}: stock must be restored to {expected_stock} ({detail})"
    )]
    CompensationFailed {
        product_id: i32,
        expected_stock: i32,
        detail: String,
    },

    #[error("Store operation timed out")]
    Timeout,
}

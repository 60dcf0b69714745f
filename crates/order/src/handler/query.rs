use crate::{
    abstract_trait::order::service::DynOrderQueryService, domain::response::order::OrderResponse,
};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use shared::{
    domain::responses::ApiResponse,
    errors::{ErrorResponse, HttpError},
};

#[utoipa::path(
    get,
    path = "/orders",
    tag = "Order",
    responses(
        (status = 200, description = "List of orders", body = ApiResponse<Vec<OrderResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

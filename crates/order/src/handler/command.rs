use crate::{
    abstract_trait::order::service::DynOrderCommandService,
    domain::requests::order::CreateOrderRequest, domain::response::order::OrderResponse,
};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use shared::{
    domain::responses::ApiResponse,
    errors::{ErrorResponse, HttpError},
    middleware::SimpleValidatedJson,
};

#[utoipa::path(
    post,
    path = "/orders",
    tag = "Order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 422, description = "Validation error or insufficient stock", body = ErrorResponse),
        (status = 500, description = "Reservation or persistence failure", body = ErrorResponse),
        (status = 503, description = "Store operation timed out", body = ErrorResponse)
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::order::OrderView;
use crate::errors::AppError;
use crate::AppService;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Body of POST /incluirPedido and PUT /atualizarPedido/{id}. Both fields are
/// always required; there are no partial updates.
#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderPayload {
    /// Order date as an ISO `YYYY-MM-DD` string.
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "id_cliente")]
    pub customer_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "id_cliente")]
    pub customer_id: i32,
}

impl From<OrderView> for OrderResponse {
    fn from(order: OrderView) -> Self {
        OrderResponse {
            id: order.id,
            date: order.date,
            customer_id: order.customer_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListOrdersResponse {
    #[serde(rename = "pedidos")]
    pub orders: Vec<OrderResponse>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /pedidos
///
/// Lists every order. An empty store is reported as a 404 rather than an
/// empty list, matching the published contract.
#[utoipa::path(
    get,
    path = "/pedidos",
    responses(
        (status = 200, description = "All orders", body = ListOrdersResponse),
        (status = 404, description = "No orders exist"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "pedidos"
)]
pub async fn list_orders(service: web::Data<AppService>) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.list_orders())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    if orders.is_empty() {
        return Err(AppError::NoOrdersFound);
    }

    Ok(HttpResponse::Ok().json(ListOrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}

/// POST /incluirPedido
///
/// Creates a new order once the referenced customer is confirmed to exist.
#[utoipa::path(
    post,
    path = "/incluirPedido",
    request_body = OrderPayload,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 404, description = "Referenced customer does not exist"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "pedidos"
)]
pub async fn create_order(
    service: web::Data<AppService>,
    body: web::Json<OrderPayload>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let order = web::block(move || service.create_order(body.date, body.customer_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// GET /pedidos/{id}
#[utoipa::path(
    get,
    path = "/pedidos/{id}",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "pedidos"
)]
pub async fn get_order(
    service: web::Data<AppService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let order = web::block(move || service.get_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// PUT /atualizarPedido/{id}
///
/// Overwrites the order's date and customer reference, subject to the same
/// customer existence check as creation.
#[utoipa::path(
    put,
    path = "/atualizarPedido/{id}",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    request_body = OrderPayload,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 404, description = "Order or referenced customer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "pedidos"
)]
pub async fn update_order(
    service: web::Data<AppService>,
    path: web::Path<i32>,
    body: web::Json<OrderPayload>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let body = body.into_inner();

    let order = web::block(move || service.update_order(order_id, body.date, body.customer_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// DELETE /excluirPedido/{id}
#[utoipa::path(
    delete,
    path = "/excluirPedido/{id}",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "pedidos"
)]
pub async fn delete_order(
    service: web::Data<AppService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    web::block(move || service.delete_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(json!({ "message": "Pedido excluído com sucesso" })))
}

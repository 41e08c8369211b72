use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// HTTP-boundary error. The 404 variants carry the exact response messages of
/// the public contract; anything else collapses into `Internal` and is logged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Pedido não encontrado")]
    OrderNotFound,

    #[error("Cliente não encontrado.")]
    CustomerNotFound,

    #[error("Nenhum pedido encontrado")]
    NoOrdersFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::OrderNotFound => AppError::OrderNotFound,
            DomainError::CustomerNotFound => AppError::CustomerNotFound,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::OrderNotFound | AppError::CustomerNotFound | AppError::NoOrdersFound => {
                HttpResponse::NotFound().json(serde_json::json!({
                    "message": self.to_string()
                }))
            }
            AppError::Internal(msg) => {
                log::error!("internal error: {}", msg);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "message": "Erro interno do servidor"
                }))
            }
        }
    }
}

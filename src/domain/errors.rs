use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Pedido não encontrado")]
    OrderNotFound,
    #[error("Cliente não encontrado.")]
    CustomerNotFound,
    #[error("Internal error: {0}")]
    Internal(String),
}

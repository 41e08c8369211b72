use chrono::NaiveDate;

use super::errors::DomainError;
use super::order::{CustomerView, OrderView};

pub trait OrderRepository: Send + Sync + 'static {
    fn insert(&self, date: NaiveDate, customer_id: i32) -> Result<OrderView, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<OrderView>, DomainError>;
    /// All orders, in insertion (id) order.
    fn list(&self) -> Result<Vec<OrderView>, DomainError>;
    /// Overwrites both fields. Returns `None` when the row no longer exists.
    fn update(
        &self,
        id: i32,
        date: NaiveDate,
        customer_id: i32,
    ) -> Result<Option<OrderView>, DomainError>;
    /// Returns the number of rows removed (0 or 1).
    fn delete(&self, id: i32) -> Result<usize, DomainError>;
}

/// Lookup contract exposed by the customer store. Customer CRUD itself lives
/// outside this service; orders only need "present or absent".
pub trait CustomerRepository: Send + Sync + 'static {
    fn find_by_id(&self, id: i32) -> Result<Option<CustomerView>, DomainError>;
}

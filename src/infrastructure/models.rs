use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::order::{CustomerView, OrderView};
use crate::schema::{customers, orders};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i32,
    pub date: NaiveDate,
    pub customer_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub date: NaiveDate,
    pub customer_id: i32,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = orders)]
pub struct OrderChangeset {
    pub date: NaiveDate,
    pub customer_id: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
}

/// Customers are managed outside this service; inserting them here is only
/// needed to seed test fixtures.
#[derive(Debug, Insertable)]
#[diesel(table_name = customers)]
pub struct NewCustomerRow {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
}

impl From<OrderRow> for OrderView {
    fn from(row: OrderRow) -> Self {
        OrderView {
            id: row.id,
            date: row.date,
            customer_id: row.customer_id,
        }
    }
}

impl From<CustomerRow> for CustomerView {
    fn from(row: CustomerRow) -> Self {
        CustomerView {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            national_id: row.national_id,
        }
    }
}

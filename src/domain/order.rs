use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderView {
    pub id: i32,
    pub date: NaiveDate,
    pub customer_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
}

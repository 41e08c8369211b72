use chrono::NaiveDate;

use crate::domain::errors::DomainError;
use crate::domain::order::OrderView;
use crate::domain::ports::{CustomerRepository, OrderRepository};

/// The order service core: referential-validity checks on writes plus the
/// five CRUD operations over order records.
///
/// The existence check and the subsequent write are separate store round
/// trips; a concurrent delete in between surfaces as `OrderNotFound` from the
/// write itself rather than corrupting anything.
pub struct OrderService<O, C> {
    orders: O,
    customers: C,
}

impl<O: OrderRepository, C: CustomerRepository> OrderService<O, C> {
    pub fn new(orders: O, customers: C) -> Self {
        Self { orders, customers }
    }

    pub fn list_orders(&self) -> Result<Vec<OrderView>, DomainError> {
        self.orders.list()
    }

    pub fn create_order(
        &self,
        date: NaiveDate,
        customer_id: i32,
    ) -> Result<OrderView, DomainError> {
        if self.customers.find_by_id(customer_id)?.is_none() {
            return Err(DomainError::CustomerNotFound);
        }
        self.orders.insert(date, customer_id)
    }

    pub fn get_order(&self, id: i32) -> Result<OrderView, DomainError> {
        self.orders.find_by_id(id)?.ok_or(DomainError::OrderNotFound)
    }

    pub fn update_order(
        &self,
        id: i32,
        date: NaiveDate,
        customer_id: i32,
    ) -> Result<OrderView, DomainError> {
        // Order existence is reported before a bad customer reference.
        if self.orders.find_by_id(id)?.is_none() {
            return Err(DomainError::OrderNotFound);
        }
        if self.customers.find_by_id(customer_id)?.is_none() {
            return Err(DomainError::CustomerNotFound);
        }
        self.orders
            .update(id, date, customer_id)?
            .ok_or(DomainError::OrderNotFound)
    }

    pub fn delete_order(&self, id: i32) -> Result<(), DomainError> {
        match self.orders.delete(id)? {
            0 => Err(DomainError::OrderNotFound),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::NaiveDate;

    use super::OrderService;
    use crate::domain::errors::DomainError;
    use crate::domain::order::{CustomerView, OrderView};
    use crate::domain::ports::{CustomerRepository, OrderRepository};

    #[derive(Default)]
    struct FakeOrders {
        state: Mutex<(Vec<OrderView>, i32)>,
    }

    impl OrderRepository for FakeOrders {
        fn insert(&self, date: NaiveDate, customer_id: i32) -> Result<OrderView, DomainError> {
            let mut state = self.state.lock().unwrap();
            state.1 += 1;
            let order = OrderView {
                id: state.1,
                date,
                customer_id,
            };
            state.0.push(order.clone());
            Ok(order)
        }

        fn find_by_id(&self, id: i32) -> Result<Option<OrderView>, DomainError> {
            let state = self.state.lock().unwrap();
            Ok(state.0.iter().find(|o| o.id == id).cloned())
        }

        fn list(&self) -> Result<Vec<OrderView>, DomainError> {
            Ok(self.state.lock().unwrap().0.clone())
        }

        fn update(
            &self,
            id: i32,
            date: NaiveDate,
            customer_id: i32,
        ) -> Result<Option<OrderView>, DomainError> {
            let mut state = self.state.lock().unwrap();
            match state.0.iter_mut().find(|o| o.id == id) {
                Some(order) => {
                    order.date = date;
                    order.customer_id = customer_id;
                    Ok(Some(order.clone()))
                }
                None => Ok(None),
            }
        }

        fn delete(&self, id: i32) -> Result<usize, DomainError> {
            let mut state = self.state.lock().unwrap();
            let before = state.0.len();
            state.0.retain(|o| o.id != id);
            Ok(before - state.0.len())
        }
    }

    struct FakeCustomers {
        ids: Vec<i32>,
    }

    impl CustomerRepository for FakeCustomers {
        fn find_by_id(&self, id: i32) -> Result<Option<CustomerView>, DomainError> {
            Ok(self.ids.contains(&id).then(|| CustomerView {
                id,
                first_name: "Joao".to_string(),
                last_name: "Silva".to_string(),
                national_id: "123.345.678-90".to_string(),
            }))
        }
    }

    fn service(known_customers: Vec<i32>) -> OrderService<FakeOrders, FakeCustomers> {
        OrderService::new(
            FakeOrders::default(),
            FakeCustomers {
                ids: known_customers,
            },
        )
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid date")
    }

    #[test]
    fn create_then_get_returns_matching_fields() {
        let svc = service(vec![7]);

        let created = svc.create_order(date("2024-01-01"), 7).expect("create");
        let fetched = svc.get_order(created.id).expect("get");

        assert_eq!(fetched.date, date("2024-01-01"));
        assert_eq!(fetched.customer_id, 7);
    }

    #[test]
    fn create_with_unknown_customer_creates_nothing() {
        let svc = service(vec![]);

        let err = svc.create_order(date("2024-01-01"), 99).unwrap_err();

        assert!(matches!(err, DomainError::CustomerNotFound));
        assert!(svc.list_orders().expect("list").is_empty());
    }

    #[test]
    fn get_unknown_id_is_order_not_found() {
        let svc = service(vec![1]);
        let created = svc.create_order(date("2024-01-01"), 1).expect("create");

        let err = svc.get_order(created.id + 1).unwrap_err();

        assert!(matches!(err, DomainError::OrderNotFound));
    }

    #[test]
    fn delete_then_get_is_order_not_found() {
        let svc = service(vec![1]);
        let created = svc.create_order(date("2024-01-01"), 1).expect("create");

        svc.delete_order(created.id).expect("delete");

        assert!(matches!(
            svc.get_order(created.id),
            Err(DomainError::OrderNotFound)
        ));
        assert!(matches!(
            svc.delete_order(created.id),
            Err(DomainError::OrderNotFound)
        ));
    }

    #[test]
    fn update_changes_exactly_the_targeted_order() {
        let svc = service(vec![1, 2]);
        let first = svc.create_order(date("2024-01-01"), 1).expect("create");
        let second = svc.create_order(date("2024-01-02"), 1).expect("create");

        let updated = svc
            .update_order(first.id, date("2024-02-15"), 2)
            .expect("update");

        assert_eq!(updated.id, first.id);
        assert_eq!(updated.date, date("2024-02-15"));
        assert_eq!(updated.customer_id, 2);

        let untouched = svc.get_order(second.id).expect("get");
        assert_eq!(untouched, second);
    }

    #[test]
    fn update_unknown_order_is_reported_before_unknown_customer() {
        let svc = service(vec![]);

        let err = svc.update_order(42, date("2024-01-01"), 99).unwrap_err();

        assert!(matches!(err, DomainError::OrderNotFound));
    }

    #[test]
    fn update_with_unknown_customer_leaves_order_untouched() {
        let svc = service(vec![1]);
        let created = svc.create_order(date("2024-01-01"), 1).expect("create");

        let err = svc
            .update_order(created.id, date("2024-02-02"), 99)
            .unwrap_err();

        assert!(matches!(err, DomainError::CustomerNotFound));
        assert_eq!(svc.get_order(created.id).expect("get"), created);
    }

    #[test]
    fn list_contains_exactly_the_created_orders() {
        let svc = service(vec![1]);
        assert!(svc.list_orders().expect("list").is_empty());

        let a = svc.create_order(date("2024-01-01"), 1).expect("create");
        let b = svc.create_order(date("2024-01-02"), 1).expect("create");

        let orders = svc.list_orders().expect("list");
        assert_eq!(orders, vec![a, b]);
    }
}

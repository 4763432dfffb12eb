use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use larder_core::Order;

/// Per-product quantity totals over a selected set of orders.
///
/// Row order is first-appearance order of each product across the source
/// orders, not alphabetical; it drives the printed row order of the summary
/// document, so it must stay stable.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    rows: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: &str, quantity: u32) {
        match self.index.get(product) {
            Some(&i) => self.rows[i].1 += quantity,
            None => {
                self.index.insert(product.to_string(), self.rows.len());
                self.rows.push((product.to_string(), quantity));
            }
        }
    }

    pub fn get(&self, product: &str) -> Option<u32> {
        self.index.get(product).map(|&i| self.rows[i].1)
    }

    /// Rows in first-appearance order.
    pub fn rows(&self) -> &[(String, u32)] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Sum quantities per product, optionally restricted to one delivery date.
///
/// Products with no matching order are absent from the result rather than
/// present with a zero total.
pub fn summarize(orders: &[Order], filter_date: Option<NaiveDate>) -> Summary {
    let mut summary = Summary::new();
    for order in orders {
        if let Some(date) = filter_date {
            if order.delivery_date != date {
                continue;
            }
        }
        summary.add(&order.product, order.quantity);
    }
    summary
}

/// Every delivery date present in the collection, sorted ascending.
///
/// Today is always included even when no order exists for it yet, so a
/// caller can always offer "today" in a date picker.
pub fn distinct_delivery_dates(orders: &[Order]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = Vec::new();
    for order in orders {
        if !dates.contains(&order.delivery_date) {
            dates.push(order.delivery_date);
        }
    }
    let today = Utc::now().date_naive();
    if !dates.contains(&today) {
        dates.push(today);
    }
    dates.sort();
    dates
}

/// Customers appearing in the (optionally date-filtered) orders, in
/// first-seen order. Section order of the printed order list depends on it.
pub fn distinct_customers(orders: &[Order], filter_date: Option<NaiveDate>) -> Vec<String> {
    let mut customers: Vec<String> = Vec::new();
    for order in orders {
        if let Some(date) = filter_date {
            if order.delivery_date != date {
                continue;
            }
        }
        if !customers.iter().any(|c| c == &order.customer) {
            customers.push(order.customer.clone());
        }
    }
    customers
}

/// Listing filter for the order index: exact delivery-date match plus a
/// case-insensitive substring search over customer and product names.
pub fn filter_orders(orders: &[Order], date: Option<NaiveDate>, search: Option<&str>) -> Vec<Order> {
    let needle = search.map(str::to_lowercase).filter(|s| !s.is_empty());
    orders
        .iter()
        .filter(|o| date.map_or(true, |d| o.delivery_date == d))
        .filter(|o| {
            needle.as_deref().map_or(true, |q| {
                o.customer.to_lowercase().contains(q) || o.product.to_lowercase().contains(q)
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(customer: &str, product: &str, quantity: u32, date: &str) -> Order {
        Order::new(
            customer.to_string(),
            product.to_string(),
            quantity,
            date.parse().unwrap(),
        )
    }

    #[test]
    fn summarize_sums_per_product_for_the_selected_date() {
        let orders = vec![
            order("Acme", "Pears", 10, "2024-05-01"),
            order("Borough Deli", "Apples", 3, "2024-05-01"),
            order("Acme", "Pears", 7, "2024-05-02"),
        ];

        let summary = summarize(&orders, Some("2024-05-01".parse().unwrap()));

        assert_eq!(summary.rows(), &[("Pears".to_string(), 10), ("Apples".to_string(), 3)]);
    }

    #[test]
    fn summarize_omits_products_with_no_matching_orders() {
        let orders = vec![order("Acme", "Pears", 10, "2024-05-01")];

        let summary = summarize(&orders, Some("2024-06-01".parse().unwrap()));

        assert!(summary.is_empty());
        assert_eq!(summary.get("Pears"), None);
    }

    #[test]
    fn summarize_preserves_first_appearance_order() {
        let orders = vec![
            order("Acme", "Plums", 2, "2024-05-01"),
            order("Acme", "Apples", 1, "2024-05-01"),
            order("Borough Deli", "Plums", 5, "2024-05-01"),
        ];

        let summary = summarize(&orders, None);

        assert_eq!(summary.rows(), &[("Plums".to_string(), 7), ("Apples".to_string(), 1)]);
    }

    #[test]
    fn delivery_dates_include_today_even_for_an_empty_collection() {
        let dates = distinct_delivery_dates(&[]);
        assert_eq!(dates, vec![Utc::now().date_naive()]);
    }

    #[test]
    fn delivery_dates_are_sorted_and_deduplicated() {
        let orders = vec![
            order("Acme", "Pears", 1, "2030-06-02"),
            order("Acme", "Pears", 1, "2030-06-01"),
            order("Borough Deli", "Apples", 1, "2030-06-02"),
        ];

        let dates = distinct_delivery_dates(&orders);
        let today = Utc::now().date_naive();

        assert_eq!(
            dates,
            vec![
                today,
                "2030-06-01".parse().unwrap(),
                "2030-06-02".parse().unwrap()
            ]
        );
    }

    #[test]
    fn customers_keep_first_seen_order() {
        let orders = vec![
            order("Borough Deli", "Apples", 1, "2024-05-01"),
            order("Acme", "Pears", 1, "2024-05-01"),
            order("Borough Deli", "Plums", 1, "2024-05-01"),
            order("Corner Shop", "Pears", 1, "2024-05-02"),
        ];

        let customers = distinct_customers(&orders, Some("2024-05-01".parse().unwrap()));

        assert_eq!(customers, vec!["Borough Deli", "Acme"]);
    }

    #[test]
    fn filter_matches_customer_or_product_case_insensitively() {
        let orders = vec![
            order("Acme", "Pears", 1, "2024-05-01"),
            order("Borough Deli", "Apples", 1, "2024-05-01"),
        ];

        let hits = filter_orders(&orders, None, Some("PEAR"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].customer, "Acme");

        let hits = filter_orders(&orders, None, Some("deli"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product, "Apples");
    }
}

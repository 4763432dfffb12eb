use chrono::NaiveDate;
use larder_core::Order;

/// Build the batch of orders for one submission: one order per product line
/// with a positive quantity. Lines with an empty product name or a
/// quantity outside the orderable range are skipped, not rejected.
pub fn build_orders(customer: &str, delivery_date: NaiveDate, lines: &[(String, i64)]) -> Vec<Order> {
    lines
        .iter()
        .filter(|(product, _)| !product.is_empty())
        .filter_map(|(product, quantity)| {
            let quantity = u32::try_from(*quantity).ok().filter(|q| *q > 0)?;
            Some(Order::new(
                customer.to_string(),
                product.clone(),
                quantity,
                delivery_date,
            ))
        })
        .collect()
}

/// Remove exactly the order with the given id, leaving every other record
/// untouched. Returns whether anything was removed.
pub fn delete_order(orders: &mut Vec<Order>, id: &str) -> bool {
    let before = orders.len();
    orders.retain(|o| o.id != id);
    orders.len() != before
}

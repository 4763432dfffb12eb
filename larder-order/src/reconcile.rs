use std::collections::HashSet;

use larder_core::{DeliveryLine, Order, OrderStatus, ShippedItem};

/// Outcome of reconciling a shipped-quantities payload against the order
/// collection. The caller owns persistence: statuses are flipped and saved
/// only after the delivery-note artifact is durably written.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub lines: Vec<DeliveryLine>,
    pub fulfill_ids: Vec<String>,
}

/// Select the orders a delivery note should be prefilled from.
///
/// Customer given: that customer's unfulfilled orders. If none remain, fall
/// back to all of that customer's orders regardless of status, so a note can
/// be regenerated after everything was already marked fulfilled (reprint).
/// No customer: the whole collection.
pub fn select_outstanding(orders: &[Order], customer: Option<&str>) -> Vec<Order> {
    let Some(customer) = customer else {
        return orders.to_vec();
    };

    let outstanding: Vec<Order> = orders
        .iter()
        .filter(|o| o.customer == customer && o.is_outstanding())
        .cloned()
        .collect();
    if !outstanding.is_empty() {
        return outstanding;
    }
    orders
        .iter()
        .filter(|o| o.customer == customer)
        .cloned()
        .collect()
}

/// Reconcile submitted shipped lines against the outstanding orders.
///
/// Submitted quantities that are non-positive or too large to print are
/// dropped silently. The originally
/// ordered quantity is resolved from the FIRST unfulfilled (customer,
/// product) match in collection order; duplicate outstanding orders are
/// never summed. Without a customer there is nothing to match on and the
/// submitted quantity stands in for the ordered one.
///
/// The fulfill set is asymmetric and deliberately so: a customer-scoped
/// note flips only that customer's unfulfilled orders, a global note flips
/// every order in the collection regardless of prior status.
pub fn reconcile(
    orders: &[Order],
    customer: Option<&str>,
    shipped: &[ShippedItem],
) -> Reconciliation {
    let mut lines = Vec::new();
    for item in shipped {
        let shipped_qty = match u32::try_from(item.quantity) {
            Ok(qty) if qty > 0 => qty,
            _ => {
                tracing::debug!(product = %item.product, quantity = item.quantity, "dropping invalid shipped line");
                continue;
            }
        };
        let ordered = customer
            .and_then(|c| {
                orders
                    .iter()
                    .find(|o| o.customer == c && o.product == item.product && o.is_outstanding())
            })
            .map(|o| o.quantity)
            .unwrap_or(shipped_qty);
        lines.push(DeliveryLine {
            product: item.product.clone(),
            shipped: shipped_qty,
            ordered,
        });
    }

    let fulfill_ids = match customer {
        Some(c) => orders
            .iter()
            .filter(|o| o.customer == c && o.is_outstanding())
            .map(|o| o.id.clone())
            .collect(),
        None => orders.iter().map(|o| o.id.clone()).collect(),
    };

    Reconciliation { lines, fulfill_ids }
}

/// Flip the selected orders to fulfilled. Idempotent for orders that were
/// fulfilled already.
pub fn apply_fulfillment(orders: &mut [Order], fulfill_ids: &[String]) {
    let ids: HashSet<&str> = fulfill_ids.iter().map(String::as_str).collect();
    for order in orders.iter_mut() {
        if ids.contains(order.id.as_str()) {
            order.fulfill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(customer: &str, product: &str, quantity: u32, status: OrderStatus) -> Order {
        let mut o = Order::new(
            customer.to_string(),
            product.to_string(),
            quantity,
            "2024-05-01".parse().unwrap(),
        );
        o.status = status;
        o
    }

    fn shipped(product: &str, quantity: i64) -> ShippedItem {
        ShippedItem {
            product: product.to_string(),
            quantity,
        }
    }

    #[test]
    fn outstanding_selection_prefers_unfulfilled_orders() {
        let orders = vec![
            order("Acme", "Pears", 10, OrderStatus::Fulfilled),
            order("Acme", "Apples", 3, OrderStatus::Unfulfilled),
            order("Borough Deli", "Plums", 4, OrderStatus::Unfulfilled),
        ];

        let selected = select_outstanding(&orders, Some("Acme"));

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].product, "Apples");
    }

    #[test]
    fn outstanding_selection_falls_back_to_all_customer_orders_for_reprint() {
        let orders = vec![
            order("Acme", "Pears", 10, OrderStatus::Fulfilled),
            order("Acme", "Apples", 3, OrderStatus::Fulfilled),
            order("Borough Deli", "Plums", 4, OrderStatus::Unfulfilled),
        ];

        let selected = select_outstanding(&orders, Some("Acme"));

        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|o| o.customer == "Acme"));
    }

    #[test]
    fn outstanding_selection_without_customer_returns_everything() {
        let orders = vec![
            order("Acme", "Pears", 10, OrderStatus::Fulfilled),
            order("Borough Deli", "Plums", 4, OrderStatus::Unfulfilled),
        ];

        assert_eq!(select_outstanding(&orders, None).len(), 2);
    }

    #[test]
    fn reconcile_with_no_shipped_lines_is_empty_except_for_the_fulfill_set() {
        let orders = vec![order("Acme", "Pears", 10, OrderStatus::Unfulfilled)];

        let result = reconcile(&orders, Some("Acme"), &[]);

        assert!(result.lines.is_empty());
        assert_eq!(result.fulfill_ids, vec![orders[0].id.clone()]);

        let empty = reconcile(&[], Some("Acme"), &[]);
        assert!(empty.lines.is_empty());
        assert!(empty.fulfill_ids.is_empty());
    }

    #[test]
    fn reconcile_resolves_ordered_quantity_from_the_outstanding_order() {
        let orders = vec![order("Acme", "Pears", 10, OrderStatus::Unfulfilled)];

        let result = reconcile(&orders, Some("Acme"), &[shipped("Pears", 4)]);

        assert_eq!(
            result.lines,
            vec![DeliveryLine {
                product: "Pears".to_string(),
                shipped: 4,
                ordered: 10,
            }]
        );
        assert_eq!(result.fulfill_ids, vec![orders[0].id.clone()]);
    }

    #[test]
    fn reconcile_drops_non_positive_quantities_silently() {
        let orders = vec![order("Acme", "Pears", 10, OrderStatus::Unfulfilled)];

        let result = reconcile(
            &orders,
            Some("Acme"),
            &[shipped("Pears", 0), shipped("Apples", -2), shipped("Pears", 3)],
        );

        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].shipped, 3);
    }

    #[test]
    fn reconcile_drops_quantities_beyond_the_printable_range() {
        let orders = vec![order("Acme", "Pears", 10, OrderStatus::Unfulfilled)];

        let result = reconcile(
            &orders,
            Some("Acme"),
            &[shipped("Pears", u32::MAX as i64 + 2), shipped("Pears", 3)],
        );

        // 4294967297 must not wrap around to a printed quantity of 1
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].shipped, 3);
    }

    #[test]
    fn reconcile_takes_the_first_match_when_outstanding_orders_duplicate() {
        // Two outstanding Acme/Pears orders: the first one in collection
        // order supplies the printed "ordered" quantity, they are not summed.
        let orders = vec![
            order("Acme", "Pears", 10, OrderStatus::Unfulfilled),
            order("Acme", "Pears", 6, OrderStatus::Unfulfilled),
        ];

        let result = reconcile(&orders, Some("Acme"), &[shipped("Pears", 12)]);

        assert_eq!(result.lines[0].ordered, 10);
        assert_eq!(result.fulfill_ids.len(), 2);
    }

    #[test]
    fn reconcile_uses_submitted_quantity_when_no_match_exists() {
        let orders = vec![order("Acme", "Pears", 10, OrderStatus::Fulfilled)];

        let result = reconcile(&orders, Some("Acme"), &[shipped("Pears", 5)]);

        assert_eq!(result.lines[0].ordered, 5);
        assert!(result.fulfill_ids.is_empty());
    }

    #[test]
    fn global_note_fulfills_every_order_regardless_of_status() {
        let mut orders = vec![
            order("Acme", "Pears", 10, OrderStatus::Fulfilled),
            order("Borough Deli", "Plums", 4, OrderStatus::Unfulfilled),
        ];

        let result = reconcile(&orders, None, &[shipped("Plums", 4)]);
        assert_eq!(result.fulfill_ids.len(), 2);
        // No customer to match on: the submitted quantity stands in.
        assert_eq!(result.lines[0].ordered, 4);

        apply_fulfillment(&mut orders, &result.fulfill_ids);
        assert!(orders.iter().all(|o| o.status == OrderStatus::Fulfilled));
    }

    #[test]
    fn customer_note_leaves_other_customers_untouched() {
        let mut orders = vec![
            order("Acme", "Pears", 10, OrderStatus::Unfulfilled),
            order("Borough Deli", "Plums", 4, OrderStatus::Unfulfilled),
        ];

        let result = reconcile(&orders, Some("Acme"), &[shipped("Pears", 10)]);
        apply_fulfillment(&mut orders, &result.fulfill_ids);

        assert_eq!(orders[0].status, OrderStatus::Fulfilled);
        assert_eq!(orders[1].status, OrderStatus::Unfulfilled);
    }
}

use larder_core::Order;

/// Product-catalog errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Product already exists: {0}")]
    DuplicateName(String),
}

/// Add a product name to the catalog. Empty names and duplicates are
/// ignored, matching the forgiving form-submission behavior.
pub fn add_product(products: &mut Vec<String>, name: &str) {
    if !name.is_empty() && !products.iter().any(|p| p == name) {
        products.push(name.to_string());
    }
}

/// Rename a catalog entry in place and cascade the new name into every
/// order that references the old one. Rejects a rename onto an existing
/// name; historical quantities would otherwise silently merge.
pub fn rename_product(
    products: &mut [String],
    orders: &mut [Order],
    old_name: &str,
    new_name: &str,
) -> Result<(), CatalogError> {
    if products.iter().any(|p| p == new_name) {
        return Err(CatalogError::DuplicateName(new_name.to_string()));
    }
    let slot = products
        .iter_mut()
        .find(|p| p.as_str() == old_name)
        .ok_or_else(|| CatalogError::NotFound(old_name.to_string()))?;
    *slot = new_name.to_string();

    for order in orders.iter_mut() {
        if order.product == old_name {
            order.product = new_name.to_string();
        }
    }
    Ok(())
}

/// Drop a name from the catalog. Orders keep their historical product name;
/// rename is the only cascading operation.
pub fn remove_product(products: &mut Vec<String>, name: &str) {
    products.retain(|p| p != name);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(customer: &str, product: &str) -> Order {
        Order::new(
            customer.to_string(),
            product.to_string(),
            1,
            "2024-05-01".parse().unwrap(),
        )
    }

    #[test]
    fn add_ignores_duplicates_and_empty_names() {
        let mut products = vec!["Pears".to_string()];
        add_product(&mut products, "Pears");
        add_product(&mut products, "");
        add_product(&mut products, "Apples");
        assert_eq!(products, vec!["Pears", "Apples"]);
    }

    #[test]
    fn rename_cascades_into_orders() {
        let mut products = vec!["Pears".to_string(), "Apples".to_string()];
        let mut orders = vec![order("Acme", "Pears"), order("Borough Deli", "Apples")];

        rename_product(&mut products, &mut orders, "Pears", "Conference Pears").unwrap();

        assert_eq!(products, vec!["Conference Pears", "Apples"]);
        assert_eq!(orders[0].product, "Conference Pears");
        assert_eq!(orders[1].product, "Apples");
    }

    #[test]
    fn rename_rejects_an_existing_target_name() {
        let mut products = vec!["Pears".to_string(), "Apples".to_string()];
        let mut orders = vec![order("Acme", "Pears")];

        let err = rename_product(&mut products, &mut orders, "Pears", "Apples").unwrap_err();

        assert_eq!(err, CatalogError::DuplicateName("Apples".to_string()));
        assert_eq!(products, vec!["Pears", "Apples"]);
        assert_eq!(orders[0].product, "Pears");
    }

    #[test]
    fn rename_of_a_missing_product_is_an_error() {
        let mut products = vec!["Pears".to_string()];
        let mut orders = vec![];

        let err = rename_product(&mut products, &mut orders, "Quinces", "Medlars").unwrap_err();

        assert_eq!(err, CatalogError::NotFound("Quinces".to_string()));
    }

    #[test]
    fn remove_leaves_orders_untouched() {
        let mut products = vec!["Pears".to_string(), "Apples".to_string()];
        let orders = vec![order("Acme", "Pears")];

        remove_product(&mut products, "Pears");

        assert_eq!(products, vec!["Apples"]);
        assert_eq!(orders[0].product, "Pears");
    }
}

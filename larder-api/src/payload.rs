use serde::Deserialize;

/// Boundary normalization for form-shaped payloads where a repeated field
/// may arrive as a single value or a collection. Everything downstream of
/// the handlers sees a plain `Vec`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// A submitted quantity as it arrives over the wire: number, numeric
/// string, or garbage. Anything non-numeric normalizes to zero, which the
/// reconciler then drops silently.
pub fn quantity_as_i64(value: &serde_json::Value) -> i64 {
    match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| s.trim().parse::<f64>().ok().map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_values_normalize_to_one_element_lists() {
        let one: OneOrMany<String> = serde_json::from_value(json!("Pears")).unwrap();
        assert_eq!(one.into_vec(), vec!["Pears".to_string()]);

        let many: OneOrMany<String> = serde_json::from_value(json!(["Pears", "Apples"])).unwrap();
        assert_eq!(many.into_vec(), vec!["Pears".to_string(), "Apples".to_string()]);
    }

    #[test]
    fn quantities_accept_numbers_and_numeric_strings() {
        assert_eq!(quantity_as_i64(&json!(4)), 4);
        assert_eq!(quantity_as_i64(&json!("4")), 4);
        assert_eq!(quantity_as_i64(&json!(4.9)), 4);
        assert_eq!(quantity_as_i64(&json!("four")), 0);
        assert_eq!(quantity_as_i64(&json!(null)), 0);
    }
}

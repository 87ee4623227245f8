//! Fixed-path lookups into successful API responses.

use serde_json::Value;

/// Returns the item list at `data.data.items`.
///
/// A missing segment, or a value that is not an array, means the category
/// simply has no items; that is not an error.
#[must_use]
pub fn extract_items(response: &Value) -> &[Value] {
    response
        .pointer("/data/data/items")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Returns the refinement set at `data.data.refinements.data`, passed through
/// unmodified.
///
/// `None` when any segment is missing or the value is empty (`null`, `{}`,
/// `[]`, or `""`).
#[must_use]
pub fn extract_refinements(response: &Value) -> Option<&Value> {
    response
        .pointer("/data/data/refinements/data")
        .filter(|v| !is_empty(v))
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn items_found_at_nested_path() {
        let body = json!({"data": {"data": {"items": [{"id": "a"}, {"id": "b"}]}}});
        let items = extract_items(&body);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], json!({"id": "a"}));
    }

    #[test]
    fn missing_segment_yields_no_items() {
        assert!(extract_items(&json!({"data": {}})).is_empty());
        assert!(extract_items(&json!({"error": "HTTP error 500"})).is_empty());
    }

    #[test]
    fn non_array_items_yields_no_items() {
        let body = json!({"data": {"data": {"items": {"id": "a"}}}});
        assert!(extract_items(&body).is_empty());
    }

    #[test]
    fn refinements_are_passed_through() {
        let facets = json!({"orientation": ["landscape", "portrait"], "color": {"blue": 12}});
        let body = json!({"data": {"data": {"refinements": {"data": facets.clone()}}}});
        assert_eq!(extract_refinements(&body), Some(&facets));
    }

    #[test]
    fn empty_or_missing_refinements_are_none() {
        let empty = json!({"data": {"data": {"refinements": {"data": {}}}}});
        let null = json!({"data": {"data": {"refinements": {"data": null}}}});
        let missing = json!({"data": {"data": {}}});
        assert!(extract_refinements(&empty).is_none());
        assert!(extract_refinements(&null).is_none());
        assert!(extract_refinements(&missing).is_none());
    }
}

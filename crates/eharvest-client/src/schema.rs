//! Coarse field-type inference for sampled items.
//!
//! A schema is built from exactly one sample item per category. Fields that
//! only appear in later items are not seen, and a field whose type varies
//! between items is reported with the sample's type. Treat the result as
//! exploratory documentation, not as a validation contract.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Coarse runtime type of a JSON value.
///
/// Names follow the short forms used in the exported schema files; an
/// explicit JSON `null` gets its own `"null"` name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Str,
    Int,
    Float,
    Bool,
    List,
    Dict,
    Null,
}

impl FieldType {
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => FieldType::Null,
            Value::Bool(_) => FieldType::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => FieldType::Int,
            Value::Number(_) => FieldType::Float,
            Value::String(_) => FieldType::Str,
            Value::Array(_) => FieldType::List,
            Value::Object(_) => FieldType::Dict,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Str => "str",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::List => "list",
            FieldType::Dict => "dict",
            FieldType::Null => "null",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name → coarse type, in the sample item's field order.
pub type ItemSchema = IndexMap<String, FieldType>;

/// Infers a schema from a single sample item.
///
/// Only top-level fields are described. A sample that is not a JSON object
/// yields an empty schema.
#[must_use]
pub fn infer_schema(sample: &Value) -> ItemSchema {
    sample
        .as_object()
        .map(|fields| {
            fields
                .iter()
                .map(|(name, value)| (name.clone(), FieldType::of(value)))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn infers_scalar_and_null_types() {
        let schema = infer_schema(&json!({"a": 1, "b": null, "c": "x"}));
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({"a": "int", "b": "null", "c": "str"})
        );
    }

    #[test]
    fn infers_container_bool_and_float_types() {
        let schema = infer_schema(&json!({
            "tags": ["blue"],
            "author": {"name": "n"},
            "free": false,
            "rating": 4.5,
            "big": u64::MAX
        }));
        assert_eq!(schema["tags"], FieldType::List);
        assert_eq!(schema["author"], FieldType::Dict);
        assert_eq!(schema["free"], FieldType::Bool);
        assert_eq!(schema["rating"], FieldType::Float);
        assert_eq!(schema["big"], FieldType::Int);
    }

    #[test]
    fn keeps_sample_field_order() {
        let schema = infer_schema(&json!({"zeta": 1, "alpha": "x", "mid": null}));
        let names: Vec<&str> = schema.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn non_object_sample_yields_empty_schema() {
        assert!(infer_schema(&json!(["not", "an", "object"])).is_empty());
        assert!(infer_schema(&json!(null)).is_empty());
    }

    #[test]
    fn display_matches_serialized_name() {
        for ty in [FieldType::Str, FieldType::Null, FieldType::Dict] {
            assert_eq!(
                serde_json::to_value(ty).unwrap(),
                Value::String(ty.to_string())
            );
        }
    }
}

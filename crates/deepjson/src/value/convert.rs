//! Boundary conversions between [`JsonValue`] and `serde_json`.
//!
//! Parsing and serialization of JSON text stay outside this crate; trees
//! cross the boundary as `serde_json::Value` or through the `Serialize` /
//! `Deserialize` impls below.

use serde::{
    de::{Deserialize, Deserializer},
    ser::{Serialize, Serializer},
};
use serde_json::Value;

use crate::value::{JsonValue, Map, Number};

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(num) => {
                if let Some(u) = num.as_u64() {
                    JsonValue::Number(Number::PositiveInteger(u))
                } else if let Some(i) = num.as_i64() {
                    JsonValue::Number(Number::NegativeInteger(i))
                } else if let Some(f) = num.as_f64() {
                    JsonValue::Number(Number::Float(f))
                } else {
                    unreachable!("serde_json numbers fit u64, i64, or f64")
                }
            }
            Value::String(s) => JsonValue::String(s),
            // Key order follows the source map's iteration order.
            Value::Object(old) => JsonValue::Object(
                old.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect::<Map>(),
            ),
            Value::Array(old) => {
                JsonValue::Array(old.into_iter().map(JsonValue::from).collect())
            }
        }
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(Number::PositiveInteger(u)) => Value::Number(u.into()),
            JsonValue::Number(Number::NegativeInteger(i)) => Value::Number(i.into()),
            // Non-finite floats have no JSON text form.
            JsonValue::Number(Number::Float(f)) => {
                serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number)
            }
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        eq(self, other)
    }
}

fn eq(lhs: &Value, rhs: &JsonValue) -> bool {
    match (lhs, rhs) {
        (Value::Null, JsonValue::Null) => true,
        (Value::Bool(l), JsonValue::Bool(r)) => l == r,
        (Value::Number(l), JsonValue::Number(r)) => compare_number(l, r),
        (Value::String(l), JsonValue::String(r)) => l == r,
        (Value::Array(l), JsonValue::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
        }
        // Key order may differ between the two representations.
        (Value::Object(l), JsonValue::Object(r)) => {
            l.len() == r.len() && l.iter().all(|(k, lv)| r.get(k).is_some_and(|rv| eq(lv, rv)))
        }
        _ => false,
    }
}

#[inline]
fn compare_number(lhs: &serde_json::Number, rhs: &Number) -> bool {
    match rhs {
        Number::PositiveInteger(u) => lhs.as_u64() == Some(*u),
        Number::NegativeInteger(i) => lhs.as_i64() == Some(*i),
        Number::Float(f) => lhs.as_f64() == Some(*f),
    }
}

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Number(Number::PositiveInteger(u)) => serializer.serialize_u64(*u),
            JsonValue::Number(Number::NegativeInteger(i)) => serializer.serialize_i64(*i),
            JsonValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(items) => serializer.collect_seq(items),
            JsonValue::Object(map) => serializer.collect_map(map),
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(JsonValue::from)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use test_case::test_case;

    use crate::value::{JsonValue, Number};

    #[test_case(json!(null), JsonValue::Null; "null")]
    #[test_case(json!(true), JsonValue::Bool(true); "bool")]
    #[test_case(json!(42u64), JsonValue::Number(Number::PositiveInteger(42)); "positive number")]
    #[test_case(json!(-42), JsonValue::Number(Number::NegativeInteger(-42)); "negative number")]
    #[test_case(json!(3.25), JsonValue::Number(Number::Float(3.25)); "float number")]
    #[test_case(json!("hello"), JsonValue::from("hello"); "string")]
    #[test_case(
        json!([1, "two", null]),
        JsonValue::Array(vec![
            JsonValue::from(1u64),
            JsonValue::from("two"),
            JsonValue::Null,
        ]);
        "array"
    )]
    fn from_serde(value: serde_json::Value, expected: JsonValue) {
        assert_eq!(JsonValue::from(value), expected);
    }

    #[test]
    fn object_roundtrip_preserves_structure() {
        let source = json!({"a": 1, "b": {"c": [true, null]}, "d": "x"});
        let tree = JsonValue::from(source.clone());
        assert_eq!(tree, source);
        assert_eq!(serde_json::Value::from(tree), source);
    }

    #[test]
    fn serialize_matches_serde_output() {
        let source = json!({"a": [1, -2, 2.5], "b": null});
        let tree = JsonValue::from(source.clone());
        let text = serde_json::to_string(&tree).expect("serializable tree");
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&text).expect("valid JSON"),
            source
        );
    }

    #[test]
    fn deserialize_from_text() {
        let tree: JsonValue =
            serde_json::from_str(r#"{"name":"a","tags":[1,2]}"#).expect("valid JSON");
        assert_eq!(tree.get("name"), Some(&JsonValue::from("a")));
        assert_eq!(
            tree.get("tags").and_then(|tags| tags.get_index(1)),
            Some(&JsonValue::from(2u64))
        );
    }

    #[test]
    fn cross_equality_is_symmetric() {
        let value = json!({"a": [1, {"b": null}]});
        let tree = JsonValue::from(value.clone());
        assert_eq!(tree, value);
        assert_eq!(value, tree);
        assert_ne!(tree, json!({"a": [1, {"b": 0}]}));
    }
}

//! JSON encoding of `google.protobuf.Value`.
//!
//! Predict responses are handled in this shape (`structValue`,
//! `listValue`, `stringValue`, ...), the way the gRPC clients expose them.
//! The REST transport returns plain JSON, so it converts with [`to_value`].

use serde_json::{json, Map, Value};

/// Convert plain JSON into its protobuf `Value` encoding.
pub fn to_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": "NULL_VALUE" }),
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::Number(n) => json!({ "numberValue": n.as_f64().unwrap_or_default() }),
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(to_value).collect();
            json!({ "listValue": { "values": values } })
        }
        Value::Object(map) => {
            let fields: Map<String, Value> = map
                .iter()
                .map(|(k, v)| (k.clone(), to_value(v)))
                .collect();
            json!({ "structValue": { "fields": fields } })
        }
    }
}

/// Field `name` of a `structValue`.
pub fn field<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value.get("structValue")?.get("fields")?.get(name)
}

/// Element `index` of a `listValue`.
pub fn element(value: &Value, index: usize) -> Option<&Value> {
    value.get("listValue")?.get("values")?.get(index)
}

pub fn string_value(value: &Value) -> Option<&str> {
    value.get("stringValue")?.as_str()
}

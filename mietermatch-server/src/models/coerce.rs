//! Lenient field deserializers
//!
//! Each helper accepts any JSON value and maps it onto the column type,
//! returning `None`/default for values that don't fit. Use together with
//! `#[serde(default)]` so absent fields take the same path as `null`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::ImageRef;

/// Text column: strings as-is, numbers and booleans in their text form.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_value(Value::deserialize(deserializer)?))
}

/// Numeric column: JSON numbers or numeric strings.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number_value(Value::deserialize(deserializer)?))
}

/// Verification flag: truthiness of any JSON value.
pub fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(truthy_value(&Value::deserialize(deserializer)?))
}

/// Image list: arrays keep their recognizable elements in order.
pub fn images<'de, D>(deserializer: D) -> Result<Vec<ImageRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(images_value(Value::deserialize(deserializer)?))
}

pub(crate) fn text_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub(crate) fn number_value(value: Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        Value::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub(crate) fn truthy_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

pub(crate) fn images_value(value: Value) -> Vec<ImageRef> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_accepts_scalars() {
        assert_eq!(text_value(json!("Main St")), Some("Main St".into()));
        assert_eq!(text_value(json!(3)), Some("3".into()));
        assert_eq!(text_value(json!(true)), Some("true".into()));
        assert_eq!(text_value(json!(null)), None);
        assert_eq!(text_value(json!({"a": 1})), None);
    }

    #[test]
    fn number_accepts_numeric_strings() {
        assert_eq!(number_value(json!(800)), Some(800.0));
        assert_eq!(number_value(json!(72.5)), Some(72.5));
        assert_eq!(number_value(json!(" 950 ")), Some(950.0));
        assert_eq!(number_value(json!("ca. 900")), None);
        assert_eq!(number_value(json!("NaN")), None);
        assert_eq!(number_value(json!(null)), None);
    }

    #[test]
    fn truthiness() {
        assert!(truthy_value(&json!(true)));
        assert!(truthy_value(&json!(1)));
        assert!(truthy_value(&json!("yes")));
        assert!(!truthy_value(&json!(false)));
        assert!(!truthy_value(&json!(0)));
        assert!(!truthy_value(&json!(0.0)));
        assert!(!truthy_value(&json!("")));
        assert!(!truthy_value(&json!([])));
        assert!(!truthy_value(&json!(null)));
    }

    #[test]
    fn images_drop_unrecognized_elements() {
        let images = images_value(json!(["a.jpg", 42, {"data": "b64", "description": "Küche"}]));
        assert_eq!(images.len(), 2);
        assert_eq!(images[0], ImageRef::Reference("a.jpg".into()));

        assert!(images_value(json!(null)).is_empty());
        assert!(images_value(json!("a.jpg")).is_empty());
    }
}

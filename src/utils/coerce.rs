// utils/coerce.rs
//! Désérialisation tolérante des flottants: un nombre JSON ou une chaîne
//! numérique (`"2.5"`) sont acceptés. Les chaînes non numériques et les
//! valeurs non finies sont refusées.

use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use std::collections::BTreeMap;
use std::fmt;

struct FloatVisitor;

impl<'de> Visitor<'de> for FloatVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite())
            .ok_or_else(|| E::invalid_value(Unexpected::Str(value), &self))
    }
}

/// Flottant coercé, utilisable comme valeur d'`Option` ou de map
struct Coerced(f64);

impl<'de> Deserialize<'de> for Coerced {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FloatVisitor).map(Coerced)
    }
}

pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Coerced::deserialize(deserializer).map(|c| c.0)
}

pub fn optional_float<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    Option::<Coerced>::deserialize(deserializer).map(|value| value.map(|c| c.0))
}

pub fn float_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<i64, f64>, D::Error> {
    BTreeMap::<i64, Coerced>::deserialize(deserializer)
        .map(|map| map.into_iter().map(|(key, value)| (key, value.0)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Priced {
        #[serde(deserialize_with = "float")]
        price: f64,
        #[serde(default, deserialize_with = "optional_float")]
        tax: Option<f64>,
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        let parsed: Priced = serde_json::from_value(json!({"price": "3.5", "tax": 2})).unwrap();
        assert_eq!(parsed.price, 3.5);
        assert_eq!(parsed.tax, Some(2.0));

        let parsed: Priced = serde_json::from_value(json!({"price": 1.25, "tax": null})).unwrap();
        assert_eq!(parsed.price, 1.25);
        assert_eq!(parsed.tax, None);

        let parsed: Priced = serde_json::from_value(json!({"price": " 7 "})).unwrap();
        assert_eq!(parsed.price, 7.0);
        assert_eq!(parsed.tax, None);
    }

    #[test]
    fn test_rejects_non_numeric_and_non_finite() {
        for price in [json!("heavy"), json!("NaN"), json!("inf"), json!(true), json!([1.0])] {
            assert!(serde_json::from_value::<Priced>(json!({"price": price})).is_err());
        }
    }

    #[test]
    fn test_float_map_coerces_keys_and_values() {
        let mut de = serde_json::Deserializer::from_str(r#"{"1": "2.5", "-3": 4}"#);
        let map = float_map(&mut de).unwrap();
        assert_eq!(map.get(&1), Some(&2.5));
        assert_eq!(map.get(&-3), Some(&4.0));

        let mut de = serde_json::Deserializer::from_str(r#"{"1": "heavy"}"#);
        assert!(float_map(&mut de).is_err());
    }
}

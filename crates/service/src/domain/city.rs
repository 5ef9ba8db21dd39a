use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ServiceError;

pub const MISSING_FIELDS: &str = "city name and weight are required";

/// A weighted city. `weight` is `None` when the submitted value had no
/// leading integer; it is persisted and echoed as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub weight: Option<i64>,
}

/// Creation payload, checked for presence only.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCity {
    pub name: String,
    pub weight: Value,
}

impl NewCity {
    /// Extract `name` and `weight` from a request body.
    ///
    /// `name` must be a non-empty string. `weight` only has to be present;
    /// an explicit `null` counts as present.
    pub fn from_body(body: &Value) -> Result<Self, ServiceError> {
        let name = body.get("name").and_then(Value::as_str).filter(|n| !n.is_empty());
        let weight = body.get("weight");
        match (name, weight) {
            (Some(name), Some(weight)) => Ok(Self { name: name.to_string(), weight: weight.clone() }),
            _ => Err(ServiceError::Validation(MISSING_FIELDS.into())),
        }
    }

    pub fn into_city(self) -> City {
        let weight = coerce_weight(&self.weight);
        City { name: self.name, weight }
    }
}

/// Coerce a submitted weight to an integer, parsing the leading integer of
/// strings and truncating floats. Arrays are parsed from their comma-joined
/// text, so `[10]` gives 10. Anything else yields `None`.
pub fn coerce_weight(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            None => n
                .as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64),
        },
        Value::String(s) => parse_leading_int(s),
        Value::Array(_) => parse_leading_int(&joined_text(value)),
        _ => None,
    }
}

// 数组按逗号拼接成文本，null 为空串，对象为 "[object Object]"
fn joined_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(joined_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".into(),
        other => other.to_string(),
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    // 负数按负方向累加，i64::MIN 才不会溢出
    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        seen = true;
        let shifted = value.checked_mul(radix as i64)?;
        value = if negative { shifted.checked_sub(d as i64)? } else { shifted.checked_add(d as i64)? };
    }
    seen.then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_like_leading_integer_parse() {
        assert_eq!(coerce_weight(&json!(10)), Some(10));
        assert_eq!(coerce_weight(&json!(-3)), Some(-3));
        assert_eq!(coerce_weight(&json!(10.9)), Some(10));
        assert_eq!(coerce_weight(&json!(-2.5)), Some(-2));
        assert_eq!(coerce_weight(&json!("10")), Some(10));
        assert_eq!(coerce_weight(&json!("  42abc")), Some(42));
        assert_eq!(coerce_weight(&json!("7.9")), Some(7));
        assert_eq!(coerce_weight(&json!("-15")), Some(-15));
        assert_eq!(coerce_weight(&json!("+8")), Some(8));
        assert_eq!(coerce_weight(&json!("0x1F")), Some(31));
        assert_eq!(coerce_weight(&json!("-0x10")), Some(-16));
    }

    #[test]
    fn array_weights_parse_their_joined_text() {
        assert_eq!(coerce_weight(&json!([10])), Some(10));
        assert_eq!(coerce_weight(&json!(["12abc"])), Some(12));
        assert_eq!(coerce_weight(&json!([1, 2])), Some(1));
        assert_eq!(coerce_weight(&json!([[7]])), Some(7));
        assert_eq!(coerce_weight(&json!([])), None);
        assert_eq!(coerce_weight(&json!([null, 3])), None);
        assert_eq!(coerce_weight(&json!([{"w": 1}])), None);
    }

    #[test]
    fn integer_limits_round_trip_through_strings() {
        assert_eq!(coerce_weight(&json!("-9223372036854775808")), Some(i64::MIN));
        assert_eq!(coerce_weight(&json!("9223372036854775807")), Some(i64::MAX));
        assert_eq!(coerce_weight(&json!("9223372036854775808")), None);
        assert_eq!(coerce_weight(&json!("-9223372036854775809")), None);
    }

    #[test]
    fn non_numeric_weights_become_none() {
        assert_eq!(coerce_weight(&json!("abc")), None);
        assert_eq!(coerce_weight(&json!("")), None);
        assert_eq!(coerce_weight(&json!("-")), None);
        assert_eq!(coerce_weight(&json!("0x")), None);
        assert_eq!(coerce_weight(&json!(null)), None);
        assert_eq!(coerce_weight(&json!(true)), None);
        assert_eq!(coerce_weight(&json!({"w": 1})), None);
        assert_eq!(coerce_weight(&json!("99999999999999999999")), None);
    }

    #[test]
    fn presence_checks() {
        assert!(NewCity::from_body(&json!({"name": "Beijing", "weight": "10"})).is_ok());
        assert!(NewCity::from_body(&json!({"name": "Beijing", "weight": null})).is_ok());
        assert!(NewCity::from_body(&json!({"name": "Beijing", "weight": 0})).is_ok());

        for bad in [
            json!({"weight": 1}),
            json!({"name": "", "weight": 1}),
            json!({"name": 5, "weight": 1}),
            json!({"name": "Beijing"}),
            json!([]),
        ] {
            assert!(matches!(NewCity::from_body(&bad), Err(ServiceError::Validation(_))), "{bad}");
        }
    }

    #[test]
    fn sentinel_weight_serializes_as_null() {
        let city = NewCity { name: "Nowhere".into(), weight: json!("n/a") }.into_city();
        assert_eq!(serde_json::to_value(&city).unwrap(), json!({"name": "Nowhere", "weight": null}));
    }
}

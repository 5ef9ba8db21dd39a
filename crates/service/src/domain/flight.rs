use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A free-form flight record.
///
/// Any JSON object is accepted; only the `num` field carries meaning, as the
/// key used to address a record for update and delete.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flight(pub Map<String, Value>);

impl Flight {
    /// The addressing key, if the record has a string `num`.
    pub fn num(&self) -> Option<&str> {
        self.0.get("num").and_then(Value::as_str)
    }

    pub fn matches(&self, num: &str) -> bool {
        self.num() == Some(num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flight(v: Value) -> Flight {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn num_is_only_read_from_strings() {
        assert_eq!(flight(json!({"num": "CA123", "dest": "PVG"})).num(), Some("CA123"));
        assert_eq!(flight(json!({"num": 123})).num(), None);
        assert_eq!(flight(json!({"dest": "PVG"})).num(), None);
        assert!(!flight(json!({"num": 123})).matches("123"));
    }

    #[test]
    fn serializes_as_the_bare_object() {
        let v = json!({"num": "CA123", "dest": "PVG", "seats": [1, 2]});
        assert_eq!(serde_json::to_value(flight(v.clone())).unwrap(), v);
    }
}

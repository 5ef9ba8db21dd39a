pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(serde_json::to_value(&h).unwrap(), serde_json::json!({"status": "ok"}));
    }
}

use serde::{Deserialize, Serialize};

/// JSON envelope wrapping every backend response: `{ "message": ..., "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub message: String,
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_optional() {
        let envelope: ApiEnvelope<Vec<i32>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(envelope.message, "");
        assert_eq!(envelope.data, vec![1, 2]);
    }
}

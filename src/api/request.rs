//! Request types for the Travel Settlement Engine API.

use serde::{Deserialize, Serialize};

/// Request body for the `/parse` and `/report` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    /// The pasted travel report, one entry per line.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_request() {
        let json = r#"{"text": "【ピノ】山田 1/5(月)A→B 3km"}"#;
        let request: ParseRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.text, "【ピノ】山田 1/5(月)A→B 3km");
    }

    #[test]
    fn test_missing_text_fails() {
        let result = serde_json::from_str::<ParseRequest>("{}");
        assert!(result.unwrap_err().to_string().contains("missing field"));
    }
}

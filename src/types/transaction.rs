//! Semantic transaction shapes exchanged with the wallet collaborator.
//!
//! The SDK only constructs *what* to call — target and arguments. Signing,
//! byte encoding, and broadcast are owned entirely by the wallet side of the
//! boundary.

use serde::{Deserialize, Serialize};

use crate::types::ObjectId;

/// One argument of a Move entry-function call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallArg {
    /// A shared or owned on-chain object, referenced by id.
    Object { id: ObjectId },
    /// A pure value, serialized as JSON; the wallet owns the BCS encoding.
    Pure { value: serde_json::Value },
}

impl CallArg {
    pub fn object(id: &ObjectId) -> Self {
        CallArg::Object { id: id.clone() }
    }

    pub fn pure(value: impl Into<serde_json::Value>) -> Self {
        CallArg::Pure {
            value: value.into(),
        }
    }
}

/// A fully specified Move entry-function call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveCall {
    pub package: ObjectId,
    pub module: String,
    pub function: String,
    pub arguments: Vec<CallArg>,
}

impl MoveCall {
    /// `package::module::function` target string.
    pub fn target(&self) -> String {
        format!("{}::{}::{}", self.package, self.module, self.function)
    }
}

/// Execution status reported back by the wallet collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxStatus {
    Success,
    Failure,
}

/// Wallet-reported result of a signed and broadcast transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxResponse {
    /// Chain-assigned transaction digest.
    pub digest: String,
    pub status: TxStatus,
    /// Failure detail, when the chain rejected the call.
    #[serde(default)]
    pub error: Option<String>,
}

impl TxResponse {
    pub fn is_success(&self) -> bool {
        self.status == TxStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_target_format() {
        let call = MoveCall {
            package: ObjectId::from_str("0xabc").expect("valid id"),
            module: "vote".to_string(),
            function: "vote".to_string(),
            arguments: Vec::new(),
        };
        assert!(call.target().ends_with("abc::vote::vote"));
    }

    #[test]
    fn test_call_arg_serialization() {
        let arg = CallArg::pure(7u64);
        let json = serde_json::to_value(&arg).expect("serializes");
        assert_eq!(json["kind"], "pure");
        assert_eq!(json["value"], 7);

        let obj = CallArg::object(&ObjectId::from_str("0x6").expect("valid id"));
        let json = serde_json::to_value(&obj).expect("serializes");
        assert_eq!(json["kind"], "object");
    }

    #[test]
    fn test_tx_response_status() {
        let ok: TxResponse = serde_json::from_value(serde_json::json!({
            "digest": "Dig1", "status": "success"
        }))
        .expect("deserializes");
        assert!(ok.is_success());
        assert!(ok.error.is_none());

        let failed: TxResponse = serde_json::from_value(serde_json::json!({
            "digest": "Dig2", "status": "failure", "error": "deadline passed"
        }))
        .expect("deserializes");
        assert!(!failed.is_success());
    }
}

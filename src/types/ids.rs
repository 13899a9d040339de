//! Validated identifier newtypes for on-chain object ids and account addresses.
//!
//! Both kinds are `0x`-prefixed hex tokens. Short forms (e.g. `0x6` for the
//! clock object) are accepted and canonicalized to the padded 32-byte form the
//! chain reports, so ids compare equal regardless of how they were written.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical length of an id in hex digits (32 bytes).
const CANONICAL_HEX_LEN: usize = 64;

/// Error when a string is not a valid object id or address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid identifier '{value}': {reason}")]
pub struct InvalidIdError {
    /// The rejected input
    pub value: String,
    /// Why it was rejected
    pub reason: String,
}

impl InvalidIdError {
    fn new(value: &str, reason: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Validate and canonicalize a `0x`-prefixed hex token to its padded
/// lowercase form.
fn canonicalize(value: &str) -> Result<String, InvalidIdError> {
    let stripped = value
        .strip_prefix("0x")
        .ok_or_else(|| InvalidIdError::new(value, "missing 0x prefix"))?;
    if stripped.is_empty() {
        return Err(InvalidIdError::new(value, "no hex digits after 0x"));
    }
    if stripped.len() > CANONICAL_HEX_LEN {
        return Err(InvalidIdError::new(
            value,
            format!("longer than {} hex digits", CANONICAL_HEX_LEN),
        ));
    }
    let padded = format!("{:0>width$}", stripped, width = CANONICAL_HEX_LEN);
    let bytes = hex::decode(&padded).map_err(|_| InvalidIdError::new(value, "non-hex digits"))?;
    Ok(format!("0x{}", hex::encode(bytes)))
}

macro_rules! hex_identifier {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// The canonical string form (`0x` + 64 lowercase hex digits).
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = InvalidIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                canonicalize(s).map(Self)
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidIdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

hex_identifier!(
    ObjectId,
    "Identifier of an on-chain object (the DAO, a proposal, a capability)."
);
hex_identifier!(SuiAddress, "Account address of a voter or admin.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_form_is_canonicalized() {
        let id: ObjectId = "0x6".parse().expect("valid short id");
        assert_eq!(id.as_str().len(), 2 + CANONICAL_HEX_LEN);
        assert!(id.as_str().ends_with("0006"));

        let full: ObjectId = id.as_str().parse().expect("canonical form parses");
        assert_eq!(id, full);
    }

    #[test]
    fn test_uppercase_hex_is_normalized() {
        let a: SuiAddress = "0xABCDEF".parse().expect("valid");
        let b: SuiAddress = "0xabcdef".parse().expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!("deadbeef".parse::<ObjectId>().is_err());
        assert!("0x".parse::<ObjectId>().is_err());
        assert!("0xzz".parse::<ObjectId>().is_err());
        let too_long = format!("0x{}", "a".repeat(65));
        assert!(too_long.parse::<ObjectId>().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let id: ObjectId = "0x2a".parse().expect("valid");
        let json = serde_json::to_string(&id).expect("serializes");
        let back: ObjectId = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(id, back);

        let err: Result<ObjectId, _> = serde_json::from_str("\"not-an-id\"");
        assert!(err.is_err());
    }
}

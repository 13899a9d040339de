//! Admin gating: does an address own the DAO's admin capability?

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::core::constants::VOTE_MODULE;
use crate::errors::{DaoResult, ShapeError};
use crate::rpc::SuiRpcClient;
use crate::types::SuiAddress;

#[derive(Debug, Deserialize)]
struct OwnedObjectsPage {
    data: Vec<Value>,
}

/// Fully qualified struct type of the admin capability.
pub fn admin_cap_type(config: &Config) -> String {
    format!("{}::{}::AdminCap", config.package_id, VOTE_MODULE)
}

/// Check whether `address` owns an admin capability object.
///
/// A pure existence check (count > 0) delegated to the chain; capability
/// semantics live entirely in the Move module.
pub async fn is_admin(
    client: &SuiRpcClient,
    config: &Config,
    address: &SuiAddress,
) -> DaoResult<bool> {
    let payload = client
        .get_owned_objects(address, &admin_cap_type(config))
        .await?;
    let page: OwnedObjectsPage = serde_json::from_value(payload)
        .map_err(|e| ShapeError::new(format!("unexpected owned-objects payload: {e}")))?;
    let admin = !page.data.is_empty();
    debug!(address = %address, admin, "admin capability check");
    Ok(admin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn config() -> Config {
        Config::new(
            "0xabc".parse().expect("valid id"),
            "0xdef".parse().expect("valid id"),
            "0x123".parse().expect("valid id"),
        )
    }

    #[test]
    fn test_admin_cap_type_targets_vote_module() {
        let cap = admin_cap_type(&config());
        assert!(cap.ends_with("::vote::AdminCap"));
        assert!(cap.starts_with("0x"));
    }

    #[test]
    fn test_owned_page_shapes() {
        let empty: OwnedObjectsPage =
            serde_json::from_value(serde_json::json!({ "data": [], "hasNextPage": false }))
                .expect("deserializes");
        assert!(empty.data.is_empty());

        let one: OwnedObjectsPage = serde_json::from_value(serde_json::json!({
            "data": [ { "data": { "objectId": "0x1" } } ],
            "hasNextPage": false
        }))
        .expect("deserializes");
        assert_eq!(one.data.len(), 1);
    }
}

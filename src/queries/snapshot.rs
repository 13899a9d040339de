//! Snapshot reader: fetches the DAO object and normalizes its proposals.
//!
//! The chain serializes u64 fields as JSON strings and nests proposal data
//! under `data.content.fields`; everything is validated here, at the
//! boundary, so no loosely shaped value ever reaches the engines. A payload
//! that does not match fails the whole fetch — rendering zero proposals
//! because of a shape mismatch would be indistinguishable from "no proposals
//! exist".

use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::{DaoResult, ShapeError};
use crate::rpc::SuiRpcClient;
use crate::types::{ObjectId, Proposal, Snapshot, SuiAddress};

/// Object kind the DAO aggregate must report.
const MOVE_OBJECT_KIND: &str = "moveObject";

#[derive(Debug, Deserialize)]
struct GetObjectResponse {
    data: Option<ObjectData>,
}

#[derive(Debug, Deserialize)]
struct ObjectData {
    content: Option<ObjectContent>,
}

#[derive(Debug, Deserialize)]
struct ObjectContent {
    #[serde(rename = "dataType")]
    data_type: String,
    fields: DaoFields,
}

#[derive(Debug, Deserialize)]
struct DaoFields {
    proposals: Vec<ProposalEntry>,
}

#[derive(Debug, Deserialize)]
struct ProposalEntry {
    fields: RawProposal,
}

#[derive(Debug, Deserialize)]
struct RawProposal {
    id: RawUid,
    title: String,
    description: String,
    options: Vec<String>,
    votes: Vec<String>,
    deadline_ms: String,
    voters: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawUid {
    id: String,
}

/// Fetch the DAO object and return its proposals in chain-supplied order.
///
/// Transport and RPC-level failures surface as `NetworkError`; a payload
/// that does not match the expected DAO shape surfaces as `ShapeError`.
/// Neither is retried here.
pub async fn fetch_snapshot(client: &SuiRpcClient, config: &Config) -> DaoResult<Snapshot> {
    let payload = client.get_object(&config.dao_id).await?;
    let snapshot = parse_snapshot(payload)?;
    debug!(proposals = snapshot.len(), "fetched DAO snapshot");
    Ok(snapshot)
}

/// Validate a `sui_getObject` payload and normalize it into a [`Snapshot`].
pub fn parse_snapshot(payload: Value) -> Result<Snapshot, ShapeError> {
    let response: GetObjectResponse = serde_json::from_value(payload)
        .map_err(|e| ShapeError::new(format!("unexpected object payload: {e}")))?;

    let content = response
        .data
        .ok_or_else(|| ShapeError::with_field("DAO object carried no data", "data"))?
        .content
        .ok_or_else(|| ShapeError::with_field("DAO object carried no content", "data.content"))?;

    if content.data_type != MOVE_OBJECT_KIND {
        warn!(data_type = %content.data_type, "DAO object has unexpected content type");
        return Err(ShapeError::with_field(
            format!(
                "expected content type '{}', got '{}'",
                MOVE_OBJECT_KIND, content.data_type
            ),
            "data.content.dataType",
        ));
    }

    let proposals = content
        .fields
        .proposals
        .into_iter()
        .map(|entry| normalize_proposal(entry.fields))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Snapshot::new(proposals))
}

fn normalize_proposal(raw: RawProposal) -> Result<Proposal, ShapeError> {
    let id = ObjectId::from_str(&raw.id.id)
        .map_err(|e| ShapeError::with_field(e.to_string(), "proposal.id"))?;

    let votes = raw
        .votes
        .iter()
        .map(|count| parse_u64(count, "proposal.votes"))
        .collect::<Result<Vec<_>, _>>()?;

    let deadline_ms = parse_u64(&raw.deadline_ms, "proposal.deadline_ms")?;

    let voters = raw
        .voters
        .iter()
        .map(|addr| {
            SuiAddress::from_str(addr)
                .map_err(|e| ShapeError::with_field(e.to_string(), "proposal.voters"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Proposal {
        id,
        title: raw.title,
        description: raw.description,
        options: raw.options,
        votes,
        deadline_ms,
        voters,
    })
}

fn parse_u64(value: &str, field: &str) -> Result<u64, ShapeError> {
    value
        .parse::<u64>()
        .map_err(|_| ShapeError::with_field(format!("'{value}' is not a u64 counter"), field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dao_payload(proposals: Value) -> Value {
        json!({
            "data": {
                "objectId": "0x7",
                "content": {
                    "dataType": "moveObject",
                    "type": "0xabc::vote::Dao",
                    "fields": { "proposals": proposals }
                }
            }
        })
    }

    #[test]
    fn test_parse_valid_snapshot() {
        let payload = dao_payload(json!([
            {
                "type": "0xabc::vote::Proposal",
                "fields": {
                    "id": { "id": "0x11" },
                    "title": "Fund the grant",
                    "description": "Pay **5000** to the team",
                    "options": ["Yes", "No"],
                    "votes": ["3", "1"],
                    "deadline_ms": "1700000000000",
                    "voters": ["0xaa", "0xbb"]
                }
            }
        ]));
        let snapshot = parse_snapshot(payload).expect("valid payload");
        assert_eq!(snapshot.len(), 1);
        let proposal = &snapshot.proposals[0];
        assert_eq!(proposal.title, "Fund the grant");
        assert_eq!(proposal.votes, vec![3, 1]);
        assert_eq!(proposal.deadline_ms, 1_700_000_000_000);
        assert_eq!(proposal.unique_voters(), 2);
    }

    #[test]
    fn test_wrong_content_type_fails_whole_fetch() {
        let payload = json!({
            "data": {
                "content": {
                    "dataType": "package",
                    "fields": { "proposals": [] }
                }
            }
        });
        let err = parse_snapshot(payload).expect_err("must fail");
        assert_eq!(err.field.as_deref(), Some("data.content.dataType"));
    }

    #[test]
    fn test_missing_field_fails_whole_fetch() {
        // Second proposal lacks `votes`; nothing is returned for the first.
        let payload = dao_payload(json!([
            {
                "fields": {
                    "id": { "id": "0x11" },
                    "title": "A", "description": "", "options": ["Yes", "No"],
                    "votes": ["0", "0"], "deadline_ms": "1", "voters": []
                }
            },
            {
                "fields": {
                    "id": { "id": "0x12" },
                    "title": "B", "description": "", "options": ["Yes", "No"],
                    "deadline_ms": "1", "voters": []
                }
            }
        ]));
        assert!(parse_snapshot(payload).is_err());
    }

    #[test]
    fn test_non_numeric_counter_fails() {
        let payload = dao_payload(json!([
            {
                "fields": {
                    "id": { "id": "0x11" },
                    "title": "A", "description": "", "options": ["Yes"],
                    "votes": ["many"], "deadline_ms": "1", "voters": []
                }
            }
        ]));
        let err = parse_snapshot(payload).expect_err("must fail");
        assert_eq!(err.field.as_deref(), Some("proposal.votes"));
    }

    #[test]
    fn test_order_is_preserved() {
        let payload = dao_payload(json!([
            { "fields": { "id": { "id": "0x2" }, "title": "second", "description": "",
                "options": [], "votes": [], "deadline_ms": "1", "voters": [] } },
            { "fields": { "id": { "id": "0x1" }, "title": "first", "description": "",
                "options": [], "votes": [], "deadline_ms": "1", "voters": [] } }
        ]));
        let snapshot = parse_snapshot(payload).expect("valid payload");
        let titles: Vec<&str> = snapshot.proposals.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }
}

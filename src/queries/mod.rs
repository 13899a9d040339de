pub mod admin;
pub mod snapshot;

pub use admin::{admin_cap_type, is_admin};
pub use snapshot::{fetch_snapshot, parse_snapshot};

pub mod ids;
pub mod proposal;
pub mod transaction;

pub use ids::{InvalidIdError, ObjectId, SuiAddress};
pub use proposal::{Proposal, Snapshot};
pub use transaction::{CallArg, MoveCall, TxResponse, TxStatus};

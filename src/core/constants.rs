//! Fixed protocol and network constants.

/// Sui mainnet fullnode endpoint.
pub const MAINNET_FULLNODE: &str = "https://fullnode.mainnet.sui.io:443";

/// Sui testnet fullnode endpoint.
pub const TESTNET_FULLNODE: &str = "https://fullnode.testnet.sui.io:443";

/// Sui devnet fullnode endpoint.
pub const DEVNET_FULLNODE: &str = "https://fullnode.devnet.sui.io:443";

/// Local node endpoint (default `sui start` port).
pub const LOCAL_FULLNODE: &str = "http://127.0.0.1:9000";

/// Name of the Move module that owns the DAO entry functions.
pub const VOTE_MODULE: &str = "vote";

/// The shared Sui clock object, passed to every deadline-aware entry function.
pub const CLOCK_OBJECT_ID: &str = "0x6";

/// Base URL for object links on the explorer.
pub const EXPLORER_URL: &str = "https://suiscan.xyz/testnet/object";

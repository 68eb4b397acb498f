//! Network URL constants.

/// Default Solana RPC endpoint (devnet).
pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

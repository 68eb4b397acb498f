//! On-chain program interaction for the Metaplex Token Metadata program.
//!
//! Program IDs, PDA derivation, borsh argument types and the instruction
//! builders used by the create-and-mint operation.

pub mod constants;
pub mod instructions;
pub mod pda;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use instructions::{build_create_v1_ix, build_mint_v1_ix, CreateV1Params, MintV1Params};
pub use pda::*;
pub use types::*;

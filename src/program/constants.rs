//! Constants for the Metaplex Token Metadata program and the token programs
//! it drives.
//!
//! Program IDs, instruction discriminators, PDA seeds and the on-chain
//! metadata limits enforced by the program.

use solana_pubkey::Pubkey;
use std::str::FromStr;

// ============================================================================
// Program IDs
// ============================================================================

lazy_static::lazy_static! {
    /// Metaplex Token Metadata Program ID
    pub static ref TOKEN_METADATA_PROGRAM_ID: Pubkey = Pubkey::from_str("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s").unwrap();

    /// Metaplex Candy Machine Core Program ID
    pub static ref CANDY_MACHINE_CORE_PROGRAM_ID: Pubkey = Pubkey::from_str("CndyV3LdqHUfDLmE5naZjVN8rBZz4tqhdefbAnjHG3JR").unwrap();

    /// Metaplex Candy Guard Program ID
    pub static ref CANDY_GUARD_PROGRAM_ID: Pubkey = Pubkey::from_str("Guard1JwRhJkVH6XZhzoYxeBVQe872VH6QggF4BWmS9g").unwrap();
}

/// SPL Token Program ID
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;

/// Token-2022 Program ID
pub const TOKEN_2022_PROGRAM_ID: Pubkey = spl_token_2022::ID;

/// Associated Token Account Program ID
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;

/// System Program ID
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk_ids::system_program::ID;

/// Instructions Sysvar ID (read by the metadata program for CPI guards)
pub const INSTRUCTIONS_SYSVAR_ID: Pubkey = solana_sdk_ids::sysvar::instructions::ID;

// ============================================================================
// Instruction Discriminators
// ============================================================================

/// Token Metadata instruction discriminators (single byte indices)
pub mod instruction {
    pub const CREATE: u8 = 42;
    pub const MINT: u8 = 43;
}

// ============================================================================
// PDA Seeds
// ============================================================================

/// Metadata PDA prefix
pub const METADATA_SEED: &[u8] = b"metadata";

// ============================================================================
// Limits
// ============================================================================

/// Maximum length of the asset name in bytes
pub const MAX_NAME_LENGTH: usize = 32;
/// Maximum length of the asset symbol in bytes
pub const MAX_SYMBOL_LENGTH: usize = 10;
/// Maximum length of the content URI in bytes
pub const MAX_URI_LENGTH: usize = 200;
/// Maximum seller fee (100%)
pub const MAX_SELLER_FEE_BASIS_POINTS: u16 = 10_000;
/// Maximum number of creators on a metadata account
pub const MAX_CREATOR_LIMIT: usize = 5;

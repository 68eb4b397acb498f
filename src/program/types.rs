//! Argument types for the Token Metadata `Create` and `Mint` instructions.
//!
//! Field order and variant order match the on-chain program's borsh layout;
//! do not reorder.

use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

use crate::program::constants::{TOKEN_2022_PROGRAM_ID, TOKEN_PROGRAM_ID};

// ============================================================================
// Enums
// ============================================================================

/// Asset semantics recorded on the metadata account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum TokenStandard {
    NonFungible,
    FungibleAsset,
    Fungible,
    NonFungibleEdition,
    ProgrammableNonFungible,
    ProgrammableNonFungibleEdition,
}

impl TokenStandard {
    /// Whether the standard describes a fungible (divisible supply) asset.
    pub fn is_fungible(&self) -> bool {
        matches!(self, Self::Fungible | Self::FungibleAsset)
    }
}

/// Token program that owns the mint account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenProgram {
    #[default]
    Spl,
    Token2022,
}

impl TokenProgram {
    pub fn id(&self) -> Pubkey {
        match self {
            Self::Spl => TOKEN_PROGRAM_ID,
            Self::Token2022 => TOKEN_2022_PROGRAM_ID,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum UseMethod {
    Burn,
    Multiple,
    Single,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum PrintSupply {
    Zero,
    Limited(u64),
    Unlimited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum CollectionDetails {
    V1 { size: u64 },
    V2 { padding: [u8; 8] },
}

// ============================================================================
// Structs
// ============================================================================

/// A creator entry; shares across all creators must sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Creator {
    pub address: Pubkey,
    pub verified: bool,
    pub share: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Collection {
    pub verified: bool,
    pub key: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Uses {
    pub use_method: UseMethod,
    pub remaining: u64,
    pub total: u64,
}

/// Metadata written to the metadata account on creation.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct AssetData {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Option<Vec<Creator>>,
    pub primary_sale_happened: bool,
    pub is_mutable: bool,
    pub token_standard: TokenStandard,
    pub collection: Option<Collection>,
    pub uses: Option<Uses>,
    pub collection_details: Option<CollectionDetails>,
    pub rule_set: Option<Pubkey>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum CreateArgs {
    V1 {
        asset_data: AssetData,
        decimals: Option<u8>,
        print_supply: Option<PrintSupply>,
    },
}

// ============================================================================
// Authorization (programmable assets only; always `None` for fungibles)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct SeedsVec {
    pub seeds: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ProofInfo {
    pub proof: Vec<[u8; 32]>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum PayloadType {
    Pubkey(Pubkey),
    Seeds(SeedsVec),
    MerkleProof(ProofInfo),
    Number(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Payload {
    pub map: BTreeMap<String, PayloadType>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct AuthorizationData {
    pub payload: Payload,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum MintArgs {
    V1 {
        amount: u64,
        authorization_data: Option<AuthorizationData>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_standard_wire_index() {
        assert_eq!(borsh::to_vec(&TokenStandard::NonFungible).unwrap(), vec![0]);
        assert_eq!(borsh::to_vec(&TokenStandard::Fungible).unwrap(), vec![2]);
        assert_eq!(
            borsh::to_vec(&TokenStandard::ProgrammableNonFungibleEdition).unwrap(),
            vec![5]
        );
    }

    #[test]
    fn test_is_fungible() {
        assert!(TokenStandard::Fungible.is_fungible());
        assert!(TokenStandard::FungibleAsset.is_fungible());
        assert!(!TokenStandard::NonFungible.is_fungible());
        assert!(!TokenStandard::ProgrammableNonFungible.is_fungible());
    }

    #[test]
    fn test_mint_args_layout() {
        let args = MintArgs::V1 {
            amount: 100_000_000_000_000,
            authorization_data: None,
        };
        let data = borsh::to_vec(&args).unwrap();

        // [variant (1)][amount (8 LE)][authorization_data: None (1)]
        assert_eq!(data.len(), 10);
        assert_eq!(data[0], 0);
        assert_eq!(&data[1..9], &100_000_000_000_000u64.to_le_bytes());
        assert_eq!(data[9], 0);
    }

    #[test]
    fn test_token_program_ids() {
        assert_eq!(TokenProgram::default(), TokenProgram::Spl);
        assert_eq!(TokenProgram::Spl.id(), TOKEN_PROGRAM_ID);
        assert_eq!(TokenProgram::Token2022.id(), TOKEN_2022_PROGRAM_ID);
    }
}

//! Instruction builders for the Token Metadata `CreateV1` and `MintV1`
//! instructions.
//!
//! Optional accounts that are not supplied are passed as the Token Metadata
//! program ID, which the program reads as "none".

use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::error::{MintError, MintResult};
use crate::program::constants::{
    instruction, ASSOCIATED_TOKEN_PROGRAM_ID, INSTRUCTIONS_SYSVAR_ID, SYSTEM_PROGRAM_ID,
};
use crate::program::pda::{get_associated_token_address, get_metadata_pda};
use crate::program::types::{AssetData, CreateArgs, MintArgs};

// ============================================================================
// Helper Functions
// ============================================================================

/// Create an account meta for a signer+writable account.
fn signer_mut(pubkey: Pubkey) -> AccountMeta {
    AccountMeta::new(pubkey, true)
}

/// Create an account meta for a read-only signer.
fn signer(pubkey: Pubkey) -> AccountMeta {
    AccountMeta::new_readonly(pubkey, true)
}

/// Create an account meta for a writable account.
fn writable(pubkey: Pubkey) -> AccountMeta {
    AccountMeta::new(pubkey, false)
}

/// Create an account meta for a read-only account.
fn readonly(pubkey: Pubkey) -> AccountMeta {
    AccountMeta::new_readonly(pubkey, false)
}

/// Prefix borsh-encoded arguments with the instruction discriminator.
fn encode<T: borsh::BorshSerialize>(discriminator: u8, args: &T) -> MintResult<Vec<u8>> {
    let mut data = vec![discriminator];
    args.serialize(&mut data)
        .map_err(|e| MintError::Serialization(e.to_string()))?;
    Ok(data)
}

// ============================================================================
// Params
// ============================================================================

/// Accounts and arguments for `CreateV1`.
#[derive(Debug, Clone)]
pub struct CreateV1Params {
    /// New mint account; signs so the program can allocate it
    pub mint: Pubkey,
    pub authority: Pubkey,
    pub payer: Pubkey,
    pub update_authority: Pubkey,
    /// Whether `update_authority` signs the transaction
    pub update_authority_signs: bool,
    pub token_program: Pubkey,
    pub asset_data: AssetData,
    pub decimals: u8,
}

/// Accounts and arguments for `MintV1`.
#[derive(Debug, Clone)]
pub struct MintV1Params {
    pub mint: Pubkey,
    pub token_owner: Pubkey,
    pub authority: Pubkey,
    pub payer: Pubkey,
    pub token_program: Pubkey,
    pub amount: u64,
}

// ============================================================================
// Instruction Builders
// ============================================================================

/// Build CreateV1 instruction.
///
/// Allocates and initializes the mint, then writes its metadata account.
///
/// Accounts:
/// 0. metadata (mut) - Metadata PDA
/// 1. master_edition (readonly) - none for fungibles
/// 2. mint (signer, mut)
/// 3. authority (signer) - Mint authority
/// 4. payer (signer, mut)
/// 5. update_authority (signer if it signs)
/// 6. system_program (readonly)
/// 7. sysvar_instructions (readonly)
/// 8. spl_token_program (readonly)
pub fn build_create_v1_ix(params: &CreateV1Params, program_id: &Pubkey) -> MintResult<Instruction> {
    let (metadata, _) = get_metadata_pda(&params.mint, program_id);

    let update_authority = if params.update_authority_signs {
        signer(params.update_authority)
    } else {
        readonly(params.update_authority)
    };

    let keys = vec![
        writable(metadata),
        readonly(*program_id),
        signer_mut(params.mint),
        signer(params.authority),
        signer_mut(params.payer),
        update_authority,
        readonly(SYSTEM_PROGRAM_ID),
        readonly(INSTRUCTIONS_SYSVAR_ID),
        readonly(params.token_program),
    ];

    // Data: [discriminator, CreateArgs::V1 (borsh)]
    let args = CreateArgs::V1 {
        asset_data: params.asset_data.clone(),
        decimals: Some(params.decimals),
        print_supply: None,
    };

    Ok(Instruction {
        program_id: *program_id,
        accounts: keys,
        data: encode(instruction::CREATE, &args)?,
    })
}

/// Build MintV1 instruction.
///
/// Creates the owner's associated token account if needed and mints
/// `amount` base units into it.
///
/// Accounts:
/// 0. token (mut) - Owner's ATA
/// 1. token_owner (readonly)
/// 2. metadata (readonly)
/// 3. master_edition (readonly) - none
/// 4. token_record (readonly) - none
/// 5. mint (mut)
/// 6. authority (signer)
/// 7. delegate_record (readonly) - none
/// 8. payer (signer, mut)
/// 9. system_program (readonly)
/// 10. sysvar_instructions (readonly)
/// 11. spl_token_program (readonly)
/// 12. spl_ata_program (readonly)
/// 13. authorization_rules_program (readonly) - none
/// 14. authorization_rules (readonly) - none
pub fn build_mint_v1_ix(params: &MintV1Params, program_id: &Pubkey) -> MintResult<Instruction> {
    let (metadata, _) = get_metadata_pda(&params.mint, program_id);
    let token = get_associated_token_address(&params.token_owner, &params.mint, &params.token_program);

    let keys = vec![
        writable(token),
        readonly(params.token_owner),
        readonly(metadata),
        readonly(*program_id),
        readonly(*program_id),
        writable(params.mint),
        signer(params.authority),
        readonly(*program_id),
        signer_mut(params.payer),
        readonly(SYSTEM_PROGRAM_ID),
        readonly(INSTRUCTIONS_SYSVAR_ID),
        readonly(params.token_program),
        readonly(ASSOCIATED_TOKEN_PROGRAM_ID),
        readonly(*program_id),
        readonly(*program_id),
    ];

    // Data: [discriminator, MintArgs::V1 (borsh)]
    let args = MintArgs::V1 {
        amount: params.amount,
        authorization_data: None,
    };

    Ok(Instruction {
        program_id: *program_id,
        accounts: keys,
        data: encode(instruction::MINT, &args)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::constants::{TOKEN_METADATA_PROGRAM_ID, TOKEN_PROGRAM_ID};
    use crate::program::types::TokenStandard;
    use borsh::BorshDeserialize;
    use solana_keypair::Keypair;
    use solana_signer::Signer;

    fn asset_data() -> AssetData {
        AssetData {
            name: "Test".to_string(),
            symbol: "TST".to_string(),
            uri: "https://example.com/test.json".to_string(),
            seller_fee_basis_points: 0,
            creators: None,
            primary_sale_happened: false,
            is_mutable: true,
            token_standard: TokenStandard::Fungible,
            collection: None,
            uses: None,
            collection_details: None,
            rule_set: None,
        }
    }

    #[test]
    fn test_build_create_v1_ix() {
        let mint = Keypair::new().pubkey();
        let authority = Keypair::new().pubkey();
        let params = CreateV1Params {
            mint,
            authority,
            payer: authority,
            update_authority: authority,
            update_authority_signs: true,
            token_program: TOKEN_PROGRAM_ID,
            asset_data: asset_data(),
            decimals: 6,
        };

        let ix = build_create_v1_ix(&params, &TOKEN_METADATA_PROGRAM_ID).unwrap();

        assert_eq!(ix.program_id, *TOKEN_METADATA_PROGRAM_ID);
        assert_eq!(ix.accounts.len(), 9);
        assert_eq!(ix.accounts[0].pubkey, get_metadata_pda(&mint, &TOKEN_METADATA_PROGRAM_ID).0);
        assert!(ix.accounts[2].is_signer && ix.accounts[2].is_writable);
        assert!(ix.accounts[5].is_signer);
        assert_eq!(ix.data[0], instruction::CREATE);

        let args = CreateArgs::try_from_slice(&ix.data[1..]).unwrap();
        let CreateArgs::V1 { asset_data: decoded, decimals, print_supply } = args;
        assert_eq!(decoded, asset_data());
        assert_eq!(decimals, Some(6));
        assert_eq!(print_supply, None);
    }

    #[test]
    fn test_update_authority_not_signing() {
        let authority = Keypair::new().pubkey();
        let params = CreateV1Params {
            mint: Keypair::new().pubkey(),
            authority,
            payer: authority,
            update_authority: Keypair::new().pubkey(),
            update_authority_signs: false,
            token_program: TOKEN_PROGRAM_ID,
            asset_data: asset_data(),
            decimals: 0,
        };

        let ix = build_create_v1_ix(&params, &TOKEN_METADATA_PROGRAM_ID).unwrap();
        assert!(!ix.accounts[5].is_signer);
    }

    #[test]
    fn test_build_mint_v1_ix() {
        let mint = Keypair::new().pubkey();
        let owner = Keypair::new().pubkey();
        let authority = Keypair::new().pubkey();
        let params = MintV1Params {
            mint,
            token_owner: owner,
            authority,
            payer: authority,
            token_program: TOKEN_PROGRAM_ID,
            amount: 42,
        };

        let ix = build_mint_v1_ix(&params, &TOKEN_METADATA_PROGRAM_ID).unwrap();

        assert_eq!(ix.accounts.len(), 15);
        assert_eq!(
            ix.accounts[0].pubkey,
            get_associated_token_address(&owner, &mint, &TOKEN_PROGRAM_ID)
        );
        assert_eq!(ix.accounts[1].pubkey, owner);
        assert_eq!(ix.accounts[12].pubkey, ASSOCIATED_TOKEN_PROGRAM_ID);
        assert_eq!(ix.data[0], instruction::MINT);

        let MintArgs::V1 { amount, authorization_data } =
            MintArgs::try_from_slice(&ix.data[1..]).unwrap();
        assert_eq!(amount, 42);
        assert!(authorization_data.is_none());
    }
}

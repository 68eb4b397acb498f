//! PDA (Program Derived Address) derivation functions.

use solana_pubkey::Pubkey;

use crate::program::constants::{ASSOCIATED_TOKEN_PROGRAM_ID, METADATA_SEED};

/// Get the Metadata PDA for a mint.
///
/// Seeds: ["metadata", token_metadata_program, mint]
pub fn get_metadata_pda(mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[METADATA_SEED, program_id.as_ref(), mint.as_ref()],
        program_id,
    )
}

/// Get the Associated Token Address for a wallet and mint.
///
/// Uses the standard Solana ATA derivation.
pub fn get_associated_token_address(
    wallet: &Pubkey,
    mint: &Pubkey,
    token_program_id: &Pubkey,
) -> Pubkey {
    Pubkey::find_program_address(
        &[wallet.as_ref(), token_program_id.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
    .0
}

//! Create-and-mint: describe a new fungible asset, create it through the
//! Token Metadata program and credit its initial supply to an owner.
//!
//! The flow is two explicit steps:
//!
//! ```rust,ignore
//! let descriptor = MintDescriptor::builder()
//!     .name("BPINKY")
//!     .symbol("BPINKY")
//!     .uri("https://example.com/bpinky.json")
//!     .decimals(8)
//!     .amount(100_000_000_000_000)
//!     .build()?;
//!
//! let request = CreateAndMint::new(&ctx, descriptor, owner)?;
//! let outcome = request.send_and_confirm(&ctx.rpc_client()).await?;
//! ```

use rust_decimal::Decimal;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_hash::Hash;
use solana_instruction::Instruction;
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_signer::Signer;
use solana_transaction::Transaction;

use crate::context::ClientContext;
use crate::error::{MintError, MintResult};
use crate::program::constants::{
    MAX_CREATOR_LIMIT, MAX_NAME_LENGTH, MAX_SELLER_FEE_BASIS_POINTS, MAX_SYMBOL_LENGTH,
    MAX_URI_LENGTH,
};
use crate::program::instructions::{
    build_create_v1_ix, build_mint_v1_ix, CreateV1Params, MintV1Params,
};
use crate::program::pda::{get_associated_token_address, get_metadata_pda};
use crate::program::types::{AssetData, Creator, TokenProgram, TokenStandard};
use crate::shared::scaling::{to_base_units, to_whole_tokens, MAX_SCALE_DECIMALS};

// ============================================================================
// Descriptor
// ============================================================================

/// Describes the asset to create. The generated mint keypair becomes the
/// asset's permanent address.
#[derive(Debug)]
pub struct MintDescriptor {
    mint: Keypair,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
    pub seller_fee_basis_points: u16,
    /// Initial supply in base units
    pub amount: u64,
    pub token_standard: TokenStandard,
    pub token_program: TokenProgram,
    /// `None` makes the authority the sole verified creator.
    pub creators: Option<Vec<Creator>>,
    pub is_mutable: bool,
}

impl MintDescriptor {
    pub fn builder() -> MintDescriptorBuilder {
        MintDescriptorBuilder::default()
    }

    /// Address of the asset to be created.
    pub fn mint_address(&self) -> Pubkey {
        self.mint.pubkey()
    }

    pub fn mint_keypair(&self) -> &Keypair {
        &self.mint
    }

    /// Initial supply expressed in whole tokens.
    pub fn whole_tokens(&self) -> MintResult<Decimal> {
        Ok(to_whole_tokens(self.amount, self.decimals)?)
    }

    fn asset_data(&self, authority: &Pubkey) -> AssetData {
        let creators = self.creators.clone().unwrap_or_else(|| {
            vec![Creator {
                address: *authority,
                verified: true,
                share: 100,
            }]
        });

        AssetData {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            uri: self.uri.clone(),
            seller_fee_basis_points: self.seller_fee_basis_points,
            creators: Some(creators),
            primary_sale_happened: false,
            is_mutable: self.is_mutable,
            token_standard: self.token_standard,
            collection: None,
            uses: None,
            collection_details: None,
            rule_set: None,
        }
    }
}

/// Supply given either in base units or in whole tokens.
#[derive(Debug, Clone, Copy)]
enum Supply {
    BaseUnits(u64),
    Whole(Decimal),
}

/// Builder for [`MintDescriptor`] with a fluent API.
///
/// Required: `name`, `symbol`, `uri`, and one of `amount` / `supply`.
#[derive(Debug, Default)]
pub struct MintDescriptorBuilder {
    mint: Option<Keypair>,
    name: Option<String>,
    symbol: Option<String>,
    uri: Option<String>,
    decimals: Option<u8>,
    seller_fee_basis_points: u16,
    supply: Option<Supply>,
    token_standard: Option<TokenStandard>,
    token_program: TokenProgram,
    creators: Option<Vec<Creator>>,
    immutable: bool,
}

impl MintDescriptorBuilder {
    /// Use a specific mint keypair instead of generating a fresh one.
    pub fn mint(mut self, mint: Keypair) -> Self {
        self.mint = Some(mint);
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    pub fn uri(mut self, uri: &str) -> Self {
        self.uri = Some(uri.to_string());
        self
    }

    /// Set decimals (default 0).
    pub fn decimals(mut self, decimals: u8) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Set the seller fee in basis points (default 0).
    pub fn seller_fee_basis_points(mut self, bps: u16) -> Self {
        self.seller_fee_basis_points = bps;
        self
    }

    /// Set the initial supply in base units.
    pub fn amount(mut self, amount: u64) -> Self {
        self.supply = Some(Supply::BaseUnits(amount));
        self
    }

    /// Set the initial supply in whole tokens; scaled by `decimals` on build.
    pub fn supply(mut self, whole_tokens: Decimal) -> Self {
        self.supply = Some(Supply::Whole(whole_tokens));
        self
    }

    /// Set the token standard (default `Fungible`).
    pub fn token_standard(mut self, standard: TokenStandard) -> Self {
        self.token_standard = Some(standard);
        self
    }

    pub fn token_program(mut self, program: TokenProgram) -> Self {
        self.token_program = program;
        self
    }

    pub fn creators(mut self, creators: Vec<Creator>) -> Self {
        self.creators = Some(creators);
        self
    }

    /// Lock the metadata against later updates.
    pub fn immutable(mut self) -> Self {
        self.immutable = true;
        self
    }

    /// Validate against the on-chain limits and build the descriptor.
    pub fn build(self) -> MintResult<MintDescriptor> {
        let name = require(self.name, "name")?;
        let symbol = require(self.symbol, "symbol")?;
        let uri = require(self.uri, "uri")?;
        let supply = self
            .supply
            .ok_or_else(|| MintError::Configuration("amount is required".to_string()))?;
        let token_standard = self.token_standard.unwrap_or(TokenStandard::Fungible);

        check_len("name", &name, MAX_NAME_LENGTH)?;
        check_len("symbol", &symbol, MAX_SYMBOL_LENGTH)?;
        check_len("uri", &uri, MAX_URI_LENGTH)?;

        if self.seller_fee_basis_points > MAX_SELLER_FEE_BASIS_POINTS {
            return Err(MintError::Configuration(format!(
                "seller fee {} bps exceeds {}",
                self.seller_fee_basis_points, MAX_SELLER_FEE_BASIS_POINTS
            )));
        }

        if !token_standard.is_fungible() {
            return Err(MintError::Configuration(format!(
                "{:?} is not a fungible token standard",
                token_standard
            )));
        }

        let decimals = self.decimals.unwrap_or(0);
        if decimals > MAX_SCALE_DECIMALS {
            return Err(MintError::Configuration(format!(
                "decimals {} exceeds {}",
                decimals, MAX_SCALE_DECIMALS
            )));
        }
        if token_standard == TokenStandard::FungibleAsset && decimals != 0 {
            return Err(MintError::Configuration(
                "FungibleAsset requires 0 decimals".to_string(),
            ));
        }

        let amount = match supply {
            Supply::BaseUnits(amount) => amount,
            Supply::Whole(whole) => to_base_units(whole, decimals)?,
        };
        if amount == 0 {
            return Err(MintError::Configuration("amount must be greater than 0".to_string()));
        }

        if let Some(creators) = &self.creators {
            validate_creators(creators)?;
        }

        Ok(MintDescriptor {
            mint: self.mint.unwrap_or_else(Keypair::new),
            name,
            symbol,
            uri,
            decimals,
            seller_fee_basis_points: self.seller_fee_basis_points,
            amount,
            token_standard,
            token_program: self.token_program,
            creators: self.creators,
            is_mutable: !self.immutable,
        })
    }
}

fn require(value: Option<String>, field: &str) -> MintResult<String> {
    value.ok_or_else(|| MintError::Configuration(format!("{} is required", field)))
}

fn check_len(field: &str, value: &str, max: usize) -> MintResult<()> {
    if value.len() > max {
        return Err(MintError::Configuration(format!(
            "{} is {} bytes (max {})",
            field,
            value.len(),
            max
        )));
    }
    Ok(())
}

fn validate_creators(creators: &[Creator]) -> MintResult<()> {
    if creators.is_empty() || creators.len() > MAX_CREATOR_LIMIT {
        return Err(MintError::Configuration(format!(
            "creator count {} (must be 1-{})",
            creators.len(),
            MAX_CREATOR_LIMIT
        )));
    }
    let total: u32 = creators.iter().map(|c| c.share as u32).sum();
    if total != 100 {
        return Err(MintError::Configuration(format!(
            "creator shares sum to {} (must be 100)",
            total
        )));
    }
    Ok(())
}

// ============================================================================
// Submission seam
// ============================================================================

/// Network operations the create-and-mint flow needs. Implemented for the
/// nonblocking [`RpcClient`]; tests supply their own.
#[allow(async_fn_in_trait)]
pub trait TransactionSubmitter {
    /// Whether an account already exists at `address`.
    async fn account_exists(&self, address: &Pubkey) -> MintResult<bool>;

    async fn latest_blockhash(&self) -> MintResult<Hash>;

    /// Submit and wait for confirmation at the submitter's commitment.
    async fn send_and_confirm(&self, transaction: &Transaction) -> MintResult<Signature>;
}

impl TransactionSubmitter for RpcClient {
    async fn account_exists(&self, address: &Pubkey) -> MintResult<bool> {
        let response = self
            .get_account_with_commitment(address, self.commitment())
            .await
            .map_err(|e| MintError::Submission(e.to_string()))?;
        Ok(response.value.is_some())
    }

    async fn latest_blockhash(&self) -> MintResult<Hash> {
        self.get_latest_blockhash()
            .await
            .map_err(|e| MintError::Submission(e.to_string()))
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> MintResult<Signature> {
        self.send_and_confirm_transaction(transaction)
            .await
            .map_err(|e| MintError::Submission(e.to_string()))
    }
}

// ============================================================================
// Request
// ============================================================================

/// Result of a confirmed create-and-mint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintOutcome {
    /// Address of the new asset
    pub mint: Pubkey,
    /// Owner's token account credited with the supply
    pub token_account: Pubkey,
    pub signature: Signature,
    /// Minted supply in base units
    pub amount: u64,
    pub decimals: u8,
}

impl MintOutcome {
    pub fn whole_tokens(&self) -> MintResult<Decimal> {
        Ok(to_whole_tokens(self.amount, self.decimals)?)
    }
}

/// A pending create-and-mint: authority, descriptor and recipient bundled
/// against a context. Submitted once.
pub struct CreateAndMint<'a> {
    ctx: &'a ClientContext,
    authority: &'a Keypair,
    descriptor: MintDescriptor,
    token_owner: Pubkey,
    program_id: Pubkey,
}

impl<'a> CreateAndMint<'a> {
    /// Bundle a descriptor and recipient. The authority defaults to the
    /// context identity.
    ///
    /// Fails if the context lacks the token-metadata extension.
    pub fn new(
        ctx: &'a ClientContext,
        descriptor: MintDescriptor,
        token_owner: Pubkey,
    ) -> MintResult<Self> {
        let program_id = ctx.extensions().token_metadata()?;
        Ok(Self {
            ctx,
            authority: ctx.identity(),
            descriptor,
            token_owner,
            program_id,
        })
    }

    /// Use a mint authority other than the context identity.
    pub fn authority(mut self, authority: &'a Keypair) -> Self {
        self.authority = authority;
        self
    }

    pub fn descriptor(&self) -> &MintDescriptor {
        &self.descriptor
    }

    pub fn token_owner(&self) -> Pubkey {
        self.token_owner
    }

    /// Metadata account that will be created.
    pub fn metadata_address(&self) -> Pubkey {
        get_metadata_pda(&self.descriptor.mint_address(), &self.program_id).0
    }

    /// Owner's associated token account that receives the supply.
    pub fn token_account(&self) -> Pubkey {
        get_associated_token_address(
            &self.token_owner,
            &self.descriptor.mint_address(),
            &self.descriptor.token_program.id(),
        )
    }

    /// The `CreateV1` + `MintV1` instruction pair.
    pub fn instructions(&self) -> MintResult<Vec<Instruction>> {
        let mint = self.descriptor.mint_address();
        let authority = self.authority.pubkey();
        let payer = self.ctx.identity().pubkey();
        let token_program = self.descriptor.token_program.id();

        let create = build_create_v1_ix(
            &CreateV1Params {
                mint,
                authority,
                payer,
                update_authority: authority,
                update_authority_signs: true,
                token_program,
                asset_data: self.descriptor.asset_data(&authority),
                decimals: self.descriptor.decimals,
            },
            &self.program_id,
        )?;

        let mint_to = build_mint_v1_ix(
            &MintV1Params {
                mint,
                token_owner: self.token_owner,
                authority,
                payer,
                token_program,
                amount: self.descriptor.amount,
            },
            &self.program_id,
        )?;

        Ok(vec![create, mint_to])
    }

    /// Build and sign the transaction against `blockhash`.
    ///
    /// Signers: payer (context identity), authority and the new mint.
    pub fn build_transaction(&self, blockhash: Hash) -> MintResult<Transaction> {
        let payer = self.ctx.identity();
        let mut signers: Vec<&Keypair> = vec![payer];
        for keypair in [self.authority, self.descriptor.mint_keypair()] {
            if !signers.iter().any(|s| s.pubkey() == keypair.pubkey()) {
                signers.push(keypair);
            }
        }

        let mut tx = Transaction::new_with_payer(&self.instructions()?, Some(&payer.pubkey()));
        tx.try_sign(signers.as_slice(), blockhash)?;
        Ok(tx)
    }

    fn check_mint_identity(&self) -> MintResult<()> {
        let mint = self.descriptor.mint_address();
        if mint == self.authority.pubkey()
            || mint == self.ctx.identity().pubkey()
            || mint == self.token_owner
        {
            return Err(MintError::Configuration(format!(
                "mint {} must be a fresh keypair, not a participant",
                mint
            )));
        }
        Ok(())
    }

    /// Create the asset and mint its supply, waiting for confirmation.
    ///
    /// Timeouts and confirmation polling are owned by the submitter.
    pub async fn send_and_confirm<S: TransactionSubmitter>(
        self,
        submitter: &S,
    ) -> MintResult<MintOutcome> {
        let mint = self.descriptor.mint_address();
        self.check_mint_identity()?;

        if submitter.account_exists(&mint).await? {
            return Err(MintError::Configuration(format!(
                "mint account {} already exists",
                mint
            )));
        }

        tracing::info!(
            "Creating {} ({}) at {} for owner {}",
            self.descriptor.name,
            self.descriptor.symbol,
            mint,
            self.token_owner
        );
        tracing::debug!("Metadata account: {}", self.metadata_address());

        let blockhash = submitter.latest_blockhash().await?;
        let tx = self.build_transaction(blockhash)?;

        let signature = submitter.send_and_confirm(&tx).await?;
        tracing::info!("Confirmed create-and-mint {} (signature {})", mint, signature);

        Ok(MintOutcome {
            mint,
            token_account: self.token_account(),
            signature,
            amount: self.descriptor.amount,
            decimals: self.descriptor.decimals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::constants::{instruction, TOKEN_2022_PROGRAM_ID};
    use crate::program::types::{CreateArgs, MintArgs};
    use borsh::BorshDeserialize;
    use std::str::FromStr;

    fn descriptor() -> MintDescriptorBuilder {
        MintDescriptor::builder()
            .name("Test")
            .symbol("TST")
            .uri("https://example.com/test.json")
            .decimals(6)
            .amount(1_000_000)
    }

    fn context() -> ClientContext {
        ClientContext::builder()
            .identity(Keypair::new())
            .with_token_metadata()
            .build()
            .unwrap()
    }

    #[test]
    fn test_descriptor_defaults() {
        let d = descriptor().build().unwrap();
        assert_eq!(d.token_standard, TokenStandard::Fungible);
        assert_eq!(d.token_program, TokenProgram::Spl);
        assert_eq!(d.seller_fee_basis_points, 0);
        assert!(d.is_mutable);
        assert!(d.creators.is_none());
    }

    #[test]
    fn test_each_descriptor_gets_fresh_mint() {
        let a = descriptor().build().unwrap();
        let b = descriptor().build().unwrap();
        assert_ne!(a.mint_address(), b.mint_address());
    }

    #[test]
    fn test_supply_in_whole_tokens() {
        let d = descriptor()
            .decimals(8)
            .supply(Decimal::from_str("1000000").unwrap())
            .build()
            .unwrap();
        assert_eq!(d.amount, 100_000_000_000_000);
    }

    #[test]
    fn test_missing_fields_rejected() {
        let result = MintDescriptor::builder().name("x").symbol("x").amount(1).build();
        assert!(matches!(result, Err(MintError::Configuration(_))));
    }

    #[test]
    fn test_limits_rejected() {
        let long_name = "n".repeat(MAX_NAME_LENGTH + 1);
        assert!(descriptor().name(&long_name).build().is_err());
        assert!(descriptor().symbol("ELEVENCHARS").build().is_err());
        assert!(descriptor().seller_fee_basis_points(10_001).build().is_err());
        assert!(descriptor().amount(0).build().is_err());
        assert!(descriptor().decimals(20).build().is_err());
    }

    #[test]
    fn test_non_fungible_standard_rejected() {
        let result = descriptor().token_standard(TokenStandard::NonFungible).build();
        assert!(matches!(result, Err(MintError::Configuration(_))));
    }

    #[test]
    fn test_fungible_asset_requires_zero_decimals() {
        assert!(descriptor()
            .token_standard(TokenStandard::FungibleAsset)
            .build()
            .is_err());
        assert!(descriptor()
            .token_standard(TokenStandard::FungibleAsset)
            .decimals(0)
            .build()
            .is_ok());
    }

    #[test]
    fn test_creator_shares_must_sum_to_100() {
        let creator = Creator {
            address: Keypair::new().pubkey(),
            verified: false,
            share: 60,
        };
        assert!(descriptor().creators(vec![creator.clone()]).build().is_err());
        assert!(descriptor().creators(vec![]).build().is_err());

        let full = Creator { share: 100, ..creator };
        assert!(descriptor().creators(vec![full]).build().is_ok());
    }

    #[test]
    fn test_request_requires_token_metadata_extension() {
        let ctx = ClientContext::builder().identity(Keypair::new()).build().unwrap();
        let owner = ctx.identity().pubkey();
        let result = CreateAndMint::new(&ctx, descriptor().build().unwrap(), owner);
        assert!(matches!(result, Err(MintError::Configuration(_))));
    }

    #[test]
    fn test_default_creator_is_authority() {
        let ctx = context();
        let owner = ctx.identity().pubkey();
        let request = CreateAndMint::new(&ctx, descriptor().build().unwrap(), owner).unwrap();
        let ixs = request.instructions().unwrap();

        let CreateArgs::V1 { asset_data, .. } = CreateArgs::try_from_slice(&ixs[0].data[1..]).unwrap();
        assert_eq!(
            asset_data.creators,
            Some(vec![Creator {
                address: owner,
                verified: true,
                share: 100,
            }])
        );
    }

    #[test]
    fn test_separate_authority_signs() {
        let ctx = context();
        let authority = Keypair::new();
        let owner = Keypair::new().pubkey();
        let request = CreateAndMint::new(&ctx, descriptor().build().unwrap(), owner)
            .unwrap()
            .authority(&authority);

        let tx = request.build_transaction(Hash::default()).unwrap();
        assert!(tx.is_signed());
        assert_eq!(tx.signatures.len(), 3);
        assert_eq!(tx.message.account_keys[0], ctx.identity().pubkey());
    }

    #[test]
    fn test_identity_as_authority_signs_once() {
        let ctx = context();
        let owner = ctx.identity().pubkey();
        let request = CreateAndMint::new(&ctx, descriptor().build().unwrap(), owner).unwrap();

        let tx = request.build_transaction(Hash::default()).unwrap();
        assert!(tx.is_signed());
        assert_eq!(tx.signatures.len(), 2);
    }

    #[test]
    fn test_token_2022_flows_into_instructions() {
        let ctx = context();
        let owner = Keypair::new().pubkey();
        let d = descriptor().token_program(TokenProgram::Token2022).build().unwrap();
        let mint = d.mint_address();
        let request = CreateAndMint::new(&ctx, d, owner).unwrap();
        let ixs = request.instructions().unwrap();

        assert_eq!(ixs[0].accounts[8].pubkey, TOKEN_2022_PROGRAM_ID);
        assert_eq!(ixs[1].accounts[11].pubkey, TOKEN_2022_PROGRAM_ID);
        assert_eq!(
            request.token_account(),
            get_associated_token_address(&owner, &mint, &TOKEN_2022_PROGRAM_ID)
        );
    }

    #[test]
    fn test_mint_instruction_carries_amount() {
        let ctx = context();
        let owner = Keypair::new().pubkey();
        let request = CreateAndMint::new(&ctx, descriptor().build().unwrap(), owner).unwrap();
        let ixs = request.instructions().unwrap();

        assert_eq!(ixs[1].data[0], instruction::MINT);
        let MintArgs::V1 { amount, .. } = MintArgs::try_from_slice(&ixs[1].data[1..]).unwrap();
        assert_eq!(amount, 1_000_000);
    }

    #[test]
    fn test_mint_equal_to_owner_rejected() {
        let ctx = context();
        let mint = Keypair::new();
        let owner = mint.pubkey();
        let request =
            CreateAndMint::new(&ctx, descriptor().mint(mint).build().unwrap(), owner).unwrap();
        assert!(matches!(
            request.check_mint_identity(),
            Err(MintError::Configuration(_))
        ));
    }
}

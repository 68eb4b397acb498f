//! # fungible-mint
//!
//! Create a Metaplex fungible asset on Solana and mint its initial supply to
//! an owner in a single confirmed transaction.
//!
//! ## Architecture
//!
//! 1. **Core**: scaling and formatting helpers, Token Metadata program
//!    constants, PDAs, borsh argument types and instruction builders
//! 2. **Identity**: keypair loading from local secret material
//! 3. **Context**: immutable endpoint + identity + installed extensions
//! 4. **Mint**: asset descriptor, create-and-mint request, confirmation report
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fungible_mint::prelude::*;
//!
//! let ctx = ClientContext::builder()
//!     .identity(read_keypair_file("id.json")?)
//!     .with_token_metadata()
//!     .build()?;
//!
//! let descriptor = MintDescriptor::builder()
//!     .name("BPINKY")
//!     .symbol("BPINKY")
//!     .uri("https://example.com/bpinky.json")
//!     .decimals(8)
//!     .amount(100_000_000_000_000)
//!     .build()?;
//!
//! let owner = ctx.identity().pubkey();
//! let outcome = CreateAndMint::new(&ctx, descriptor, owner)?
//!     .send_and_confirm(&ctx.rpc_client())
//!     .await?;
//! report(&outcome, std::io::stdout())?;
//! ```

// ── Core ─────────────────────────────────────────────────────────────────────

/// Decimal scaling and display helpers.
pub mod shared;

/// Token Metadata program interaction: constants, PDAs, types, instructions.
pub mod program;

/// Error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Identity + Context ───────────────────────────────────────────────────────

/// Keypair loading from local secret material.
pub mod identity;

/// Immutable client context and its builder.
pub mod context;

/// Environment-driven configuration for the binary.
pub mod config;

// ── Mint ─────────────────────────────────────────────────────────────────────

/// Asset descriptor and the create-and-mint request.
pub mod mint;

/// Success line for a confirmed mint.
pub mod report;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Errors
    pub use crate::error::{MintError, MintResult};

    // Network + config
    pub use crate::config::MintConfig;
    pub use crate::network::DEFAULT_RPC_URL;

    // Identity
    pub use crate::identity::{load_keypair_bytes, parse_secret, read_keypair_file};

    // Context
    pub use crate::context::{ClientContext, ClientContextBuilder, Extension, Extensions};

    // Program types
    pub use crate::program::types::{Creator, TokenProgram, TokenStandard};

    // Mint + report
    pub use crate::mint::{
        CreateAndMint, MintDescriptor, MintDescriptorBuilder, MintOutcome, TransactionSubmitter,
    };
    pub use crate::report::{report, success_message};

    // Scaling
    pub use crate::shared::{display_whole, to_base_units, to_whole_tokens};
}

//! Client context: endpoint, active identity and installed program
//! extensions, built once and never mutated afterwards.
//!
//! ```rust,ignore
//! let ctx = ClientContext::builder()
//!     .endpoint("https://api.devnet.solana.com")
//!     .identity(keypair)
//!     .with_candy_machine()
//!     .build()?;
//! ```

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signer::Signer;

use crate::error::{MintError, MintResult};
use crate::program::constants::{
    CANDY_GUARD_PROGRAM_ID, CANDY_MACHINE_CORE_PROGRAM_ID, TOKEN_METADATA_PROGRAM_ID,
};

// ============================================================================
// Extensions
// ============================================================================

/// Named extension points a context can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    /// Token Metadata program: asset creation and minting.
    TokenMetadata,
    /// Candy Machine core + guard programs. Depends on Token Metadata.
    CandyMachine,
}

impl Extension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TokenMetadata => "token-metadata",
            Self::CandyMachine => "candy-machine",
        }
    }
}

impl std::fmt::Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Program IDs of the candy machine extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandyMachinePrograms {
    pub core: Pubkey,
    pub guard: Pubkey,
}

impl Default for CandyMachinePrograms {
    fn default() -> Self {
        Self {
            core: *CANDY_MACHINE_CORE_PROGRAM_ID,
            guard: *CANDY_GUARD_PROGRAM_ID,
        }
    }
}

/// Capabilities installed on a [`ClientContext`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extensions {
    token_metadata: Option<Pubkey>,
    candy_machine: Option<CandyMachinePrograms>,
}

impl Extensions {
    /// Token Metadata program ID, if the capability is installed.
    pub fn token_metadata(&self) -> MintResult<Pubkey> {
        self.token_metadata.ok_or_else(|| {
            MintError::Configuration(format!("{} extension not installed", Extension::TokenMetadata))
        })
    }

    /// Candy machine program IDs, if the capability is installed.
    pub fn candy_machine(&self) -> MintResult<CandyMachinePrograms> {
        self.candy_machine.ok_or_else(|| {
            MintError::Configuration(format!("{} extension not installed", Extension::CandyMachine))
        })
    }

    pub fn is_installed(&self, extension: Extension) -> bool {
        match extension {
            Extension::TokenMetadata => self.token_metadata.is_some(),
            Extension::CandyMachine => self.candy_machine.is_some(),
        }
    }
}

// ============================================================================
// Context
// ============================================================================

/// Immutable client configuration shared by reference with operations.
pub struct ClientContext {
    endpoint: String,
    commitment: CommitmentConfig,
    identity: Keypair,
    extensions: Extensions,
}

impl ClientContext {
    pub fn builder() -> ClientContextBuilder {
        ClientContextBuilder::default()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.commitment
    }

    /// The active signer; pays fees and is the default mint authority.
    pub fn identity(&self) -> &Keypair {
        &self.identity
    }

    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    /// Create a nonblocking RPC client for the configured endpoint.
    ///
    /// No request is made until the client is used.
    pub fn rpc_client(&self) -> RpcClient {
        RpcClient::new_with_commitment(self.endpoint.clone(), self.commitment)
    }
}

impl std::fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientContext")
            .field("endpoint", &self.endpoint)
            .field("commitment", &self.commitment)
            .field("identity", &self.identity.pubkey())
            .field("extensions", &self.extensions)
            .finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ClientContextBuilder {
    endpoint: String,
    commitment: CommitmentConfig,
    identity: Option<Keypair>,
    token_metadata: Option<Pubkey>,
    candy_machine: Option<CandyMachinePrograms>,
    duplicates: Vec<Extension>,
}

impl Default for ClientContextBuilder {
    fn default() -> Self {
        Self {
            endpoint: crate::network::DEFAULT_RPC_URL.to_string(),
            commitment: CommitmentConfig::confirmed(),
            identity: None,
            token_metadata: None,
            candy_machine: None,
            duplicates: Vec::new(),
        }
    }
}

impl ClientContextBuilder {
    pub fn endpoint(mut self, url: &str) -> Self {
        self.endpoint = url.to_string();
        self
    }

    pub fn commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    /// Install the active signer (required).
    pub fn identity(mut self, keypair: Keypair) -> Self {
        self.identity = Some(keypair);
        self
    }

    /// Install the Token Metadata capability with the canonical program ID.
    pub fn with_token_metadata(self) -> Self {
        self.with_token_metadata_program(*TOKEN_METADATA_PROGRAM_ID)
    }

    /// Install the Token Metadata capability at a custom program ID
    /// (e.g. a local validator deployment).
    pub fn with_token_metadata_program(mut self, program_id: Pubkey) -> Self {
        if self.token_metadata.is_some() {
            self.duplicates.push(Extension::TokenMetadata);
        }
        self.token_metadata = Some(program_id);
        self
    }

    /// Install the Candy Machine capability.
    pub fn with_candy_machine(mut self) -> Self {
        if self.candy_machine.is_some() {
            self.duplicates.push(Extension::CandyMachine);
        }
        self.candy_machine = Some(CandyMachinePrograms::default());
        self
    }

    pub fn build(self) -> MintResult<ClientContext> {
        if let Some(extension) = self.duplicates.first() {
            return Err(MintError::Configuration(format!(
                "{} extension registered more than once",
                extension
            )));
        }

        let identity = self
            .identity
            .ok_or_else(|| MintError::Configuration("no identity installed".to_string()))?;

        // The candy machine programs CPI into Token Metadata.
        let token_metadata = match (self.token_metadata, self.candy_machine) {
            (None, Some(_)) => Some(*TOKEN_METADATA_PROGRAM_ID),
            (token_metadata, _) => token_metadata,
        };

        tracing::debug!(
            "Built client context for {} (identity {})",
            self.endpoint,
            identity.pubkey()
        );

        Ok(ClientContext {
            endpoint: self.endpoint,
            commitment: self.commitment,
            identity,
            extensions: Extensions {
                token_metadata,
                candy_machine: self.candy_machine,
            },
        })
    }
}

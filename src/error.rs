//! Error types for the create-and-mint client.

use thiserror::Error;

use crate::shared::scaling::ScalingError;

/// Errors raised while loading keys, building the context, or minting.
#[derive(Debug, Error)]
pub enum MintError {
    /// Secret key material is malformed
    #[error("Format error: {0}")]
    Format(String),

    /// Invalid metadata, missing identity, or bad extension setup
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network or on-chain validation failure during submission
    #[error("Submission error: {0}")]
    Submission(String),

    /// Transaction could not be signed by the supplied signers
    #[error("Signing error: {0}")]
    Signing(#[from] solana_signer::SignerError),

    /// Secret file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Instruction argument encoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Base-unit / whole-token conversion failed
    #[error("Scaling error: {0}")]
    Scaling(#[from] ScalingError),
}

/// Result type alias for mint operations
pub type MintResult<T> = Result<T, MintError>;

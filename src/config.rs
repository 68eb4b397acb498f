//! Environment-driven configuration for the one-shot mint binary.
//!
//! Values are read from the process environment after loading an optional
//! `.env` file. Every variable has a default, so an empty environment
//! reproduces the stock asset on devnet.
//!
//! | Variable | Default |
//! |---|---|
//! | `RPC_URL` | [`DEFAULT_RPC_URL`](crate::network::DEFAULT_RPC_URL) |
//! | `KEYPAIR_PATH` | `~/.config/solana/id.json` |
//! | `COMMITMENT` | `confirmed` |
//! | `TOKEN_NAME` / `TOKEN_SYMBOL` | `BPINKY` |
//! | `TOKEN_URI` | [`DEFAULT_TOKEN_URI`] |
//! | `TOKEN_DECIMALS` | `8` |
//! | `TOKEN_AMOUNT` | `100000000000000` (base units) |
//! | `TOKEN_OWNER` | the loaded identity |

use std::path::PathBuf;
use std::str::FromStr;

use solana_commitment_config::CommitmentConfig;
use solana_pubkey::Pubkey;

use crate::error::{MintError, MintResult};
use crate::mint::{MintDescriptor, MintDescriptorBuilder};

pub const DEFAULT_TOKEN_NAME: &str = "BPINKY";
pub const DEFAULT_TOKEN_SYMBOL: &str = "BPINKY";
pub const DEFAULT_TOKEN_URI: &str =
    "https://bafkreian6c3azc7ryao5hv6m4ic73pu7diyzgoq42wc6kxnft37zncw2ve.ipfs.nftstorage.link";
pub const DEFAULT_TOKEN_DECIMALS: u8 = 8;
/// 1,000,000 whole tokens at 8 decimals.
pub const DEFAULT_TOKEN_AMOUNT: u64 = 100_000_000_000_000;

/// Resolved configuration for a single create-and-mint run.
#[derive(Debug, Clone, PartialEq)]
pub struct MintConfig {
    pub rpc_url: String,
    /// `None` means [`default_keypair_path`]
    pub keypair_path: Option<PathBuf>,
    pub commitment: CommitmentConfig,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
    /// Initial supply in base units
    pub amount: u64,
    /// Recipient; `None` means the identity itself
    pub token_owner: Option<Pubkey>,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            rpc_url: crate::network::DEFAULT_RPC_URL.to_string(),
            keypair_path: None,
            commitment: CommitmentConfig::confirmed(),
            name: DEFAULT_TOKEN_NAME.to_string(),
            symbol: DEFAULT_TOKEN_SYMBOL.to_string(),
            uri: DEFAULT_TOKEN_URI.to_string(),
            decimals: DEFAULT_TOKEN_DECIMALS,
            amount: DEFAULT_TOKEN_AMOUNT,
            token_owner: None,
        }
    }
}

impl MintConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> MintResult<Self> {
        env_file_loaded(dotenvy::dotenv())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> MintResult<Self> {
        let defaults = Self::default();

        Ok(Self {
            rpc_url: lookup("RPC_URL").unwrap_or(defaults.rpc_url),
            keypair_path: lookup("KEYPAIR_PATH").map(PathBuf::from),
            commitment: match lookup("COMMITMENT") {
                Some(value) => parse_commitment(&value)?,
                None => defaults.commitment,
            },
            name: lookup("TOKEN_NAME").unwrap_or(defaults.name),
            symbol: lookup("TOKEN_SYMBOL").unwrap_or(defaults.symbol),
            uri: lookup("TOKEN_URI").unwrap_or(defaults.uri),
            decimals: parse_var(&lookup, "TOKEN_DECIMALS")?.unwrap_or(defaults.decimals),
            amount: parse_var(&lookup, "TOKEN_AMOUNT")?.unwrap_or(defaults.amount),
            token_owner: parse_var(&lookup, "TOKEN_OWNER")?,
        })
    }

    /// Key file to load: `KEYPAIR_PATH` if set, else the Solana CLI default.
    pub fn resolved_keypair_path(&self) -> MintResult<PathBuf> {
        match &self.keypair_path {
            Some(path) => Ok(path.clone()),
            None => default_keypair_path(),
        }
    }

    /// Descriptor builder pre-filled from this config.
    pub fn descriptor(&self) -> MintDescriptorBuilder {
        MintDescriptor::builder()
            .name(&self.name)
            .symbol(&self.symbol)
            .uri(&self.uri)
            .decimals(self.decimals)
            .amount(self.amount)
    }
}

/// `~/.config/solana/id.json`, the Solana CLI default key location.
pub fn default_keypair_path() -> MintResult<PathBuf> {
    keypair_path_in(dirs::home_dir())
}

fn keypair_path_in(home: Option<PathBuf>) -> MintResult<PathBuf> {
    home.map(|home| home.join(".config").join("solana").join("id.json"))
        .ok_or_else(|| {
            MintError::Configuration("no home directory found, set KEYPAIR_PATH".to_string())
        })
}

/// A missing `.env` is fine; an unreadable or malformed one is not.
fn env_file_loaded(result: Result<PathBuf, dotenvy::Error>) -> MintResult<()> {
    match result {
        Ok(path) => {
            tracing::debug!("Loaded environment from {}", path.display());
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(MintError::Configuration(format!(".env: {}", e))),
    }
}

fn parse_commitment(value: &str) -> MintResult<CommitmentConfig> {
    match value.trim().to_ascii_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(MintError::Configuration(format!(
            "COMMITMENT must be processed, confirmed or finalized, got {}",
            other
        ))),
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> MintResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| MintError::Configuration(format!("{}: {}", key, e)))
        })
        .transpose()
}

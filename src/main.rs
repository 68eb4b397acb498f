//! One-shot create-and-mint.
//!
//! Loads the identity from `KEYPAIR_PATH`, creates the configured fungible
//! asset on `RPC_URL` and mints its initial supply to `TOKEN_OWNER` (or the
//! identity). Prints a single success line on confirmation; any failure
//! exits non-zero without printing it.
//!
//! Run: RUST_LOG=debug cargo run --release

use fungible_mint::config::MintConfig;
use fungible_mint::context::ClientContext;
use fungible_mint::error::MintError;
use fungible_mint::identity::read_keypair_file;
use fungible_mint::mint::CreateAndMint;
use fungible_mint::report::report;
use solana_signer::Signer;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), MintError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = MintConfig::from_env()?;
    let identity = read_keypair_file(config.resolved_keypair_path()?)?;
    let owner = config.token_owner.unwrap_or_else(|| identity.pubkey());

    let ctx = ClientContext::builder()
        .endpoint(&config.rpc_url)
        .commitment(config.commitment)
        .identity(identity)
        .with_token_metadata()
        .with_candy_machine()
        .build()?;

    tracing::info!("Using {} as {}", ctx.endpoint(), ctx.identity().pubkey());

    let descriptor = config.descriptor().build()?;
    let outcome = CreateAndMint::new(&ctx, descriptor, owner)?
        .send_and_confirm(&ctx.rpc_client())
        .await?;

    report(&outcome, std::io::stdout())
}

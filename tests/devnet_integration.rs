//! Devnet integration test for create-and-mint.
//!
//! Requires:
//! 1. Funded wallet (~0.05 SOL minimum) at KEYPAIR_PATH
//! 2. RPC_URL in .env file (defaults to public devnet)
//!
//! Run: cargo test --test devnet_integration -- --nocapture --ignored

use fungible_mint::config::MintConfig;
use fungible_mint::prelude::*;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_pubkey::Pubkey;
use solana_signer::Signer;

// ============================================================================
// Test Helpers
// ============================================================================

fn load_context() -> Option<(MintConfig, ClientContext)> {
    let config = MintConfig::from_env().ok()?;
    let path = config.resolved_keypair_path().ok()?;
    let identity = match read_keypair_file(&path) {
        Ok(identity) => identity,
        Err(e) => {
            println!("   Skipping: {} ({})", e, path.display());
            return None;
        }
    };

    let ctx = ClientContext::builder()
        .endpoint(&config.rpc_url)
        .commitment(config.commitment)
        .identity(identity)
        .with_token_metadata()
        .build()
        .ok()?;
    Some((config, ctx))
}

async fn token_balance(client: &RpcClient, token_account: &Pubkey) -> u64 {
    client
        .get_token_account_balance(token_account)
        .await
        .unwrap()
        .amount
        .parse()
        .unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
#[ignore]
async fn test_create_and_mint_on_devnet() {
    let Some((config, ctx)) = load_context() else {
        return;
    };
    let client = ctx.rpc_client();
    let owner = ctx.identity().pubkey();

    println!("1. Identity {} on {}", owner, ctx.endpoint());
    let balance = client.get_balance(&owner).await.unwrap();
    println!("   Balance: {} lamports", balance);

    let descriptor = config.descriptor().build().unwrap();
    let mint = descriptor.mint_address();
    println!("2. Creating {} at {}", descriptor.symbol, mint);

    let outcome = CreateAndMint::new(&ctx, descriptor, owner)
        .unwrap()
        .send_and_confirm(&client)
        .await
        .unwrap();
    println!("   Signature: {}", outcome.signature);
    assert_eq!(outcome.mint, mint);

    println!("3. Verifying token account {}", outcome.token_account);
    assert_eq!(token_balance(&client, &outcome.token_account).await, config.amount);

    let message = success_message(&outcome).unwrap();
    println!("   {}", message);
    assert!(message.contains(&mint.to_string()));
}

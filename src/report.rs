//! Confirmation reporting for a completed create-and-mint.
//!
//! Only a [`MintOutcome`] can be reported, and one only exists after the
//! network confirmed the transaction; failures never reach this module.

use std::io::Write;

use crate::error::MintResult;
use crate::mint::MintOutcome;
use crate::shared::fmt::display_whole;

/// The single success line printed after confirmation.
pub fn success_message(outcome: &MintOutcome) -> MintResult<String> {
    let whole = outcome.whole_tokens()?;
    Ok(format!(
        "Successfully minted {} tokens ({})",
        display_whole(&whole),
        outcome.mint
    ))
}

/// Write the success line to `out`.
pub fn report(outcome: &MintOutcome, mut out: impl Write) -> MintResult<()> {
    writeln!(out, "{}", success_message(outcome)?)?;
    tracing::debug!("Reported mint {} (signature {})", outcome.mint, outcome.signature);
    Ok(())
}

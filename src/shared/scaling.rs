//! Conversion between whole-token amounts and raw base units.
//!
//! All math uses `rust_decimal::Decimal` for exact integer arithmetic.
//! No async, no network calls.

use std::fmt;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Largest decimals value whose scale factor fits in a `u64`.
pub const MAX_SCALE_DECIMALS: u8 = 19;

/// Errors that can occur during amount scaling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalingError {
    NegativeAmount(String),
    Overflow { context: String },
    FractionalAmount { value: String },
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::NegativeAmount(v) => write!(f, "Amount must not be negative, got {}", v),
            ScalingError::Overflow { context } => write!(f, "Overflow: {}", context),
            ScalingError::FractionalAmount { value } => {
                write!(f, "Fractional base units not allowed: {}", value)
            }
        }
    }
}

impl std::error::Error for ScalingError {}

fn scale_factor(decimals: u8) -> Result<Decimal, ScalingError> {
    10u64
        .checked_pow(decimals as u32)
        .map(Decimal::from)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("10^{} overflow", decimals),
        })
}

/// Convert a whole-token amount into raw base units.
///
/// ```text
/// base_units = whole * 10^decimals
/// ```
pub fn to_base_units(whole: Decimal, decimals: u8) -> Result<u64, ScalingError> {
    if whole.is_sign_negative() && !whole.is_zero() {
        return Err(ScalingError::NegativeAmount(whole.to_string()));
    }

    let base_units = whole
        .checked_mul(scale_factor(decimals)?)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} * 10^{}", whole, decimals),
        })?;

    if base_units.fract() != Decimal::ZERO {
        return Err(ScalingError::FractionalAmount {
            value: format!("base_units = {}", base_units),
        });
    }

    base_units.to_u64().ok_or_else(|| ScalingError::Overflow {
        context: format!("base_units {} does not fit in u64", base_units),
    })
}

/// Convert raw base units into a whole-token amount.
pub fn to_whole_tokens(amount: u64, decimals: u8) -> Result<Decimal, ScalingError> {
    let whole = Decimal::from(amount)
        .checked_div(scale_factor(decimals)?)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} / 10^{}", amount, decimals),
        })?;
    Ok(whole.normalize())
}

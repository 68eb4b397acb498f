//! Shared amount utilities used by the mint operation and the reporter.

pub mod fmt;
pub mod scaling;

pub use fmt::display_whole;
pub use scaling::{to_base_units, to_whole_tokens, ScalingError};

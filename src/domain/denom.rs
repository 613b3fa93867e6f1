//! Denominations of the coins minted for bridged ERC20 tokens.
//!
//! A peggy denom is `<prefix><separator><contract>`, for example
//! `peggy/0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2`. This module is the only
//! place that knows the format, in both directions.

use crate::domain::eth;

/// The name of the bridge module.
pub const MODULE_NAME: &str = "peggy";

/// The prefix of every denom minted by the bridge.
pub const PREFIX: &str = MODULE_NAME;

/// Separates the prefix from the contract address.
pub const SEPARATOR: char = '/';

/// The length of every denom produced by [`encode`].
pub const DENOM_LEN: usize = PREFIX.len() + SEPARATOR.len_utf8() + eth::ADDRESS_LEN;

/// Returns the denom for the specified contract.
///
/// The contract is formatted as-is; validation is up to the caller (see
/// [`eth::Address`]).
pub fn encode(contract: &str) -> String {
    format!("{PREFIX}{SEPARATOR}{contract}")
}

/// Extracts the contract address from a peggy denom.
///
/// When several checks fail, the error reported is the first of: too few
/// parts, invalid address, too many parts, wrong prefix, wrong total length.
pub fn decode(denom: &str) -> Result<eth::Address, DenomError> {
    let parts = denom.split(SEPARATOR).collect::<Vec<_>>();
    let [prefix, contract, rest @ ..] = parts.as_slice() else {
        return Err(DenomError::TooFewParts {
            denom: denom.to_owned(),
        });
    };

    let contract = eth::Address::new(*contract).map_err(DenomError::InvalidAddress)?;
    if !rest.is_empty() {
        return Err(DenomError::TooManyParts {
            denom: denom.to_owned(),
        });
    }
    if *prefix != PREFIX {
        return Err(DenomError::PrefixMismatch {
            prefix: (*prefix).to_owned(),
        });
    }
    if denom.len() != DENOM_LEN {
        return Err(DenomError::LengthMismatch { len: denom.len() });
    }

    Ok(contract)
}

/// Returns `true` if the denom is a well-formed peggy denom.
pub fn is_peggy(denom: &str) -> bool {
    decode(denom).is_ok()
}

/// A denom that was not produced by [`encode`] for a valid contract.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DenomError {
    #[error("denom {denom:?} has fewer separators than expected")]
    TooFewParts { denom: String },
    #[error("denom {denom:?} has more separators than expected")]
    TooManyParts { denom: String },
    #[error("denom prefix {prefix:?} is not {:?}", PREFIX)]
    PrefixMismatch { prefix: String },
    #[error("denom contains an invalid contract address")]
    InvalidAddress(#[source] eth::InvalidAddress),
    #[error("denom length {len} is not {}", DENOM_LEN)]
    LengthMismatch { len: usize },
}

impl DenomError {
    /// for instrumentization purposes
    pub fn format_variant(&self) -> &'static str {
        match self {
            Self::TooFewParts { .. } => "TooFewParts",
            Self::TooManyParts { .. } => "TooManyParts",
            Self::PrefixMismatch { .. } => "PrefixMismatch",
            Self::InvalidAddress(_) => "InvalidAddress",
            Self::LengthMismatch { .. } => "LengthMismatch",
        }
    }
}

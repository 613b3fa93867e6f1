//! ERC20 token amounts bridged from Ethereum, and their conversion to and
//! from native coins.

use {
    crate::{
        domain::{coin::Coin, denom, eth},
        util::conv,
    },
    num::BigUint,
};

/// An amount of a particular ERC20 token.
///
/// The contract is not validated on construction; call
/// [`Erc20Token::validate_basic`] before trusting it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Erc20Token {
    pub amount: u64,
    pub contract: String,
}

impl Erc20Token {
    pub fn new(amount: u64, contract: impl Into<String>) -> Self {
        Self {
            amount,
            contract: contract.into(),
        }
    }

    /// Stateless validation.
    pub fn validate_basic(&self) -> Result<(), ValidationError> {
        eth::validate(&self.contract).map_err(ValidationError::Address)
    }

    /// Returns the native coin representing this token amount.
    pub fn to_coin(&self) -> Coin {
        Coin::new(denom::encode(&self.contract), self.amount)
    }

    /// Returns the token amount a native coin represents.
    pub fn from_coin(coin: &Coin) -> Result<Self, FromCoinError> {
        let contract = coin.peggy_contract().inspect_err(|err| {
            tracing::trace!(denom = %coin.denom, kind = err.format_variant(), "not a peggy coin");
        })?;
        let amount = conv::biguint_to_u64(&coin.amount)
            .ok_or_else(|| FromCoinError::AmountOutOfRange(coin.amount.clone()))?;
        Ok(Self {
            amount,
            contract: contract.into_string(),
        })
    }

    /// Adds two amounts of the same token.
    ///
    /// Neither operand is modified; on error nothing was merged.
    pub fn merge(&self, other: &Self) -> Result<Self, MergeError> {
        if self.contract != other.contract {
            tracing::trace!(left = %self.contract, right = %other.contract, "contract mismatch");
            return Err(MergeError::ContractMismatch {
                left: self.contract.clone(),
                right: other.contract.clone(),
            });
        }

        let sum = conv::u64_to_biguint(self.amount) + other.amount;
        let amount = conv::biguint_to_u64(&sum).ok_or_else(|| {
            tracing::trace!(%sum, contract = %self.contract, "amount overflow");
            MergeError::Overflow(sum)
        })?;
        Ok(Self::new(amount, self.contract.clone()))
    }
}

/// Merges two amounts of the same token.
///
/// # Panics
///
/// Panics if the contracts differ or if the sum does not fit into 64 bits.
/// Only use this where both operands are known to be consistent; otherwise
/// use [`Erc20Token::merge`].
impl std::ops::Add for Erc20Token {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.merge(&rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid ethereum contract address")]
    Address(#[source] eth::InvalidAddress),
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FromCoinError {
    #[error("invalid denom")]
    Denom(#[from] denom::DenomError),
    #[error("coin amount {0} does not fit into 64 bits")]
    AmountOutOfRange(BigUint),
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum MergeError {
    #[error("cannot merge tokens of contract {left} and {right}")]
    ContractMismatch { left: String, right: String },
    #[error("merged amount {0} does not fit into 64 bits")]
    Overflow(BigUint),
}

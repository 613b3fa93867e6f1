//! The host ledger's native fungible asset record.

use {
    crate::domain::{denom, eth},
    num::BigUint,
    regex::Regex,
    std::{
        fmt::{self, Display, Formatter},
        str::FromStr,
        sync::LazyLock,
    },
};

/// Coin strings are an amount immediately followed by a denom, for example
/// `100peggy/0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2`.
static COIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\s*([a-zA-Z][a-zA-Z0-9/:._-]{2,127})$").expect("valid coin pattern")
});

/// An amount of a native asset. Coins for bridged ERC20 tokens carry a peggy
/// denom (see [`denom`]).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Coin {
    pub denom: String,
    pub amount: BigUint,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<BigUint>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    /// Returns the address of the ERC20 contract backing this coin.
    pub fn peggy_contract(&self) -> Result<eth::Address, denom::DenomError> {
        denom::decode(&self.denom)
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = ParseCoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = COIN
            .captures(s.trim())
            .ok_or_else(|| ParseCoinError(s.to_owned()))?;
        let amount = captures[1]
            .parse()
            .map_err(|_| ParseCoinError(s.to_owned()))?;
        Ok(Self {
            denom: captures[2].to_owned(),
            amount,
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid coin expression {0:?}")]
pub struct ParseCoinError(pub String);

//! Lists of ERC20 tokens the bridge is expected to handle.

use {
    crate::domain::{denom, eth},
    itertools::Itertools,
};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenList {
    pub tokens: Vec<Token>,
}

/// An entry of a token list. The contract is kept exactly as configured and
/// has not been validated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub symbol: Option<String>,
    pub contract: String,
}

/// The outcome of checking every entry of a token list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    /// One entry per listed token, in list order.
    pub tokens: Vec<Checked>,
    /// Valid contracts listed more than once, in canonical order.
    pub duplicates: Vec<eth::Address>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Checked {
    pub token: Token,
    /// The peggy denom of the token, if its contract is valid.
    pub denom: Result<String, eth::InvalidAddress>,
}

impl TokenList {
    /// Validates every entry, so that all invalid entries get reported rather
    /// than only the first one.
    pub fn check(&self) -> Report {
        let addresses = self
            .tokens
            .iter()
            .map(|token| eth::Address::new(token.contract.as_str()))
            .collect::<Vec<_>>();

        let duplicates = eth::sort_unique(
            addresses
                .iter()
                .filter_map(|address| address.as_ref().ok())
                .duplicates()
                .cloned(),
        );

        let tokens = self
            .tokens
            .iter()
            .zip(addresses)
            .map(|(token, address)| {
                if let Err(err) = &address {
                    tracing::debug!(?token, %err, "invalid token");
                }
                Checked {
                    token: token.clone(),
                    denom: address.map(|address| denom::encode(address.as_str())),
                }
            })
            .collect();

        Report { tokens, duplicates }
    }
}

impl Report {
    /// Returns the number of entries that failed validation.
    pub fn invalid(&self) -> usize {
        self.tokens
            .iter()
            .filter(|checked| checked.denom.is_err())
            .count()
    }
}

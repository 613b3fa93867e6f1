use {
    crate::{domain::erc20, util::serialize},
    serde::Serialize,
    serde_with::serde_as,
};

/// An ERC20 token amount.
#[serde_as]
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub contract: String,
    #[serde_as(as = "serialize::Amount")]
    pub amount: u64,
}

/// Creates a new token DTO from its domain object.
pub fn from_domain(token: &erc20::Erc20Token) -> Token {
    Token {
        contract: token.contract.clone(),
        amount: token.amount,
    }
}

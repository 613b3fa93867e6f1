use {
    crate::{domain::coin, util::serialize},
    num::BigUint,
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
};

/// A native coin.
#[serde_as]
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Coin {
    pub denom: String,
    #[serde_as(as = "serialize::Amount")]
    pub amount: BigUint,
}

/// Creates a new coin DTO from its domain object.
pub fn from_domain(coin: &coin::Coin) -> Coin {
    Coin {
        denom: coin.denom.clone(),
        amount: coin.amount.clone(),
    }
}

/// Converts a data transfer object into its domain object representation.
pub fn to_domain(coin: &Coin) -> coin::Coin {
    coin::Coin::new(coin.denom.clone(), coin.amount.clone())
}

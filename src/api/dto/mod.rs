pub mod check;
pub mod coin;
pub mod token;

pub use self::{check::CheckReport, coin::Coin, token::Token};

use serde::Serialize;

/// The result of validating a single contract address.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidAddress {
    pub address: String,
    pub denom: String,
}

/// A canonically ordered list of contract addresses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Addresses {
    pub addresses: Vec<String>,
}

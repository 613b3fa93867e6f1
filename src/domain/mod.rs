//! Core types and rules of the bridge: contract addresses, peggy denoms and
//! the conversion between ERC20 token amounts and native coins.

pub mod coin;
pub mod denom;
pub mod erc20;
pub mod eth;
pub mod token_list;

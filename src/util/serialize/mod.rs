//! Serialization helpers for use with `serde_with`.

mod amount;

pub use self::amount::Amount;

use {
    num::BigUint,
    serde::{Deserialize, Deserializer, Serializer, de},
    serde_with::{DeserializeAs, SerializeAs},
};

/// Serialize and deserialize token amounts as decimal strings.
///
/// Amounts are always strings, never JSON numbers. Only plain ASCII digits
/// are accepted: no sign, no `_` separators, no whitespace.
#[derive(Debug)]
pub struct Amount;

impl<'de> DeserializeAs<'de, BigUint> for Amount {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(de::Error::custom(format!("invalid decimal amount {s:?}")));
        }
        s.parse()
            .map_err(|_| de::Error::custom(format!("invalid decimal amount {s:?}")))
    }
}

impl SerializeAs<BigUint> for Amount {
    fn serialize_as<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }
}

impl SerializeAs<u64> for Amount {
    fn serialize_as<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }
}

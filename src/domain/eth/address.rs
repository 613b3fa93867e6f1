//! Ethereum contract address strings as they cross the bridge.
//!
//! Addresses are kept in their textual form and are never normalized: two
//! addresses that only differ in hex-letter case are different addresses for
//! equality and ordering purposes.

use {
    itertools::Itertools,
    regex::Regex,
    std::{
        fmt::{self, Display, Formatter},
        str::FromStr,
        sync::LazyLock,
    },
};

/// The length of a `0x`-prefixed contract address string.
pub const ADDRESS_LEN: usize = 42;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^0x[0-9a-fA-F]{40}$").expect("valid address pattern"));

/// Validates a contract address string.
///
/// The checks run in a fixed order and the first failure is reported: empty
/// input, then the `^0x[0-9a-fA-F]{40}$` pattern, then the length.
pub fn validate(address: &str) -> Result<(), InvalidAddress> {
    let invalid = |reason| InvalidAddress {
        address: address.to_owned(),
        reason,
    };

    if address.is_empty() {
        return Err(invalid(Reason::Empty));
    }
    if !PATTERN.is_match(address) {
        return Err(invalid(Reason::PatternMismatch));
    }
    // Implied by the pattern, but reported as its own reason.
    if address.len() != ADDRESS_LEN {
        return Err(invalid(Reason::WrongLength {
            expected: ADDRESS_LEN,
            actual: address.len(),
        }));
    }
    Ok(())
}

/// Byte-wise lexicographic strict ordering over address strings.
///
/// Defined for any pair of strings, valid addresses or not.
pub fn less_than(a: &str, b: &str) -> bool {
    a.as_bytes() < b.as_bytes()
}

/// Sorts addresses byte-wise and removes byte-identical duplicates.
///
/// `Address` ordering agrees with [`less_than`].
pub fn sort_unique(addresses: impl IntoIterator<Item = Address>) -> Vec<Address> {
    addresses.into_iter().sorted().dedup().collect()
}

/// A contract address that passed [`validate`].
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Result<Self, InvalidAddress> {
        let address = address.into();
        validate(&address)?;
        Ok(Self(address))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for Address {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A malformed contract address, along with the offending input.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid contract address {address:?}: {reason}")]
pub struct InvalidAddress {
    pub address: String,
    pub reason: Reason,
}

/// Why an address failed validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Reason {
    Empty,
    PatternMismatch,
    WrongLength { expected: usize, actual: usize },
}

impl Display for Reason {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty"),
            Self::PatternMismatch => f.write_str("expected 0x followed by 40 hex digits"),
            Self::WrongLength { expected, actual } => {
                write!(f, "expected length {expected} but got {actual}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, proptest::prelude::*};

    const ADDRESS: &str = "0x1234567890123456789012345678901234567890";

    fn reason(address: &str) -> Reason {
        validate(address).unwrap_err().reason
    }

    #[test]
    fn valid_addresses() {
        for address in [
            ADDRESS,
            "0xABCDEF0000000000000000000000000000001234",
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
            "0x0000000000000000000000000000000000000000",
        ] {
            assert_eq!(validate(address), Ok(()), "{address}");
        }
    }

    #[test]
    fn empty_address() {
        assert_eq!(reason(""), Reason::Empty);
    }

    #[test]
    fn invalid_addresses() {
        for address in [
            "0x123",
            // missing prefix
            "1234567890123456789012345678901234567890",
            "001234567890123456789012345678901234567890",
            // upper case prefix
            "0X1234567890123456789012345678901234567890",
            // non hex digit
            "0x123456789012345678901234567890123456789g",
            // too long
            "0x12345678901234567890123456789012345678901",
            // surrounding whitespace
            " 0x1234567890123456789012345678901234567890",
            "0x1234567890123456789012345678901234567890\n",
        ] {
            assert_eq!(reason(address), Reason::PatternMismatch, "{address:?}");
        }
    }

    #[test]
    fn error_names_the_input() {
        let err = validate("0x123").unwrap_err();
        assert_eq!(err.address, "0x123");
        assert_eq!(
            err.to_string(),
            "invalid contract address \"0x123\": expected 0x followed by 40 hex digits"
        );
    }

    #[test]
    fn typed_address_keeps_case() {
        let address = Address::new("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2").unwrap();
        assert_eq!(address.as_str(), "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
        assert_ne!(
            address,
            "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"
                .parse::<Address>()
                .unwrap()
        );
        assert!("0x123".parse::<Address>().is_err());
    }

    #[test]
    fn ordering_is_byte_wise() {
        assert!(less_than("0xA", "0xa"));
        assert!(!less_than("0xa", "0xA"));
        assert!(less_than("", "0x"));
        assert!(less_than("0x1", "0x10"));
        assert!(!less_than(ADDRESS, ADDRESS));
    }

    #[test]
    fn sort_unique_addresses() {
        let address = |s: &str| Address::new(s).unwrap();
        let sorted = sort_unique([
            address("0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"),
            address("0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"),
            address("0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"),
            address("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
        ]);
        assert_eq!(
            sorted,
            [
                address("0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"),
                address("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
                address("0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"),
            ]
        );
    }

    proptest! {
        #[test]
        fn wrong_length_never_validates(s in ".{0,41}|.{43,60}") {
            prop_assume!(s.len() != ADDRESS_LEN);
            prop_assert!(validate(&s).is_err());
        }

        #[test]
        fn pattern_always_validates(s in "0x[0-9a-fA-F]{40}") {
            prop_assert_eq!(validate(&s), Ok(()));
        }

        #[test]
        fn validation_matches_hex_shape(s in "(0x|0X|00)?[0-9a-gA-G]{38,42}") {
            let is_hex_address = s.len() == ADDRESS_LEN
                && s.starts_with("0x")
                && s[2..].bytes().all(|b| b.is_ascii_hexdigit());
            prop_assert_eq!(validate(&s).is_ok(), is_hex_address);
        }

        #[test]
        fn address_order_agrees_with_less_than(
            a in "0x[0-9a-fA-F]{40}",
            b in "0x[0-9a-fA-F]{40}",
        ) {
            let (x, y) = (Address::new(a.clone()).unwrap(), Address::new(b.clone()).unwrap());
            prop_assert_eq!(x < y, less_than(&a, &b));
            prop_assert_eq!(x > y, less_than(&b, &a));
        }

        #[test]
        fn less_than_is_a_strict_order(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
            prop_assert!(!less_than(&a, &a));
            prop_assert!(!(less_than(&a, &b) && less_than(&b, &a)));
            if less_than(&a, &b) && less_than(&b, &c) {
                prop_assert!(less_than(&a, &c));
            }
            if a != b {
                prop_assert!(less_than(&a, &b) || less_than(&b, &a));
            }
        }
    }
}

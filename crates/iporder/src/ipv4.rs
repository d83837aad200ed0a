//! IPv4 sort key.
//!
//! Addresses compare by their 32-bit numeric value, so `10.0.0.9` sorts
//! before `10.0.0.10` even though the strings compare the other way.

use crate::record::Value;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Numeric sort key for a dotted-decimal IPv4 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Key(u32);

impl Ipv4Key {
    /// Parses a dotted-decimal address.
    ///
    /// Exactly four decimal octets in `0..=255` are accepted. Surrounding
    /// whitespace and leading zeros are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        Ipv4Addr::from_str(s).ok().map(Self::from)
    }

    /// Parses the key out of a table cell. Only text cells qualify.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_text().and_then(Self::parse)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<Ipv4Addr> for Ipv4Key {
    fn from(addr: Ipv4Addr) -> Self {
        Self(u32::from(addr))
    }
}

impl fmt::Display for Ipv4Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Ipv4Addr::from(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("0.0.0.0", 0; "zero")]
    #[test_case("10.0.0.1", 0x0A00_0001; "private")]
    #[test_case("192.168.1.254", 0xC0A8_01FE; "lan")]
    #[test_case("255.255.255.255", u32::MAX; "broadcast")]
    fn test_parse_valid(input: &str, expected: u32) {
        assert_eq!(Ipv4Key::parse(input).map(Ipv4Key::as_u32), Some(expected));
    }

    #[test_case("999.999.1.1"; "octet out of range")]
    #[test_case("10.0.0"; "three octets")]
    #[test_case("10.0.0.1.5"; "five octets")]
    #[test_case(""; "empty")]
    #[test_case(" 10.0.0.1"; "leading whitespace")]
    #[test_case("10.0.0.01"; "leading zero")]
    #[test_case("::1"; "ipv6")]
    #[test_case("router"; "hostname")]
    fn test_parse_invalid(input: &str) {
        assert!(Ipv4Key::parse(input).is_none());
    }

    #[test]
    fn test_numeric_not_lexicographic_order() {
        let nine = Ipv4Key::parse("10.0.0.9").unwrap();
        let ten = Ipv4Key::parse("10.0.0.10").unwrap();
        assert!(nine < ten);
        assert!("10.0.0.9" > "10.0.0.10");
    }

    #[test]
    fn test_from_value_rejects_non_text() {
        assert!(Ipv4Key::from_value(&Value::Null).is_none());
        assert!(Ipv4Key::from_value(&Value::Integer(167_772_161)).is_none());
        assert!(Ipv4Key::from_value(&Value::from("10.0.0.1")).is_some());
    }

    #[test]
    fn test_display() {
        let key = Ipv4Key::parse("172.16.4.2").unwrap();
        assert_eq!(key.to_string(), "172.16.4.2");
    }
}

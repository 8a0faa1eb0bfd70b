//! Chain-facing value types.
//!
//! These are deliberately thin newtypes: the wallet provider itself lives
//! behind a port in the app crate, so the domain only needs the values
//! that cross that boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// EIP-155 chain identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl ChainId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Amount in the chain's base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Wei(pub u128);

impl Wei {
    pub fn as_u128(&self) -> u128 {
        self.0
    }

    /// Render as a decimal amount of the native token (18 decimals).
    pub fn to_native_string(&self) -> String {
        let whole = self.0 / 1_000_000_000_000_000_000;
        let frac = self.0 % 1_000_000_000_000_000_000;
        if frac == 0 {
            return format!("{whole}");
        }
        let frac = format!("{frac:018}");
        format!("{}.{}", whole, frac.trim_end_matches('0'))
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transaction hash as returned in a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxHash(String);

impl TxHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A connected user's wallet address. Normalized to lowercase so it can
/// serve as the session key for one identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let raw = raw.trim();
        let hex_part = raw.strip_prefix("0x").unwrap_or(raw);
        if hex_part.is_empty() || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidAddress(raw.to_string()));
        }
        Ok(Self(format!("0x{}", hex_part.to_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `n` hex characters after the 0x prefix, used for
    /// namespacing locally derived URIs.
    pub fn short(&self, n: usize) -> &str {
        let hex_part = &self.0[2..];
        &hex_part[..n.min(hex_part.len())]
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Address of the mint contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractAddress(String);

impl ContractAddress {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        WalletAddress::parse(raw).map(|a| Self(a.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_normalizes_case_and_prefix() {
        let a = WalletAddress::parse("0xAbCd1234").unwrap();
        let b = WalletAddress::parse("abcd1234").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "0xabcd1234");
    }

    #[test]
    fn address_rejects_non_hex() {
        assert!(WalletAddress::parse("0xzzzz").is_err());
        assert!(WalletAddress::parse("").is_err());
    }

    #[test]
    fn short_truncates_without_prefix() {
        let a = WalletAddress::parse("0xdeadbeef00").unwrap();
        assert_eq!(a.short(6), "deadbe");
    }

    #[test]
    fn wei_renders_native_units() {
        assert_eq!(Wei(1_000_000_000_000_000).to_native_string(), "0.001");
        assert_eq!(Wei(2_000_000_000_000_000_000).to_native_string(), "2");
    }
}

//! Shared newtypes and enums used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the ledger sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod serde_util;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Partition ───────────────────────────────────────────────────────────────

/// One of the three custodial sub-wallets a user's funds may reside in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Exchange,
    Spot,
    Futures,
}

impl Partition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exchange => "exchange",
            Self::Spot => "spot",
            Self::Futures => "futures",
        }
    }

    /// Spot and futures are trading partitions; exchange is the funding
    /// partition and carries no volume requirement.
    pub fn is_trading(&self) -> bool {
        matches!(self, Self::Spot | Self::Futures)
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── CoinId ──────────────────────────────────────────────────────────────────

/// Newtype for coin identifiers (e.g. `"usdt"`, `"btc"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for CoinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CoinId(s))
    }
}

// ─── UserId ──────────────────────────────────────────────────────────────────

/// Newtype for user identifiers. Can be used as a HashMap key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for UserId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(UserId(s))
    }
}

// ─── OrderCode ───────────────────────────────────────────────────────────────

/// Alphabet a trade code is drawn from: uppercase A–Z plus 0–9.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a trade code.
pub const CODE_LENGTH: usize = 6;

/// A copy-trade order code: exactly 6 uppercase alphanumeric characters.
///
/// `parse` is the only way to build one from user input, so every
/// `OrderCode` in the crate is well-formed. Uniqueness among active codes
/// is the ledger's job, not the client's.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderCode(String);

impl OrderCode {
    /// Parse user input into a code. Trims whitespace and uppercases, then
    /// rejects anything that is not exactly 6 characters of A–Z0–9. Runs
    /// locally; malformed input never reaches the network.
    pub fn parse(input: &str) -> Result<Self, CodeParseError> {
        let normalized = input.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(CodeParseError::Empty);
        }
        if normalized.len() != CODE_LENGTH {
            return Err(CodeParseError::WrongLength(normalized.len()));
        }
        if !normalized.bytes().all(|b| CODE_ALPHABET.contains(&b)) {
            return Err(CodeParseError::InvalidCharacter);
        }
        Ok(Self(normalized))
    }

    /// Generate a code with each character drawn uniformly from the
    /// 36-character alphabet. Used by admin tooling and tests; issuance is
    /// otherwise out of the SDK's hands.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code: String = (0..CODE_LENGTH)
            .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Why a code failed local parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeParseError {
    Empty,
    WrongLength(usize),
    InvalidCharacter,
}

impl std::fmt::Display for CodeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "code is empty"),
            Self::WrongLength(n) => {
                write!(f, "code must be {} characters, got {}", CODE_LENGTH, n)
            }
            Self::InvalidCharacter => write!(f, "code may only contain A-Z and 0-9"),
        }
    }
}

impl std::fmt::Display for OrderCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderCode {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for OrderCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OrderCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        OrderCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Side ────────────────────────────────────────────────────────────────────

/// Trade side. The ledger sends `long`/`short`; older order records use
/// `buy`/`sell`, accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[serde(alias = "buy")]
    Long,
    #[serde(alias = "sell")]
    Short,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::Long => write!(f, "Long"),
            Side::Short => write!(f, "Short"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_partition_serde() {
        let p: Partition = serde_json::from_str("\"spot\"").unwrap();
        assert_eq!(p, Partition::Spot);
        assert_eq!(serde_json::to_string(&Partition::Exchange).unwrap(), "\"exchange\"");
    }

    #[test]
    fn test_partition_is_trading() {
        assert!(!Partition::Exchange.is_trading());
        assert!(Partition::Spot.is_trading());
        assert!(Partition::Futures.is_trading());
    }

    #[test]
    fn test_code_parse_normalizes() {
        let code = OrderCode::parse(" ab12cd ").unwrap();
        assert_eq!(code.as_str(), "AB12CD");
    }

    #[test]
    fn test_code_parse_rejects_empty() {
        assert_eq!(OrderCode::parse("   "), Err(CodeParseError::Empty));
    }

    #[test]
    fn test_code_parse_rejects_wrong_length() {
        assert_eq!(OrderCode::parse("AB12C"), Err(CodeParseError::WrongLength(5)));
        assert_eq!(
            OrderCode::parse("AB12CD3"),
            Err(CodeParseError::WrongLength(7))
        );
    }

    #[test]
    fn test_code_parse_rejects_symbols() {
        assert_eq!(
            OrderCode::parse("AB-2CD"),
            Err(CodeParseError::InvalidCharacter)
        );
    }

    #[test]
    fn test_code_generate_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let code = OrderCode::generate(&mut rng);
            // A generated code must round-trip through parse unchanged.
            assert_eq!(OrderCode::parse(code.as_str()).unwrap(), code);
        }
    }

    #[test]
    fn test_code_serde_rejects_malformed() {
        let ok: OrderCode = serde_json::from_str("\"AB12CD\"").unwrap();
        assert_eq!(ok.as_str(), "AB12CD");
        assert!(serde_json::from_str::<OrderCode>("\"nope\"").is_err());
    }

    #[test]
    fn test_side_serde_aliases() {
        let long: Side = serde_json::from_str("\"long\"").unwrap();
        assert_eq!(long, Side::Long);
        let buy: Side = serde_json::from_str("\"buy\"").unwrap();
        assert_eq!(buy, Side::Long);
        let sell: Side = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(sell, Side::Short);
    }
}

//! Coin type enumeration and normalization

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MetaError;

/// The target chain a wallet's addresses are derived for.
///
/// The coin type selects the pubkey-to-address method used by the derivation
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinType {
    Skycoin,
    Bitcoin,
}

impl CoinType {
    /// Canonical lowercase name, as stored in metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            CoinType::Skycoin => "skycoin",
            CoinType::Bitcoin => "bitcoin",
        }
    }

    /// Parse a canonical name only. Stored `coin` values are always written
    /// in canonical form; anything else is corruption, not an alias.
    pub(crate) fn from_canonical(s: &str) -> Option<Self> {
        match s {
            "skycoin" => Some(CoinType::Skycoin),
            "bitcoin" => Some(CoinType::Bitcoin),
            _ => None,
        }
    }
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a user-supplied coin name to a [`CoinType`].
///
/// Matching is case-insensitive and accepts the short aliases `sky` and
/// `btc`. This is the single validated entry point for constructing a coin
/// type from untrusted input; run loaded records through it before trusting
/// their `coin` field.
pub fn resolve_coin_type(s: &str) -> Result<CoinType, MetaError> {
    match s.to_lowercase().as_str() {
        "sky" | "skycoin" => Ok(CoinType::Skycoin),
        "btc" | "bitcoin" => Ok(CoinType::Bitcoin),
        _ => Err(MetaError::InvalidCoinType(s.to_string())),
    }
}

impl FromStr for CoinType {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_coin_type(s)
    }
}

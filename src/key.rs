//! The closed set of recognized metadata fields

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MetaError;

/// A recognized wallet metadata field.
///
/// The set is closed: the persistence layer round-trips exactly these keys
/// and nothing else. Each variant serializes as the canonical key name used
/// on disk (note the timestamp's historical short name `tm`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetaKey {
    /// Wallet format version
    #[serde(rename = "version")]
    Version,
    /// On-disk file name
    #[serde(rename = "filename")]
    Filename,
    /// User-facing wallet label
    #[serde(rename = "label")]
    Label,
    /// Creation time, unix seconds
    #[serde(rename = "tm")]
    Timestamp,
    /// Wallet derivation scheme identifier
    #[serde(rename = "type")]
    Type,
    /// Target coin
    #[serde(rename = "coin")]
    Coin,
    /// Whether the wallet secrets are encrypted
    #[serde(rename = "encrypted")]
    Encrypted,
    /// Encryption scheme identifier, empty when decrypted
    #[serde(rename = "cryptoType")]
    CryptoType,
    /// Wallet seed, plaintext or absent
    #[serde(rename = "seed")]
    Seed,
    /// Seed for generating the next address (deterministic wallets)
    #[serde(rename = "lastSeed")]
    LastSeed,
    /// Encrypted blob holding the seed and per-address secrets
    #[serde(rename = "secrets")]
    Secrets,
    /// BIP-44 coin index (bip44 wallets)
    #[serde(rename = "bip44Coin")]
    Bip44Coin,
    /// Integrity hash over the derived accounts
    #[serde(rename = "accountsHash")]
    AccountsHash,
    /// Optional BIP-39 passphrase (bip44 wallets)
    #[serde(rename = "seedPassphrase")]
    SeedPassphrase,
    /// Extended public key (watch-only wallets)
    #[serde(rename = "xpub")]
    Xpub,
}

impl MetaKey {
    /// Every recognized key, in serialization order.
    pub const ALL: [MetaKey; 15] = [
        MetaKey::Version,
        MetaKey::Filename,
        MetaKey::Label,
        MetaKey::Timestamp,
        MetaKey::Type,
        MetaKey::Coin,
        MetaKey::Encrypted,
        MetaKey::CryptoType,
        MetaKey::Seed,
        MetaKey::LastSeed,
        MetaKey::Secrets,
        MetaKey::Bip44Coin,
        MetaKey::AccountsHash,
        MetaKey::SeedPassphrase,
        MetaKey::Xpub,
    ];

    /// Canonical key name, as used by the persistence layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaKey::Version => "version",
            MetaKey::Filename => "filename",
            MetaKey::Label => "label",
            MetaKey::Timestamp => "tm",
            MetaKey::Type => "type",
            MetaKey::Coin => "coin",
            MetaKey::Encrypted => "encrypted",
            MetaKey::CryptoType => "cryptoType",
            MetaKey::Seed => "seed",
            MetaKey::LastSeed => "lastSeed",
            MetaKey::Secrets => "secrets",
            MetaKey::Bip44Coin => "bip44Coin",
            MetaKey::AccountsHash => "accountsHash",
            MetaKey::SeedPassphrase => "seedPassphrase",
            MetaKey::Xpub => "xpub",
        }
    }
}

impl fmt::Display for MetaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetaKey {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetaKey::ALL
            .iter()
            .find(|k| k.as_str() == s)
            .copied()
            .ok_or_else(|| MetaError::UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        for key in MetaKey::ALL {
            assert_eq!(key.as_str().parse::<MetaKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_timestamp_uses_short_name() {
        assert_eq!(MetaKey::Timestamp.as_str(), "tm");
        assert_eq!("tm".parse::<MetaKey>().unwrap(), MetaKey::Timestamp);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = "balance".parse::<MetaKey>().unwrap_err();
        assert_eq!(err, MetaError::UnknownKey("balance".to_string()));
    }
}

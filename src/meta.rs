//! The wallet metadata record
//!
//! Every value is stored in its canonical string form regardless of logical
//! type; the typed accessors parse and format on the way in and out. Setters
//! do not check cross-field invariants (setting `coin` does not revalidate
//! `bip44Coin`) — the owning wallet maintains those through the compound
//! operations [`Meta::set_encrypted`], [`Meta::set_decrypted`] and
//! [`Meta::erase_seeds`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coin::CoinType;
use crate::crypto::CryptoType;
use crate::error::MetaError;
use crate::key::MetaKey;
use crate::Result;

/// A wallet's metadata record.
///
/// A mapping from the closed set of [`MetaKey`]s to string values, owned
/// exclusively by its wallet. The record has no internal synchronization;
/// the owning wallet serializes access. Cloning yields a fully independent
/// copy, used for snapshots that must survive later mutation of the source.
///
/// Serializes as a flat object keyed by the canonical key names, with absent
/// keys absent from the output — the persistence layer never sees an
/// invented zero value for a field that was never set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meta {
    fields: BTreeMap<MetaKey, String>,
}

fn malformed(key: MetaKey, value: &str) -> MetaError {
    // Values only enter through typed setters or a validated load path, so
    // a parse failure here means the record is corrupted.
    log::error!("malformed wallet metadata field {}: {:?}", key, value);
    MetaError::MalformedField {
        key,
        value: value.to_string(),
    }
}

impl Meta {
    /// Empty record: no fields set, decrypted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for a freshly generated wallet, stamped with the current time.
    pub fn create(coin: CoinType, wallet_type: &str) -> Self {
        let mut meta = Self::default();
        meta.set_coin(coin);
        meta.set_wallet_type(wallet_type);
        meta.set_timestamp(chrono::Utc::now().timestamp());
        meta
    }

    /// Raw lookup of a stored value.
    pub fn find(&self, key: MetaKey) -> Option<&str> {
        self.fields.get(&key).map(String::as_str)
    }

    fn get(&self, key: MetaKey) -> &str {
        self.find(key).unwrap_or("")
    }

    fn set(&mut self, key: MetaKey, value: impl Into<String>) {
        self.fields.insert(key, value.into());
    }

    pub fn version(&self) -> &str {
        self.get(MetaKey::Version)
    }

    pub fn set_version(&mut self, version: &str) {
        self.set(MetaKey::Version, version);
    }

    pub fn filename(&self) -> &str {
        self.get(MetaKey::Filename)
    }

    pub fn set_filename(&mut self, filename: &str) {
        self.set(MetaKey::Filename, filename);
    }

    pub fn label(&self) -> &str {
        self.get(MetaKey::Label)
    }

    pub fn set_label(&mut self, label: &str) {
        self.set(MetaKey::Label, label);
    }

    /// The wallet derivation scheme identifier ("deterministic", "bip44", ...).
    pub fn wallet_type(&self) -> &str {
        self.get(MetaKey::Type)
    }

    pub fn set_wallet_type(&mut self, wallet_type: &str) {
        self.set(MetaKey::Type, wallet_type);
    }

    pub fn seed(&self) -> &str {
        self.get(MetaKey::Seed)
    }

    pub fn set_seed(&mut self, seed: &str) {
        self.set(MetaKey::Seed, seed);
    }

    /// Seed for generating the next address (deterministic wallets).
    pub fn last_seed(&self) -> &str {
        self.get(MetaKey::LastSeed)
    }

    pub fn set_last_seed(&mut self, last_seed: &str) {
        self.set(MetaKey::LastSeed, last_seed);
    }

    pub fn seed_passphrase(&self) -> &str {
        self.get(MetaKey::SeedPassphrase)
    }

    pub fn set_seed_passphrase(&mut self, passphrase: &str) {
        self.set(MetaKey::SeedPassphrase, passphrase);
    }

    pub fn accounts_hash(&self) -> &str {
        self.get(MetaKey::AccountsHash)
    }

    pub fn set_accounts_hash(&mut self, hash: &str) {
        self.set(MetaKey::AccountsHash, hash);
    }

    pub fn xpub(&self) -> &str {
        self.get(MetaKey::Xpub)
    }

    pub fn set_xpub(&mut self, xpub: &str) {
        self.set(MetaKey::Xpub, xpub);
    }

    /// The wallet's coin type, `None` if never set.
    ///
    /// Only the canonical stored form is accepted; records loaded from
    /// untrusted storage should have been run through
    /// [`resolve_coin_type`](crate::resolve_coin_type) already.
    pub fn coin(&self) -> Result<Option<CoinType>> {
        match self.find(MetaKey::Coin) {
            None => Ok(None),
            Some(v) => CoinType::from_canonical(v)
                .map(Some)
                .ok_or_else(|| malformed(MetaKey::Coin, v)),
        }
    }

    pub fn set_coin(&mut self, coin: CoinType) {
        self.set(MetaKey::Coin, coin.as_str());
    }

    /// Creation time in unix seconds.
    ///
    /// Intentionally lenient: a missing or unparsable timestamp reads as 0.
    /// Wallet-level validation catches bad timestamps, not this accessor.
    pub fn timestamp(&self) -> i64 {
        self.get(MetaKey::Timestamp).parse().unwrap_or(0)
    }

    pub fn set_timestamp(&mut self, timestamp: i64) {
        self.set(MetaKey::Timestamp, timestamp.to_string());
    }

    /// The BIP-44 coin index, `None` if this is not a bip44 wallet.
    ///
    /// Absence is distinct from `Some(0)`: coin index 0 is a real index
    /// (mainnet Bitcoin), not a default.
    pub fn bip44_coin(&self) -> Result<Option<u32>> {
        match self.find(MetaKey::Bip44Coin) {
            None => Ok(None),
            Some(v) => v
                .parse::<u32>()
                .map(Some)
                .map_err(|_| malformed(MetaKey::Bip44Coin, v)),
        }
    }

    pub fn set_bip44_coin(&mut self, coin: u32) {
        self.set(MetaKey::Bip44Coin, coin.to_string());
    }

    /// Whether the wallet secrets are encrypted.
    ///
    /// A flag that was never written means the record predates any
    /// encryption operation and reads as `false`; a present but non-boolean
    /// value is corruption and fails.
    pub fn is_encrypted(&self) -> Result<bool> {
        match self.find(MetaKey::Encrypted) {
            None => Ok(false),
            Some(v) => v
                .parse::<bool>()
                .map_err(|_| malformed(MetaKey::Encrypted, v)),
        }
    }

    /// The recorded encryption scheme, empty when decrypted.
    pub fn crypto_type(&self) -> CryptoType {
        CryptoType::from(self.get(MetaKey::CryptoType))
    }

    /// The encrypted secrets blob, empty when decrypted.
    pub fn secrets(&self) -> &str {
        self.get(MetaKey::Secrets)
    }

    fn set_is_encrypted(&mut self, encrypted: bool) {
        self.set(MetaKey::Encrypted, encrypted.to_string());
    }

    fn set_crypto_type(&mut self, crypto_type: &CryptoType) {
        self.set(MetaKey::CryptoType, crypto_type.as_str());
    }

    fn set_secrets(&mut self, secrets: &str) {
        self.set(MetaKey::Secrets, secrets);
    }

    /// Switch the record into the encrypted state: record the scheme, store
    /// the blob the cryptographic layer produced, set the flag.
    ///
    /// Callers must have blanked plaintext material via
    /// [`erase_seeds`](Meta::erase_seeds) before calling this; the
    /// transition does not erase it itself.
    pub fn set_encrypted(&mut self, crypto_type: CryptoType, encrypted_secrets: &str) {
        log::debug!("marking wallet metadata encrypted with {}", crypto_type);
        self.set_crypto_type(&crypto_type);
        self.set_secrets(encrypted_secrets);
        self.set_is_encrypted(true);
    }

    /// Switch the record into the decrypted state, discarding the blob and
    /// the scheme identifier.
    ///
    /// Does not restore plaintext seed fields; the caller repopulates them
    /// from the decrypted blob.
    pub fn set_decrypted(&mut self) {
        log::debug!("marking wallet metadata decrypted");
        self.set_is_encrypted(false);
        self.set_secrets("");
        self.set_crypto_type(&CryptoType::default());
    }

    /// Blank the plaintext seed fields: `seed`, `lastSeed` and
    /// `seedPassphrase`. Idempotent; leaves `secrets` and `cryptoType`
    /// untouched.
    pub fn erase_seeds(&mut self) {
        self.set_seed("");
        self.set_last_seed("");
        self.set_seed_passphrase("");
    }
}

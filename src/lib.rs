//! Typed metadata records for cryptocurrency wallets.
//!
//! A wallet carries a small string-keyed record describing its identity
//! (label, filename, version), its coin configuration, its derivation state
//! and its encryption status. This crate provides that record as [`Meta`]:
//! a typed view over the mapping, with accessors that parse and format the
//! stored strings, the encrypted/decrypted state transitions, and coin-type
//! normalization.
//!
//! Persistence, key derivation and the encryption schemes themselves live in
//! the layers around this crate; they consume the record through its typed
//! accessors and its serde representation.
//!
//! # Example
//!
//! ```
//! use wallet_meta::{CoinType, CryptoType, Meta};
//!
//! let mut meta = Meta::create(CoinType::Skycoin, "deterministic");
//! meta.set_label("savings");
//! meta.set_seed("voyage say extend find sheriff surge priority merit ignore");
//!
//! // Lock the wallet: the cryptographic layer hands us the identifiers,
//! // plaintext material is erased first.
//! meta.erase_seeds();
//! meta.set_encrypted(CryptoType::from(CryptoType::SCRYPT_CHACHA20POLY1305), "ciphertext");
//! assert!(meta.is_encrypted().unwrap());
//! ```

pub mod coin;
pub mod crypto;
pub mod error;
pub mod key;
pub mod meta;

// Re-exports for convenience
pub use coin::{resolve_coin_type, CoinType};
pub use crypto::CryptoType;
pub use error::MetaError;
pub use key::MetaKey;
pub use meta::Meta;

/// Common result type
pub type Result<T> = std::result::Result<T, MetaError>;

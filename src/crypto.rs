//! Encryption scheme identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MetaError;

/// Identifier of the symmetric scheme protecting wallet secrets at rest.
///
/// The metadata record only records which scheme was used; the schemes
/// themselves live in the cryptographic layer. The empty identifier means
/// the wallet is decrypted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CryptoType(String);

impl CryptoType {
    /// Legacy SHA256-XOR scheme.
    pub const SHA256_XOR: &'static str = "sha256-xor";
    /// Scrypt-derived ChaCha20-Poly1305 scheme.
    pub const SCRYPT_CHACHA20POLY1305: &'static str = "scrypt-chacha20poly1305";

    /// Validated constructor for user- or config-supplied identifiers.
    /// Values loaded from storage go through `From` instead; the
    /// cryptographic layer rejects schemes it cannot handle.
    pub fn resolve(s: &str) -> Result<Self, MetaError> {
        match s {
            Self::SHA256_XOR | Self::SCRYPT_CHACHA20POLY1305 => Ok(CryptoType(s.to_string())),
            _ => Err(MetaError::UnknownCryptoType(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no scheme is recorded (the decrypted state).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for CryptoType {
    fn from(s: &str) -> Self {
        CryptoType(s.to_string())
    }
}

impl From<String> for CryptoType {
    fn from(s: String) -> Self {
        CryptoType(s)
    }
}

impl fmt::Display for CryptoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_schemes() {
        assert_eq!(
            CryptoType::resolve("sha256-xor").unwrap().as_str(),
            CryptoType::SHA256_XOR
        );
        assert_eq!(
            CryptoType::resolve("scrypt-chacha20poly1305").unwrap().as_str(),
            CryptoType::SCRYPT_CHACHA20POLY1305
        );
    }

    #[test]
    fn test_resolve_rejects_unknown() {
        let err = CryptoType::resolve("rot13").unwrap_err();
        assert_eq!(err, MetaError::UnknownCryptoType("rot13".to_string()));
        assert!(CryptoType::resolve("").is_err());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(CryptoType::default().is_empty());
        assert!(!CryptoType::from(CryptoType::SHA256_XOR).is_empty());
    }
}

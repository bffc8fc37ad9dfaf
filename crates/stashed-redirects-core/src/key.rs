//! Session key derivation per purpose.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Prefix used for stashed redirect keys unless configured otherwise.
pub const DEFAULT_KEY_PREFIX: &str = "__url_stash_";

/// How the purpose is embedded in the session key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyScheme {
    /// `prefix + purpose`.
    #[default]
    Plain,
    /// `prefix + hex(sha256(purpose))`; keeps the purpose text out of the session.
    Hashed,
}

/// Derives session keys from purposes.
///
/// Derivation is a pure function of the purpose (and this namespacer's fixed
/// prefix and scheme), so the same purpose maps to the same key from any
/// handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNamespacer {
    prefix: String,
    scheme: KeyScheme,
}

impl Default for KeyNamespacer {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PREFIX, KeyScheme::Plain)
    }
}

impl KeyNamespacer {
    pub fn new(prefix: impl Into<String>, scheme: KeyScheme) -> Self {
        Self {
            prefix: prefix.into(),
            scheme,
        }
    }

    pub fn hashed() -> Self {
        Self::new(DEFAULT_KEY_PREFIX, KeyScheme::Hashed)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn scheme(&self) -> KeyScheme {
        self.scheme
    }

    /// Session key for `purpose`.
    pub fn derive_key(&self, purpose: &str) -> String {
        match self.scheme {
            KeyScheme::Plain => format!("{}{}", self.prefix, purpose),
            KeyScheme::Hashed => {
                let digest = Sha256::digest(purpose.as_bytes());
                format!("{}{}", self.prefix, hex::encode(digest))
            }
        }
    }

    /// Whether `key` lives in this namespacer's key space.
    pub fn owns_key(&self, key: &str) -> bool {
        key.starts_with(&self.prefix)
    }
}

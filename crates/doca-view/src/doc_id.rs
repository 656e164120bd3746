//! Display ids for blueprints without a stored catalogue code.

use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// How a display id is synthesized when a blueprint has none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Derived from a hash of the document key; identical on every load.
    #[default]
    Stable,
    /// Drawn at random each time the document is opened.
    Random,
}

impl IdStrategy {
    /// Synthesize an id for `key`.
    pub fn synthesize(self, key: &str) -> String {
        match self {
            Self::Stable => stable_id(key),
            Self::Random => random_id(&mut rand::thread_rng()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Random => "random",
        }
    }
}

/// `DOC-` followed by four digits taken from the SHA-256 of `key`.
pub fn stable_id(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    let value = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    format!("DOC-{}", 1000 + value % 9000)
}

/// `DOC-` followed by a random four-digit number.
pub fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("DOC-{}", rng.gen_range(1000..=9999))
}

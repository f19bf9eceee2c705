//! Known-answer test cases.

use std::fmt;

use serde::{Deserialize, Serialize};

use aes_core::{block_from_hex, Aes128Key};

use crate::error::{Error, Result};

/// Which cipher direction a case exercises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `input` is plaintext, `expected` is ciphertext.
    Encrypt,
    /// `input` is ciphertext, `expected` is plaintext.
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.pad("encrypt"),
            Direction::Decrypt => f.pad("decrypt"),
        }
    }
}

/// One key/input/expected triple, all as hex text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownAnswer {
    /// Human-readable name shown in reports.
    pub label: String,
    /// Direction to run.
    pub direction: Direction,
    /// 128-bit key.
    #[serde(rename = "key")]
    pub key_hex: String,
    /// Block fed to the cipher.
    #[serde(rename = "input")]
    pub input_hex: String,
    /// Block the cipher must produce.
    #[serde(rename = "expected")]
    pub expected_hex: String,
}

impl KnownAnswer {
    /// An encryption case: `plaintext_hex` under `key_hex` must give `ciphertext_hex`.
    pub fn encrypt(
        label: impl Into<String>,
        key_hex: impl Into<String>,
        plaintext_hex: impl Into<String>,
        ciphertext_hex: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            direction: Direction::Encrypt,
            key_hex: key_hex.into(),
            input_hex: plaintext_hex.into(),
            expected_hex: ciphertext_hex.into(),
        }
    }

    /// A decryption case: `ciphertext_hex` under `key_hex` must give `plaintext_hex`.
    pub fn decrypt(
        label: impl Into<String>,
        key_hex: impl Into<String>,
        ciphertext_hex: impl Into<String>,
        plaintext_hex: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            direction: Direction::Decrypt,
            key_hex: key_hex.into(),
            input_hex: ciphertext_hex.into(),
            expected_hex: plaintext_hex.into(),
        }
    }

    /// Both directions of one published key/plaintext/ciphertext vector.
    pub fn both_directions(
        label: &str,
        key_hex: &str,
        plaintext_hex: &str,
        ciphertext_hex: &str,
    ) -> [Self; 2] {
        [
            Self::encrypt(label, key_hex, plaintext_hex, ciphertext_hex),
            Self::decrypt(label, key_hex, ciphertext_hex, plaintext_hex),
        ]
    }

    /// Checks that key, input and expected value all decode to 16 bytes.
    pub fn validate(&self) -> Result<()> {
        let invalid = |source| Error::InvalidCase {
            label: self.label.clone(),
            source,
        };
        Aes128Key::from_hex(&self.key_hex).map_err(invalid)?;
        block_from_hex(&self.input_hex).map_err(invalid)?;
        block_from_hex(&self.expected_hex).map_err(invalid)?;
        Ok(())
    }
}

//! TOML vector files.
//!
//! ```toml
//! [[case]]
//! label = "FIPS-197 appendix C.1"
//! direction = "encrypt"
//! key = "000102030405060708090a0b0c0d0e0f"
//! input = "00112233445566778899aabbccddeeff"
//! expected = "69c4e0d86a7b0430d8cdb78070b4c55a"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::vector::KnownAnswer;

/// A list of cases stored on disk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorFile {
    /// Cases in file order.
    #[serde(rename = "case", default)]
    pub cases: Vec<KnownAnswer>,
}

impl VectorFile {
    /// Parses and validates TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: Self = toml::from_str(text)?;
        for case in &file.cases {
            case.validate()?;
        }
        Ok(file)
    }

    /// Reads, parses and validates a vector file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), cases = file.cases.len(), "loaded vector file");
        Ok(file)
    }

    /// Renders the cases as TOML in the layout [`VectorFile::from_toml_str`] reads.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Writes the cases to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_toml_string()?;
        fs::write(path, text).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), cases = self.cases.len(), "wrote vector file");
        Ok(())
    }
}

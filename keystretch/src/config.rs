//! Key derivation settings in TOML.
//!
//! Applications usually fix hash function, iteration count and key length once and store them
//! next to the derived keys. [KdfConfig] is that record:
//!
//! ```toml
//! algorithm = "sha256"
//! iterations = 600000
//! output_len = 32
//! ```
//!
//! `iterations` defaults to [DEFAULT_ITERATIONS], `output_len` to the digest length of the
//! chosen algorithm. The config holds no secrets; password and salt are supplied per derivation.

use serde::{Deserialize, Serialize};

use keystretch_ciphers::HashAlgorithm;

use crate::pbkdf2::max_output_len;
use crate::{Error, Pbkdf2Params, Result, DEFAULT_ITERATIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KdfConfig {
    pub algorithm: HashAlgorithm,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_len: Option<usize>,
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

impl KdfConfig {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            iterations: DEFAULT_ITERATIONS,
            output_len: None,
        }
    }

    /// Parses and validates a config
    ///
    /// ```rust
    /// use keystretch::{config::KdfConfig, HashAlgorithm};
    ///
    /// let config = KdfConfig::from_toml_str(r#"algorithm = "sha512""#)?;
    /// assert_eq!(config.algorithm, HashAlgorithm::Sha512);
    /// assert_eq!(config.output_len(), 64);
    ///
    /// assert!(KdfConfig::from_toml_str(r#"algorithm = "crc32""#).is_err());
    /// assert!(KdfConfig::from_toml_str("algorithm = \"sha1\"\niterations = 0").is_err());
    /// # Ok::<(), keystretch::Error>(())
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate a configuration
    ///
    /// Rejects configurations [crate::pbkdf2::pbkdf2] would reject; the algorithm itself is
    /// already checked while parsing.
    pub fn validate(&self) -> Result<()> {
        Error::check_iterations(self.iterations)?;
        Error::check_output_len(self.output_len(), max_output_len(self.algorithm.hash_len()))
    }

    /// Number of bytes to derive
    pub fn output_len(&self) -> usize {
        self.output_len.unwrap_or_else(|| self.algorithm.hash_len())
    }

    /// Binds password and salt to this configuration
    pub fn params<'a>(&self, password: &'a [u8], salt: &'a [u8]) -> Pbkdf2Params<'a> {
        Pbkdf2Params::new(self.algorithm, password, salt)
            .iterations(self.iterations)
            .output_len(self.output_len())
    }
}

use keystretch_ciphers::{HmacError, UnsupportedAlgorithm};

/// Everything that can go wrong while deriving a key.
///
/// All of these are reported before any output is handed to the caller; a derivation either
/// produces a complete key or nothing.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    UnsupportedAlgorithm(#[from] UnsupportedAlgorithm),
    #[error("iteration count must be at least 1, got {0}")]
    InvalidIterationCount(u32),
    #[error("requested {requested} bytes of output, but at most {max} bytes can be derived with this hash")]
    OutputTooLong { requested: usize, max: usize },
    #[error("hmac computation failed: {0}")]
    Hmac(#[from] HmacError),
    #[error("invalid key derivation config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("could not serialize key derivation config: {0}")]
    ConfigSerialization(#[from] toml::ser::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Helper function to check an iteration count
    pub(crate) fn check_iterations(iterations: u32) -> Result<()> {
        if iterations == 0 {
            Err(Self::InvalidIterationCount(iterations))
        } else {
            Ok(())
        }
    }

    /// Helper function to check a requested output length against the maximum
    pub(crate) fn check_output_len(requested: usize, max: usize) -> Result<()> {
        if requested > max {
            Err(Self::OutputTooLong { requested, max })
        } else {
            Ok(())
        }
    }
}

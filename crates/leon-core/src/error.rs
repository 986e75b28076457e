// crates/leon-core/src/error.rs
// Error type shared by the carousel core and the WASM frontend

use thiserror::Error;

/// Main error type for the site widgets
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeonError {
    #[error("carousel needs at least one image")]
    NoImages,

    #[error("autoplay delay must be positive")]
    ZeroDelay,

    #[error("autoplay delay of {ms}ms exceeds the {max}ms browser timer limit")]
    DelayTooLong { ms: u64, max: u64 },

    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

/// Convenience type alias for Result using LeonError
pub type Result<T> = std::result::Result<T, LeonError>;

impl From<toml::de::Error> for LeonError {
    fn from(err: toml::de::Error) -> Self {
        LeonError::Config(err.to_string())
    }
}

impl From<LeonError> for String {
    fn from(err: LeonError) -> Self {
        err.to_string()
    }
}

use thiserror::Error;

/// Failures surfaced by the primitives.
///
/// Every failure is detected before any partial result could be mistaken
/// for valid output; none is ever coerced to a default value.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw integer argument was malformed: longer than 16 bytes,
    /// carrying nonzero bytes beyond the native integer width, or
    /// decoding to a value below 1.
    #[error("malformed integer argument encoding")]
    InvalidArgumentShape,

    /// A byte count was outside its allowed bounds.
    #[error("{what} must be between {min} and {max}, got {got}")]
    OutOfRange {
        what: &'static str,
        min: u32,
        max: u32,
        got: u32,
    },

    /// The digest name did not resolve in the registry.
    #[error("unknown digest '{0}'")]
    UnknownDigest(String),

    /// The digest resolved but its output is larger than we support.
    #[error("digest '{name}' output size {size} exceeds the {max}-byte limit")]
    UnsupportedDigest {
        name: String,
        size: usize,
        max: usize,
    },

    /// The PBKDF2 primitive could not run (e.g. zero iterations).
    #[error("key derivation failed")]
    DerivationFailed,

    /// The OS random source reported failure.
    #[error("OS random generator unavailable")]
    RandomSource,

    /// Heap allocation for a large salt failed.
    #[error("out of memory allocating salt buffer")]
    OutOfMemory,

    /// The address text is not a valid IPv6 address.
    #[error("'{0}' is not a valid IPv6 address")]
    InvalidAddress(String),

    /// The prefix length is outside [0, 128].
    #[error("prefix length {0} is outside [0, 128]")]
    InvalidPrefixLength(i64),

    /// Binary-to-text address rendering failed.
    #[error("failed to render IPv6 address")]
    Render,
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the `helpers` crate.
//!
//! Most helpers never surface these: they return a sentinel value instead
//! (empty string, `0.0`, `false`). The fallible `try_*` / `validate_*`
//! variants return them for callers that need the cause.

/// All errors that fallible helpers can report.
#[derive(Debug, thiserror::Error)]
pub enum HelpersError {
    /// A user-supplied regex pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Input was not valid standard Base64.
    #[error("Base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Input was not valid JSON, or a value could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// bcrypt hashing or verification failed.
    #[error("Password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// A builder setting is invalid.
    #[error("Config error: {0}")]
    Config(String),
}

/// A type alias for `Result<T, HelpersError>`.
pub type Result<T> = std::result::Result<T, HelpersError>;

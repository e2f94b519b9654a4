use thiserror::Error;

/// All errors that can occur in keyratchet.
#[derive(Debug, Error)]
pub enum KeyRatchetError {
    // --- Input validation ---
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // --- Crypto errors ---
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Wrong passphrase, wrong subject, and tampered ciphertext all land
    /// here with the same message.
    #[error("Authentication failed — wrong passphrase or corrupted data")]
    AuthenticationFailure,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for keyratchet results.
pub type Result<T> = std::result::Result<T, KeyRatchetError>;

// wallet-core/src/error.rs

use serde::Serialize;
use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Path Error: {0}")]
    Path(#[from] PathError),

    #[error("Unsupported derivation: {0}")]
    UnsupportedDerivation(String),

    #[error("Private key required: {0}")]
    MissingPrivateKey(String),

    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),

    #[error("Unsupported variant: {0}")]
    UnsupportedVariant(String),

    #[error("Key derivation failed: {0}")]
    Derivation(String),

    #[error("Address encoding failed: {0}")]
    Encoding(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word #{0} is not in the BIP39 wordlist.")]
    UnknownWord(usize),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path must start with 'm': {0:?}")]
    MissingRoot(String),

    #[error("empty segment at position {0}")]
    EmptySegment(usize),

    #[error("segment {0:?} is not a number")]
    NotNumeric(String),

    #[error("index {0} is out of range (must be below 2^31)")]
    IndexOutOfRange(String),

    #[error("path is deeper than 255 levels")]
    TooDeep,

    #[error("a derivation path is required")]
    Missing,
}

/// Stable error classification handed to callers across the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    InvalidMnemonic,
    InvalidPath,
    UnsupportedDerivation,
    MissingPrivateKey,
    UnsupportedChain,
    UnsupportedVariant,
    DerivationError,
    EncodingError,
    ConfigError,
}

impl ErrorKind {
    pub const fn description(self) -> &'static str {
        match self {
            ErrorKind::InvalidMnemonic => "mnemonic phrase is not a valid BIP-39 phrase",
            ErrorKind::InvalidPath => "derivation path is malformed",
            ErrorKind::UnsupportedDerivation => {
                "ed25519 chains only support hardened path segments"
            }
            ErrorKind::MissingPrivateKey => "operation needs a private key but none is available",
            ErrorKind::UnsupportedChain => "chain is not supported",
            ErrorKind::UnsupportedVariant => "address variant is missing or not supported",
            ErrorKind::DerivationError => "key derivation produced an invalid key",
            ErrorKind::EncodingError => "address could not be encoded",
            ErrorKind::ConfigError => "engine configuration is invalid",
        }
    }
}

impl WalletError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::Mnemonic(_) => ErrorKind::InvalidMnemonic,
            WalletError::Path(_) => ErrorKind::InvalidPath,
            WalletError::UnsupportedDerivation(_) => ErrorKind::UnsupportedDerivation,
            WalletError::MissingPrivateKey(_) => ErrorKind::MissingPrivateKey,
            WalletError::UnsupportedChain(_) => ErrorKind::UnsupportedChain,
            WalletError::UnsupportedVariant(_) => ErrorKind::UnsupportedVariant,
            WalletError::Derivation(_) => ErrorKind::DerivationError,
            WalletError::Encoding(_) => ErrorKind::EncodingError,
            WalletError::Config(_) => ErrorKind::ConfigError,
        }
    }
}

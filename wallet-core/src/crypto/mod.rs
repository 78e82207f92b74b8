// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Mnemonic validation**: BIP-39 phrases and seed expansion via [`WalletMnemonic`].
//! - **Derivation paths**: parsing and canonical formatting via [`DerivationPath`],
//!   pre-built paths via [`DerivationPaths`].
//! - **Key derivation**: BIP-32 (secp256k1) and SLIP-0010 (ed25519) behind [`KeyDeriver`].
//! - **Hashes**: the digest primitives the address encoders share.

pub mod derivation_path;
pub mod hash;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

// Re-exports for cleaner API access
pub use derivation_path::{ChildIndex, DerivationPath, HARDENED_OFFSET};
pub use key_deriver::{CurveType, DerivedKey, Ed25519Key, ExtendedKey, KeyDeriver};
pub use mnemonic::WalletMnemonic;
pub use paths::DerivationPaths;

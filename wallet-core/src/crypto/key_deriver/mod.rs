// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - Multi-Curve Support
//
// Kiến trúc:
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │     ┌──────────────┴──────────────┐             │
// │     ▼                             ▼             │
// │  secp256k1 (BIP-32)        ed25519 (SLIP-0010)  │
// │  ├─ Ethereum              ├─ Solana             │
// │  ├─ Bitcoin (x4)          ├─ Aptos              │
// │  ├─ Cosmos                └─ Sui                │
// │  └─ Custom                                      │
// └─────────────────────────────────────────────────┘

pub mod ed25519;
pub mod secp256k1;

// Re-exports
pub use ed25519::{Ed25519Deriver, Ed25519Key};
pub use secp256k1::{ExtendedKey, Secp256k1Deriver};

use crate::crypto::derivation_path::DerivationPath;
use crate::error::{WalletError, WalletResult};

/// Seed length produced by BIP-39.
pub const SEED_LEN: usize = 64;

// =============================================================================
// COMMON TYPES
// =============================================================================

/// The key tree a chain derives from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveType {
    /// secp256k1 — Bitcoin, Ethereum, Cosmos
    Secp256k1,
    /// Ed25519 — Solana, Aptos, Sui
    Ed25519,
}

/// Key material at the end of a derivation path.
#[derive(Debug)]
pub enum DerivedKey {
    Secp256k1(ExtendedKey),
    Ed25519(Ed25519Key),
}

impl DerivedKey {
    pub fn curve(&self) -> CurveType {
        match self {
            DerivedKey::Secp256k1(_) => CurveType::Secp256k1,
            DerivedKey::Ed25519(_) => CurveType::Ed25519,
        }
    }

    pub fn as_secp256k1(&self) -> Option<&ExtendedKey> {
        match self {
            DerivedKey::Secp256k1(key) => Some(key),
            DerivedKey::Ed25519(_) => None,
        }
    }

    pub fn as_ed25519(&self) -> Option<&Ed25519Key> {
        match self {
            DerivedKey::Ed25519(key) => Some(key),
            DerivedKey::Secp256k1(_) => None,
        }
    }
}

impl From<ExtendedKey> for DerivedKey {
    fn from(key: ExtendedKey) -> Self {
        DerivedKey::Secp256k1(key)
    }
}

impl From<Ed25519Key> for DerivedKey {
    fn from(key: Ed25519Key) -> Self {
        DerivedKey::Ed25519(key)
    }
}

// =============================================================================
// UNIFIED DERIVER
// =============================================================================

/// Unified Key Deriver - Entry point cho mọi loại key derivation
///
/// Dispatches to [`Secp256k1Deriver`] or [`Ed25519Deriver`] by curve.
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive the key at `path` on the given curve.
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed (64 bytes)
    /// * `path` - Parsed derivation path
    /// * `curve` - Curve type (secp256k1 hoặc ed25519)
    pub fn derive(seed: &[u8], path: &DerivationPath, curve: CurveType) -> WalletResult<DerivedKey> {
        Self::validate_seed(seed)?;

        let key = match curve {
            CurveType::Secp256k1 => Secp256k1Deriver::derive(seed, path)?.into(),
            CurveType::Ed25519 => Ed25519Deriver::derive(seed, path)?.into(),
        };
        Ok(key)
    }

    /// Validate seed length
    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if seed.len() != SEED_LEN {
            return Err(WalletError::Derivation(format!(
                "Invalid seed length: expected {} bytes, got {}",
                SEED_LEN,
                seed.len()
            )));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

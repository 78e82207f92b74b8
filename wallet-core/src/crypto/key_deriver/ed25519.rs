// wallet-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation — SLIP-0010 Standard
//
// Used by: Solana, Aptos, Sui
// Algorithm: HMAC-SHA512 (unlike BIP-32, hardened derivation only)
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// SLIP-0010 for ed25519 defines ONLY hardened child derivation.
// m/44'/501'/0'/0' (OK)    m/44'/501'/0'/0 (INVALID)

use crate::crypto::derivation_path::DerivationPath;
use crate::crypto::hash::hmac_sha512_split;
use crate::error::{WalletError, WalletResult};
use ed25519_dalek::SigningKey;
use zeroize::Zeroizing;

/// Derived ed25519 node: secret seed, chain code and public key.
pub struct Ed25519Key {
    private_key: Zeroizing<[u8; 32]>,
    chain_code: Zeroizing<[u8; 32]>,
    public_key: [u8; 32],
}

impl std::fmt::Debug for Ed25519Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519Key")
            .field("public_key", &hex::encode(self.public_key))
            .finish_non_exhaustive()
    }
}

impl Ed25519Key {
    fn new(private_key: Zeroizing<[u8; 32]>, chain_code: Zeroizing<[u8; 32]>) -> Self {
        // RFC 8032 key generation: SHA-512 of the seed, clamped scalar times B
        let public_key = SigningKey::from_bytes(&private_key)
            .verifying_key()
            .to_bytes();
        Self {
            private_key,
            chain_code,
            public_key,
        }
    }

    /// 32-byte ed25519 secret seed.
    #[inline]
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    #[inline]
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    #[inline]
    pub fn public_key(&self) -> &[u8; 32] {
        &self.public_key
    }
}

/// Ed25519 Key Deriver — SLIP-0010 Standard
///
/// # Differences from secp256k1 (BIP-32)
/// - Master key seed: "ed25519 seed" (instead of "Bitcoin seed")
/// - Hardened derivation only (index >= 2^31)
/// - No key range check: every 32-byte string is a valid ed25519 seed
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    /// SLIP-0010 master key seed constant
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Derive the node at `path`.
    ///
    /// # Errors
    /// `UnsupportedDerivation` if any segment is not hardened.
    pub fn derive(seed: &[u8], path: &DerivationPath) -> WalletResult<Ed25519Key> {
        if !path.is_fully_hardened() {
            return Err(WalletError::UnsupportedDerivation(format!(
                "Ed25519 SLIP-0010 requires every level of {} to be hardened (add ')",
                path
            )));
        }

        // Step 1: Master key generation
        let (mut key, mut chain_code) = Self::master_key_generate(seed)?;

        // Step 2: Child key derivation
        // I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || ser32(index + 2^31))
        for segment in path {
            let index = segment.raw().to_be_bytes();
            let (child_key, child_chain) = hmac_sha512_split(
                &*chain_code,
                &[&[0x00u8][..], &key[..], &index[..]],
            )?;
            // previous values are wiped as they drop
            key = child_key;
            chain_code = child_chain;
        }

        Ok(Ed25519Key::new(key, chain_code))
    }

    /// I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
    /// IL (32 bytes) = private key
    /// IR (32 bytes) = chain code
    fn master_key_generate(seed: &[u8]) -> WalletResult<(Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>)> {
        hmac_sha512_split(Self::MASTER_SECRET, &[seed])
    }
}

// =============================================================================
// TESTS
// =============================================================================

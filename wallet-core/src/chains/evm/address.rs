// wallet-core/src/chains/evm/address.rs
//
// EVM Address Module
// EIP-55 (Checksum), Keccak-256, secp256k1

use crate::crypto::hash::keccak256;
use alloy::primitives::Address;
use k256::{elliptic_curve::sec1::ToEncodedPoint, PublicKey};

/// EVM Address Encoder
///
/// # Flow:  Public Key (65B uncompressed) → drop 0x04 → Keccak256 → Address (20B)
pub struct EvmAddress;

impl EvmAddress {
    // =========================================================================
    // CORE: Public Key → Address Bytes (20 bytes)
    // =========================================================================

    /// Raw 20-byte address of a secp256k1 public key.
    ///
    /// # Algorithm (Ethereum Yellow Paper)
    /// 1. `pub_key` → uncompressed SEC1 (65B)
    /// 2. Drop the 0x04 prefix → `pub_key_raw` (64B)
    /// 3. Keccak-256(`pub_key_raw`) → `hash` (32B)
    /// 4. `hash[12..32]` → `address` (20B)
    pub fn address_bytes(public_key: &PublicKey) -> [u8; 20] {
        let encoded = public_key.to_encoded_point(false);
        let hash = keccak256(&encoded.as_bytes()[1..]);

        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        address
    }

    /// EIP-55 checksummed address string.
    ///
    /// # Returns
    /// `"0x9858EfFD232B4033E47d90003D41EC34EcaEda94"` (mixed-case checksum)
    #[inline]
    pub fn encode(public_key: &PublicKey) -> String {
        Address::from(Self::address_bytes(public_key)).to_checksum(None)
    }
}

// =============================================================================
// TESTS
// =============================================================================

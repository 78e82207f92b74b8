// wallet-core/src/chains/sui.rs
//
// Sui address: BLAKE2b-256(flag || pubkey), flag 0x00 = Ed25519

use crate::crypto::hash::blake2b_256;

/// Signature scheme flag for ed25519.
const ED25519_FLAG: u8 = 0x00;

/// Sui Address Encoder
pub struct SuiAddress;

impl SuiAddress {
    /// `0x` + 64 lowercase hex chars.
    pub fn encode(public_key: &[u8; 32]) -> String {
        let digest = blake2b_256(&[&[ED25519_FLAG][..], &public_key[..]]);
        format!("0x{}", hex::encode(digest))
    }
}

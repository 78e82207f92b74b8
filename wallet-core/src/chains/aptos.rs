// wallet-core/src/chains/aptos.rs
//
// Aptos single-key account address: SHA3-256(pubkey || scheme), scheme 0x00 = Ed25519

use crate::crypto::hash::sha3_256;

/// Authentication key scheme byte for single ed25519 keys.
const ED25519_SCHEME: u8 = 0x00;

/// Aptos Address Encoder
pub struct AptosAddress;

impl AptosAddress {
    /// `0x` + 64 lowercase hex chars.
    pub fn encode(public_key: &[u8; 32]) -> String {
        let auth_key = sha3_256(&[&public_key[..], &[ED25519_SCHEME][..]]);
        format!("0x{}", hex::encode(auth_key))
    }
}

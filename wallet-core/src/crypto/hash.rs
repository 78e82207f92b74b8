// wallet-core/src/crypto/hash.rs
//
// Hash primitives shared by the key trees and address encoders.

use blake2::{digest::consts::U32, Blake2b};
use hmac::{Hmac, Mac};
use once_cell::sync::OnceCell;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};
use sha3::Sha3_256;
use tiny_keccak::{Hasher, Keccak};
use zeroize::Zeroizing;

use crate::error::{WalletError, WalletResult};

pub type HmacSha512 = Hmac<Sha512>;
type Blake2b256 = Blake2b<U32>;

/// SHA-256 of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// RIPEMD-160 of `data`.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(data).into()
}

/// RIPEMD-160(SHA-256(data)), the Bitcoin/Cosmos public key hash.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Keccak-256 (pre-NIST padding, as used by Ethereum).
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut out = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut out);
    out
}

/// NIST SHA3-256 over the concatenation of `parts`.
pub fn sha3_256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// BLAKE2b with a 32-byte digest over the concatenation of `parts`.
pub fn blake2b_256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// HMAC-SHA512 split into its left and right 32-byte halves.
///
/// Both halves are key material; the full 64-byte output never leaves this
/// function unzeroized.
pub fn hmac_sha512_split(
    key: &[u8],
    parts: &[&[u8]],
) -> WalletResult<(Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>)> {
    let mut mac = HmacSha512::new_from_slice(key)
        .map_err(|e| WalletError::Derivation(format!("HMAC init failed: {}", e)))?;
    for part in parts {
        mac.update(part);
    }

    let mut buf = Zeroizing::new([0u8; 64]);
    buf.copy_from_slice(&mac.finalize().into_bytes());

    let mut left = Zeroizing::new([0u8; 32]);
    let mut right = Zeroizing::new([0u8; 32]);
    left.copy_from_slice(&buf[..32]);
    right.copy_from_slice(&buf[32..]);
    Ok((left, right))
}

// =============================================================================
// BIP-340 TAGGED HASHES
// =============================================================================

const TAP_TWEAK_TAG: &[u8] = b"TapTweak";

static TAP_TWEAK_PREFIX: OnceCell<[u8; 64]> = OnceCell::new();

fn tag_prefix(tag: &[u8]) -> [u8; 64] {
    let tag_hash = sha256(tag);
    let mut prefix = [0u8; 64];
    prefix[..32].copy_from_slice(&tag_hash);
    prefix[32..].copy_from_slice(&tag_hash);
    prefix
}

/// SHA256(SHA256(tag) || SHA256(tag) || msg)
pub fn tagged_hash(tag: &[u8], msg: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(tag_prefix(tag));
    hasher.update(msg);
    hasher.finalize().into()
}

/// Builds the cached `TapTweak` prefix. Returns `true` on the call that built it.
pub(crate) fn warm_tagged_hashes() -> bool {
    let mut built = false;
    TAP_TWEAK_PREFIX.get_or_init(|| {
        built = true;
        tag_prefix(TAP_TWEAK_TAG)
    });
    built
}

/// `tagged_hash("TapTweak", msg)` using the cached prefix.
pub fn tap_tweak_hash(msg: &[u8]) -> [u8; 32] {
    let prefix = TAP_TWEAK_PREFIX.get_or_init(|| tag_prefix(TAP_TWEAK_TAG));
    let mut hasher = Sha256::new();
    hasher.update(prefix);
    hasher.update(msg);
    hasher.finalize().into()
}

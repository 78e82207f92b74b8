// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation — BIP-32 / BIP-44
//
// Used by: Bitcoin, Ethereum/EVM, Cosmos
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation (bip32 crate)
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use crate::crypto::derivation_path::{ChildIndex, DerivationPath};
use crate::error::{WalletError, WalletResult};
use bip32::{ChildNumber, ExtendedKeyAttrs, Prefix, XPrv, XPub};
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::PublicKey;
use std::str::FromStr;
use zeroize::Zeroizing;

#[derive(Clone)]
enum Node {
    Private(XPrv),
    Public(XPub),
}

/// A node of the BIP-32 tree.
///
/// The private key is absent for public-only ("neutered") nodes, e.g. a
/// node imported from an `xpub`.
#[derive(Clone)]
pub struct ExtendedKey {
    node: Node,
    public_key: PublicKey,
}

// Custom Debug - never prints key material
impl std::fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("public_key", &hex::encode(self.public_key_compressed()))
            .field("has_private_key", &self.private_key().is_some())
            .field("depth", &self.depth())
            .field("parent_fingerprint", &hex::encode(self.parent_fingerprint()))
            .field("child_number", &self.child_number())
            .finish_non_exhaustive()
    }
}

fn derivation_error(context: &str, err: bip32::Error) -> WalletError {
    WalletError::Derivation(format!("{}: {}", context, err))
}

impl ExtendedKey {
    fn from_node(node: Node) -> Self {
        let public_key = match &node {
            Node::Private(xprv) => PublicKey::from(xprv.private_key().verifying_key()),
            Node::Public(xpub) => PublicKey::from(xpub.public_key()),
        };
        Self { node, public_key }
    }

    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Master node from a seed of 16 to 64 bytes.
    pub fn master(seed: &[u8]) -> WalletResult<Self> {
        let xprv = XPrv::new(seed).map_err(|e| {
            derivation_error(&format!("Failed to create master key from {}-byte seed", seed.len()), e)
        })?;
        Ok(Self::from_node(Node::Private(xprv)))
    }

    /// Import a Base58Check mainnet `xpub` as a public-only node.
    pub fn from_xpub(encoded: &str) -> WalletResult<Self> {
        let extended = bip32::ExtendedKey::from_str(encoded.trim())
            .map_err(|e| WalletError::Encoding(format!("Invalid xpub encoding: {}", e)))?;
        if extended.prefix != Prefix::XPUB {
            return Err(WalletError::Encoding(
                "Only mainnet xpub keys can be imported".to_string(),
            ));
        }
        let xpub = XPub::try_from(extended)
            .map_err(|e| WalletError::Encoding(format!("Invalid xpub public key: {}", e)))?;
        Ok(Self::from_node(Node::Public(xpub)))
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    fn attrs(&self) -> &ExtendedKeyAttrs {
        match &self.node {
            Node::Private(xprv) => xprv.attrs(),
            Node::Public(xpub) => xpub.attrs(),
        }
    }

    #[inline]
    pub fn private_key(&self) -> Option<&SigningKey> {
        match &self.node {
            Node::Private(xprv) => Some(xprv.private_key()),
            Node::Public(_) => None,
        }
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// SEC1 compressed public key (33 bytes).
    pub fn public_key_compressed(&self) -> [u8; 33] {
        let mut out = [0u8; 33];
        out.copy_from_slice(self.public_key.to_encoded_point(true).as_bytes());
        out
    }

    /// SEC1 uncompressed public key (65 bytes, 0x04 prefix).
    pub fn public_key_uncompressed(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out.copy_from_slice(self.public_key.to_encoded_point(false).as_bytes());
        out
    }

    #[inline]
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.attrs().chain_code
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.attrs().depth
    }

    #[inline]
    pub fn parent_fingerprint(&self) -> [u8; 4] {
        self.attrs().parent_fingerprint
    }

    #[inline]
    pub fn child_number(&self) -> ChildIndex {
        ChildIndex::from_raw(u32::from(self.attrs().child_number))
    }

    /// First 4 bytes of HASH160 of this node's compressed public key.
    pub fn fingerprint(&self) -> [u8; 4] {
        match &self.node {
            Node::Private(xprv) => xprv.public_key().fingerprint(),
            Node::Public(xpub) => xpub.fingerprint(),
        }
    }

    /// Public-only copy of this node.
    pub fn neuter(&self) -> Self {
        match &self.node {
            Node::Private(xprv) => Self::from_node(Node::Public(xprv.public_key())),
            Node::Public(_) => self.clone(),
        }
    }

    // =========================================================================
    // DERIVATION
    // =========================================================================

    /// Walk every segment of `path` starting from this node.
    pub fn derive_path(&self, path: &DerivationPath) -> WalletResult<Self> {
        let mut node = self.clone();
        for child in path {
            node = node.derive_child(*child)?;
        }
        Ok(node)
    }

    /// One step of CKDpriv, or CKDpub for public-only nodes.
    pub fn derive_child(&self, child: ChildIndex) -> WalletResult<Self> {
        let number = ChildNumber::new(child.index(), child.is_hardened())
            .map_err(|e| derivation_error(&format!("Invalid child {}", child), e))?;
        let context = || format!("Child {} derivation failed", child);

        let node = match &self.node {
            Node::Private(xprv) => Node::Private(
                xprv.derive_child(number)
                    .map_err(|e| derivation_error(&context(), e))?,
            ),
            Node::Public(_) if child.is_hardened() => {
                return Err(WalletError::MissingPrivateKey(format!(
                    "Hardened child {} cannot be derived from a public key",
                    child
                )))
            }
            Node::Public(xpub) => Node::Public(
                xpub.derive_child(number)
                    .map_err(|e| derivation_error(&context(), e))?,
            ),
        };
        Ok(Self::from_node(node))
    }

    // =========================================================================
    // SERIALIZATION
    // =========================================================================

    /// Base58Check `xpub` serialization.
    pub fn to_xpub(&self) -> String {
        match &self.node {
            Node::Private(xprv) => xprv.public_key().to_string(Prefix::XPUB),
            Node::Public(xpub) => xpub.to_string(Prefix::XPUB),
        }
    }

    /// Base58Check `xprv` serialization, if this node holds a private key.
    pub fn to_xprv(&self) -> Option<Zeroizing<String>> {
        match &self.node {
            Node::Private(xprv) => Some(xprv.to_string(Prefix::XPRV)),
            Node::Public(_) => None,
        }
    }
}

/// secp256k1 Key Deriver — BIP-32 Standard
///
/// # Security
/// - Intermediate nodes are dropped as soon as their child exists
/// - Private keys stay inside `bip32::XPrv`, which zeroizes on drop
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Derive the node at `path` from a seed.
    pub fn derive(seed: &[u8], path: &DerivationPath) -> WalletResult<ExtendedKey> {
        ExtendedKey::master(seed)?.derive_path(path)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::paths::DerivationPaths;

    const TEST_SEED: &str = "16270f7b026afe7a3746efbfcf43e083500951db9e2699d1e4f372515dabcc80459b9181c3937b5faa4b8f7602f886553d2c32c5f12f3331cef40153aead4de6";

    // BIP-32 test vector 1
    const VECTOR1_SEED: &str = "000102030405060708090a0b0c0d0e0f";

    fn path(p: &str) -> DerivationPath {
        p.parse().unwrap()
    }

    fn private_hex(key: &ExtendedKey) -> String {
        hex::encode(key.private_key().unwrap().to_bytes())
    }

    #[test]
    fn test_vector1_master() {
        let seed = hex::decode(VECTOR1_SEED).unwrap();
        let master = ExtendedKey::master(&seed).unwrap();
        assert_eq!(
            private_hex(&master),
            "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35"
        );
        assert_eq!(
            hex::encode(master.chain_code()),
            "873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508"
        );
        assert_eq!(
            master.to_xpub(),
            "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8"
        );
        assert_eq!(
            master.to_xprv().unwrap().as_str(),
            "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi"
        );
    }

    #[test]
    fn test_vector1_hardened_child() {
        let seed = hex::decode(VECTOR1_SEED).unwrap();
        let child = Secp256k1Deriver::derive(&seed, &path("m/0'")).unwrap();
        assert_eq!(
            child.to_xpub(),
            "xpub68Gmy5EdvgibQVfPdqkBBCHxA5htiqg55crXYuXoQRKfDBFA1WEjWgP6LHhwBZeNK1VTsfTFUHCdrfp1bgwQ9xv5ski8PX9rL2dZXvgGDnw"
        );
        assert_eq!(child.depth(), 1);
        assert!(child.child_number().is_hardened());
    }

    #[test]
    fn test_vector1_normal_child_private_and_public() {
        let seed = hex::decode(VECTOR1_SEED).unwrap();
        let expected = "xpub6ASuArnXKPbfEwhqN6e3mwBcDTgzisQN1wXN9BJcM47sSikHjJf3UFHKkNAWbWMiGj7Wf5uMash7SyYq527Hqck2AxYysAA7xmALppuCkwQ";

        let from_private = Secp256k1Deriver::derive(&seed, &path("m/0'/1")).unwrap();
        assert_eq!(from_private.to_xpub(), expected);

        let account = Secp256k1Deriver::derive(&seed, &path("m/0'")).unwrap();
        let imported = ExtendedKey::from_xpub(&account.to_xpub()).unwrap();
        let from_public = imported.derive_child(ChildIndex::normal(1).unwrap()).unwrap();
        assert_eq!(from_public.to_xpub(), expected);
        assert_eq!(from_public.depth(), 2);
        assert_eq!(from_public.parent_fingerprint(), account.fingerprint());
    }

    #[test]
    fn test_default_paths_derive() {
        let seed = hex::decode(TEST_SEED).unwrap();
        for p in [
            DerivationPaths::EVM_0,
            DerivationPaths::BTC_LEGACY_0,
            DerivationPaths::BTC_NATIVE_SEGWIT_0,
            DerivationPaths::COSMOS_0,
        ] {
            let node = Secp256k1Deriver::derive(&seed, &path(p)).unwrap();
            assert_eq!(node.depth(), 5, "{}", p);
            assert!(node.private_key().is_some());
        }
    }

    #[test]
    fn test_public_derivation_matches_private() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let account = Secp256k1Deriver::derive(&seed, &path("m/44'/0'/0'")).unwrap();

        let from_private = account.derive_path(&path("m/0/5")).unwrap();
        let from_public = account.neuter().derive_path(&path("m/0/5")).unwrap();

        assert!(from_public.private_key().is_none());
        assert_eq!(from_private.public_key(), from_public.public_key());
        assert_eq!(from_private.chain_code(), from_public.chain_code());
        assert_eq!(from_private.to_xpub(), from_public.to_xpub());
    }

    #[test]
    fn test_hardened_from_public_rejected() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let neutered = ExtendedKey::master(&seed).unwrap().neuter();
        let err = neutered.derive_child(ChildIndex::hardened(44).unwrap()).unwrap_err();
        assert!(matches!(err, WalletError::MissingPrivateKey(_)));
    }

    #[test]
    fn test_xpub_roundtrip() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let node = Secp256k1Deriver::derive(&seed, &path("m/84'/0'/0'")).unwrap();
        let imported = ExtendedKey::from_xpub(&node.to_xpub()).unwrap();

        assert!(imported.private_key().is_none());
        assert_eq!(imported.public_key(), node.public_key());
        assert_eq!(imported.depth(), 3);
        assert_eq!(imported.parent_fingerprint(), node.parent_fingerprint());
        assert_eq!(imported.to_xpub(), node.to_xpub());
    }

    #[test]
    fn test_xpub_rejects_xprv_and_garbage() {
        let seed = hex::decode(VECTOR1_SEED).unwrap();
        let master = ExtendedKey::master(&seed).unwrap();
        let xprv = master.to_xprv().unwrap();
        assert!(ExtendedKey::from_xpub(xprv.as_str()).is_err());
        assert!(ExtendedKey::from_xpub("xpub-not-base58").is_err());
    }

    #[test]
    fn test_fingerprint_links_parent() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let master = ExtendedKey::master(&seed).unwrap();
        let child = master.derive_child(ChildIndex::normal(0).unwrap()).unwrap();
        assert_eq!(child.parent_fingerprint(), master.fingerprint());
    }

    #[test]
    fn test_seed_length_bounds() {
        assert!(ExtendedKey::master(&[0u8; 15]).is_err());
        assert!(ExtendedKey::master(&[0u8; 65]).is_err());
        assert!(ExtendedKey::master(&[1u8; 16]).is_ok());
    }

    #[test]
    fn test_master_path_is_identity() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let master = ExtendedKey::master(&seed).unwrap();
        let same = Secp256k1Deriver::derive(&seed, &DerivationPath::master()).unwrap();
        assert_eq!(master.to_xpub(), same.to_xpub());
    }

    #[test]
    fn test_debug_does_not_leak_private_key() {
        let seed = hex::decode(VECTOR1_SEED).unwrap();
        let master = ExtendedKey::master(&seed).unwrap();
        let debug_output = format!("{:?}", master);
        assert!(!debug_output.contains("e8f32e723decf4051aefac8e2c93c9c5"));
        assert!(debug_output.contains("has_private_key: true"));
    }
}

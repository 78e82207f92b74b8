// wallet-core/src/dispatcher.rs
//
// Dispatcher: (mnemonic, path, chain, variant) → address
//
//   resolve chain ─► parse path ─► validate mnemonic ─► seed ─► key tree ─► encoder
//
// Stateless. Every intermediate secret is dropped (and wiped) before return.

use crate::chains::aptos::AptosAddress;
use crate::chains::bitcoin;
use crate::chains::cosmos::CosmosAddress;
use crate::chains::evm::EvmAddress;
use crate::chains::solana::SolanaAddress;
use crate::chains::sui::SuiAddress;
use crate::chains::{Chain, CustomFormat};
use crate::config::DeriveConfig;
use crate::crypto::derivation_path::DerivationPath;
use crate::crypto::key_deriver::{CurveType, DerivedKey, Ed25519Key, ExtendedKey, KeyDeriver};
use crate::crypto::mnemonic::WalletMnemonic;
use crate::error::{PathError, WalletError, WalletResult};
use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One derivation request, with chain and variant still as caller strings.
///
/// An empty `path` selects the chain's standard path.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct DerivationRequest {
    pub mnemonic: String,
    pub path: String,
    pub chain: String,
    pub variant: Option<String>,
    pub passphrase: Option<String>,
}

// Custom Debug - never prints the mnemonic or passphrase
impl std::fmt::Debug for DerivationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivationRequest")
            .field("mnemonic", &"[REDACTED]")
            .field("path", &self.path)
            .field("chain", &self.chain)
            .field("variant", &self.variant)
            .field("passphrase", &self.passphrase.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl DerivationRequest {
    pub fn new(mnemonic: impl Into<String>, path: impl Into<String>, chain: impl Into<String>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            path: path.into(),
            chain: chain.into(),
            variant: None,
            passphrase: None,
        }
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = Some(passphrase.into());
        self
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Derive the address a request describes.
pub fn derive_address(request: &DerivationRequest, config: &DeriveConfig) -> WalletResult<String> {
    crate::init();

    let result = resolve_and_derive(request, config);
    if let Err(err) = &result {
        warn!(
            chain = %request.chain,
            variant = ?request.variant,
            kind = ?err.kind(),
            "address derivation failed"
        );
    }
    result
}

fn resolve_and_derive(request: &DerivationRequest, config: &DeriveConfig) -> WalletResult<String> {
    let chain = Chain::resolve(
        &request.chain,
        request.variant.as_deref(),
        config.custom_format,
    )?;
    let path = resolve_path(chain, &request.path)?;
    let mnemonic = WalletMnemonic::from_phrase(&request.mnemonic)?;

    derive_for_chain(&mnemonic, request.passphrase.as_deref(), &path, chain, config)
}

/// Caller path, or the chain's standard path when blank.
///
/// `CUSTOM` has no standard path and requires one.
pub fn resolve_path(chain: Chain, path: &str) -> WalletResult<DerivationPath> {
    let path = path.trim();
    if !path.is_empty() {
        return DerivationPath::parse(path);
    }
    match chain.default_path() {
        Some(default) => DerivationPath::parse(default),
        None => Err(PathError::Missing.into()),
    }
}

/// Typed core: a validated mnemonic, a parsed path and a resolved chain.
pub fn derive_for_chain(
    mnemonic: &WalletMnemonic,
    passphrase: Option<&str>,
    path: &DerivationPath,
    chain: Chain,
    config: &DeriveConfig,
) -> WalletResult<String> {
    let seed = mnemonic.to_seed_bytes(passphrase);
    derive_from_seed(&*seed, path, chain, config)
}

/// Derive from an already expanded 64-byte seed.
pub fn derive_from_seed(
    seed: &[u8],
    path: &DerivationPath,
    chain: Chain,
    config: &DeriveConfig,
) -> WalletResult<String> {
    crate::init();
    debug!(%chain, %path, curve = ?chain.curve(), "deriving address");

    let key = KeyDeriver::derive(seed, path, chain.curve())?;
    encode_address(chain, &key, config)
}

/// Encode key material for `chain`.
///
/// # Errors
/// `Encoding` if `key` is on the wrong curve for the chain.
pub fn encode_address(chain: Chain, key: &DerivedKey, config: &DeriveConfig) -> WalletResult<String> {
    match chain {
        Chain::Eth | Chain::Custom(CustomFormat::Evm) => {
            Ok(EvmAddress::encode(secp256k1(chain, key)?.public_key()))
        }
        Chain::Btc(variant) | Chain::Custom(CustomFormat::Bitcoin(variant)) => {
            bitcoin::encode(variant, secp256k1(chain, key)?, config.bitcoin_network)
        }
        Chain::Cosmos | Chain::Custom(CustomFormat::Cosmos) => CosmosAddress::encode(
            &secp256k1(chain, key)?.public_key_compressed(),
            &config.cosmos_hrp,
        ),
        Chain::Sol => Ok(SolanaAddress::encode(ed25519(chain, key)?.public_key())),
        Chain::Aptos => Ok(AptosAddress::encode(ed25519(chain, key)?.public_key())),
        Chain::Sui => Ok(SuiAddress::encode(ed25519(chain, key)?.public_key())),
    }
}

/// Watch-only derivation: `relative_path` below an account-level `xpub`.
///
/// Only secp256k1 chains have public derivation; hardened segments fail with
/// `MissingPrivateKey`, as does a TAPROOT target.
pub fn derive_address_from_xpub(
    xpub: &str,
    relative_path: &str,
    chain: Chain,
    config: &DeriveConfig,
) -> WalletResult<String> {
    crate::init();

    if chain.curve() != CurveType::Secp256k1 {
        return Err(WalletError::UnsupportedDerivation(format!(
            "{} keys cannot be derived from an extended public key",
            chain
        )));
    }

    let path = DerivationPath::parse(relative_path)?;
    let account = ExtendedKey::from_xpub(xpub)?;
    debug!(%chain, %path, depth = account.depth(), "deriving watch-only address");

    let key = DerivedKey::from(account.derive_path(&path)?);
    encode_address(chain, &key, config)
}

// =============================================================================
// HELPERS
// =============================================================================

fn secp256k1(chain: Chain, key: &DerivedKey) -> WalletResult<&ExtendedKey> {
    key.as_secp256k1()
        .ok_or_else(|| wrong_curve(chain, key))
}

fn ed25519(chain: Chain, key: &DerivedKey) -> WalletResult<&Ed25519Key> {
    key.as_ed25519()
        .ok_or_else(|| wrong_curve(chain, key))
}

fn wrong_curve(chain: Chain, key: &DerivedKey) -> WalletError {
    WalletError::Encoding(format!(
        "{} expects a {:?} key, got {:?}",
        chain,
        chain.curve(),
        key.curve()
    ))
}

// =============================================================================
// TESTS
// =============================================================================

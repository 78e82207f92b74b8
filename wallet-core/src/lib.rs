// wallet-core/src/lib.rs

//! Deterministic multi-chain address derivation from BIP-39 mnemonics.
//!
//! ```text
//! caller ─► dispatcher ─► mnemonic ─► path ─► key tree ─► encoder ─► address
//!                                             ├─ secp256k1 (BIP-32): ETH, BTC ×4, COSMOS, CUSTOM
//!                                             └─ ed25519 (SLIP-0010): SOL, APTOS, SUI
//! ```
//!
//! Entry points: [`derive_address`] for string requests, [`api`] for the
//! JSON contract, [`presets`] for per-wallet address tables.

pub mod api;
pub mod chains;
pub mod config;
pub mod crypto;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod presets;

pub use chains::{BtcVariant, Chain, CustomFormat};
pub use config::DeriveConfig;
pub use crypto::{DerivationPath, WalletMnemonic};
pub use dispatcher::{derive_address, derive_address_from_xpub, encode_address, DerivationRequest};
pub use error::{ErrorKind, WalletError, WalletResult};

use once_cell::sync::OnceCell;

static INIT: OnceCell<()> = OnceCell::new();

/// One-time process setup: precomputes the BIP-340 `TapTweak` tag prefix.
///
/// Safe to call from any thread, any number of times; the dispatcher calls it
/// before every derivation.
pub fn init() {
    INIT.get_or_init(|| {
        if crypto::hash::warm_tagged_hashes() {
            tracing::debug!("tagged hash prefixes initialized");
        }
    });
}

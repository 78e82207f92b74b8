// wallet-core/src/chains/bitcoin/mod.rs

//! Bitcoin address encoding for the four standard single-key script types.
//!
//! | Variant        | Script       | Encoding               | Mainnet |
//! |----------------|--------------|------------------------|---------|
//! | LEGACY         | P2PKH        | Base58Check            | `1...`  |
//! | NESTED_SEGWIT  | P2SH-P2WPKH  | Base58Check            | `3...`  |
//! | NATIVE_SEGWIT  | P2WPKH       | Bech32, witness v0     | `bc1q`  |
//! | TAPROOT        | P2TR         | Bech32m, witness v1    | `bc1p`  |

pub mod address;
pub mod taproot;

pub use address::BitcoinAddress;
pub use taproot::TaprootAddress;

use crate::chains::BtcVariant;
use crate::crypto::key_deriver::ExtendedKey;
use crate::error::{WalletError, WalletResult};
use bech32::Hrp;
use serde::Deserialize;
use std::str::FromStr;

/// Bitcoin network for address encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitcoinNetwork {
    #[default]
    Mainnet,
    Testnet,
}

impl BitcoinNetwork {
    /// Base58Check version byte for P2PKH.
    pub const fn p2pkh_version(self) -> u8 {
        match self {
            BitcoinNetwork::Mainnet => 0x00,
            BitcoinNetwork::Testnet => 0x6f,
        }
    }

    /// Base58Check version byte for P2SH.
    pub const fn p2sh_version(self) -> u8 {
        match self {
            BitcoinNetwork::Mainnet => 0x05,
            BitcoinNetwork::Testnet => 0xc4,
        }
    }

    /// Segwit human-readable part.
    pub const fn hrp(self) -> Hrp {
        match self {
            BitcoinNetwork::Mainnet => bech32::hrp::BC,
            BitcoinNetwork::Testnet => bech32::hrp::TB,
        }
    }
}

impl FromStr for BitcoinNetwork {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" | "bitcoin" => Ok(BitcoinNetwork::Mainnet),
            "testnet" | "test" => Ok(BitcoinNetwork::Testnet),
            other => Err(WalletError::Config(format!("Unknown Bitcoin network: {}", other))),
        }
    }
}

/// Encode `key` as the address of `variant` on `network`.
pub fn encode(variant: BtcVariant, key: &ExtendedKey, network: BitcoinNetwork) -> WalletResult<String> {
    let public = key.public_key_compressed();
    match variant {
        BtcVariant::Legacy => Ok(BitcoinAddress::p2pkh(&public, network)),
        BtcVariant::NestedSegwit => Ok(BitcoinAddress::p2sh_p2wpkh(&public, network)),
        BtcVariant::NativeSegwit => BitcoinAddress::p2wpkh(&public, network),
        BtcVariant::Taproot => TaprootAddress::encode(key, network),
    }
}

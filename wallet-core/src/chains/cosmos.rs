// wallet-core/src/chains/cosmos.rs
//
// Cosmos SDK account addresses: Bech32(hrp, RIPEMD160(SHA256(compressed pubkey)))

use crate::crypto::hash::hash160;
use crate::error::{WalletError, WalletResult};
use bech32::{Bech32, Hrp};

/// Cosmos Hub prefix.
pub const DEFAULT_HRP: &str = "cosmos";

/// Cosmos Address Encoder
pub struct CosmosAddress;

impl CosmosAddress {
    /// Account address under `hrp` (e.g. `cosmos`, `osmo`).
    pub fn encode(public_key: &[u8; 33], hrp: &str) -> WalletResult<String> {
        let hrp = Self::parse_hrp(hrp)?;
        bech32::encode::<Bech32>(hrp, &hash160(public_key))
            .map_err(|e| WalletError::Encoding(format!("Bech32 encoding failed: {}", e)))
    }

    /// Validate a human-readable prefix.
    pub fn parse_hrp(hrp: &str) -> WalletResult<Hrp> {
        Hrp::parse(hrp).map_err(|e| WalletError::Encoding(format!("Invalid Bech32 prefix {:?}: {}", hrp, e)))
    }
}

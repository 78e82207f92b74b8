// wallet-core/src/chains/bitcoin/address.rs
//
// Hash160-based Bitcoin addresses: P2PKH, P2SH-P2WPKH, P2WPKH

use super::BitcoinNetwork;
use crate::crypto::hash::hash160;
use crate::error::{WalletError, WalletResult};

/// Bitcoin Address Encoder (compressed public key in, address string out)
pub struct BitcoinAddress;

impl BitcoinAddress {
    /// P2PKH: Base58Check(version || HASH160(pubkey))
    pub fn p2pkh(public_key: &[u8; 33], network: BitcoinNetwork) -> String {
        Self::base58check(network.p2pkh_version(), &hash160(public_key))
    }

    /// P2SH-P2WPKH (BIP-49): Base58Check(version || HASH160(0x00 0x14 || HASH160(pubkey)))
    pub fn p2sh_p2wpkh(public_key: &[u8; 33], network: BitcoinNetwork) -> String {
        let redeem_script = Self::p2wpkh_script(public_key);
        Self::base58check(network.p2sh_version(), &hash160(&redeem_script))
    }

    /// P2WPKH (BIP-84): Bech32 witness v0 of HASH160(pubkey)
    pub fn p2wpkh(public_key: &[u8; 33], network: BitcoinNetwork) -> WalletResult<String> {
        bech32::segwit::encode_v0(network.hrp(), &hash160(public_key))
            .map_err(|e| WalletError::Encoding(format!("Bech32 encoding failed: {}", e)))
    }

    /// Witness v0 key-hash program: OP_0 PUSH20 <HASH160(pubkey)>
    fn p2wpkh_script(public_key: &[u8; 33]) -> [u8; 22] {
        let mut script = [0u8; 22];
        script[0] = 0x00;
        script[1] = 0x14;
        script[2..].copy_from_slice(&hash160(public_key));
        script
    }

    fn base58check(version: u8, payload: &[u8; 20]) -> String {
        let mut data = [0u8; 21];
        data[0] = version;
        data[1..].copy_from_slice(payload);
        bs58::encode(data).with_check().into_string()
    }
}

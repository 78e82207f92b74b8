// wallet-core/src/chains/bitcoin/taproot.rs
//
// BIP-86 key-path-only Taproot outputs (BIP-341 tweak, no script tree)
//
//   P  = internal key, lifted to even Y
//   t  = H_TapTweak(x(P))
//   Q  = P + t·G
//   address = Bech32m(hrp, v1, x(Q))

use super::BitcoinNetwork;
use crate::crypto::hash::tap_tweak_hash;
use crate::crypto::key_deriver::ExtendedKey;
use crate::error::{WalletError, WalletResult};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::elliptic_curve::{Group, PrimeField};
use k256::{ProjectivePoint, PublicKey, Scalar};

/// SEC1 prefix of a compressed point with odd Y.
const ODD_Y_PREFIX: u8 = 0x03;

/// Taproot Address Encoder
pub struct TaprootAddress;

impl TaprootAddress {
    /// P2TR address of a BIP-32 node.
    ///
    /// # Errors
    /// `MissingPrivateKey` for public-only nodes.
    pub fn encode(key: &ExtendedKey, network: BitcoinNetwork) -> WalletResult<String> {
        if key.private_key().is_none() {
            return Err(WalletError::MissingPrivateKey(
                "Taproot output requires a node holding its private key".to_string(),
            ));
        }

        let output_key = Self::tweak_public_key(key.public_key())?;
        bech32::segwit::encode_v1(network.hrp(), &output_key)
            .map_err(|e| WalletError::Encoding(format!("Bech32m encoding failed: {}", e)))
    }

    /// x-only output key Q for internal key P.
    pub fn tweak_public_key(internal: &PublicKey) -> WalletResult<[u8; 32]> {
        let compressed = internal.to_encoded_point(true);
        let bytes = compressed.as_bytes();

        let mut internal_x = [0u8; 32];
        internal_x.copy_from_slice(&bytes[1..33]);

        // BIP-340 x-only keys always denote the even-Y point
        let mut point = internal.to_projective();
        if bytes[0] == ODD_Y_PREFIX {
            point = -point;
        }

        let tweak_bytes = tap_tweak_hash(&internal_x);
        let tweak = Option::<Scalar>::from(Scalar::from_repr(tweak_bytes.into())).ok_or_else(|| {
            WalletError::Derivation("Taproot tweak exceeds the curve order".to_string())
        })?;

        let output = point + ProjectivePoint::GENERATOR * tweak;
        if bool::from(output.is_identity()) {
            return Err(WalletError::Derivation(
                "Taproot tweak produced the point at infinity".to_string(),
            ));
        }

        let encoded = output.to_affine().to_encoded_point(true);
        let mut output_x = [0u8; 32];
        output_x.copy_from_slice(&encoded.as_bytes()[1..33]);
        Ok(output_x)
    }
}

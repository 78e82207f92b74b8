// wallet-core/src/chains/solana.rs
//
// Solana addresses are the raw ed25519 public key in Base58 (no checksum).

/// Solana Address Encoder
pub struct SolanaAddress;

impl SolanaAddress {
    #[inline]
    pub fn encode(public_key: &[u8; 32]) -> String {
        bs58::encode(public_key).into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_roundtrip() {
        let pk = [7u8; 32];
        let address = SolanaAddress::encode(&pk);
        assert_eq!(bs58::decode(&address).into_vec().unwrap(), pk.to_vec());
    }

    #[test]
    fn test_abandon_reference_address() {
        // BIP-39 seed of "abandon abandon ... about", m/44'/501'/0'/0'
        let seed = hex::decode("5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4").unwrap();
        let path = "m/44'/501'/0'/0'".parse::<crate::crypto::DerivationPath>().unwrap();
        let key = crate::crypto::key_deriver::Ed25519Deriver::derive(&seed, &path).unwrap();
        assert_eq!(
            SolanaAddress::encode(key.public_key()),
            "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk"
        );
    }

    #[test]
    fn test_system_program_id() {
        // The all-zero key is the System Program
        assert_eq!(SolanaAddress::encode(&[0u8; 32]), "11111111111111111111111111111111");
    }
}

use proptest::prelude::*;

use hdwallet_core::crypto::key_deriver::Secp256k1Deriver;
use hdwallet_core::crypto::{ChildIndex, DerivationPath, ExtendedKey, HARDENED_OFFSET};
use hdwallet_core::{derive_address, DeriveConfig, DerivationRequest};

const MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

const SEED_HEX: &str = "000102030405060708090a0b0c0d0e0f";

fn segment() -> impl Strategy<Value = (u32, bool)> {
    (0..HARDENED_OFFSET, any::<bool>())
}

fn render(segments: &[(u32, bool)], marker: &str) -> String {
    let mut path = String::from("m");
    for (index, hardened) in segments {
        path.push('/');
        path.push_str(&index.to_string());
        if *hardened {
            path.push_str(marker);
        }
    }
    path
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn canonical_path_display_is_stable(segments in prop::collection::vec(segment(), 0..8)) {
        let text = render(&segments, "'");
        let path: DerivationPath = text.parse().unwrap();
        prop_assert_eq!(path.depth(), segments.len());
        prop_assert_eq!(path.to_string(), text);
    }

    #[test]
    fn hardened_markers_are_equivalent(segments in prop::collection::vec(segment(), 1..8)) {
        let apostrophe: DerivationPath = render(&segments, "'").parse().unwrap();
        let lower: DerivationPath = render(&segments, "h").parse().unwrap();
        let upper: DerivationPath = render(&segments, "H").parse().unwrap();
        prop_assert_eq!(&apostrophe, &lower);
        prop_assert_eq!(&apostrophe, &upper);
    }

    #[test]
    fn out_of_range_index_rejected(index in HARDENED_OFFSET..=u32::MAX, hardened in any::<bool>()) {
        let text = render(&[(index, hardened)], "'");
        prop_assert!(text.parse::<DerivationPath>().is_err());
        prop_assert!(ChildIndex::new(index, hardened).is_err());
    }

    #[test]
    fn raw_index_roundtrip(index in 0..HARDENED_OFFSET, hardened in any::<bool>()) {
        let child = ChildIndex::new(index, hardened).unwrap();
        prop_assert_eq!(ChildIndex::from_raw(child.raw()), child);
        prop_assert_eq!(child.raw() >= HARDENED_OFFSET, hardened);
    }

    #[test]
    fn public_derivation_matches_private(index in 0..HARDENED_OFFSET) {
        let seed = hex::decode(SEED_HEX).unwrap();
        let account = Secp256k1Deriver::derive(&seed, &"m/44'/0'/0'".parse::<DerivationPath>().unwrap()).unwrap();
        let child = ChildIndex::normal(index).unwrap();

        let from_private = account.derive_child(child).unwrap();
        let from_public = account.neuter().derive_child(child).unwrap();
        prop_assert_eq!(from_private.public_key(), from_public.public_key());
        prop_assert_eq!(from_private.chain_code(), from_public.chain_code());
    }

    #[test]
    fn xpub_import_preserves_node(index in 0..HARDENED_OFFSET) {
        let seed = hex::decode(SEED_HEX).unwrap();
        let path: DerivationPath = render(&[(84, true), (0, true), (index, true)], "'").parse().unwrap();
        let node = Secp256k1Deriver::derive(&seed, &path).unwrap();

        let imported = ExtendedKey::from_xpub(&node.to_xpub()).unwrap();
        prop_assert_eq!(imported.public_key(), node.public_key());
        prop_assert_eq!(imported.depth(), 3);
        prop_assert_eq!(imported.child_number(), ChildIndex::hardened(index).unwrap());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn derivation_is_deterministic(account in 0u32..1000, index in 0u32..1000) {
        let config = DeriveConfig::default();
        for (chain, variant, path) in [
            ("ETH", None, format!("m/44'/60'/{}'/0/{}", account, index)),
            ("BTC", Some("TAPROOT"), format!("m/86'/0'/{}'/0/{}", account, index)),
            ("SOL", None, format!("m/44'/501'/{}'/{}'", account, index)),
        ] {
            let mut request = DerivationRequest::new(MNEMONIC, path, chain);
            request.variant = variant.map(str::to_string);

            let first = derive_address(&request, &config).unwrap();
            let second = derive_address(&request, &config).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}

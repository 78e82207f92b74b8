// wallet-core/src/chains/mod.rs
//
// Chain selection and per-chain address encoders.
//
//   ETH ─────────── secp256k1 ── Keccak-256 / EIP-55
//   BTC ×4 ──────── secp256k1 ── Base58Check / Bech32 / Bech32m
//   COSMOS ──────── secp256k1 ── Bech32
//   SOL ─────────── ed25519 ──── Base58
//   APTOS ───────── ed25519 ──── SHA3-256 hex
//   SUI ─────────── ed25519 ──── BLAKE2b-256 hex
//   CUSTOM ──────── secp256k1 ── caller-chosen format

pub mod aptos;
pub mod bitcoin;
pub mod cosmos;
pub mod evm;
pub mod solana;
pub mod sui;

use crate::crypto::key_deriver::CurveType;
use crate::crypto::paths::{purpose, DerivationPaths};
use crate::error::{WalletError, WalletResult};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// BITCOIN VARIANTS
// =============================================================================

/// Bitcoin output script type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BtcVariant {
    /// P2PKH, BIP-44 (1...)
    Legacy,
    /// P2SH-P2WPKH, BIP-49 (3...)
    NestedSegwit,
    /// P2WPKH, BIP-84 (bc1q...)
    NativeSegwit,
    /// P2TR key-path, BIP-86 (bc1p...)
    Taproot,
}

impl BtcVariant {
    pub const ALL: [BtcVariant; 4] = [
        BtcVariant::Legacy,
        BtcVariant::NestedSegwit,
        BtcVariant::NativeSegwit,
        BtcVariant::Taproot,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            BtcVariant::Legacy => "LEGACY",
            BtcVariant::NestedSegwit => "NESTED_SEGWIT",
            BtcVariant::NativeSegwit => "NATIVE_SEGWIT",
            BtcVariant::Taproot => "TAPROOT",
        }
    }

    /// BIP-43 purpose for the variant's standard path.
    pub const fn purpose(self) -> u32 {
        match self {
            BtcVariant::Legacy => purpose::LEGACY,
            BtcVariant::NestedSegwit => purpose::NESTED_SEGWIT,
            BtcVariant::NativeSegwit => purpose::NATIVE_SEGWIT,
            BtcVariant::Taproot => purpose::TAPROOT,
        }
    }

    pub const fn default_path(self) -> &'static str {
        match self {
            BtcVariant::Legacy => DerivationPaths::BTC_LEGACY_0,
            BtcVariant::NestedSegwit => DerivationPaths::BTC_NESTED_SEGWIT_0,
            BtcVariant::NativeSegwit => DerivationPaths::BTC_NATIVE_SEGWIT_0,
            BtcVariant::Taproot => DerivationPaths::BTC_TAPROOT_0,
        }
    }
}

impl fmt::Display for BtcVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BtcVariant {
    type Err = WalletError;

    /// Case-insensitive; `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        BtcVariant::ALL
            .into_iter()
            .find(|v| v.as_str() == normalized)
            .ok_or_else(|| WalletError::UnsupportedVariant(format!("Unknown Bitcoin variant: {}", s)))
    }
}

// =============================================================================
// CUSTOM FORMATS
// =============================================================================

/// Address format applied to a caller-supplied path on the secp256k1 tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum CustomFormat {
    Evm,
    Bitcoin(BtcVariant),
    Cosmos,
}

impl fmt::Display for CustomFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomFormat::Evm => f.write_str("EVM"),
            CustomFormat::Bitcoin(variant) => write!(f, "{}", variant),
            CustomFormat::Cosmos => f.write_str("COSMOS"),
        }
    }
}

impl FromStr for CustomFormat {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EVM" | "ETH" => Ok(CustomFormat::Evm),
            "COSMOS" => Ok(CustomFormat::Cosmos),
            _ => s
                .parse::<BtcVariant>()
                .map(CustomFormat::Bitcoin)
                .map_err(|_| WalletError::UnsupportedVariant(format!("Unknown custom address format: {}", s))),
        }
    }
}

impl TryFrom<String> for CustomFormat {
    type Error = WalletError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// CHAIN
// =============================================================================

/// Closed set of (chain, variant) targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    Eth,
    Btc(BtcVariant),
    Sol,
    Aptos,
    Sui,
    Cosmos,
    Custom(CustomFormat),
}

impl Chain {
    /// Resolve caller-facing chain and variant names.
    ///
    /// Names are case-insensitive. `variant` is required for `BTC`, selects
    /// the format for `CUSTOM` (falling back to `custom_default`) and is
    /// ignored for every other chain. An empty variant counts as absent.
    pub fn resolve(
        chain: &str,
        variant: Option<&str>,
        custom_default: Option<CustomFormat>,
    ) -> WalletResult<Self> {
        let variant = variant.map(str::trim).filter(|v| !v.is_empty());

        match chain.trim().to_ascii_uppercase().as_str() {
            "ETH" => Ok(Chain::Eth),
            "SOL" => Ok(Chain::Sol),
            "APTOS" => Ok(Chain::Aptos),
            "SUI" => Ok(Chain::Sui),
            "COSMOS" => Ok(Chain::Cosmos),
            "BTC" => {
                let variant = variant.ok_or_else(|| {
                    WalletError::UnsupportedVariant(
                        "BTC requires a variant: LEGACY, NESTED_SEGWIT, NATIVE_SEGWIT or TAPROOT"
                            .to_string(),
                    )
                })?;
                Ok(Chain::Btc(variant.parse()?))
            }
            "CUSTOM" => {
                let format = match variant {
                    Some(v) => v.parse()?,
                    None => custom_default.ok_or_else(|| {
                        WalletError::UnsupportedVariant(
                            "CUSTOM requires an address format (EVM, COSMOS or a Bitcoin variant)"
                                .to_string(),
                        )
                    })?,
                };
                Ok(Chain::Custom(format))
            }
            _ => Err(WalletError::UnsupportedChain(chain.to_string())),
        }
    }

    /// Caller-facing chain name.
    pub const fn name(&self) -> &'static str {
        match self {
            Chain::Eth => "ETH",
            Chain::Btc(_) => "BTC",
            Chain::Sol => "SOL",
            Chain::Aptos => "APTOS",
            Chain::Sui => "SUI",
            Chain::Cosmos => "COSMOS",
            Chain::Custom(_) => "CUSTOM",
        }
    }

    /// Key tree the chain derives from.
    pub const fn curve(&self) -> CurveType {
        match self {
            Chain::Sol | Chain::Aptos | Chain::Sui => CurveType::Ed25519,
            Chain::Eth | Chain::Btc(_) | Chain::Cosmos | Chain::Custom(_) => CurveType::Secp256k1,
        }
    }

    /// Standard path at account 0, address 0. `CUSTOM` has none.
    pub const fn default_path(&self) -> Option<&'static str> {
        match self {
            Chain::Eth => Some(DerivationPaths::EVM_0),
            Chain::Btc(variant) => Some(variant.default_path()),
            Chain::Sol => Some(DerivationPaths::SOLANA_0),
            Chain::Aptos => Some(DerivationPaths::APTOS_0),
            Chain::Sui => Some(DerivationPaths::SUI_0),
            Chain::Cosmos => Some(DerivationPaths::COSMOS_0),
            Chain::Custom(_) => None,
        }
    }

    /// Standard path for an (account, address) index pair. `CUSTOM` has none.
    pub fn path_for(&self, account: u32, index: u32) -> Option<String> {
        match self {
            Chain::Eth => Some(DerivationPaths::evm(account, index)),
            Chain::Btc(variant) => Some(DerivationPaths::bitcoin(variant.purpose(), account, index)),
            Chain::Sol => Some(DerivationPaths::solana(account, index)),
            Chain::Aptos => Some(DerivationPaths::aptos(account, index)),
            Chain::Sui => Some(DerivationPaths::sui(account, index)),
            Chain::Cosmos => Some(DerivationPaths::cosmos(account, index)),
            Chain::Custom(_) => None,
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chain::Btc(variant) => write!(f, "BTC/{}", variant),
            Chain::Custom(format) => write!(f, "CUSTOM/{}", format),
            other => f.write_str(other.name()),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_case_insensitive() {
        assert_eq!(Chain::resolve("eth", None, None).unwrap(), Chain::Eth);
        assert_eq!(Chain::resolve(" Sol ", None, None).unwrap(), Chain::Sol);
        assert_eq!(
            Chain::resolve("btc", Some("native_segwit"), None).unwrap(),
            Chain::Btc(BtcVariant::NativeSegwit)
        );
        assert_eq!(
            Chain::resolve("BTC", Some("nested-segwit"), None).unwrap(),
            Chain::Btc(BtcVariant::NestedSegwit)
        );
    }

    #[test]
    fn test_variant_ignored_for_single_variant_chains() {
        assert_eq!(Chain::resolve("ETH", Some("TAPROOT"), None).unwrap(), Chain::Eth);
        assert_eq!(Chain::resolve("SUI", Some("whatever"), None).unwrap(), Chain::Sui);
    }

    #[test]
    fn test_unknown_chain() {
        let err = Chain::resolve("DOGE", None, None).unwrap_err();
        assert_eq!(err, WalletError::UnsupportedChain("DOGE".into()));
    }

    #[test]
    fn test_btc_variant_required() {
        assert!(matches!(
            Chain::resolve("BTC", None, None),
            Err(WalletError::UnsupportedVariant(_))
        ));
        assert!(matches!(
            Chain::resolve("BTC", Some(""), None),
            Err(WalletError::UnsupportedVariant(_))
        ));
        assert!(matches!(
            Chain::resolve("BTC", Some("P2SH"), None),
            Err(WalletError::UnsupportedVariant(_))
        ));
    }

    #[test]
    fn test_custom_format_selection() {
        assert_eq!(
            Chain::resolve("custom", Some("evm"), None).unwrap(),
            Chain::Custom(CustomFormat::Evm)
        );
        assert_eq!(
            Chain::resolve("CUSTOM", Some("TAPROOT"), None).unwrap(),
            Chain::Custom(CustomFormat::Bitcoin(BtcVariant::Taproot))
        );
        // explicit variant beats the configured default
        assert_eq!(
            Chain::resolve("CUSTOM", Some("COSMOS"), Some(CustomFormat::Evm)).unwrap(),
            Chain::Custom(CustomFormat::Cosmos)
        );
        assert_eq!(
            Chain::resolve("CUSTOM", None, Some(CustomFormat::Evm)).unwrap(),
            Chain::Custom(CustomFormat::Evm)
        );
        assert!(matches!(
            Chain::resolve("CUSTOM", None, None),
            Err(WalletError::UnsupportedVariant(_))
        ));
    }

    #[test]
    fn test_curves() {
        assert_eq!(Chain::Eth.curve(), CurveType::Secp256k1);
        assert_eq!(Chain::Btc(BtcVariant::Taproot).curve(), CurveType::Secp256k1);
        assert_eq!(Chain::Cosmos.curve(), CurveType::Secp256k1);
        assert_eq!(Chain::Custom(CustomFormat::Cosmos).curve(), CurveType::Secp256k1);
        assert_eq!(Chain::Sol.curve(), CurveType::Ed25519);
        assert_eq!(Chain::Aptos.curve(), CurveType::Ed25519);
        assert_eq!(Chain::Sui.curve(), CurveType::Ed25519);
    }

    #[test]
    fn test_default_paths() {
        assert_eq!(Chain::Eth.default_path(), Some("m/44'/60'/0'/0/0"));
        assert_eq!(Chain::Btc(BtcVariant::Legacy).default_path(), Some("m/44'/0'/0'/0/0"));
        assert_eq!(Chain::Btc(BtcVariant::NestedSegwit).default_path(), Some("m/49'/0'/0'/0/0"));
        assert_eq!(Chain::Btc(BtcVariant::NativeSegwit).default_path(), Some("m/84'/0'/0'/0/0"));
        assert_eq!(Chain::Btc(BtcVariant::Taproot).default_path(), Some("m/86'/0'/0'/0/0"));
        assert_eq!(Chain::Sol.default_path(), Some("m/44'/501'/0'/0'"));
        assert_eq!(Chain::Aptos.default_path(), Some("m/44'/637'/0'/0'/0'"));
        assert_eq!(Chain::Sui.default_path(), Some("m/44'/784'/0'/0'/0'"));
        assert_eq!(Chain::Cosmos.default_path(), Some("m/44'/118'/0'/0/0"));
        assert_eq!(Chain::Custom(CustomFormat::Evm).default_path(), None);
    }

    #[test]
    fn test_path_for_matches_default_at_zero() {
        let chains = [
            Chain::Eth,
            Chain::Btc(BtcVariant::Legacy),
            Chain::Btc(BtcVariant::Taproot),
            Chain::Sol,
            Chain::Aptos,
            Chain::Sui,
            Chain::Cosmos,
        ];
        for chain in chains {
            assert_eq!(chain.path_for(0, 0).as_deref(), chain.default_path());
        }
        assert_eq!(Chain::Sol.path_for(3, 0).unwrap(), "m/44'/501'/3'/0'");
        assert_eq!(Chain::Btc(BtcVariant::NativeSegwit).path_for(0, 4).unwrap(), "m/84'/0'/0'/0/4");
    }

    #[test]
    fn test_display() {
        assert_eq!(Chain::Btc(BtcVariant::NestedSegwit).to_string(), "BTC/NESTED_SEGWIT");
        assert_eq!(Chain::Custom(CustomFormat::Evm).to_string(), "CUSTOM/EVM");
        assert_eq!(Chain::Aptos.to_string(), "APTOS");
    }

    #[test]
    fn test_custom_format_deserialize() {
        let format: CustomFormat = serde_json::from_str("\"native_segwit\"").unwrap();
        assert_eq!(format, CustomFormat::Bitcoin(BtcVariant::NativeSegwit));
        assert!(serde_json::from_str::<CustomFormat>("\"DOGE\"").is_err());
    }
}

// wallet-core/src/config.rs
//
// Encoding parameters that are not part of a derivation request.
//
// Sources, lowest to highest priority: defaults, JSON, HDWALLET_* environment.

use crate::chains::bitcoin::BitcoinNetwork;
use crate::chains::cosmos::{CosmosAddress, DEFAULT_HRP};
use crate::chains::CustomFormat;
use crate::error::{WalletError, WalletResult};
use serde::Deserialize;

pub const ENV_BITCOIN_NETWORK: &str = "HDWALLET_BITCOIN_NETWORK";
pub const ENV_COSMOS_HRP: &str = "HDWALLET_COSMOS_HRP";
pub const ENV_CUSTOM_FORMAT: &str = "HDWALLET_CUSTOM_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeriveConfig {
    /// Version bytes and segwit HRP for BTC addresses.
    pub bitcoin_network: BitcoinNetwork,
    /// Bech32 prefix for COSMOS addresses.
    pub cosmos_hrp: String,
    /// Format used by CUSTOM requests that name none.
    pub custom_format: Option<CustomFormat>,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        Self {
            bitcoin_network: BitcoinNetwork::Mainnet,
            cosmos_hrp: DEFAULT_HRP.to_string(),
            custom_format: None,
        }
    }
}

impl DeriveConfig {
    /// Parse a JSON object; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> WalletResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| WalletError::Config(format!("Invalid configuration JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> WalletResult<Self> {
        Self::default().merge_env(|key| std::env::var(key).ok())
    }

    /// Apply `HDWALLET_*` overrides read through `lookup`. Empty values are ignored.
    pub fn merge_env<F>(mut self, lookup: F) -> WalletResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(network) = read(ENV_BITCOIN_NETWORK) {
            self.bitcoin_network = network.parse()?;
        }
        if let Some(hrp) = read(ENV_COSMOS_HRP) {
            self.cosmos_hrp = hrp.trim().to_string();
        }
        if let Some(format) = read(ENV_CUSTOM_FORMAT) {
            self.custom_format = Some(
                format
                    .parse()
                    .map_err(|e| WalletError::Config(format!("{}: {}", ENV_CUSTOM_FORMAT, e)))?,
            );
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> WalletResult<()> {
        CosmosAddress::parse_hrp(&self.cosmos_hrp)
            .map(|_| ())
            .map_err(|e| WalletError::Config(format!("cosmos_hrp: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::BtcVariant;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DeriveConfig::default();
        assert_eq!(config.bitcoin_network, BitcoinNetwork::Mainnet);
        assert_eq!(config.cosmos_hrp, "cosmos");
        assert_eq!(config.custom_format, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = DeriveConfig::from_json_str(r#"{"bitcoin_network":"testnet"}"#).unwrap();
        assert_eq!(config.bitcoin_network, BitcoinNetwork::Testnet);
        assert_eq!(config.cosmos_hrp, "cosmos");

        let config = DeriveConfig::from_json_str(
            r#"{"cosmos_hrp":"osmo","custom_format":"native_segwit"}"#,
        )
        .unwrap();
        assert_eq!(config.cosmos_hrp, "osmo");
        assert_eq!(
            config.custom_format,
            Some(CustomFormat::Bitcoin(BtcVariant::NativeSegwit))
        );
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        for json in [
            r#"{"bitcoin_network":"regtest"}"#,
            r#"{"custom_format":"DOGE"}"#,
            r#"{"cosmos_hrp":""}"#,
            r#"{"unknown":1}"#,
            "not json",
        ] {
            assert!(
                matches!(DeriveConfig::from_json_str(json), Err(WalletError::Config(_))),
                "accepted {}",
                json
            );
        }
    }

    #[test]
    fn test_env_overrides() {
        let config = DeriveConfig::default()
            .merge_env(lookup(&[
                (ENV_BITCOIN_NETWORK, "Testnet"),
                (ENV_COSMOS_HRP, "celestia"),
                (ENV_CUSTOM_FORMAT, "evm"),
            ]))
            .unwrap();
        assert_eq!(config.bitcoin_network, BitcoinNetwork::Testnet);
        assert_eq!(config.cosmos_hrp, "celestia");
        assert_eq!(config.custom_format, Some(CustomFormat::Evm));
    }

    #[test]
    fn test_env_empty_values_ignored() {
        let config = DeriveConfig::default()
            .merge_env(lookup(&[(ENV_BITCOIN_NETWORK, ""), (ENV_COSMOS_HRP, "  ")]))
            .unwrap();
        assert_eq!(config, DeriveConfig::default());
    }

    #[test]
    fn test_env_invalid_values_reported() {
        assert!(matches!(
            DeriveConfig::default().merge_env(lookup(&[(ENV_BITCOIN_NETWORK, "signet")])),
            Err(WalletError::Config(_))
        ));
        assert!(matches!(
            DeriveConfig::default().merge_env(lookup(&[(ENV_CUSTOM_FORMAT, "SOL")])),
            Err(WalletError::Config(_))
        ));
        assert!(matches!(
            DeriveConfig::default().merge_env(lookup(&[(ENV_COSMOS_HRP, "bad prefix")])),
            Err(WalletError::Config(_))
        ));
    }
}

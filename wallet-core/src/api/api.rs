// wallet-core/src/api/api.rs

use crate::config::DeriveConfig;
use crate::dispatcher::{self, DerivationRequest};
use crate::error::{ErrorKind, WalletResult};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

// --- Request ---

/// `DeriveAddress` request body.
///
/// `derivationPath` may also be sent as `path`, `variant` as `addressType`.
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct DeriveAddressRequest {
    pub mnemonic: String,
    #[serde(default, alias = "path")]
    pub derivation_path: String,
    pub chain: String,
    #[serde(default, alias = "addressType")]
    pub variant: Option<String>,
    #[serde(default)]
    pub passphrase: Option<String>,
}

impl std::fmt::Debug for DeriveAddressRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeriveAddressRequest")
            .field("mnemonic", &"[REDACTED]")
            .field("derivation_path", &self.derivation_path)
            .field("chain", &self.chain)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

impl From<&DeriveAddressRequest> for DerivationRequest {
    fn from(req: &DeriveAddressRequest) -> Self {
        DerivationRequest {
            mnemonic: req.mnemonic.clone(),
            path: req.derivation_path.clone(),
            chain: req.chain.clone(),
            variant: req.variant.clone(),
            passphrase: req.passphrase.clone(),
        }
    }
}

// --- Response ---

/// `{ "address": "..." }` or `{ "error": "<ErrorKind>", "message": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DeriveAddressResponse {
    Success { address: String },
    Failure { error: ErrorKind, message: String },
}

impl DeriveAddressResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, DeriveAddressResponse::Success { .. })
    }
}

impl From<WalletResult<String>> for DeriveAddressResponse {
    fn from(result: WalletResult<String>) -> Self {
        match result {
            Ok(address) => DeriveAddressResponse::Success { address },
            Err(err) => DeriveAddressResponse::Failure {
                error: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

// --- Operations ---

pub fn derive_address(request: &DeriveAddressRequest, config: &DeriveConfig) -> DeriveAddressResponse {
    let request = DerivationRequest::from(request);
    dispatcher::derive_address(&request, config).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn call(body: serde_json::Value) -> serde_json::Value {
        let request: DeriveAddressRequest = serde_json::from_value(body).unwrap();
        serde_json::to_value(derive_address(&request, &DeriveConfig::default())).unwrap()
    }

    #[test]
    fn test_success_shape() {
        let response = call(json!({
            "mnemonic": MNEMONIC,
            "derivationPath": "m/44'/60'/0'/0/0",
            "chain": "ETH"
        }));
        assert_eq!(
            response,
            json!({ "address": "0x9858EfFD232B4033E47d90003D41EC34EcaEda94" })
        );
    }

    #[test]
    fn test_aliases() {
        let response = call(json!({
            "mnemonic": MNEMONIC,
            "path": "m/49'/0'/0'/0/0",
            "chain": "btc",
            "addressType": "NESTED_SEGWIT"
        }));
        assert_eq!(response["address"], "37VucYSaXLCAsxYyAPfbSi9eh4iEcbShgf");
    }

    #[test]
    fn test_failure_shape() {
        let response = call(json!({
            "mnemonic": MNEMONIC,
            "derivationPath": "",
            "chain": "DOGE",
            "variant": null
        }));
        assert_eq!(response["error"], "UnsupportedChain");
        assert!(response["message"].as_str().unwrap().contains("DOGE"));
        assert!(response.get("address").is_none());
    }

    #[test]
    fn test_invalid_mnemonic_reported() {
        let response = call(json!({
            "mnemonic": "abandon abandon abandon",
            "chain": "BTC",
            "variant": "TAPROOT"
        }));
        assert_eq!(response["error"], "InvalidMnemonic");
    }

    #[test]
    fn test_response_from_result() {
        let ok = DeriveAddressResponse::from(Ok("addr".to_string()));
        assert!(ok.is_success());

        let err = DeriveAddressResponse::from(Err(crate::error::WalletError::MissingPrivateKey(
            "x".into(),
        )));
        assert!(!err.is_success());
        assert_eq!(
            serde_json::to_value(&err).unwrap()["error"],
            "MissingPrivateKey"
        );
    }

    #[test]
    fn test_request_debug_redacts_mnemonic() {
        let request: DeriveAddressRequest =
            serde_json::from_value(json!({ "mnemonic": MNEMONIC, "chain": "ETH" })).unwrap();
        assert!(!format!("{:?}", request).contains("abandon"));
    }
}

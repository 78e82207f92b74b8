// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - Multi-Chain HD Wallet Path Generator
// BIP-44 (Purpose), SLIP-44 (Coin Types), BIP-49/84/86 (Bitcoin script types)

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    // ---- secp256k1 chains ----
    pub const BITCOIN: u32 = 0;
    pub const ETHEREUM: u32 = 60;
    pub const COSMOS: u32 = 118;

    // ---- ed25519 chains ----
    pub const SOLANA: u32 = 501;
    pub const APTOS: u32 = 637;
    pub const SUI: u32 = 784;
}

/// BIP-43 purpose field per Bitcoin script type.
pub mod purpose {
    /// BIP-44: P2PKH (1...)
    pub const LEGACY: u32 = 44;
    /// BIP-49: P2SH-P2WPKH (3...)
    pub const NESTED_SEGWIT: u32 = 49;
    /// BIP-84: P2WPKH (bc1q...)
    pub const NATIVE_SEGWIT: u32 = 84;
    /// BIP-86: P2TR key-path (bc1p...)
    pub const TAPROOT: u32 = 86;
}

// =============================================================================
// DERIVATION PATHS
// =============================================================================
/// Pre-built Derivation Paths cho Multi-Chain Wallet
///
/// # Conventions
/// - BIP-44: `m/44'/coin'/account'/change/index` (secp256k1)
/// - BIP-49/84/86: `m/{49,84,86}'/0'/account'/change/index` (Bitcoin)
/// - SLIP-0010: every level hardened (ed25519)
pub struct DerivationPaths;

impl DerivationPaths {
    // =========================================================================
    // EVM (secp256k1) — BIP-44, coin_type = 60
    // =========================================================================
    pub const EVM_0: &'static str = "m/44'/60'/0'/0/0";

    /// EVM path with custom account & address index
    #[inline]
    pub fn evm(account: u32, index: u32) -> String {
        Self::bip44(purpose::LEGACY, coin_type::ETHEREUM, account, 0, index)
    }

    // =========================================================================
    // BITCOIN (secp256k1) — Multiple standards
    // =========================================================================
    /// BIP-44: Legacy (1...)
    pub const BTC_LEGACY_0: &'static str = "m/44'/0'/0'/0/0";

    /// BIP-49: Nested SegWit (3...)
    pub const BTC_NESTED_SEGWIT_0: &'static str = "m/49'/0'/0'/0/0";

    /// BIP-84: Native SegWit (bc1q...)
    pub const BTC_NATIVE_SEGWIT_0: &'static str = "m/84'/0'/0'/0/0";

    /// BIP-86: Taproot (bc1p...)
    pub const BTC_TAPROOT_0: &'static str = "m/86'/0'/0'/0/0";

    /// Bitcoin receive path for a BIP-43 `purpose`.
    #[inline]
    pub fn bitcoin(purpose: u32, account: u32, index: u32) -> String {
        Self::bip44(purpose, coin_type::BITCOIN, account, 0, index)
    }

    // =========================================================================
    // SOLANA (ed25519) — SLIP-0010: m/44'/501'/account'/index'
    // =========================================================================
    pub const SOLANA_0: &'static str = "m/44'/501'/0'/0'";

    #[inline]
    pub fn solana(account: u32, index: u32) -> String {
        Self::ed25519_path(coin_type::SOLANA, account, &[index])
    }

    // =========================================================================
    // APTOS (ed25519) — SLIP-0010: m/44'/637'/account'/0'/index'
    // =========================================================================
    pub const APTOS_0: &'static str = "m/44'/637'/0'/0'/0'";

    #[inline]
    pub fn aptos(account: u32, index: u32) -> String {
        Self::ed25519_path(coin_type::APTOS, account, &[0, index])
    }

    // =========================================================================
    // SUI (ed25519) — SLIP-0010: m/44'/784'/account'/0'/index'
    // =========================================================================
    pub const SUI_0: &'static str = "m/44'/784'/0'/0'/0'";

    #[inline]
    pub fn sui(account: u32, index: u32) -> String {
        Self::ed25519_path(coin_type::SUI, account, &[0, index])
    }

    // =========================================================================
    // COSMOS SDK (secp256k1) — BIP-44, coin_type = 118
    // Cosmos Hub, Osmosis, Celestia...
    // =========================================================================
    pub const COSMOS_0: &'static str = "m/44'/118'/0'/0/0";

    #[inline]
    pub fn cosmos(account: u32, index: u32) -> String {
        Self::bip44(purpose::LEGACY, coin_type::COSMOS, account, 0, index)
    }

    // =========================================================================
    // CUSTOM PATH BUILDERS
    // =========================================================================
    /// BIP-44 style path (secp256k1 chains)
    ///
    /// # Arguments
    /// * `purpose` - 44, 49, 84 or 86 (see [`purpose`])
    /// * `coin_type` - SLIP-44 coin type (see [`coin_type`])
    /// * `account` - Account index (hardened)
    /// * `change` - 0 = external (receive), 1 = internal (change)
    /// * `index` - Address index
    #[inline]
    pub fn bip44(purpose: u32, coin_type: u32, account: u32, change: u32, index: u32) -> String {
        format!(
            "m/{}'/{}'/{}'/{}/{}",
            purpose, coin_type, account, change, index
        )
    }

    /// SLIP-0010 path for ed25519 chains: `m/44'/coin'/account'` followed by
    /// `sub_paths`, every level hardened.
    ///
    /// # Verify
    /// - Solana: `ed25519_path(501, 0, &[0])` -> m/44'/501'/0'/0'
    /// - Aptos:  `ed25519_path(637, 0, &[0, 0])` -> m/44'/637'/0'/0'/0'
    pub fn ed25519_path(coin_type: u32, account: u32, sub_paths: &[u32]) -> String {
        let mut path = format!("m/44'/{}'/{}'", coin_type, account);
        for &idx in sub_paths {
            path.push_str(&format!("/{}'", idx));
        }
        path
    }
}

// =============================================================================
// TESTS
// =============================================================================

// wallet-core/src/presets.rs
//
// Wallet presets: which networks a wallet app shows and how its
// "next address" button moves through the tree.
//
//   Wallet           ETH   SOL   SUI   BTC (native segwit)
//   MetaMask          ✓
//   Phantom           ✓     ✓     ✓     ✓
//   OKX               ✓     ✓     ✓     ✓
//   Coinbase Wallet   ✓     ✓           ✓

use crate::chains::{BtcVariant, Chain};
use crate::config::DeriveConfig;
use crate::crypto::derivation_path::DerivationPath;
use crate::crypto::mnemonic::WalletMnemonic;
use crate::dispatcher::derive_from_seed;
use crate::error::{PathError, WalletError, WalletResult};
use std::fmt;
use std::str::FromStr;

/// Which index a wallet advances for its next address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Increment {
    /// `.../account'/0/index` grows `index` (ETH, BTC)
    Address,
    /// A new account per address (SOL, SUI)
    Account,
}

impl Increment {
    /// (account, index) of the address after `(account, index)`.
    pub fn advance(self, account: u32, index: u32) -> Result<(u32, u32), PathError> {
        let bump = |n: u32| {
            n.checked_add(1)
                .ok_or_else(|| PathError::IndexOutOfRange((n as u64 + 1).to_string()))
        };
        match self {
            Increment::Address => Ok((account, bump(index)?)),
            Increment::Account => Ok((bump(account)?, index)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetNetwork {
    pub chain: Chain,
    pub increment: Increment,
}

const ETH: PresetNetwork = PresetNetwork {
    chain: Chain::Eth,
    increment: Increment::Address,
};
const SOL: PresetNetwork = PresetNetwork {
    chain: Chain::Sol,
    increment: Increment::Account,
};
const SUI: PresetNetwork = PresetNetwork {
    chain: Chain::Sui,
    increment: Increment::Account,
};
const BTC: PresetNetwork = PresetNetwork {
    chain: Chain::Btc(BtcVariant::NativeSegwit),
    increment: Increment::Address,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletProfile {
    MetaMask,
    Phantom,
    Okx,
    CoinbaseWallet,
}

impl WalletProfile {
    pub const ALL: [WalletProfile; 4] = [
        WalletProfile::MetaMask,
        WalletProfile::Phantom,
        WalletProfile::Okx,
        WalletProfile::CoinbaseWallet,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            WalletProfile::MetaMask => "MetaMask",
            WalletProfile::Phantom => "Phantom",
            WalletProfile::Okx => "OKX",
            WalletProfile::CoinbaseWallet => "Coinbase Wallet",
        }
    }

    pub const fn networks(self) -> &'static [PresetNetwork] {
        match self {
            WalletProfile::MetaMask => &[ETH],
            WalletProfile::Phantom | WalletProfile::Okx => &[ETH, SOL, SUI, BTC],
            WalletProfile::CoinbaseWallet => &[ETH, SOL, BTC],
        }
    }

    /// One entry per network at (account, index).
    pub fn derive(
        self,
        mnemonic: &WalletMnemonic,
        passphrase: Option<&str>,
        account: u32,
        index: u32,
        config: &DeriveConfig,
    ) -> Vec<PresetEntry> {
        self.derive_with(mnemonic, passphrase, config, |_| Ok((account, index)))
    }

    /// One entry per network at the position after (account, index).
    pub fn derive_next(
        self,
        mnemonic: &WalletMnemonic,
        passphrase: Option<&str>,
        account: u32,
        index: u32,
        config: &DeriveConfig,
    ) -> Vec<PresetEntry> {
        self.derive_with(mnemonic, passphrase, config, |network| {
            network.increment.advance(account, index)
        })
    }

    fn derive_with<F>(
        self,
        mnemonic: &WalletMnemonic,
        passphrase: Option<&str>,
        config: &DeriveConfig,
        position: F,
    ) -> Vec<PresetEntry>
    where
        F: Fn(&PresetNetwork) -> Result<(u32, u32), PathError>,
    {
        let seed = mnemonic.to_seed_bytes(passphrase);

        self.networks()
            .iter()
            .map(|network| {
                let path = position(network)
                    .map_err(WalletError::from)
                    .and_then(|(account, index)| {
                        let path = network.chain.path_for(account, index).ok_or(PathError::Missing)?;
                        DerivationPath::parse(&path)
                    });

                match path {
                    Ok(path) => PresetEntry {
                        chain: network.chain,
                        address: derive_from_seed(&*seed, &path, network.chain, config),
                        path: Some(path),
                    },
                    Err(err) => PresetEntry {
                        chain: network.chain,
                        path: None,
                        address: Err(err),
                    },
                }
            })
            .collect()
    }
}

impl fmt::Display for WalletProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WalletProfile {
    type Err = WalletError;

    /// Case-insensitive; spaces, `-` and `_` are ignored ("coinbase-wallet", "CoinbaseWallet").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "metamask" => Ok(WalletProfile::MetaMask),
            "phantom" => Ok(WalletProfile::Phantom),
            "okx" => Ok(WalletProfile::Okx),
            "coinbase" | "coinbasewallet" => Ok(WalletProfile::CoinbaseWallet),
            _ => Err(WalletError::Config(format!("Unknown wallet preset: {}", s))),
        }
    }
}

/// Result for one network of a preset. Failures stay per entry.
#[derive(Debug)]
pub struct PresetEntry {
    pub chain: Chain,
    pub path: Option<DerivationPath>,
    pub address: WalletResult<String>,
}

impl fmt::Display for PresetEntry {
    /// `path | chain | address`, or `Error (chain): message`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.path, &self.address) {
            (Some(path), Ok(address)) => write!(f, "{} | {} | {}", path, self.chain.name(), address),
            (_, Err(err)) => write!(f, "Error ({}): {}", self.chain.name(), err),
            (None, Ok(address)) => write!(f, "{} | {}", self.chain.name(), address),
        }
    }
}

// wallet-core/src/bin/hdwallet.rs
//
// Command-line caller of the derivation engine. No derivation logic lives here.

use clap::{Args, Parser, Subcommand};
use hdwallet_core::api::{self, DeriveAddressRequest};
use hdwallet_core::presets::WalletProfile;
use hdwallet_core::{
    derive_address, derive_address_from_xpub, logging, Chain, DerivationRequest, DeriveConfig,
    WalletError, WalletMnemonic, WalletResult,
};
use std::io::Read;
use std::process::ExitCode;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(Parser)]
#[command(name = "hdwallet", version, about = "Derive chain addresses from a BIP-39 mnemonic")]
struct Cli {
    /// JSON configuration file (bitcoin_network, cosmos_hrp, custom_format)
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Zeroize, ZeroizeOnDrop)]
struct Secret {
    /// Mnemonic phrase
    #[arg(long, env = "HDWALLET_MNEMONIC", hide_env_values = true)]
    mnemonic: String,

    /// Optional BIP-39 passphrase
    #[arg(long, env = "HDWALLET_PASSPHRASE", hide_env_values = true)]
    passphrase: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Derive one address
    Derive {
        #[command(flatten)]
        secret: Secret,
        /// ETH, BTC, SOL, APTOS, SUI, COSMOS or CUSTOM
        #[arg(long)]
        chain: String,
        /// BTC variant or CUSTOM format
        #[arg(long)]
        variant: Option<String>,
        /// Derivation path; the chain's standard path when omitted
        #[arg(long, default_value = "")]
        path: String,
    },
    /// Derive a watch-only address below an account xpub
    Xpub {
        #[arg(long)]
        xpub: String,
        #[arg(long)]
        chain: String,
        #[arg(long)]
        variant: Option<String>,
        /// Path relative to the xpub, e.g. m/0/5
        #[arg(long)]
        path: String,
    },
    /// Print a wallet preset's address table
    Preset {
        #[command(flatten)]
        secret: Secret,
        /// MetaMask, Phantom, OKX or "Coinbase Wallet"; all when omitted
        #[arg(long)]
        wallet: Option<String>,
        #[arg(long, default_value_t = 0)]
        account: u32,
        #[arg(long, default_value_t = 0)]
        index: u32,
        /// Show the next address instead
        #[arg(long)]
        next: bool,
    },
    /// Read a JSON request from stdin and print the JSON response
    Json,
}

fn load_config(path: Option<&std::path::Path>) -> WalletResult<DeriveConfig> {
    let base = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| WalletError::Config(format!("{}: {}", path.display(), e)))?;
            DeriveConfig::from_json_str(&json)?
        }
        None => DeriveConfig::default(),
    };
    base.merge_env(|key| std::env::var(key).ok())
}

fn run(cli: Cli) -> WalletResult<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Derive {
            secret,
            chain,
            variant,
            path,
        } => {
            let mut request = DerivationRequest::new(secret.mnemonic.as_str(), path, chain);
            request.variant = variant;
            request.passphrase = secret.passphrase.clone();
            println!("{}", derive_address(&request, &config)?);
        }
        Command::Xpub {
            xpub,
            chain,
            variant,
            path,
        } => {
            let chain = Chain::resolve(&chain, variant.as_deref(), config.custom_format)?;
            println!("{}", derive_address_from_xpub(&xpub, &path, chain, &config)?);
        }
        Command::Preset {
            secret,
            wallet,
            account,
            index,
            next,
        } => {
            let mnemonic = WalletMnemonic::from_phrase(&secret.mnemonic)?;
            let profiles = match wallet {
                Some(name) => vec![name.parse::<WalletProfile>()?],
                None => WalletProfile::ALL.to_vec(),
            };
            for profile in profiles {
                let passphrase = secret.passphrase.as_deref();
                let entries = if next {
                    profile.derive_next(&mnemonic, passphrase, account, index, &config)
                } else {
                    profile.derive(&mnemonic, passphrase, account, index, &config)
                };
                println!("{}", profile);
                for entry in entries {
                    println!("  {}", entry);
                }
            }
        }
        Command::Json => {
            let mut body = zeroize::Zeroizing::new(String::new());
            std::io::stdin()
                .read_to_string(&mut *body)
                .map_err(|e| WalletError::Config(format!("stdin: {}", e)))?;
            let request: DeriveAddressRequest = serde_json::from_str(&body)
                .map_err(|e| WalletError::Config(format!("Invalid request JSON: {}", e)))?;
            let response = api::derive_address(&request, &config);
            let out = serde_json::to_string(&response)
                .map_err(|e| WalletError::Encoding(e.to_string()))?;
            println!("{}", out);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error [{:?}]: {}", err.kind(), err);
            ExitCode::FAILURE
        }
    }
}

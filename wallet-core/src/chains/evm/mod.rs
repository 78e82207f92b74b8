// wallet-core/src/chains/evm/mod.rs

//! Ethereum Virtual Machine (EVM) address encoding
//!
//! EIP-55 checksummed addresses from secp256k1 public keys via [`EvmAddress`].
//! The same format serves every EVM-compatible chain (coin type 60).

pub mod address;

// Re-exports for cleaner API access
pub use address::EvmAddress;

// wallet-core/src/api/mod.rs

//! Caller-facing request/response contract.
//!
//! String chain and variant names in, `{ "address" }` or
//! `{ "error", "message" }` out. Everything here is serde-friendly so a
//! transport (CLI, HTTP, FFI) only has to move JSON.

#[allow(clippy::module_inception)]
mod api;

pub use self::api::{derive_address, DeriveAddressRequest, DeriveAddressResponse};

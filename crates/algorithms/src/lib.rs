//! Constant-time arithmetic primitives for Ed25519
//!
//! This crate provides the field arithmetic engine for GF(2^255 - 19) and
//! the edwards25519 group element layer that signature schemes are built
//! on. It is usable in both `std` and `no_std` environments.
//!
//! # Features
//!
//! - `std` (default): `std::error::Error` impls and richer error messages
//! - `alloc`: forwarded to the api crate for `no_std` + `alloc` targets
//! - `trace`: `log::trace!` records when public input is rejected
//! - `serde`: `Serialize`/`Deserialize` for [`ec::ed25519::CompressedPoint`]

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve primitives
pub mod ec;
pub use ec::ed25519;
pub use ec::{Ed25519CompressedPoint, Ed25519FieldElement, Ed25519Point};

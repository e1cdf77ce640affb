//! # ed25519-core
//!
//! Constant-time field and group element arithmetic for Ed25519.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! ed25519-core = "0.3"
//! ```
//!
//! ```
//! use ed25519_core::prelude::*;
//!
//! let b = ExtendedPoint::basepoint();
//! let two_b = b.double().to_extended();
//! let bytes = two_b.to_bytes();
//! assert_eq!(ExtendedPoint::from_bytes(&bytes).unwrap(), two_b);
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `alloc`: allocator support for `no_std` targets
//! - `trace`: `log::trace!` records for rejected point encodings
//! - `serde`: serde support for `CompressedPoint`
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`ed25519-core-api`]: public error type and the `Serialize` trait
//! - [`ed25519-core-internal`]: constant-time helpers and byte loaders
//! - [`ed25519-core-algorithms`]: the field engine and group element layer

#![cfg_attr(not(feature = "std"), no_std)]

pub use ed25519_core_algorithms as algorithms;
pub use ed25519_core_api as api;
pub use ed25519_core_internal as internal;

pub use ed25519_core_algorithms::ec::ed25519;

/// Common imports for ed25519-core users
pub mod prelude {
    pub use crate::api::{Error, Result, Serialize};

    pub use crate::ed25519::{
        CachedPoint, CompletedPoint, CompressedPoint, ExtendedPoint, FieldElement,
        PrecomputedPoint, ProjectivePoint,
    };

    pub use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
    pub use zeroize::Zeroize;
}

//! Public API traits and types for ed25519-core
//!
//! This crate provides the public error type and the byte-encoding trait
//! shared by the field and group element types.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

pub use error::{Error, Result};
pub use traits::Serialize;

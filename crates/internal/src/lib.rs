//! Internal utilities shared by the ed25519-core crates
//!
//! Nothing in here is part of the public API surface. The helpers are
//! small, branch-free building blocks used by the field arithmetic engine.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;

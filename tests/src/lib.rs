//! Test support for the ed25519-core workspace
//!
//! Field operations are checked against an arbitrary-precision reference
//! built on `num-bigint`: every element is mapped to its integer value and
//! the expected result is computed with plain modular arithmetic.

pub mod reference;
pub mod vectors;

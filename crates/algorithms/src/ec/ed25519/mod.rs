//! Edwards25519 field and group element arithmetic
//!
//! This module implements the arithmetic layer underneath Ed25519:
//! - 𝔽ₚ with p = 2²⁵⁵ − 19 in a redundant 10-limb representation,
//! - the twisted Edwards curve −x² + y² = 1 + d·x²·y² with
//!   d = −121665/121666,
//! - projective, extended, completed, cached and precomputed point forms
//!   together with doubling, mixed addition and point (de)compression.
//!
//! Scalar arithmetic and the signature scheme are built on top of this by
//! callers. All operations run a data-independent instruction sequence;
//! only the success of point decompression depends on its (public) input.

mod constants;
mod field;
mod group;

pub use constants::{
    BASEPOINT_COMPRESSED, D, D2, FIELD_ELEMENT_SIZE, POINT_COMPRESSED_SIZE, SQRT_M1,
};
pub use field::FieldElement;
pub use group::{
    CachedPoint, CompletedPoint, CompressedPoint, ExtendedPoint, PrecomputedPoint,
    ProjectivePoint,
};

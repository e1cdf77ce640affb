//! Elliptic curve primitives
//!
//! Only the edwards25519 curve used by Ed25519 lives here.

pub mod ed25519;

pub use ed25519::{
    CompressedPoint as Ed25519CompressedPoint, ExtendedPoint as Ed25519Point,
    FieldElement as Ed25519FieldElement,
};

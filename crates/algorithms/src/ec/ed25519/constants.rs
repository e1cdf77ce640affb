//! Curve constants for edwards25519
//!
//! Field constants are given directly in 10-limb form so they can be used in
//! `const` context without a decode step.

use super::field::FieldElement;

/// Size of an encoded field element in bytes
pub const FIELD_ELEMENT_SIZE: usize = 32;

/// Size of a compressed point in bytes
pub const POINT_COMPRESSED_SIZE: usize = 32;

/// Curve parameter d = -121665/121666
pub const D: FieldElement = FieldElement::from_limbs([
    -10913610, 13857413, -15372611, 6949391, 114729,
    -8787816, -6275908, -3247719, -18696448, -12055116,
]);

/// 2*d
pub const D2: FieldElement = FieldElement::from_limbs([
    -21827239, -5839606, -30745221, 13898782, 229458,
    15978800, -12551817, -6495438, 29715968, 9444199,
]);

/// sqrt(-1) mod p
pub const SQRT_M1: FieldElement = FieldElement::from_limbs([
    -32595792, -7943725, 9377950, 3500415, 12389472,
    -272473, -25146209, -2005654, 326686, 11406482,
]);

/// Compressed form of the standard base point, y = 4/5 with x even
pub const BASEPOINT_COMPRESSED: [u8; POINT_COMPRESSED_SIZE] = [
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
];

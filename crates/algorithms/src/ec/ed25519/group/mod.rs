//! Group elements of edwards25519
//!
//! Points on -x² + y² = 1 + d·x²·y² are carried in several representations,
//! each suited to one step of a scalar multiplication:
//!
//! | Type | Coordinates | Affine point |
//! |---|---|---|
//! | [`ProjectivePoint`] | (X:Y:Z) | (X/Z, Y/Z) |
//! | [`ExtendedPoint`] | (X:Y:Z:T), XY = ZT | (X/Z, Y/Z) |
//! | [`CompletedPoint`] | ((X:Z),(Y:T)) | (X/Z, Y/T) |
//! | [`CachedPoint`] | (Y+X, Y-X, Z, 2dT) | addend form of an extended point |
//! | [`PrecomputedPoint`] | (y+x, y-x, 2dxy) | affine table entry, Z = 1 |
//!
//! Doubling and addition produce a `CompletedPoint`, which is then projected
//! back to projective (3 multiplications) or extended (4 multiplications)
//! depending on what the next step needs.

mod cached;
mod completed;
mod compressed;
mod extended;
mod precomputed;
mod projective;

pub use cached::CachedPoint;
pub use completed::CompletedPoint;
pub use compressed::CompressedPoint;
pub use extended::ExtendedPoint;
pub use precomputed::PrecomputedPoint;
pub use projective::ProjectivePoint;

use super::constants::POINT_COMPRESSED_SIZE;
use super::field::FieldElement;

/// Encode affine (X/Z, Y/Z): canonical y with the parity of x in bit 255
fn encode(x: &FieldElement, y: &FieldElement, z: &FieldElement) -> [u8; POINT_COMPRESSED_SIZE] {
    let recip = z.invert();
    let x = x.mul(&recip);
    let y = y.mul(&recip);

    let mut s = y.to_bytes();
    s[31] ^= x.is_negative().unwrap_u8() << 7;
    s
}

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use super::{encode, CompletedPoint, CompressedPoint};
use crate::ec::ed25519::constants::POINT_COMPRESSED_SIZE;
use crate::ec::ed25519::field::FieldElement;

/// Point in projective coordinates (X:Y:Z), affine (X/Z, Y/Z)
#[derive(Clone, Copy, Debug, Zeroize)]
pub struct ProjectivePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl ProjectivePoint {
    /// Identity element (0, 1)
    pub fn identity() -> Self {
        ProjectivePoint {
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::one(),
        }
    }

    /// Double a point: 2P as a completed point
    ///
    /// Costs 3 squarings and 1 doubled squaring. Input limbs may be up to
    /// the unreduced bound produced by additions.
    pub fn double(&self) -> CompletedPoint {
        let xx = self.x.square();
        let yy = self.y.square();
        let b = self.z.square2();
        let a = self.x.add(&self.y).square();

        let y = yy.add(&xx);
        let z = yy.sub(&xx);
        CompletedPoint {
            x: a.sub(&y),
            y,
            z,
            t: b.sub(&z),
        }
    }

    /// Encode as 32 bytes
    pub fn to_bytes(&self) -> [u8; POINT_COMPRESSED_SIZE] {
        encode(&self.x, &self.y, &self.z)
    }

    /// Compress to a [`CompressedPoint`]
    pub fn compress(&self) -> CompressedPoint {
        CompressedPoint::from_bytes(&self.to_bytes())
    }
}

impl Default for ProjectivePoint {
    fn default() -> Self {
        Self::identity()
    }
}

impl ConstantTimeEq for ProjectivePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        // X1/Z1 == X2/Z2 and Y1/Z1 == Y2/Z2 without inversion
        self.x.mul(&other.z).ct_eq(&other.x.mul(&self.z))
            & self.y.mul(&other.z).ct_eq(&other.y.mul(&self.z))
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ProjectivePoint {}

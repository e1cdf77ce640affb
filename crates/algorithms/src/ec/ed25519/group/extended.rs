use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use super::{encode, CachedPoint, CompletedPoint, CompressedPoint, PrecomputedPoint, ProjectivePoint};
use crate::ec::ed25519::constants::{BASEPOINT_COMPRESSED, D, D2, POINT_COMPRESSED_SIZE, SQRT_M1};
use crate::ec::ed25519::field::FieldElement;
use crate::error::{Error, Result};

/// Point in extended coordinates (X:Y:Z:T)
///
/// Affine (X/Z, Y/Z) with the invariant X·Y = Z·T.
#[derive(Clone, Copy, Debug, Zeroize)]
pub struct ExtendedPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl ExtendedPoint {
    /// Identity element (0, 1)
    pub fn identity() -> Self {
        ExtendedPoint {
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::one(),
            t: FieldElement::zero(),
        }
    }

    /// The standard base point B
    pub fn basepoint() -> Self {
        // (y = 4/5, x even) has a square root by construction
        match Self::from_bytes(&BASEPOINT_COMPRESSED) {
            Ok(p) => p,
            Err(_) => unreachable!("base point encoding is a valid point"),
        }
    }

    /// Decode a 32-byte point encoding
    ///
    /// Recovers x from y via x² = (y² - 1) / (d·y² + 1), using the candidate
    /// root x = u·v³·(u·v⁷)^((p-5)/8) and fixing it up by sqrt(-1) when
    /// v·x² = -u. The sign bit then selects between x and -x.
    ///
    /// y is not checked for being below p, and an encoding of x = 0 with the
    /// sign bit set is accepted.
    pub fn from_bytes(s: &[u8; POINT_COMPRESSED_SIZE]) -> Result<Self> {
        let y = FieldElement::from_bytes(s);
        let z = FieldElement::one();

        let yy = y.square();
        let u = yy.sub(&z); // y² - 1
        let v = yy.mul(&D).add(&z); // d·y² + 1

        let v3 = v.square().mul(&v); // v³
        let mut x = v3.square().mul(&v).mul(&u); // u·v⁷
        x = x.pow22523();
        x = x.mul(&v3).mul(&u);

        let vxx = x.square().mul(&v);
        let has_root = vxx.sub(&u).is_zero();
        let has_flipped_root = vxx.add(&u).is_zero();

        let x_flipped = x.mul(&SQRT_M1);
        x.conditional_assign(&x_flipped, !has_root & has_flipped_root);

        if !bool::from(has_root | has_flipped_root) {
            #[cfg(feature = "trace")]
            log::trace!("rejected point encoding: no square root for x");
            return Err(Error::InvalidPoint {
                context: "x^2 = (y^2 - 1) / (d*y^2 + 1) has no square root",
            });
        }

        let sign = Choice::from(s[31] >> 7);
        x.conditional_negate(x.is_negative() ^ sign);

        Ok(ExtendedPoint {
            t: x.mul(&y),
            x,
            y,
            z,
        })
    }

    /// Encode as 32 bytes
    pub fn to_bytes(&self) -> [u8; POINT_COMPRESSED_SIZE] {
        encode(&self.x, &self.y, &self.z)
    }

    /// Compress to a [`CompressedPoint`]
    pub fn compress(&self) -> CompressedPoint {
        CompressedPoint::from_bytes(&self.to_bytes())
    }

    /// Drop T
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// Prepare as an addend for [`add_cached`](Self::add_cached)
    pub fn to_cached(&self) -> CachedPoint {
        CachedPoint {
            y_plus_x: self.y.add(&self.x),
            y_minus_x: self.y.sub(&self.x),
            z: self.z,
            t2d: self.t.mul(&D2),
        }
    }

    /// Normalize to Z = 1 and prepare as a table entry
    pub fn to_precomputed(&self) -> PrecomputedPoint {
        let recip = self.z.invert();
        let x = self.x.mul(&recip);
        let y = self.y.mul(&recip);
        PrecomputedPoint {
            y_plus_x: y.add(&x),
            y_minus_x: y.sub(&x),
            xy2d: x.mul(&y).mul(&D2),
        }
    }

    /// Double a point, via the projective formula
    pub fn double(&self) -> CompletedPoint {
        self.to_projective().double()
    }

    /// P + Q with Q in addend form
    pub fn add_cached(&self, q: &CachedPoint) -> CompletedPoint {
        let a = self.y.add(&self.x).mul(&q.y_plus_x);
        let b = self.y.sub(&self.x).mul(&q.y_minus_x);
        let c = q.t2d.mul(&self.t);
        let zz = self.z.mul(&q.z);
        let d = zz.add(&zz);
        CompletedPoint {
            x: a.sub(&b),
            y: a.add(&b),
            z: d.add(&c),
            t: d.sub(&c),
        }
    }

    /// P - Q with Q in addend form
    pub fn sub_cached(&self, q: &CachedPoint) -> CompletedPoint {
        let a = self.y.add(&self.x).mul(&q.y_minus_x);
        let b = self.y.sub(&self.x).mul(&q.y_plus_x);
        let c = q.t2d.mul(&self.t);
        let zz = self.z.mul(&q.z);
        let d = zz.add(&zz);
        CompletedPoint {
            x: a.sub(&b),
            y: a.add(&b),
            z: d.sub(&c),
            t: d.add(&c),
        }
    }

    /// P + Q with Q an affine table entry
    pub fn add_precomputed(&self, q: &PrecomputedPoint) -> CompletedPoint {
        let a = self.y.add(&self.x).mul(&q.y_plus_x);
        let b = self.y.sub(&self.x).mul(&q.y_minus_x);
        let c = q.xy2d.mul(&self.t);
        let d = self.z.add(&self.z);
        CompletedPoint {
            x: a.sub(&b),
            y: a.add(&b),
            z: d.add(&c),
            t: d.sub(&c),
        }
    }

    /// P - Q with Q an affine table entry
    pub fn sub_precomputed(&self, q: &PrecomputedPoint) -> CompletedPoint {
        let a = self.y.add(&self.x).mul(&q.y_minus_x);
        let b = self.y.sub(&self.x).mul(&q.y_plus_x);
        let c = q.xy2d.mul(&self.t);
        let d = self.z.add(&self.z);
        CompletedPoint {
            x: a.sub(&b),
            y: a.add(&b),
            z: d.sub(&c),
            t: d.add(&c),
        }
    }

    /// -P
    pub fn neg(&self) -> ExtendedPoint {
        ExtendedPoint {
            x: self.x.neg(),
            y: self.y,
            z: self.z,
            t: self.t.neg(),
        }
    }

    /// Check the curve equation and the extended coordinate invariant
    ///
    /// (-X² + Y²)·Z² = Z⁴ + d·X²·Y², X·Y = Z·T, Z ≠ 0
    pub fn is_on_curve(&self) -> Choice {
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();

        let lhs = yy.sub(&xx).mul(&zz);
        let rhs = zz.square().add(&D.mul(&xx).mul(&yy));

        lhs.ct_eq(&rhs)
            & self.x.mul(&self.y).ct_eq(&self.z.mul(&self.t))
            & self.z.is_nonzero()
    }
}

impl Default for ExtendedPoint {
    fn default() -> Self {
        Self::identity()
    }
}

impl ConstantTimeEq for ExtendedPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.mul(&other.z).ct_eq(&other.x.mul(&self.z))
            & self.y.mul(&other.z).ct_eq(&other.y.mul(&self.z))
    }
}

impl PartialEq for ExtendedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ExtendedPoint {}

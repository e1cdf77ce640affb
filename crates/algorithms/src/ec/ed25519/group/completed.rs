use zeroize::Zeroize;

use super::{ExtendedPoint, ProjectivePoint};
use crate::ec::ed25519::field::FieldElement;

/// Point in completed coordinates ((X:Z),(Y:T)), affine (X/Z, Y/T)
///
/// Transient output of doubling and addition. Convert before doing anything
/// else with it.
#[derive(Clone, Copy, Debug, Zeroize)]
pub struct CompletedPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl CompletedPoint {
    /// Project to (X:Y:Z), 3 multiplications
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x.mul(&self.t),
            y: self.y.mul(&self.z),
            z: self.z.mul(&self.t),
        }
    }

    /// Project to (X:Y:Z:T), 4 multiplications
    pub fn to_extended(&self) -> ExtendedPoint {
        ExtendedPoint {
            x: self.x.mul(&self.t),
            y: self.y.mul(&self.z),
            z: self.z.mul(&self.t),
            t: self.x.mul(&self.y),
        }
    }
}

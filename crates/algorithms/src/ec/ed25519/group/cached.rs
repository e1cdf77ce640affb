use zeroize::Zeroize;

use crate::ec::ed25519::field::FieldElement;

/// Extended point prepared as an addend: (Y+X, Y-X, Z, 2d·T)
#[derive(Clone, Copy, Debug, Zeroize)]
pub struct CachedPoint {
    pub(crate) y_plus_x: FieldElement,
    pub(crate) y_minus_x: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t2d: FieldElement,
}

impl CachedPoint {
    /// Identity element in addend form
    pub fn identity() -> Self {
        CachedPoint {
            y_plus_x: FieldElement::one(),
            y_minus_x: FieldElement::one(),
            z: FieldElement::one(),
            t2d: FieldElement::zero(),
        }
    }

    /// Replace `self` with `u` when `b == 1`, keep it when `b == 0`
    ///
    /// # Panics
    ///
    /// Panics if `b` is not 0 or 1.
    pub fn conditional_move(&mut self, u: &CachedPoint, b: u32) {
        self.y_plus_x.conditional_move(&u.y_plus_x, b);
        self.y_minus_x.conditional_move(&u.y_minus_x, b);
        self.z.conditional_move(&u.z, b);
        self.t2d.conditional_move(&u.t2d, b);
    }

    /// Addend for -P
    pub fn neg(&self) -> CachedPoint {
        CachedPoint {
            y_plus_x: self.y_minus_x,
            y_minus_x: self.y_plus_x,
            z: self.z,
            t2d: self.t2d.neg(),
        }
    }
}

impl Default for CachedPoint {
    fn default() -> Self {
        Self::identity()
    }
}

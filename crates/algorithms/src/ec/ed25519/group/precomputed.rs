use ed25519_core_internal::constant_time::ct_eq_u8;
use zeroize::Zeroize;

use crate::ec::ed25519::field::FieldElement;

/// Affine point prepared as a table entry: (y+x, y-x, 2d·x·y), Z = 1
#[derive(Clone, Copy, Debug, Zeroize)]
pub struct PrecomputedPoint {
    pub(crate) y_plus_x: FieldElement,
    pub(crate) y_minus_x: FieldElement,
    pub(crate) xy2d: FieldElement,
}

impl PrecomputedPoint {
    /// Identity element (1, 1, 0)
    pub fn identity() -> Self {
        PrecomputedPoint {
            y_plus_x: FieldElement::one(),
            y_minus_x: FieldElement::one(),
            xy2d: FieldElement::zero(),
        }
    }

    /// Replace `self` with `u` when `b == 1`, keep it when `b == 0`
    ///
    /// # Panics
    ///
    /// Panics if `b` is not 0 or 1.
    pub fn conditional_move(&mut self, u: &PrecomputedPoint, b: u32) {
        self.y_plus_x.conditional_move(&u.y_plus_x, b);
        self.y_minus_x.conditional_move(&u.y_minus_x, b);
        self.xy2d.conditional_move(&u.xy2d, b);
    }

    /// Table entry for -P
    pub fn neg(&self) -> PrecomputedPoint {
        PrecomputedPoint {
            y_plus_x: self.y_minus_x,
            y_minus_x: self.y_plus_x,
            xy2d: self.xy2d.neg(),
        }
    }

    /// Pick `b·P` out of a table holding `1·P ..= 8·P`
    ///
    /// `b` ranges over -8..=8; 0 yields the identity and negative values
    /// yield the negated entry. Every table entry is touched regardless of
    /// `b`.
    pub fn select(table: &[PrecomputedPoint; 8], b: i8) -> PrecomputedPoint {
        let b = i32::from(b);
        let b_negative = ((b >> 31) & 1) as u32;
        let b_abs = b - (((-(b_negative as i32)) & b) << 1);

        let mut t = PrecomputedPoint::identity();
        for (i, entry) in table.iter().enumerate() {
            t.conditional_move(entry, ct_eq_u8(b_abs as u8, (i + 1) as u8));
        }

        let minus_t = t.neg();
        t.conditional_move(&minus_t, b_negative);
        t
    }
}

impl Default for PrecomputedPoint {
    fn default() -> Self {
        Self::identity()
    }
}

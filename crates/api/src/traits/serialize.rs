//! Traits for byte serialization of curve types.

use crate::Result;

/// A trait for public types with a fixed-width byte encoding.
///
/// Decoding from a slice is fallible: a wrong length or an encoding that
/// does not describe a valid value are both reported through [`Error`].
///
/// [`Error`]: crate::Error
pub trait Serialize: Sized {
    /// The encoded form, typically a fixed-size byte array.
    type Bytes: AsRef<[u8]>;

    /// Creates an object from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Converts the object to its canonical encoding.
    fn to_bytes(&self) -> Self::Bytes;
}

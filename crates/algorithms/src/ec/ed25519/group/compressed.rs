use ed25519_core_api::Serialize;

use super::ExtendedPoint;
use crate::ec::ed25519::constants::POINT_COMPRESSED_SIZE;
use crate::error::{validate, Result};

/// Wire form of a point: canonical y, sign of x in the top bit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompressedPoint {
    pub(crate) bytes: [u8; POINT_COMPRESSED_SIZE],
}

impl CompressedPoint {
    /// Wrap 32 encoded bytes. No validation happens until
    /// [`decompress`](Self::decompress).
    pub fn from_bytes(bytes: &[u8; POINT_COMPRESSED_SIZE]) -> Self {
        CompressedPoint { bytes: *bytes }
    }

    /// Wrap a byte slice, which must be 32 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("compressed point", bytes.len(), POINT_COMPRESSED_SIZE)?;
        let mut out = [0u8; POINT_COMPRESSED_SIZE];
        out.copy_from_slice(bytes);
        Ok(CompressedPoint { bytes: out })
    }

    /// View the encoded bytes
    pub fn as_bytes(&self) -> &[u8; POINT_COMPRESSED_SIZE] {
        &self.bytes
    }

    /// Copy out the encoded bytes
    pub fn to_bytes(&self) -> [u8; POINT_COMPRESSED_SIZE] {
        self.bytes
    }

    /// Decode to an extended point
    pub fn decompress(&self) -> Result<ExtendedPoint> {
        ExtendedPoint::from_bytes(&self.bytes)
    }
}

impl AsRef<[u8]> for CompressedPoint {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<[u8; POINT_COMPRESSED_SIZE]> for CompressedPoint {
    fn from(bytes: [u8; POINT_COMPRESSED_SIZE]) -> Self {
        CompressedPoint { bytes }
    }
}

impl Serialize for CompressedPoint {
    type Bytes = [u8; POINT_COMPRESSED_SIZE];

    fn from_bytes(bytes: &[u8]) -> ed25519_core_api::Result<Self> {
        Ok(Self::from_slice(bytes)?)
    }

    fn to_bytes(&self) -> Self::Bytes {
        self.bytes
    }
}

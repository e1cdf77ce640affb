//! Traits implemented by the public encodable types

pub mod serialize;

pub use serialize::Serialize;

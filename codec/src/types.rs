//! Implementations of the codec traits for the supported field types.

pub mod pair;
pub mod primitives;
pub mod text;
pub mod value;

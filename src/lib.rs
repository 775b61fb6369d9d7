//! Linear algebra and per-frame transform math for a spinning-cube renderer.
//!
//! [`util::linalg`] holds the vector, matrix and quaternion types and the transform
//! factory; [`core::frame`] drives them once per frame; [`shader`] describes the vertex
//! layout and geometry they are applied to. Most users want `use gronckle::core::prelude::*`.

pub mod core;
pub mod shader;
pub mod util;

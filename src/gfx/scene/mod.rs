//! # Scene Management Module
//!
//! Scene graph for the viewer: a flat list of objects (sky sphere, sun,
//! planets, orbit rings), the camera manager and the material library.
//! Objects are added once during the build phase; the only per-frame
//! mutation is rewriting planet transforms.

pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{DrawObject, Mesh, Object};
pub use scene::Scene;
pub use vertex::Vertex3D;

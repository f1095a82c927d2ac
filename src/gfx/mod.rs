//! Graphics and rendering for the viewer
//!
//! Contains the wgpu render engine, camera system, scene management,
//! procedural geometry and GPU resource handling.

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::{CameraManager, OrbitCamera};
pub use rendering::RenderEngine;
pub use resources::Material;
pub use scene::Scene;

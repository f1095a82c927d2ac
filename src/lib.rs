//! Orrery
//!
//! An interactive 3D solar system viewer built on wgpu and winit.
//! A fixed table of planets orbits a central sun on circular, coplanar
//! paths; per-planet speed sliders and a pause/resume toggle are drawn
//! with Dear ImGui.

pub mod app;
pub mod gfx;
pub mod sim;
pub mod solar;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::OrreryApp;
pub use sim::traits::Simulation;
pub use solar::SolarSystem;

/// Creates a default Orrery application instance
pub fn default() -> OrreryApp {
    pollster::block_on(OrreryApp::new())
}

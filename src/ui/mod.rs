//! Dear ImGui overlay
//!
//! Integrates imgui with wgpu and winit for the control panel drawn on
//! top of the 3D view.

pub mod manager;
pub mod panel;

pub use manager::UiManager;
pub use panel::orbit_control_panel;

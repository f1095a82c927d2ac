//! Simulation trait
//!
//! The interface an animated scene implements to plug into the frame
//! loop and the UI overlay.

use crate::gfx::scene::Scene;
use imgui::Ui;

/// A frame-stepped animation driving objects in the scene
///
/// The app calls [`update`](Simulation::update) once per rendered frame,
/// whether or not the animation is running. Implementations gate their
/// own state changes on the running flag; a paused update is a no-op and
/// the frame still renders.
pub trait Simulation {
    /// Builds the simulation's objects and materials into the scene
    ///
    /// Called once when the simulation is attached, before GPU resources
    /// are created.
    fn initialize(&mut self, scene: &mut Scene);

    /// Advances the animation by one frame
    ///
    /// Must be a no-op on state while paused. Writes updated transforms
    /// into the scene either way so a freshly resumed frame is coherent.
    fn update(&mut self, scene: &mut Scene);

    /// Draws the simulation's control panel
    fn render_ui(&mut self, ui: &Ui);

    /// Display name
    fn name(&self) -> &str;

    /// Whether the animation is advancing
    fn is_running(&self) -> bool;

    /// Starts or pauses the animation
    fn set_running(&mut self, running: bool);

    /// Restores the initial state
    fn reset(&mut self, scene: &mut Scene);
}

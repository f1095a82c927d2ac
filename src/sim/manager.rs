//! Simulation manager
//!
//! Owns the attached simulation and forwards the per-frame lifecycle
//! calls from the main loop.

use super::traits::Simulation;
use crate::gfx::scene::Scene;
use imgui::Ui;

/// Holds the attached simulation, if any
pub struct SimulationManager {
    simulation: Option<Box<dyn Simulation>>,
}

impl SimulationManager {
    pub fn new() -> Self {
        Self { simulation: None }
    }

    /// Attaches a simulation and initializes it into the scene
    pub fn attach_simulation(&mut self, mut simulation: Box<dyn Simulation>, scene: &mut Scene) {
        simulation.initialize(scene);
        self.simulation = Some(simulation);
    }

    /// Steps the simulation by one frame
    ///
    /// Called unconditionally every frame; the simulation itself decides
    /// whether its state advances.
    pub fn update(&mut self, scene: &mut Scene) {
        if let Some(simulation) = &mut self.simulation {
            simulation.update(scene);
        }
    }

    /// Draws the simulation's UI panel
    pub fn render_ui(&mut self, ui: &Ui) {
        if let Some(simulation) = &mut self.simulation {
            simulation.render_ui(ui);
        }
    }

    pub fn has_simulation(&self) -> bool {
        self.simulation.is_some()
    }
}

impl Default for SimulationManager {
    fn default() -> Self {
        Self::new()
    }
}

//! Simulation layer
//!
//! Defines the [`Simulation`](traits::Simulation) trait driving the
//! per-frame animation and the manager that owns the attached instance.

pub mod manager;
pub mod traits;

pub use manager::SimulationManager;
pub use traits::Simulation;

//! Solar system simulation
//!
//! The planet table, the per-planet animation state and the
//! [`SolarSystem`] simulation that drives the scene.

pub mod planets;
pub mod system;

pub use planets::{PlanetDef, PLANETS, SUN_RADIUS};
pub use system::{PlanetState, SolarSystem};

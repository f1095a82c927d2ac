//! Planet table and scene constants
//!
//! Fixed data for the eight planets: body radius, orbit radius and the
//! default orbital speed in radians per frame. Orbits are circular and
//! coplanar; distances and sizes are stylized, not to scale.

/// Static definition of one planet
#[derive(Debug, Clone, Copy)]
pub struct PlanetDef {
    pub name: &'static str,
    /// Body radius in scene units
    pub radius: f32,
    /// Orbit radius in scene units
    pub orbit_distance: f32,
    /// Default orbital speed in radians per frame
    pub initial_speed: f32,
    /// Surface texture, relative to the working directory
    pub texture: &'static str,
}

/// The eight planets, innermost first
#[rustfmt::skip]
pub const PLANETS: [PlanetDef; 8] = [
    PlanetDef { name: "Mercury", radius: 0.3, orbit_distance: 5.0, initial_speed: 0.02, texture: "assets/textures/mercury.jpg" },
    PlanetDef { name: "Venus", radius: 0.5, orbit_distance: 7.0, initial_speed: 0.015, texture: "assets/textures/venus.jpg" },
    PlanetDef { name: "Earth", radius: 0.6, orbit_distance: 9.0, initial_speed: 0.012, texture: "assets/textures/earth.jpg" },
    PlanetDef { name: "Mars", radius: 0.5, orbit_distance: 11.0, initial_speed: 0.01, texture: "assets/textures/mars.jpg" },
    PlanetDef { name: "Jupiter", radius: 1.2, orbit_distance: 14.0, initial_speed: 0.008, texture: "assets/textures/jupiter.jpg" },
    PlanetDef { name: "Saturn", radius: 1.0, orbit_distance: 17.0, initial_speed: 0.006, texture: "assets/textures/saturn.jpg" },
    PlanetDef { name: "Uranus", radius: 0.9, orbit_distance: 20.0, initial_speed: 0.004, texture: "assets/textures/uranus.jpg" },
    PlanetDef { name: "Neptune", radius: 0.9, orbit_distance: 23.0, initial_speed: 0.002, texture: "assets/textures/neptune.jpg" },
];

/// Sun body radius
pub const SUN_RADIUS: f32 = 2.5;
pub const SUN_TEXTURE: &str = "assets/textures/sun.jpg";
pub const SKY_TEXTURE: &str = "assets/textures/stars.jpg";

/// Radius of the inward-facing star-field sphere. Anything beyond the
/// outermost orbit and inside the camera far plane works.
pub const SKY_RADIUS: f32 = 500.0;

/// Orbit rings span `orbit_distance` plus/minus this half width
pub const RING_HALF_WIDTH: f32 = 0.02;
pub const RING_SEGMENTS: u32 = 64;
/// Ring color, a dim neutral grey
pub const RING_COLOR: [f32; 4] = [0.27, 0.27, 0.27, 1.0];

/// Longitude segments for planet and sun spheres
pub const SPHERE_SEGMENTS: u32 = 64;

/// Self-rotation applied to each planet, radians per running frame
pub const SELF_SPIN: f32 = 0.01;

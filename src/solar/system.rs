//! Solar system state and animation
//!
//! Owns the per-planet animation state and implements [`Simulation`]:
//! building the sun, planets, rings and star field into the scene, then
//! stepping the orbits once per frame while the animation runs.
//!
//! All state stepping is plain math with no GPU types involved, so the
//! whole animation is testable headless.

use cgmath::{Rad, Vector3};
use rand::Rng;
use std::f32::consts::TAU;

use crate::gfx::{resources::Material, scene::Scene};
use crate::sim::traits::Simulation;
use crate::ui::panel::orbit_control_panel;

use super::planets::{
    PlanetDef, PLANETS, RING_COLOR, RING_HALF_WIDTH, RING_SEGMENTS, SELF_SPIN, SKY_RADIUS,
    SKY_TEXTURE, SPHERE_SEGMENTS, SUN_RADIUS, SUN_TEXTURE,
};

/// Animation state for one planet
///
/// `slider_speed` is what the UI slider edits; `current_speed` is the
/// value last applied to the orbit. They only converge on running
/// frames, so dragging a slider while paused changes nothing until the
/// animation resumes.
pub struct PlanetState {
    pub name: String,
    pub radius: f32,
    pub orbit_distance: f32,
    /// Speed shown and edited in the UI, radians per frame
    pub slider_speed: f32,
    /// Speed applied on the most recent running frame
    pub current_speed: f32,
    /// Angle along the orbit, radians
    pub orbit_angle: f32,
    /// Rotation about the planet's own axis, radians
    pub spin_angle: f32,
    /// Index of the planet's object in the scene, set during initialize
    object_index: Option<usize>,
}

impl PlanetState {
    fn from_def(def: &PlanetDef, initial_angle: f32) -> Self {
        Self {
            name: def.name.to_string(),
            radius: def.radius,
            orbit_distance: def.orbit_distance,
            slider_speed: def.initial_speed,
            current_speed: def.initial_speed,
            orbit_angle: initial_angle,
            spin_angle: 0.0,
            object_index: None,
        }
    }

    /// Current position on the orbit circle
    pub fn position(&self) -> Vector3<f32> {
        Vector3::new(
            self.orbit_distance * self.orbit_angle.cos(),
            self.orbit_distance * self.orbit_angle.sin(),
            0.0,
        )
    }
}

/// The solar system simulation
///
/// Eight planets on circular coplanar orbits around a central sun, each
/// with its own speed slider, plus a global pause/resume toggle. Pausing
/// freezes state only; the scene keeps rendering every frame.
pub struct SolarSystem {
    planets: Vec<PlanetState>,
    running: bool,
}

impl SolarSystem {
    /// Creates the system with each planet at a random point on its orbit
    pub fn new() -> Self {
        let mut rng = rand::rng();
        Self::with_angles(|_| rng.random_range(0.0..TAU))
    }

    /// Creates the system with initial angles chosen by the caller
    pub fn with_angles(mut angle_for: impl FnMut(&PlanetDef) -> f32) -> Self {
        let planets = PLANETS
            .iter()
            .map(|def| PlanetState::from_def(def, angle_for(def)))
            .collect();
        Self {
            planets,
            running: true,
        }
    }

    pub fn planets(&self) -> &[PlanetState] {
        &self.planets
    }

    pub fn planets_mut(&mut self) -> &mut [PlanetState] {
        &mut self.planets
    }

    /// Advances all planets by one frame
    ///
    /// No-op while paused. On a running frame each planet first adopts
    /// its slider value, then moves by exactly that amount and spins by
    /// the fixed per-frame rotation.
    pub fn step(&mut self) {
        if !self.running {
            return;
        }

        for planet in &mut self.planets {
            planet.current_speed = planet.slider_speed;
            planet.orbit_angle += planet.current_speed;
            planet.spin_angle += SELF_SPIN;
        }
    }

    /// Writes planet transforms into the scene
    ///
    /// Runs every frame, paused or not, so the scene always reflects the
    /// current state.
    fn sync_to_scene(&self, scene: &mut Scene) {
        for planet in &self.planets {
            let Some(index) = planet.object_index else {
                continue;
            };
            if let Some(object) = scene.get_object_mut(index) {
                object.set_transform_trs(
                    planet.position(),
                    Rad(planet.spin_angle),
                    planet.radius,
                );
            }
        }
    }

    fn build_materials(&self, scene: &mut Scene) {
        scene.add_material(
            Material::new("sky", [1.0, 1.0, 1.0, 1.0])
                .with_unlit()
                .with_texture(SKY_TEXTURE),
        );
        scene.add_material(
            Material::new("sun", [1.0, 1.0, 1.0, 1.0])
                .with_unlit()
                .with_texture(SUN_TEXTURE),
        );
        scene.add_material(Material::new("ring", RING_COLOR).with_unlit());

        for def in PLANETS.iter() {
            scene.add_material(
                Material::new(def.name, [1.0, 1.0, 1.0, 1.0]).with_texture(def.texture),
            );
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for SolarSystem {
    /// Builds the star field, sun, planets and orbit rings
    fn initialize(&mut self, scene: &mut Scene) {
        self.build_materials(scene);

        let sky = scene.add_sky_sphere("Sky", SPHERE_SEGMENTS, "sky");
        if let Some(object) = scene.get_object_mut(sky) {
            object.set_scale(SKY_RADIUS);
        }

        let sun = scene.add_sphere("Sun", SPHERE_SEGMENTS, "sun");
        if let Some(object) = scene.get_object_mut(sun) {
            object.set_scale(SUN_RADIUS);
        }

        for planet in &mut self.planets {
            let index = scene.add_sphere(&planet.name, SPHERE_SEGMENTS, &planet.name);
            planet.object_index = Some(index);

            scene.add_ring(
                &format!("{} Orbit", planet.name),
                planet.orbit_distance - RING_HALF_WIDTH,
                planet.orbit_distance + RING_HALF_WIDTH,
                RING_SEGMENTS,
                "ring",
            );
        }

        // Place every planet at its starting angle before the first frame
        self.sync_to_scene(scene);
    }

    fn update(&mut self, scene: &mut Scene) {
        self.step();
        self.sync_to_scene(scene);
    }

    fn render_ui(&mut self, ui: &imgui::Ui) {
        orbit_control_panel(ui, &mut self.planets, &mut self.running);
    }

    fn name(&self) -> &str {
        "Solar System"
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Puts every planet back on a fresh random starting angle with its
    /// default speed, and resumes the animation
    fn reset(&mut self, scene: &mut Scene) {
        let mut rng = rand::rng();
        for (planet, def) in self.planets.iter_mut().zip(PLANETS.iter()) {
            planet.slider_speed = def.initial_speed;
            planet.current_speed = def.initial_speed;
            planet.orbit_angle = rng.random_range(0.0..TAU);
            planet.spin_angle = 0.0;
        }
        self.running = true;
        self.sync_to_scene(scene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    fn fixed_system() -> SolarSystem {
        SolarSystem::with_angles(|_| 0.0)
    }

    #[test]
    fn builds_eight_planets_in_order() {
        let system = SolarSystem::new();
        let names: Vec<&str> = system.planets().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"
            ]
        );
    }

    #[test]
    fn slider_defaults_match_planet_table() {
        let system = SolarSystem::new();
        for (planet, def) in system.planets().iter().zip(PLANETS.iter()) {
            assert_eq!(planet.slider_speed, def.initial_speed);
            assert_eq!(planet.current_speed, def.initial_speed);
        }
    }

    #[test]
    fn initial_angles_are_within_one_turn() {
        let system = SolarSystem::new();
        for planet in system.planets() {
            assert!(planet.orbit_angle >= 0.0 && planet.orbit_angle < TAU);
        }
    }

    #[test]
    fn starts_running_and_double_toggle_is_identity() {
        let mut system = fixed_system();
        assert!(system.is_running());
        system.set_running(!system.is_running());
        assert!(!system.is_running());
        system.set_running(!system.is_running());
        assert!(system.is_running());
    }

    #[test]
    fn paused_step_changes_nothing() {
        let mut system = fixed_system();
        system.set_running(false);

        system.planets_mut()[2].slider_speed = 0.04;
        system.step();

        let earth = &system.planets()[2];
        assert_eq!(earth.orbit_angle, 0.0);
        assert_eq!(earth.spin_angle, 0.0);
        // Slider edits made while paused are held, not applied
        assert_eq!(earth.current_speed, PLANETS[2].initial_speed);
    }

    #[test]
    fn running_step_applies_slider_and_advances_by_exactly_that() {
        let mut system = fixed_system();
        system.planets_mut()[0].slider_speed = 0.03;

        system.step();

        let mercury = &system.planets()[0];
        assert_eq!(mercury.current_speed, 0.03);
        assert_eq!(mercury.orbit_angle, 0.03);
        assert_eq!(mercury.spin_angle, SELF_SPIN);
    }

    #[test]
    fn slider_change_takes_effect_on_resume() {
        let mut system = fixed_system();
        system.set_running(false);
        system.planets_mut()[2].slider_speed = 0.05;
        system.step();
        assert_eq!(system.planets()[2].orbit_angle, 0.0);

        system.set_running(true);
        system.step();

        let earth = &system.planets()[2];
        assert_eq!(earth.current_speed, 0.05);
        assert_eq!(earth.orbit_angle, 0.05);
        assert!((earth.position().magnitude() - 9.0).abs() < 1e-5);
    }

    #[test]
    fn position_lies_on_orbit_circle() {
        let mut system = fixed_system();
        for _ in 0..100 {
            system.step();
        }
        for planet in system.planets() {
            let position = planet.position();
            assert!((position.magnitude() - planet.orbit_distance).abs() < 1e-4);
            assert_eq!(position.z, 0.0);
        }
    }

    #[test]
    fn position_matches_angle() {
        let mut system = fixed_system();
        system.planets_mut()[2].orbit_angle = std::f32::consts::FRAC_PI_2;
        let position = system.planets()[2].position();
        let distance = system.planets()[2].orbit_distance;
        assert!(position.x.abs() < 1e-5);
        assert!((position.y - distance).abs() < 1e-5);
    }

    #[test]
    fn speed_zero_freezes_orbit_but_not_spin() {
        let mut system = fixed_system();
        system.planets_mut()[7].slider_speed = 0.0;

        system.step();

        let neptune = &system.planets()[7];
        assert_eq!(neptune.orbit_angle, 0.0);
        assert_eq!(neptune.spin_angle, SELF_SPIN);
    }

    #[test]
    fn angle_accumulates_without_wrapping() {
        let mut system = fixed_system();
        system.planets_mut()[0].slider_speed = 0.05;
        for _ in 0..200 {
            system.step();
        }
        // 200 frames at 0.05 rad/frame is more than one full turn
        let mercury = &system.planets()[0];
        assert!((mercury.orbit_angle - 10.0).abs() < 1e-4);
        assert!((mercury.position().magnitude() - mercury.orbit_distance).abs() < 1e-4);
    }
}

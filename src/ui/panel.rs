//! Control panel for the solar system
//!
//! One slider per planet plus a pause/resume toggle, in a single fixed
//! window at the top-left corner of the view.

use crate::solar::PlanetState;

/// Slider range in radians per frame
pub const SPEED_MIN: f32 = 0.0;
pub const SPEED_MAX: f32 = 0.05;

/// Draws the orbit control panel
///
/// Sliders appear in planet order, innermost first. The toggle button
/// reads "Pause" while the animation runs and "Resume" while it is
/// paused; it never blanks the screen, rendering continues either way.
pub fn orbit_control_panel(ui: &imgui::Ui, planets: &mut [PlanetState], running: &mut bool) {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    ui.window("Orbit Controls")
        .size([300.0, 0.0], imgui::Condition::FirstUseEver)
        .position([20.0, 20.0], imgui::Condition::FirstUseEver)
        .resizable(true)
        .collapsible(true)
        .build(|| {
            ui.text("Orbit speed (rad/frame)");
            ui.separator();
            ui.spacing();

            for planet in planets.iter_mut() {
                ui.set_next_item_width(-80.0);
                ui.slider_config(&planet.name, SPEED_MIN, SPEED_MAX)
                    .display_format("%.3f")
                    .build(&mut planet.slider_speed);
            }

            ui.spacing();
            ui.separator();
            ui.spacing();

            let label = if *running { "Pause" } else { "Resume" };
            if ui.button_with_size(label, [120.0, 0.0]) {
                *running = !*running;
            }
        });
}

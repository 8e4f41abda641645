/*
 * UI Module
 *
 * Small egui panel with flock statistics and the runtime toggles.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{IntegrationMode, SimulationParams};
use crate::world::World;

// Draw the panel and return whether the integration mode was changed
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
    world: &World,
) -> bool {
    let previous_mode = params.integration;

    let ctx = egui.begin_frame();

    egui::Window::new("Flock")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.label(format!("Boids: {}", world.boids().len()));
            ui.label(format!("Obstacles: {}", world.obstacles().len()));
            ui.label(format!("Tick: {}", world.ticks()));

            ui.separator();

            ui.label("Left click: add boid");
            ui.label("Right click: add obstacle");

            ui.separator();

            ui.horizontal(|ui| {
                ui.radio_value(&mut params.integration, IntegrationMode::DoubleStep, "Double step");
                ui.radio_value(&mut params.integration, IntegrationMode::SingleStep, "Single step");
            });
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");

            if params.show_debug {
                ui.separator();
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Tick time: {:.3} ms", debug_info.tick_time.as_secs_f64() * 1000.0));
            }
        });

    params.integration != previous_mode
}

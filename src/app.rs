/*
 * Application Module
 *
 * This module defines the main application model for the flocking simulation.
 * It creates the window, owns the world and advances it once per frame
 * unless the simulation is paused.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use std::time::Instant;
use tracing::info;

use crate::camera::Camera;
use crate::debug::DebugInfo;
use crate::input::{mouse_moved, mouse_pressed, raw_window_event};
use crate::params::SimulationParams;
use crate::renderer::view;
use crate::ui;
use crate::world::World;
use crate::{HEIGHT, WIDTH};

// Main model for the application
pub struct Model {
    pub world: World,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: Camera,
    pub mouse_position: Vec2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let window_id = app
        .new_window()
        .title("Flocking Simulation")
        .size(WIDTH as u32, HEIGHT as u32)
        .resizable(false)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let params = SimulationParams::from_env().expect("invalid simulation settings");
    let world = World::seeded(&params);

    info!(width = WIDTH, height = HEIGHT, "window ready");

    Model {
        world,
        params,
        egui,
        debug_info: DebugInfo::default(),
        camera: Camera::new(WIDTH, HEIGHT),
        mouse_position: Vec2::ZERO,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let mode_changed = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info, &model.world);
    if mode_changed {
        info!(integration = %model.params.integration, "integration mode changed");
        model.world.set_integration(model.params.integration);
    }

    if !model.params.pause_simulation {
        let started = Instant::now();
        model.world.tick();
        model.debug_info.tick_time = started.elapsed();
    }
}

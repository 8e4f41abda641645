/*
 * Input Module
 *
 * Turns mouse clicks into world events:
 * - Left click adds a boid at the cursor
 * - Right click adds an obstacle at the cursor
 * Clicks that land on the UI panel are left to egui.
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, WindowEvent as RawWindowEvent};

use crate::app::Model;
use crate::world::WorldEvent;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let world_pos = model.camera.screen_to_world(model.mouse_position, app.window_rect());

    let event = match button {
        MouseButton::Left => WorldEvent::AddAgent(world_pos),
        MouseButton::Right => WorldEvent::AddObstacle(world_pos),
        _ => return,
    };
    model.world.apply(event);
}

// Pass raw window events through to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &RawWindowEvent) {
    model.egui.handle_raw_event(event);
}

/*
 * Renderer Module
 *
 * Draws the boids and obstacles each frame, plus the first boid's
 * perception radii and heading when the debug overlay is on.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::{ALIGNMENT_RADIUS, COHESION_RADIUS};

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();

    for boid in model.world.boids() {
        boid.draw(&draw, &model.camera, window_rect);
    }

    for obstacle in model.world.obstacles() {
        obstacle.draw(&draw, &model.camera, window_rect);
    }

    if model.params.show_debug {
        if let Some(first) = model.world.boids().first() {
            let screen_pos = model.camera.world_to_screen(first.position, window_rect);

            // Alignment and separation share a radius
            draw.ellipse()
                .xy(screen_pos)
                .radius(ALIGNMENT_RADIUS)
                .no_fill()
                .stroke(GREEN)
                .stroke_weight(1.0);

            draw.ellipse()
                .xy(screen_pos)
                .radius(COHESION_RADIUS)
                .no_fill()
                .stroke(BLUE)
                .stroke_weight(1.0);

            // World space is y-down, so flip the heading for the screen
            let heading = vec2(first.velocity.x, -first.velocity.y) * 40.0;
            draw.arrow()
                .start(screen_pos)
                .end(screen_pos + heading)
                .color(YELLOW)
                .stroke_weight(2.0);
        }
    }

    draw.to_frame(app, &frame).unwrap();

    model.egui.draw_to_frame(&frame).unwrap();
}

/*
 * Camera Module
 *
 * The simulation lives in screen-like world space: origin at the top-left,
 * y growing downwards, bounded by the world width and height. nannou draws
 * in a centred, y-up space. The camera converts between the two.
 */

use nannou::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub world_width: f32,
    pub world_height: f32,
}

impl Camera {
    pub fn new(world_width: f32, world_height: f32) -> Self {
        Self {
            world_width,
            world_height,
        }
    }

    // Convert a point from world space to screen space
    pub fn world_to_screen(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        let centered = vec2(
            point.x - self.world_width / 2.0,
            self.world_height / 2.0 - point.y,
        );
        centered + window_rect.xy()
    }

    // Convert a point from screen space to world space
    pub fn screen_to_world(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        let centered = point - window_rect.xy();
        vec2(
            centered.x + self.world_width / 2.0,
            self.world_height / 2.0 - centered.y,
        )
    }
}

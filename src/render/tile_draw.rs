// src/render/tile_draw.rs
//
// Draws tiles with nannou as textured rounded-rectangle polygons.
// Tile rects arrive in top-left pixel space; nannou's origin is the window
// centre with y pointing up.

use nannou::prelude::*;
use std::f32::consts::PI;

use crate::render::{TileRect, TileRenderer};

const CORNER_SEGMENTS: usize = 8;

pub struct NannouTileRenderer<'a> {
    draw: &'a Draw,
    window: Rect,
}

impl<'a> NannouTileRenderer<'a> {
    pub fn new(draw: &'a Draw, window: Rect) -> Self {
        Self { draw, window }
    }

    fn to_window(&self, x: f32, y: f32) -> Point2 {
        pt2(self.window.left() + x, self.window.top() - y)
    }
}

impl<'a> TileRenderer<wgpu::Texture> for NannouTileRenderer<'a> {
    fn draw(&mut self, image: &wgpu::Texture, rect: TileRect, corner_radius: f32) {
        // texture space is [0, 1] with v = 0 at the top edge
        let points = rounded_rect_points(rect, corner_radius, CORNER_SEGMENTS)
            .into_iter()
            .map(|(x, y)| {
                let tex = pt2((x - rect.x) / rect.width, (y - rect.y) / rect.height);
                (self.to_window(x, y), tex)
            });

        self.draw.polygon().points_textured(image, points);
    }
}

/// Outline of `rect` with each corner replaced by a quarter circle of
/// `radius` (clamped to half the shorter side), clockwise in y-down space
/// starting at the top-left corner.
pub fn rounded_rect_points(rect: TileRect, radius: f32, segments: usize) -> Vec<(f32, f32)> {
    let radius = radius.clamp(0.0, rect.width.min(rect.height) / 2.0);
    if radius == 0.0 || segments == 0 {
        return vec![
            (rect.x, rect.y),
            (rect.x + rect.width, rect.y),
            (rect.x + rect.width, rect.y + rect.height),
            (rect.x, rect.y + rect.height),
        ];
    }

    let left = rect.x + radius;
    let right = rect.x + rect.width - radius;
    let top = rect.y + radius;
    let bottom = rect.y + rect.height - radius;
    // (centre, start angle) per corner, sweeping a quarter turn each
    let corners = [
        ((left, top), PI),
        ((right, top), 1.5 * PI),
        ((right, bottom), 0.0),
        ((left, bottom), 0.5 * PI),
    ];

    let mut points = Vec::with_capacity(corners.len() * (segments + 1));
    for ((cx, cy), start) in corners {
        for i in 0..=segments {
            let angle = start + (i as f32 / segments as f32) * (PI / 2.0);
            points.push((cx + radius * angle.cos(), cy + radius * angle.sin()));
        }
    }
    points
}

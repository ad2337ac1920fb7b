/// Abstract rendering interface.

use crate::core::types::{Color, Vec2};
use cairo::ImageSurface;

pub trait Renderer {
    fn begin_frame(&mut self, width: i32, height: i32);
    fn end_frame(&mut self);

    // Primitives
    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: Color);
    fn draw_text(&self, x: f64, y: f64, text: &str, size: f64, color: Color);

    // Bitmap blits
    fn draw_image(&self, image: &ImageSurface, x: f64, y: f64);

    /// Blit an image centered on `center`, rotated clockwise by `angle_deg`.
    fn draw_image_rotated(&self, image: &ImageSurface, center: Vec2, angle_deg: f64);
}

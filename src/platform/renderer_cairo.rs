/// Cairo-based renderer implementation.

use crate::core::types::{Color, Vec2};
use crate::platform::renderer::Renderer;
use cairo::{Context, ImageSurface};
use std::f64::consts::PI;

pub struct RendererCairo {
    cr: Context,
}

impl RendererCairo {
    pub fn new(cr: Context) -> Self {
        Self { cr }
    }

    /// Update the Cairo context (e.g., after window resize).
    pub fn set_context(&mut self, cr: Context) {
        self.cr = cr;
    }

    fn set_color(&self, color: Color) {
        self.cr.set_source_rgba(color.r, color.g, color.b, color.a);
    }
}

impl Renderer for RendererCairo {
    fn begin_frame(&mut self, _width: i32, _height: i32) {
        self.cr.save().ok();
    }

    fn end_frame(&mut self) {
        self.cr.restore().ok();
    }

    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.set_color(color);
        self.cr.rectangle(x, y, w, h);
        self.cr.fill().ok();
    }

    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.set_color(color);
        self.cr.new_path();
        self.cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
        self.cr.fill().ok();
    }

    fn draw_text(&self, x: f64, y: f64, text: &str, size: f64, color: Color) {
        self.set_color(color);
        self.cr
            .select_font_face("monospace", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        self.cr.set_font_size(size);
        self.cr.move_to(x, y + size);
        self.cr.show_text(text).ok();
    }

    fn draw_image(&self, image: &ImageSurface, x: f64, y: f64) {
        self.cr.save().ok();
        self.cr.set_source_surface(image, x, y).ok();
        self.cr.paint().ok();
        self.cr.restore().ok();
    }

    fn draw_image_rotated(&self, image: &ImageSurface, center: Vec2, angle_deg: f64) {
        let w = image.width() as f64;
        let h = image.height() as f64;

        self.cr.save().ok();
        self.cr.translate(center.x, center.y);
        self.cr.rotate(angle_deg * PI / 180.0);
        self.cr.set_source_surface(image, -w / 2.0, -h / 2.0).ok();
        self.cr.paint().ok();
        self.cr.restore().ok();
    }
}

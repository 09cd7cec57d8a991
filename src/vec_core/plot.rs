use std::path::Path;

use log::{debug, warn};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::error::PlotError;
use super::glyphs::{self, GLYPH_HEIGHT};
use super::point::Point;
use super::render::Surface;

const ARC_STEPS: usize = 48;
const ARROW_HEAD_LENGTH: f32 = 12.0;
const ARROW_HEAD_WIDTH: f32 = 5.0;
const WEDGE_ALPHA: u8 = 90;

#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
    pub grid: bool,
    pub grid_step: f64,
    /// Pixels per glyph grid unit.
    pub text_scale: f32,
    pub line_width: f32,
    pub background: [u8; 3],
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            x_limits: (-1.0, 6.0),
            y_limits: (-1.0, 10.0),
            grid: true,
            grid_step: 1.0,
            text_scale: 2.0,
            line_width: 2.0,
            background: [255, 255, 255],
        }
    }
}

/// Looks up a named color or `#rrggbb`.
pub fn parse_color(name: &str) -> Option<Color> {
    let rgb = match name.trim().to_ascii_lowercase().as_str() {
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "blue" => [0, 0, 255],
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "orange" => [255, 165, 0],
        "purple" => [128, 0, 128],
        "gray" | "grey" => [128, 128, 128],
        "yellow" => [255, 255, 0],
        "cyan" => [0, 255, 255],
        "magenta" => [255, 0, 255],
        hex => {
            let digits = hex.strip_prefix('#')?;
            if digits.len() != 6 || !digits.is_ascii() {
                return None;
            }
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            [channel(0)?, channel(2)?, channel(4)?]
        }
    };
    Some(Color::from_rgba8(rgb[0], rgb[1], rgb[2], 255))
}

fn paint_for(color: &str, alpha: u8) -> Paint<'static> {
    let mut c = parse_color(color).unwrap_or_else(|| {
        warn!("unknown color {:?}, using red", color);
        Color::from_rgba8(255, 0, 0, 255)
    });
    c.apply_opacity(alpha as f32 / 255.0);

    let mut paint = Paint::default();
    paint.set_color(c);
    paint.anti_alias = true;
    paint
}

/// Multiples of `step` within `[lo, hi]`. Empty when there would be more
/// than `max_lines` of them.
pub fn grid_lines(lo: f64, hi: f64, step: f64, max_lines: usize) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    if last < first {
        return Vec::new();
    }
    let count = last - first + 1.0;
    if count > max_lines as f64 {
        debug!("skipping {} grid lines in [{}, {}]", count, lo, hi);
        return Vec::new();
    }
    (0..count as usize).map(|i| (first + i as f64) * step).collect()
}

/// Raster surface with fixed axis limits, y pointing up.
pub struct Plot {
    pub config: PlotConfig,
    drawing: Pixmap,
}

impl Plot {
    pub fn new(config: PlotConfig) -> Result<Plot, PlotError> {
        for (lo, hi) in [config.x_limits, config.y_limits] {
            if !lo.is_finite() || !hi.is_finite() || lo >= hi {
                return Err(PlotError::InvalidLimits(lo, hi));
            }
        }
        let drawing =
            Pixmap::new(config.width, config.height).ok_or(PlotError::Canvas(config.width, config.height))?;

        let mut plot = Plot { config, drawing };
        plot.clear();
        Ok(plot)
    }

    /// Fills the background and draws grid and axes.
    pub fn clear(&mut self) {
        let [r, g, b] = self.config.background;
        self.drawing.fill(Color::from_rgba8(r, g, b, 255));

        let (x0, x1) = self.config.x_limits;
        let (y0, y1) = self.config.y_limits;
        let step = self.config.grid_step;

        if self.config.grid && step > 0.0 {
            let mut paint = Paint::default();
            paint.set_color_rgba8(0, 0, 0, 40);
            let stroke = Stroke { width: 1.0, ..Stroke::default() };

            for x in grid_lines(x0, x1, step, self.config.width as usize) {
                self.line(Point::new(x, y0), Point::new(x, y1), &paint, &stroke);
            }
            for y in grid_lines(y0, y1, step, self.config.height as usize) {
                self.line(Point::new(x0, y), Point::new(x1, y), &paint, &stroke);
            }
        }

        let mut paint = Paint::default();
        paint.set_color_rgba8(0, 0, 0, 160);
        let stroke = Stroke { width: 1.0, ..Stroke::default() };
        if x0 <= 0.0 && 0.0 <= x1 {
            self.line(Point::new(0.0, y0), Point::new(0.0, y1), &paint, &stroke);
        }
        if y0 <= 0.0 && 0.0 <= y1 {
            self.line(Point::new(x0, 0.0), Point::new(x1, 0.0), &paint, &stroke);
        }
    }

    /// World coordinates to pixel coordinates.
    pub fn to_pixel(&self, p: Point) -> (f32, f32) {
        let (x0, x1) = self.config.x_limits;
        let (y0, y1) = self.config.y_limits;
        let px = (p.x - x0) / (x1 - x0) * self.config.width as f64;
        let py = (y1 - p.y) / (y1 - y0) * self.config.height as f64;
        (px as f32, py as f32)
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.drawing
    }

    /// RGBA8 bytes, premultiplied, row-major.
    pub fn data(&self) -> &[u8] {
        self.drawing.data()
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), PlotError> {
        debug!("saving plot to {}", path.as_ref().display());
        self.drawing
            .save_png(path)
            .map_err(|err| PlotError::Encode(Box::new(err)))
    }

    fn line(&mut self, from: Point, to: Point, paint: &Paint, stroke: &Stroke) {
        let (fx, fy) = self.to_pixel(from);
        let (tx, ty) = self.to_pixel(to);

        let mut pb = PathBuilder::new();
        pb.move_to(fx, fy);
        pb.line_to(tx, ty);
        if let Some(path) = pb.finish() {
            self.drawing.stroke_path(&path, paint, stroke, Transform::identity(), None);
        }
    }
}

impl Surface for Plot {
    fn arrow(&mut self, from: Point, to: Point, color: &str) {
        let paint = paint_for(color, 255);
        let (fx, fy) = self.to_pixel(from);
        let (tx, ty) = self.to_pixel(to);

        let (dx, dy) = (tx - fx, ty - fy);
        let len = (dx * dx + dy * dy).sqrt();
        if len < f32::EPSILON {
            self.dot(from, color);
            return;
        }
        let (ux, uy) = (dx / len, dy / len);
        let head = ARROW_HEAD_LENGTH.min(len);
        let (bx, by) = (tx - ux * head, ty - uy * head);

        let stroke = Stroke { width: self.config.line_width, ..Stroke::default() };
        let mut pb = PathBuilder::new();
        pb.move_to(fx, fy);
        pb.line_to(bx, by);
        if let Some(path) = pb.finish() {
            self.drawing.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }

        let mut pb = PathBuilder::new();
        pb.move_to(tx, ty);
        pb.line_to(bx - uy * ARROW_HEAD_WIDTH, by + ux * ARROW_HEAD_WIDTH);
        pb.line_to(bx + uy * ARROW_HEAD_WIDTH, by - ux * ARROW_HEAD_WIDTH);
        pb.close();
        if let Some(path) = pb.finish() {
            self.drawing.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    fn text(&mut self, at: Point, text: &str, color: &str, rotation: f64) {
        let paint = paint_for(color, 255);
        let scale = self.config.text_scale;
        let (ax, ay) = self.to_pixel(at);

        // centered on the anchor, both ways
        let left = -(glyphs::text_width(text) as f32) / 2.0;
        let middle = GLYPH_HEIGHT as f32 / 2.0;

        let mut pb = PathBuilder::new();
        for (i, c) in text.chars().enumerate() {
            let origin = left + (i as i32 * glyphs::ADVANCE as i32) as f32;
            for &(x1, y1, x2, y2) in glyphs::glyph(c) {
                pb.move_to((origin + x1 as f32) * scale, (middle - y1 as f32) * scale);
                pb.line_to((origin + x2 as f32) * scale, (middle - y2 as f32) * scale);
            }
        }
        let Some(path) = pb.finish() else {
            return;
        };

        let stroke = Stroke { width: (scale * 0.6).max(1.0), ..Stroke::default() };
        let transform = Transform::from_rotate(-rotation as f32).post_translate(ax, ay);
        self.drawing.stroke_path(&path, &paint, &stroke, transform, None);
    }

    fn wedge(&mut self, center: Point, radius: f64, theta1: f64, theta2: f64, color: &str) {
        let paint = paint_for(color, WEDGE_ALPHA);
        let (cx, cy) = self.to_pixel(center);

        let mut pb = PathBuilder::new();
        pb.move_to(cx, cy);
        for step in 0..=ARC_STEPS {
            let theta = (theta1 + (theta2 - theta1) * step as f64 / ARC_STEPS as f64).to_radians();
            let (px, py) = self.to_pixel(Point::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            ));
            pb.line_to(px, py);
        }
        pb.close();

        if let Some(path) = pb.finish() {
            self.drawing.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    fn dot(&mut self, at: Point, color: &str) {
        let paint = paint_for(color, 255);
        let (x, y) = self.to_pixel(at);
        let r = self.config.line_width * 2.0;
        if let Some(rect) = Rect::from_xywh(x - r, y - r, 2.0 * r, 2.0 * r) {
            self.drawing.fill_rect(rect, &paint, Transform::identity(), None);
        }
    }
}

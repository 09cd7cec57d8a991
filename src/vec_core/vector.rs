use std::fmt;

use log::debug;

use super::error::VectorError;
use super::point::Point;

pub const DEFAULT_COLOR: &str = "red";

/// Inputs of a vector construction. Which fields are set selects the mode:
/// `angle` + `length` (polar), `end` (position or connection vector).
#[derive(Debug, Clone, Default)]
pub struct VectorParams {
    pub pos: Option<Point>,
    pub end: Option<Point>,
    pub length: Option<f64>,
    pub angle: Option<f64>,
    pub color: Option<String>,
}

impl VectorParams {
    pub fn new() -> VectorParams {
        VectorParams::default()
    }

    pub fn pos(mut self, pos: Point) -> Self {
        self.pos = Some(pos);
        self
    }

    pub fn end(mut self, end: Point) -> Self {
        self.end = Some(end);
        self
    }

    pub fn length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn build(self) -> Result<Vector, VectorError> {
        Vector::new(self)
    }
}

/// A directed segment from `pos` to `end`.
///
/// `x`, `y`, `length` and `angle` are derived once at construction and stay
/// consistent: `length = hypot(x, y)`, `angle = atan2(y, x)` in degrees,
/// within (-180, 180].
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    pos: Point,
    end: Point,
    x: f64,
    y: f64,
    length: f64,
    angle: f64,
    color: String,
}

impl Vector {
    pub fn new(params: VectorParams) -> Result<Vector, VectorError> {
        let VectorParams {
            pos,
            end,
            length,
            angle,
            color,
        } = params;
        let pos = pos.unwrap_or(Point::ORIGIN);

        let end = match (angle, end) {
            (Some(angle), _) => {
                let length = length.ok_or(VectorError::MissingParameter("length"))?;
                let theta = angle.to_radians();
                Point::new(pos.x + length * theta.cos(), pos.y + length * theta.sin())
            }
            (None, Some(end)) => end,
            (None, None) => return Err(VectorError::InvalidConstruction),
        };

        let vector = Vector::from_points(pos, end, color.unwrap_or_else(|| DEFAULT_COLOR.to_owned()));
        debug!("derived vector: {}", vector);

        Ok(vector)
    }

    /// Vector anchored at the origin.
    pub fn position(end: Point) -> Vector {
        Vector::from_points(Point::ORIGIN, end, DEFAULT_COLOR.to_owned())
    }

    pub fn connection(pos: Point, end: Point) -> Vector {
        Vector::from_points(pos, end, DEFAULT_COLOR.to_owned())
    }

    /// Vector from the origin with the given length and angle in degrees.
    pub fn polar(length: f64, angle: f64) -> Vector {
        let theta = angle.to_radians();
        let end = Point::new(length * theta.cos(), length * theta.sin());
        Vector::from_points(Point::ORIGIN, end, DEFAULT_COLOR.to_owned())
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Vector {
        self.color = color.into();
        self
    }

    pub(crate) fn from_points(pos: Point, end: Point, color: String) -> Vector {
        let x = end.x - pos.x;
        let y = end.y - pos.y;

        Vector {
            pos,
            end,
            x,
            y,
            length: x.hypot(y),
            angle: degrees_of(x, y),
            color,
        }
    }

    /// Vector with the given components starting at `pos`; `end` follows.
    pub(crate) fn from_components(pos: Point, x: f64, y: f64, color: String) -> Vector {
        Vector {
            pos,
            end: Point::new(pos.x + x, pos.y + y),
            x,
            y,
            length: x.hypot(y),
            angle: degrees_of(x, y),
            color,
        }
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Degrees, in (-180, 180].
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn components(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

fn degrees_of(x: f64, y: f64) -> f64 {
    // atan2(-0.0, negative) is -180, the range is (-180, 180]
    if y == 0.0 && x < 0.0 {
        return 180.0;
    }
    y.atan2(x).to_degrees()
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position: {}, endpoint: {}, size: [x: {:.2}, y: {:.2}], length: {:.2}, angle: {:.2}",
            self.pos, self.end, self.x, self.y, self.length, self.angle
        )
    }
}

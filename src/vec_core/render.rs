use log::trace;

use super::point::Point;
use super::vector::Vector;

/// Label offset above the midpoint and above the start point.
pub const LABEL_OFFSET: f64 = 0.3;
pub const END_LABEL_OFFSET: f64 = 0.04;
pub const WEDGE_RADIUS: f64 = 0.5;
pub const ANGLE_LABEL_OFFSET: (f64, f64) = (0.75, 0.15);

/// Something vectors can be drawn on. Coordinates are world coordinates,
/// angles are degrees counterclockwise from the positive x axis.
pub trait Surface {
    fn arrow(&mut self, from: Point, to: Point, color: &str);

    fn text(&mut self, at: Point, text: &str, color: &str, rotation: f64);

    /// Filled circular sector from `theta1` to `theta2`, counterclockwise.
    fn wedge(&mut self, center: Point, radius: f64, theta1: f64, theta2: f64, color: &str);

    fn dot(&mut self, at: Point, color: &str);
}

/// Start and end angle of the angle annotation.
///
/// Wedges are only drawn counterclockwise, so vectors pointing left measure
/// from the negative x axis and vectors pointing right from the positive one.
pub fn wedge_span(x: f64, angle: f64) -> (f64, f64) {
    if x < 0.0 {
        if angle < 0.0 {
            (180.0 + angle, 180.0)
        } else {
            (180.0, 180.0 + angle)
        }
    } else if angle < 0.0 {
        (angle, 0.0)
    } else {
        (0.0, angle)
    }
}

pub fn render<S: Surface + ?Sized>(vector: &Vector, surface: &mut S) {
    let color = vector.color();
    let pos = vector.pos();
    let end = vector.end();
    trace!("render: {}", vector);

    surface.arrow(pos, end, color);

    // length, along the shaft
    let mid = Point::new(pos.x + vector.x() / 2.0, pos.y + vector.y() / 2.0 + LABEL_OFFSET);
    surface.text(mid, &format!("length: {:.2}", vector.length()), color, vector.angle());

    surface.text(Point::new(pos.x, pos.y + LABEL_OFFSET), &pos.to_string(), color, 0.0);
    surface.text(Point::new(end.x, end.y + END_LABEL_OFFSET), &end.to_string(), color, 0.0);

    let (theta1, theta2) = wedge_span(vector.x(), vector.angle());
    surface.wedge(pos, WEDGE_RADIUS, theta1, theta2, color);

    let direction = if vector.x() < 0.0 { -1.0 } else { 1.0 };
    let at = Point::new(
        pos.x + direction * ANGLE_LABEL_OFFSET.0,
        pos.y + ANGLE_LABEL_OFFSET.1,
    );
    surface.text(at, &format!("{:.2}°", vector.angle()), color, 0.0);
}

/// A draw call as issued to a `Surface`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Arrow { from: Point, to: Point, color: String },
    Text { at: Point, text: String, color: String, rotation: f64 },
    Wedge { center: Point, radius: f64, theta1: f64, theta2: f64, color: String },
    Dot { at: Point, color: String },
}

/// Surface that keeps the calls it receives, in order.
///
/// Useful to inspect or replay what `render` draws without a raster
/// backend, e.g. to forward the calls to another plotting library.
#[derive(Debug, Default)]
pub struct DrawLog {
    pub calls: Vec<DrawCall>,
}

impl DrawLog {
    pub fn new() -> DrawLog {
        DrawLog::default()
    }
}

impl Surface for DrawLog {
    fn arrow(&mut self, from: Point, to: Point, color: &str) {
        self.calls.push(DrawCall::Arrow { from, to, color: color.to_owned() });
    }

    fn text(&mut self, at: Point, text: &str, color: &str, rotation: f64) {
        self.calls.push(DrawCall::Text {
            at,
            text: text.to_owned(),
            color: color.to_owned(),
            rotation,
        });
    }

    fn wedge(&mut self, center: Point, radius: f64, theta1: f64, theta2: f64, color: &str) {
        self.calls.push(DrawCall::Wedge {
            center,
            radius,
            theta1,
            theta2,
            color: color.to_owned(),
        });
    }

    fn dot(&mut self, at: Point, color: &str) {
        self.calls.push(DrawCall::Dot { at, color: color.to_owned() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_log_records_every_kind_of_call() {
        let mut log = DrawLog::new();
        log.dot(Point::new(1.0, 2.0), "black");
        log.wedge(Point::ORIGIN, 1.0, 0.0, 45.0, "red");
        log.text(Point::ORIGIN, "a", "blue", 10.0);
        log.arrow(Point::ORIGIN, Point::new(1.0, 0.0), "red");

        assert_eq!(log.calls.len(), 4);
        assert_eq!(log.calls[0], DrawCall::Dot { at: Point::new(1.0, 2.0), color: "black".to_owned() });
        assert!(matches!(log.calls[1], DrawCall::Wedge { theta2, .. } if theta2 == 45.0));
        assert!(matches!(&log.calls[2], DrawCall::Text { text, rotation, .. } if text == "a" && *rotation == 10.0));
        assert!(matches!(log.calls[3], DrawCall::Arrow { .. }));
    }

    #[test]
    fn wedge_span_per_quadrant() {
        assert_eq!(wedge_span(1.0, 30.0), (0.0, 30.0));
        assert_eq!(wedge_span(1.0, -30.0), (-30.0, 0.0));
        assert_eq!(wedge_span(-1.0, 150.0), (180.0, 330.0));
        assert_eq!(wedge_span(-1.0, -150.0), (30.0, 180.0));
        assert_eq!(wedge_span(0.0, 90.0), (0.0, 90.0));
        assert_eq!(wedge_span(0.0, -90.0), (-90.0, 0.0));
    }

    #[test]
    fn render_issues_calls_in_order() {
        let v = Vector::connection(Point::new(1.0, 2.0), Point::new(4.0, 6.0)).with_color("green");
        let mut log = DrawLog::new();
        render(&v, &mut log);

        assert_eq!(log.calls.len(), 6);
        assert_eq!(
            log.calls[0],
            DrawCall::Arrow {
                from: Point::new(1.0, 2.0),
                to: Point::new(4.0, 6.0),
                color: "green".to_owned(),
            }
        );
        match &log.calls[1] {
            DrawCall::Text { at, text, rotation, .. } => {
                assert_eq!(*at, Point::new(2.5, 4.0 + LABEL_OFFSET));
                assert_eq!(text, "length: 5.00");
                assert!((rotation - v.angle()).abs() < 1e-12);
            }
            other => panic!("expected length label, got {:?}", other),
        }
        match &log.calls[2] {
            DrawCall::Text { text, .. } => assert_eq!(text, "(1.00;2.00)"),
            other => panic!("expected start label, got {:?}", other),
        }
        match &log.calls[3] {
            DrawCall::Text { at, text, .. } => {
                assert_eq!(*at, Point::new(4.0, 6.0 + END_LABEL_OFFSET));
                assert_eq!(text, "(4.00;6.00)");
            }
            other => panic!("expected end label, got {:?}", other),
        }
        match &log.calls[4] {
            DrawCall::Wedge { center, radius, theta1, theta2, .. } => {
                assert_eq!(*center, Point::new(1.0, 2.0));
                assert_eq!(*radius, WEDGE_RADIUS);
                assert_eq!(*theta1, 0.0);
                assert!((theta2 - 53.13010235415598).abs() < 1e-9);
            }
            other => panic!("expected wedge, got {:?}", other),
        }
        match &log.calls[5] {
            DrawCall::Text { at, text, .. } => {
                assert_eq!(*at, Point::new(1.0 + ANGLE_LABEL_OFFSET.0, 2.0 + ANGLE_LABEL_OFFSET.1));
                assert_eq!(text, "53.13°");
            }
            other => panic!("expected angle label, got {:?}", other),
        }
    }

    #[test]
    fn left_pointing_vector_mirrors_annotation() {
        let v = Vector::position(Point::new(-1.0, -1.0));
        let mut log = DrawLog::new();
        render(&v, &mut log);

        match &log.calls[4] {
            DrawCall::Wedge { theta1, theta2, .. } => {
                assert!((theta1 - 45.0).abs() < 1e-9);
                assert_eq!(*theta2, 180.0);
            }
            other => panic!("expected wedge, got {:?}", other),
        }
        match &log.calls[5] {
            DrawCall::Text { at, text, .. } => {
                assert_eq!(at.x, -ANGLE_LABEL_OFFSET.0);
                assert_eq!(text, "-135.00°");
            }
            other => panic!("expected angle label, got {:?}", other),
        }
    }
}

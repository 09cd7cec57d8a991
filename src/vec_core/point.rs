use std::fmt;

use super::error::VectorError;

/// A coordinate pair. Index 0 is `x`, index 1 is `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub fn get(&self, index: usize) -> Result<f64, VectorError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(VectorError::IndexOutOfRange(index)),
        }
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<(), VectorError> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(VectorError::IndexOutOfRange(index)),
        }
        Ok(())
    }

    pub fn plus(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn minus(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn multiply(self, v: f64) -> Point {
        Point::new(self.x * v, self.y * v)
    }

    pub fn as_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        self.plus(rhs)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        self.minus(rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Point {
        Point::new(x, y)
    }
}

/// Two decimals, standard float formatting (ties go to even).
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2};{:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_access() {
        let p = Point::new(0.0, 0.0);
        assert_eq!(p.get(0), Ok(0.0));
        assert_eq!(p.get(1), Ok(0.0));
        assert_eq!(p.get(2), Err(VectorError::IndexOutOfRange(2)));

        let mut q = Point::new(1.5, -2.0);
        q.set(0, 7.0).unwrap();
        q.set(1, 8.0).unwrap();
        assert_eq!(q, Point::new(7.0, 8.0));
        assert_eq!(q.set(5, 1.0), Err(VectorError::IndexOutOfRange(5)));
        // failed set leaves the point untouched
        assert_eq!(q, Point::new(7.0, 8.0));
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(Point::new(2.0, 3.0).to_string(), "(2.00;3.00)");
        assert_eq!(Point::new(4.3301, -2.4999).to_string(), "(4.33;-2.50)");
        assert_eq!(Point::new(0.1 + 0.2, 10.0 / 3.0).to_string(), "(0.30;3.33)");
    }

    #[test]
    fn arithmetic() {
        let a = Point::from((1.0, 2.0));
        let b = Point::from([4.0, 6.0]);
        assert_eq!(b - a, Point::new(3.0, 4.0));
        assert_eq!(a + b, Point::new(5.0, 8.0));
        assert_eq!(a.multiply(2.0).as_tuple(), (2.0, 4.0));
    }
}

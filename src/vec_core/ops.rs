//! Pure functions over pairs of vectors. Positions are ignored except by
//! `difference`, which keeps the first operand's start point.

use super::vector::Vector;

/// Component tolerance used by `equals`.
pub const EPSILON: f64 = 1e-9;

pub fn scalar_product(a: &Vector, b: &Vector) -> f64 {
    a.x() * b.x() + a.y() * b.y()
}

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive when `b` lies counterclockwise of `a`.
pub fn determinant(a: &Vector, b: &Vector) -> f64 {
    a.x() * b.y() - a.y() * b.x()
}

pub fn equals(a: &Vector, b: &Vector) -> bool {
    (a.x() - b.x()).abs() <= EPSILON && (a.y() - b.y()).abs() <= EPSILON
}

pub fn length(v: &Vector) -> f64 {
    v.length()
}

/// `a - b` as a new vector starting at `a.pos()`. Color follows `a`.
pub fn difference(a: &Vector, b: &Vector) -> Vector {
    Vector::from_components(a.pos(), a.x() - b.x(), a.y() - b.y(), a.color().to_owned())
}

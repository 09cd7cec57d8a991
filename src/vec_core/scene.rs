use log::debug;

use super::error::VectorError;
use super::ops;
use super::point::Point;
use super::render::{render, Surface, LABEL_OFFSET};
use super::vector::Vector;

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Point(Point),
    Vector(Vector),
}

/// Named points and vectors, kept in insertion order.
#[derive(Debug, Default)]
pub struct Scene {
    items: Vec<(String, Item)>,
}

impl Scene {
    pub fn new() -> Scene {
        Scene::default()
    }

    /// Inserts or replaces an item.
    pub fn insert(&mut self, name: &str, item: Item) -> &mut Self {
        match self.items.iter().position(|(n, _)| n == name) {
            Some(index) => self.items[index].1 = item,
            None => self.items.push((name.to_owned(), item)),
        }
        self
    }

    pub fn insert_point(&mut self, name: &str, point: Point) -> &mut Self {
        self.insert(name, Item::Point(point))
    }

    pub fn insert_vector(&mut self, name: &str, vector: Vector) -> &mut Self {
        self.insert(name, Item::Vector(vector))
    }

    pub fn get(&self, name: &str) -> Result<&Item, VectorError> {
        self.items
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, item)| item)
            .ok_or_else(|| VectorError::UnknownItem(name.to_owned()))
    }

    pub fn vector(&self, name: &str) -> Result<&Vector, VectorError> {
        match self.get(name)? {
            Item::Vector(v) => Ok(v),
            Item::Point(_) => Err(VectorError::TypeMismatch {
                name: name.to_owned(),
                expected: "vector",
            }),
        }
    }

    pub fn point(&self, name: &str) -> Result<Point, VectorError> {
        match self.get(name)? {
            Item::Point(p) => Ok(*p),
            Item::Vector(_) => Err(VectorError::TypeMismatch {
                name: name.to_owned(),
                expected: "point",
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn scalar_product(&self, a: &str, b: &str) -> Result<f64, VectorError> {
        Ok(ops::scalar_product(self.vector(a)?, self.vector(b)?))
    }

    pub fn determinant(&self, a: &str, b: &str) -> Result<f64, VectorError> {
        Ok(ops::determinant(self.vector(a)?, self.vector(b)?))
    }

    pub fn equals(&self, a: &str, b: &str) -> Result<bool, VectorError> {
        Ok(ops::equals(self.vector(a)?, self.vector(b)?))
    }

    pub fn difference(&self, a: &str, b: &str) -> Result<Vector, VectorError> {
        Ok(ops::difference(self.vector(a)?, self.vector(b)?))
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for (name, item) in self.items.iter() {
            debug!("render item `{}`", name);
            match item {
                Item::Vector(v) => render(v, surface),
                Item::Point(p) => {
                    surface.dot(*p, "black");
                    surface.text(Point::new(p.x, p.y + LABEL_OFFSET), &p.to_string(), "black", 0.0);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec_core::render::{DrawCall, DrawLog};

    fn demo() -> Scene {
        let mut scene = Scene::new();
        scene
            .insert_vector("a", Vector::position(Point::new(2.0, 3.0)))
            .insert_vector("b", Vector::position(Point::new(4.0, 8.0)))
            .insert_point("p", Point::new(1.0, 1.0));
        scene
    }

    #[test]
    fn operations_by_name() {
        let scene = demo();
        assert_eq!(scene.scalar_product("a", "b"), Ok(32.0));
        assert_eq!(scene.determinant("a", "b"), Ok(4.0));
        assert_eq!(scene.equals("a", "a"), Ok(true));
        assert_eq!(scene.equals("a", "b"), Ok(false));
        assert_eq!(scene.difference("b", "a").unwrap().components(), Point::new(2.0, 5.0));
    }

    #[test]
    fn non_vector_operand_is_a_type_mismatch() {
        let scene = demo();
        assert_eq!(
            scene.difference("a", "p"),
            Err(VectorError::TypeMismatch { name: "p".to_owned(), expected: "vector" })
        );
        assert!(matches!(scene.equals("p", "a"), Err(VectorError::TypeMismatch { .. })));
        assert!(matches!(scene.point("a"), Err(VectorError::TypeMismatch { .. })));
        assert_eq!(scene.point("p"), Ok(Point::new(1.0, 1.0)));
        assert_eq!(scene.scalar_product("a", "zz"), Err(VectorError::UnknownItem("zz".to_owned())));
    }

    #[test]
    fn insert_replaces_by_name() {
        let mut scene = demo();
        scene.insert_point("a", Point::new(0.0, 0.0));
        assert_eq!(scene.len(), 3);
        assert!(matches!(scene.vector("a"), Err(VectorError::TypeMismatch { .. })));
    }

    #[test]
    fn render_walks_items_in_order() {
        let scene = demo();
        let mut log = DrawLog::new();
        scene.render(&mut log);

        // two vectors with six calls each, then a dot and its label
        assert_eq!(log.calls.len(), 14);
        assert!(matches!(log.calls[0], DrawCall::Arrow { .. }));
        assert!(matches!(log.calls[6], DrawCall::Arrow { .. }));
        assert_eq!(
            log.calls[12],
            DrawCall::Dot { at: Point::new(1.0, 1.0), color: "black".to_owned() }
        );
        assert_eq!(
            log.calls[13],
            DrawCall::Text {
                at: Point::new(1.0, 1.0 + LABEL_OFFSET),
                text: "(1.00;1.00)".to_owned(),
                color: "black".to_owned(),
                rotation: 0.0,
            }
        );
    }
}

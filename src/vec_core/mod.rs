pub mod error;
pub mod glyphs;
pub mod ops;
pub mod plot;
pub mod point;
pub mod render;
pub mod scene;
pub mod vector;
pub mod viewer;

//! Built-in scene elements.

pub mod polygon;
pub mod trapezoid;

pub use polygon::Polygon;
pub use trapezoid::Trapezoid;

//! # ChartKit Core
//!
//! Core building blocks for the ChartKit scene graph: geometric
//! primitives, SVG path-string builders, the drawable-element trait, the
//! built-in polygon and trapezoid elements with morphing support, the
//! element-class registry, and the motion/theme configuration surface.

pub mod element;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod morpher;
pub mod motion;
pub mod paths;
pub mod percent;
pub mod properties;
pub mod registry;

pub use element::{Element, ElementBase};
pub use elements::{Polygon, Trapezoid};
pub use error::{CoreError, Result};
pub use geometry::{BoundingBox, Extrema, Point, PolygonInput, PolygonRings, Ring};
pub use morpher::Morpher;
pub use motion::{
    ComponentMotion, ScrollbarMotion, SeriesMotion, StateMotion, Theme, ThemeTarget, TooltipMotion,
};
pub use percent::{percent, Length, Percent};
pub use properties::{set_if_changed, ChangeFlag};

pub use registry::{register_core_elements, registry, ElementFactory, Registry};

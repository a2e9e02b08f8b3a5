//! # ChartKit Themes
//!
//! Ready-made themes. A theme is a plain function over [`ThemeTarget`];
//! pass it to an element's `apply_theme` or call it directly on a
//! motion struct.

pub mod animated;

pub use animated::animated;
pub use chartkit_core::motion::{Theme, ThemeTarget};

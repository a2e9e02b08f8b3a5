//! # ChartKit Charts
//!
//! Chart-level elements built on `chartkit-core`: axis breaks and
//! circular axis fills, map lines and splines, and line series.
//!
//! Renderable element types register with the core registry through
//! [`register_chart_elements`] so they can be created by class name.

pub mod axes;
pub mod map;

pub use axes::{AxisBreak, AxisFillCircular, DateAxisBreak};
pub use map::{MapLine, MapLineSeries, MapLineSeriesDataItem, MapSpline, MapSplineSeries};

use tracing::debug;

use chartkit_core::registry;

/// Adds every renderable chart element to the shared registry. Safe to
/// call more than once; re-registration replaces the previous factory.
pub fn register_chart_elements() {
    debug!("registering chart elements");
    let mut registry = registry::registry().write();
    registry
        .register("AxisFillCircular", || Box::new(AxisFillCircular::new()))
        .register("MapLine", || Box::new(MapLine::new()))
        .register("MapSpline", || Box::new(MapSpline::new()))
        .register("MapLineSeries", || Box::new(MapLineSeries::<MapLine>::new()))
        .register("MapSplineSeries", || Box::new(MapSplineSeries::new()));
}

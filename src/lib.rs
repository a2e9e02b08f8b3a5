//! # ChartKit
//!
//! A scene-graph toolkit for SVG charts with support for:
//! - Polygon elements with hole rings and shape morphing
//! - Trapezoids and circular axis fills
//! - Value and date axis breaks
//! - Map lines, tension-smoothed splines, and line series
//! - Function themes applying animated motion defaults
//!
//! ## Architecture
//!
//! ChartKit is organized as a workspace with multiple crates:
//!
//! 1. **chartkit-core** - Geometry, SVG path building, the element trait,
//!    polygon/trapezoid elements, morphing, the class registry
//! 2. **chartkit-charts** - Axis breaks, circular axis fills, map lines
//!    and line series
//! 3. **chartkit-themes** - Ready-made motion themes
//! 4. **chartkit** - Facade crate re-exporting the toolkit surface

pub use chartkit_core::paths;

pub use chartkit_core::{
    percent, register_core_elements, registry, set_if_changed, BoundingBox, ChangeFlag,
    ComponentMotion, CoreError, Element, ElementBase, ElementFactory, Extrema, Length, Morpher,
    Percent, Point, Polygon, PolygonInput, PolygonRings, Registry, Result, Ring, ScrollbarMotion,
    SeriesMotion, StateMotion, Theme, ThemeTarget, TooltipMotion, Trapezoid,
};

pub use chartkit_charts::{
    register_chart_elements, AxisBreak, AxisFillCircular, DateAxisBreak, MapLine, MapLineSeries,
    MapLineSeriesDataItem, MapSpline, MapSplineSeries,
};

pub use chartkit_themes::animated;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seeds the shared element registry with every built-in class.
///
/// The core classes register themselves on first registry access; this
/// adds the chart-level classes so any built-in element can be created
/// by class name.
pub fn init() {
    register_chart_elements();
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}

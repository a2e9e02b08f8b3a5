//! Motion configuration and the theme dispatch surface.
//!
//! Elements and components carry small config structs describing how their
//! animated transitions should run. A theme is a plain function visiting a
//! tagged target and setting per-variant fields explicitly; no dynamic
//! type inspection is involved.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Transition timing for an element state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateMotion {
    /// How long a state transition runs. Zero means jump.
    pub transition: Duration,
}

/// Transition timing for data-bound components (axes, series containers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMotion {
    /// Zoom/range change animation length.
    pub range_change: Duration,
    /// Data-value interpolation length.
    pub interpolation: Duration,
    /// Whether data items animate one after another instead of together.
    pub sequenced_interpolation: bool,
}

impl Default for ComponentMotion {
    fn default() -> Self {
        Self {
            range_change: Duration::ZERO,
            interpolation: Duration::ZERO,
            sequenced_interpolation: true,
        }
    }
}

/// Tooltip reposition animation timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TooltipMotion {
    pub animation: Duration,
}

/// Scrollbar grip/zoom animation timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollbarMotion {
    pub animation: Duration,
}

/// Series-level motion: the component timings plus the series' default
/// state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesMotion {
    pub component: ComponentMotion,
    pub default_state: StateMotion,
}

/// One theme-tunable target. A series target covers both its component
/// timings and its default state, so a theme arm can apply the whole
/// cascade in one visit.
pub enum ThemeTarget<'a> {
    State(&'a mut StateMotion),
    Component(&'a mut ComponentMotion),
    Tooltip(&'a mut TooltipMotion),
    Scrollbar(&'a mut ScrollbarMotion),
    Series(&'a mut SeriesMotion),
}

/// A theme visits targets one at a time and tunes their fields.
pub type Theme = fn(ThemeTarget<'_>);

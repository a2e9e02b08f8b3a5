//! The animated theme.
//!
//! Out of the box every motion duration is zero and values jump to their
//! targets. This theme turns the classic animated preset on: state
//! transitions ease over 400ms, zoom and data interpolation over 800ms,
//! and series get a slower 1200ms default state on top of the component
//! timings.

use std::time::Duration;

use chartkit_core::motion::{ComponentMotion, ThemeTarget};

/// Applies animated defaults to one target.
pub fn animated(target: ThemeTarget<'_>) {
    match target {
        ThemeTarget::State(state) => {
            state.transition = Duration::from_millis(400);
        }
        ThemeTarget::Component(component) => {
            tune_component(component);
        }
        ThemeTarget::Tooltip(tooltip) => {
            tooltip.animation = Duration::from_millis(400);
        }
        ThemeTarget::Scrollbar(scrollbar) => {
            scrollbar.animation = Duration::from_millis(800);
        }
        ThemeTarget::Series(series) => {
            tune_component(&mut series.component);
            series.default_state.transition = Duration::from_millis(1200);
        }
    }
}

fn tune_component(component: &mut ComponentMotion) {
    component.range_change = Duration::from_millis(800);
    component.interpolation = Duration::from_millis(800);
    component.sequenced_interpolation = false;
}

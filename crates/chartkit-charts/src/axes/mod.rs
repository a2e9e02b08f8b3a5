//! Axis decorations: value and date breaks, circular fills.

pub mod breaks;
pub mod fill;

pub use breaks::{AxisBreak, DateAxisBreak};
pub use fill::AxisFillCircular;

//! Axis breaks: excluded value spans squashed out of an axis scale.

use chartkit_core::properties::{set_if_changed, ChangeFlag};
use chrono::{DateTime, Utc};

/// A break over a numeric value range.
///
/// Endpoints start as NaN until set. The owning axis hands in its change
/// flag; endpoint and size setters mark it so the axis knows its data
/// range needs recomputing.
#[derive(Debug, Clone)]
pub struct AxisBreak {
    start_value: f64,
    end_value: f64,
    break_size: f64,
    changed: ChangeFlag,
}

impl AxisBreak {
    pub fn new() -> Self {
        Self {
            start_value: f64::NAN,
            end_value: f64::NAN,
            // the broken-out span keeps 1% of its natural size
            break_size: 0.01,
            changed: ChangeFlag::new(),
        }
    }

    /// Attaches the owner's change flag.
    pub fn bind_change_flag(&mut self, flag: ChangeFlag) {
        self.changed = flag;
    }

    pub fn change_flag(&self) -> &ChangeFlag {
        &self.changed
    }

    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    pub fn set_start_value(&mut self, value: f64) {
        if set_if_changed(&mut self.start_value, value) {
            self.changed.mark();
        }
    }

    pub fn end_value(&self) -> f64 {
        self.end_value
    }

    pub fn set_end_value(&mut self, value: f64) {
        if set_if_changed(&mut self.end_value, value) {
            self.changed.mark();
        }
    }

    pub fn break_size(&self) -> f64 {
        self.break_size
    }

    pub fn set_break_size(&mut self, size: f64) {
        if set_if_changed(&mut self.break_size, size) {
            self.changed.mark();
        }
    }

    /// Endpoints in ascending order. NaN endpoints pass through.
    pub fn range(&self) -> (f64, f64) {
        if self.start_value <= self.end_value {
            (self.start_value, self.end_value)
        } else {
            (self.end_value, self.start_value)
        }
    }

    /// Whether `value` falls inside the break span. Always false while an
    /// endpoint is NaN.
    pub fn contains(&self, value: f64) -> bool {
        let (low, high) = self.range();
        value >= low && value <= high
    }

    /// A value as a 0..1 position on an axis spanning `min..max`.
    pub fn relative_position(value: f64, min: f64, max: f64) -> f64 {
        (value - min) / (max - min)
    }

    /// Start endpoint as a 0..1 position on an axis spanning `min..max`.
    pub fn start_position(&self, min: f64, max: f64) -> f64 {
        Self::relative_position(self.start_value, min, max)
    }

    /// End endpoint as a 0..1 position on an axis spanning `min..max`.
    pub fn end_position(&self, min: f64, max: f64) -> f64 {
        Self::relative_position(self.end_value, min, max)
    }
}

impl Default for AxisBreak {
    fn default() -> Self {
        Self::new()
    }
}

/// A break over a date range. Dates are stored as epoch-millisecond
/// values on the underlying numeric break, so everything that works on a
/// value axis works here unchanged.
#[derive(Debug, Clone)]
pub struct DateAxisBreak {
    inner: AxisBreak,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
}

impl DateAxisBreak {
    pub fn new() -> Self {
        Self {
            inner: AxisBreak::new(),
            start_date: None,
            end_date: None,
        }
    }

    pub fn bind_change_flag(&mut self, flag: ChangeFlag) {
        self.inner.bind_change_flag(flag);
    }

    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    pub fn set_start_date(&mut self, date: DateTime<Utc>) {
        if set_if_changed(&mut self.start_date, Some(date)) {
            self.inner.set_start_value(date.timestamp_millis() as f64);
        }
    }

    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.end_date
    }

    pub fn set_end_date(&mut self, date: DateTime<Utc>) {
        if set_if_changed(&mut self.end_date, Some(date)) {
            self.inner.set_end_value(date.timestamp_millis() as f64);
        }
    }

    pub fn start_value(&self) -> f64 {
        self.inner.start_value()
    }

    pub fn end_value(&self) -> f64 {
        self.inner.end_value()
    }

    pub fn break_size(&self) -> f64 {
        self.inner.break_size()
    }

    pub fn set_break_size(&mut self, size: f64) {
        self.inner.set_break_size(size);
    }

    pub fn contains(&self, value: f64) -> bool {
        self.inner.contains(value)
    }
}

impl Default for DateAxisBreak {
    fn default() -> Self {
        Self::new()
    }
}

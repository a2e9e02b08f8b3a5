//! Property-change helpers.
//!
//! Element properties are plain struct fields. Setters go through
//! [`set_if_changed`] and follow a changed result with invalidation or a
//! redraw. Change notification across ownership boundaries (an axis break
//! telling its axis the data range moved) uses a shared [`ChangeFlag`]
//! instead of callbacks; this library is single-threaded by contract.

use std::cell::Cell;
use std::rc::Rc;

/// Stores `value` into `slot` if it differs, returning whether it changed.
///
/// Comparison is `PartialEq`, so NaN never compares equal to itself and a
/// NaN-to-NaN store counts as a change.
pub fn set_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

/// A shared dirty marker handed out by an owner to the parts that may
/// invalidate it.
#[derive(Debug, Clone, Default)]
pub struct ChangeFlag(Rc<Cell<bool>>);

impl ChangeFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the flag.
    pub fn mark(&self) {
        self.0.set(true);
    }

    /// Reads the flag without clearing it.
    pub fn is_marked(&self) -> bool {
        self.0.get()
    }

    /// Reads and clears the flag.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

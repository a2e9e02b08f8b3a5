//! The drawable-element trait and the state every element carries.

use serde_json::Value;
use uuid::Uuid;

use crate::error::Result;
use crate::geometry::BoundingBox;

/// A scene element that serializes its geometry into a path string.
///
/// Implementations are self-contained: all inputs live on the element, so
/// `draw` takes no context and is idempotent for unchanged state.
pub trait Element: std::fmt::Debug {
    /// The registered class name, e.g. `"Polygon"`.
    fn class_name(&self) -> &'static str;

    /// Unique instance id.
    fn id(&self) -> Uuid;

    /// Recomputes the path string and bounding box from current state.
    fn draw(&mut self);

    /// The last drawn path string. Empty until drawn or when the element
    /// has nothing to show.
    fn path(&self) -> &str;

    /// The last computed bounding box. Elements keep the previous box when
    /// a draw emits no path content.
    fn bounding_box(&self) -> BoundingBox;

    /// Applies a JSON configuration value to the element's properties.
    fn configure(&mut self, config: &Value) -> Result<()>;

    /// Releases element resources. Idempotent.
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}

/// State shared by every element: id, pixel size, the rendered path, the
/// bounding box, and the invalidation/disposal markers.
#[derive(Debug, Clone)]
pub struct ElementBase {
    id: Uuid,
    pub width: f64,
    pub height: f64,
    path: String,
    bbox: BoundingBox,
    invalid: bool,
    disposed: bool,
}

impl ElementBase {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            width: 0.0,
            height: 0.0,
            path: String::new(),
            bbox: BoundingBox::default(),
            invalid: true,
            disposed: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Marks the element as needing a redraw.
    pub fn invalidate(&mut self) {
        self.invalid = true;
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Stores a freshly drawn path and clears the invalidation marker.
    pub fn set_path(&mut self, path: String) {
        self.path = path;
        self.invalid = false;
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_bbox(&mut self, bbox: BoundingBox) {
        self.bbox = bbox;
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Default for ElementBase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_element_is_invalid() {
        let base = ElementBase::new();
        assert!(base.is_invalid());
        assert!(!base.is_disposed());
        assert_eq!(base.path(), "");
    }

    #[test]
    fn test_set_path_clears_invalidation() {
        let mut base = ElementBase::new();
        base.set_path("M 0 0 Z ".to_string());
        assert!(!base.is_invalid());
        base.invalidate();
        assert!(base.is_invalid());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ElementBase::new().id(), ElementBase::new().id());
    }
}

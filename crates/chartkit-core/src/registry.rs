//! The element-class registry.
//!
//! Polymorphic instantiation from configuration data goes through an
//! explicit factory map: class name to a function producing a boxed
//! element. Core seeds its own element classes; downstream crates register
//! theirs at startup through the global instance.

use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use crate::element::Element;
use crate::elements::{Polygon, Trapezoid};
use crate::error::{CoreError, Result};

/// Produces a fresh element with default properties.
pub type ElementFactory = fn() -> Box<dyn Element>;

/// Maps element class names to factories.
#[derive(Default)]
pub struct Registry {
    factories: HashMap<String, ElementFactory>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a factory under a class name. Re-registering a name
    /// replaces the previous factory.
    pub fn register(&mut self, name: &str, factory: ElementFactory) -> &mut Self {
        debug!(class = name, "registered element factory");
        self.factories.insert(name.to_string(), factory);
        self
    }

    /// Creates a fresh element instance by class name.
    pub fn create(&self, name: &str) -> Result<Box<dyn Element>> {
        match self.factories.get(name) {
            Some(factory) => Ok(factory()),
            None => Err(CoreError::UnknownElement {
                name: name.to_string(),
            }),
        }
    }

    /// Creates an element and applies a JSON configuration to it.
    /// Configuration failures are wrapped with the class name.
    pub fn create_configured(&self, name: &str, config: &Value) -> Result<Box<dyn Element>> {
        let mut element = self.create(name)?;
        element.configure(config).map_err(|err| CoreError::InvalidConfig {
            class_name: name.to_string(),
            message: err.to_string(),
        })?;
        Ok(element)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// All registered class names, sorted.
    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

/// Seeds the factories for the element classes defined in this crate.
pub fn register_core_elements(registry: &mut Registry) {
    registry.register("Polygon", || Box::new(Polygon::new()));
    registry.register("Trapezoid", || Box::new(Trapezoid::new()));
}

static REGISTRY: OnceLock<RwLock<Registry>> = OnceLock::new();

/// The process-wide registry, seeded with the core element classes on
/// first access.
pub fn registry() -> &'static RwLock<Registry> {
    REGISTRY.get_or_init(|| {
        let mut registry = Registry::new();
        register_core_elements(&mut registry);
        RwLock::new(registry)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_core_elements() {
        let mut local = Registry::new();
        register_core_elements(&mut local);

        let polygon = local.create("Polygon").unwrap();
        assert_eq!(polygon.class_name(), "Polygon");
        let trapezoid = local.create("Trapezoid").unwrap();
        assert_eq!(trapezoid.class_name(), "Trapezoid");
    }

    #[test]
    fn test_unknown_class() {
        let local = Registry::new();
        let err = local.create("Nonagon").unwrap_err();
        assert!(matches!(err, CoreError::UnknownElement { name } if name == "Nonagon"));
    }

    #[test]
    fn test_create_configured() {
        let mut local = Registry::new();
        register_core_elements(&mut local);

        let config = json!({
            "points": [
                { "surface": [
                    { "x": 0.0, "y": 0.0 },
                    { "x": 4.0, "y": 0.0 },
                    { "x": 4.0, "y": 4.0 }
                ] }
            ]
        });
        let element = local.create_configured("Polygon", &config).unwrap();
        assert!(element.path().starts_with("M 0 0 "));
        assert_eq!(element.bounding_box().width, 4.0);
    }

    #[test]
    fn test_create_configured_wraps_config_errors() {
        let mut local = Registry::new();
        register_core_elements(&mut local);

        let config = json!({ "points": "not an array" });
        let err = local.create_configured("Polygon", &config).unwrap_err();
        assert!(matches!(&err, CoreError::InvalidConfig { class_name, .. } if class_name == "Polygon"));
    }

    #[test]
    fn test_registered_names_sorted() {
        let mut local = Registry::new();
        register_core_elements(&mut local);
        assert_eq!(local.registered_names(), vec!["Polygon", "Trapezoid"]);
    }

    #[test]
    fn test_global_registry_is_seeded() {
        let registry = registry().read();
        assert!(registry.contains("Polygon"));
        assert!(registry.contains("Trapezoid"));
    }
}

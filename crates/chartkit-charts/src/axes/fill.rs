//! Band fill between two positions on a circular axis.

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use chartkit_core::element::{Element, ElementBase};
use chartkit_core::error::Result;
use chartkit_core::geometry::{BoundingBox, Extrema};
use chartkit_core::paths;
use chartkit_core::percent::{percent, Length};
use chartkit_core::properties::set_if_changed;

/// Fills an annular sector of a circular axis, in local coordinates
/// centered on the axis.
///
/// The axis renderer resolves band positions into start/end angles and
/// supplies its pixel radius; the fill's own radius and inner radius are
/// lengths resolved against that, defaulting to the full ring. A positive
/// corner radius rounds the sector corners.
#[derive(Debug)]
pub struct AxisFillCircular {
    base: ElementBase,
    start_angle: f64,
    end_angle: f64,
    pixel_radius: f64,
    radius: Length,
    inner_radius: Length,
    corner_radius: f64,
}

impl AxisFillCircular {
    pub fn new() -> Self {
        Self {
            base: ElementBase::new(),
            start_angle: 0.0,
            end_angle: 0.0,
            pixel_radius: 0.0,
            radius: Length::Relative(percent(100.0)),
            inner_radius: Length::Pixels(0.0),
            corner_radius: 0.0,
        }
    }

    pub fn set_angles(&mut self, start_angle: f64, end_angle: f64) {
        let changed = set_if_changed(&mut self.start_angle, start_angle)
            | set_if_changed(&mut self.end_angle, end_angle);
        if changed {
            self.base.invalidate();
            self.draw();
        }
    }

    pub fn set_pixel_radius(&mut self, pixel_radius: f64) {
        if set_if_changed(&mut self.pixel_radius, pixel_radius) {
            self.base.invalidate();
            self.draw();
        }
    }

    pub fn radius(&self) -> Length {
        self.radius
    }

    pub fn set_radius(&mut self, radius: Length) {
        if set_if_changed(&mut self.radius, radius) {
            self.base.invalidate();
            self.draw();
        }
    }

    pub fn inner_radius(&self) -> Length {
        self.inner_radius
    }

    pub fn set_inner_radius(&mut self, inner_radius: Length) {
        if set_if_changed(&mut self.inner_radius, inner_radius) {
            self.base.invalidate();
            self.draw();
        }
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    pub fn set_corner_radius(&mut self, corner_radius: f64) {
        if set_if_changed(&mut self.corner_radius, corner_radius) {
            self.base.invalidate();
            self.draw();
        }
    }

    pub fn draw(&mut self) {
        let (a0, a1) = if self.end_angle < self.start_angle {
            (self.end_angle, self.start_angle)
        } else {
            (self.start_angle, self.end_angle)
        };
        let radius = self.radius.relative_to_value(self.pixel_radius);
        let inner = self.inner_radius.relative_to_value(self.pixel_radius);

        let path = paths::annular_sector(a0, a1, radius, inner, self.corner_radius);
        if !path.is_empty() {
            // sample both rims for the box at degree steps; the drawn
            // geometry repeats past one revolution, so wider sweeps clamp
            // to 360 and the inner rim clamps like the sector outline
            let inner = inner.clamp(0.0, radius);
            let span = (a1 - a0).min(360.0);
            let steps = span.ceil().max(1.0) as usize;
            let mut extrema = Extrema::new();
            for i in 0..=steps {
                let angle = a0 + span * i as f64 / steps as f64;
                extrema.fold(paths::point_on_circle(radius, angle));
                extrema.fold(paths::point_on_circle(inner, angle));
            }
            self.base.set_bbox(extrema.bounding_box());
        }
        self.base.set_path(path);
    }

    pub fn dispose(&mut self) {
        self.base.dispose();
    }
}

impl Default for AxisFillCircular {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct AxisFillCircularConfig {
    start_angle: Option<f64>,
    end_angle: Option<f64>,
    pixel_radius: Option<f64>,
    radius: Option<Length>,
    inner_radius: Option<Length>,
    corner_radius: Option<f64>,
}

impl Element for AxisFillCircular {
    fn class_name(&self) -> &'static str {
        "AxisFillCircular"
    }

    fn id(&self) -> Uuid {
        self.base.id()
    }

    fn draw(&mut self) {
        AxisFillCircular::draw(self);
    }

    fn path(&self) -> &str {
        self.base.path()
    }

    fn bounding_box(&self) -> BoundingBox {
        self.base.bbox()
    }

    fn configure(&mut self, config: &Value) -> Result<()> {
        let config = AxisFillCircularConfig::deserialize(config)?;
        self.start_angle = config.start_angle.unwrap_or(self.start_angle);
        self.end_angle = config.end_angle.unwrap_or(self.end_angle);
        self.pixel_radius = config.pixel_radius.unwrap_or(self.pixel_radius);
        if let Some(radius) = config.radius {
            self.radius = radius;
        }
        if let Some(inner_radius) = config.inner_radius {
            self.inner_radius = inner_radius;
        }
        self.corner_radius = config.corner_radius.unwrap_or(self.corner_radius);
        self.base.invalidate();
        self.draw();
        Ok(())
    }

    fn dispose(&mut self) {
        AxisFillCircular::dispose(self);
    }

    fn is_disposed(&self) -> bool {
        self.base.is_disposed()
    }
}

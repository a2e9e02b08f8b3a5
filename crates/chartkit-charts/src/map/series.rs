//! Map line series: a collection of data items, each lazily materializing
//! its line element on first access.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use chartkit_core::element::{Element, ElementBase};
use chartkit_core::error::Result;
use chartkit_core::geometry::{BoundingBox, Extrema, Point};
use chartkit_core::motion::{SeriesMotion, Theme, ThemeTarget};
use chartkit_core::properties::ChangeFlag;

use super::line::{MapLine, MapSpline};

/// A line element type a series can manage. The series class name rides
/// along so `MapLineSeries<MapSpline>` registers as its own class.
pub trait SeriesLine: Element + Default {
    const SERIES_CLASS: &'static str;

    fn set_line_points(&mut self, points: Vec<Vec<Point>>);
}

impl SeriesLine for MapLine {
    const SERIES_CLASS: &'static str = "MapLineSeries";

    fn set_line_points(&mut self, points: Vec<Vec<Point>>) {
        self.set_points(points);
    }
}

impl SeriesLine for MapSpline {
    const SERIES_CLASS: &'static str = "MapSplineSeries";

    fn set_line_points(&mut self, points: Vec<Vec<Point>>) {
        self.set_points(points);
    }
}

/// One series entry. The line element is not built until something asks
/// for it; data can be loaded and thrown away without paying for
/// element construction.
#[derive(Debug)]
pub struct MapLineSeriesDataItem<L: SeriesLine> {
    points: Vec<Vec<Point>>,
    line: Option<L>,
}

impl<L: SeriesLine> MapLineSeriesDataItem<L> {
    pub fn new(points: Vec<Vec<Point>>) -> Self {
        Self { points, line: None }
    }

    /// Whether the line element has been materialized yet.
    pub fn has_line(&self) -> bool {
        self.line.is_some()
    }

    /// The line element for this item, created on first access with the
    /// item's points already applied.
    pub fn line(&mut self) -> &mut L {
        let points = &self.points;
        self.line.get_or_insert_with(|| {
            let mut line = L::default();
            line.set_line_points(points.clone());
            line
        })
    }

    pub fn points(&self) -> &Vec<Vec<Point>> {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<Vec<Point>>) {
        if let Some(line) = self.line.as_mut() {
            line.set_line_points(points.clone());
        }
        self.points = points;
    }
}

/// A series of map lines. The generic parameter picks the element type
/// the items materialize, straight lines by default.
#[derive(Debug)]
pub struct MapLineSeries<L: SeriesLine = MapLine> {
    base: ElementBase,
    items: Vec<MapLineSeriesDataItem<L>>,
    motion: SeriesMotion,
    changed: ChangeFlag,
}

/// A series whose items materialize smoothed splines.
pub type MapSplineSeries = MapLineSeries<MapSpline>;

impl<L: SeriesLine> MapLineSeries<L> {
    pub fn new() -> Self {
        Self {
            base: ElementBase::new(),
            items: Vec::new(),
            motion: SeriesMotion::default(),
            changed: ChangeFlag::new(),
        }
    }

    /// Appends a data item and returns it for further setup.
    pub fn add_item(&mut self, points: Vec<Vec<Point>>) -> &mut MapLineSeriesDataItem<L> {
        debug!(class = L::SERIES_CLASS, "adding line data item");
        self.items.push(MapLineSeriesDataItem::new(points));
        self.changed.mark();
        self.base.invalidate();
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    pub fn items(&self) -> &[MapLineSeriesDataItem<L>] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [MapLineSeriesDataItem<L>] {
        &mut self.items
    }

    pub fn clear_items(&mut self) {
        self.items.clear();
        self.changed.mark();
        self.base.invalidate();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn motion(&self) -> &SeriesMotion {
        &self.motion
    }

    pub fn motion_mut(&mut self) -> &mut SeriesMotion {
        &mut self.motion
    }

    /// Runs a theme over this series' motion configuration.
    pub fn apply_theme(&mut self, theme: Theme) {
        theme(ThemeTarget::Series(&mut self.motion));
    }

    pub fn change_flag(&self) -> &ChangeFlag {
        &self.changed
    }

    /// Draws every item line and aggregates: paths concatenate, boxes
    /// union. Items whose lines emit nothing contribute neither.
    pub fn draw(&mut self) {
        let mut path = String::new();
        let mut extrema = Extrema::new();
        for item in &mut self.items {
            let line = item.line();
            line.draw();
            if !line.path().is_empty() {
                path.push_str(line.path());
                extrema.fold_box(line.bounding_box());
            }
        }
        if !path.is_empty() {
            self.base.set_bbox(extrema.bounding_box());
        }
        self.base.set_path(path);
    }

    pub fn dispose(&mut self) {
        if self.base.is_disposed() {
            return;
        }
        for item in &mut self.items {
            if let Some(line) = item.line.as_mut() {
                line.dispose();
            }
        }
        self.base.dispose();
    }
}

impl<L: SeriesLine> Default for MapLineSeries<L> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SeriesItemConfig {
    points: Vec<Vec<Point>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SeriesConfig {
    items: Vec<SeriesItemConfig>,
}

impl<L: SeriesLine> Element for MapLineSeries<L> {
    fn class_name(&self) -> &'static str {
        L::SERIES_CLASS
    }

    fn id(&self) -> Uuid {
        self.base.id()
    }

    fn draw(&mut self) {
        MapLineSeries::draw(self);
    }

    fn path(&self) -> &str {
        self.base.path()
    }

    fn bounding_box(&self) -> BoundingBox {
        self.base.bbox()
    }

    fn configure(&mut self, config: &Value) -> Result<()> {
        let config = SeriesConfig::deserialize(config)?;
        self.items.clear();
        for item in config.items {
            self.add_item(item.points);
        }
        self.draw();
        Ok(())
    }

    fn dispose(&mut self) {
        MapLineSeries::dispose(self);
    }

    fn is_disposed(&self) -> bool {
        self.base.is_disposed()
    }
}

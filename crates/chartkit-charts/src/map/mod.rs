//! Map layer elements: multi-part lines, smoothed splines and the
//! series that manage them.

pub mod line;
pub mod series;

pub use line::{MapLine, MapSpline};
pub use series::{MapLineSeries, MapLineSeriesDataItem, MapSplineSeries, SeriesLine};

//! Relative and absolute length values.
//!
//! Chart geometry is frequently specified relative to some base measure
//! (an element's pixel size, an axis radius). `Percent` carries the
//! relative figure; `Length` is the pixels-or-percent union used by element
//! properties and JSON configs.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// A relative value, constructed from a 0..100 figure.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(f64);

impl Percent {
    /// Creates a percent from a 0..100 figure, e.g. `Percent::new(50.0)`.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The 0..1 multiplier.
    pub fn value(&self) -> f64 {
        self.0 / 100.0
    }

    /// The raw 0..100 figure.
    pub fn percent(&self) -> f64 {
        self.0
    }
}

/// Shorthand constructor: `percent(80.0)`.
pub fn percent(value: f64) -> Percent {
    Percent::new(value)
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl FromStr for Percent {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let figure = trimmed.strip_suffix('%').unwrap_or(trimmed);
        figure
            .trim()
            .parse::<f64>()
            .map(Percent::new)
            .map_err(|_| CoreError::InvalidLength {
                value: s.to_string(),
            })
    }
}

/// A length that is either absolute pixels or relative to a base measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Pixels(f64),
    Relative(Percent),
}

impl Length {
    /// Resolves the length against a base measure in pixels.
    pub fn relative_to_value(&self, base: f64) -> f64 {
        match self {
            Length::Pixels(v) => *v,
            Length::Relative(p) => p.value() * base,
        }
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Length::Pixels(value)
    }
}

impl From<Percent> for Length {
    fn from(value: Percent) -> Self {
        Length::Relative(value)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Pixels(v) => write!(f, "{}", v),
            Length::Relative(p) => write!(f, "{}", p),
        }
    }
}

impl FromStr for Length {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.ends_with('%') {
            return Percent::from_str(trimmed).map(Length::Relative);
        }
        trimmed
            .parse::<f64>()
            .map(Length::Pixels)
            .map_err(|_| CoreError::InvalidLength {
                value: s.to_string(),
            })
    }
}

// JSON configs write pixel lengths as numbers and relative lengths as
// "NN%" strings, so Length gets hand-rolled serde impls.
impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Length::Pixels(v) => serializer.serialize_f64(*v),
            Length::Relative(p) => serializer.serialize_str(&p.to_string()),
        }
    }
}

struct LengthVisitor;

impl Visitor<'_> for LengthVisitor {
    type Value = Length;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a percentage string like \"50%\"")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Length, E> {
        Ok(Length::Pixels(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Length, E> {
        Ok(Length::Pixels(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Length, E> {
        Ok(Length::Pixels(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Length, E> {
        Length::from_str(v).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Length, D::Error> {
        deserializer.deserialize_any(LengthVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_value() {
        assert_eq!(percent(50.0).value(), 0.5);
        assert_eq!(percent(100.0).value(), 1.0);
        assert_eq!(percent(80.0).percent(), 80.0);
    }

    #[test]
    fn test_percent_display_and_parse() {
        let p = percent(12.5);
        assert_eq!(p.to_string(), "12.5%");
        assert_eq!("12.5%".parse::<Percent>().unwrap(), p);
    }

    #[test]
    fn test_length_resolution() {
        assert_eq!(Length::Pixels(42.0).relative_to_value(200.0), 42.0);
        assert_eq!(Length::Relative(percent(50.0)).relative_to_value(200.0), 100.0);
    }

    #[test]
    fn test_length_parse() {
        assert_eq!("80%".parse::<Length>().unwrap(), Length::Relative(percent(80.0)));
        assert_eq!("16".parse::<Length>().unwrap(), Length::Pixels(16.0));
        assert!("wide".parse::<Length>().is_err());
    }

    #[test]
    fn test_length_json_roundtrip() {
        let px: Length = serde_json::from_str("24.5").unwrap();
        assert_eq!(px, Length::Pixels(24.5));
        let rel: Length = serde_json::from_str("\"75%\"").unwrap();
        assert_eq!(rel, Length::Relative(percent(75.0)));

        assert_eq!(serde_json::to_string(&px).unwrap(), "24.5");
        assert_eq!(serde_json::to_string(&rel).unwrap(), "\"75%\"");
    }
}

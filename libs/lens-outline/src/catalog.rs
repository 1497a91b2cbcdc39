//! # Shape Catalog
//!
//! Registry of every frame style: stable string keys and display metadata.

use crate::digitized::{self, DIGITIZED_POINTS};
use crate::error::{OutlineError, OutlineResult};
use crate::outline::ShapeOutline;
use crate::parametric;
use config::constants::MIN_OUTLINE_POINTS;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a frame style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ShapeId {
    Rectangle,
    Square,
    Wayfarer,
    Aviator,
    Pilot,
    Clubmaster,
    CatEye,
    Navigator,
    CatEyeNarrow,
    Round,
    Oval,
    Pantos,
    Geometric,
    Butterfly,
    Hexagonal,
    Octagonal,
    Digitized1,
    Digitized1Raw,
    Digitized1Sharp,
    Digitized2,
    Digitized3,
    Digitized4,
    Digitized5,
    Digitized6,
    Digitized7,
    Digitized8,
    Digitized9,
    Digitized10,
    Digitized11,
    Digitized12,
    Digitized13,
    Digitized14,
    Digitized15,
    Digitized16,
}

/// Display metadata for a frame style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeInfo {
    pub id: ShapeId,
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Nominal width-to-height ratio
    pub width_ratio: f64,
}

impl ShapeId {
    /// Every style, in catalog order.
    pub const ALL: [ShapeId; 34] = [
        ShapeId::Rectangle,
        ShapeId::Square,
        ShapeId::Wayfarer,
        ShapeId::Aviator,
        ShapeId::Pilot,
        ShapeId::Clubmaster,
        ShapeId::CatEye,
        ShapeId::Navigator,
        ShapeId::CatEyeNarrow,
        ShapeId::Round,
        ShapeId::Oval,
        ShapeId::Pantos,
        ShapeId::Geometric,
        ShapeId::Butterfly,
        ShapeId::Hexagonal,
        ShapeId::Octagonal,
        ShapeId::Digitized1,
        ShapeId::Digitized1Raw,
        ShapeId::Digitized1Sharp,
        ShapeId::Digitized2,
        ShapeId::Digitized3,
        ShapeId::Digitized4,
        ShapeId::Digitized5,
        ShapeId::Digitized6,
        ShapeId::Digitized7,
        ShapeId::Digitized8,
        ShapeId::Digitized9,
        ShapeId::Digitized10,
        ShapeId::Digitized11,
        ShapeId::Digitized12,
        ShapeId::Digitized13,
        ShapeId::Digitized14,
        ShapeId::Digitized15,
        ShapeId::Digitized16,
    ];

    /// Style used when a lookup by key fails.
    pub const DEFAULT: ShapeId = ShapeId::Rectangle;

    /// Stable string key.
    pub fn key(self) -> &'static str {
        match self {
            ShapeId::Rectangle => "rectangle",
            ShapeId::Square => "square",
            ShapeId::Wayfarer => "wayfarer",
            ShapeId::Aviator => "aviator",
            ShapeId::Pilot => "pilot",
            ShapeId::Clubmaster => "clubmaster",
            ShapeId::CatEye => "catEye",
            ShapeId::Navigator => "navigator",
            ShapeId::CatEyeNarrow => "catEyeNarrow",
            ShapeId::Round => "round",
            ShapeId::Oval => "oval",
            ShapeId::Pantos => "pantos",
            ShapeId::Geometric => "geometric",
            ShapeId::Butterfly => "butterfly",
            ShapeId::Hexagonal => "hexagonal",
            ShapeId::Octagonal => "octagonal",
            ShapeId::Digitized1 => "realShape1",
            ShapeId::Digitized1Raw => "realShape1Raw",
            ShapeId::Digitized1Sharp => "realShape1Sharp",
            ShapeId::Digitized2 => "realShape2",
            ShapeId::Digitized3 => "realShape3",
            ShapeId::Digitized4 => "realShape4",
            ShapeId::Digitized5 => "realShape5",
            ShapeId::Digitized6 => "realShape6",
            ShapeId::Digitized7 => "realShape7",
            ShapeId::Digitized8 => "realShape8",
            ShapeId::Digitized9 => "realShape9",
            ShapeId::Digitized10 => "realShape10",
            ShapeId::Digitized11 => "realShape11",
            ShapeId::Digitized12 => "realShape12",
            ShapeId::Digitized13 => "realShape13",
            ShapeId::Digitized14 => "realShape14",
            ShapeId::Digitized15 => "realShape15",
            ShapeId::Digitized16 => "realShape16",
        }
    }

    /// Looks up a style by key, falling back to [`ShapeId::DEFAULT`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use lens_outline::ShapeId;
    ///
    /// assert_eq!(ShapeId::resolve("catEye"), ShapeId::CatEye);
    /// assert_eq!(ShapeId::resolve("no-such-frame"), ShapeId::Rectangle);
    /// ```
    pub fn resolve(key: &str) -> ShapeId {
        key.parse().unwrap_or(Self::DEFAULT)
    }

    /// True for styles backed by a fixed digitized table.
    pub fn is_digitized(self) -> bool {
        self.digitized_table().is_some()
    }

    /// Stored table for digitized styles.
    pub fn digitized_table(self) -> Option<&'static [[f64; 2]; DIGITIZED_POINTS]> {
        let table = match self {
            ShapeId::Digitized1 => &digitized::DIGITIZED_1,
            ShapeId::Digitized1Raw => &digitized::DIGITIZED_1_RAW,
            ShapeId::Digitized1Sharp => &digitized::DIGITIZED_1_SHARP,
            ShapeId::Digitized2 => &digitized::DIGITIZED_2,
            ShapeId::Digitized3 => &digitized::DIGITIZED_3,
            ShapeId::Digitized4 => &digitized::DIGITIZED_4,
            ShapeId::Digitized5 => &digitized::DIGITIZED_5,
            ShapeId::Digitized6 => &digitized::DIGITIZED_6,
            ShapeId::Digitized7 => &digitized::DIGITIZED_7,
            ShapeId::Digitized8 => &digitized::DIGITIZED_8,
            ShapeId::Digitized9 => &digitized::DIGITIZED_9,
            ShapeId::Digitized10 => &digitized::DIGITIZED_10,
            ShapeId::Digitized11 => &digitized::DIGITIZED_11,
            ShapeId::Digitized12 => &digitized::DIGITIZED_12,
            ShapeId::Digitized13 => &digitized::DIGITIZED_13,
            ShapeId::Digitized14 => &digitized::DIGITIZED_14,
            ShapeId::Digitized15 => &digitized::DIGITIZED_15,
            ShapeId::Digitized16 => &digitized::DIGITIZED_16,
            _ => return None,
        };
        Some(table)
    }

    /// Nominal width-to-height ratio of the style.
    pub fn width_ratio(self) -> f64 {
        self.info().width_ratio
    }

    /// Display metadata.
    pub fn info(self) -> ShapeInfo {
        let (name, description, width_ratio) = match self {
            ShapeId::Rectangle => ("Rectangle", "Crisp lines with minimal rounding", 1.4),
            ShapeId::Square => ("Square", "Equal-sided square", 1.0),
            ShapeId::Wayfarer => ("Wayfarer", "Wide brow, narrower bottom", 1.35),
            ShapeId::Aviator => ("Aviator", "Teardrop, wider at the bottom", 1.3),
            ShapeId::Pilot => ("Pilot", "Large angular teardrop", 1.4),
            ShapeId::Clubmaster => ("Clubmaster", "Flat brow, rounded bottom", 1.3),
            ShapeId::CatEye => ("Cat Eye", "Upswept outer corners", 1.3),
            ShapeId::Navigator => ("Navigator", "Wide rectangle with soft curves", 1.5),
            ShapeId::CatEyeNarrow => ("Narrow Cat Eye", "Slim cat-eye frame", 1.2),
            ShapeId::Round => ("Round", "Perfect circle", 1.0),
            ShapeId::Oval => ("Oval", "Horizontal ellipse", 1.3),
            ShapeId::Pantos => ("Pantos", "Rounded bottom, flatter top", 1.1),
            ShapeId::Geometric => ("Geometric", "Flat-topped hexagon", 1.0),
            ShapeId::Butterfly => ("Butterfly", "Wide outer wings, narrow inner edge", 1.4),
            ShapeId::Hexagonal => ("Hexagonal", "Six-sided frame", 1.0),
            ShapeId::Octagonal => ("Octagonal", "Eight-sided frame", 1.0),
            ShapeId::Digitized1 => ("Real Shape 1", "Traced from a real frame", 1.0),
            ShapeId::Digitized1Raw => ("Real Shape 1 (Raw)", "Unsmoothed trace", 1.0),
            ShapeId::Digitized1Sharp => ("Real Shape 1 (Sharp)", "Trace with crisp corners", 1.0),
            ShapeId::Digitized2 => ("Real Shape 2", "Second traced frame", 1.0),
            ShapeId::Digitized3 => ("Real Shape 3", "Third traced frame", 1.0),
            ShapeId::Digitized4 => ("Real Shape 4", "Fourth traced frame", 1.0),
            ShapeId::Digitized5 => ("Real Shape 5", "Fifth traced frame", 1.0),
            ShapeId::Digitized6 => ("Real Shape 6", "Sixth traced frame", 1.0),
            ShapeId::Digitized7 => ("Real Shape 7", "Seventh traced frame", 1.0),
            ShapeId::Digitized8 => ("Real Shape 8", "Eighth traced frame", 1.0),
            ShapeId::Digitized9 => ("Real Shape 9", "Ninth traced frame", 1.0),
            ShapeId::Digitized10 => ("Real Shape 10", "Tenth traced frame", 1.0),
            ShapeId::Digitized11 => ("Real Shape 11", "Eleventh traced frame", 1.0),
            ShapeId::Digitized12 => ("Real Shape 12", "Twelfth traced frame", 1.0),
            ShapeId::Digitized13 => ("Real Shape 13", "Thirteenth traced frame", 1.0),
            ShapeId::Digitized14 => ("Real Shape 14", "Fourteenth traced frame", 1.0),
            ShapeId::Digitized15 => ("Real Shape 15", "Fifteenth traced frame", 1.0),
            ShapeId::Digitized16 => ("Real Shape 16", "Sixteenth traced frame", 1.0),
        };
        ShapeInfo {
            id: self,
            key: self.key(),
            name,
            description,
            width_ratio,
        }
    }

    /// Generates the normalized outline for this style.
    ///
    /// `num_points` is raised to the minimum ring size when smaller, and
    /// ignored for digitized styles, which always carry their table size.
    pub fn outline(self, num_points: usize) -> ShapeOutline {
        ShapeOutline::from_generated(self.raw_points(num_points.max(MIN_OUTLINE_POINTS)))
    }

    fn raw_points(self, n: usize) -> Vec<DVec2> {
        if let Some(table) = self.digitized_table() {
            return digitized::to_points(table);
        }
        match self {
            ShapeId::Rectangle => parametric::rectangle(n),
            ShapeId::Square => parametric::square(n),
            ShapeId::Wayfarer => parametric::wayfarer(n),
            ShapeId::Aviator => parametric::aviator(n),
            ShapeId::Pilot => parametric::pilot(n),
            ShapeId::Clubmaster => parametric::clubmaster(n),
            ShapeId::CatEye => parametric::cat_eye(n),
            ShapeId::Navigator => parametric::navigator(n),
            ShapeId::CatEyeNarrow => parametric::cat_eye_narrow(n),
            ShapeId::Round => parametric::round(n),
            ShapeId::Oval => parametric::oval(n),
            ShapeId::Pantos => parametric::pantos(n),
            ShapeId::Geometric => parametric::geometric(n),
            ShapeId::Butterfly => parametric::butterfly(n),
            ShapeId::Hexagonal => parametric::hexagonal(n),
            ShapeId::Octagonal => parametric::octagonal(n),
            // Digitized styles return above
            _ => parametric::rectangle(n),
        }
    }
}

impl FromStr for ShapeId {
    type Err = OutlineError;

    fn from_str(s: &str) -> OutlineResult<Self> {
        ShapeId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| OutlineError::UnknownShape(s.to_string()))
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<ShapeId> for String {
    fn from(id: ShapeId) -> Self {
        id.key().to_string()
    }
}

impl TryFrom<String> for ShapeId {
    type Error = OutlineError;

    fn try_from(value: String) -> OutlineResult<Self> {
        value.parse()
    }
}

/// Metadata for every style, in catalog order.
pub fn catalog() -> Vec<ShapeInfo> {
    ShapeId::ALL.iter().map(|id| id.info()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique_and_round_trip() {
        let keys: HashSet<_> = ShapeId::ALL.iter().map(|id| id.key()).collect();
        assert_eq!(keys.len(), ShapeId::ALL.len());
        for id in ShapeId::ALL {
            assert_eq!(id.key().parse::<ShapeId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_key_strict_and_lenient() {
        assert_eq!(
            "hexagram".parse::<ShapeId>(),
            Err(OutlineError::UnknownShape("hexagram".to_string()))
        );
        assert_eq!(ShapeId::resolve("hexagram"), ShapeId::Rectangle);
        assert_eq!(ShapeId::resolve(""), ShapeId::Rectangle);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert!("CatEye".parse::<ShapeId>().is_err());
    }

    #[test]
    fn test_width_ratios() {
        assert_eq!(ShapeId::Rectangle.width_ratio(), 1.4);
        assert_eq!(ShapeId::Navigator.width_ratio(), 1.5);
        assert_eq!(ShapeId::Wayfarer.width_ratio(), 1.35);
        for id in ShapeId::ALL.into_iter().filter(|id| id.is_digitized()) {
            assert_eq!(id.width_ratio(), 1.0);
        }
    }

    #[test]
    fn test_digitized_ignores_point_count() {
        for id in ShapeId::ALL.into_iter().filter(|id| id.is_digitized()) {
            assert_eq!(id.outline(7).len(), DIGITIZED_POINTS, "{id}");
        }
        assert_eq!(ShapeId::Oval.outline(7).len(), 7);
    }

    #[test]
    fn test_full_traced_catalog() {
        let digitized: Vec<_> = ShapeId::ALL.into_iter().filter(|id| id.is_digitized()).collect();
        assert_eq!(digitized.len(), 18);
        for k in 1..=16 {
            let key = format!("realShape{k}");
            let id: ShapeId = key.parse().unwrap();
            assert!(id.is_digitized());
            assert_eq!(id.info().name, format!("Real Shape {k}"));
        }
        assert_eq!(ShapeId::resolve("realShape16"), ShapeId::Digitized16);
        assert!(ShapeId::Oval.digitized_table().is_none());
    }

    #[test]
    fn test_small_point_count_is_raised() {
        assert_eq!(ShapeId::Round.outline(0).len(), MIN_OUTLINE_POINTS);
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&ShapeId::CatEyeNarrow).unwrap();
        assert_eq!(json, "\"catEyeNarrow\"");
        let back: ShapeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ShapeId::CatEyeNarrow);
    }
}

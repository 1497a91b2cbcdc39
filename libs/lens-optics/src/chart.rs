//! # Reference Chart Model
//!
//! Thickness interpolated from a manufacturer's published chart.
//!
//! The chart lists center/edge thickness for four indices at seven powers.
//! Minus rows are measured at a 65 mm reference diameter, plus rows at 60 mm.
//! Between tabulated powers the model interpolates linearly; outside the
//! table it holds the nearest row. The thickness differential is then scaled
//! by `(diameter / reference)²`.

use crate::thickness::{ThicknessModel, ThicknessResult};

/// One chart row: power (D), center and edge thickness (mm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub power: f64,
    pub center: f64,
    pub edge: f64,
}

const fn row(power: f64, center: f64, edge: f64) -> ChartPoint {
    ChartPoint {
        power,
        center,
        edge,
    }
}

/// Reference diameter (mm) for minus and plano rows.
pub const MINUS_REFERENCE_DIAMETER_MM: f64 = 65.0;

/// Reference diameter (mm) for plus rows.
pub const PLUS_REFERENCE_DIAMETER_MM: f64 = 60.0;

/// Chart rows per index, highest plus power first.
pub const REFERENCE_CHART: [(f64, [ChartPoint; 7]); 4] = [
    (
        1.50,
        [
            row(4.0, 4.5, 0.8),
            row(2.0, 2.7, 0.8),
            row(0.0, 2.0, 2.0),
            row(-2.0, 2.0, 4.9),
            row(-4.0, 2.0, 8.0),
            row(-6.0, 2.0, 11.1),
            row(-8.0, 2.0, 12.2),
        ],
    ),
    (
        1.60,
        [
            row(4.0, 3.7, 0.8),
            row(2.0, 2.3, 0.8),
            row(0.0, 1.5, 1.5),
            row(-2.0, 1.0, 2.7),
            row(-4.0, 1.0, 4.4),
            row(-6.0, 1.0, 6.3),
            row(-8.0, 1.0, 8.3),
        ],
    ),
    (
        1.67,
        [
            row(4.0, 3.2, 0.8),
            row(2.0, 2.0, 0.8),
            row(0.0, 1.2, 1.2),
            row(-2.0, 1.0, 2.5),
            row(-4.0, 1.0, 4.0),
            row(-6.0, 1.0, 5.7),
            row(-8.0, 1.0, 7.5),
        ],
    ),
    (
        1.74,
        [
            row(4.0, 3.0, 0.8),
            row(2.0, 1.9, 0.8),
            row(0.0, 1.0, 1.0),
            row(-2.0, 1.0, 2.3),
            row(-4.0, 1.0, 3.8),
            row(-6.0, 1.0, 5.4),
            row(-8.0, 1.0, 6.5),
        ],
    ),
];

/// Chart-interpolation thickness model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferenceChartModel;

impl ReferenceChartModel {
    /// Rows for the tabulated index nearest to `refractive_index`.
    pub fn rows_for(refractive_index: f64) -> &'static [ChartPoint; 7] {
        let mut best = &REFERENCE_CHART[0];
        for entry in &REFERENCE_CHART[1..] {
            if (entry.0 - refractive_index).abs() < (best.0 - refractive_index).abs() {
                best = entry;
            }
        }
        &best.1
    }

    /// Chart value at the reference diameter, interpolated between rows.
    pub fn interpolate(rows: &[ChartPoint], power: f64) -> ThicknessResult {
        let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
            return ThicknessResult::default();
        };
        if power >= first.power {
            return ThicknessResult::new(first.center, first.edge);
        }
        if power <= last.power {
            return ThicknessResult::new(last.center, last.edge);
        }
        for pair in rows.windows(2) {
            let (upper, lower) = (pair[0], pair[1]);
            if power <= upper.power && power >= lower.power {
                let t = (upper.power - power) / (upper.power - lower.power);
                return ThicknessResult::new(
                    upper.center + (lower.center - upper.center) * t,
                    upper.edge + (lower.edge - upper.edge) * t,
                );
            }
        }
        ThicknessResult::new(last.center, last.edge)
    }
}

impl ThicknessModel for ReferenceChartModel {
    fn estimate(
        &self,
        prescription: f64,
        refractive_index: f64,
        diameter_mm: f64,
    ) -> ThicknessResult {
        let base = Self::interpolate(Self::rows_for(refractive_index), prescription);
        let reference = if prescription > 0.0 {
            PLUS_REFERENCE_DIAMETER_MM
        } else {
            MINUS_REFERENCE_DIAMETER_MM
        };
        let factor = (diameter_mm / reference).powi(2);

        if prescription < 0.0 {
            ThicknessResult::new(base.center, base.center + (base.edge - base.center) * factor)
        } else {
            ThicknessResult::new(base.edge + (base.center - base.edge) * factor, base.edge)
        }
    }
}

//! # Materials
//!
//! Curated lens materials, the refractive-index bands used by the divisor
//! model, and standard frame sizes.

use config::constants::{
    HIGH_INDEX_CORRECTION_POWER, HIGH_INDEX_LIMIT, LOW_INDEX_CORRECTION_POWER, LOW_INDEX_LIMIT,
    MID_INDEX_LIMIT,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// MATERIAL CATALOG
// =============================================================================

/// A lens material from the curated catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Material {
    Standard150,
    #[default]
    Mid160,
    Thin167,
    UltraThin174,
}

impl Material {
    /// Every material, lowest index first.
    pub const ALL: [Material; 4] = [
        Material::Standard150,
        Material::Mid160,
        Material::Thin167,
        Material::UltraThin174,
    ];

    /// Refractive index of the material.
    pub fn index(self) -> f64 {
        match self {
            Material::Standard150 => 1.50,
            Material::Mid160 => 1.60,
            Material::Thin167 => 1.67,
            Material::UltraThin174 => 1.74,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Material::Standard150 => "1.50 Standard",
            Material::Mid160 => "1.60 Mid-Thin",
            Material::Thin167 => "1.67 Thin",
            Material::UltraThin174 => "1.74 Ultra-Thin",
        }
    }

    /// Catalog material closest to `index`. Ties go to the lower index.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lens_optics::Material;
    ///
    /// assert_eq!(Material::nearest(1.59), Material::Mid160);
    /// assert_eq!(Material::nearest(2.0), Material::UltraThin174);
    /// ```
    pub fn nearest(index: f64) -> Material {
        let mut best = Material::Standard150;
        for material in Material::ALL {
            if (material.index() - index).abs() < (best.index() - index).abs() {
                best = material;
            }
        }
        best
    }

    pub fn band(self) -> IndexBand {
        IndexBand::for_index(self.index())
    }
}

// =============================================================================
// INDEX BANDS
// =============================================================================

/// Refractive-index band of the empirical divisor model.
///
/// | Band | Index range | Divisor | Floor | Correction |
/// |---|---|---|---|---|
/// | `Low` | n <= 1.53 | 5700 | 2.0 mm | +900 at P >= 8 |
/// | `Mid` | 1.53 < n <= 1.63 | 8000 | 1.0 mm | -300 at P >= 6 |
/// | `High` | 1.63 < n <= 1.70 | 8200 | 1.0 mm | -300 at P >= 6 |
/// | `UltraHigh` | n > 1.70 | 8300 | 1.0 mm | -300 at P >= 6 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexBand {
    Low,
    Mid,
    High,
    UltraHigh,
}

impl IndexBand {
    pub fn for_index(refractive_index: f64) -> Self {
        if refractive_index <= LOW_INDEX_LIMIT {
            IndexBand::Low
        } else if refractive_index <= MID_INDEX_LIMIT {
            IndexBand::Mid
        } else if refractive_index <= HIGH_INDEX_LIMIT {
            IndexBand::High
        } else {
            IndexBand::UltraHigh
        }
    }

    /// Divisor before the prescription correction.
    pub fn base_divisor(self) -> f64 {
        match self {
            IndexBand::Low => 5700.0,
            IndexBand::Mid => 8000.0,
            IndexBand::High => 8200.0,
            IndexBand::UltraHigh => 8300.0,
        }
    }

    /// Minimum thickness in millimeters.
    pub fn min_thickness_mm(self) -> f64 {
        match self {
            IndexBand::Low => 2.0,
            _ => 1.0,
        }
    }

    /// Prescription magnitude at which the divisor correction kicks in.
    pub fn correction_power(self) -> f64 {
        match self {
            IndexBand::Low => LOW_INDEX_CORRECTION_POWER,
            _ => HIGH_INDEX_CORRECTION_POWER,
        }
    }

    /// Divisor for a prescription of magnitude `power` (diopters).
    ///
    /// # Example
    ///
    /// ```rust
    /// use lens_optics::IndexBand;
    ///
    /// assert_eq!(IndexBand::Low.divisor_for(-8.0), 6600.0);
    /// assert_eq!(IndexBand::High.divisor_for(6.0), 7900.0);
    /// assert_eq!(IndexBand::High.divisor_for(5.75), 8200.0);
    /// ```
    pub fn divisor_for(self, power: f64) -> f64 {
        let magnitude = power.abs();
        let base = self.base_divisor();
        if magnitude < self.correction_power() {
            return base;
        }
        match self {
            IndexBand::Low => base + 900.0,
            _ => base - 300.0,
        }
    }
}

// =============================================================================
// FRAME SIZES
// =============================================================================

/// Standard frame diameter presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrameSize {
    Xs,
    Small,
    MediumSmall,
    #[default]
    Medium,
    MediumLarge,
    Large,
}

impl FrameSize {
    pub const ALL: [FrameSize; 6] = [
        FrameSize::Xs,
        FrameSize::Small,
        FrameSize::MediumSmall,
        FrameSize::Medium,
        FrameSize::MediumLarge,
        FrameSize::Large,
    ];

    /// Frame diameter in millimeters.
    pub fn diameter_mm(self) -> f64 {
        match self {
            FrameSize::Xs => 50.0,
            FrameSize::Small => 55.0,
            FrameSize::MediumSmall => 60.0,
            FrameSize::Medium => 65.0,
            FrameSize::MediumLarge => 70.0,
            FrameSize::Large => 75.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FrameSize::Xs => "XS",
            FrameSize::Small => "S",
            FrameSize::MediumSmall => "M-S",
            FrameSize::Medium => "M",
            FrameSize::MediumLarge => "M-L",
            FrameSize::Large => "L",
        }
    }
}

//! # Prescription
//!
//! Per-eye prescription values.
//!
//! Only the spherical power takes part in thickness and curvature math.
//! Cylinder and axis are carried so a full prescription survives a round trip
//! through the host, but nothing here reads them.

use serde::{Deserialize, Serialize};

/// A spectacle prescription for one eye.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Prescription {
    /// Spherical power in diopters. Negative is minus (myopic).
    pub sphere: f64,
    /// Cylinder power in diopters
    #[serde(default)]
    pub cylinder: f64,
    /// Cylinder axis in degrees (0-180)
    #[serde(default)]
    pub axis: f64,
}

impl Prescription {
    /// Creates a purely spherical prescription.
    pub fn sphere(sphere: f64) -> Self {
        Self {
            sphere,
            ..Self::default()
        }
    }

    /// Power used by the thickness and surface models.
    #[inline]
    pub fn spherical_power(&self) -> f64 {
        self.sphere
    }

    /// Minus, plus or plano, from the sign of the spherical power.
    pub fn kind(&self) -> LensKind {
        LensKind::of(self.sphere)
    }
}

impl From<f64> for Prescription {
    fn from(sphere: f64) -> Self {
        Self::sphere(sphere)
    }
}

/// Sign class of a spherical power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LensKind {
    /// Diverging lens: thin center, thick edge
    Minus,
    /// Converging lens: thick center, thin edge
    Plus,
    /// No power: uniform thickness
    Plano,
}

impl LensKind {
    /// Classifies a spherical power.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lens_optics::LensKind;
    ///
    /// assert_eq!(LensKind::of(-2.5), LensKind::Minus);
    /// assert_eq!(LensKind::of(0.0), LensKind::Plano);
    /// ```
    pub fn of(power: f64) -> Self {
        if power < 0.0 {
            LensKind::Minus
        } else if power > 0.0 {
            LensKind::Plus
        } else {
            LensKind::Plano
        }
    }
}

/// Which eye a lens belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Eye {
    Right,
    Left,
}

impl Eye {
    pub const BOTH: [Eye; 2] = [Eye::Right, Eye::Left];
}

/// A value for each eye.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EyePair<T> {
    pub right: T,
    pub left: T,
}

impl<T> EyePair<T> {
    pub fn new(right: T, left: T) -> Self {
        Self { right, left }
    }

    /// Uses the same value for both eyes.
    pub fn both(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            right: value.clone(),
            left: value,
        }
    }

    pub fn get(&self, eye: Eye) -> &T {
        match eye {
            Eye::Right => &self.right,
            Eye::Left => &self.left,
        }
    }

    pub fn get_mut(&mut self, eye: Eye) -> &mut T {
        match eye {
            Eye::Right => &mut self.right,
            Eye::Left => &mut self.left,
        }
    }

    /// Applies `f` to both values.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> EyePair<U> {
        EyePair {
            right: f(self.right),
            left: f(self.left),
        }
    }

    /// Applies a fallible `f` to both values, right eye first.
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<EyePair<U>, E> {
        Ok(EyePair {
            right: f(self.right)?,
            left: f(self.left)?,
        })
    }

    pub fn as_refs(&self) -> EyePair<&T> {
        EyePair {
            right: &self.right,
            left: &self.left,
        }
    }
}

//! # Unit Types
//!
//! Type-safe wrappers for the metric units used on a covering take-off, plus
//! the heuristics that decide which unit a loosely typed form value was
//! entered in.
//!
//! ## Conventions
//!
//! - Room geometry: meters (m), square meters (m²)
//! - Piece geometry: centimeters (cm) for sides, millimeters (mm) for
//!   thickness and joint width
//! - Bed and layer volumes: cubic meters (m³)
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::units::{Centimeters, Meters, Millimeters};
//!
//! let side = Centimeters(45.0);
//! let side_m: Meters = side.into();
//! assert_eq!(side_m.0, 0.45);
//!
//! let side_mm: Millimeters = side.into();
//! assert_eq!(side_mm.0, 450.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Centimeters> for Millimeters {
    fn from(cm: Centimeters) -> Self {
        Millimeters(cm.0 * 10.0)
    }
}

impl From<Millimeters> for Centimeters {
    fn from(mm: Millimeters) -> Self {
        Centimeters(mm.0 / 10.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Area and Volume Units
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

impl SquareMeters {
    /// Area of a rectangle given both sides in centimeters
    pub fn from_sides_cm(length: Centimeters, width: Centimeters) -> Self {
        SquareMeters(Meters::from(length).0 * Meters::from(width).0)
    }

    /// Volume of a layer of this area with the given thickness
    pub fn layer(self, thickness: Centimeters) -> CubicMeters {
        CubicMeters(self.0 * Meters::from(thickness).0)
    }
}

// ============================================================================
// Unit Heuristics
// ============================================================================

/// Largest value still read as meters by the heuristics below.
///
/// Commercial profiles and stone slabs are never longer than 3 m, and no
/// piece is shorter than 3 cm, so the two readings cannot overlap.
pub const METERS_CUTOFF: f64 = 3.0;

/// Largest value still read as centimeters for a piece side.
pub const CENTIMETERS_CUTOFF: f64 = 200.0;

/// Read a commercial length (e.g. a ready-made baseboard piece) as meters.
///
/// Values up to [`METERS_CUTOFF`] are taken as meters, anything larger as
/// centimeters.
///
/// ```rust
/// use takeoff_core::units::commercial_length;
///
/// assert_eq!(commercial_length(1.2).0, 1.2);
/// assert_eq!(commercial_length(120.0).0, 1.2);
/// ```
pub fn commercial_length(value: f64) -> Meters {
    if value <= METERS_CUTOFF {
        Meters(value)
    } else {
        Meters::from(Centimeters(value))
    }
}

/// Read a piece side that may have been typed in m, cm or mm.
///
/// Up to [`METERS_CUTOFF`] → meters, up to [`CENTIMETERS_CUTOFF`] →
/// centimeters, above that → millimeters.
///
/// ```rust
/// use takeoff_core::units::piece_side;
///
/// assert_eq!(piece_side(0.6).0, 60.0);
/// assert_eq!(piece_side(60.0).0, 60.0);
/// assert_eq!(piece_side(600.0).0, 60.0);
/// ```
pub fn piece_side(value: f64) -> Centimeters {
    if value <= METERS_CUTOFF {
        Centimeters::from(Meters(value))
    } else if value <= CENTIMETERS_CUTOFF {
        Centimeters(value)
    } else {
        Centimeters::from(Millimeters(value))
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(CubicMeters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_to_m() {
        let m: Meters = Centimeters(45.0).into();
        assert_eq!(m.0, 0.45);
    }

    #[test]
    fn test_piece_area() {
        let area = SquareMeters::from_sides_cm(Centimeters(45.0), Centimeters(45.0));
        assert!((area.0 - 0.2025).abs() < 1e-12);
    }

    #[test]
    fn test_layer_volume() {
        let vol = SquareMeters(50.0).layer(Centimeters(14.0));
        assert!((vol.0 - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_commercial_length_heuristic() {
        assert_eq!(commercial_length(3.0).0, 3.0);
        assert!((commercial_length(250.0).0 - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_piece_side_heuristic() {
        assert!((piece_side(1.2).0 - 120.0).abs() < 1e-9);
        assert_eq!(piece_side(90.0).0, 90.0);
        assert_eq!(piece_side(1200.0).0, 120.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = SquareMeters(10.0);
        let b = SquareMeters(2.5);
        assert_eq!((a - b).0, 7.5);
        assert!(((a * 1.1).value() - 11.0).abs() < 1e-9);
    }
}

//! # Area Calculation
//!
//! Net coverable area from one of three input modes, and the room perimeter
//! the baseboard step starts from.
//!
//! | Mode            | Used when                                          | Gross area            |
//! |-----------------|----------------------------------------------------|-----------------------|
//! | Direct area     | `areaInformadaM2` > 0                              | typed value           |
//! | Wall footprint  | wall tile, mosaic, marble/granite on walls         | length × height × walls |
//! | Floor footprint | everything else                                    | length × width        |
//!
//! The opening (`aberturaM2`) is subtracted from the gross area in every mode.
//! Functions here return `None` instead of failing when the record cannot
//! produce a positive area.

use crate::inputs::{positive, Inputs};

/// Wall count accepted by the wall-footprint mode
pub const WALL_COUNT_RANGE: std::ops::RangeInclusive<u32> = 1..=20;

/// Gross area before the opening is subtracted.
pub fn gross_area_m2(inputs: &Inputs) -> Option<f64> {
    if let Some(area) = positive(inputs.area_override_m2) {
        return Some(area);
    }
    let length = positive(inputs.length_m)?;
    if inputs.is_wall_mode() {
        let height = positive(inputs.height_m)?;
        let walls = inputs.wall_count.filter(|n| WALL_COUNT_RANGE.contains(n))?;
        Some(length * height * f64::from(walls))
    } else {
        let width = positive(inputs.width_m)?;
        Some(length * width)
    }
}

/// Net coverable area (m²), or `None` when the record is incomplete or the
/// opening swallows the whole area.
///
/// ```rust
/// use takeoff_core::calculations::area::area_base_m2;
/// use takeoff_core::inputs::{CoveringType, Environment, Inputs};
///
/// let mut inputs = Inputs::new(CoveringType::WallTile, Environment::Wet);
/// inputs.length_m = Some(2.0);
/// inputs.height_m = Some(2.5);
/// inputs.wall_count = Some(4);
/// inputs.opening_m2 = Some(1.6);
/// assert_eq!(area_base_m2(&inputs), Some(18.4));
/// ```
pub fn area_base_m2(inputs: &Inputs) -> Option<f64> {
    let gross = gross_area_m2(inputs)?;
    subtract_opening(gross, inputs.opening_m2)
}

fn subtract_opening(gross: f64, opening: Option<f64>) -> Option<f64> {
    let opening = match opening {
        None => 0.0,
        Some(value) if value.is_finite() && value >= 0.0 => value,
        Some(_) => return None,
    };
    if opening > gross {
        return None;
    }
    let net = gross - opening;
    (net > 0.0).then_some(net)
}

/// Perimeter from geometry only: `2×(l+w)` when both sides are known,
/// otherwise `4×√area` assuming a square footprint.
pub fn automatic_perimeter_m(inputs: &Inputs) -> Option<f64> {
    if let (Some(length), Some(width)) = (positive(inputs.length_m), positive(inputs.width_m)) {
        return Some(2.0 * (length + width));
    }
    positive(inputs.area_override_m2).map(|area| 4.0 * area.sqrt())
}

/// Best available perimeter: manual value first, then geometry.
pub fn possible_perimeter_m(inputs: &Inputs) -> Option<f64> {
    positive(inputs.baseboard_perimeter_manual_m).or_else(|| automatic_perimeter_m(inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{Application, CoveringType, Environment};

    fn room(length: f64, width: f64) -> Inputs {
        let mut inputs = Inputs::new(CoveringType::Floor, Environment::Dry);
        inputs.length_m = Some(length);
        inputs.width_m = Some(width);
        inputs
    }

    #[test]
    fn test_floor_footprint() {
        assert_eq!(area_base_m2(&room(3.0, 4.0)), Some(12.0));
    }

    #[test]
    fn test_override_takes_priority() {
        let mut inputs = room(3.0, 4.0);
        inputs.area_override_m2 = Some(20.0);
        inputs.opening_m2 = Some(2.0);
        assert_eq!(area_base_m2(&inputs), Some(18.0));
    }

    #[test]
    fn test_zero_override_falls_back_to_geometry() {
        let mut inputs = room(3.0, 4.0);
        inputs.area_override_m2 = Some(0.0);
        assert_eq!(area_base_m2(&inputs), Some(12.0));
    }

    #[test]
    fn test_opening_larger_than_area() {
        let mut inputs = room(3.0, 4.0);
        inputs.opening_m2 = Some(12.5);
        assert_eq!(area_base_m2(&inputs), None);
        inputs.opening_m2 = Some(12.0);
        assert_eq!(area_base_m2(&inputs), None);
        inputs.opening_m2 = Some(-1.0);
        assert_eq!(area_base_m2(&inputs), None);
    }

    #[test]
    fn test_wall_count_bounds() {
        let mut inputs = Inputs::new(CoveringType::WallTile, Environment::Wet);
        inputs.length_m = Some(2.0);
        inputs.height_m = Some(2.5);
        inputs.wall_count = Some(0);
        assert_eq!(area_base_m2(&inputs), None);
        inputs.wall_count = Some(21);
        assert_eq!(area_base_m2(&inputs), None);
        inputs.wall_count = Some(20);
        assert_eq!(area_base_m2(&inputs), Some(100.0));
    }

    #[test]
    fn test_marble_application_switches_mode() {
        let mut inputs = Inputs::new(CoveringType::Marble, Environment::Dry);
        inputs.length_m = Some(2.0);
        inputs.width_m = Some(3.0);
        inputs.height_m = Some(2.5);
        inputs.wall_count = Some(1);
        assert_eq!(area_base_m2(&inputs), Some(6.0));
        inputs.application = Some(Application::Wall);
        assert_eq!(area_base_m2(&inputs), Some(5.0));
    }

    #[test]
    fn test_perimeters() {
        assert_eq!(possible_perimeter_m(&room(3.0, 4.0)), Some(14.0));

        let mut inputs = Inputs::new(CoveringType::Floor, Environment::Dry);
        inputs.area_override_m2 = Some(16.0);
        assert_eq!(possible_perimeter_m(&inputs), Some(16.0));

        inputs.baseboard_perimeter_manual_m = Some(12.4);
        assert_eq!(possible_perimeter_m(&inputs), Some(12.4));
        assert_eq!(automatic_perimeter_m(&inputs), Some(16.0));

        assert_eq!(possible_perimeter_m(&Inputs::default()), None);
    }
}

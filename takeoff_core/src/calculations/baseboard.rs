//! # Baseboard Calculation
//!
//! Perimeter, area and purchase quantity of the baseboard strip. Two
//! perimeters are tracked:
//!
//! - the **display** perimeter, shown on the form while the user edits;
//! - the **purchase** perimeter, used for quantities. When only the total
//!   area is known the square-footprint estimate `4×√A` under-estimates long
//!   rooms, so it is scaled by a safety factor (1.25, or 1.50 for footprints
//!   at least twice as long as wide).
//!
//! Both return `None` when the covering has no baseboard step or the
//! baseboard is switched off.

use tracing::trace;

use crate::calculations::area::automatic_perimeter_m;
use crate::format::{ceil_units, trim_decimal};
use crate::inputs::{positive, BaseboardMaterial, Inputs};
use crate::result::{MaterialItem, Unit};
use crate::specs::covering::supports_baseboard;
use crate::specs::mortar::consumption_for_side;
use crate::units::{commercial_length, Centimeters, Meters};

/// Safety factor for square-footprint perimeter estimates
pub const SAFETY_FACTOR: f64 = 1.25;

/// Safety factor when the footprint is elongated
pub const ELONGATED_SAFETY_FACTOR: f64 = 1.50;

/// Aspect ratio from which a footprint counts as elongated
pub const ELONGATED_ASPECT_RATIO: f64 = 2.0;

/// True when the record asks for a baseboard and the covering supports one
pub fn is_active(inputs: &Inputs) -> bool {
    inputs.baseboard_enabled
        && inputs
            .covering
            .is_some_and(|c| supports_baseboard(c, inputs.application_or_default()))
}

/// Baseboard height in meters
pub fn height_m(inputs: &Inputs) -> Option<f64> {
    positive(inputs.baseboard_height_cm).map(|cm| Meters::from(Centimeters(cm)).0)
}

/// Material mode, defaulting to strips cut from the covering
pub fn material(inputs: &Inputs) -> BaseboardMaterial {
    inputs.baseboard_material.unwrap_or(BaseboardMaterial::SamePiece)
}

/// Ready-made piece length in meters (values above 3 are read as cm)
pub fn ready_piece_length_m(inputs: &Inputs) -> Option<f64> {
    positive(inputs.baseboard_piece_length_m).map(|v| commercial_length(v).0)
}

fn opening_m(inputs: &Inputs) -> f64 {
    positive(inputs.baseboard_opening_m).unwrap_or(0.0)
}

fn minus_opening(perimeter: f64, inputs: &Inputs) -> Option<f64> {
    let net = perimeter - opening_m(inputs);
    (net > 0.0).then_some(net)
}

fn manual_perimeter_m(inputs: &Inputs) -> Option<f64> {
    positive(inputs.baseboard_perimeter_manual_m)
}

/// Perimeter shown on the form.
pub fn display_perimeter_m(inputs: &Inputs) -> Option<f64> {
    if !is_active(inputs) {
        return None;
    }
    let perimeter = if inputs.baseboard_perimeter_auto {
        automatic_perimeter_m(inputs)?
    } else {
        manual_perimeter_m(inputs)?
    };
    minus_opening(perimeter, inputs)
}

/// Safety factor for the area-derived perimeter estimate.
///
/// The aspect ratio comes from the one known side and the area; with no side
/// known the footprint is taken as square.
pub fn safety_factor(inputs: &Inputs) -> f64 {
    let area = positive(inputs.area_override_m2);
    let side = positive(inputs.length_m).or_else(|| positive(inputs.width_m));
    let ratio = match (area, side) {
        (Some(area), Some(side)) => {
            let other = area / side;
            side.max(other) / side.min(other)
        }
        _ => 1.0,
    };
    if ratio >= ELONGATED_ASPECT_RATIO {
        ELONGATED_SAFETY_FACTOR
    } else {
        SAFETY_FACTOR
    }
}

/// Perimeter used for purchase quantities.
pub fn purchase_perimeter_m(inputs: &Inputs) -> Option<f64> {
    if !is_active(inputs) {
        return None;
    }
    let perimeter = if !inputs.baseboard_perimeter_auto {
        manual_perimeter_m(inputs)?
    } else if let (Some(length), Some(width)) = (positive(inputs.length_m), positive(inputs.width_m)) {
        2.0 * (length + width)
    } else {
        let area = positive(inputs.area_override_m2)?;
        4.0 * area.sqrt() * safety_factor(inputs)
    };
    minus_opening(perimeter, inputs)
}

/// Baseboard area for display (m²), same-piece mode only.
pub fn display_area_m2(inputs: &Inputs) -> Option<f64> {
    if material(inputs) != BaseboardMaterial::SamePiece {
        return None;
    }
    Some(display_perimeter_m(inputs)? * height_m(inputs)?)
}

/// Area to waterproof: the net area plus the same-piece baseboard band.
pub fn treated_area_m2(inputs: &Inputs, area_m2: f64) -> f64 {
    area_m2 + display_area_m2(inputs).unwrap_or(0.0)
}

/// Number of ready-made pieces to buy: `ceil(perimeter × (1+waste) / length)`,
/// at least one.
///
/// ```rust
/// use takeoff_core::calculations::baseboard::ready_piece_count;
/// use takeoff_core::inputs::{BaseboardMaterial, CoveringType, Environment, Inputs};
///
/// let mut inputs = Inputs::new(CoveringType::Floor, Environment::Dry);
/// inputs.baseboard_enabled = true;
/// inputs.baseboard_height_cm = Some(7.0);
/// inputs.baseboard_material = Some(BaseboardMaterial::ReadyPiece);
/// inputs.baseboard_piece_length_m = Some(1.2);
/// inputs.baseboard_perimeter_auto = false;
/// inputs.baseboard_perimeter_manual_m = Some(12.4);
/// assert_eq!(ready_piece_count(&inputs, 10.0), Some(12));
/// ```
pub fn ready_piece_count(inputs: &Inputs, waste_pct: f64) -> Option<u64> {
    let perimeter = purchase_perimeter_m(inputs)?;
    let length = ready_piece_length_m(inputs)?;
    Some(ceil_units(perimeter * (1.0 + waste_pct / 100.0) / length).max(1))
}

/// Adhesive mortar (kg) for gluing ready-made pieces; zero in any other mode.
pub fn ready_piece_mortar_kg(inputs: &Inputs, waste_pct: f64) -> f64 {
    if material(inputs) != BaseboardMaterial::ReadyPiece {
        return 0.0;
    }
    let (Some(count), Some(length), Some(height)) = (
        ready_piece_count(inputs, waste_pct),
        ready_piece_length_m(inputs),
        height_m(inputs),
    ) else {
        return 0.0;
    };
    let strip_area = count as f64 * length * height;
    strip_area * consumption_for_side(inputs.baseboard_height_cm)
}

/// Append the baseboard line item.
pub fn add_baseboard(inputs: &Inputs, waste_pct: f64, items: &mut Vec<MaterialItem>) {
    let (Some(perimeter), Some(height)) = (purchase_perimeter_m(inputs), height_m(inputs)) else {
        trace!("baseboard skipped: inactive or incomplete");
        return;
    };
    let height_cm = trim_decimal(height * 100.0, 1);
    let opening = positive(inputs.baseboard_opening_m)
        .map(|m| format!(" · {} m opening discounted", trim_decimal(m, 2)))
        .unwrap_or_default();

    match material(inputs) {
        BaseboardMaterial::SamePiece => {
            let quantity = perimeter * height * (1.0 + waste_pct / 100.0);
            items.push(
                MaterialItem::new("Baseboard (cut from covering pieces)", Unit::SquareMeters, quantity)
                    .with_note(format!(
                        "Same piece as covering · height {} cm · {} m of perimeter{}",
                        height_cm,
                        trim_decimal(perimeter, 2),
                        opening
                    )),
            );
        }
        BaseboardMaterial::ReadyPiece => {
            let (Some(count), Some(length)) = (ready_piece_count(inputs, waste_pct), ready_piece_length_m(inputs))
            else {
                trace!("ready-made baseboard skipped: no piece length");
                return;
            };
            let quantity = count as f64 * length * height;
            items.push(
                MaterialItem::new("Baseboard (ready-made pieces)", Unit::SquareMeters, quantity).with_note(format!(
                    "Ready-made piece · height {} cm · {} pieces of {} m{}",
                    height_cm,
                    count,
                    trim_decimal(length, 2),
                    opening
                )),
            );
        }
    }
}

//! # Marble and Granite
//!
//! Polished slabs set either by double gluing (ACIII on substrate and piece
//! back) or on a semi-dry sand/cement bed plus ACIII. The bed is required
//! when any of these holds:
//!
//! | Condition                          | Limit                          |
//! |------------------------------------|--------------------------------|
//! | environment                        | WET or ALWAYS_WET              |
//! | piece thickness                    | ≥ 21 mm                        |
//! | unevenness of the substrate        | ≥ 1 cm                         |
//! | longest side                       | > 150 cm (DRY), > 120 cm (SEMI_WET) |
//!
//! Heavy wall pieces (> 30 kg) also get mechanical fixings.
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::calculations::marble_granite::should_use_sand_cement_bed;
//! use takeoff_core::inputs::{Application, CoveringType, Environment, Inputs};
//!
//! let mut inputs = Inputs::new(CoveringType::Marble, Environment::Dry);
//! inputs.application = Some(Application::Wall);
//! inputs.piece_length_cm = Some(60.0);
//! inputs.piece_width_cm = Some(30.0);
//! inputs.piece_thickness_mm = Some(20.0);
//! assert!(!should_use_sand_cement_bed(&inputs));
//!
//! inputs.piece_thickness_mm = Some(25.0);
//! assert!(should_use_sand_cement_bed(&inputs));
//! ```

use tracing::debug;

use crate::calculations::baseboard::{self, add_baseboard};
use crate::calculations::materials::{
    add_adhesive_mortar, add_grout, add_sand_cement, add_spacers_and_wedges, add_waterproofing, covering_note,
    pieces_for, size_label, waste_factor, BedMix,
};
use crate::format::{ceil_units, round1, trim_decimal};
use crate::inputs::{Application, CoveringType, Environment, Inputs};
use crate::result::{MaterialItem, SettingMethod, Unit};
use crate::specs::covering::{effective_thickness_mm, longest_side_cm, piece_dims_cm};
use crate::units::{Centimeters, SquareMeters};

/// Semi-dry bed under marble and granite
pub const MARBLE_BED_MIX: BedMix = BedMix {
    ratio: "1:4",
    cement_kg_per_m3: 350.0,
    sand_m3_per_m3: 1.0,
};

/// Thinnest bed (cm)
pub const MIN_BED_CM: f64 = 3.0;

/// Thickness from which double gluing is not enough (mm)
pub const BED_THICKNESS_MM: f64 = 21.0;

/// Unevenness from which double gluing is not enough (cm)
pub const BED_UNEVENNESS_CM: f64 = 1.0;

/// Density of marble and granite (kg/m³)
pub const STONE_DENSITY_KG_M3: f64 = 2700.0;

/// Wall pieces heavier than this get mechanical fixings (kg)
pub const FIXING_WEIGHT_KG: f64 = 30.0;

/// Mechanical fixings per m² of purchased area
pub const FIXINGS_PER_M2: f64 = 4.0;

/// Longest side double gluing can hold, per environment (cm)
fn max_side_for_gluing_cm(environment: Environment) -> Option<f64> {
    match environment {
        Environment::Dry => Some(150.0),
        Environment::SemiWet => Some(120.0),
        Environment::Wet | Environment::AlwaysWet => None,
    }
}

/// Whether the pieces need a sand/cement bed instead of double gluing.
pub fn should_use_sand_cement_bed(inputs: &Inputs) -> bool {
    let environment = inputs.environment.unwrap_or(Environment::Dry);
    let Some(max_side) = max_side_for_gluing_cm(environment) else {
        return true;
    };
    effective_thickness_mm(inputs).is_some_and(|t| t >= BED_THICKNESS_MM)
        || inputs.unevenness_or_zero() >= BED_UNEVENNESS_CM
        || longest_side_cm(inputs).is_some_and(|side| side > max_side)
}

/// Bed thickness in cm
pub fn bed_thickness_cm(inputs: &Inputs) -> f64 {
    round1(MIN_BED_CM.max(inputs.unevenness_or_zero() + 0.5))
}

/// Weight of one piece in kg
pub fn piece_weight_kg(inputs: &Inputs) -> Option<f64> {
    let (length, width) = piece_dims_cm(inputs)?;
    let thickness = effective_thickness_mm(inputs)?;
    Some(length / 100.0 * width / 100.0 * thickness / 1000.0 * STONE_DENSITY_KG_M3)
}

/// Append the marble/granite take-off and report how the pieces are set.
pub fn take_off(inputs: &Inputs, area_m2: f64, waste_pct: f64, items: &mut Vec<MaterialItem>) -> SettingMethod {
    let covering = inputs.covering.unwrap_or(CoveringType::Marble);
    let pieces = pieces_for(inputs, area_m2, waste_pct);
    let purchase_area = area_m2 * waste_factor(waste_pct);
    let name = match size_label(inputs) {
        Some(size) => format!("{} {}", covering.display_name(), size),
        None => covering.display_name().to_string(),
    };
    items.push(
        MaterialItem::new(name, Unit::SquareMeters, purchase_area).with_note(covering_note(inputs, waste_pct, pieces)),
    );

    let baseboard_kg = baseboard::ready_piece_mortar_kg(inputs, waste_pct);
    add_adhesive_mortar(inputs, area_m2, waste_pct, baseboard_kg, items);
    add_grout(inputs, area_m2, items);
    add_spacers_and_wedges(inputs, pieces, items);

    let method = if should_use_sand_cement_bed(inputs) {
        let bed_cm = bed_thickness_cm(inputs);
        let volume = SquareMeters(area_m2).layer(Centimeters(bed_cm)).value() * waste_factor(waste_pct);
        let note = format!("Semi-dry bed {} cm", trim_decimal(bed_cm, 1));
        add_sand_cement(MARBLE_BED_MIX, volume, &note, items);
        SettingMethod::SandCementBed
    } else {
        SettingMethod::DoubleGluing
    };
    debug!(?method, "marble/granite setting method");

    if inputs.application_or_default() == Application::Wall {
        if let Some(weight) = piece_weight_kg(inputs).filter(|w| *w > FIXING_WEIGHT_KG) {
            let fixings = ceil_units(purchase_area * FIXINGS_PER_M2);
            items.push(
                MaterialItem::new("Mechanical fixing (stainless steel)", Unit::Units, fixings as f64).with_note(
                    format!(
                        "Piece weight {} kg · {} per m²",
                        trim_decimal(weight, 1),
                        trim_decimal(FIXINGS_PER_M2, 0)
                    ),
                ),
            );
        }
    }

    add_baseboard(inputs, waste_pct, items);
    add_waterproofing(inputs, baseboard::treated_area_m2(inputs, area_m2), items);
    method
}

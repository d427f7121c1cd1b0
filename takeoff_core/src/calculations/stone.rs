//! # Natural Stone
//!
//! Irregular or sawn stone laid on a 1:3 sand/cement bed. The same mortar
//! fills the joints, so there is no grout or spacer line. Adhesive mortar
//! appears only to glue ready-made baseboard pieces.
//!
//! ```text
//! bed     = max(4.0, unevenness + 0.5) cm
//! joints  = area × (1 − (P / (P + J))²) × depth      P = 80 mm, fraction ≤ 0.35
//! mortar  = (bed volume + joint volume) × (1 + waste)
//! ```

use tracing::debug;

use crate::calculations::baseboard::{self, add_baseboard};
use crate::calculations::materials::{
    add_adhesive_mortar, add_sand_cement, add_waterproofing, covering_note, pieces_for, size_label, waste_factor, BedMix,
};
use crate::format::{round1, trim_decimal};
use crate::inputs::Inputs;
use crate::result::{MaterialItem, Unit};
use crate::specs::covering::{effective_joint_mm, effective_thickness_mm};
use crate::units::{Centimeters, SquareMeters};

/// Bed and joint mortar for stone
pub const STONE_BED_MIX: BedMix = BedMix {
    ratio: "1:3",
    cement_kg_per_m3: 430.0,
    sand_m3_per_m3: 0.85,
};

/// Thinnest bed laid under stone (cm)
pub const MIN_BED_CM: f64 = 4.0;

/// Typical stone pitch used for the joint coverage estimate (mm)
pub const JOINT_PITCH_MM: f64 = 80.0;

/// Narrowest joint considered (mm)
pub const MIN_JOINT_MM: f64 = 0.5;

/// Upper bound of the joint coverage fraction
pub const MAX_JOINT_FRACTION: f64 = 0.35;

/// Bed thickness in cm, one decimal
pub fn bed_thickness_cm(inputs: &Inputs) -> f64 {
    round1(MIN_BED_CM.max(inputs.unevenness_or_zero() + 0.5))
}

/// Fraction of the surface taken by joints of width `joint_mm`.
///
/// ```rust
/// use takeoff_core::calculations::stone::joint_fraction;
///
/// // 1 - (80/90)²
/// assert!((joint_fraction(10.0) - 0.2099).abs() < 1e-4);
/// assert_eq!(joint_fraction(60.0), 0.35);
/// ```
pub fn joint_fraction(joint_mm: f64) -> f64 {
    let joint = joint_mm.max(MIN_JOINT_MM);
    let covered = JOINT_PITCH_MM / (JOINT_PITCH_MM + joint);
    (1.0 - covered * covered).clamp(0.0, MAX_JOINT_FRACTION)
}

/// Bed plus joint mortar volume (m³), waste included
pub fn mortar_volume_m3(inputs: &Inputs, area_m2: f64, waste_pct: f64) -> f64 {
    let bed = SquareMeters(area_m2).layer(Centimeters(bed_thickness_cm(inputs))).value();
    let joints = match (effective_joint_mm(inputs), effective_thickness_mm(inputs)) {
        (Some(joint), Some(depth)) => area_m2 * joint_fraction(joint) * depth / 1000.0,
        _ => 0.0,
    };
    (bed + joints) * waste_factor(waste_pct)
}

/// Append the stone take-off.
pub fn take_off(inputs: &Inputs, area_m2: f64, waste_pct: f64, items: &mut Vec<MaterialItem>) {
    let pieces = pieces_for(inputs, area_m2, waste_pct);
    let name = match size_label(inputs) {
        Some(size) => format!("Natural stone {}", size),
        None => "Natural stone".to_string(),
    };
    items.push(
        MaterialItem::new(name, Unit::SquareMeters, area_m2 * waste_factor(waste_pct))
            .with_note(covering_note(inputs, waste_pct, pieces)),
    );

    let bed_cm = bed_thickness_cm(inputs);
    let volume = mortar_volume_m3(inputs, area_m2, waste_pct);
    debug!(bed_cm, volume, "stone bed");
    let mut note = format!("Bed {} cm", trim_decimal(bed_cm, 1));
    if let Some(joint) = effective_joint_mm(inputs) {
        note.push_str(&format!(" + joints {} mm", trim_decimal(joint, 1)));
    }
    add_sand_cement(STONE_BED_MIX, volume, &note, items);

    let baseboard_kg = baseboard::ready_piece_mortar_kg(inputs, waste_pct);
    if baseboard_kg > 0.0 {
        add_adhesive_mortar(inputs, 0.0, waste_pct, baseboard_kg, items);
    }
    add_baseboard(inputs, waste_pct, items);
    add_waterproofing(inputs, baseboard::treated_area_m2(inputs, area_m2), items);
}

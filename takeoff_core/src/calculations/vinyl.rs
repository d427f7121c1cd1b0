//! # Vinyl Floor
//!
//! Glued or self-adhesive vinyl planks and tiles. A same-piece baseboard is
//! a 10 cm vinyl band folded into the covering area; ready-made baseboards
//! are listed separately. Leveling compound goes on the net floor area only.

use tracing::{debug, trace};

use crate::calculations::baseboard::{self, add_baseboard};
use crate::calculations::materials::{covering_note, piece_count, piece_area_m2, size_label, waste_factor};
use crate::format::trim_decimal;
use crate::inputs::{BaseboardMaterial, Inputs, LevelingType};
use crate::result::{MaterialItem, Unit};

/// Height of the vinyl band used as baseboard (m)
pub const BASEBOARD_BAND_M: f64 = 0.10;

/// Adhesive coverage (m² per kg)
pub const ADHESIVE_M2_PER_KG: f64 = 3.0;

/// Coats of leveling compound accepted
pub const LEVELING_COATS: std::ops::RangeInclusive<u32> = 1..=4;

/// Leveling compound coverage per coat (m² per kg)
pub fn leveling_m2_per_kg(kind: LevelingType) -> f64 {
    match kind {
        LevelingType::Thick => 1.0,
        LevelingType::Thin => 2.5,
    }
}

/// Area of the vinyl baseboard band (m²), zero unless a same-piece
/// baseboard is active.
pub fn baseboard_band_m2(inputs: &Inputs) -> f64 {
    if baseboard::material(inputs) != BaseboardMaterial::SamePiece {
        return 0.0;
    }
    baseboard::purchase_perimeter_m(inputs)
        .map(|perimeter| perimeter * BASEBOARD_BAND_M)
        .unwrap_or(0.0)
}

/// Baseboard area reported for vinyl: the band folded into the covering.
pub fn baseboard_area_m2(inputs: &Inputs) -> Option<f64> {
    Some(baseboard_band_m2(inputs)).filter(|band| *band > 0.0)
}

/// Append the vinyl take-off.
pub fn take_off(inputs: &Inputs, area_m2: f64, waste_pct: f64, items: &mut Vec<MaterialItem>) {
    let band = baseboard_band_m2(inputs);
    let treated = area_m2 + band;
    let total = treated * waste_factor(waste_pct);
    let pieces = piece_area_m2(inputs).map(|piece| piece_count(treated, piece, waste_pct, inputs.pieces_per_box));
    debug!(area_m2, band, total, ?pieces, "vinyl take-off");

    let name = match size_label(inputs) {
        Some(size) => format!("Vinyl floor {}", size),
        None => "Vinyl floor".to_string(),
    };
    let mut note = covering_note(inputs, waste_pct, pieces);
    if band > 0.0 {
        note.push_str(&format!(" · includes {} m² baseboard band", trim_decimal(band, 2)));
    }
    items.push(MaterialItem::new(name, Unit::SquareMeters, total).with_note(note));

    if !inputs.vinyl_self_adhesive {
        items.push(
            MaterialItem::new("Vinyl flooring adhesive", Unit::Kilograms, total / ADHESIVE_M2_PER_KG)
                .with_note(format!("{} m²/kg", trim_decimal(ADHESIVE_M2_PER_KG, 1))),
        );
    }

    add_leveling(inputs, area_m2, items);

    if baseboard::material(inputs) == BaseboardMaterial::ReadyPiece {
        add_baseboard(inputs, waste_pct, items);
    }
}

fn add_leveling(inputs: &Inputs, area_m2: f64, items: &mut Vec<MaterialItem>) {
    if !inputs.vinyl_leveling_enabled {
        return;
    }
    let (Some(kind), Some(coats)) = (
        inputs.vinyl_leveling_type,
        inputs.vinyl_leveling_coats.filter(|c| LEVELING_COATS.contains(c)),
    ) else {
        trace!("leveling skipped: type or coats missing");
        return;
    };
    let rate = leveling_m2_per_kg(kind);
    let kg = area_m2 / rate * f64::from(coats);
    let label = match kind {
        LevelingType::Thick => "thick",
        LevelingType::Thin => "thin",
    };
    items.push(
        MaterialItem::new(format!("Leveling compound ({})", label), Unit::Kilograms, kg).with_note(format!(
            "{} coats · {} m²/kg per coat",
            coats,
            trim_decimal(rate, 1)
        )),
    );
}

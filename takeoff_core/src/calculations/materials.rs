//! # Generic Item Builders
//!
//! Line-item builders shared by the covering calculators: piece counts,
//! adhesive mortar, grout, spacers and wedges, waterproofing, and the
//! sand/cement bed. Each builder appends at most one or two items and skips
//! silently when the record lacks what it needs.

use tracing::{debug, trace};

use crate::config::DEFAULT_WASTE_PCT;
use crate::format::{ceil_units, packages, trim_decimal};
use crate::inputs::{CoveringType, Inputs};
use crate::result::{MaterialItem, Unit};
use crate::specs::covering::{effective_joint_mm, effective_thickness_mm, piece_dims_cm};
use crate::specs::grout::{self, GroutMaterial, PieceSize};
use crate::specs::{mortar, waterproofing};
use crate::units::{Centimeters, SquareMeters};

/// Spacers per piece (one per corner shared by neighbours, plus edges)
pub const SPACERS_PER_PIECE: f64 = 3.0;

/// Spacers and wedges are sold in packs of this size
pub const SPACER_PACK: f64 = 100.0;

/// Cement bag (kg)
pub const CEMENT_BAG_KG: f64 = 50.0;

/// `1 + waste%/100`
pub fn waste_factor(waste_pct: f64) -> f64 {
    1.0 + waste_pct / 100.0
}

/// Area of one piece in m²
pub fn piece_area_m2(inputs: &Inputs) -> Option<f64> {
    piece_dims_cm(inputs).map(|(l, w)| SquareMeters::from_sides_cm(Centimeters(l), Centimeters(w)).0)
}

/// Pieces to buy for `area_m2`, rounded up to whole boxes when the box size
/// is known.
///
/// ```rust
/// use takeoff_core::calculations::materials::piece_count;
///
/// // 12 m² of 45x45 cm with 10% waste
/// assert_eq!(piece_count(12.0, 0.2025, 10.0, None), 66);
/// // same, in boxes of 8
/// assert_eq!(piece_count(12.0, 0.2025, 10.0, Some(8)), 72);
/// ```
pub fn piece_count(area_m2: f64, piece_area_m2: f64, waste_pct: f64, per_box: Option<u32>) -> u64 {
    if piece_area_m2 <= 0.0 {
        return 0;
    }
    let pieces = ceil_units(area_m2 / piece_area_m2 * waste_factor(waste_pct));
    match per_box.filter(|n| *n > 0) {
        Some(per_box) => {
            let per_box = u64::from(per_box);
            pieces.div_ceil(per_box) * per_box
        }
        None => pieces,
    }
}

/// Piece count for a record, `None` without piece dimensions
pub fn pieces_for(inputs: &Inputs, area_m2: f64, waste_pct: f64) -> Option<u64> {
    let piece_area = piece_area_m2(inputs)?;
    Some(piece_count(area_m2, piece_area, waste_pct, inputs.pieces_per_box))
}

/// Annotation for the covering line: density or waste, then purchase counts.
pub fn covering_note(inputs: &Inputs, waste_pct: f64, pieces: Option<u64>) -> String {
    let mut parts = Vec::new();
    match piece_dims_cm(inputs) {
        Some((l, w)) => parts.push(format!("{} pieces/m²", trim_decimal(10_000.0 / (l * w), 2))),
        None => parts.push(format!("Includes {}% waste", trim_decimal(waste_pct, 2))),
    }
    if let Some(pieces) = pieces {
        parts.push(format!("{} pieces", pieces));
        if let Some(per_box) = inputs.pieces_per_box.filter(|n| *n > 0) {
            parts.push(format!("{} boxes", pieces.div_ceil(u64::from(per_box))));
        }
    }
    parts.join(" · ")
}

/// Name fragment for a piece size, e.g. `45x45 cm`
pub fn size_label(inputs: &Inputs) -> Option<String> {
    piece_dims_cm(inputs).map(|(l, w)| format!("{}x{} cm", trim_decimal(l, 1), trim_decimal(w, 1)))
}

/// Append the adhesive mortar line.
///
/// `extra_kg` is added on top of the area-based amount (mortar for ready-made
/// baseboard pieces).
pub fn add_adhesive_mortar(inputs: &Inputs, area_m2: f64, waste_pct: f64, extra_kg: f64, items: &mut Vec<MaterialItem>) {
    let consumption = mortar::consumption_kg_m2(inputs);
    let class = mortar::mortar_class(inputs);
    let kg = consumption * area_m2 * waste_factor(waste_pct) + extra_kg.max(0.0);
    debug!(%class, consumption, kg, "adhesive mortar");

    let mut parts = Vec::new();
    if area_m2 > 0.0 {
        parts.push(format!("{} kg/m²", trim_decimal(consumption, 2)));
    }
    parts.push(format!(
        "{} bags of {} kg",
        packages(kg, mortar::BAG_KG),
        trim_decimal(mortar::BAG_KG, 0)
    ));
    if extra_kg > 0.0 {
        parts.push(format!("includes {} kg for baseboard", trim_decimal(extra_kg, 1)));
    }
    if inputs.covering.is_some_and(|c| c.is_marble_or_granite()) {
        parts.push("Use ACIII".to_string());
    }
    items.push(
        MaterialItem::new(format!("Adhesive mortar {}", class), Unit::Kilograms, kg).with_note(parts.join(" · ")),
    );
}

/// Append the grout line.
///
/// Grout waste always comes from the record (`sobraPct`, default 10%), not
/// from the waste the caller threads through the other builders.
pub fn add_grout(inputs: &Inputs, area_m2: f64, items: &mut Vec<MaterialItem>) {
    let (Some(environment), Some(material), Some((length, width)), Some(thickness), Some(joint)) = (
        inputs.environment,
        GroutMaterial::for_inputs(inputs),
        piece_dims_cm(inputs),
        effective_thickness_mm(inputs),
        effective_joint_mm(inputs).filter(|j| *j > 0.0),
    ) else {
        trace!("grout skipped: missing piece geometry or joint");
        return;
    };
    let size = PieceSize::from_longest_side_cm(length.max(width));
    let grout_type = grout::classify(environment, material, size);
    let consumption = grout::consumption_kg_m2(length, width, thickness, joint, grout_type);
    let waste = inputs.waste_pct.unwrap_or(DEFAULT_WASTE_PCT);
    let kg = consumption * area_m2 * waste_factor(waste);
    debug!(?grout_type, consumption, kg, "grout");

    items.push(
        MaterialItem::new(grout_type.display_name(), Unit::Kilograms, kg).with_note(format!(
            "Joint {} mm · {} kg/m² · {} packs of {} kg",
            trim_decimal(joint, 1),
            trim_decimal(consumption, 3),
            packages(kg, grout::PACK_KG),
            trim_decimal(grout::PACK_KG, 0)
        )),
    );
}

/// Append spacers, and leveling wedges for floor and wall tiles.
pub fn add_spacers_and_wedges(inputs: &Inputs, pieces: Option<u64>, items: &mut Vec<MaterialItem>) {
    let Some(covering) = inputs.covering else {
        return;
    };
    if matches!(covering, CoveringType::Mosaic | CoveringType::Stone) {
        return;
    }
    let Some(joint) = effective_joint_mm(inputs).filter(|j| *j > 0.0) else {
        trace!("spacers skipped: no joint");
        return;
    };
    let Some(pieces) = pieces.filter(|_| piece_dims_cm(inputs).is_some()) else {
        trace!("spacers skipped: piece size unknown");
        return;
    };

    let count = ceil_units(pieces as f64 * SPACERS_PER_PIECE);
    let note = format!("{} packs of {}", packages(count as f64, SPACER_PACK), SPACER_PACK);
    items.push(
        MaterialItem::new(format!("Spacers {} mm", trim_decimal(joint, 1)), Unit::Units, count as f64)
            .with_note(note.clone()),
    );
    if matches!(covering, CoveringType::Floor | CoveringType::WallTile) {
        items.push(MaterialItem::new("Leveling wedges", Unit::Units, count as f64).with_note(note));
    }
}

/// Append the waterproofing line for the record's environment.
pub fn add_waterproofing(inputs: &Inputs, total_area_m2: f64, items: &mut Vec<MaterialItem>) {
    if !inputs.waterproofing_enabled {
        return;
    }
    let Some(spec) = inputs.environment.and_then(waterproofing::for_environment) else {
        trace!("waterproofing skipped: no product for environment");
        return;
    };
    push_waterproofing(spec, total_area_m2, items);
}

pub(crate) fn push_waterproofing(spec: &waterproofing::WaterproofingSpec, area_m2: f64, items: &mut Vec<MaterialItem>) {
    let quantity = spec.consumption_per_m2 * area_m2;
    items.push(MaterialItem::new(spec.product, spec.unit, quantity).with_note(format!(
        "{} coats · {} {}/m² · {} packages of {} {}",
        spec.coats,
        trim_decimal(spec.consumption_per_m2, 2),
        spec.unit,
        packages(quantity, spec.package_size),
        trim_decimal(spec.package_size, 1),
        spec.unit
    )));
}

/// Proportions of a sand/cement mortar bed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BedMix {
    /// Mix ratio label, e.g. `1:3`
    pub ratio: &'static str,
    /// Cement per m³ of mortar (kg)
    pub cement_kg_per_m3: f64,
    /// Sand per m³ of mortar (m³)
    pub sand_m3_per_m3: f64,
}

/// Append cement and sand for `volume_m3` of bed mortar (waste already in).
pub fn add_sand_cement(mix: BedMix, volume_m3: f64, note: &str, items: &mut Vec<MaterialItem>) {
    let cement_kg = volume_m3 * mix.cement_kg_per_m3;
    let sand_m3 = volume_m3 * mix.sand_m3_per_m3;
    items.push(
        MaterialItem::new(format!("Cement (bed mortar {})", mix.ratio), Unit::Kilograms, cement_kg).with_note(
            format!(
                "{} · {} bags of {} kg",
                note,
                packages(cement_kg, CEMENT_BAG_KG),
                trim_decimal(CEMENT_BAG_KG, 0)
            ),
        ),
    );
    items.push(
        MaterialItem::new(format!("Sand (bed mortar {})", mix.ratio), Unit::CubicMeters, sand_m3)
            .with_note(note.to_string()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{Environment, TileMaterial};

    fn scenario_a() -> Inputs {
        let mut inputs = Inputs::new(CoveringType::Floor, Environment::Dry);
        inputs.tile_material = Some(TileMaterial::Ceramic);
        inputs.length_m = Some(3.0);
        inputs.width_m = Some(4.0);
        inputs.piece_length_cm = Some(45.0);
        inputs.piece_width_cm = Some(45.0);
        inputs.joint_mm = Some(3.0);
        inputs.waste_pct = Some(10.0);
        inputs
    }

    #[test]
    fn test_piece_count_without_box() {
        assert_eq!(pieces_for(&scenario_a(), 12.0, 10.0), Some(66));
    }

    #[test]
    fn test_piece_count_box_aligned() {
        let mut inputs = scenario_a();
        inputs.pieces_per_box = Some(6);
        assert_eq!(pieces_for(&inputs, 12.0, 10.0), Some(66));
        inputs.pieces_per_box = Some(7);
        assert_eq!(pieces_for(&inputs, 12.0, 10.0), Some(70));
        inputs.pieces_per_box = Some(0);
        assert_eq!(pieces_for(&inputs, 12.0, 10.0), Some(66));
    }

    #[test]
    fn test_covering_note() {
        let mut inputs = scenario_a();
        inputs.pieces_per_box = Some(7);
        assert_eq!(covering_note(&inputs, 10.0, Some(70)), "4.94 pieces/m² · 70 pieces · 10 boxes");

        inputs.piece_length_cm = None;
        assert_eq!(covering_note(&inputs, 10.0, None), "Includes 10% waste");
    }

    #[test]
    fn test_mortar_scenario_a() {
        let mut items = Vec::new();
        add_adhesive_mortar(&scenario_a(), 12.0, 10.0, 0.0, &mut items);
        assert_eq!(items[0].name, "Adhesive mortar ACI");
        assert_eq!(items[0].quantity, 79.2);
        assert_eq!(items[0].note.as_deref(), Some("6 kg/m² · 4 bags of 20 kg"));
    }

    #[test]
    fn test_mortar_extra_kg() {
        let mut items = Vec::new();
        add_adhesive_mortar(&scenario_a(), 12.0, 10.0, 6.4, &mut items);
        assert_eq!(items[0].quantity, 85.6);
        assert!(items[0].note.as_deref().unwrap().contains("includes 6.4 kg for baseboard"));
    }

    #[test]
    fn test_grout_scenario_a() {
        let mut items = Vec::new();
        add_grout(&scenario_a(), 12.0, &mut items);
        assert_eq!(items[0].name, "Cementitious grout type 1");
        // 0.16853 kg/m² x 12 x 1.1 = 2.2247
        assert_eq!(items[0].quantity, 2.2);
    }

    #[test]
    fn test_grout_ignores_threaded_waste() {
        let mut inputs = scenario_a();
        inputs.waste_pct = None;
        let mut items = Vec::new();
        add_grout(&inputs, 12.0, &mut items);
        assert_eq!(items[0].quantity, 2.2);
    }

    #[test]
    fn test_spacers_and_wedges() {
        let mut items = Vec::new();
        add_spacers_and_wedges(&scenario_a(), Some(66), &mut items);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Spacers 3 mm");
        assert_eq!(items[0].quantity, 198.0);
        assert_eq!(items[0].note.as_deref(), Some("2 packs of 100"));
        assert_eq!(items[1].name, "Leveling wedges");
    }

    #[test]
    fn test_spacers_skipped() {
        let mut inputs = scenario_a();
        inputs.covering = Some(CoveringType::Stone);
        let mut items = Vec::new();
        add_spacers_and_wedges(&inputs, Some(66), &mut items);
        assert!(items.is_empty());

        let mut inputs = scenario_a();
        inputs.joint_mm = Some(0.0);
        add_spacers_and_wedges(&inputs, Some(66), &mut items);
        assert!(items.is_empty());

        add_spacers_and_wedges(&scenario_a(), None, &mut items);
        assert!(items.is_empty());
    }

    #[test]
    fn test_marble_gets_spacers_without_wedges() {
        let mut inputs = scenario_a();
        inputs.covering = Some(CoveringType::Granite);
        let mut items = Vec::new();
        add_spacers_and_wedges(&inputs, Some(10), &mut items);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 30.0);
    }

    #[test]
    fn test_waterproofing() {
        let mut inputs = scenario_a();
        inputs.environment = Some(Environment::Wet);
        let mut items = Vec::new();
        add_waterproofing(&inputs, 12.0, &mut items);
        assert!(items.is_empty());

        inputs.waterproofing_enabled = true;
        add_waterproofing(&inputs, 12.0, &mut items);
        assert_eq!(items[0].quantity, 36.0);
        assert!(items[0].note.as_deref().unwrap().starts_with("3 coats"));

        inputs.environment = Some(Environment::Dry);
        let mut dry = Vec::new();
        add_waterproofing(&inputs, 12.0, &mut dry);
        assert!(dry.is_empty());
    }

    #[test]
    fn test_sand_cement() {
        let mix = BedMix {
            ratio: "1:3",
            cement_kg_per_m3: 430.0,
            sand_m3_per_m3: 0.85,
        };
        let mut items = Vec::new();
        add_sand_cement(mix, 1.0, "Bed 4 cm", &mut items);
        assert_eq!(items[0].quantity, 430.0);
        assert!(items[0].note.as_deref().unwrap().ends_with("9 bags of 50 kg"));
        assert_eq!(items[1].quantity, 0.85);
        assert_eq!(items[1].unit, Unit::CubicMeters);
    }
}

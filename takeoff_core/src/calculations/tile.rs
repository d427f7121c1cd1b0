//! # Floor and Wall Tiles
//!
//! Take-off for `FLOOR` and `WALL_TILE`. Items, in order:
//!
//! 1. covering (m² with waste, piece and box counts in the note)
//! 2. adhesive mortar, including the glue for ready-made baseboard pieces
//! 3. grout
//! 4. spacers and leveling wedges
//! 5. baseboard (floor only)
//! 6. waterproofing, over the net area plus any same-piece baseboard band

use tracing::debug;

use crate::calculations::baseboard::{self, add_baseboard};
use crate::calculations::materials::{
    add_adhesive_mortar, add_grout, add_spacers_and_wedges, add_waterproofing, covering_note, pieces_for,
    size_label, waste_factor,
};
use crate::inputs::{CoveringType, Inputs, TileMaterial};
use crate::result::{MaterialItem, Unit};

/// Line name of the covering item, e.g. `Porcelain wall tile 30x60 cm`
pub fn covering_name(inputs: &Inputs) -> String {
    let material = inputs
        .tile_material_or_default()
        .unwrap_or(TileMaterial::Ceramic)
        .display_name();
    let kind = match inputs.covering {
        Some(CoveringType::WallTile) => "wall tile",
        _ => "floor tile",
    };
    match size_label(inputs) {
        Some(size) => format!("{} {} {}", material, kind, size),
        None => format!("{} {}", material, kind),
    }
}

/// Append the tile take-off for `area_m2` of net area.
pub fn take_off(inputs: &Inputs, area_m2: f64, waste_pct: f64, items: &mut Vec<MaterialItem>) {
    let pieces = pieces_for(inputs, area_m2, waste_pct);
    debug!(area_m2, waste_pct, ?pieces, "tile take-off");

    items.push(
        MaterialItem::new(covering_name(inputs), Unit::SquareMeters, area_m2 * waste_factor(waste_pct))
            .with_note(covering_note(inputs, waste_pct, pieces)),
    );

    let baseboard_kg = baseboard::ready_piece_mortar_kg(inputs, waste_pct);
    add_adhesive_mortar(inputs, area_m2, waste_pct, baseboard_kg, items);
    add_grout(inputs, area_m2, items);
    add_spacers_and_wedges(inputs, pieces, items);
    add_baseboard(inputs, waste_pct, items);
    add_waterproofing(inputs, baseboard::treated_area_m2(inputs, area_m2), items);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{BaseboardMaterial, Environment};

    fn floor() -> Inputs {
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
    fn test_floor_items_in_order() {
        let mut items = Vec::new();
        take_off(&floor(), 12.0, 10.0, &mut items);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Ceramic floor tile 45x45 cm",
                "Adhesive mortar ACI",
                "Cementitious grout type 1",
                "Spacers 3 mm",
                "Leveling wedges",
            ]
        );
        assert_eq!(items[0].quantity, 13.2);
        assert_eq!(items[0].note.as_deref(), Some("4.94 pieces/m² · 66 pieces"));
    }

    #[test]
    fn test_wall_tile_name_defaults_to_ceramic() {
        let mut inputs = Inputs::new(CoveringType::WallTile, Environment::Wet);
        inputs.piece_length_cm = Some(30.0);
        inputs.piece_width_cm = Some(60.0);
        assert_eq!(covering_name(&inputs), "Ceramic wall tile 30x60 cm");
        inputs.tile_material = Some(TileMaterial::Porcelain);
        inputs.piece_length_cm = None;
        assert_eq!(covering_name(&inputs), "Porcelain wall tile");
    }

    #[test]
    fn test_same_piece_baseboard_extends_waterproofing() {
        let mut inputs = floor();
        inputs.environment = Some(Environment::SemiWet);
        inputs.waterproofing_enabled = true;
        inputs.baseboard_enabled = true;
        inputs.baseboard_height_cm = Some(10.0);
        let mut items = Vec::new();
        take_off(&inputs, 12.0, 10.0, &mut items);

        assert!(items.iter().any(|i| i.name == "Baseboard (cut from covering pieces)"));
        // (12 + 14 x 0.10) x 2 kg/m²
        let waterproofing = items.last().unwrap();
        assert_eq!(waterproofing.name, "Flexible cementitious waterproofing");
        assert_eq!(waterproofing.quantity, 26.8);
    }

    #[test]
    fn test_ready_piece_baseboard_adds_mortar() {
        let mut inputs = floor();
        inputs.baseboard_enabled = true;
        inputs.baseboard_height_cm = Some(10.0);
        inputs.baseboard_material = Some(BaseboardMaterial::ReadyPiece);
        inputs.baseboard_piece_length_m = Some(1.0);
        let mut items = Vec::new();
        take_off(&inputs, 12.0, 10.0, &mut items);
        // 79.2 + 6.4
        assert_eq!(items[1].quantity, 85.6);
        assert!(items.iter().any(|i| i.name == "Baseboard (ready-made pieces)"));
    }
}

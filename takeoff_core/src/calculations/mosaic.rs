//! # Mosaic
//!
//! Mosaics are bought by the sheet. The selected format gives the piece size
//! (for mortar and grout) and a default thickness.
//!
//! ```text
//! sheets = ceil(area × (1 + waste) / sheet_area)
//! pieces = sheets × pieces_per_sheet
//! ```

use tracing::{debug, trace};

use crate::calculations::materials::{add_adhesive_mortar, add_grout, add_waterproofing, waste_factor};
use crate::format::{ceil_units, trim_decimal};
use crate::inputs::{Inputs, TileMaterial};
use crate::result::{MaterialItem, Unit};
use crate::specs::covering::selected_mosaic_format;
use crate::specs::MosaicFormat;

/// Sheets to buy for `area_m2`
pub fn sheet_count(format: &MosaicFormat, area_m2: f64, waste_pct: f64) -> u64 {
    let sheets_per_m2 = 1.0 / format.sheet_area_m2();
    ceil_units(area_m2 * waste_factor(waste_pct) * sheets_per_m2)
}

/// Append the mosaic take-off. Nothing is added without a known format.
pub fn take_off(inputs: &Inputs, area_m2: f64, waste_pct: f64, items: &mut Vec<MaterialItem>) {
    let Some(format) = selected_mosaic_format(inputs) else {
        trace!(code = ?inputs.mosaic_format, "mosaic skipped: unknown format");
        return;
    };
    let sheets = sheet_count(format, area_m2, waste_pct);
    let pieces = sheets * format.pieces_per_sheet();
    debug!(format = format.code, sheets, pieces, "mosaic take-off");

    let material = inputs
        .tile_material_or_default()
        .unwrap_or(TileMaterial::Ceramic)
        .display_name();
    items.push(
        MaterialItem::new(format!("{} mosaic {} cm", material, format.code), Unit::Sheets, sheets as f64).with_note(
            format!(
                "Sheet {}x{} cm · {} pieces/sheet · {} pieces",
                trim_decimal(format.sheet_length_cm, 1),
                trim_decimal(format.sheet_width_cm, 1),
                format.pieces_per_sheet(),
                pieces
            ),
        ),
    );
    add_adhesive_mortar(inputs, area_m2, waste_pct, 0.0, items);
    add_grout(inputs, area_m2, items);
    add_waterproofing(inputs, area_m2, items);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{CoveringType, Environment};
    use crate::specs::mosaic_format;

    fn pool_wall() -> Inputs {
        let mut inputs = Inputs::new(CoveringType::Mosaic, Environment::AlwaysWet);
        inputs.mosaic_format = Some("2x2".to_string());
        inputs.waste_pct = Some(10.0);
        inputs
    }

    #[test]
    fn test_sheet_count() {
        let format = mosaic_format("2x2").unwrap();
        // 5 x 1.1 / 0.09 = 61.1
        assert_eq!(sheet_count(format, 5.0, 10.0), 62);
        // 0.9 / 0.09 = 10 exactly
        assert_eq!(sheet_count(format, 0.9, 0.0), 10);
    }

    #[test]
    fn test_items() {
        let mut items = Vec::new();
        take_off(&pool_wall(), 5.0, 10.0, &mut items);
        assert_eq!(items[0].name, "Ceramic mosaic 2x2 cm");
        assert_eq!(items[0].unit, Unit::Sheets);
        assert_eq!(items[0].quantity, 62.0);
        assert_eq!(
            items[0].note.as_deref(),
            Some("Sheet 30x30 cm · 225 pieces/sheet · 13950 pieces")
        );
        // 3.5 kg/m² x 5 x 1.1
        assert_eq!(items[1].name, "Adhesive mortar ACIII");
        assert_eq!(items[1].quantity, 19.3);
        assert_eq!(items[2].name, "Epoxy grout");
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_unknown_format() {
        let mut inputs = pool_wall();
        inputs.mosaic_format = Some("7x7".to_string());
        let mut items = Vec::new();
        take_off(&inputs, 5.0, 10.0, &mut items);
        assert!(items.is_empty());
    }
}

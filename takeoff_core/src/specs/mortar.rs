//! Adhesive mortar specifications
//!
//! Consumption of adhesive mortar (kg/m²) from piece size, material,
//! thickness and environment, and the mortar class (ACI / ACII / ACIII) the
//! job calls for.

use serde::{Deserialize, Serialize};

use crate::inputs::{CoveringType, Environment, Inputs, TileMaterial};
use crate::specs::covering::{effective_thickness_mm, longest_side_cm};

/// Bag size of adhesive mortar (kg)
pub const BAG_KG: f64 = 20.0;

/// Consumption for mosaic sheets, laid with a small notched trowel
pub const MOSAIC_KG_M2: f64 = 3.5;

/// Consumption assumed when the piece size is unknown
pub const UNKNOWN_SIZE_KG_M2: f64 = 5.0;

/// Notched-trowel bands by longest piece side: (max side cm, kg/m²)
const SIZE_BANDS: [(f64, f64); 4] = [
    (20.0, 4.0),
    (33.0, 5.0),
    (45.0, 6.0),
    (62.0, 7.0),
];

/// Above the last band: 12 mm trowel with double gluing
const LARGE_FORMAT_KG_M2: f64 = 8.5;

/// Added when double gluing is required and the band does not include it
const DOUBLE_GLUING_EXTRA_KG_M2: f64 = 1.5;

/// Added in wet areas for pieces up to this side (cm)
const WET_AREA_EXTRA_KG_M2: f64 = 1.0;
const WET_AREA_MAX_SIDE_CM: f64 = 45.0;

/// Added for thick tiles
const THICK_PIECE_EXTRA_KG_M2: f64 = 0.5;
const THICK_PIECE_MM: f64 = 12.0;

/// Adhesive mortar class per NBR 14081
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MortarClass {
    #[serde(rename = "ACI")]
    Aci,
    #[serde(rename = "ACII")]
    Acii,
    #[serde(rename = "ACIII")]
    Aciii,
}

impl MortarClass {
    pub fn code(&self) -> &'static str {
        match self {
            MortarClass::Aci => "ACI",
            MortarClass::Acii => "ACII",
            MortarClass::Aciii => "ACIII",
        }
    }
}

impl std::fmt::Display for MortarClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Consumption for a piece of the given longest side (cm).
///
/// ```rust
/// use takeoff_core::specs::mortar::consumption_for_side;
///
/// assert_eq!(consumption_for_side(Some(45.0)), 6.0);
/// assert_eq!(consumption_for_side(Some(120.0)), 8.5);
/// assert_eq!(consumption_for_side(None), 5.0);
/// ```
pub fn consumption_for_side(longest_side_cm: Option<f64>) -> f64 {
    let Some(side) = longest_side_cm else {
        return UNKNOWN_SIZE_KG_M2;
    };
    SIZE_BANDS
        .iter()
        .find(|(max_side, _)| side <= *max_side)
        .map(|(_, kg)| *kg)
        .unwrap_or(LARGE_FORMAT_KG_M2)
}

/// Adhesive mortar consumption (kg/m²) for an input record.
pub fn consumption_kg_m2(inputs: &Inputs) -> f64 {
    let Some(covering) = inputs.covering else {
        return UNKNOWN_SIZE_KG_M2;
    };
    if covering == CoveringType::Mosaic {
        return MOSAIC_KG_M2;
    }

    let side = longest_side_cm(inputs);
    let mut kg = consumption_for_side(side);
    let large_format = side.is_some_and(|s| s > SIZE_BANDS[SIZE_BANDS.len() - 1].0);

    if covering.is_marble_or_granite() {
        if !large_format {
            kg += DOUBLE_GLUING_EXTRA_KG_M2;
        }
    } else {
        let wet = inputs.environment.is_some_and(|env| env.is_wet());
        if wet && side.is_some_and(|s| s <= WET_AREA_MAX_SIDE_CM) {
            kg += WET_AREA_EXTRA_KG_M2;
        }
        if effective_thickness_mm(inputs).is_some_and(|t| t > THICK_PIECE_MM) {
            kg += THICK_PIECE_EXTRA_KG_M2;
        }
    }
    kg
}

/// Mortar class the record calls for.
pub fn mortar_class(inputs: &Inputs) -> MortarClass {
    let covering = inputs.covering;
    let environment = inputs.environment.unwrap_or(Environment::Dry);
    let porcelain = inputs.tile_material_or_default() == Some(TileMaterial::Porcelain);
    let large_format = longest_side_cm(inputs).is_some_and(|s| s > 62.0);

    if covering.is_some_and(|c| c.is_marble_or_granite())
        || environment == Environment::AlwaysWet
        || (porcelain && large_format)
    {
        MortarClass::Aciii
    } else if porcelain || environment != Environment::Dry {
        MortarClass::Acii
    } else {
        MortarClass::Aci
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::Application;

    fn floor(side: f64, material: TileMaterial, env: Environment) -> Inputs {
        let mut inputs = Inputs::new(CoveringType::Floor, env);
        inputs.tile_material = Some(material);
        inputs.piece_length_cm = Some(side);
        inputs.piece_width_cm = Some(side);
        inputs
    }

    #[test]
    fn test_size_bands() {
        assert_eq!(consumption_for_side(Some(20.0)), 4.0);
        assert_eq!(consumption_for_side(Some(30.0)), 5.0);
        assert_eq!(consumption_for_side(Some(60.0)), 7.0);
        assert_eq!(consumption_for_side(Some(62.5)), 8.5);
    }

    #[test]
    fn test_dry_ceramic_45() {
        let inputs = floor(45.0, TileMaterial::Ceramic, Environment::Dry);
        assert_eq!(consumption_kg_m2(&inputs), 6.0);
        assert_eq!(mortar_class(&inputs), MortarClass::Aci);
    }

    #[test]
    fn test_wet_area_extra() {
        let inputs = floor(30.0, TileMaterial::Ceramic, Environment::Wet);
        assert_eq!(consumption_kg_m2(&inputs), 6.0);
        assert_eq!(mortar_class(&inputs), MortarClass::Acii);
    }

    #[test]
    fn test_large_porcelain() {
        let inputs = floor(90.0, TileMaterial::Porcelain, Environment::Dry);
        assert_eq!(consumption_kg_m2(&inputs), 8.5);
        assert_eq!(mortar_class(&inputs), MortarClass::Aciii);
    }

    #[test]
    fn test_marble_double_gluing() {
        let mut inputs = Inputs::new(CoveringType::Marble, Environment::Dry);
        inputs.application = Some(Application::Wall);
        inputs.piece_length_cm = Some(60.0);
        inputs.piece_width_cm = Some(30.0);
        assert_eq!(consumption_kg_m2(&inputs), 8.5);
        assert_eq!(mortar_class(&inputs), MortarClass::Aciii);
    }

    #[test]
    fn test_mosaic_flat_rate() {
        let inputs = Inputs::new(CoveringType::Mosaic, Environment::AlwaysWet);
        assert_eq!(consumption_kg_m2(&inputs), MOSAIC_KG_M2);
        assert_eq!(mortar_class(&inputs), MortarClass::Aciii);
    }
}

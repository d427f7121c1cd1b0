//! # Interlocking Pavers
//!
//! Pavers are laid dry on a sand cushion over a base sized by traffic class:
//!
//! | Traffic | Sand cushion | Base                                   |
//! |---------|--------------|----------------------------------------|
//! | LIGHT   | 3 cm         | 8 cm graded crushed stone              |
//! | MEDIUM  | 4 cm         | 12 cm graded crushed stone             |
//! | HEAVY   | 5 cm         | 14 cm reinforced concrete slab + mesh  |
//!
//! Layer volumes are taken over the net area; waste applies to the pavers
//! only. Joints are filled with fine sand swept in after compaction.

use tracing::{debug, trace};

use crate::calculations::materials::{
    add_waterproofing, covering_note, pieces_for, push_waterproofing, size_label, waste_factor, CEMENT_BAG_KG,
};
use crate::format::{ceil_units, packages, trim_decimal};
use crate::inputs::{Inputs, Traffic};
use crate::result::{MaterialItem, Unit};
use crate::specs::covering::{effective_joint_mm, effective_thickness_mm, piece_dims_cm};
use crate::specs::waterproofing::paver_sealer;
use crate::units::{Centimeters, SquareMeters};

/// Cement for the slab concrete (50 kg bags per m³)
pub const SLAB_CEMENT_BAGS_PER_M3: f64 = 8.0;

/// Area covered by one welded mesh sheet (m²)
pub const MESH_SHEET_M2: f64 = 10.0;

/// Layer thicknesses for a traffic class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PavementLayers {
    pub sand_cm: f64,
    pub base_cm: f64,
    /// Base is a reinforced concrete slab instead of crushed stone
    pub concrete_slab: bool,
}

impl PavementLayers {
    pub fn for_traffic(traffic: Traffic) -> Self {
        match traffic {
            Traffic::Light => PavementLayers {
                sand_cm: 3.0,
                base_cm: 8.0,
                concrete_slab: false,
            },
            Traffic::Medium => PavementLayers {
                sand_cm: 4.0,
                base_cm: 12.0,
                concrete_slab: false,
            },
            Traffic::Heavy => PavementLayers {
                sand_cm: 5.0,
                base_cm: 14.0,
                concrete_slab: true,
            },
        }
    }
}

/// Share of the paved surface taken by joints, from the paver geometry.
pub fn joint_fraction(length_cm: f64, width_cm: f64, joint_mm: f64) -> f64 {
    if length_cm <= 0.0 || width_cm <= 0.0 || joint_mm <= 0.0 {
        return 0.0;
    }
    let (length, width) = (length_cm * 10.0, width_cm * 10.0);
    1.0 - (length * width) / ((length + joint_mm) * (width + joint_mm))
}

/// Append the paver take-off.
pub fn take_off(inputs: &Inputs, area_m2: f64, waste_pct: f64, items: &mut Vec<MaterialItem>) {
    let thickness = effective_thickness_mm(inputs).unwrap_or(60.0);
    let pieces = pieces_for(inputs, area_m2, waste_pct);
    let name = match size_label(inputs) {
        Some(size) => format!("Interlocking paver {} · {} mm", size, trim_decimal(thickness, 0)),
        None => format!("Interlocking paver {} mm", trim_decimal(thickness, 0)),
    };
    items.push(
        MaterialItem::new(name, Unit::SquareMeters, area_m2 * waste_factor(waste_pct))
            .with_note(covering_note(inputs, waste_pct, pieces)),
    );

    let Some(traffic) = inputs.traffic else {
        trace!("paver base skipped: no traffic class");
        return;
    };
    let layers = PavementLayers::for_traffic(traffic);
    debug!(?traffic, ?layers, "paver layers");

    let sand_m3 = SquareMeters(area_m2).layer(Centimeters(layers.sand_cm)).value();
    items.push(
        MaterialItem::new("Bedding sand (coarse)", Unit::CubicMeters, sand_m3)
            .with_note(format!("Cushion {} cm", trim_decimal(layers.sand_cm, 1))),
    );

    let base_m3 = SquareMeters(area_m2).layer(Centimeters(layers.base_cm)).value();
    if layers.concrete_slab {
        items.push(
            MaterialItem::new("Reinforced concrete slab", Unit::CubicMeters, base_m3)
                .with_note(format!("Slab {} cm for {} traffic", trim_decimal(layers.base_cm, 1), traffic.display_name())),
        );
        let cement_kg = base_m3 * SLAB_CEMENT_BAGS_PER_M3 * CEMENT_BAG_KG;
        items.push(
            MaterialItem::new("Cement (slab concrete)", Unit::Kilograms, cement_kg).with_note(format!(
                "{} bags/m³ · {} bags of {} kg",
                trim_decimal(SLAB_CEMENT_BAGS_PER_M3, 0),
                packages(cement_kg, CEMENT_BAG_KG),
                trim_decimal(CEMENT_BAG_KG, 0)
            )),
        );
        let sheets = ceil_units(area_m2 / MESH_SHEET_M2);
        items.push(
            MaterialItem::new("Welded mesh", Unit::Sheets, sheets as f64)
                .with_note(format!("1 sheet per {} m²", trim_decimal(MESH_SHEET_M2, 0))),
        );
    } else {
        items.push(
            MaterialItem::new("Graded crushed stone base", Unit::CubicMeters, base_m3).with_note(format!(
                "Base {} cm for {} traffic",
                trim_decimal(layers.base_cm, 1),
                traffic.display_name()
            )),
        );
    }

    if let (Some((length, width)), Some(joint)) = (piece_dims_cm(inputs), effective_joint_mm(inputs)) {
        let fraction = joint_fraction(length, width, joint);
        let joint_m3 = area_m2 * fraction * thickness / 1000.0;
        if joint_m3 > 0.0 {
            items.push(
                MaterialItem::new("Joint sand (fine)", Unit::CubicMeters, joint_m3)
                    .with_note(format!("Joint {} mm", trim_decimal(joint, 1))),
            );
        }
    }

    add_surface_protection(inputs, traffic, area_m2, items);
}

/// Sealer for light/medium traffic in wet areas, the environment's
/// waterproofing otherwise.
fn add_surface_protection(inputs: &Inputs, traffic: Traffic, area_m2: f64, items: &mut Vec<MaterialItem>) {
    if !inputs.waterproofing_enabled {
        return;
    }
    let wet = inputs.environment.is_some_and(|env| env.is_wet());
    if wet && traffic != Traffic::Heavy {
        match inputs.paver_sealer {
            Some(sealer) => push_waterproofing(&paver_sealer(sealer), area_m2, items),
            None => trace!("paver sealer skipped: no sealer type"),
        }
    } else {
        add_waterproofing(inputs, area_m2, items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{CoveringType, Environment, PaverSealer};

    fn yard(traffic: Traffic) -> Inputs {
        let mut inputs = Inputs::new(CoveringType::InterlockingPaver, Environment::Dry);
        inputs.area_override_m2 = Some(50.0);
        inputs.traffic = Some(traffic);
        inputs.piece_length_cm = Some(20.0);
        inputs.piece_width_cm = Some(10.0);
        inputs.waste_pct = Some(5.0);
        inputs
    }

    #[test]
    fn test_heavy_traffic_slab() {
        let mut items = Vec::new();
        take_off(&yard(Traffic::Heavy), 50.0, 5.0, &mut items);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Interlocking paver 20x10 cm · 60 mm",
                "Bedding sand (coarse)",
                "Reinforced concrete slab",
                "Cement (slab concrete)",
                "Welded mesh",
                "Joint sand (fine)",
            ]
        );
        assert_eq!(items[1].quantity, 2.5);
        assert_eq!(items[2].quantity, 7.0);
        assert_eq!(items[3].quantity, 2800.0);
        assert_eq!(items[4].quantity, 5.0);
        // 1 - 20000/(203 x 103) = 0.0435, x 50 x 0.06
        assert_eq!(items[5].quantity, 0.13);
    }

    #[test]
    fn test_light_traffic_base() {
        let mut items = Vec::new();
        take_off(&yard(Traffic::Light), 50.0, 5.0, &mut items);
        assert_eq!(items[1].quantity, 1.5);
        assert_eq!(items[2].name, "Graded crushed stone base");
        assert_eq!(items[2].quantity, 4.0);
        assert!(!items.iter().any(|i| i.name == "Welded mesh"));
    }

    #[test]
    fn test_wet_light_traffic_uses_sealer() {
        let mut inputs = yard(Traffic::Medium);
        inputs.environment = Some(Environment::Wet);
        inputs.waterproofing_enabled = true;
        inputs.paver_sealer = Some(PaverSealer::WaterRepellent);
        let mut items = Vec::new();
        take_off(&inputs, 50.0, 5.0, &mut items);
        let last = items.last().unwrap();
        assert_eq!(last.name, "Silane-siloxane water repellent for pavers");
        assert_eq!(last.unit, Unit::Liters);
        assert_eq!(last.quantity, 15.0);
    }

    #[test]
    fn test_heavy_traffic_uses_environment_waterproofing() {
        let mut inputs = yard(Traffic::Heavy);
        inputs.environment = Some(Environment::Wet);
        inputs.waterproofing_enabled = true;
        inputs.paver_sealer = Some(PaverSealer::AcrylicResin);
        let mut items = Vec::new();
        take_off(&inputs, 50.0, 5.0, &mut items);
        assert_eq!(items.last().unwrap().name, "Flexible cementitious waterproofing");
    }

    #[test]
    fn test_joint_fraction_degenerate() {
        assert_eq!(joint_fraction(0.0, 10.0, 3.0), 0.0);
        assert_eq!(joint_fraction(20.0, 10.0, 0.0), 0.0);
    }
}

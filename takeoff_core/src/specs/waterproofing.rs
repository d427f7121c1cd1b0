//! Waterproofing specifications
//!
//! Product and consumption per environment class. Dry areas have no entry.
//! Interlocking pavers in wet areas use a surface sealer instead, chosen by
//! the [`PaverSealer`] sub-type.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::inputs::{Environment, PaverSealer};
use crate::result::Unit;

/// One row of the waterproofing table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterproofingSpec {
    pub product: &'static str,
    pub unit: Unit,
    /// Consumption per m² of treated area, all coats included
    pub consumption_per_m2: f64,
    pub coats: u32,
    /// Commercial package size in `unit`
    pub package_size: f64,
}

static WATERPROOFING_TABLE: Lazy<HashMap<Environment, WaterproofingSpec>> = Lazy::new(|| {
    HashMap::from([
        (
            Environment::SemiWet,
            WaterproofingSpec {
                product: "Flexible cementitious waterproofing",
                unit: Unit::Kilograms,
                consumption_per_m2: 2.0,
                coats: 2,
                package_size: 18.0,
            },
        ),
        (
            Environment::Wet,
            WaterproofingSpec {
                product: "Flexible cementitious waterproofing",
                unit: Unit::Kilograms,
                consumption_per_m2: 3.0,
                coats: 3,
                package_size: 18.0,
            },
        ),
        (
            Environment::AlwaysWet,
            WaterproofingSpec {
                product: "Reinforced flexible cementitious waterproofing (with polyester mesh)",
                unit: Unit::Kilograms,
                consumption_per_m2: 4.0,
                coats: 4,
                package_size: 18.0,
            },
        ),
    ])
});

/// Waterproofing for an environment; `None` for dry areas.
///
/// ```rust
/// use takeoff_core::inputs::Environment;
/// use takeoff_core::specs::waterproofing::for_environment;
///
/// assert!(for_environment(Environment::Dry).is_none());
/// assert_eq!(for_environment(Environment::Wet).unwrap().consumption_per_m2, 3.0);
/// ```
pub fn for_environment(environment: Environment) -> Option<&'static WaterproofingSpec> {
    WATERPROOFING_TABLE.get(&environment)
}

/// Sealer for interlocking pavers
pub fn paver_sealer(sealer: PaverSealer) -> WaterproofingSpec {
    match sealer {
        PaverSealer::AcrylicResin => WaterproofingSpec {
            product: "Acrylic resin sealer for pavers",
            unit: Unit::Liters,
            consumption_per_m2: 0.2,
            coats: 2,
            package_size: 18.0,
        },
        PaverSealer::WaterRepellent => WaterproofingSpec {
            product: "Silane-siloxane water repellent for pavers",
            unit: Unit::Liters,
            consumption_per_m2: 0.3,
            coats: 1,
            package_size: 5.0,
        },
    }
}

//! # Take-off Calculations
//!
//! Each covering has its own calculator. They all follow the same pattern:
//!
//! - take the validated [`Inputs`], the net area and the waste margin
//! - append [`MaterialItem`]s in a fixed order
//! - never fail: missing optional data drops the item it feeds
//!
//! [`calculate`] is the entry point. It fills configured defaults, runs the
//! form gate, derives the net area and dispatches on the covering.
//!
//! ## Available Calculators
//!
//! - [`tile`] - floor and wall tiles
//! - [`mosaic`] - mosaic sheets
//! - [`stone`] - natural stone on a sand/cement bed
//! - [`marble_granite`] - polished marble and granite
//! - [`pavers`] - interlocking pavers
//! - [`vinyl`] - vinyl floor
//!
//! Shared pieces live in [`area`], [`baseboard`] and [`materials`].
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::calculations::calculate;
//! use takeoff_core::inputs::Inputs;
//!
//! let inputs = Inputs::from_json(r#"{
//!     "revest": "FLOOR", "ambiente": "DRY", "pisoPlacaTipo": "CERAMIC",
//!     "compM": 3, "largM": 4, "pecaCompCm": 45, "pecaLargCm": 45,
//!     "juntaMm": 3, "sobraPct": 10
//! }"#).unwrap();
//!
//! let result = calculate(&inputs).unwrap();
//! assert_eq!(result.header.area_m2, 12.0);
//! assert_eq!(result.item("Adhesive mortar ACI").unwrap().quantity, 79.2);
//! ```

pub mod area;
pub mod baseboard;
pub mod marble_granite;
pub mod materials;
pub mod mosaic;
pub mod pavers;
pub mod stone;
pub mod tile;
pub mod vinyl;

use tracing::debug;

use crate::config::EngineSettings;
use crate::errors::{CalcError, CalcResult};
use crate::format::round2;
use crate::inputs::{CoveringType, Inputs};
use crate::result::{MaterialItem, ResultHeader, TakeoffResult};
use crate::specs::covering::{effective_joint_mm, effective_thickness_mm};
use crate::validation::validate_all;

/// Run the take-off with default settings.
pub fn calculate(inputs: &Inputs) -> CalcResult<TakeoffResult> {
    calculate_with(inputs, &EngineSettings::default())
}

/// Run the take-off with the given settings.
pub fn calculate_with(inputs: &Inputs, settings: &EngineSettings) -> CalcResult<TakeoffResult> {
    let inputs = settings.apply_defaults(inputs);
    validate_all(&inputs)?;

    let (Some(covering), Some(environment)) = (inputs.covering, inputs.environment) else {
        return Err(CalcError::Internal {
            message: "validated record lacks covering or environment".to_string(),
        });
    };
    let area_m2 = area::area_base_m2(&inputs).ok_or_else(|| CalcError::Internal {
        message: "validated record has no net area".to_string(),
    })?;
    let waste_pct = inputs.waste_pct.unwrap_or(settings.default_waste_pct);
    debug!(%covering, %environment, area_m2, waste_pct, "dispatching take-off");

    let mut items: Vec<MaterialItem> = Vec::new();
    let mut setting_method = None;
    match covering {
        CoveringType::Floor | CoveringType::WallTile => tile::take_off(&inputs, area_m2, waste_pct, &mut items),
        CoveringType::Mosaic => mosaic::take_off(&inputs, area_m2, waste_pct, &mut items),
        CoveringType::Stone => stone::take_off(&inputs, area_m2, waste_pct, &mut items),
        CoveringType::Marble | CoveringType::Granite => {
            setting_method = Some(marble_granite::take_off(&inputs, area_m2, waste_pct, &mut items));
        }
        CoveringType::InterlockingPaver => pavers::take_off(&inputs, area_m2, waste_pct, &mut items),
        CoveringType::VinylFloor => vinyl::take_off(&inputs, area_m2, waste_pct, &mut items),
    }

    let baseboard_area_m2 = match covering {
        CoveringType::VinylFloor => vinyl::baseboard_area_m2(&inputs),
        _ => baseboard::display_area_m2(&inputs),
    };
    let header = ResultHeader {
        covering,
        environment,
        area_m2: round2(area_m2),
        joint_mm: effective_joint_mm(&inputs),
        thickness_mm: effective_thickness_mm(&inputs),
        waste_pct,
        baseboard_area_m2: baseboard_area_m2.map(round2),
        setting_method,
    };
    Ok(TakeoffResult { header, items })
}

//! # Form Validation
//!
//! The seven-step gate an input record must pass before the engine runs.
//! Each step returns a [`StepCheck`]; [`validate_all`] stops at the first
//! failing step and reports it as [`CalcError::ValidationFailed`].
//!
//! | # | Step          | Checks                                                   |
//! |---|---------------|----------------------------------------------------------|
//! | 1 | Covering      | covering selected, tile material for floor tiles         |
//! | 2 | Environment   | environment selected                                     |
//! | 3 | Traffic       | traffic class (interlocking pavers only)                 |
//! | 4 | Area          | a resolvable net area within 0.01–50000 m²               |
//! | 5 | Pieces        | piece size, thickness, joint, waste per covering         |
//! | 6 | Baseboard     | height, ready-made piece length and perimeter            |
//! | 7 | Waterproofing | sealer type for pavers in wet areas                      |
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::inputs::{CoveringType, Environment, Inputs};
//! use takeoff_core::validation::{validate_all, validate_step, ValidationStep};
//!
//! let mut inputs = Inputs::new(CoveringType::Stone, Environment::Dry);
//! assert!(!validate_step(ValidationStep::Area, &inputs).ok);
//!
//! inputs.area_override_m2 = Some(20.0);
//! assert!(validate_all(&inputs).is_ok());
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::calculations::{area, baseboard};
use crate::errors::{CalcError, CalcResult};
use crate::inputs::{positive, BaseboardMaterial, CoveringType, Inputs, Traffic};
use crate::specs::covering::{effective_joint_mm, effective_thickness_mm, piece_dims_cm, selected_mosaic_format};

/// Net area accepted by the engine (m²)
pub const AREA_RANGE_M2: RangeInclusive<f64> = 0.01..=50_000.0;

/// Waste margin accepted for every covering (%)
pub const WASTE_RANGE_PCT: RangeInclusive<f64> = 0.0..=50.0;

/// Piece sides accepted for tiles, pavers and vinyl (cm)
pub const PIECE_SIDE_RANGE_CM: RangeInclusive<f64> = 5.0..=200.0;

/// Marble/granite sides after unit conversion (mm)
pub const STONE_SIDE_RANGE_MM: RangeInclusive<f64> = 10.0..=2000.1;

/// Paver thickness (mm)
pub const PAVER_THICKNESS_RANGE_MM: RangeInclusive<f64> = 40.0..=120.0;

/// Joint width for tiles and stone (mm)
pub const JOINT_RANGE_MM: RangeInclusive<f64> = 0.5..=20.0;

/// Joint width for mosaics (mm)
pub const MOSAIC_JOINT_RANGE_MM: RangeInclusive<f64> = 1.0..=5.0;

/// Baseboard height (cm)
pub const BASEBOARD_HEIGHT_RANGE_CM: RangeInclusive<f64> = 3.0..=30.0;

/// Ready-made baseboard piece length (cm)
pub const BASEBOARD_PIECE_RANGE_CM: RangeInclusive<f64> = 5.0..=300.0;

/// Vinyl leveling coats
pub const LEVELING_COATS_RANGE: RangeInclusive<u32> = 1..=4;

/// One step of the form gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStep {
    Covering,
    Environment,
    Traffic,
    Area,
    Pieces,
    Baseboard,
    Waterproofing,
}

impl ValidationStep {
    /// All steps, in the order the form presents them
    pub const ALL: [ValidationStep; 7] = [
        ValidationStep::Covering,
        ValidationStep::Environment,
        ValidationStep::Traffic,
        ValidationStep::Area,
        ValidationStep::Pieces,
        ValidationStep::Baseboard,
        ValidationStep::Waterproofing,
    ];

    /// 1-based position in the form
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).map_or(0, |i| i + 1)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ValidationStep::Covering => "covering",
            ValidationStep::Environment => "environment",
            ValidationStep::Traffic => "traffic",
            ValidationStep::Area => "area",
            ValidationStep::Pieces => "pieces",
            ValidationStep::Baseboard => "baseboard",
            ValidationStep::Waterproofing => "waterproofing",
        }
    }
}

impl std::fmt::Display for ValidationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number(), self.display_name())
    }
}

/// Outcome of one validation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCheck {
    pub ok: bool,
    /// What to fix, when the step failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StepCheck {
    pub fn pass() -> Self {
        StepCheck { ok: true, message: None }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        StepCheck {
            ok: false,
            message: Some(message.into()),
        }
    }
}

type Check = Result<(), String>;

fn in_range(value: f64, range: &RangeInclusive<f64>) -> bool {
    value.is_finite() && range.contains(&value)
}

fn range_text(range: &RangeInclusive<f64>) -> String {
    format!("{} and {}", range.start(), range.end())
}

/// Run one step.
pub fn validate_step(step: ValidationStep, inputs: &Inputs) -> StepCheck {
    let result = match step {
        ValidationStep::Covering => check_covering(inputs),
        ValidationStep::Environment => check_environment(inputs),
        ValidationStep::Traffic => check_traffic(inputs),
        ValidationStep::Area => check_area(inputs),
        ValidationStep::Pieces => check_pieces(inputs),
        ValidationStep::Baseboard => check_baseboard(inputs),
        ValidationStep::Waterproofing => check_waterproofing(inputs),
    };
    match result {
        Ok(()) => StepCheck::pass(),
        Err(message) => StepCheck::fail(message),
    }
}

/// Run every step and collect the results, failed ones included.
pub fn check_all(inputs: &Inputs) -> Vec<(ValidationStep, StepCheck)> {
    ValidationStep::ALL
        .iter()
        .map(|step| (*step, validate_step(*step, inputs)))
        .collect()
}

/// Run the steps in order and return the first failure.
pub fn validate_all(inputs: &Inputs) -> CalcResult<()> {
    for step in ValidationStep::ALL {
        let check = validate_step(step, inputs);
        if !check.ok {
            return Err(CalcError::validation_failed(step, check.message.unwrap_or_default()));
        }
    }
    Ok(())
}

fn check_covering(inputs: &Inputs) -> Check {
    match inputs.covering {
        None => Err("Select a covering type".into()),
        Some(CoveringType::Floor) if inputs.tile_material.is_none() => {
            Err("Select ceramic or porcelain for the floor tile".into())
        }
        Some(_) => Ok(()),
    }
}

fn check_environment(inputs: &Inputs) -> Check {
    inputs
        .environment
        .map(|_| ())
        .ok_or_else(|| "Select an environment".into())
}

fn check_traffic(inputs: &Inputs) -> Check {
    if inputs.covering == Some(CoveringType::InterlockingPaver) && inputs.traffic.is_none() {
        return Err("Select a traffic class".into());
    }
    Ok(())
}

fn check_area(inputs: &Inputs) -> Check {
    let range_message = || format!("Area must be between {} m²", range_text(&AREA_RANGE_M2));

    if let Some(direct) = positive(inputs.area_override_m2) {
        if !in_range(direct, &AREA_RANGE_M2) {
            return Err(range_message());
        }
    } else if inputs.is_wall_mode() {
        if positive(inputs.length_m).is_none() || positive(inputs.height_m).is_none() {
            return Err("Enter the wall length and height".into());
        }
        match inputs.wall_count {
            Some(n) if area::WALL_COUNT_RANGE.contains(&n) => {}
            _ => return Err("Wall count must be between 1 and 20".into()),
        }
    } else if positive(inputs.length_m).is_none() || positive(inputs.width_m).is_none() {
        return Err("Enter length and width, or the total area".into());
    }

    if inputs.opening_m2.is_some_and(|o| !o.is_finite() || o < 0.0) {
        return Err("Opening cannot be negative".into());
    }
    match area::area_base_m2(inputs) {
        Some(net) if in_range(net, &AREA_RANGE_M2) => Ok(()),
        Some(_) => Err(range_message()),
        None => Err("Opening must be smaller than the area".into()),
    }
}

fn check_waste(inputs: &Inputs) -> Check {
    match inputs.waste_pct {
        Some(waste) if !in_range(waste, &WASTE_RANGE_PCT) => {
            Err(format!("Waste must be between {}%", range_text(&WASTE_RANGE_PCT)))
        }
        _ => Ok(()),
    }
}

fn check_sides_cm(inputs: &Inputs, required: bool) -> Check {
    match piece_dims_cm(inputs) {
        Some((length, width)) => {
            if in_range(length, &PIECE_SIDE_RANGE_CM) && in_range(width, &PIECE_SIDE_RANGE_CM) {
                Ok(())
            } else {
                Err(format!("Piece sides must be between {} cm", range_text(&PIECE_SIDE_RANGE_CM)))
            }
        }
        None if required => Err("Enter the piece length and width".into()),
        None => Ok(()),
    }
}

fn check_joint(inputs: &Inputs, range: &RangeInclusive<f64>) -> Check {
    match effective_joint_mm(inputs) {
        Some(joint) if in_range(joint, range) => Ok(()),
        _ => Err(format!("Joint must be between {} mm", range_text(range))),
    }
}

fn check_pieces(inputs: &Inputs) -> Check {
    check_waste(inputs)?;
    let Some(covering) = inputs.covering else {
        return Ok(());
    };
    match covering {
        CoveringType::InterlockingPaver => {
            check_sides_cm(inputs, true)?;
            match effective_thickness_mm(inputs) {
                Some(t) if in_range(t, &PAVER_THICKNESS_RANGE_MM) => Ok(()),
                _ => Err(format!(
                    "Paver thickness must be between {} mm",
                    range_text(&PAVER_THICKNESS_RANGE_MM)
                )),
            }
        }
        CoveringType::Mosaic => {
            if selected_mosaic_format(inputs).is_none() {
                return Err("Select a mosaic format".into());
            }
            check_joint(inputs, &MOSAIC_JOINT_RANGE_MM)
        }
        CoveringType::Stone => check_joint(inputs, &JOINT_RANGE_MM),
        CoveringType::Marble | CoveringType::Granite => {
            check_joint(inputs, &JOINT_RANGE_MM)?;
            let Some((length, width)) = piece_dims_cm(inputs) else {
                return Err("Enter the piece length and width".into());
            };
            if in_range(length * 10.0, &STONE_SIDE_RANGE_MM) && in_range(width * 10.0, &STONE_SIDE_RANGE_MM) {
                Ok(())
            } else {
                Err(format!("Piece sides must be between {} mm", range_text(&STONE_SIDE_RANGE_MM)))
            }
        }
        CoveringType::Floor | CoveringType::WallTile => {
            check_sides_cm(inputs, true)?;
            check_joint(inputs, &JOINT_RANGE_MM)
        }
        CoveringType::VinylFloor => {
            check_sides_cm(inputs, false)?;
            if inputs.vinyl_leveling_enabled {
                if inputs.vinyl_leveling_type.is_none() {
                    return Err("Select the leveling compound type".into());
                }
                match inputs.vinyl_leveling_coats {
                    Some(coats) if LEVELING_COATS_RANGE.contains(&coats) => {}
                    _ => return Err("Leveling coats must be between 1 and 4".into()),
                }
            }
            Ok(())
        }
    }
}

fn check_baseboard(inputs: &Inputs) -> Check {
    if !baseboard::is_active(inputs) {
        return Ok(());
    }
    match inputs.baseboard_height_cm {
        Some(h) if in_range(h, &BASEBOARD_HEIGHT_RANGE_CM) => {}
        _ => {
            return Err(format!(
                "Baseboard height must be between {} cm",
                range_text(&BASEBOARD_HEIGHT_RANGE_CM)
            ))
        }
    }
    if baseboard::material(inputs) == BaseboardMaterial::ReadyPiece {
        match baseboard::ready_piece_length_m(inputs) {
            Some(m) if in_range(m * 100.0, &BASEBOARD_PIECE_RANGE_CM) => {}
            _ => {
                return Err(format!(
                    "Baseboard piece length must be between {} cm",
                    range_text(&BASEBOARD_PIECE_RANGE_CM)
                ))
            }
        }
        if baseboard::purchase_perimeter_m(inputs).is_none() {
            return Err("Enter the baseboard perimeter".into());
        }
    }
    Ok(())
}

fn check_waterproofing(inputs: &Inputs) -> Check {
    let needs_sealer = inputs.covering == Some(CoveringType::InterlockingPaver)
        && inputs.environment.is_some_and(|env| env.is_wet())
        && matches!(inputs.traffic, Some(Traffic::Light | Traffic::Medium))
        && inputs.waterproofing_enabled;
    if needs_sealer && inputs.paver_sealer.is_none() {
        return Err("Select the paver sealer type".into());
    }
    Ok(())
}

//! Covering specifications
//!
//! Default joint width and thickness per covering, material, application and
//! environment; the mosaic formats sold on sheets; which coverings take a
//! baseboard. Values used when the form leaves a field empty.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::inputs::{positive, Application, CoveringType, Environment, Inputs, TileMaterial};
use crate::units::piece_side;

// ============================================================================
// Mosaic formats
// ============================================================================

/// A mosaic format: piece size, sheet size and default thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MosaicFormat {
    /// Code used by the form (`pastilhaFormato`)
    pub code: &'static str,
    pub piece_length_cm: f64,
    pub piece_width_cm: f64,
    pub sheet_length_cm: f64,
    pub sheet_width_cm: f64,
    pub thickness_mm: f64,
}

impl MosaicFormat {
    /// Sheet area in m²
    pub fn sheet_area_m2(&self) -> f64 {
        self.sheet_length_cm * self.sheet_width_cm / 10_000.0
    }

    /// Single piece area in m²
    pub fn piece_area_m2(&self) -> f64 {
        self.piece_length_cm * self.piece_width_cm / 10_000.0
    }

    /// Whole pieces mounted on one sheet, at least one
    pub fn pieces_per_sheet(&self) -> u64 {
        let ratio = self.sheet_area_m2() / self.piece_area_m2();
        ((ratio + 1e-9).floor() as u64).max(1)
    }
}

/// The eleven supported mosaic formats.
pub const MOSAIC_FORMATS: [MosaicFormat; 11] = [
    mosaic("1x1", 1.0, 1.0, 30.0, 30.0, 4.0),
    mosaic("1.5x1.5", 1.5, 1.5, 30.0, 30.0, 4.0),
    mosaic("2x2", 2.0, 2.0, 30.0, 30.0, 4.0),
    mosaic("2.3x2.3", 2.3, 2.3, 31.5, 31.5, 5.0),
    mosaic("2.5x2.5", 2.5, 2.5, 31.5, 31.5, 5.0),
    mosaic("2.5x5", 2.5, 5.0, 31.0, 31.0, 5.0),
    mosaic("3x3", 3.0, 3.0, 31.0, 31.0, 5.0),
    mosaic("4x4", 4.0, 4.0, 31.0, 31.0, 6.0),
    mosaic("5x5", 5.0, 5.0, 31.0, 31.0, 6.0),
    mosaic("5x10", 5.0, 10.0, 31.0, 31.0, 6.0),
    mosaic("10x10", 10.0, 10.0, 31.0, 31.0, 6.0),
];

const fn mosaic(
    code: &'static str,
    piece_length_cm: f64,
    piece_width_cm: f64,
    sheet_length_cm: f64,
    sheet_width_cm: f64,
    thickness_mm: f64,
) -> MosaicFormat {
    MosaicFormat {
        code,
        piece_length_cm,
        piece_width_cm,
        sheet_length_cm,
        sheet_width_cm,
        thickness_mm,
    }
}

static MOSAIC_INDEX: Lazy<HashMap<&'static str, &'static MosaicFormat>> =
    Lazy::new(|| MOSAIC_FORMATS.iter().map(|f| (f.code, f)).collect());

/// Look up a mosaic format by code. Spaces are ignored and `,` reads as `.`.
///
/// ```rust
/// use takeoff_core::specs::covering::mosaic_format;
///
/// let format = mosaic_format("2x2").unwrap();
/// assert_eq!(format.pieces_per_sheet(), 225);
/// assert!(mosaic_format("2,5 x 2,5").is_ok());
/// assert!(mosaic_format("7x7").is_err());
/// ```
pub fn mosaic_format(code: &str) -> CalcResult<&'static MosaicFormat> {
    let normalized = code.trim().to_lowercase().replace(' ', "").replace(',', ".");
    MOSAIC_INDEX
        .get(normalized.as_str())
        .copied()
        .ok_or_else(|| CalcError::format_not_found(code))
}

// ============================================================================
// Defaults
// ============================================================================

/// Default joint width in mm. `None` for coverings laid without joints.
pub fn default_joint_mm(
    covering: CoveringType,
    material: Option<TileMaterial>,
    application: Application,
    environment: Environment,
) -> Option<f64> {
    let outdoor = environment == Environment::AlwaysWet;
    let joint = match covering {
        CoveringType::Floor => match (material.unwrap_or(TileMaterial::Ceramic), outdoor) {
            (TileMaterial::Ceramic, false) => 3.0,
            (TileMaterial::Ceramic, true) => 4.0,
            (TileMaterial::Porcelain, false) => 2.0,
            (TileMaterial::Porcelain, true) => 3.0,
        },
        CoveringType::WallTile => match material.unwrap_or(TileMaterial::Ceramic) {
            TileMaterial::Ceramic => 2.0,
            TileMaterial::Porcelain => 1.5,
        },
        CoveringType::Mosaic => 2.0,
        CoveringType::Stone => 10.0,
        CoveringType::InterlockingPaver => 3.0,
        CoveringType::Marble | CoveringType::Granite => match (application, outdoor) {
            (Application::Wall, _) => 1.5,
            (Application::Floor, false) => 2.0,
            (Application::Floor, true) => 3.0,
        },
        CoveringType::VinylFloor => return None,
    };
    Some(joint)
}

/// Default piece thickness in mm.
pub fn default_thickness_mm(
    covering: CoveringType,
    material: Option<TileMaterial>,
    application: Application,
    environment: Environment,
) -> f64 {
    match covering {
        CoveringType::Floor => match material.unwrap_or(TileMaterial::Ceramic) {
            TileMaterial::Ceramic => 8.0,
            TileMaterial::Porcelain => 9.0,
        },
        CoveringType::WallTile => match material.unwrap_or(TileMaterial::Ceramic) {
            TileMaterial::Ceramic => 7.0,
            TileMaterial::Porcelain => 8.0,
        },
        CoveringType::Mosaic => 5.0,
        CoveringType::Stone => 20.0,
        CoveringType::InterlockingPaver => 60.0,
        CoveringType::Marble | CoveringType::Granite => {
            if application == Application::Floor && environment == Environment::AlwaysWet {
                30.0
            } else {
                20.0
            }
        }
        CoveringType::VinylFloor => 3.0,
    }
}

/// Whether the form shows the baseboard step for this covering.
pub fn supports_baseboard(covering: CoveringType, application: Application) -> bool {
    match covering {
        CoveringType::Floor | CoveringType::Stone | CoveringType::VinylFloor => true,
        CoveringType::Marble | CoveringType::Granite => application == Application::Floor,
        CoveringType::WallTile | CoveringType::Mosaic | CoveringType::InterlockingPaver => false,
    }
}

// ============================================================================
// Effective values for an input record
// ============================================================================

/// Mosaic format selected in the record, if valid
pub fn selected_mosaic_format(inputs: &Inputs) -> Option<&'static MosaicFormat> {
    inputs
        .mosaic_format
        .as_deref()
        .and_then(|code| mosaic_format(code).ok())
}

/// Piece length and width in cm as the calculators see them.
///
/// Mosaics take the size from their format; marble and granite sides go
/// through the m/cm/mm heuristic; everything else is read as cm.
pub fn piece_dims_cm(inputs: &Inputs) -> Option<(f64, f64)> {
    match inputs.covering? {
        CoveringType::Mosaic => {
            selected_mosaic_format(inputs).map(|f| (f.piece_length_cm, f.piece_width_cm))
        }
        CoveringType::Marble | CoveringType::Granite => {
            let length = positive(inputs.piece_length_cm)?;
            let width = positive(inputs.piece_width_cm)?;
            Some((piece_side(length).0, piece_side(width).0))
        }
        _ => Some((positive(inputs.piece_length_cm)?, positive(inputs.piece_width_cm)?)),
    }
}

/// Longest piece side in cm
pub fn longest_side_cm(inputs: &Inputs) -> Option<f64> {
    piece_dims_cm(inputs).map(|(l, w)| l.max(w))
}

/// Joint width in mm: typed value, else the default for the covering
pub fn effective_joint_mm(inputs: &Inputs) -> Option<f64> {
    if let Some(joint) = inputs.joint_mm.filter(|v| v.is_finite()) {
        return Some(joint);
    }
    default_joint_mm(
        inputs.covering?,
        inputs.tile_material_or_default(),
        inputs.application_or_default(),
        inputs.environment?,
    )
}

/// Thickness in mm: typed value, else the mosaic format's, else the default
pub fn effective_thickness_mm(inputs: &Inputs) -> Option<f64> {
    if let Some(thickness) = positive(inputs.piece_thickness_mm) {
        return Some(thickness);
    }
    if inputs.covering? == CoveringType::Mosaic {
        if let Some(format) = selected_mosaic_format(inputs) {
            return Some(format.thickness_mm);
        }
    }
    Some(default_thickness_mm(
        inputs.covering?,
        inputs.tile_material_or_default(),
        inputs.application_or_default(),
        inputs.environment?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eleven_unique_formats() {
        assert_eq!(MOSAIC_FORMATS.len(), 11);
        assert_eq!(MOSAIC_INDEX.len(), 11);
    }

    #[test]
    fn test_pieces_per_sheet() {
        assert_eq!(mosaic_format("1x1").unwrap().pieces_per_sheet(), 900);
        assert_eq!(mosaic_format("10x10").unwrap().pieces_per_sheet(), 9);
        // 31.5² / 2.3² = 187.57 -> 187
        assert_eq!(mosaic_format("2.3x2.3").unwrap().pieces_per_sheet(), 187);
    }

    #[test]
    fn test_default_joint() {
        assert_eq!(
            default_joint_mm(CoveringType::Floor, Some(TileMaterial::Ceramic), Application::Floor, Environment::Dry),
            Some(3.0)
        );
        assert_eq!(
            default_joint_mm(CoveringType::Marble, None, Application::Wall, Environment::AlwaysWet),
            Some(1.5)
        );
        assert_eq!(
            default_joint_mm(CoveringType::VinylFloor, None, Application::Floor, Environment::Dry),
            None
        );
    }

    #[test]
    fn test_default_thickness() {
        assert_eq!(
            default_thickness_mm(CoveringType::InterlockingPaver, None, Application::Floor, Environment::Dry),
            60.0
        );
        assert_eq!(
            default_thickness_mm(CoveringType::Granite, None, Application::Floor, Environment::AlwaysWet),
            30.0
        );
    }

    #[test]
    fn test_supports_baseboard() {
        assert!(supports_baseboard(CoveringType::Floor, Application::Floor));
        assert!(!supports_baseboard(CoveringType::WallTile, Application::Floor));
        assert!(!supports_baseboard(CoveringType::Marble, Application::Wall));
        assert!(supports_baseboard(CoveringType::Granite, Application::Floor));
    }

    #[test]
    fn test_effective_values() {
        let mut inputs = Inputs::new(CoveringType::Mosaic, Environment::Wet);
        inputs.mosaic_format = Some("5x5".to_string());
        assert_eq!(piece_dims_cm(&inputs), Some((5.0, 5.0)));
        assert_eq!(effective_thickness_mm(&inputs), Some(6.0));
        assert_eq!(effective_joint_mm(&inputs), Some(2.0));

        inputs.joint_mm = Some(3.0);
        inputs.piece_thickness_mm = Some(4.0);
        assert_eq!(effective_joint_mm(&inputs), Some(3.0));
        assert_eq!(effective_thickness_mm(&inputs), Some(4.0));
    }

    #[test]
    fn test_marble_dims_normalized() {
        let mut inputs = Inputs::new(CoveringType::Marble, Environment::Dry);
        inputs.piece_length_cm = Some(600.0);
        inputs.piece_width_cm = Some(0.3);
        let (l, w) = piece_dims_cm(&inputs).unwrap();
        assert!((l - 60.0).abs() < 1e-9);
        assert!((w - 30.0).abs() < 1e-9);
    }
}

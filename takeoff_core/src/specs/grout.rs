//! Grout specifications
//!
//! Grout type selection (cementitious Type 1, Type 2 or epoxy, NBR 14992)
//! keyed by environment × material × piece size, and the joint-volume
//! consumption formula:
//!
//! ```text
//! kg/m² = (C + L) / (C × L) × E × J × ρ
//! ```
//!
//! with piece length `C`, width `L`, thickness `E` and joint `J` in mm and the
//! grout density `ρ` in kg/dm³.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::inputs::{CoveringType, Environment, Inputs, TileMaterial};

/// Pack size for grout (kg)
pub const PACK_KG: f64 = 1.0;

/// Grout product family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroutType {
    CementitiousType1,
    CementitiousType2,
    Epoxy,
}

impl GroutType {
    /// Density of the cured grout (kg/dm³)
    pub fn density(&self) -> f64 {
        match self {
            GroutType::CementitiousType1 | GroutType::CementitiousType2 => 1.58,
            GroutType::Epoxy => 1.65,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GroutType::CementitiousType1 => "Cementitious grout type 1",
            GroutType::CementitiousType2 => "Cementitious grout type 2",
            GroutType::Epoxy => "Epoxy grout",
        }
    }
}

/// Material column of the grout matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroutMaterial {
    Ceramic,
    Porcelain,
    Mosaic,
    NaturalStone,
}

impl GroutMaterial {
    /// Matrix column for a record; `None` for coverings without grout
    pub fn for_inputs(inputs: &Inputs) -> Option<Self> {
        match inputs.covering? {
            CoveringType::Floor | CoveringType::WallTile => {
                match inputs.tile_material_or_default().unwrap_or(TileMaterial::Ceramic) {
                    TileMaterial::Ceramic => Some(GroutMaterial::Ceramic),
                    TileMaterial::Porcelain => Some(GroutMaterial::Porcelain),
                }
            }
            CoveringType::Mosaic => Some(GroutMaterial::Mosaic),
            CoveringType::Stone | CoveringType::Marble | CoveringType::Granite => {
                Some(GroutMaterial::NaturalStone)
            }
            CoveringType::InterlockingPaver | CoveringType::VinylFloor => None,
        }
    }
}

/// Piece size row of the grout matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceSize {
    /// Longest side under 30 cm
    Small,
    /// 30 cm up to 60 cm (exclusive)
    Medium,
    /// 60 cm and above
    Large,
}

impl PieceSize {
    pub fn from_longest_side_cm(side_cm: f64) -> Self {
        if side_cm < 30.0 {
            PieceSize::Small
        } else if side_cm < 60.0 {
            PieceSize::Medium
        } else {
            PieceSize::Large
        }
    }
}

use Environment::{AlwaysWet, Dry, SemiWet, Wet};
use GroutMaterial::{Ceramic, Mosaic, NaturalStone, Porcelain};
use GroutType::{CementitiousType1 as T1, CementitiousType2 as T2, Epoxy as EP};
use PieceSize::{Large, Medium, Small};

/// Environment × material × size → grout type
const GROUT_MATRIX: [(Environment, GroutMaterial, PieceSize, GroutType); 48] = [
    // Dry
    (Dry, Ceramic, Small, T1),
    (Dry, Ceramic, Medium, T1),
    (Dry, Ceramic, Large, T1),
    (Dry, Porcelain, Small, T2),
    (Dry, Porcelain, Medium, T2),
    (Dry, Porcelain, Large, T2),
    (Dry, Mosaic, Small, T2),
    (Dry, Mosaic, Medium, T2),
    (Dry, Mosaic, Large, T2),
    (Dry, NaturalStone, Small, T2),
    (Dry, NaturalStone, Medium, T2),
    (Dry, NaturalStone, Large, T2),
    // Semi-wet
    (SemiWet, Ceramic, Small, T1),
    (SemiWet, Ceramic, Medium, T1),
    (SemiWet, Ceramic, Large, T2),
    (SemiWet, Porcelain, Small, T2),
    (SemiWet, Porcelain, Medium, T2),
    (SemiWet, Porcelain, Large, T2),
    (SemiWet, Mosaic, Small, T2),
    (SemiWet, Mosaic, Medium, T2),
    (SemiWet, Mosaic, Large, T2),
    (SemiWet, NaturalStone, Small, T2),
    (SemiWet, NaturalStone, Medium, T2),
    (SemiWet, NaturalStone, Large, T2),
    // Wet
    (Wet, Ceramic, Small, T2),
    (Wet, Ceramic, Medium, T2),
    (Wet, Ceramic, Large, T2),
    (Wet, Porcelain, Small, T2),
    (Wet, Porcelain, Medium, T2),
    (Wet, Porcelain, Large, T2),
    (Wet, Mosaic, Small, EP),
    (Wet, Mosaic, Medium, EP),
    (Wet, Mosaic, Large, EP),
    (Wet, NaturalStone, Small, T2),
    (Wet, NaturalStone, Medium, T2),
    (Wet, NaturalStone, Large, T2),
    // Always wet
    (AlwaysWet, Ceramic, Small, T2),
    (AlwaysWet, Ceramic, Medium, T2),
    (AlwaysWet, Ceramic, Large, T2),
    (AlwaysWet, Porcelain, Small, EP),
    (AlwaysWet, Porcelain, Medium, EP),
    (AlwaysWet, Porcelain, Large, EP),
    (AlwaysWet, Mosaic, Small, EP),
    (AlwaysWet, Mosaic, Medium, EP),
    (AlwaysWet, Mosaic, Large, EP),
    (AlwaysWet, NaturalStone, Small, T2),
    (AlwaysWet, NaturalStone, Medium, T2),
    (AlwaysWet, NaturalStone, Large, EP),
];

static GROUT_INDEX: Lazy<HashMap<(Environment, GroutMaterial, PieceSize), GroutType>> = Lazy::new(|| {
    GROUT_MATRIX
        .iter()
        .map(|(env, material, size, grout)| ((*env, *material, *size), *grout))
        .collect()
});

/// Grout type for a cell of the matrix
pub fn classify(environment: Environment, material: GroutMaterial, size: PieceSize) -> GroutType {
    GROUT_INDEX
        .get(&(environment, material, size))
        .copied()
        .unwrap_or(GroutType::CementitiousType2)
}

/// Grout consumption (kg/m²) for a rectangular piece.
///
/// ```rust
/// use takeoff_core::specs::grout::{consumption_kg_m2, GroutType};
///
/// // 45x45 cm, 8 mm thick, 3 mm joint
/// let kg = consumption_kg_m2(45.0, 45.0, 8.0, 3.0, GroutType::CementitiousType1);
/// assert!((kg - 0.16853).abs() < 1e-4);
/// ```
pub fn consumption_kg_m2(
    length_cm: f64,
    width_cm: f64,
    thickness_mm: f64,
    joint_mm: f64,
    grout: GroutType,
) -> f64 {
    let c = length_cm * 10.0;
    let l = width_cm * 10.0;
    if c <= 0.0 || l <= 0.0 || thickness_mm <= 0.0 || joint_mm <= 0.0 {
        return 0.0;
    }
    (c + l) / (c * l) * thickness_mm * joint_mm * grout.density()
}

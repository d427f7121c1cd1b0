//! # Input Record
//!
//! The single record the form layer fills step by step and hands to the
//! engine. Every field is optional; the [`validation`](crate::validation)
//! gate decides whether a record is complete enough to calculate.
//!
//! Field names are English in Rust, while the JSON keys stay the ones the form
//! layer already produces (`revest`, `ambiente`, `compM`, ...), so a record
//! saved by the UI deserializes unchanged.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "revest": "FLOOR",
//!   "ambiente": "DRY",
//!   "pisoPlacaTipo": "CERAMIC",
//!   "compM": 3.0,
//!   "largM": 4.0,
//!   "pecaCompCm": 45.0,
//!   "pecaLargCm": 45.0,
//!   "juntaMm": 3.0,
//!   "sobraPct": 10.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Enumerations
// ============================================================================

/// Surface-covering category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoveringType {
    /// Ceramic or porcelain floor tiles
    Floor,
    /// Ceramic or porcelain wall tiles
    WallTile,
    /// Mosaic tiles mounted on sheets
    Mosaic,
    /// Irregular natural stone laid on a mortar bed
    Stone,
    /// Interlocking concrete pavers
    InterlockingPaver,
    Marble,
    Granite,
    /// Vinyl planks or tiles
    VinylFloor,
}

impl CoveringType {
    /// All covering variants for UI selection
    pub const ALL: [CoveringType; 8] = [
        CoveringType::Floor,
        CoveringType::WallTile,
        CoveringType::Mosaic,
        CoveringType::Stone,
        CoveringType::InterlockingPaver,
        CoveringType::Marble,
        CoveringType::Granite,
        CoveringType::VinylFloor,
    ];

    /// Parse from common string representations (English or Portuguese)
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '-'], "_").as_str() {
            "FLOOR" | "PISO" | "PISO_CERAMICO" => Ok(CoveringType::Floor),
            "WALL_TILE" | "WALL" | "AZULEJO" | "REVESTIMENTO_PAREDE" => Ok(CoveringType::WallTile),
            "MOSAIC" | "PASTILHA" => Ok(CoveringType::Mosaic),
            "STONE" | "PEDRA" => Ok(CoveringType::Stone),
            "INTERLOCKING_PAVER" | "PAVER" | "PISO_INTERTRAVADO" | "INTERTRAVADO" => {
                Ok(CoveringType::InterlockingPaver)
            }
            "MARBLE" | "MARMORE" | "MÁRMORE" => Ok(CoveringType::Marble),
            "GRANITE" | "GRANITO" => Ok(CoveringType::Granite),
            "VINYL_FLOOR" | "VINYL" | "PISO_VINILICO" | "VINILICO" => Ok(CoveringType::VinylFloor),
            _ => Err(CalcError::invalid_input("revest", s, "Unknown covering type")),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            CoveringType::Floor => "Floor tile",
            CoveringType::WallTile => "Wall tile",
            CoveringType::Mosaic => "Mosaic",
            CoveringType::Stone => "Natural stone",
            CoveringType::InterlockingPaver => "Interlocking paver",
            CoveringType::Marble => "Marble",
            CoveringType::Granite => "Granite",
            CoveringType::VinylFloor => "Vinyl floor",
        }
    }

    /// Marble and granite share one calculator and one set of rules
    pub fn is_marble_or_granite(&self) -> bool {
        matches!(self, CoveringType::Marble | CoveringType::Granite)
    }
}

impl std::fmt::Display for CoveringType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Moisture-exposure class of the area being covered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Environment {
    /// Bedrooms, living rooms, offices
    Dry,
    /// Kitchens, laundries, covered balconies
    SemiWet,
    /// Bathrooms and shower stalls
    Wet,
    /// Pools, saunas, uncovered external areas
    AlwaysWet,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Dry,
        Environment::SemiWet,
        Environment::Wet,
        Environment::AlwaysWet,
    ];

    /// Parse from common string representations (English or Portuguese)
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '-'], "_").as_str() {
            "DRY" | "SECO" => Ok(Environment::Dry),
            "SEMI_WET" | "SEMIWET" | "SEMI_MOLHADO" | "UMIDO" => Ok(Environment::SemiWet),
            "WET" | "MOLHADO" => Ok(Environment::Wet),
            "ALWAYS_WET" | "SEMPRE_MOLHADO" | "PISCINA" => Ok(Environment::AlwaysWet),
            _ => Err(CalcError::invalid_input("ambiente", s, "Unknown environment")),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Environment::Dry => "Dry",
            Environment::SemiWet => "Semi-wet",
            Environment::Wet => "Wet",
            Environment::AlwaysWet => "Always wet",
        }
    }

    /// Wet and always-wet areas
    pub fn is_wet(&self) -> bool {
        matches!(self, Environment::Wet | Environment::AlwaysWet)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Surface the covering is applied to (marble and granite only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Application {
    Wall,
    #[default]
    Floor,
}

/// Body material of floor, wall and mosaic tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TileMaterial {
    Ceramic,
    Porcelain,
}

impl TileMaterial {
    pub fn display_name(&self) -> &'static str {
        match self {
            TileMaterial::Ceramic => "Ceramic",
            TileMaterial::Porcelain => "Porcelain",
        }
    }
}

/// Traffic class of an interlocking paver area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Traffic {
    /// Pedestrians, bicycles
    Light,
    /// Cars and light vehicles
    Medium,
    /// Trucks and buses
    Heavy,
}

impl Traffic {
    pub fn display_name(&self) -> &'static str {
        match self {
            Traffic::Light => "light",
            Traffic::Medium => "medium",
            Traffic::Heavy => "heavy",
        }
    }
}

/// Where the baseboard strip comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BaseboardMaterial {
    /// Strips cut from the covering pieces
    SamePiece,
    /// Ready-made commercial profile
    ReadyPiece,
}

/// Leveling compound grade for vinyl floors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LevelingType {
    /// Coarse compound for larger unevenness
    Thick,
    /// Fine skim coat
    Thin,
}

/// Surface sealer for interlocking pavers in wet areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaverSealer {
    /// Film-forming acrylic resin
    AcrylicResin,
    /// Penetrating silane/siloxane water repellent
    WaterRepellent,
}

// ============================================================================
// Input Record
// ============================================================================

/// Everything the form layer collects for one area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inputs {
    #[serde(rename = "revest")]
    pub covering: Option<CoveringType>,
    #[serde(rename = "ambiente")]
    pub environment: Option<Environment>,
    #[serde(rename = "aplicacao")]
    pub application: Option<Application>,
    #[serde(rename = "pisoPlacaTipo")]
    pub tile_material: Option<TileMaterial>,

    // Room geometry
    #[serde(rename = "compM")]
    pub length_m: Option<f64>,
    #[serde(rename = "largM")]
    pub width_m: Option<f64>,
    #[serde(rename = "altM")]
    pub height_m: Option<f64>,
    #[serde(rename = "paredeQtd")]
    pub wall_count: Option<u32>,
    #[serde(rename = "aberturaM2")]
    pub opening_m2: Option<f64>,
    #[serde(rename = "areaInformadaM2")]
    pub area_override_m2: Option<f64>,

    // Piece geometry
    #[serde(rename = "pecaCompCm")]
    pub piece_length_cm: Option<f64>,
    #[serde(rename = "pecaLargCm")]
    pub piece_width_cm: Option<f64>,
    #[serde(rename = "pecaEspMm")]
    pub piece_thickness_mm: Option<f64>,
    #[serde(rename = "pecasPorCaixa")]
    pub pieces_per_box: Option<u32>,
    #[serde(rename = "juntaMm")]
    pub joint_mm: Option<f64>,
    #[serde(rename = "pastilhaFormato")]
    pub mosaic_format: Option<String>,

    // Baseboard
    #[serde(rename = "rodapeEnable")]
    pub baseboard_enabled: bool,
    #[serde(rename = "rodapeAlturaCm")]
    pub baseboard_height_cm: Option<f64>,
    #[serde(rename = "rodapeMaterial")]
    pub baseboard_material: Option<BaseboardMaterial>,
    #[serde(rename = "rodapeCompComercialM")]
    pub baseboard_piece_length_m: Option<f64>,
    #[serde(rename = "rodapePerimetroAuto")]
    pub baseboard_perimeter_auto: bool,
    #[serde(rename = "rodapePerimetroManualM")]
    pub baseboard_perimeter_manual_m: Option<f64>,
    #[serde(rename = "rodapeDescontarVaoM")]
    pub baseboard_opening_m: Option<f64>,

    // Other
    #[serde(rename = "sobraPct")]
    pub waste_pct: Option<f64>,
    #[serde(rename = "desnivelCm")]
    pub unevenness_cm: Option<f64>,
    #[serde(rename = "trafego")]
    pub traffic: Option<Traffic>,
    #[serde(rename = "impermeabilizacaoOn")]
    pub waterproofing_enabled: bool,
    #[serde(rename = "impIntertravadoTipo")]
    pub paver_sealer: Option<PaverSealer>,
    #[serde(rename = "pisoVinilicoAutoAdesivo")]
    pub vinyl_self_adhesive: bool,
    #[serde(rename = "pisoVinilicoDesnivelAtivo")]
    pub vinyl_leveling_enabled: bool,
    #[serde(rename = "pisoVinilicoDesnivelTipo")]
    pub vinyl_leveling_type: Option<LevelingType>,
    #[serde(rename = "pisoVinilicoQtdDemaos")]
    pub vinyl_leveling_coats: Option<u32>,
}

impl Default for Inputs {
    fn default() -> Self {
        Inputs {
            covering: None,
            environment: None,
            application: None,
            tile_material: None,
            length_m: None,
            width_m: None,
            height_m: None,
            wall_count: None,
            opening_m2: None,
            area_override_m2: None,
            piece_length_cm: None,
            piece_width_cm: None,
            piece_thickness_mm: None,
            pieces_per_box: None,
            joint_mm: None,
            mosaic_format: None,
            baseboard_enabled: false,
            baseboard_height_cm: None,
            baseboard_material: None,
            baseboard_piece_length_m: None,
            baseboard_perimeter_auto: true,
            baseboard_perimeter_manual_m: None,
            baseboard_opening_m: None,
            waste_pct: None,
            unevenness_cm: None,
            traffic: None,
            waterproofing_enabled: false,
            paver_sealer: None,
            vinyl_self_adhesive: false,
            vinyl_leveling_enabled: false,
            vinyl_leveling_type: None,
            vinyl_leveling_coats: None,
        }
    }
}

impl Inputs {
    /// Start a record for the given covering and environment.
    ///
    /// ```rust
    /// use takeoff_core::inputs::{CoveringType, Environment, Inputs};
    ///
    /// let inputs = Inputs::new(CoveringType::Floor, Environment::Dry);
    /// assert_eq!(inputs.covering, Some(CoveringType::Floor));
    /// assert!(inputs.baseboard_perimeter_auto);
    /// ```
    pub fn new(covering: CoveringType, environment: Environment) -> Self {
        Inputs {
            covering: Some(covering),
            environment: Some(environment),
            ..Default::default()
        }
    }

    /// Parse a record from the form layer's JSON
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Application, defaulting to floor
    pub fn application_or_default(&self) -> Application {
        self.application.unwrap_or_default()
    }

    /// Tile body material; wall tiles and mosaics default to ceramic
    pub fn tile_material_or_default(&self) -> Option<TileMaterial> {
        match (self.tile_material, self.covering) {
            (Some(material), _) => Some(material),
            (None, Some(CoveringType::WallTile | CoveringType::Mosaic)) => Some(TileMaterial::Ceramic),
            _ => None,
        }
    }

    /// Unevenness in cm, missing or negative read as flat
    pub fn unevenness_or_zero(&self) -> f64 {
        self.unevenness_cm.filter(|v| *v > 0.0).unwrap_or(0.0)
    }

    /// True when the covering is laid on walls (area from wall footprint)
    pub fn is_wall_mode(&self) -> bool {
        match self.covering {
            Some(CoveringType::WallTile | CoveringType::Mosaic) => true,
            Some(CoveringType::Marble | CoveringType::Granite) => {
                self.application_or_default() == Application::Wall
            }
            _ => false,
        }
    }
}

/// A strictly positive value, or `None`
pub(crate) fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_keys() {
        let json = r#"{
            "revest": "FLOOR",
            "ambiente": "DRY",
            "pisoPlacaTipo": "CERAMIC",
            "compM": 3.0,
            "largM": 4.0,
            "pecaCompCm": 45.0,
            "pecaLargCm": 45.0,
            "juntaMm": 3.0
        }"#;
        let inputs = Inputs::from_json(json).unwrap();
        assert_eq!(inputs.covering, Some(CoveringType::Floor));
        assert_eq!(inputs.environment, Some(Environment::Dry));
        assert_eq!(inputs.length_m, Some(3.0));
        assert_eq!(inputs.joint_mm, Some(3.0));
        assert!(inputs.baseboard_perimeter_auto);
        assert!(!inputs.baseboard_enabled);
    }

    #[test]
    fn test_covering_parsing() {
        assert_eq!(CoveringType::from_str_flexible("piso").unwrap(), CoveringType::Floor);
        assert_eq!(CoveringType::from_str_flexible("wall tile").unwrap(), CoveringType::WallTile);
        assert_eq!(CoveringType::from_str_flexible("Granito").unwrap(), CoveringType::Granite);
        assert!(CoveringType::from_str_flexible("carpet").is_err());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_flexible("semi-wet").unwrap(), Environment::SemiWet);
        assert_eq!(Environment::from_str_flexible("molhado").unwrap(), Environment::Wet);
        assert!(Environment::from_str_flexible("humid").is_err());
    }

    #[test]
    fn test_wall_mode() {
        let mut inputs = Inputs::new(CoveringType::Marble, Environment::Dry);
        assert!(!inputs.is_wall_mode());
        inputs.application = Some(Application::Wall);
        assert!(inputs.is_wall_mode());
        assert!(Inputs::new(CoveringType::Mosaic, Environment::Wet).is_wall_mode());
    }

    #[test]
    fn test_tile_material_default() {
        let wall = Inputs::new(CoveringType::WallTile, Environment::Wet);
        assert_eq!(wall.tile_material_or_default(), Some(TileMaterial::Ceramic));
        let floor = Inputs::new(CoveringType::Floor, Environment::Dry);
        assert_eq!(floor.tile_material_or_default(), None);
    }

    #[test]
    fn test_enum_serialization() {
        let json = serde_json::to_string(&CoveringType::InterlockingPaver).unwrap();
        assert_eq!(json, "\"INTERLOCKING_PAVER\"");
        let json = serde_json::to_string(&Environment::AlwaysWet).unwrap();
        assert_eq!(json, "\"ALWAYS_WET\"");
    }
}

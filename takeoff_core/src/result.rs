//! # Take-off Result
//!
//! Output records consumed by the reporting layer. A [`MaterialItem`] rounds
//! its quantity once, on construction, according to its [`Unit`]; the
//! report renderer shows `qtd` as is.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "header": {
//!     "covering": "FLOOR",
//!     "environment": "DRY",
//!     "area_m2": 12.0,
//!     "joint_mm": 3.0,
//!     "thickness_mm": 8.0,
//!     "waste_pct": 10.0
//!   },
//!   "itens": [
//!     { "item": "Ceramic floor tile 45x45 cm", "unid": "m²", "qtd": 13.2,
//!       "observacao": "4.94 pieces/m² · 66 pieces" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::format::{format_decimal, round_to, DecimalSeparator};
use crate::inputs::{CoveringType, Environment};

/// Unit of a line item. Fixes how many decimals the quantity keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "m²")]
    SquareMeters,
    #[serde(rename = "m³")]
    CubicMeters,
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "L")]
    Liters,
    #[serde(rename = "un")]
    Units,
    #[serde(rename = "sheets")]
    Sheets,
}

impl Unit {
    /// Decimal places kept by quantities in this unit
    pub fn decimals(&self) -> u32 {
        match self {
            Unit::Units | Unit::Sheets => 0,
            Unit::Kilograms | Unit::Liters => 1,
            Unit::SquareMeters | Unit::Meters => 2,
            Unit::CubicMeters => 3,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::SquareMeters => "m²",
            Unit::CubicMeters => "m³",
            Unit::Meters => "m",
            Unit::Kilograms => "kg",
            Unit::Liters => "L",
            Unit::Units => "un",
            Unit::Sheets => "sheets",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One line of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialItem {
    #[serde(rename = "item")]
    pub name: String,
    #[serde(rename = "unid")]
    pub unit: Unit,
    /// Pre-rounded quantity
    #[serde(rename = "qtd")]
    pub quantity: f64,
    #[serde(rename = "observacao", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MaterialItem {
    /// Build an item, rounding `quantity` to the unit's precision.
    ///
    /// Negative or non-finite quantities are clamped to zero.
    ///
    /// ```rust
    /// use takeoff_core::result::{MaterialItem, Unit};
    ///
    /// let item = MaterialItem::new("Adhesive mortar ACI", Unit::Kilograms, 79.20000000001);
    /// assert_eq!(item.quantity, 79.2);
    /// ```
    pub fn new(name: impl Into<String>, unit: Unit, quantity: f64) -> Self {
        let quantity = if quantity.is_finite() && quantity > 0.0 {
            round_to(quantity, unit.decimals())
        } else {
            0.0
        };
        MaterialItem {
            name: name.into(),
            unit,
            quantity,
            note: None,
        }
    }

    /// Attach an annotation
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Quantity as a display string with the unit's precision
    pub fn display_quantity(&self, separator: DecimalSeparator) -> String {
        format_decimal(self.quantity, self.unit.decimals(), separator)
    }
}

/// How marble or granite pieces are set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingMethod {
    /// Adhesive mortar on substrate and piece back, no bed
    DoubleGluing,
    /// Semi-dry sand/cement bed plus adhesive mortar
    SandCementBed,
}

/// Summary of what was calculated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultHeader {
    pub covering: CoveringType,
    pub environment: Environment,
    /// Net area the take-off was computed for (m²)
    pub area_m2: f64,
    /// Effective joint width (mm), when the covering has joints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joint_mm: Option<f64>,
    /// Effective piece thickness (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness_mm: Option<f64>,
    pub waste_pct: f64,
    /// Baseboard area for display (m²)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseboard_area_m2: Option<f64>,
    /// Marble/granite setting method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting_method: Option<SettingMethod>,
}

/// Complete take-off for one area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffResult {
    pub header: ResultHeader,
    #[serde(rename = "itens")]
    pub items: Vec<MaterialItem>,
}

impl TakeoffResult {
    /// Find an item by exact name
    pub fn item(&self, name: &str) -> Option<&MaterialItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Find the first item whose name starts with `prefix`
    pub fn item_starting_with(&self, prefix: &str) -> Option<&MaterialItem> {
        self.items.iter().find(|item| item.name.starts_with(prefix))
    }

    pub fn item_names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }
}

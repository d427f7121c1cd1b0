//! # Engine Settings
//!
//! Defaults the engine fills in before validating a record, and the decimal
//! separator used when quantities are printed. Loaded from `.toml` or `.json`.
//!
//! ## TOML Example
//!
//! ```toml
//! default_waste_pct = 12.0
//! default_tile_material = "PORCELAIN"
//! decimal_separator = "dot"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::format::DecimalSeparator;
use crate::inputs::{CoveringType, Inputs, TileMaterial};
use crate::validation::WASTE_RANGE_PCT;

/// Waste margin used when a record has none (%)
pub const DEFAULT_WASTE_PCT: f64 = 10.0;

/// Engine-wide defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Waste margin for records that leave `sobraPct` empty
    pub default_waste_pct: f64,
    /// Material assumed for floor tiles when the record has none
    pub default_tile_material: Option<TileMaterial>,
    /// Separator for printed quantities
    pub decimal_separator: DecimalSeparator,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            default_waste_pct: DEFAULT_WASTE_PCT,
            default_tile_material: None,
            decimal_separator: DecimalSeparator::Comma,
        }
    }
}

impl EngineSettings {
    /// Load settings from a `.toml` or `.json` file and validate them.
    pub fn load_from_file(path: &Path) -> CalcResult<Self> {
        let path_text = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CalcError::config_error(&path_text, format!("Failed to read config file: {}", e)))?;

        let settings: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| CalcError::config_error(&path_text, format!("Invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            Self::parse_toml(&content).map_err(|reason| CalcError::config_error(&path_text, reason))?
        } else {
            return Err(CalcError::config_error(&path_text, "Config file must be .json or .toml"));
        };

        settings
            .validate()
            .map_err(|reason| CalcError::config_error(&path_text, reason))?;
        debug!(path = %path_text, ?settings, "engine settings loaded");
        Ok(settings)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(content: &str) -> CalcResult<Self> {
        let settings = Self::parse_toml(content).map_err(|reason| CalcError::config_error("<inline>", reason))?;
        settings
            .validate()
            .map_err(|reason| CalcError::config_error("<inline>", reason))?;
        Ok(settings)
    }

    fn parse_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid TOML config: {}", e))
    }

    /// Check the values are usable.
    pub fn validate(&self) -> Result<(), String> {
        if !self.default_waste_pct.is_finite() || !WASTE_RANGE_PCT.contains(&self.default_waste_pct) {
            return Err(format!(
                "default_waste_pct must be between {} and {}",
                WASTE_RANGE_PCT.start(),
                WASTE_RANGE_PCT.end()
            ));
        }
        Ok(())
    }

    /// Copy of `inputs` with configured defaults filled in.
    ///
    /// `waste_pct` is left as given: grout reads the record's own value, so
    /// the configured waste is applied by the engine instead.
    ///
    /// ```rust
    /// use takeoff_core::config::EngineSettings;
    /// use takeoff_core::inputs::{CoveringType, Environment, Inputs, TileMaterial};
    ///
    /// let settings = EngineSettings {
    ///     default_tile_material: Some(TileMaterial::Ceramic),
    ///     ..EngineSettings::default()
    /// };
    /// let inputs = Inputs::new(CoveringType::Floor, Environment::Dry);
    /// let filled = settings.apply_defaults(&inputs);
    /// assert_eq!(filled.tile_material, Some(TileMaterial::Ceramic));
    /// assert_eq!(filled.waste_pct, None);
    /// ```
    pub fn apply_defaults(&self, inputs: &Inputs) -> Inputs {
        let mut filled = inputs.clone();
        if filled.tile_material.is_none() && filled.covering == Some(CoveringType::Floor) {
            filled.tile_material = self.default_tile_material;
        }
        filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::Environment;

    #[test]
    fn test_from_toml() {
        let settings = EngineSettings::from_toml_str(
            r#"
            default_waste_pct = 12.0
            default_tile_material = "PORCELAIN"
            decimal_separator = "dot"
            "#,
        )
        .unwrap();
        assert_eq!(settings.default_waste_pct, 12.0);
        assert_eq!(settings.default_tile_material, Some(TileMaterial::Porcelain));
        assert_eq!(settings.decimal_separator, DecimalSeparator::Dot);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings = EngineSettings::from_toml_str("default_waste_pct = 5.0").unwrap();
        assert_eq!(settings.decimal_separator, DecimalSeparator::Comma);
        assert_eq!(settings.default_tile_material, None);
    }

    #[test]
    fn test_invalid_waste_rejected() {
        let err = EngineSettings::from_toml_str("default_waste_pct = 80.0").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_load_json_file() {
        let path = std::env::temp_dir().join(format!("takeoff-settings-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"{ "default_waste_pct": 15.0 }"#).unwrap();
        let settings = EngineSettings::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(settings.default_waste_pct, 15.0);
    }

    #[test]
    fn test_unknown_extension() {
        let err = EngineSettings::load_from_file(Path::new("settings.yaml")).unwrap_err();
        assert!(matches!(err, CalcError::ConfigError { .. }));
    }

    #[test]
    fn test_apply_defaults_keeps_explicit_values() {
        let settings = EngineSettings {
            default_tile_material: Some(TileMaterial::Porcelain),
            ..EngineSettings::default()
        };
        let mut inputs = Inputs::new(CoveringType::Floor, Environment::Dry);
        let filled = settings.apply_defaults(&inputs);
        assert_eq!(filled.tile_material, Some(TileMaterial::Porcelain));
        assert_eq!(filled.waste_pct, None);

        inputs.waste_pct = Some(0.0);
        inputs.tile_material = Some(TileMaterial::Ceramic);
        let filled = settings.apply_defaults(&inputs);
        assert_eq!(filled.waste_pct, Some(0.0));
        assert_eq!(filled.tile_material, Some(TileMaterial::Ceramic));
    }
}

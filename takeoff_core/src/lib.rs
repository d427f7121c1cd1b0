//! # takeoff_core - Surface-Covering Material Take-off Engine
//!
//! `takeoff_core` computes the shopping list for a covering job: tiles,
//! mosaic sheets, stone, pavers, vinyl and marble/granite, together with the
//! mortar, grout, spacers, bed materials, baseboard and waterproofing they
//! need. Inputs and outputs are JSON-serializable and keep the field names of
//! the form layer that collects them.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions from an input record to a result
//! - **JSON-First**: every type implements Serialize/Deserialize
//! - **Gate once**: records pass a seven-step validation before any
//!   calculator runs; calculators themselves never fail
//! - **Round once**: quantities are rounded when an item is created
//!
//! ## Quick Start
//!
//! ```rust
//! use takeoff_core::{calculate, CoveringType, Environment, Inputs, TileMaterial};
//!
//! let mut inputs = Inputs::new(CoveringType::Floor, Environment::Dry);
//! inputs.tile_material = Some(TileMaterial::Ceramic);
//! inputs.length_m = Some(3.0);
//! inputs.width_m = Some(4.0);
//! inputs.piece_length_cm = Some(45.0);
//! inputs.piece_width_cm = Some(45.0);
//!
//! let result = calculate(&inputs).unwrap();
//! assert_eq!(result.items[0].name, "Ceramic floor tile 45x45 cm");
//! ```
//!
//! ## Modules
//!
//! - [`inputs`] - the input record and its enums
//! - [`calculations`] - area, baseboard and per-covering calculators
//! - [`specs`] - lookup tables (joints, mosaic formats, mortar, grout, waterproofing)
//! - [`validation`] - the seven-step form gate
//! - [`result`] - line items and the result header
//! - [`project`] - multi-room projects and the merged shopping list
//! - [`config`] - engine defaults loaded from TOML or JSON
//! - [`format`] - rounding and decimal formatting
//! - [`units`] - unit wrappers and the m/cm/mm heuristics
//! - [`errors`] - structured error types

pub mod calculations;
pub mod config;
pub mod errors;
pub mod format;
pub mod inputs;
pub mod project;
pub mod result;
pub mod specs;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, calculate_with};
pub use config::EngineSettings;
pub use errors::{CalcError, CalcResult};
pub use format::DecimalSeparator;
pub use inputs::{CoveringType, Environment, Inputs, TileMaterial};
pub use project::{Project, ProjectMetadata, Room};
pub use result::{MaterialItem, TakeoffResult, Unit};
pub use validation::{StepCheck, ValidationStep};

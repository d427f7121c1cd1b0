//! # Specification Tables
//!
//! Read-only lookup tables the calculators consult. All tables are constants
//! or built once on first use, and safe to share across threads.
//!
//! - [`covering`] - default joints/thickness, mosaic formats, baseboard support
//! - [`mortar`] - adhesive mortar consumption and class
//! - [`grout`] - grout type matrix and consumption formula
//! - [`waterproofing`] - waterproofing products per environment

pub mod covering;
pub mod grout;
pub mod mortar;
pub mod waterproofing;

pub use covering::{mosaic_format, MosaicFormat, MOSAIC_FORMATS};
pub use grout::{GroutMaterial, GroutType, PieceSize};
pub use mortar::MortarClass;
pub use waterproofing::WaterproofingSpec;

//! Tileset analysis built on the detection scans

/// Synthetic sprite sheets with known geometry
pub mod synthetic;
/// Geometry record and the analyzer that produces it
pub mod tileset;

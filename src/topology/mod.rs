//! Top-level module for cell topology abstractions.
//!
//! This module provides the core types and traits for representing mesh
//! cells and decomposing them into boundary features.
//! It includes:
//! - Point identifiers and the `PointLike` bound
//! - Cell type metadata and the per-shape reference tables
//! - The `Cell` trait and the concrete shapes implementing it
//! - Validation of assigned cells
//!
//! Most users will hold cells as `CellBox` (or a concrete shape such as
//! `Hexahedron`) and query them through the `Cell` trait.

pub mod cell;
pub mod cell_type;
pub mod point;
pub mod reference;
pub mod shapes;
pub mod validation;

pub use cell::{Cell, CellBox, FeatureCount, FeatureId, cell_from_points, new_cell};
pub use cell_type::CellType;
pub use point::{PointId, PointLike};

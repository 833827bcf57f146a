#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-cells
//!
//! mesh-cells is the cell topology layer beneath mesh containers used for finite-element assembly, surface extraction and connectivity queries. It gives every shape a cell can take (vertex, line, triangle, quadrilateral, tetrahedron, hexahedron) a uniform representation and decomposes any cell into its lower-dimensional boundary features.
//!
//! ## Features
//! - Fixed-size cells holding opaque point identifiers; coordinates stay in the host container
//! - Constant per-shape reference tables defining edge direction and face winding
//! - A single object-safe [`Cell`](topology::cell::Cell) trait for dimension-agnostic code
//! - Strict `try_*` queries with a typed [`CellError`](cell_error::CellError), plus lenient `Option` variants
//! - Boundary algorithms: closure, shared-feature incidence and exterior extraction
//!
//! ## Usage
//! ```rust
//! # fn try_main() -> Result<(), mesh_cells::cell_error::CellError> {
//! use mesh_cells::prelude::*;
//!
//! let hex = Hexahedron::from_points([0u32, 1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(hex.number_of_boundary_features(1), 12);
//!
//! let edge = hex.try_boundary_feature(1, 0)?;
//! assert_eq!(edge.assigned_points()?, vec![0, 1]);
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```
//!
//! ## Determinism
//!
//! Feature enumeration always follows the reference tables, and incidence
//! maps are keyed by sorted point identifiers, so results do not depend on
//! hashing or thread scheduling (the `rayon` feature included).

pub mod algs;
pub mod cell_error;
pub mod debug_invariants;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::boundary::{
        CellClosure, FeatureIncidence, FeatureKey, closure, exterior_features, feature_incidence,
    };
    pub use crate::cell_error::CellError;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::topology::cell::{Cell, CellBox, cell_from_points, new_cell};
    pub use crate::topology::cell_type::CellType;
    pub use crate::topology::point::{PointId, PointLike};
    pub use crate::topology::shapes::{
        Edge, Hexahedron, Line, Quadrilateral, Tetrahedron, Triangle, Vertex,
    };
    pub use crate::topology::validation::{
        CellValidationOptions, DuplicateHandling, validate_cell, validate_cells,
    };
}

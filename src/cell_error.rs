//! CellError: Unified error type for mesh-cells public APIs
//!
//! Every fallible cell operation reports a caller-contract violation through
//! this type. None of the variants describe transient conditions, so callers
//! should surface them rather than retry.

use crate::topology::cell_type::CellType;
use thiserror::Error;

/// Unified error type for cell topology operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CellError {
    /// Attempted to construct a PointId with a zero value (invalid).
    #[error("PointId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidPointId,
    /// The shape defines no boundary features of the requested dimension.
    #[error("{cell_type:?} has no boundary features of dimension {dimension}")]
    InvalidDimension {
        cell_type: CellType,
        dimension: usize,
    },
    /// A feature index beyond the feature count of its dimension.
    #[error(
        "{cell_type:?}: feature {feature_id} of dimension {dimension} out of range (count {count})"
    )]
    FeatureIndexOutOfRange {
        cell_type: CellType,
        dimension: usize,
        feature_id: usize,
        count: usize,
    },
    /// A full point list whose length differs from the shape's point count.
    #[error("{cell_type:?} expects {expected} points, got {found}")]
    PointCountMismatch {
        cell_type: CellType,
        expected: usize,
        found: usize,
    },
    /// A local point index outside `0..number_of_points`.
    #[error("{cell_type:?}: local point index {local_id} out of range (0..{number_of_points})")]
    LocalIndexOutOfRange {
        cell_type: CellType,
        local_id: usize,
        number_of_points: usize,
    },
    /// A strict accessor hit a slot that was never assigned.
    #[error("{cell_type:?}: local point {local_id} has not been assigned")]
    UnassignedPoint { cell_type: CellType, local_id: usize },
    /// Validation found unassigned slots.
    #[error("{cell_type:?} has {missing} unassigned point slot(s)")]
    IncompleteCell { cell_type: CellType, missing: usize },
    /// Validation found the same point identifier in two slots.
    #[error("{cell_type:?} is degenerate: point `{point}` appears more than once")]
    DegenerateCell { cell_type: CellType, point: String },
}

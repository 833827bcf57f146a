//! Vertex: the terminal shape of boundary decomposition.

use crate::cell_error::CellError;
use crate::debug_invariants::{DebugInvariants, check_cell_invariants};
use crate::topology::cell::{Cell, CellBox, FeatureId, PointSlots, feature_out_of_range};
use crate::topology::cell_type::CellType;
use crate::topology::point::PointLike;

/// A single point.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vertex<P> {
    points: PointSlots<P, 1>,
}

impl<P: PointLike> Vertex<P> {
    pub fn new() -> Self {
        Self {
            points: PointSlots::new(),
        }
    }

    pub fn from_point(point: P) -> Self {
        Self {
            points: PointSlots::from_points([point]),
        }
    }

    pub(crate) fn from_slots(slots: [Option<P>; 1]) -> Self {
        Self {
            points: PointSlots::from_slots(slots),
        }
    }

    /// The vertex's point, if assigned.
    pub fn point(&self) -> Option<P> {
        self.points.as_slice()[0]
    }

    /// A vertex has exactly one vertex feature: a copy of itself.
    pub fn cell_vertex(&self, vertex_id: FeatureId) -> Result<Vertex<P>, CellError> {
        if vertex_id == 0 {
            Ok(self.clone())
        } else {
            Err(feature_out_of_range(CellType::Vertex, 0, vertex_id))
        }
    }
}

/// Vertex `vertex_id` of any shape: a new vertex holding that slot.
pub(crate) fn vertex_of<P: PointLike>(
    cell_type: CellType,
    slots: &[Option<P>],
    vertex_id: FeatureId,
) -> Result<Vertex<P>, CellError> {
    slots
        .get(vertex_id)
        .map(|&slot| Vertex::from_slots([slot]))
        .ok_or_else(|| feature_out_of_range(cell_type, 0, vertex_id))
}

impl<P: PointLike> Default for Vertex<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PointLike> Cell<P> for Vertex<P> {
    fn cell_type(&self) -> CellType {
        CellType::Vertex
    }

    fn points(&self) -> &[Option<P>] {
        self.points.as_slice()
    }

    fn points_mut(&mut self) -> &mut [Option<P>] {
        self.points.as_mut_slice()
    }

    fn try_boundary_feature(
        &self,
        dimension: usize,
        feature_id: FeatureId,
    ) -> Result<CellBox<P>, CellError> {
        match dimension {
            0 => Ok(Box::new(self.cell_vertex(feature_id)?)),
            _ => Err(CellError::InvalidDimension {
                cell_type: CellType::Vertex,
                dimension,
            }),
        }
    }

    fn clone_box(&self) -> CellBox<P> {
        Box::new(self.clone())
    }
}

impl<P: PointLike> DebugInvariants for Vertex<P> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Vertex");
    }

    fn validate_invariants(&self) -> Result<(), CellError> {
        check_cell_invariants(self)
    }
}

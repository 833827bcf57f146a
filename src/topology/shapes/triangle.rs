//! Triangle cell.

use crate::cell_error::CellError;
use crate::debug_invariants::{DebugInvariants, check_cell_invariants};
use crate::topology::cell::{Cell, CellBox, FeatureId, PointSlots, feature_out_of_range};
use crate::topology::cell_type::CellType;
use crate::topology::point::PointLike;
use crate::topology::reference::TRIANGLE_EDGES;
use crate::topology::shapes::line::Line;
use crate::topology::shapes::vertex::{Vertex, vertex_of};

/// Three points in counter-clockwise order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triangle<P> {
    points: PointSlots<P, 3>,
}

impl<P: PointLike> Triangle<P> {
    pub fn new() -> Self {
        Self {
            points: PointSlots::new(),
        }
    }

    pub fn from_points(points: [P; 3]) -> Self {
        Self {
            points: PointSlots::from_points(points),
        }
    }

    pub(crate) fn from_slots(slots: [Option<P>; 3]) -> Self {
        Self {
            points: PointSlots::from_slots(slots),
        }
    }

    pub fn cell_vertex(&self, vertex_id: FeatureId) -> Result<Vertex<P>, CellError> {
        vertex_of(CellType::Triangle, self.points.as_slice(), vertex_id)
    }

    pub fn cell_edge(&self, edge_id: FeatureId) -> Result<Line<P>, CellError> {
        TRIANGLE_EDGES
            .get(edge_id)
            .map(|edge| Line::from_slots(self.points.gather(edge)))
            .ok_or_else(|| feature_out_of_range(CellType::Triangle, 1, edge_id))
    }
}

impl<P: PointLike> Default for Triangle<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PointLike> Cell<P> for Triangle<P> {
    fn cell_type(&self) -> CellType {
        CellType::Triangle
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
            1 => Ok(Box::new(self.cell_edge(feature_id)?)),
            _ => Err(CellError::InvalidDimension {
                cell_type: CellType::Triangle,
                dimension,
            }),
        }
    }

    fn clone_box(&self) -> CellBox<P> {
        Box::new(self.clone())
    }
}

impl<P: PointLike> DebugInvariants for Triangle<P> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Triangle");
    }

    fn validate_invariants(&self) -> Result<(), CellError> {
        check_cell_invariants(self)
    }
}

//! Quadrilateral cell. Also the face shape of the hexahedron.

use crate::cell_error::CellError;
use crate::debug_invariants::{DebugInvariants, check_cell_invariants};
use crate::topology::cell::{Cell, CellBox, FeatureId, PointSlots, feature_out_of_range};
use crate::topology::cell_type::CellType;
use crate::topology::point::PointLike;
use crate::topology::reference::QUADRILATERAL_EDGES;
use crate::topology::shapes::line::Line;
use crate::topology::shapes::vertex::{Vertex, vertex_of};

/// Four points in cyclic order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Quadrilateral<P> {
    points: PointSlots<P, 4>,
}

impl<P: PointLike> Quadrilateral<P> {
    pub fn new() -> Self {
        Self {
            points: PointSlots::new(),
        }
    }

    pub fn from_points(points: [P; 4]) -> Self {
        Self {
            points: PointSlots::from_points(points),
        }
    }

    pub(crate) fn from_slots(slots: [Option<P>; 4]) -> Self {
        Self {
            points: PointSlots::from_slots(slots),
        }
    }

    pub fn cell_vertex(&self, vertex_id: FeatureId) -> Result<Vertex<P>, CellError> {
        vertex_of(CellType::Quadrilateral, self.points.as_slice(), vertex_id)
    }

    pub fn cell_edge(&self, edge_id: FeatureId) -> Result<Line<P>, CellError> {
        QUADRILATERAL_EDGES
            .get(edge_id)
            .map(|edge| Line::from_slots(self.points.gather(edge)))
            .ok_or_else(|| feature_out_of_range(CellType::Quadrilateral, 1, edge_id))
    }
}

impl<P: PointLike> Default for Quadrilateral<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PointLike> Cell<P> for Quadrilateral<P> {
    fn cell_type(&self) -> CellType {
        CellType::Quadrilateral
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
                cell_type: CellType::Quadrilateral,
                dimension,
            }),
        }
    }

    fn clone_box(&self) -> CellBox<P> {
        Box::new(self.clone())
    }
}

impl<P: PointLike> DebugInvariants for Quadrilateral<P> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Quadrilateral");
    }

    fn validate_invariants(&self) -> Result<(), CellError> {
        check_cell_invariants(self)
    }
}

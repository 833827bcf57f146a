//! Tetrahedron cell.

use crate::cell_error::CellError;
use crate::debug_invariants::{DebugInvariants, check_cell_invariants};
use crate::topology::cell::{Cell, CellBox, FeatureId, PointSlots, feature_out_of_range};
use crate::topology::cell_type::CellType;
use crate::topology::point::PointLike;
use crate::topology::reference::{TETRAHEDRON_EDGES, TETRAHEDRON_FACES};
use crate::topology::shapes::line::Line;
use crate::topology::shapes::triangle::Triangle;
use crate::topology::shapes::vertex::{Vertex, vertex_of};

/// Four points; faces are triangles wound consistently.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tetrahedron<P> {
    points: PointSlots<P, 4>,
}

impl<P: PointLike> Tetrahedron<P> {
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

    pub fn cell_vertex(&self, vertex_id: FeatureId) -> Result<Vertex<P>, CellError> {
        vertex_of(CellType::Tetrahedron, self.points.as_slice(), vertex_id)
    }

    pub fn cell_edge(&self, edge_id: FeatureId) -> Result<Line<P>, CellError> {
        TETRAHEDRON_EDGES
            .get(edge_id)
            .map(|edge| Line::from_slots(self.points.gather(edge)))
            .ok_or_else(|| feature_out_of_range(CellType::Tetrahedron, 1, edge_id))
    }

    pub fn cell_face(&self, face_id: FeatureId) -> Result<Triangle<P>, CellError> {
        TETRAHEDRON_FACES
            .get(face_id)
            .map(|face| Triangle::from_slots(self.points.gather(face)))
            .ok_or_else(|| feature_out_of_range(CellType::Tetrahedron, 2, face_id))
    }
}

impl<P: PointLike> Default for Tetrahedron<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PointLike> Cell<P> for Tetrahedron<P> {
    fn cell_type(&self) -> CellType {
        CellType::Tetrahedron
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
            2 => Ok(Box::new(self.cell_face(feature_id)?)),
            _ => Err(CellError::InvalidDimension {
                cell_type: CellType::Tetrahedron,
                dimension,
            }),
        }
    }

    fn clone_box(&self) -> CellBox<P> {
        Box::new(self.clone())
    }
}

impl<P: PointLike> DebugInvariants for Tetrahedron<P> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Tetrahedron");
    }

    fn validate_invariants(&self) -> Result<(), CellError> {
        check_cell_invariants(self)
    }
}

//! Hexahedron cell.
//!
//! Local points `0..=3` form the bottom quad and `4..=7` the top quad, with
//! point `i + 4` above point `i`. Edge direction and face winding come from
//! [`HEXAHEDRON_EDGES`] and [`HEXAHEDRON_FACES`].

use crate::cell_error::CellError;
use crate::debug_invariants::{DebugInvariants, check_cell_invariants};
use crate::topology::cell::{Cell, CellBox, FeatureId, PointSlots, feature_out_of_range};
use crate::topology::cell_type::CellType;
use crate::topology::point::PointLike;
use crate::topology::reference::{HEXAHEDRON_EDGES, HEXAHEDRON_FACES};
use crate::topology::shapes::line::Line;
use crate::topology::shapes::quadrilateral::Quadrilateral;
use crate::topology::shapes::vertex::{Vertex, vertex_of};

/// Eight points; faces are quadrilaterals wound consistently.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hexahedron<P> {
    points: PointSlots<P, 8>,
}

impl<P: PointLike> Hexahedron<P> {
    pub fn new() -> Self {
        Self {
            points: PointSlots::new(),
        }
    }

    pub fn from_points(points: [P; 8]) -> Self {
        Self {
            points: PointSlots::from_points(points),
        }
    }

    pub fn cell_vertex(&self, vertex_id: FeatureId) -> Result<Vertex<P>, CellError> {
        vertex_of(CellType::Hexahedron, self.points.as_slice(), vertex_id)
    }

    /// Edge `edge_id`, directed as listed in [`HEXAHEDRON_EDGES`].
    pub fn cell_edge(&self, edge_id: FeatureId) -> Result<Line<P>, CellError> {
        HEXAHEDRON_EDGES
            .get(edge_id)
            .map(|edge| Line::from_slots(self.points.gather(edge)))
            .ok_or_else(|| feature_out_of_range(CellType::Hexahedron, 1, edge_id))
    }

    /// Face `face_id`, wound as listed in [`HEXAHEDRON_FACES`].
    pub fn cell_face(&self, face_id: FeatureId) -> Result<Quadrilateral<P>, CellError> {
        HEXAHEDRON_FACES
            .get(face_id)
            .map(|face| Quadrilateral::from_slots(self.points.gather(face)))
            .ok_or_else(|| feature_out_of_range(CellType::Hexahedron, 2, face_id))
    }
}

impl<P: PointLike> Default for Hexahedron<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PointLike> Cell<P> for Hexahedron<P> {
    fn cell_type(&self) -> CellType {
        CellType::Hexahedron
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
                cell_type: CellType::Hexahedron,
                dimension,
            }),
        }
    }

    fn clone_box(&self) -> CellBox<P> {
        Box::new(self.clone())
    }
}

impl<P: PointLike> DebugInvariants for Hexahedron<P> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Hexahedron");
    }

    fn validate_invariants(&self) -> Result<(), CellError> {
        check_cell_invariants(self)
    }
}

//! Line (edge) cell.

use crate::cell_error::CellError;
use crate::debug_invariants::{DebugInvariants, check_cell_invariants};
use crate::topology::cell::{Cell, CellBox, FeatureId, PointSlots};
use crate::topology::cell_type::CellType;
use crate::topology::point::PointLike;
use crate::topology::shapes::vertex::{Vertex, vertex_of};

/// A directed segment from local point 0 to local point 1.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Line<P> {
    points: PointSlots<P, 2>,
}

impl<P: PointLike> Line<P> {
    pub fn new() -> Self {
        Self {
            points: PointSlots::new(),
        }
    }

    pub fn from_points(points: [P; 2]) -> Self {
        Self {
            points: PointSlots::from_points(points),
        }
    }

    pub(crate) fn from_slots(slots: [Option<P>; 2]) -> Self {
        Self {
            points: PointSlots::from_slots(slots),
        }
    }

    /// The same segment with its direction flipped.
    pub fn reversed(&self) -> Self {
        let [a, b] = self.points.gather(&[0, 1]);
        Self::from_slots([b, a])
    }

    pub fn cell_vertex(&self, vertex_id: FeatureId) -> Result<Vertex<P>, CellError> {
        vertex_of(CellType::Line, self.points.as_slice(), vertex_id)
    }
}

impl<P: PointLike> Default for Line<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PointLike> Cell<P> for Line<P> {
    fn cell_type(&self) -> CellType {
        CellType::Line
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
                cell_type: CellType::Line,
                dimension,
            }),
        }
    }

    fn clone_box(&self) -> CellBox<P> {
        Box::new(self.clone())
    }
}

impl<P: PointLike> DebugInvariants for Line<P> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Line");
    }

    fn validate_invariants(&self) -> Result<(), CellError> {
        check_cell_invariants(self)
    }
}

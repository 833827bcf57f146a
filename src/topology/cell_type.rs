//! Cell type metadata: the fixed per-shape constants.

use serde::{Deserialize, Serialize};

/// Every shape a cell can take.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CellType {
    /// 0D vertex.
    Vertex,
    /// 1D line segment (edge).
    Line,
    /// 2D simplex.
    Triangle,
    /// 2D tensor-product cell.
    Quadrilateral,
    /// 3D simplex.
    Tetrahedron,
    /// 3D tensor-product cell.
    Hexahedron,
}

impl Default for CellType {
    fn default() -> Self {
        CellType::Vertex
    }
}

impl CellType {
    /// All shapes, ordered by dimension.
    pub const ALL: [CellType; 6] = [
        CellType::Vertex,
        CellType::Line,
        CellType::Triangle,
        CellType::Quadrilateral,
        CellType::Tetrahedron,
        CellType::Hexahedron,
    ];

    /// Returns the topological dimension of the cell.
    pub const fn dimension(self) -> usize {
        match self {
            CellType::Vertex => 0,
            CellType::Line => 1,
            CellType::Triangle | CellType::Quadrilateral => 2,
            CellType::Tetrahedron | CellType::Hexahedron => 3,
        }
    }

    /// Number of point identifiers a cell of this type holds.
    pub const fn number_of_points(self) -> usize {
        match self {
            CellType::Vertex => 1,
            CellType::Line => 2,
            CellType::Triangle => 3,
            CellType::Quadrilateral | CellType::Tetrahedron => 4,
            CellType::Hexahedron => 8,
        }
    }

    pub const fn number_of_vertices(self) -> usize {
        self.number_of_points()
    }

    pub const fn number_of_edges(self) -> usize {
        match self {
            CellType::Vertex | CellType::Line => 0,
            CellType::Triangle => 3,
            CellType::Quadrilateral => 4,
            CellType::Tetrahedron => 6,
            CellType::Hexahedron => 12,
        }
    }

    pub const fn number_of_faces(self) -> usize {
        match self {
            CellType::Tetrahedron => 4,
            CellType::Hexahedron => 6,
            _ => 0,
        }
    }

    /// Feature count at `dimension`, or `None` when the shape defines no
    /// boundary features there.
    ///
    /// A cell is never its own boundary feature, so only dimensions below
    /// [`dimension`](Self::dimension) are defined. The vertex is the
    /// exception: it is the terminal of the decomposition and reports itself
    /// at dimension 0.
    pub const fn boundary_feature_count(self, dimension: usize) -> Option<usize> {
        match (self, dimension) {
            (_, 0) => Some(self.number_of_vertices()),
            (
                CellType::Triangle
                | CellType::Quadrilateral
                | CellType::Tetrahedron
                | CellType::Hexahedron,
                1,
            ) => Some(self.number_of_edges()),
            (CellType::Tetrahedron | CellType::Hexahedron, 2) => Some(self.number_of_faces()),
            _ => None,
        }
    }

    /// Shape of boundary feature `feature_id` at `dimension`, if defined.
    ///
    /// Every feature of a given dimension has the same shape for the cell
    /// types supported here, so the id only matters for the range check.
    pub const fn boundary_cell_type(self, dimension: usize) -> Option<CellType> {
        match (self, dimension) {
            (_, 0) => Some(CellType::Vertex),
            (CellType::Vertex | CellType::Line, _) => None,
            (_, 1) => Some(CellType::Line),
            (CellType::Tetrahedron, 2) => Some(CellType::Triangle),
            (CellType::Hexahedron, 2) => Some(CellType::Quadrilateral),
            _ => None,
        }
    }

    /// Dimensions with defined boundary features, lowest first.
    pub fn boundary_dimensions(self) -> std::ops::Range<usize> {
        0..self.dimension().max(1)
    }
}

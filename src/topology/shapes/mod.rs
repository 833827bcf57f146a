//! Concrete cell shapes.
//!
//! Each shape is a standalone type pairing a fixed-size [`PointSlots`]
//! array with the reference tables of its [`CellType`]. Typed extractors
//! (`cell_vertex`, `cell_edge`, `cell_face`) return concrete sub-cells; the
//! [`Cell`] impl routes `(dimension, feature_id)` queries to them.
//!
//! [`PointSlots`]: crate::topology::cell::PointSlots
//! [`CellType`]: crate::topology::cell_type::CellType
//! [`Cell`]: crate::topology::cell::Cell

pub mod hexahedron;
pub mod line;
pub mod quadrilateral;
pub mod tetrahedron;
pub mod triangle;
pub mod vertex;

pub use hexahedron::Hexahedron;
pub use line::Line;
pub use quadrilateral::Quadrilateral;
pub use tetrahedron::Tetrahedron;
pub use triangle::Triangle;
pub use vertex::Vertex;

/// A line is the edge of every 2D and 3D shape.
pub type Edge<P> = Line<P>;

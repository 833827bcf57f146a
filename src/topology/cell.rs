//! The cell capability contract.
//!
//! [`Cell`] is the single polymorphic interface every shape implements. A
//! dimension-agnostic algorithm holds cells as [`CellBox`] and asks for
//! boundary features by `(dimension, feature_id)`; each shape answers from
//! its own reference tables (see [`crate::topology::reference`]) and returns
//! a freshly built, independent sub-cell.
//!
//! # Example
//! ```rust
//! # fn try_main() -> Result<(), mesh_cells::cell_error::CellError> {
//! use mesh_cells::topology::cell::{Cell, new_cell};
//! use mesh_cells::topology::cell_type::CellType;
//!
//! let mut hex = new_cell::<u32>(CellType::Hexahedron);
//! hex.set_cell_points(&[10, 11, 12, 13, 14, 15, 16, 17])?;
//!
//! let face = hex.try_boundary_feature(2, 0)?;
//! assert_eq!(face.cell_type(), CellType::Quadrilateral);
//! assert_eq!(face.assigned_points()?, vec![10, 14, 17, 13]);
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```

use std::fmt;

use crate::cell_error::CellError;
use crate::debug_invariants::DebugInvariants;
use crate::topology::cell_type::CellType;
use crate::topology::point::PointLike;
use crate::topology::reference;
use crate::topology::shapes::{Hexahedron, Line, Quadrilateral, Tetrahedron, Triangle, Vertex};

/// Index of a boundary feature within one dimension.
pub type FeatureId = usize;
/// Number of boundary features within one dimension.
pub type FeatureCount = usize;

/// Owned, type-erased cell.
pub type CellBox<P> = Box<dyn Cell<P>>;

/// Operations every cell shape supports.
///
/// Shapes provide their type tag, slot access, the boundary dispatcher and
/// `clone_box`; everything else is derived from the shape's [`CellType`]
/// constants and reference tables.
pub trait Cell<P: PointLike>: fmt::Debug + Send + Sync {
    /// Shape of this cell.
    fn cell_type(&self) -> CellType;

    /// Point slots in local order; `None` marks a slot not yet assigned.
    fn points(&self) -> &[Option<P>];

    /// Mutable point slots. The slot count is fixed by the shape.
    fn points_mut(&mut self) -> &mut [Option<P>];

    /// Build boundary feature `feature_id` of `dimension` as a new cell.
    ///
    /// # Errors
    /// [`CellError::InvalidDimension`] or [`CellError::FeatureIndexOutOfRange`].
    fn try_boundary_feature(
        &self,
        dimension: usize,
        feature_id: FeatureId,
    ) -> Result<CellBox<P>, CellError>;

    fn clone_box(&self) -> CellBox<P>;

    /// Topological dimension (0 for a vertex, 3 for a hexahedron).
    fn cell_dimension(&self) -> usize {
        self.cell_type().dimension()
    }

    fn number_of_points(&self) -> usize {
        self.cell_type().number_of_points()
    }

    fn number_of_vertices(&self) -> FeatureCount {
        self.cell_type().number_of_vertices()
    }

    fn number_of_edges(&self) -> FeatureCount {
        self.cell_type().number_of_edges()
    }

    fn number_of_faces(&self) -> FeatureCount {
        self.cell_type().number_of_faces()
    }

    /// Number of boundary features at `dimension`; 0 when the shape defines
    /// none there.
    fn number_of_boundary_features(&self, dimension: usize) -> FeatureCount {
        self.cell_type()
            .boundary_feature_count(dimension)
            .unwrap_or(0)
    }

    /// Like [`number_of_boundary_features`](Self::number_of_boundary_features)
    /// but reports an undefined dimension as [`CellError::InvalidDimension`].
    fn try_number_of_boundary_features(&self, dimension: usize) -> Result<FeatureCount, CellError> {
        let cell_type = self.cell_type();
        cell_type
            .boundary_feature_count(dimension)
            .ok_or(CellError::InvalidDimension {
                cell_type,
                dimension,
            })
    }

    /// Lenient form of [`try_boundary_feature`](Self::try_boundary_feature):
    /// any invalid query yields `None`.
    fn boundary_feature(&self, dimension: usize, feature_id: FeatureId) -> Option<CellBox<P>> {
        self.try_boundary_feature(dimension, feature_id).ok()
    }

    /// Write the point slots of a boundary feature into `out` without
    /// allocating a cell. `out` is cleared first; its capacity is reused.
    ///
    /// Returns the shape of the feature.
    fn boundary_points_into(
        &self,
        dimension: usize,
        feature_id: FeatureId,
        out: &mut Vec<Option<P>>,
    ) -> Result<CellType, CellError> {
        let cell_type = self.cell_type();
        let local = reference::local_feature(cell_type, dimension, feature_id)?;
        let sub_type = cell_type
            .boundary_cell_type(dimension)
            .ok_or(CellError::InvalidDimension {
                cell_type,
                dimension,
            })?;
        let points = self.points();
        out.clear();
        for &local_id in local {
            let slot = points
                .get(local_id)
                .copied()
                .ok_or(CellError::LocalIndexOutOfRange {
                    cell_type,
                    local_id,
                    number_of_points: points.len(),
                })?;
            out.push(slot);
        }
        Ok(sub_type)
    }

    /// Assign every slot in order.
    ///
    /// # Errors
    /// [`CellError::PointCountMismatch`] if `points.len()` differs from
    /// [`number_of_points`](Self::number_of_points); the cell is left
    /// untouched.
    fn set_cell_points(&mut self, points: &[P]) -> Result<(), CellError> {
        let expected = self.number_of_points();
        if points.len() != expected {
            return Err(CellError::PointCountMismatch {
                cell_type: self.cell_type(),
                expected,
                found: points.len(),
            });
        }
        for (slot, &p) in self.points_mut().iter_mut().zip(points) {
            *slot = Some(p);
        }
        Ok(())
    }

    /// Assign every slot from an iterator, e.g. a window of a global
    /// connectivity array. Same count check as
    /// [`set_cell_points`](Self::set_cell_points).
    fn set_cell_points_from_iter<I>(&mut self, points: I) -> Result<(), CellError>
    where
        Self: Sized,
        I: IntoIterator<Item = P>,
    {
        let staged: Vec<P> = points.into_iter().collect();
        self.set_cell_points(&staged)
    }

    /// Overwrite a single slot.
    fn set_cell_point(&mut self, local_id: usize, point: P) -> Result<(), CellError> {
        let cell_type = self.cell_type();
        let number_of_points = self.number_of_points();
        let slot = self
            .points_mut()
            .get_mut(local_id)
            .ok_or(CellError::LocalIndexOutOfRange {
                cell_type,
                local_id,
                number_of_points,
            })?;
        *slot = Some(point);
        Ok(())
    }

    /// Read a single slot; `Ok(None)` if it was never assigned.
    fn cell_point(&self, local_id: usize) -> Result<Option<P>, CellError> {
        self.points()
            .get(local_id)
            .copied()
            .ok_or(CellError::LocalIndexOutOfRange {
                cell_type: self.cell_type(),
                local_id,
                number_of_points: self.number_of_points(),
            })
    }

    /// All point identifiers in local order.
    ///
    /// # Errors
    /// [`CellError::UnassignedPoint`] naming the first empty slot.
    fn assigned_points(&self) -> Result<Vec<P>, CellError> {
        self.points()
            .iter()
            .enumerate()
            .map(|(local_id, slot)| {
                slot.ok_or(CellError::UnassignedPoint {
                    cell_type: self.cell_type(),
                    local_id,
                })
            })
            .collect()
    }

    fn is_fully_assigned(&self) -> bool {
        self.points().iter().all(Option::is_some)
    }

    /// Reset every slot to unassigned.
    fn clear_points(&mut self) {
        self.points_mut().fill(None);
    }
}

// Blanket impl for Box<C>
impl<P: PointLike, C: Cell<P> + ?Sized> Cell<P> for Box<C> {
    #[inline]
    fn cell_type(&self) -> CellType {
        (**self).cell_type()
    }

    #[inline]
    fn points(&self) -> &[Option<P>] {
        (**self).points()
    }

    #[inline]
    fn points_mut(&mut self) -> &mut [Option<P>] {
        (**self).points_mut()
    }

    fn try_boundary_feature(
        &self,
        dimension: usize,
        feature_id: FeatureId,
    ) -> Result<CellBox<P>, CellError> {
        (**self).try_boundary_feature(dimension, feature_id)
    }

    fn clone_box(&self) -> CellBox<P> {
        (**self).clone_box()
    }
}

impl<P: PointLike> Clone for CellBox<P> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Two cells are equal when they have the same shape and the same slots.
impl<P: PointLike> PartialEq for dyn Cell<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cell_type() == other.cell_type() && self.points() == other.points()
    }
}

/// Fixed-size point identifier storage shared by the concrete shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointSlots<P, const N: usize>([Option<P>; N]);

impl<P: PointLike, const N: usize> PointSlots<P, N> {
    /// All slots unassigned.
    pub fn new() -> Self {
        PointSlots([None; N])
    }

    pub fn from_points(points: [P; N]) -> Self {
        PointSlots(points.map(Some))
    }

    pub fn from_slots(slots: [Option<P>; N]) -> Self {
        PointSlots(slots)
    }

    pub fn as_slice(&self) -> &[Option<P>] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [Option<P>] {
        &mut self.0
    }

    /// Copy the slots named by a reference-table entry, in entry order.
    ///
    /// Table entries only hold local indices below `N`.
    pub fn gather<const M: usize>(&self, local: &[usize; M]) -> [Option<P>; M] {
        local.map(|i| self.0[i])
    }
}

impl<P: PointLike, const N: usize> Default for PointSlots<P, N> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn feature_out_of_range(
    cell_type: CellType,
    dimension: usize,
    feature_id: FeatureId,
) -> CellError {
    match cell_type.boundary_feature_count(dimension) {
        Some(count) => CellError::FeatureIndexOutOfRange {
            cell_type,
            dimension,
            feature_id,
            count,
        },
        None => CellError::InvalidDimension {
            cell_type,
            dimension,
        },
    }
}

/// Empty cell of any shape.
pub fn new_cell<P: PointLike>(cell_type: CellType) -> CellBox<P> {
    match cell_type {
        CellType::Vertex => Box::new(Vertex::<P>::new()),
        CellType::Line => Box::new(Line::<P>::new()),
        CellType::Triangle => Box::new(Triangle::<P>::new()),
        CellType::Quadrilateral => Box::new(Quadrilateral::<P>::new()),
        CellType::Tetrahedron => Box::new(Tetrahedron::<P>::new()),
        CellType::Hexahedron => Box::new(Hexahedron::<P>::new()),
    }
}

/// Cell of `cell_type` holding `points`, e.g. one row of a host container's
/// connectivity array.
pub fn cell_from_points<P: PointLike>(
    cell_type: CellType,
    points: &[P],
) -> Result<CellBox<P>, CellError> {
    let mut cell = new_cell(cell_type);
    cell.set_cell_points(points)?;
    cell.debug_assert_invariants();
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::point::PointId;

    fn pid(raw: u64) -> PointId {
        PointId::new(raw).unwrap()
    }

    #[test]
    fn factory_builds_every_shape_empty() {
        for ct in CellType::ALL {
            let cell = new_cell::<PointId>(ct);
            assert_eq!(cell.cell_type(), ct);
            assert_eq!(cell.points().len(), ct.number_of_points());
            assert!(cell.points().iter().all(Option::is_none));
            assert!(!cell.is_fully_assigned());
        }
    }

    #[test]
    fn count_mismatch_leaves_cell_untouched() {
        let mut cell = cell_from_points(CellType::Triangle, &[pid(1), pid(2), pid(3)]).unwrap();
        let err = cell.set_cell_points(&[pid(7), pid(8)]).unwrap_err();
        assert_eq!(
            err,
            CellError::PointCountMismatch {
                cell_type: CellType::Triangle,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(cell.assigned_points().unwrap(), vec![pid(1), pid(2), pid(3)]);

        let err = cell
            .set_cell_points(&[pid(7), pid(8), pid(9), pid(10)])
            .unwrap_err();
        assert!(matches!(err, CellError::PointCountMismatch { found: 4, .. }));
        assert_eq!(cell.assigned_points().unwrap(), vec![pid(1), pid(2), pid(3)]);
    }

    #[test]
    fn single_slot_access() {
        let mut cell = new_cell::<u32>(CellType::Line);
        cell.set_cell_point(1, 9).unwrap();
        assert_eq!(cell.cell_point(0), Ok(None));
        assert_eq!(cell.cell_point(1), Ok(Some(9)));
        assert_eq!(
            cell.cell_point(2),
            Err(CellError::LocalIndexOutOfRange {
                cell_type: CellType::Line,
                local_id: 2,
                number_of_points: 2
            })
        );
        assert!(cell.set_cell_point(2, 3).is_err());
        assert_eq!(
            cell.assigned_points(),
            Err(CellError::UnassignedPoint {
                cell_type: CellType::Line,
                local_id: 0
            })
        );
        cell.clear_points();
        assert_eq!(cell.cell_point(1), Ok(None));
    }

    #[test]
    fn boxed_cells_clone_and_compare() {
        let a = cell_from_points(CellType::Line, &[1u32, 2]).unwrap();
        let mut b = a.clone();
        assert!(*a == *b);
        b.set_cell_point(0, 5).unwrap();
        assert!(*a != *b);
        let c = cell_from_points(CellType::Vertex, &[1u32]).unwrap();
        assert!(*a != *c);
    }

    #[test]
    fn buffer_variant_reuses_capacity() {
        let hex = cell_from_points(CellType::Hexahedron, &[0u32, 1, 2, 3, 4, 5, 6, 7]).unwrap();
        let mut buf = Vec::with_capacity(4);
        let ct = hex.boundary_points_into(2, 1, &mut buf).unwrap();
        assert_eq!(ct, CellType::Quadrilateral);
        assert_eq!(buf, vec![Some(1), Some(2), Some(6), Some(5)]);
        let ct = hex.boundary_points_into(1, 2, &mut buf).unwrap();
        assert_eq!(ct, CellType::Line);
        assert_eq!(buf, vec![Some(3), Some(2)]);
        assert!(hex.boundary_points_into(3, 0, &mut buf).is_err());
    }

    #[test]
    fn short_slot_list_reports_local_index() {
        #[derive(Clone, Debug)]
        struct ShortHex(Vec<Option<u32>>);

        impl Cell<u32> for ShortHex {
            fn cell_type(&self) -> CellType {
                CellType::Hexahedron
            }
            fn points(&self) -> &[Option<u32>] {
                &self.0
            }
            fn points_mut(&mut self) -> &mut [Option<u32>] {
                &mut self.0
            }
            fn try_boundary_feature(
                &self,
                dimension: usize,
                _feature_id: FeatureId,
            ) -> Result<CellBox<u32>, CellError> {
                Err(CellError::InvalidDimension {
                    cell_type: CellType::Hexahedron,
                    dimension,
                })
            }
            fn clone_box(&self) -> CellBox<u32> {
                Box::new(self.clone())
            }
        }

        let short = ShortHex(vec![Some(1), Some(2), Some(3), Some(4)]);
        let mut buf = Vec::new();
        assert_eq!(
            short.boundary_points_into(0, 6, &mut buf),
            Err(CellError::LocalIndexOutOfRange {
                cell_type: CellType::Hexahedron,
                local_id: 6,
                number_of_points: 4,
            })
        );
        assert_eq!(short.boundary_points_into(0, 3, &mut buf), Ok(CellType::Vertex));
        assert_eq!(buf, vec![Some(4)]);
    }

    #[test]
    fn slots_gather_in_table_order() {
        let slots = PointSlots::from_points([10u32, 11, 12, 13]);
        assert_eq!(slots.gather(&[3, 0]), [Some(13), Some(10)]);
        assert_eq!(PointSlots::<u32, 2>::default().as_slice(), &[None, None]);
    }
}

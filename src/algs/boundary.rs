//! Dimension-generic boundary algorithms.
//!
//! These helpers only talk to cells through the [`Cell`] contract, so they
//! work the same for a hexahedral volume mesh, a triangulated surface or a
//! mix of shapes.
//!
//! Shared features are identified by a [`FeatureKey`]: the feature's point
//! identifiers sorted ascending, so the two orientations of an interior face
//! map to the same key. A feature incident to exactly one cell lies on the
//! exterior of the mesh.
//!
//! # Example
//! ```rust
//! # fn try_main() -> Result<(), mesh_cells::cell_error::CellError> {
//! use mesh_cells::algs::boundary::exterior_features;
//! use mesh_cells::topology::shapes::Hexahedron;
//!
//! // Two unit cubes stacked along z share the face {4, 5, 6, 7}.
//! let cells = [
//!     Hexahedron::from_points([0u32, 1, 2, 3, 4, 5, 6, 7]),
//!     Hexahedron::from_points([4u32, 5, 6, 7, 8, 9, 10, 11]),
//! ];
//! let surface = exterior_features(&cells, 2)?;
//! assert_eq!(surface.len(), 10);
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::cell_error::CellError;
use crate::topology::cell::{Cell, CellBox, FeatureId, cell_from_points};
use crate::topology::cell_type::CellType;
use crate::topology::point::PointLike;

/// Build every boundary feature of `cell` at `dimension`, in feature-id order.
pub fn boundary_features<P, C>(cell: &C, dimension: usize) -> Result<Vec<CellBox<P>>, CellError>
where
    P: PointLike,
    C: Cell<P> + ?Sized,
{
    let count = cell.try_number_of_boundary_features(dimension)?;
    (0..count)
        .map(|k| cell.try_boundary_feature(dimension, k))
        .collect()
}

/// Visit every boundary feature of `cell` at `dimension` without allocating
/// a cell per feature. The slot buffer passed to `visit` is reused.
pub fn for_each_boundary_feature<P, C, F>(
    cell: &C,
    dimension: usize,
    mut visit: F,
) -> Result<(), CellError>
where
    P: PointLike,
    C: Cell<P> + ?Sized,
    F: FnMut(FeatureId, CellType, &[Option<P>]),
{
    let count = cell.try_number_of_boundary_features(dimension)?;
    let mut buf = Vec::with_capacity(cell.number_of_points());
    for k in 0..count {
        let sub_type = cell.boundary_points_into(dimension, k, &mut buf)?;
        visit(k, sub_type, &buf);
    }
    Ok(())
}

/// A cell together with all its boundary features, grouped by dimension.
#[derive(Clone, Debug)]
pub struct CellClosure<P: PointLike> {
    by_dimension: Vec<Vec<CellBox<P>>>,
}

impl<P: PointLike> CellClosure<P> {
    /// Features of `dimension`; the cell itself sits at its own dimension.
    pub fn dimension(&self, dimension: usize) -> &[CellBox<P>] {
        self.by_dimension
            .get(dimension)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Highest dimension present, i.e. the dimension of the source cell.
    pub fn top_dimension(&self) -> usize {
        self.by_dimension.len().saturating_sub(1)
    }

    /// Total number of entities, the source cell included.
    pub fn len(&self) -> usize {
        self.by_dimension.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &CellBox<P>> {
        self.by_dimension.iter().flatten()
    }
}

/// Decompose `cell` into all of its boundary features down to vertices.
pub fn closure<P, C>(cell: &C) -> Result<CellClosure<P>, CellError>
where
    P: PointLike,
    C: Cell<P> + ?Sized,
{
    let top = cell.cell_dimension();
    let mut by_dimension = Vec::with_capacity(top + 1);
    for dimension in cell.cell_type().boundary_dimensions() {
        if dimension < top {
            by_dimension.push(boundary_features(cell, dimension)?);
        }
    }
    by_dimension.push(vec![cell.clone_box()]);
    Ok(CellClosure { by_dimension })
}

/// Orientation-independent identity of a boundary feature.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureKey<P>(Vec<P>);

impl<P: PointLike> FeatureKey<P> {
    /// Key of a feature given its slots; `None` if any slot is unassigned.
    pub fn from_slots(slots: &[Option<P>]) -> Option<Self> {
        let points: Option<Vec<P>> = slots.iter().copied().collect();
        points.map(|p| FeatureKey(p.into_iter().sorted().collect()))
    }

    pub fn points(&self) -> &[P] {
        &self.0
    }
}

/// A feature shared by one or more cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncidentFeature<P> {
    pub cell_type: CellType,
    /// Points in the orientation of the first incident cell.
    pub points: Vec<P>,
    /// `(cell index, local feature id)` for every incident cell, in cell order.
    pub incident: Vec<(usize, FeatureId)>,
}

impl<P: PointLike> IncidentFeature<P> {
    pub fn is_exterior(&self) -> bool {
        self.incident.len() == 1
    }

    /// Materialize the feature as a cell with the recorded orientation.
    pub fn to_cell(&self) -> Result<CellBox<P>, CellError> {
        cell_from_points(self.cell_type, &self.points)
    }
}

/// Canonical key → incident cells for every feature of one dimension.
#[derive(Clone, Debug, Default)]
pub struct FeatureIncidence<P> {
    pub features: BTreeMap<FeatureKey<P>, IncidentFeature<P>>,
}

impl<P: PointLike> FeatureIncidence<P> {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, key: &FeatureKey<P>) -> Option<&IncidentFeature<P>> {
        self.features.get(key)
    }

    /// Features incident to exactly one cell, in key order.
    pub fn exterior(&self) -> impl Iterator<Item = &IncidentFeature<P>> {
        self.features.values().filter(|f| f.is_exterior())
    }

    /// Features shared by two or more cells, in key order.
    pub fn interior(&self) -> impl Iterator<Item = &IncidentFeature<P>> {
        self.features.values().filter(|f| !f.is_exterior())
    }

    fn insert(&mut self, cell_index: usize, keyed: Vec<KeyedFeature<P>>) {
        for (key, feature_id, cell_type, points) in keyed {
            self.features
                .entry(key)
                .or_insert_with(|| IncidentFeature {
                    cell_type,
                    points,
                    incident: Vec::new(),
                })
                .incident
                .push((cell_index, feature_id));
        }
    }
}

type KeyedFeature<P> = (FeatureKey<P>, FeatureId, CellType, Vec<P>);

fn keyed_features<P, C>(cell: &C, dimension: usize) -> Result<Vec<KeyedFeature<P>>, CellError>
where
    P: PointLike,
    C: Cell<P> + ?Sized,
{
    let mut incomplete = false;
    let mut out = Vec::with_capacity(cell.number_of_boundary_features(dimension));
    for_each_boundary_feature(cell, dimension, |k, sub_type, slots| {
        match FeatureKey::from_slots(slots) {
            Some(key) => {
                let points = slots.iter().flatten().copied().collect();
                out.push((key, k, sub_type, points));
            }
            None => incomplete = true,
        }
    })?;
    if incomplete {
        return Err(CellError::IncompleteCell {
            cell_type: cell.cell_type(),
            missing: cell.points().iter().filter(|s| s.is_none()).count(),
        });
    }
    Ok(out)
}

/// Group the features of dimension `dimension` of all `cells` by key.
///
/// # Errors
/// The first error of any cell: [`CellError::InvalidDimension`] if a shape
/// has no features at `dimension`, [`CellError::IncompleteCell`] if a
/// feature touches an unassigned slot.
pub fn feature_incidence<P, C>(
    cells: &[C],
    dimension: usize,
) -> Result<FeatureIncidence<P>, CellError>
where
    P: PointLike,
    C: Cell<P>,
{
    let mut incidence = FeatureIncidence {
        features: BTreeMap::new(),
    };
    for (index, cell) in cells.iter().enumerate() {
        incidence.insert(index, keyed_features(cell, dimension)?);
    }
    log::debug!(
        "feature incidence: {} cells, dimension {dimension}, {} distinct features",
        cells.len(),
        incidence.len()
    );
    Ok(incidence)
}

/// Parallel [`feature_incidence`]. Keys are computed per cell on the rayon
/// pool and merged in cell order, so the result is identical.
#[cfg(feature = "rayon")]
pub fn par_feature_incidence<P, C>(
    cells: &[C],
    dimension: usize,
) -> Result<FeatureIncidence<P>, CellError>
where
    P: PointLike,
    C: Cell<P>,
{
    use rayon::prelude::*;

    let per_cell: Vec<Vec<KeyedFeature<P>>> = cells
        .par_iter()
        .map(|cell| keyed_features(cell, dimension))
        .collect::<Result<_, _>>()?;
    let mut incidence = FeatureIncidence {
        features: BTreeMap::new(),
    };
    for (index, keyed) in per_cell.into_iter().enumerate() {
        incidence.insert(index, keyed);
    }
    log::debug!(
        "feature incidence: {} cells, dimension {dimension}, {} distinct features",
        cells.len(),
        incidence.len()
    );
    Ok(incidence)
}

/// Features of `dimension` incident to exactly one cell: the surface of a
/// volume mesh at `dimension = 2`, or the boundary edges of a surface mesh
/// at `dimension = 1`.
pub fn exterior_features<P, C>(
    cells: &[C],
    dimension: usize,
) -> Result<Vec<IncidentFeature<P>>, CellError>
where
    P: PointLike,
    C: Cell<P>,
{
    let incidence = feature_incidence(cells, dimension)?;
    let exterior: Vec<_> = incidence.exterior().cloned().collect();
    log::trace!(
        "{} of {} features at dimension {dimension} are exterior",
        exterior.len(),
        incidence.len()
    );
    Ok(exterior)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::cell::new_cell;
    use crate::topology::shapes::{Hexahedron, Quadrilateral, Triangle};

    #[test]
    fn hexahedron_closure_counts() {
        let hex = Hexahedron::from_points([1u32, 2, 3, 4, 5, 6, 7, 8]);
        let cl = closure(&hex).unwrap();
        assert_eq!(cl.top_dimension(), 3);
        assert_eq!(cl.dimension(0).len(), 8);
        assert_eq!(cl.dimension(1).len(), 12);
        assert_eq!(cl.dimension(2).len(), 6);
        assert_eq!(cl.dimension(3).len(), 1);
        assert_eq!(cl.dimension(4).len(), 0);
        assert_eq!(cl.len(), 27);
        assert!(cl.iter().all(|c| c.is_fully_assigned()));
    }

    #[test]
    fn vertex_closure_is_itself() {
        let v = new_cell::<u32>(CellType::Vertex);
        let cl = closure(&v).unwrap();
        assert_eq!(cl.top_dimension(), 0);
        assert_eq!(cl.len(), 1);
    }

    #[test]
    fn visitor_sees_table_order() {
        let quad = Quadrilateral::from_points([1u32, 2, 3, 4]);
        let mut seen = Vec::new();
        for_each_boundary_feature(&quad, 1, |k, ct, slots| {
            assert_eq!(ct, CellType::Line);
            seen.push((k, slots.to_vec()));
        })
        .unwrap();
        assert_eq!(seen[3], (3, vec![Some(4), Some(1)]));
        assert!(for_each_boundary_feature(&quad, 2, |_, _, _| {}).is_err());
    }

    #[test]
    fn feature_key_ignores_orientation() {
        let a = FeatureKey::from_slots(&[Some(3u32), Some(1), Some(2)]).unwrap();
        let b = FeatureKey::from_slots(&[Some(2u32), Some(1), Some(3)]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.points(), &[1, 2, 3]);
        assert!(FeatureKey::<u32>::from_slots(&[Some(1), None]).is_none());
    }

    #[test]
    fn two_triangles_share_one_edge() {
        let cells = [
            Triangle::from_points([1u32, 2, 3]),
            Triangle::from_points([3u32, 2, 4]),
        ];
        let inc = feature_incidence(&cells, 1).unwrap();
        assert_eq!(inc.len(), 5);
        let shared: Vec<_> = inc.interior().collect();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].points, vec![2, 3]);
        assert_eq!(shared[0].incident, vec![(0, 1), (1, 0)]);
        assert_eq!(inc.exterior().count(), 4);
    }

    #[test]
    fn stacked_hexahedra_surface() {
        let cells = [
            Hexahedron::from_points([0u32, 1, 2, 3, 4, 5, 6, 7]),
            Hexahedron::from_points([4u32, 5, 6, 7, 8, 9, 10, 11]),
        ];
        let inc = feature_incidence(&cells, 2).unwrap();
        assert_eq!(inc.len(), 11);
        assert_eq!(inc.interior().count(), 1);
        let surface = exterior_features(&cells, 2).unwrap();
        assert_eq!(surface.len(), 10);
        let quad = surface[0].to_cell().unwrap();
        assert_eq!(quad.cell_type(), CellType::Quadrilateral);
    }

    #[test]
    fn incomplete_cells_are_rejected() {
        let cells = [Triangle::<u32>::new()];
        assert!(matches!(
            feature_incidence(&cells, 1),
            Err(CellError::IncompleteCell { .. })
        ));
        assert!(matches!(
            feature_incidence(&cells, 2),
            Err(CellError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn incomplete_cell_counts_every_unassigned_slot() {
        let mut hex = Hexahedron::from_points([1u32, 2, 3, 4, 5, 6, 7, 8]);
        hex.points_mut()[0] = None;
        hex.points_mut()[6] = None;
        let expected = CellError::IncompleteCell {
            cell_type: CellType::Hexahedron,
            missing: 2,
        };
        assert_eq!(feature_incidence(&[hex.clone()], 2).unwrap_err(), expected);
        assert_eq!(feature_incidence(&[hex.clone()], 0).unwrap_err(), expected);
        assert_eq!(
            crate::topology::validation::validate_cell(
                &hex,
                crate::topology::validation::CellValidationOptions::all()
            )
            .unwrap_err(),
            expected
        );
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_incidence_matches_serial() {
        let cells: Vec<_> = (0..16u32)
            .map(|i| Hexahedron::from_points([0, 1, 2, 3, 4, 5, 6, 7].map(|p| p + 4 * i)))
            .collect();
        let serial = feature_incidence(&cells, 2).unwrap();
        let parallel = par_feature_incidence(&cells, 2).unwrap();
        assert_eq!(serial.features, parallel.features);
    }
}

//! Reference topology tables.
//!
//! Each table maps a local feature index to the ordered local point indices
//! it spans. Edge order is the edge direction and face order is the winding,
//! so consumers computing normals or assembling oriented operators rely on
//! the exact index order below.
//!
//! Local vertex numbering for the solids:
//!
//! ```text
//!  hexahedron                 tetrahedron
//!      7-------6                   3
//!     /|      /|                  /|\
//!    4-------5 |                 / | \
//!    | 3-----|-2                0--|--2
//!    |/      |/                  \ | /
//!    0-------1                    \|/
//!                                  1
//! ```
//!
//! `0..=3` is the bottom face of the hexahedron and `4..=7` the top face.

use crate::cell_error::CellError;
use crate::topology::cell_type::CellType;

/// Identity map used to express vertex features as one-element slices.
static LOCAL_VERTICES: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

pub static TRIANGLE_EDGES: [[usize; 2]; 3] = [[0, 1], [1, 2], [2, 0]];

pub static QUADRILATERAL_EDGES: [[usize; 2]; 4] = [[0, 1], [1, 2], [2, 3], [3, 0]];

pub static TETRAHEDRON_EDGES: [[usize; 2]; 6] = [[0, 1], [1, 2], [2, 0], [0, 3], [1, 3], [2, 3]];

pub static TETRAHEDRON_FACES: [[usize; 3]; 4] = [[0, 1, 3], [1, 2, 3], [2, 0, 3], [0, 2, 1]];

#[rustfmt::skip]
pub static HEXAHEDRON_EDGES: [[usize; 2]; 12] = [
    [0, 1], [1, 2], [3, 2], [0, 3],
    [4, 5], [5, 6], [7, 6], [4, 7],
    [0, 4], [1, 5], [3, 7], [2, 6],
];

#[rustfmt::skip]
pub static HEXAHEDRON_FACES: [[usize; 4]; 6] = [
    [0, 4, 7, 3], [1, 2, 6, 5],
    [0, 1, 5, 4], [3, 7, 6, 2],
    [0, 3, 2, 1], [4, 5, 6, 7],
];

/// Local point indices of feature `feature_id` at `dimension` of `cell_type`.
///
/// # Errors
/// - [`CellError::InvalidDimension`] if the shape defines no features at
///   `dimension`.
/// - [`CellError::FeatureIndexOutOfRange`] if `feature_id` is not below the
///   feature count of that dimension.
pub fn local_feature(
    cell_type: CellType,
    dimension: usize,
    feature_id: usize,
) -> Result<&'static [usize], CellError> {
    let count = cell_type
        .boundary_feature_count(dimension)
        .ok_or(CellError::InvalidDimension {
            cell_type,
            dimension,
        })?;
    if feature_id >= count {
        return Err(CellError::FeatureIndexOutOfRange {
            cell_type,
            dimension,
            feature_id,
            count,
        });
    }
    table_entry(cell_type, dimension, feature_id).ok_or(CellError::InvalidDimension {
        cell_type,
        dimension,
    })
}

/// All features of `cell_type` at `dimension`, in feature-id order.
pub fn local_features(
    cell_type: CellType,
    dimension: usize,
) -> Result<impl Iterator<Item = &'static [usize]>, CellError> {
    let count = cell_type
        .boundary_feature_count(dimension)
        .ok_or(CellError::InvalidDimension {
            cell_type,
            dimension,
        })?;
    Ok((0..count).filter_map(move |k| table_entry(cell_type, dimension, k)))
}

fn table_entry(cell_type: CellType, dimension: usize, k: usize) -> Option<&'static [usize]> {
    match (cell_type, dimension) {
        (_, 0) => LOCAL_VERTICES[..cell_type.number_of_vertices()]
            .get(k)
            .map(std::slice::from_ref),
        (CellType::Triangle, 1) => TRIANGLE_EDGES.get(k).map(|e| &e[..]),
        (CellType::Quadrilateral, 1) => QUADRILATERAL_EDGES.get(k).map(|e| &e[..]),
        (CellType::Tetrahedron, 1) => TETRAHEDRON_EDGES.get(k).map(|e| &e[..]),
        (CellType::Tetrahedron, 2) => TETRAHEDRON_FACES.get(k).map(|f| &f[..]),
        (CellType::Hexahedron, 1) => HEXAHEDRON_EDGES.get(k).map(|e| &e[..]),
        (CellType::Hexahedron, 2) => HEXAHEDRON_FACES.get(k).map(|f| &f[..]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashMap};

    fn directed_edges(face: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..face.len()).map(move |i| (face[i], face[(i + 1) % face.len()]))
    }

    #[test]
    fn hexahedron_tables_are_exact() {
        assert_eq!(local_feature(CellType::Hexahedron, 1, 0).unwrap(), &[0, 1]);
        assert_eq!(local_feature(CellType::Hexahedron, 1, 2).unwrap(), &[3, 2]);
        assert_eq!(local_feature(CellType::Hexahedron, 1, 11).unwrap(), &[2, 6]);
        assert_eq!(
            local_feature(CellType::Hexahedron, 2, 0).unwrap(),
            &[0, 4, 7, 3]
        );
        assert_eq!(
            local_feature(CellType::Hexahedron, 2, 5).unwrap(),
            &[4, 5, 6, 7]
        );
    }

    #[test]
    fn every_hexahedron_vertex_has_three_edges() {
        for v in 0..8 {
            let degree = HEXAHEDRON_EDGES.iter().filter(|e| e.contains(&v)).count();
            assert_eq!(degree, 3, "vertex {v}");
        }
        let distinct: BTreeSet<_> = HEXAHEDRON_EDGES
            .iter()
            .map(|[a, b]| (*a.min(b), *a.max(b)))
            .collect();
        assert_eq!(distinct.len(), 12);
    }

    #[test]
    fn every_tetrahedron_vertex_has_three_edges() {
        for v in 0..4 {
            let degree = TETRAHEDRON_EDGES.iter().filter(|e| e.contains(&v)).count();
            assert_eq!(degree, 3, "vertex {v}");
        }
    }

    #[test]
    fn solids_satisfy_euler_characteristic() {
        for ct in [CellType::Tetrahedron, CellType::Hexahedron] {
            let v = ct.number_of_vertices() as isize;
            let e = ct.number_of_edges() as isize;
            let f = ct.number_of_faces() as isize;
            assert_eq!(v - e + f, 2, "{ct:?}");
        }
    }

    #[test]
    fn solid_faces_have_consistent_winding() {
        for ct in [CellType::Tetrahedron, CellType::Hexahedron] {
            let mut directed: HashMap<(usize, usize), usize> = HashMap::new();
            for face in local_features(ct, 2).unwrap() {
                for de in directed_edges(face) {
                    *directed.entry(de).or_default() += 1;
                }
            }
            // Closed, consistently oriented: each edge once per direction.
            for edge in local_features(ct, 1).unwrap() {
                let (a, b) = (edge[0], edge[1]);
                assert_eq!(directed.get(&(a, b)), Some(&1), "{ct:?} {a}->{b}");
                assert_eq!(directed.get(&(b, a)), Some(&1), "{ct:?} {b}->{a}");
            }
            assert_eq!(directed.len(), 2 * ct.number_of_edges());
        }
    }

    #[test]
    fn planar_edges_form_a_cycle() {
        for ct in [CellType::Triangle, CellType::Quadrilateral] {
            let n = ct.number_of_vertices();
            for (k, edge) in local_features(ct, 1).unwrap().enumerate() {
                assert_eq!(edge, &[k, (k + 1) % n]);
            }
        }
    }

    #[test]
    fn vertex_features_are_identity() {
        for ct in CellType::ALL {
            let ids: Vec<_> = local_features(ct, 0).unwrap().collect();
            assert_eq!(ids.len(), ct.number_of_vertices());
            for (k, id) in ids.iter().enumerate() {
                assert_eq!(*id, &[k]);
            }
        }
    }

    #[test]
    fn lookup_errors() {
        assert_eq!(
            local_feature(CellType::Line, 1, 0),
            Err(CellError::InvalidDimension {
                cell_type: CellType::Line,
                dimension: 1
            })
        );
        assert_eq!(
            local_feature(CellType::Hexahedron, 1, 12),
            Err(CellError::FeatureIndexOutOfRange {
                cell_type: CellType::Hexahedron,
                dimension: 1,
                feature_id: 12,
                count: 12
            })
        );
        assert!(local_feature(CellType::Hexahedron, 3, 0).is_err());
        assert!(local_features(CellType::Triangle, 2).is_err());
    }
}

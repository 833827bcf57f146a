//! Re-export public algorithms.

pub mod boundary;

pub use boundary::{
    boundary_features, closure, exterior_features, feature_incidence, for_each_boundary_feature,
};

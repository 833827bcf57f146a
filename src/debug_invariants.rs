use crate::cell_error::CellError;
use crate::topology::cell::Cell;
use crate::topology::point::PointLike;
use crate::topology::reference;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), CellError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

/// Structural invariants shared by every shape: the slot count equals the
/// shape's point count and every reference-table entry stays inside it.
pub fn check_cell_invariants<P, C>(cell: &C) -> Result<(), CellError>
where
    P: PointLike,
    C: Cell<P> + ?Sized,
{
    let cell_type = cell.cell_type();
    let expected = cell_type.number_of_points();
    let found = cell.points().len();
    if found != expected {
        return Err(CellError::PointCountMismatch {
            cell_type,
            expected,
            found,
        });
    }
    for dimension in cell_type.boundary_dimensions() {
        for local in reference::local_features(cell_type, dimension)? {
            if let Some(&local_id) = local.iter().find(|&&i| i >= found) {
                return Err(CellError::LocalIndexOutOfRange {
                    cell_type,
                    local_id,
                    number_of_points: found,
                });
            }
        }
    }
    Ok(())
}

impl<P: PointLike> DebugInvariants for dyn Cell<P> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Cell");
    }

    fn validate_invariants(&self) -> Result<(), CellError> {
        check_cell_invariants(self)
    }
}

//! Cell validation helpers.

use crate::cell_error::CellError;
use crate::topology::cell::Cell;
use crate::topology::point::PointLike;
use hashbrown::HashSet;

/// Optional validation toggles for cell checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellValidationOptions {
    /// Reject cells with unassigned point slots.
    pub require_fully_assigned: bool,
    /// How to handle a point identifier appearing in more than one slot.
    pub duplicate_points: DuplicateHandling,
}

impl CellValidationOptions {
    /// Enable all cell validation checks.
    pub fn all() -> Self {
        Self {
            require_fully_assigned: true,
            duplicate_points: DuplicateHandling::Error,
        }
    }
}

impl Default for CellValidationOptions {
    fn default() -> Self {
        Self {
            require_fully_assigned: true,
            duplicate_points: DuplicateHandling::Warn,
        }
    }
}

/// Behavior for degenerate (repeated point) detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateHandling {
    /// Skip degenerate detection.
    Ignore,
    /// Log a warning on degenerate cells.
    Warn,
    /// Return an error on degenerate cells.
    Error,
}

/// Validate one cell against `options`.
pub fn validate_cell<P, C>(cell: &C, options: CellValidationOptions) -> Result<(), CellError>
where
    P: PointLike,
    C: Cell<P> + ?Sized,
{
    let cell_type = cell.cell_type();

    if options.require_fully_assigned {
        let missing = cell.points().iter().filter(|slot| slot.is_none()).count();
        if missing > 0 {
            return Err(CellError::IncompleteCell { cell_type, missing });
        }
    }

    if options.duplicate_points == DuplicateHandling::Ignore {
        return Ok(());
    }

    let mut seen = HashSet::with_capacity(cell.number_of_points());
    for point in cell.points().iter().flatten() {
        if !seen.insert(*point) {
            match options.duplicate_points {
                DuplicateHandling::Warn => {
                    log::warn!("Degenerate cell detected: cell_type={cell_type:?} point={point:?}");
                }
                DuplicateHandling::Error => {
                    return Err(CellError::DegenerateCell {
                        cell_type,
                        point: format!("{point:?}"),
                    });
                }
                DuplicateHandling::Ignore => {}
            }
        }
    }

    Ok(())
}

/// Validate every cell, stopping at the first failure.
pub fn validate_cells<'a, P, C, I>(cells: I, options: CellValidationOptions) -> Result<(), CellError>
where
    P: PointLike,
    C: Cell<P> + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
{
    for (index, cell) in cells.into_iter().enumerate() {
        validate_cell(cell, options).inspect_err(|e| {
            log::debug!("cell validation failed at index {index}: {e}");
        })?;
    }
    Ok(())
}

//! `PointId`: a strong, zero-cost handle for mesh points
//!
//! Cells never resolve a point identifier to coordinates; they only copy it
//! between slots. `PointId` wraps a nonzero `u64` so that 0 stays reserved
//! as an invalid or sentinel value in the host container.
//!
//! This module provides:
//! - A transparent `PointId` newtype around `NonZeroU64`.
//! - Constructors and accessors with safety checks.
//! - The [`PointLike`] bound accepted by every cell, so hosts can key cells
//!   with their own identifier type (`u32`, `usize`, ...) instead.

use crate::cell_error::CellError;
use std::{fmt, num::NonZeroU64};

/// Canonical bound set for point identifiers stored in cells.
///
/// - `Copy` for cheap pass-by-value in tight loops
/// - `Eq + Hash` for incidence maps
/// - `Ord` for canonical feature keys and deterministic output
/// - `Debug` for diagnostics
/// - `Send + Sync + 'static` so boxed cells can cross threads
pub trait PointLike: Copy + Eq + std::hash::Hash + Ord + fmt::Debug + Send + Sync + 'static {}
impl<T> PointLike for T where T: Copy + Eq + std::hash::Hash + Ord + fmt::Debug + Send + Sync + 'static
{}

/// Opaque identifier of a point owned by an external mesh container.
///
/// # Memory layout
/// This type is `repr(transparent)`, meaning it has the same ABI and
/// alignment as its single field (`NonZeroU64`), and `Option<PointId>` is
/// still eight bytes.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct PointId(NonZeroU64);

impl PointId {
    /// Creates a new `PointId` from a raw `u64` value.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::InvalidPointId`] if `raw == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use mesh_cells::topology::point::PointId;
    /// let p = PointId::new(1)?;
    /// assert_eq!(p.get(), 1);
    /// # Ok::<(), mesh_cells::cell_error::CellError>(())
    /// ```
    #[inline]
    pub fn new(raw: u64) -> Result<Self, CellError> {
        NonZeroU64::new(raw)
            .map(PointId)
            .ok_or(CellError::InvalidPointId)
    }

    /// Returns the inner `u64` value of this `PointId`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for PointId {
    type Error = CellError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        PointId::new(raw)
    }
}

impl From<PointId> for u64 {
    fn from(p: PointId) -> Self {
        p.get()
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

/// Displays as `PointId(raw_value)`.
impl fmt::Debug for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PointId").field(&self.get()).finish()
    }
}

/// Prints the numeric ID without any wrapper text.
impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::{assert_eq_align, assert_eq_size};

    // Unassigned cell slots rely on the niche.
    assert_eq_size!(PointId, u64);
    assert_eq_size!(Option<PointId>, u64);
    assert_eq_align!(PointId, u64);
}

//! Coordinate orderings over the input point set.
//!
//! The solver consumes two permutations of the same points: `by_x` (ascending
//! x) and `by_y` (ascending y). Both comparators are total orders: coordinate
//! ties fall through to the other coordinate and finally to the original input
//! index, so equal or duplicated points still sort identically on every run.
//! Ambiguous comparisons would make recursion splits and strip contents depend
//! on sort internals, which is exactly what the index tie-break closes off.

use glam::DVec2;

use crate::error::ClosestPairError;

/// Index permutations of one point set, ordered two different ways.
///
/// Both vectors reference the same backing points; they own no coordinates.
pub(crate) struct Orderings {
    /// Ascending x, ties by y, then by original index.
    pub by_x: Vec<u32>,
    /// Ascending y, ties by x, then by original index.
    pub by_y: Vec<u32>,
}

/// Total order used for the x-sorted view.
///
/// `total_cmp` keeps this well-defined on every bit pattern; finite inputs are
/// enforced separately by [`check_finite`].
#[inline]
pub(crate) fn cmp_by_x(points: &[DVec2], a: u32, b: u32) -> std::cmp::Ordering {
    let pa = points[a as usize];
    let pb = points[b as usize];
    pa.x.total_cmp(&pb.x)
        .then_with(|| pa.y.total_cmp(&pb.y))
        .then_with(|| a.cmp(&b))
}

/// Total order used for the y-sorted view.
#[inline]
pub(crate) fn cmp_by_y(points: &[DVec2], a: u32, b: u32) -> std::cmp::Ordering {
    let pa = points[a as usize];
    let pb = points[b as usize];
    pa.y.total_cmp(&pb.y)
        .then_with(|| pa.x.total_cmp(&pb.x))
        .then_with(|| a.cmp(&b))
}

/// Build both orderings for `points`.
///
/// Stable and deterministic: the comparators are total orders, so repeated
/// runs on the same input produce identical permutations (and therefore
/// identical recursion splits downstream).
pub(crate) fn build_orderings(points: &[DVec2]) -> Orderings {
    let mut by_x: Vec<u32> = (0..points.len() as u32).collect();
    let mut by_y = by_x.clone();

    by_x.sort_by(|&a, &b| cmp_by_x(points, a, b));
    by_y.sort_by(|&a, &b| cmp_by_y(points, a, b));

    Orderings { by_x, by_y }
}

/// Report the first point with a NaN or infinite coordinate.
///
/// Runs before sorting so that non-finite input is surfaced as a distinct
/// error instead of silently producing a meaningless ordering.
pub(crate) fn check_finite(points: &[DVec2]) -> Result<(), ClosestPairError> {
    for (index, p) in points.iter().enumerate() {
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(ClosestPairError::NonFiniteCoordinate { index });
        }
    }
    Ok(())
}

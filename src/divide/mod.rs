//! Divide-and-conquer closest-pair solver.
//!
//! The recursion splits the x-ordered range at its median, solves both halves,
//! then finds cross-boundary pairs with a strip scan over the y-ordered range
//! (see [`strip`]). Working storage is a single [`Scratch`] allocated at the
//! entry point and reused top-down, so auxiliary memory stays O(n).
//!
//! `solve` maintains one invariant that makes the single-buffer design work:
//! the y-ordered range it receives is y-sorted again when it returns. Each
//! level partitions its range in place around the median, recurses (both
//! halves come back y-sorted), and merges the halves back before the strip
//! scan. Partition and merge are both O(range), keeping the O(n log n) total.

mod brute;
mod strip;

pub(crate) use brute::closest_all;

use std::cmp::Ordering;

use glam::DVec2;

use crate::sort::{cmp_by_x, cmp_by_y};

/// Ranges at or below this size are solved exhaustively.
///
/// 3 is the classical cutoff: a smaller split would leave a half with fewer
/// than two points, where no dividing line yields a meaningful strip bound.
/// Anything in 2..=4 is correct; the asymptotics don't depend on the choice.
pub(crate) const BRUTE_FORCE_CUTOFF: usize = 3;

/// Candidate pair tracked during recursion.
///
/// Distances stay squared on the hot path; the square root is taken once on
/// the final result.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub a: u32,
    pub b: u32,
    pub dist_sq: f64,
}

/// Reusable working storage for one solve.
struct Scratch {
    /// Partition/merge buffer, sized to the full point count.
    ids: Vec<u32>,
    /// Strip membership for the current merge step.
    strip: Vec<u32>,
}

impl Scratch {
    fn new(n: usize) -> Self {
        Self {
            ids: Vec::with_capacity(n),
            strip: Vec::with_capacity(n),
        }
    }
}

/// Find the closest pair over the whole input.
///
/// `by_x` and `by_y` must be the orderings produced by
/// [`crate::sort::build_orderings`] for `points`. `by_y` is reordered during
/// recursion and restored to y-order on return.
pub(crate) fn closest_pair(points: &[DVec2], by_x: &[u32], by_y: &mut [u32]) -> Candidate {
    debug_assert!(by_x.len() >= 2);
    debug_assert_eq!(by_x.len(), by_y.len());

    let mut scratch = Scratch::new(points.len());
    solve(points, by_x, by_y, &mut scratch)
}

fn solve(points: &[DVec2], by_x: &[u32], by_y: &mut [u32], scratch: &mut Scratch) -> Candidate {
    let n = by_x.len();
    // An empty range here means the split logic is broken, not bad input.
    debug_assert!(n >= 2, "solver range must contain at least two points");
    debug_assert_eq!(n, by_y.len());

    if n <= BRUTE_FORCE_CUTOFF {
        let best = brute::closest_in_ids(points, by_x);
        // Tiny ranges uphold the restore contract by sorting directly.
        by_y.sort_unstable_by(|&a, &b| cmp_by_y(points, a, b));
        return best;
    }

    let mid = n / 2;
    let pivot = by_x[mid];

    partition_around(points, by_y, pivot, mid, &mut scratch.ids);

    let (left_y, right_y) = by_y.split_at_mut(mid);
    let left = solve(points, &by_x[..mid], left_y, scratch);
    let right = solve(points, &by_x[mid..], right_y, scratch);

    // First-discovered pair wins ties: replace only on strictly smaller.
    let mut best = if right.dist_sq < left.dist_sq {
        right
    } else {
        left
    };

    merge_halves(points, by_y, mid, &mut scratch.ids);

    let line_x = points[pivot as usize].x;
    strip::scan(points, by_y, line_x, &mut best, &mut scratch.strip);

    best
}

/// Stable in-place partition of the y-ordered range around the x-median.
///
/// A point goes left exactly when it precedes `pivot` in the x-ordering's
/// total order, so the left partition is precisely `by_x[..mid]`; duplicated
/// x coordinates cannot unbalance the split the way a raw `x <= pivot.x` test
/// would. Relative y-order is preserved within each side.
fn partition_around(
    points: &[DVec2],
    by_y: &mut [u32],
    pivot: u32,
    mid: usize,
    buf: &mut Vec<u32>,
) {
    buf.clear();
    buf.extend(
        by_y.iter()
            .copied()
            .filter(|&id| cmp_by_x(points, id, pivot) == Ordering::Less),
    );
    debug_assert_eq!(buf.len(), mid, "partition must split exactly at the median");
    buf.extend(
        by_y.iter()
            .copied()
            .filter(|&id| cmp_by_x(points, id, pivot) != Ordering::Less),
    );
    by_y.copy_from_slice(buf);
}

/// Merge two y-sorted halves back into one y-sorted range.
fn merge_halves(points: &[DVec2], by_y: &mut [u32], mid: usize, buf: &mut Vec<u32>) {
    buf.clear();

    let (left, right) = by_y.split_at(mid);
    let mut li = 0;
    let mut ri = 0;

    while li < left.len() && ri < right.len() {
        if cmp_by_y(points, left[li], right[ri]) == Ordering::Less {
            buf.push(left[li]);
            li += 1;
        } else {
            buf.push(right[ri]);
            ri += 1;
        }
    }
    buf.extend_from_slice(&left[li..]);
    buf.extend_from_slice(&right[ri..]);

    by_y.copy_from_slice(buf);
}

//! Exact closest pair of points in the plane.
//!
//! This crate finds the two points with minimum Euclidean distance in a finite
//! planar point set in O(n log n) time, using the classic divide-and-conquer
//! scheme: split the x-sorted set at its median, solve both halves, then merge
//! with a y-ordered strip scan bounded by the best distance found so far.
//!
//! It is a one-shot batch computation over a fixed point set: no index is
//! built for repeated queries, and only two dimensions are supported.
//!
//! # Example
//!
//! ```
//! use planar_closest_pair::{compute, Point2};
//!
//! let points = vec![
//!     Point2::new(2.0, 3.0),
//!     Point2::new(12.0, 30.0),
//!     Point2::new(40.0, 50.0),
//!     Point2::new(5.0, 1.0),
//!     Point2::new(12.0, 10.0),
//!     Point2::new(3.0, 5.0),
//! ];
//!
//! let pair = compute(&points).expect("computation should succeed");
//! assert_eq!((pair.first_index, pair.second_index), (0, 5));
//! assert!((pair.distance - 5.0_f64.sqrt()).abs() < 1e-12);
//! ```

mod divide;
mod error;
mod sort;
mod types;
pub mod validation;

pub use error::ClosestPairError;
pub use types::{ClosestPair, Point2, Point2Like};

/// Configuration for closest-pair computation.
#[derive(Debug, Clone)]
pub struct ClosestPairConfig {
    /// If true, scan the input for NaN/infinite coordinates before sorting.
    ///
    /// The coordinate comparators have no meaningful order on non-finite
    /// values, so the scan is on by default and reports the first offender.
    /// Callers that already guarantee finite inputs can disable it to skip
    /// the extra pass; feeding non-finite coordinates with the scan disabled
    /// is a precondition violation with unspecified (but memory-safe) output.
    pub validate_finite: bool,
}

impl Default for ClosestPairConfig {
    fn default() -> Self {
        Self {
            validate_finite: true,
        }
    }
}

/// Find the closest pair with default settings.
///
/// Returns [`ClosestPairError::InsufficientPoints`] for inputs with fewer
/// than two points; a 0- or 1-point set is a legitimate query with no pair.
pub fn compute<P: Point2Like>(points: &[P]) -> Result<ClosestPair, ClosestPairError> {
    compute_with(points, ClosestPairConfig::default())
}

/// Find the closest pair with explicit configuration.
pub fn compute_with<P: Point2Like>(
    points: &[P],
    config: ClosestPairConfig,
) -> Result<ClosestPair, ClosestPairError> {
    use glam::DVec2;

    if points.len() < 2 {
        return Err(ClosestPairError::InsufficientPoints(points.len()));
    }

    // Convert input points once; everything downstream works on index views.
    let dvec_points: Vec<DVec2> = points.iter().map(|p| DVec2::new(p.x(), p.y())).collect();

    if config.validate_finite {
        sort::check_finite(&dvec_points)?;
    }

    let mut orderings = sort::build_orderings(&dvec_points);
    let candidate = divide::closest_pair(&dvec_points, &orderings.by_x, &mut orderings.by_y);

    Ok(finish(&dvec_points, candidate))
}

/// Find the closest pair by exhaustive O(n^2) comparison.
///
/// Reference implementation with the same contract as [`compute`]. It exists
/// as the correctness oracle for tests and benchmarks; use [`compute`] for
/// anything beyond a few thousand points.
pub fn compute_brute_force<P: Point2Like>(
    points: &[P],
) -> Result<ClosestPair, ClosestPairError> {
    use glam::DVec2;

    if points.len() < 2 {
        return Err(ClosestPairError::InsufficientPoints(points.len()));
    }

    let dvec_points: Vec<DVec2> = points.iter().map(|p| DVec2::new(p.x(), p.y())).collect();
    sort::check_finite(&dvec_points)?;

    let candidate = divide::closest_all(&dvec_points);
    Ok(finish(&dvec_points, candidate))
}

/// Turn an internal candidate into the public result record.
///
/// Indices are normalized to ascending order; the single square root of the
/// computation happens here.
fn finish(points: &[glam::DVec2], candidate: divide::Candidate) -> ClosestPair {
    let (ia, ib) = if candidate.a <= candidate.b {
        (candidate.a, candidate.b)
    } else {
        (candidate.b, candidate.a)
    };

    ClosestPair {
        first_index: ia as usize,
        second_index: ib as usize,
        first: Point2::from_dvec2(points[ia as usize]),
        second: Point2::from_dvec2(points[ib as usize]),
        distance: candidate.dist_sq.sqrt(),
    }
}

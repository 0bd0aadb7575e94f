//! Validation of closest-pair results against the exhaustive reference.
//!
//! Cross-checks a reported pair for internal consistency and optimality.
//! Useful for debugging, testing, and benchmark verification; the reference
//! scan is O(n^2), so keep it away from production-sized inputs.

use crate::{compute_brute_force, ClosestPair, Point2, Point2Like};

/// Detailed validation report for a computed closest pair.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Number of points in the validated set.
    pub num_points: usize,
    /// Distance reported by the result under validation.
    pub reported_distance: f64,
    /// Minimum distance found by the exhaustive reference scan
    /// (None if the reference itself could not run, e.g. non-finite input).
    pub reference_distance: Option<f64>,

    /// Indices are in bounds and distinct, with `first_index < second_index`.
    pub indices_valid: bool,
    /// Reported coordinates match the input points at the reported indices.
    pub coordinates_match: bool,
    /// Reported distance equals the distance recomputed from the coordinates.
    pub distance_consistent: bool,
    /// Reported distance equals the reference minimum.
    pub distance_optimal: bool,
}

impl ValidationReport {
    /// True if every check passed.
    pub fn is_valid(&self) -> bool {
        self.indices_valid
            && self.coordinates_match
            && self.distance_consistent
            && self.distance_optimal
    }

    /// Format a summary of any issues found.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            return "Valid".to_string();
        }

        let mut issues = Vec::new();

        if !self.indices_valid {
            issues.push("invalid indices".to_string());
        }
        if !self.coordinates_match {
            issues.push("coordinates do not match indices".to_string());
        }
        if !self.distance_consistent {
            issues.push("distance inconsistent with coordinates".to_string());
        }
        if !self.distance_optimal {
            match self.reference_distance {
                Some(reference) => issues.push(format!(
                    "not optimal: reported {} vs reference {}",
                    self.reported_distance, reference
                )),
                None => issues.push("reference scan unavailable".to_string()),
            }
        }

        issues.join(", ")
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ValidationReport {{ n={}, distance={}, {} }}",
            self.num_points,
            self.reported_distance,
            self.summary()
        )
    }
}

/// Validate a reported closest pair against `points`.
pub fn validate<P: Point2Like>(points: &[P], pair: &ClosestPair) -> ValidationReport {
    let n = points.len();

    let indices_valid =
        pair.first_index < pair.second_index && pair.second_index < n;

    let coordinates_match = indices_valid
        && Point2::from_like(&points[pair.first_index]) == pair.first
        && Point2::from_like(&points[pair.second_index]) == pair.second;

    let distance_consistent = pair.distance == pair.first.distance(pair.second);

    let reference_distance = compute_brute_force(points).ok().map(|r| r.distance);
    let distance_optimal = reference_distance == Some(pair.distance);

    ValidationReport {
        num_points: n,
        reported_distance: pair.distance,
        reference_distance,
        indices_valid,
        coordinates_match,
        distance_consistent,
        distance_optimal,
    }
}

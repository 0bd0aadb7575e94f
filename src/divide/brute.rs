//! Exhaustive pairwise comparison.
//!
//! Terminates the recursion on tiny ranges and doubles as the reference
//! implementation behind [`crate::compute_brute_force`].

use glam::DVec2;

use super::Candidate;

/// Closest pair among the points selected by `ids`.
///
/// Checks every pair; replacement only happens on a strictly smaller squared
/// distance, so the first-discovered pair wins exact ties.
pub(crate) fn closest_in_ids(points: &[DVec2], ids: &[u32]) -> Candidate {
    debug_assert!(ids.len() >= 2, "exhaustive scan needs at least two points");

    let mut best = Candidate {
        a: ids[0],
        b: ids[1],
        dist_sq: f64::INFINITY,
    };

    for i in 0..ids.len() {
        let pi = points[ids[i] as usize];
        for j in (i + 1)..ids.len() {
            let pj = points[ids[j] as usize];
            let dist_sq = pi.distance_squared(pj);
            if dist_sq < best.dist_sq {
                best = Candidate {
                    a: ids[i],
                    b: ids[j],
                    dist_sq,
                };
            }
        }
    }

    best
}

/// Closest pair over the whole point set.
pub(crate) fn closest_all(points: &[DVec2]) -> Candidate {
    debug_assert!(points.len() >= 2);

    let mut best = Candidate {
        a: 0,
        b: 1,
        dist_sq: f64::INFINITY,
    };

    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let dist_sq = points[i].distance_squared(points[j]);
            if dist_sq < best.dist_sq {
                best = Candidate {
                    a: i as u32,
                    b: j as u32,
                    dist_sq,
                };
            }
        }
    }

    best
}

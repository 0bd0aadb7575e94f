//! Cross-boundary strip scan.
//!
//! After both halves of a split are solved, any closer pair must straddle the
//! dividing line with both points within the current best distance `d` of it.
//! Those points form the strip; scanning it in y-order with the y-gap cutoff
//! below makes the whole step linear: at most a handful of points at mutual
//! distance >= d fit in a d x 2d box, so each point is compared against a
//! bounded number of successors regardless of range size.

use glam::DVec2;

use super::Candidate;

/// Scan the strip around `line_x` for a pair closer than `best`.
///
/// `by_y` must cover the full range of the current split in y-order. Strip
/// membership uses the strict bound `(x - line_x)^2 < best.dist_sq`; the inner
/// scan stops at the first successor whose squared y-gap reaches the running
/// best, which only tightens as closer pairs are found.
pub(super) fn scan(
    points: &[DVec2],
    by_y: &[u32],
    line_x: f64,
    best: &mut Candidate,
    strip: &mut Vec<u32>,
) {
    strip.clear();
    for &id in by_y {
        let dx = points[id as usize].x - line_x;
        if dx * dx < best.dist_sq {
            strip.push(id);
        }
    }

    for i in 0..strip.len() {
        let pi = points[strip[i] as usize];
        for &id_j in &strip[i + 1..] {
            let pj = points[id_j as usize];
            let dy = pj.y - pi.y;
            if dy * dy >= best.dist_sq {
                break;
            }
            let dist_sq = pi.distance_squared(pj);
            if dist_sq < best.dist_sq {
                *best = Candidate {
                    a: strip[i],
                    b: id_j,
                    dist_sq,
                };
            }
        }
    }
}

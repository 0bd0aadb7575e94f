#![allow(dead_code)]

use planar_closest_pair::Point2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generate random points uniformly distributed in a square.
pub fn random_points(n: usize, seed: u64) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_points_with_rng(n, &mut rng)
}

pub fn random_points_with_rng<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point2> {
    (0..n)
        .map(|_| {
            let x: f64 = rng.gen_range(-1000.0..1000.0);
            let y: f64 = rng.gen_range(-1000.0..1000.0);
            Point2::new(x, y)
        })
        .collect()
}

/// Generate points on an integer grid.
///
/// Maximizes coordinate ties in both axes: every row shares y values and
/// every column shares x values, stressing the comparator tie-breaking.
pub fn grid_points(side: usize) -> Vec<Point2> {
    let mut points = Vec::with_capacity(side * side);
    for i in 0..side {
        for j in 0..side {
            points.push(Point2::new(i as f64, j as f64));
        }
    }
    points
}

/// Generate points in a few tight clusters spread far apart.
///
/// The closest pair is almost surely inside one cluster, and strips near
/// cluster boundaries contain many near-equidistant candidates.
pub fn clustered_points(n: usize, num_clusters: usize, spread: f64, seed: u64) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let centers: Vec<Point2> = (0..num_clusters)
        .map(|_| {
            let x: f64 = rng.gen_range(-1e6..1e6);
            let y: f64 = rng.gen_range(-1e6..1e6);
            Point2::new(x, y)
        })
        .collect();

    (0..n)
        .map(|i| {
            let c = centers[i % num_clusters];
            let dx: f64 = rng.gen_range(-spread..spread);
            let dy: f64 = rng.gen_range(-spread..spread);
            Point2::new(c.x + dx, c.y + dy)
        })
        .collect()
}

/// Generate colinear points on a horizontal line, in shuffled x order.
///
/// Constant y is the degenerate case where every point lies inside every
/// strip vertically; the y-gap cutoff has to do all the pruning.
pub fn colinear_points(n: usize, y: f64, seed: u64) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut xs: Vec<f64> = (0..n).map(|i| i as f64 * 10.0).collect();
    // Fisher-Yates shuffle so input order is unrelated to x order.
    for i in (1..xs.len()).rev() {
        let j = rng.gen_range(0..=i);
        xs.swap(i, j);
    }

    xs.into_iter().map(|x| Point2::new(x, y)).collect()
}

/// Generate points where many exact duplicates exist.
pub fn duplicate_heavy_points(n: usize, num_distinct: usize, seed: u64) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let distinct = random_points_with_rng(num_distinct, &mut rng);

    (0..n)
        .map(|_| distinct[rng.gen_range(0..distinct.len())])
        .collect()
}

/// Shuffle a point set with a seeded RNG.
pub fn shuffled(points: &[Point2], seed: u64) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = points.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

//! Correctness properties for planar-closest-pair.
//!
//! The exhaustive O(n^2) scan is the oracle: for every distribution the
//! divide-and-conquer result distance must equal the true minimum.

mod support;

use planar_closest_pair::{compute, compute_brute_force, validation::validate};
use support::points::{
    clustered_points, colinear_points, duplicate_heavy_points, grid_points, random_points,
    shuffled,
};

#[test]
fn test_matches_oracle_random() {
    for n in [2, 3, 4, 5, 6, 7, 8, 12, 17, 25, 33, 48, 64] {
        for seed in 0..8 {
            let points = random_points(n, seed * 1000 + n as u64);
            let pair = compute(&points).unwrap();
            let reference = compute_brute_force(&points).unwrap();
            assert_eq!(
                pair.distance, reference.distance,
                "mismatch for n={} seed={}",
                n, seed
            );
        }
    }
}

#[test]
fn test_matches_oracle_clustered() {
    for seed in 0..8 {
        let points = clustered_points(120, 4, 0.5, seed);
        let pair = compute(&points).unwrap();
        let reference = compute_brute_force(&points).unwrap();
        assert_eq!(pair.distance, reference.distance, "seed={}", seed);
    }
}

#[test]
fn test_matches_oracle_grid() {
    // Integer grid: maximal coordinate ties, every nearest-neighbor distance
    // equal. Only the distance is canonical, not which pair wins.
    for side in [2, 3, 5, 8] {
        let points = grid_points(side);
        let pair = compute(&points).unwrap();
        let reference = compute_brute_force(&points).unwrap();
        assert_eq!(pair.distance, reference.distance, "side={}", side);
        assert_eq!(pair.distance, 1.0, "side={}", side);
    }
}

#[test]
fn test_duplicate_points_give_zero_distance() {
    for seed in 0..8 {
        let points = duplicate_heavy_points(100, 30, seed);
        let pair = compute(&points).unwrap();
        assert_eq!(pair.distance, 0.0, "duplicates guarantee a zero pair");
    }
}

#[test]
fn test_matches_oracle_colinear() {
    for seed in 0..8 {
        let points = colinear_points(80, 5.0, seed);
        let pair = compute(&points).unwrap();
        let reference = compute_brute_force(&points).unwrap();
        assert_eq!(pair.distance, reference.distance, "seed={}", seed);
        assert_eq!(pair.distance, 10.0);
    }
}

#[test]
fn test_idempotence() {
    let points = random_points(150, 5555);
    let first = compute(&points).unwrap();
    let second = compute(&points).unwrap();
    assert_eq!(first, second, "same input must give the identical result");
}

#[test]
fn test_permutation_invariance_of_distance() {
    let points = random_points(150, 9999);
    let reference = compute(&points).unwrap();

    for seed in 0..10 {
        let permuted = shuffled(&points, seed);
        let pair = compute(&permuted).unwrap();
        // The winning pair among exact ties may differ; the distance may not.
        assert_eq!(pair.distance, reference.distance, "seed={}", seed);
    }
}

#[test]
fn test_reported_distance_consistent_with_points() {
    for seed in 0..10 {
        let points = random_points(60, seed + 424242);
        let pair = compute(&points).unwrap();
        assert_eq!(pair.distance, pair.first.distance(pair.second));
        assert_eq!(pair.first, points[pair.first_index]);
        assert_eq!(pair.second, points[pair.second_index]);
    }
}

#[test]
fn test_validation_report_clean() {
    for seed in 0..5 {
        let points = random_points(90, seed * 11 + 3);
        let pair = compute(&points).unwrap();
        let report = validate(&points, &pair);
        assert!(report.is_valid(), "seed={}: {}", seed, report);
    }
}

#[test]
fn test_larger_sets_spot_check() {
    // A few bigger sets, still cheap enough for the O(n^2) oracle.
    for n in [500, 1000] {
        let points = random_points(n, n as u64);
        let pair = compute(&points).unwrap();
        let reference = compute_brute_force(&points).unwrap();
        assert_eq!(pair.distance, reference.distance, "n={}", n);
    }
}

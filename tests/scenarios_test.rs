// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed scenarios with known answers.

mod common;

use collatz_lattice::collatz::{parity_string, trajectory, AffineTransform};
use collatz_lattice::error::CollatzError;
use collatz_lattice::memo::{Element, SequenceCache};
use collatz_lattice::solver::{solve, LatticeSolution, DEFAULT_SAMPLE_COUNT};
use common::{big, first_samples, on_line, ratio};

#[test]
fn test_six() {
    assert_eq!(trajectory(6).unwrap(), vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
    assert_eq!(parity_string(6).unwrap(), "01010000");

    let transform = AffineTransform::accumulate(6).unwrap();
    assert_eq!(transform.a, ratio(9, 64));
    assert_eq!(transform.b, ratio(5, 32));

    let solution = LatticeSolution::for_transform(&transform).unwrap();
    assert_eq!(
        first_samples(&solution, DEFAULT_SAMPLE_COUNT),
        vec![(6, 1), (70, 10), (134, 19), (198, 28), (262, 37), (326, 46)]
    );
}

#[test]
fn test_one() {
    let mut cache = SequenceCache::new();
    let seq = cache.compact_sequence(1, false).unwrap();
    assert_eq!(seq.elements(), &[Element::Value(1)]);
    assert_eq!(parity_string(1).unwrap(), "");
    assert_eq!(AffineTransform::accumulate(1).unwrap(), AffineTransform::identity());
}

#[test]
fn test_three_sixty_fourths_is_reproducible() {
    let run = || solve(&big(3), &big(64), &big(1), &big(16)).unwrap();
    let first = run();
    let second = run();
    assert_eq!(first, second);
    assert_eq!(first.m, big(64));

    let equations = first.equations();
    assert_eq!(equations.y_of_k, "y = 1 + 3k");
    assert_eq!(equations.x_of_y, "x = (64y - 4) / 3");
    assert_eq!(
        first_samples(&first, DEFAULT_SAMPLE_COUNT),
        vec![(20, 1), (84, 4), (148, 7), (212, 10), (276, 13), (340, 16)]
    );
    for (x, y) in first.samples(DEFAULT_SAMPLE_COUNT) {
        assert!(on_line(&ratio(3, 64), &ratio(1, 16), &x, &y));
    }
}

#[test]
fn test_contrived_no_inverse() {
    // y = (2/4)x + 0 clears to 4y = 2x, and 4 has no inverse modulo 2
    let result = solve(&big(2), &big(4), &big(0), &big(1));
    assert_eq!(
        result,
        Err(CollatzError::NoModularInverse {
            value: big(4),
            modulus: big(2),
            gcd: big(2),
        })
    );
}

#[test]
fn test_zero_start_rejected_everywhere() {
    let mut cache = SequenceCache::new();
    let invalid = CollatzError::InvalidInput { value: 0 };
    assert_eq!(cache.compact_sequence(0, false), Err(invalid.clone()));
    assert_eq!(cache.compact_sequence(0, true), Err(invalid.clone()));
    assert_eq!(AffineTransform::accumulate(0), Err(invalid.clone()));
    assert_eq!(parity_string(0), Err(invalid));
}

#[test]
fn test_twenty_seven() {
    // long trajectory: 111 steps, peak 9232
    let values = trajectory(27).unwrap();
    assert_eq!(values.len(), 112);
    assert_eq!(values.iter().max(), Some(&9232));

    let transform = AffineTransform::accumulate(27).unwrap();
    let solution = LatticeSolution::for_transform(&transform).unwrap();
    assert!(solution.contains(&big(27), &big(1)));
    for (x, y) in solution.samples(3) {
        assert!(on_line(&transform.a, &transform.b, &x, &y));
    }
}

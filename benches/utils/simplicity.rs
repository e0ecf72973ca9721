#![allow(dead_code)]

use geo::{line_intersection::line_intersection, Line};
use ring_sweep::{is_simple, SelfIntersections};

pub fn count_sweep(ring: &[Line<f64>]) -> usize {
    SelfIntersections::new(ring).count()
}

pub fn simple_sweep(ring: &[Line<f64>]) -> bool {
    is_simple(ring)
}

/// Count intersecting non-adjacent pairs by testing every pair.
pub fn count_brute(ring: &[Line<f64>]) -> usize {
    let n = ring.len();
    if n < 3 {
        return 0;
    }
    let mut count = 0;
    for i in 0..n {
        for j in i + 1..n {
            if (i + 1) % n == j || (j + 1) % n == i {
                continue;
            }
            if line_intersection(ring[i], ring[j]).is_some() {
                count += 1;
            }
        }
    }
    count
}

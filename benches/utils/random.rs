#![allow(dead_code)]

use std::f64::consts::PI;

use geo::{Coordinate, LineString, Rect};

use rand::Rng;
use rand_distr::{Standard, Uniform};

const EXTENT: f64 = 1024.;

#[inline]
pub fn uniform_point<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Coordinate<f64> {
    let coords: [f64; 2] = rng.sample(Standard);
    let dims = bounds.max() - bounds.min();
    Coordinate {
        x: bounds.min().x + dims.x * coords[0],
        y: bounds.min().y + dims.y * coords[1],
    }
}

fn close(mut coords: Vec<Coordinate<f64>>) -> LineString<f64> {
    if let Some(&first) = coords.first() {
        coords.push(first);
    }
    LineString(coords)
}

/// A closed ring through `n` uniform random points. Almost always
/// self-intersecting once `n > 3`.
pub fn random_ring<R: Rng>(mut rng: R, n: usize) -> LineString<f64> {
    let bounds = Rect::new([0., 0.], [EXTENT, EXTENT]);
    close((0..n).map(|_| uniform_point(&mut rng, bounds)).collect())
}

/// A closed star-shaped ring with `n` vertices around the center of
/// the extent. Always simple.
pub fn circular_ring<R: Rng>(mut rng: R, n: usize) -> LineString<f64> {
    let step = 2. * PI / n as f64;
    let radius = Uniform::new(0.5, 1.);
    let jitter = Uniform::new(0., 0.5);
    let center = EXTENT / 2.;
    close(
        (0..n)
            .map(|i| {
                let angle = (i as f64 + rng.sample(&jitter)) * step;
                let r = rng.sample(&radius) * center;
                Coordinate {
                    x: center + r * angle.cos(),
                    y: center + r * angle.sin(),
                }
            })
            .collect(),
    )
}

//! Plane-sweep self-intersection checks for polygon rings.
//!
//! Before a polygon is encoded into a vector tile, its rings must be
//! *simple*: no two edges may meet except consecutive edges at their
//! shared vertex. This crate checks that with a single-pass variant of
//! the [Bentley-Ottman] sweep.
//!
//! ## Usage
//!
//! The input is a slice of [`Line`]s in ring order: segment `i` runs
//! from vertex `i` to vertex `(i + 1) % n`. Use [`is_simple`] for a
//! yes/no answer, or [`SelfIntersections`] to enumerate the pairs of
//! segments that intersect. The crossing point of a pair is computed
//! only if asked for.
//!
//! ```rust
//! use geo::Line;
//! use ring_sweep::{is_simple, SelfIntersections};
//! let square = vec![
//!     Line::from([(0., 0.), (1., 0.)]),
//!     Line::from([(1., 0.), (1., 1.)]),
//!     Line::from([(1., 1.), (0., 1.)]),
//!     Line::from([(0., 1.), (0., 0.)]),
//! ];
//! assert!(is_simple(&square));
//!
//! let bowtie = vec![
//!     Line::from([(0., 0.), (1., 1.)]),
//!     Line::from([(1., 1.), (1., 0.)]),
//!     Line::from([(1., 0.), (0., 1.)]),
//!     Line::from([(0., 1.), (0., 0.)]),
//! ];
//! let isec = SelfIntersections::new(&bowtie).next().unwrap();
//! assert_eq!(isec.indices(), (0, 2));
//! assert!(isec.point().is_some());
//! ```
//!
//! Ring order is not checked by the sweep. Build a [`Ring`] from a
//! [`LineString`] or from segments to validate it first, or use
//! [`polygon_is_simple`] for whole polygons.
//!
//! [Bentley-Ottman]: //en.wikipedia.org/wiki/Bentley%E2%80%93Ottmann_algorithm
//! [`Line`]: geo::Line
//! [`LineString`]: geo::LineString
mod events;
pub use events::{Event, EventQueue, EventType, SweepPoint};

mod canonical;
pub use canonical::{is_left, CanonicalLine};

pub mod intersects;
pub use intersects::{
    find_intersects, find_intersects_with_logger, is_simple, is_simple_with_logger, Intersection,
    SelfIntersections,
};

pub mod ring;
pub use ring::{polygon_is_simple, polygon_is_simple_with_logger, Ring, RingError};

pub mod logging;
pub use logging::{Logger, Severity};

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;

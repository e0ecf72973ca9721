//! Construction of validated rings from `geo` geometries.
//!
//! The sweep relies on segments being passed in ring order. [`Ring`]
//! checks that before handing the segments over, so that errors in
//! upstream geometry surface as a [`RingError`] instead of as wrong
//! answers.

use std::convert::TryFrom;

use geo::{Coordinate, GeoFloat, Line, LineString, Polygon};
use itertools::Itertools;
use thiserror::Error;

use crate::{
    find_intersects, find_intersects_with_logger, intersects::SelfIntersections, Intersection,
    Logger, SweepPoint,
};

/// Reasons a set of segments can't be used as a ring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("ring needs at least 3 distinct vertices, got {0}")]
    TooFewCoords(usize),
    #[error("non-finite coordinate at vertex {index}")]
    NonFinite { index: usize },
    #[error("segment {index} does not end where the next segment starts")]
    NotClosed { index: usize },
}

/// The edges of a closed polygon boundary, in order.
///
/// Edge `i` ends where edge `(i + 1) % len` starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring<T: GeoFloat> {
    segments: Vec<Line<T>>,
}

impl<T: GeoFloat> Ring<T> {
    /// Create a ring from segments already in ring order.
    pub fn from_segments(segments: Vec<Line<T>>) -> Result<Self, RingError> {
        for (index, line) in segments.iter().enumerate() {
            check_finite(index, line.start)?;
        }
        check_distinct(segments.iter().map(|l| l.start))?;
        for (index, (a, b)) in segments.iter().circular_tuple_windows().enumerate() {
            if a.end != b.start {
                return Err(RingError::NotClosed { index });
            }
        }
        Ok(Ring { segments })
    }

    #[inline]
    pub fn segments(&self) -> &[Line<T>] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// See [`crate::is_simple`].
    pub fn is_simple(&self) -> bool {
        crate::is_simple(&self.segments)
    }

    /// See [`crate::is_simple_with_logger`].
    pub fn is_simple_with_logger(&self, logger: Logger) -> bool {
        crate::is_simple_with_logger(&self.segments, logger)
    }

    /// See [`SelfIntersections`].
    pub fn intersections(&self) -> SelfIntersections<'_, T> {
        SelfIntersections::new(&self.segments)
    }

    /// See [`find_intersects`].
    pub fn find_intersects<F>(&self, cb: F)
    where
        F: FnMut(&Intersection<'_, T>) -> bool,
    {
        find_intersects(&self.segments, cb)
    }

    /// See [`find_intersects_with_logger`].
    pub fn find_intersects_with_logger<F>(&self, logger: Logger, cb: F)
    where
        F: FnMut(&Intersection<'_, T>) -> bool,
    {
        find_intersects_with_logger(&self.segments, logger, cb)
    }

    pub fn into_segments(self) -> Vec<Line<T>> {
        self.segments
    }
}

/// Build a ring from the vertices of a line-string.
///
/// The line-string may be open or closed; a closing vertex equal to
/// the first one is dropped. Other repeated vertices are kept and
/// give zero-length edges.
impl<T: GeoFloat> TryFrom<&LineString<T>> for Ring<T> {
    type Error = RingError;

    fn try_from(ls: &LineString<T>) -> Result<Self, Self::Error> {
        let coords = if ls.is_closed() && !ls.0.is_empty() {
            &ls.0[..ls.0.len() - 1]
        } else {
            &ls.0[..]
        };
        for (index, c) in coords.iter().enumerate() {
            check_finite(index, *c)?;
        }
        check_distinct(coords.iter().copied())?;

        let segments = coords
            .iter()
            .circular_tuple_windows()
            .map(|(&a, &b)| Line::new(a, b))
            .collect();
        Ok(Ring { segments })
    }
}

/// Require at least three distinct vertices. The coordinates must
/// already be known to be finite.
fn check_distinct<T, I>(coords: I) -> Result<(), RingError>
where
    T: GeoFloat,
    I: Iterator<Item = Coordinate<T>>,
{
    let distinct = coords.map(SweepPoint::from).sorted().dedup().count();
    if distinct < 3 {
        Err(RingError::TooFewCoords(distinct))
    } else {
        Ok(())
    }
}

fn check_finite<T: GeoFloat>(index: usize, c: Coordinate<T>) -> Result<(), RingError> {
    if c.x.is_finite() && c.y.is_finite() {
        Ok(())
    } else {
        Err(RingError::NonFinite { index })
    }
}

/// Check each ring of `poly` for self-intersections.
///
/// Only intersections within a ring are looked for; an interior
/// crossing the exterior is not detected.
pub fn polygon_is_simple<T: GeoFloat>(poly: &Polygon<T>) -> Result<bool, RingError> {
    polygon_is_simple_with_logger(poly, Logger::from_max_level())
}

/// Like [`polygon_is_simple`], logging through `logger`.
pub fn polygon_is_simple_with_logger<T: GeoFloat>(
    poly: &Polygon<T>,
    logger: Logger,
) -> Result<bool, RingError> {
    for (idx, ls) in std::iter::once(poly.exterior())
        .chain(poly.interiors())
        .enumerate()
    {
        let ring = Ring::try_from(ls).map_err(|err| {
            logger.warn(format_args!("polygon ring {}: {}", idx, err));
            err
        })?;
        if !ring.is_simple_with_logger(logger) {
            logger.debug(format_args!("polygon ring {} is not simple", idx));
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use wkt::TryFromWkt;

    use super::*;
    use crate::Severity;

    fn ring_from_wkt(wkt: &str) -> Result<Ring<f64>, Box<dyn Error>> {
        let ls = LineString::<f64>::try_from_wkt_str(wkt)?;
        Ok(Ring::try_from(&ls)?)
    }

    #[test]
    fn test_closed_and_open() -> Result<(), Box<dyn Error>> {
        let closed = ring_from_wkt("LINESTRING(0 0,1 0,1 1,0 1,0 0)")?;
        let open = ring_from_wkt("LINESTRING(0 0,1 0,1 1,0 1)")?;
        assert_eq!(closed, open);
        assert_eq!(closed.len(), 4);
        assert_eq!(closed.segments()[3], Line::from([(0., 1.), (0., 0.)]));
        assert!(closed.is_simple());
        Ok(())
    }

    #[test]
    fn test_bowtie() -> Result<(), Box<dyn Error>> {
        let ring = ring_from_wkt("LINESTRING(0 0,1 1,1 0,0 1,0 0)")?;
        assert!(!ring.is_simple());
        let pairs: Vec<_> = ring.intersections().map(|i| i.indices()).collect();
        assert_eq!(pairs, vec![(0, 2)]);

        let mut calls = 0;
        ring.find_intersects(|_| {
            calls += 1;
            false
        });
        assert_eq!(calls, 1);

        let logger = Logger::silent();
        assert!(!ring.is_simple_with_logger(logger));
        let mut calls = 0;
        ring.find_intersects_with_logger(logger, |_| {
            calls += 1;
            true
        });
        assert_eq!(calls, 1);
        Ok(())
    }

    #[test]
    fn test_too_few() -> Result<(), Box<dyn Error>> {
        let ls = LineString::<f64>::try_from_wkt_str("LINESTRING(0 0,1 1,0 0)")?;
        assert_eq!(Ring::try_from(&ls), Err(RingError::TooFewCoords(2)));

        let empty = LineString::<f64>(vec![]);
        assert_eq!(Ring::try_from(&empty), Err(RingError::TooFewCoords(0)));
        Ok(())
    }

    #[test]
    fn test_collapsed_rings() {
        let point = LineString::from(vec![(0., 0.), (0., 0.), (0., 0.), (0., 0.)]);
        assert_eq!(Ring::try_from(&point), Err(RingError::TooFewCoords(1)));

        let spike = LineString::from(vec![(0., 0.), (1., 1.), (1., 1.), (0., 0.)]);
        assert_eq!(Ring::try_from(&spike), Err(RingError::TooFewCoords(2)));

        // Back and forth between two vertices, not consecutive repeats.
        let zigzag = LineString::from(vec![(0., 0.), (1., 1.), (0., 0.), (1., 1.)]);
        assert_eq!(Ring::try_from(&zigzag), Err(RingError::TooFewCoords(2)));

        let segments = vec![
            Line::from([(0., 0.), (1., 0.)]),
            Line::from([(1., 0.), (0., 0.)]),
            Line::from([(0., 0.), (0., 0.)]),
        ];
        assert_eq!(
            Ring::from_segments(segments),
            Err(RingError::TooFewCoords(2))
        );

        // A repeated vertex is fine as long as three distinct ones remain.
        let repeated = LineString::from(vec![(0., 0.), (1., 0.), (1., 0.), (0., 1.)]);
        assert_eq!(Ring::try_from(&repeated).map(|r| r.len()), Ok(4));
    }

    #[test]
    fn test_non_finite() {
        let ls = LineString::from(vec![(0., 0.), (1., f64::NAN), (1., 1.)]);
        assert_eq!(Ring::try_from(&ls), Err(RingError::NonFinite { index: 1 }));

        let segments = vec![
            Line::from([(0., 0.), (1., 0.)]),
            Line::from([(1., 0.), (f64::INFINITY, 1.)]),
            Line::from([(f64::INFINITY, 1.), (0., 0.)]),
        ];
        assert_eq!(
            Ring::from_segments(segments),
            Err(RingError::NonFinite { index: 2 })
        );
    }

    #[test]
    fn test_from_segments() {
        let good = vec![
            Line::from([(0., 0.), (1., 0.)]),
            Line::from([(1., 0.), (0., 1.)]),
            Line::from([(0., 1.), (0., 0.)]),
        ];
        let ring = Ring::from_segments(good.clone()).unwrap();
        assert_eq!(ring.clone().into_segments(), good);

        let mut gap = good;
        gap[1] = Line::from([(1., 0.), (0., 2.)]);
        assert_eq!(
            Ring::from_segments(gap),
            Err(RingError::NotClosed { index: 1 })
        );

        assert_eq!(
            Ring::<f64>::from_segments(vec![]),
            Err(RingError::TooFewCoords(0))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            RingError::NotClosed { index: 3 }.to_string(),
            "segment 3 does not end where the next segment starts"
        );
        assert_eq!(
            RingError::TooFewCoords(1).to_string(),
            "ring needs at least 3 distinct vertices, got 1"
        );
    }

    #[test]
    fn test_polygon() -> Result<(), Box<dyn Error>> {
        let good = Polygon::<f64>::try_from_wkt_str(
            "POLYGON((0 0,10 0,10 10,0 10,0 0),(2 2,4 2,4 4,2 4,2 2))",
        )?;
        assert!(polygon_is_simple(&good)?);

        let bad_hole = Polygon::<f64>::try_from_wkt_str(
            "POLYGON((0 0,10 0,10 10,0 10,0 0),(2 2,4 4,4 2,2 4,2 2))",
        )?;
        assert!(!polygon_is_simple(&bad_hole)?);

        let bad_exterior = Polygon::<f64>::try_from_wkt_str("POLYGON((0 0,1 1,1 0,0 1,0 0))")?;
        assert!(!polygon_is_simple(&bad_exterior)?);

        let logger = Logger::new(Severity::Debug);
        assert!(polygon_is_simple_with_logger(&good, logger)?);
        assert!(!polygon_is_simple_with_logger(&bad_hole, logger)?);

        let collapsed_hole = Polygon::<f64>::try_from_wkt_str(
            "POLYGON((0 0,10 0,10 10,0 10,0 0),(2 2,4 4,2 2))",
        )?;
        assert_eq!(
            polygon_is_simple_with_logger(&collapsed_hole, logger),
            Err(RingError::TooFewCoords(2))
        );
        Ok(())
    }
}

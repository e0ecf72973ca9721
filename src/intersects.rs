use std::{cell::Cell, fmt, iter::FusedIterator};

use geo::{
    algorithm::line_intersection::{line_intersection, LineIntersection},
    Coordinate, GeoFloat, Line,
};

use crate::{canonical::CanonicalLine, logging::Logger};

mod sweep;
use sweep::Sweep;

/// A pair of non-adjacent segments that intersect.
///
/// The crossing point is only computed when [`Self::point`] is first
/// called, and cached after that.
pub struct Intersection<'a, T: GeoFloat> {
    first: usize,
    second: usize,
    lines: [&'a Line<T>; 2],
    point: Cell<Option<Option<Coordinate<T>>>>,
}

impl<'a, T: GeoFloat> Intersection<'a, T> {
    fn new(segments: &'a [Line<T>], first: usize, second: usize) -> Self {
        debug_assert!(first < second);
        Intersection {
            first,
            second,
            lines: [&segments[first], &segments[second]],
            point: Cell::new(None),
        }
    }

    /// The smaller of the two segment indices.
    #[inline]
    pub fn first(&self) -> usize {
        self.first
    }

    /// The larger of the two segment indices.
    #[inline]
    pub fn second(&self) -> usize {
        self.second
    }

    #[inline]
    pub fn indices(&self) -> (usize, usize) {
        (self.first, self.second)
    }

    /// The two segments, in index order.
    #[inline]
    pub fn lines(&self) -> (&'a Line<T>, &'a Line<T>) {
        (self.lines[0], self.lines[1])
    }

    /// The point where the two segments meet.
    ///
    /// If the segments overlap, this is the lexicographically first
    /// point of the overlap. Returns `None` if the segments turn out
    /// not to share a point, which only happens for collinear or
    /// zero-length segments that pass the orientation tests without
    /// touching.
    pub fn point(&self) -> Option<Coordinate<T>> {
        if let Some(pt) = self.point.get() {
            return pt;
        }
        let pt = crossing_point(*self.lines[0], *self.lines[1]);
        self.point.set(Some(pt));
        pt
    }
}

impl<'a, T: GeoFloat> fmt::Debug for Intersection<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("lines", &self.lines)
            .finish()
    }
}

fn crossing_point<T: GeoFloat>(a: Line<T>, b: Line<T>) -> Option<Coordinate<T>> {
    line_intersection(a, b).map(|isec| match isec {
        LineIntersection::SinglePoint { intersection, .. } => intersection,
        LineIntersection::Collinear { intersection } => {
            CanonicalLine::from(intersection).left().coord()
        }
    })
}

/// Iterator over the intersecting pairs of a ring.
///
/// The input is a slice of segments in ring order: segment `i` must
/// end where segment `(i + 1) % n` starts. This is not checked;
/// consecutive segments are never reported, whatever their
/// coordinates. Use [`Ring`](crate::Ring) to validate input first.
///
/// Each pair is yielded once, with `first() < second()`. Input with
/// fewer than three segments yields nothing. The iterator is lazy and
/// can be dropped at any point to stop the scan.
///
/// ```rust
/// use geo::Line;
/// use ring_sweep::SelfIntersections;
/// // A bow-tie: the first and third edges cross.
/// let ring = vec![
///     Line::from([(0., 0.), (1., 1.)]),
///     Line::from([(1., 1.), (1., 0.)]),
///     Line::from([(1., 0.), (0., 1.)]),
///     Line::from([(0., 1.), (0., 0.)]),
/// ];
/// let pairs: Vec<_> = SelfIntersections::new(&ring).map(|i| i.indices()).collect();
/// assert_eq!(pairs, vec![(0, 2)]);
/// ```
#[derive(Debug)]
pub struct SelfIntersections<'a, T: GeoFloat> {
    sweep: Sweep<'a, T>,
}

impl<'a, T: GeoFloat> SelfIntersections<'a, T> {
    /// Panics if any coordinate is not finite.
    pub fn new(segments: &'a [Line<T>]) -> Self {
        Self::with_logger(segments, Logger::from_max_level())
    }

    /// Like [`Self::new`], logging the scan through `logger`.
    pub fn with_logger(segments: &'a [Line<T>], logger: Logger) -> Self {
        SelfIntersections {
            sweep: Sweep::new(segments, logger),
        }
    }
}

impl<'a, T: GeoFloat> Iterator for SelfIntersections<'a, T> {
    type Item = Intersection<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (first, second) = self.sweep.next_pair()?;
        Some(Intersection::new(self.sweep.segments(), first, second))
    }
}

impl<'a, T: GeoFloat> FusedIterator for SelfIntersections<'a, T> {}

/// Report every intersecting pair of `segments` to `cb`.
///
/// Stops as soon as `cb` returns `false`. See [`SelfIntersections`]
/// for the requirements on `segments`.
pub fn find_intersects<T, F>(segments: &[Line<T>], cb: F)
where
    T: GeoFloat,
    F: FnMut(&Intersection<'_, T>) -> bool,
{
    find_intersects_with_logger(segments, Logger::from_max_level(), cb)
}

/// Like [`find_intersects`], logging the scan through `logger`.
pub fn find_intersects_with_logger<T, F>(segments: &[Line<T>], logger: Logger, mut cb: F)
where
    T: GeoFloat,
    F: FnMut(&Intersection<'_, T>) -> bool,
{
    for isec in SelfIntersections::with_logger(segments, logger) {
        if !cb(&isec) {
            logger.debug(format_args!(
                "scan stopped at pair {:?}",
                isec.indices()
            ));
            return;
        }
    }
}

/// Check that no two non-adjacent segments of a ring intersect.
///
/// See [`SelfIntersections`] for the requirements on `segments`.
pub fn is_simple<T: GeoFloat>(segments: &[Line<T>]) -> bool {
    is_simple_with_logger(segments, Logger::from_max_level())
}

/// Like [`is_simple`], logging the scan through `logger`.
pub fn is_simple_with_logger<T: GeoFloat>(segments: &[Line<T>], logger: Logger) -> bool {
    SelfIntersections::with_logger(segments, logger)
        .next()
        .is_none()
}

use geo::{
    kernels::{Kernel, Orientation},
    Coordinate, GeoFloat, Line,
};

use crate::events::SweepPoint;

/// Signed area test of `p` against the directed line `a -> b`.
///
/// Returns the cross product `(b - a) x (p - a)`: positive if `p` is
/// to the left of the line, negative if to the right and zero if the
/// three points are collinear. The magnitude is twice the area of the
/// triangle; only the sign is meaningful to the sweep.
#[inline]
pub fn is_left<T: GeoFloat>(a: Coordinate<T>, b: Coordinate<T>, p: Coordinate<T>) -> T {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

/// A line segment with its end points ordered (see [`SweepPoint`]).
///
/// Orientation tests against a canonical line do not depend on which
/// end the segment was authored from. The end points may be equal, in
/// which case every point is collinear with the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalLine<T: GeoFloat> {
    left: SweepPoint<T>,
    right: SweepPoint<T>,
}

/// Convert from a [`Line`] ensuring end point ordering.
impl<T: GeoFloat> From<Line<T>> for CanonicalLine<T> {
    fn from(l: Line<T>) -> Self {
        let start = l.start.into();
        let end = l.end.into();
        if start <= end {
            CanonicalLine { left: start, right: end }
        } else {
            CanonicalLine { left: end, right: start }
        }
    }
}

impl<T: GeoFloat> CanonicalLine<T> {
    /// The lexicographically smaller end point.
    #[inline]
    pub fn left(&self) -> SweepPoint<T> {
        self.left
    }

    /// The lexicographically larger end point.
    #[inline]
    pub fn right(&self) -> SweepPoint<T> {
        self.right
    }

    #[inline]
    pub fn line(&self) -> Line<T> {
        Line::new(self.left.coord(), self.right.coord())
    }

    /// [`is_left`] of `p` against the line directed from `left` to
    /// `right`.
    #[inline]
    pub fn is_left(&self, p: Coordinate<T>) -> T {
        is_left(self.left.coord(), self.right.coord(), p)
    }

    /// Sign of [`Self::is_left`] computed with the robust `geo`
    /// kernel. `CounterClockwise` means left of the line.
    #[inline]
    pub fn side(&self, p: Coordinate<T>) -> Orientation {
        T::Ker::orient2d(self.left.coord(), self.right.coord(), p)
    }

    /// Whether the end points of `other` are not strictly on the same
    /// side of `self`.
    ///
    /// A collinear end point counts as touching, so a degenerate
    /// `self` straddles everything.
    pub fn straddles(&self, other: &Self) -> bool {
        use Orientation::*;
        !matches!(
            (self.side(other.left.coord()), self.side(other.right.coord())),
            (CounterClockwise, CounterClockwise) | (Clockwise, Clockwise)
        )
    }

    /// Straddle test in both directions.
    ///
    /// Proves that the two segments share at least one point, except
    /// for collinear input where only the supporting lines are known
    /// to coincide.
    #[inline]
    pub fn crosses(&self, other: &Self) -> bool {
        self.straddles(other) && other.straddles(self)
    }
}

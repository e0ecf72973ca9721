use std::{cmp::Ordering, iter::FusedIterator};

use geo::{Coordinate, GeoFloat, Line};

/// Wraps a [`Coordinate`] to support lexicographic ordering.
///
/// The ordering is by `x` and then by `y`. Implements `PartialOrd`,
/// `Ord` and `Eq` even though `Coordinate` doesn't implement these.
/// This is necessary to sort the end points of a sweep.
///
/// Note that the trait impls exist even when `T` is not `Eq` or
/// `Ord`. We must ensure that any sweep point only contains values
/// that can be consistently ordered.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SweepPoint<T: GeoFloat>(Coordinate<T>);

impl<T: GeoFloat> SweepPoint<T> {
    /// Get the underlying coordinate.
    #[inline]
    pub fn coord(&self) -> Coordinate<T> {
        self.0
    }
}

/// Implememnt lexicographic ordering by `x` and then by `y`
/// coordinate.
impl<T: GeoFloat> PartialOrd for SweepPoint<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.0.x.partial_cmp(&other.0.x) {
            Some(Ordering::Equal) => self.0.y.partial_cmp(&other.0.y),
            o => o,
        }
    }
}

/// Derive `Ord` from `PartialOrd` and expect to not fail.
impl<T: GeoFloat> Ord for SweepPoint<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap()
    }
}

/// We derive `Eq` manually to not require `T: Eq`.
impl<T: GeoFloat> Eq for SweepPoint<T> {}

/// Create from `Coordinate` while checking the components are finite.
impl<T: GeoFloat> From<Coordinate<T>> for SweepPoint<T> {
    fn from(pt: Coordinate<T>) -> Self {
        assert!(
            pt.x.is_finite(),
            "sweep point requires a finite x-coordinate"
        );
        assert!(
            pt.y.is_finite(),
            "sweep point requires a finite y-coordinate"
        );
        SweepPoint(pt)
    }
}

/// Which end of its segment an event sits at.
///
/// `Left` is the lexicographically smaller end point, `Right` the
/// larger one. The variant order is used to break ties between events
/// at the same point: every segment starting at a point is opened
/// before any segment ending there is closed, so segments touching at
/// an end point are always compared.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum EventType {
    Left,
    Right,
}

/// An end point of one input segment.
#[derive(Debug, Clone, Copy)]
pub struct Event<T: GeoFloat> {
    point: SweepPoint<T>,
    ty: EventType,
    segment: usize,
}

impl<T: GeoFloat> Event<T> {
    #[inline]
    pub fn point(&self) -> SweepPoint<T> {
        self.point
    }

    #[inline]
    pub fn ty(&self) -> EventType {
        self.ty
    }

    /// Index of the input segment this event belongs to.
    #[inline]
    pub fn segment(&self) -> usize {
        self.segment
    }
}

/// The sorted end points of a set of segments.
///
/// Holds two events per segment, stored at `2 * i` (left end) and `2 *
/// i + 1` (right end) for segment `i`, and a permutation that visits
/// them in lexicographic order of their points. At the same point,
/// `Left` events come first, then storage order.
///
/// The queue is consumed through its [`Iterator`] impl and can't be
/// rewound; build a new one to scan again.
#[derive(Debug, Clone)]
pub struct EventQueue<T: GeoFloat> {
    events: Vec<Event<T>>,
    order: Vec<usize>,
    cursor: usize,
}

impl<T: GeoFloat> EventQueue<T> {
    /// Build the queue for `segments`.
    ///
    /// Panics if any coordinate is not finite.
    pub fn new(segments: &[Line<T>]) -> Self {
        let mut events = Vec::with_capacity(2 * segments.len());
        for (segment, line) in segments.iter().enumerate() {
            let start = SweepPoint::from(line.start);
            let end = SweepPoint::from(line.end);
            let (left, right) = if start <= end {
                (start, end)
            } else {
                (end, start)
            };
            events.push(Event {
                point: left,
                ty: EventType::Left,
                segment,
            });
            events.push(Event {
                point: right,
                ty: EventType::Right,
                segment,
            });
        }

        let mut order: Vec<usize> = (0..events.len()).collect();
        order.sort_by(|&a, &b| {
            let (a, b) = (&events[a], &events[b]);
            a.point.cmp(&b.point).then_with(|| a.ty.cmp(&b.ty))
        });

        EventQueue {
            events,
            order,
            cursor: 0,
        }
    }

    /// Total number of events, consumed or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events not yet yielded.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    /// The other end point of the segment `event` belongs to.
    ///
    /// `event` must have come from this queue.
    pub fn complement(&self, event: &Event<T>) -> Event<T> {
        let idx = 2 * event.segment;
        match event.ty {
            EventType::Left => self.events[idx + 1],
            EventType::Right => self.events[idx],
        }
    }
}

impl<T: GeoFloat> Iterator for EventQueue<T> {
    type Item = Event<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = *self.order.get(self.cursor)?;
        self.cursor += 1;
        Some(self.events[idx])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<T: GeoFloat> FusedIterator for EventQueue<T> {}

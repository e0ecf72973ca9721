use std::collections::BTreeSet;

use geo::{GeoFloat, Line};
use smallvec::SmallVec;

use crate::{
    canonical::CanonicalLine,
    events::{EventQueue, EventType},
    logging::Logger,
};

const PENDING_STACK_SIZE: usize = 16;
type Pending = SmallVec<[usize; PENDING_STACK_SIZE]>;

/// Sweep over the end points of a ring, reporting candidate pairs.
///
/// A segment is *open* between its first and second event. When a
/// segment closes it is compared against every segment still open,
/// so all pairs with overlapping x-extents are tested once. The pairs
/// are handed out one at a time so that the caller may stop early.
///
/// This does O(n^2) pair tests in the worst case, unlike a full
/// [Bentley-Ottman] sweep which only compares neighbours in the sweep
/// line.
///
/// Adjacency is decided from indices alone: segment `i` is assumed to
/// share a vertex with segment `(i + 1) % n`. Such pairs are never
/// reported.
///
/// [Bentley-Ottman]: //en.wikipedia.org/wiki/Bentley%E2%80%93Ottmann_algorithm
#[derive(Debug)]
pub(crate) struct Sweep<'a, T: GeoFloat> {
    segments: &'a [Line<T>],
    events: EventQueue<T>,
    open: BTreeSet<usize>,
    closing: Option<(usize, CanonicalLine<T>)>,
    pending: Pending,
    logger: Logger,
}

impl<'a, T: GeoFloat> Sweep<'a, T> {
    pub fn new(segments: &'a [Line<T>], logger: Logger) -> Self {
        // Fewer than three segments can't have a non-adjacent pair.
        let events = if segments.len() < 3 {
            EventQueue::new(&[])
        } else {
            EventQueue::new(segments)
        };
        logger.debug(format_args!(
            "sweep: {n} segments, {e} events",
            n = segments.len(),
            e = events.len()
        ));

        Sweep {
            segments,
            events,
            open: BTreeSet::new(),
            closing: None,
            pending: Pending::new(),
            logger,
        }
    }

    #[inline]
    pub fn segments(&self) -> &'a [Line<T>] {
        self.segments
    }

    /// Whether segments `a` and `b` are the same or consecutive in the
    /// ring.
    #[inline]
    fn is_adjacent(&self, a: usize, b: usize) -> bool {
        let n = self.segments.len();
        a == b || (a + 1) % n == b || (b + 1) % n == a
    }

    /// Advance to the next intersecting pair, returned as `(min,
    /// max)` indices.
    pub fn next_pair(&mut self) -> Option<(usize, usize)> {
        loop {
            if let Some((edge, line)) = self.closing {
                while let Some(other) = self.pending.pop() {
                    if self.is_adjacent(edge, other) {
                        continue;
                    }
                    let other_line = CanonicalLine::from(self.segments[other]);
                    if !line.crosses(&other_line) {
                        continue;
                    }

                    self.logger.debug(format_args!(
                        "sweep: segment {edge} intersects {other}"
                    ));
                    return Some(if edge < other {
                        (edge, other)
                    } else {
                        (other, edge)
                    });
                }
                self.closing = None;
            }

            let event = self.events.next()?;
            let edge = event.segment();
            self.logger.trace(format_args!(
                "sweep: {ty:?} event of {edge} @ {pt:?}",
                ty = event.ty(),
                pt = event.point().coord(),
            ));

            if self.open.insert(edge) {
                debug_assert_eq!(event.ty(), EventType::Left);
                continue;
            }
            self.open.remove(&edge);
            if self.open.is_empty() {
                continue;
            }

            // Stored in reverse so that `pop` visits ascending indices.
            self.pending.extend(self.open.iter().rev().copied());
            self.closing = Some((edge, CanonicalLine::from(self.segments[edge])));
        }
    }
}

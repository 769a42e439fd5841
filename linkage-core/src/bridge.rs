//! Locating the edge that would join the last two components.
//!
//! The finder grows the edge budget one edge at a time until the network has
//! at most two components, counting each unconnected point as a component of
//! its own, then scans the processing order for the first edge whose
//! endpoints still sit in different components. The tracker's resumable
//! cursor means each growth step inspects only the newly admitted edge.

use tracing::{debug, instrument};

use crate::{
    edge::Edge,
    error::{LinkageError, Result},
    point::Point,
    tracker::ClusterTracker,
};

/// The edge that bridges the final two components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bridge {
    edge: Edge,
    source: Point,
    target: Point,
    budget: usize,
}

impl Bridge {
    /// Returns the bridging edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> Edge { self.edge }

    /// Returns the point at the edge's smaller index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> Point { self.source }

    /// Returns the point at the edge's larger index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> Point { self.target }

    /// Returns the edge budget at which two components first remained.
    #[must_use]
    #[rustfmt::skip]
    pub const fn budget(&self) -> usize { self.budget }

    /// Returns the product of the endpoints' x-coordinates.
    ///
    /// Computed in `i64`, which holds any product of two `i32` values.
    #[must_use]
    pub fn x_product(&self) -> i64 {
        i64::from(self.source.x()) * i64::from(self.target.x())
    }
}

/// Finds the bridge edge over `points`, whose edges are already in processing
/// order.
///
/// `tracker` is reset before the search and is left holding the
/// two-component state on success, so callers can inspect the final
/// partition. One of the two components may be a single unconnected point.
///
/// # Errors
/// - [`LinkageError::InsufficientPoints`] when fewer than two points exist.
/// - [`LinkageError::InvalidPointIndex`] when an edge or the tracker does not
///   match `points`.
/// - [`LinkageError::BridgeUnreachable`] when the edges run out before the
///   network is reduced to two components, or when a single edge already
///   joins every point so no two-component state exists.
///
/// # Examples
/// ```
/// use linkage_core::{ClusterTracker, EdgeSequence, Point, find_bridge};
///
/// let points = [
///     Point::new(0, 0, 0),
///     Point::new(1, 0, 0),
///     Point::new(10, 0, 0),
///     Point::new(12, 0, 0),
/// ];
/// let edges = EdgeSequence::from_points(&points);
/// let mut tracker = ClusterTracker::new(points.len());
/// let bridge = find_bridge(&points, edges.as_slice(), &mut tracker)?;
///
/// assert_eq!((bridge.edge().source(), bridge.edge().target()), (1, 2));
/// assert_eq!(bridge.x_product(), 10);
/// # Ok::<(), linkage_core::LinkageError>(())
/// ```
#[instrument(
    name = "core.find_bridge",
    err,
    skip(points, edges, tracker),
    fields(points = points.len(), edges = edges.len()),
)]
pub fn find_bridge(
    points: &[Point],
    edges: &[Edge],
    tracker: &mut ClusterTracker,
) -> Result<Bridge> {
    if points.len() < 2 {
        return Err(LinkageError::InsufficientPoints {
            points: points.len(),
        });
    }
    if tracker.point_count() != points.len() {
        return Err(LinkageError::InvalidPointIndex {
            index: points.len().max(tracker.point_count()) - 1,
            point_count: points.len().min(tracker.point_count()),
        });
    }

    tracker.reset();
    let mut budget = 1;
    tracker.advance_to(edges, budget)?;
    while needs_more_edges(tracker) {
        if budget >= edges.len() {
            return Err(unreachable_error(tracker));
        }
        budget += 1;
        tracker.advance_to(edges, budget)?;
    }
    debug!(
        budget,
        clusters = tracker.cluster_count(),
        unconnected = tracker.unconnected_count(),
        "network reduced to two components"
    );

    let edge = edges
        .iter()
        .find(|edge| !tracker.same_cluster(edge.source(), edge.target()))
        .copied()
        .ok_or_else(|| unreachable_error(tracker))?;
    let source = endpoint(points, edge.source())?;
    let target = endpoint(points, edge.target())?;
    Ok(Bridge {
        edge,
        source,
        target,
        budget,
    })
}

fn needs_more_edges(tracker: &ClusterTracker) -> bool {
    tracker.cluster_count() + tracker.unconnected_count() > 2
}

fn unreachable_error(tracker: &ClusterTracker) -> LinkageError {
    LinkageError::BridgeUnreachable {
        clusters: tracker.cluster_count(),
        unconnected: tracker.unconnected_count(),
        consumed: tracker.consumed(),
    }
}

fn endpoint(points: &[Point], index: usize) -> Result<Point> {
    points
        .get(index)
        .copied()
        .ok_or(LinkageError::InvalidPointIndex {
            index,
            point_count: points.len(),
        })
}

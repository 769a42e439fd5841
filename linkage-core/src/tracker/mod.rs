//! Budgeted cluster formation over an ordered edge list.
//!
//! [`ClusterTracker`] owns the label of every point and consumes edges in
//! processing order. Each inspected edge costs one unit of budget whether or
//! not it changes anything:
//!
//! - two unconnected endpoints form a new cluster with a freshly minted id;
//! - endpoints already sharing a cluster are left alone;
//! - a single unconnected endpoint is assimilated into the other's cluster;
//! - two different clusters unite under the lower id.
//!
//! Uniting relabels only the absorbed cluster's members, found through a
//! reverse index from cluster id to member points, so [`ClusterTracker::label`]
//! stays a constant-time lookup at every step. The tracker keeps a cursor into
//! the edge list: growing the budget resumes where the previous call stopped
//! rather than replaying the prefix.

use std::mem;

use tracing::{debug, instrument, trace};

use crate::{
    edge::Edge,
    error::{LinkageError, Result},
    label::{ClusterId, ClusterLabel},
    stats::ClusterStatistics,
};

/// Mutable union-merge state over a fixed number of points.
///
/// # Examples
/// ```
/// use linkage_core::{ClusterLabel, ClusterTracker, EdgeSequence, Point};
///
/// let points = [Point::new(0, 0, 0), Point::new(1, 0, 0), Point::new(9, 0, 0)];
/// let edges = EdgeSequence::from_points(&points);
/// let mut tracker = ClusterTracker::new(points.len());
/// tracker.run(edges.as_slice(), 1)?;
///
/// assert_eq!(tracker.cluster_count(), 1);
/// assert_eq!(tracker.unconnected_count(), 1);
/// assert_eq!(tracker.label(2), Some(ClusterLabel::unconnected(2)));
/// # Ok::<(), linkage_core::LinkageError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ClusterTracker {
    labels: Vec<ClusterLabel>,
    /// Member points per minted id; absorbed clusters are left empty.
    members: Vec<Vec<usize>>,
    cursor: usize,
    clusters: usize,
    unconnected: usize,
}

impl ClusterTracker {
    /// Creates a tracker with every point unconnected.
    #[must_use]
    pub fn new(point_count: usize) -> Self {
        Self {
            labels: (0..point_count).map(ClusterLabel::unconnected).collect(),
            members: Vec::new(),
            cursor: 0,
            clusters: 0,
            unconnected: point_count,
        }
    }

    /// Restores every point to its unconnected label and rewinds the cursor.
    ///
    /// The cluster id counter restarts at zero.
    pub fn reset(&mut self) {
        for (index, label) in self.labels.iter_mut().enumerate() {
            *label = ClusterLabel::unconnected(index);
        }
        self.members.clear();
        self.cursor = 0;
        self.clusters = 0;
        self.unconnected = self.labels.len();
    }

    /// Resets the tracker and consumes the first `budget` edges.
    ///
    /// Returns the number of edges inspected, which is `budget` clamped to
    /// `edges.len()`.
    ///
    /// # Errors
    /// Returns [`LinkageError::InvalidPointIndex`] when an inspected edge
    /// references a point outside the tracked set.
    #[instrument(
        name = "core.tracker.run",
        err,
        skip(self, edges),
        fields(points = self.labels.len(), edges = edges.len(), budget = budget),
    )]
    pub fn run(&mut self, edges: &[Edge], budget: usize) -> Result<usize> {
        self.reset();
        let consumed = self.advance_to(edges, budget)?;
        debug!(
            clusters = self.clusters,
            unconnected = self.unconnected,
            consumed,
            "budgeted run completed"
        );
        Ok(consumed)
    }

    /// Continues consuming `edges` from the cursor until `budget` edges have
    /// been inspected in total.
    ///
    /// Budgets at or below [`Self::consumed`] leave the state untouched. The
    /// same edge slice must be supplied on every call between resets.
    ///
    /// Returns the number of edges inspected by this call.
    ///
    /// # Errors
    /// Returns [`LinkageError::InvalidPointIndex`] when an inspected edge
    /// references a point outside the tracked set. Edges before the offending
    /// one remain applied and the cursor stops on it.
    pub fn advance_to(&mut self, edges: &[Edge], budget: usize) -> Result<usize> {
        let end = budget.min(edges.len());
        let start = self.cursor;
        for edge in edges.get(start..end).unwrap_or_default() {
            self.apply(edge)?;
            self.cursor += 1;
        }
        Ok(self.cursor.saturating_sub(start))
    }

    /// Returns the number of tracked points.
    #[must_use]
    #[rustfmt::skip]
    pub fn point_count(&self) -> usize { self.labels.len() }

    /// Returns the total number of edges inspected since the last reset.
    #[must_use]
    #[rustfmt::skip]
    pub fn consumed(&self) -> usize { self.cursor }

    /// Returns the number of formed clusters.
    #[must_use]
    #[rustfmt::skip]
    pub fn cluster_count(&self) -> usize { self.clusters }

    /// Returns the number of points not yet joined to any cluster.
    #[must_use]
    #[rustfmt::skip]
    pub fn unconnected_count(&self) -> usize { self.unconnected }

    /// Returns the current label of every point, indexed by point.
    #[must_use]
    #[rustfmt::skip]
    pub fn labels(&self) -> &[ClusterLabel] { &self.labels }

    /// Returns the current label of the point at `index`.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<ClusterLabel> {
        self.labels.get(index).copied()
    }

    /// Returns the member points of a formed cluster in join order.
    ///
    /// Identifiers that were absorbed by a unite yield an empty slice;
    /// identifiers never minted yield `None`.
    #[must_use]
    pub fn members(&self, id: ClusterId) -> Option<&[usize]> {
        self.members.get(slot(id)).map(Vec::as_slice)
    }

    /// Returns `true` when both points currently share a label.
    #[must_use]
    pub fn same_cluster(&self, left: usize, right: usize) -> bool {
        match (self.labels.get(left), self.labels.get(right)) {
            (Some(l), Some(r)) => l == r,
            _ => false,
        }
    }

    /// Groups the current labels into a [`ClusterStatistics`] snapshot.
    #[must_use]
    pub fn statistics(&self) -> ClusterStatistics {
        ClusterStatistics::from_labels(&self.labels)
    }

    fn apply(&mut self, edge: &Edge) -> Result<()> {
        let left = self.label_checked(edge.source())?;
        let right = self.label_checked(edge.target())?;

        match (left, right) {
            (ClusterLabel::Unconnected { .. }, ClusterLabel::Unconnected { .. }) => {
                let id = self.mint(edge.source(), edge.target());
                trace!(
                    source = edge.source(),
                    target = edge.target(),
                    cluster = %id,
                    "formed cluster"
                );
            }
            (ClusterLabel::Clustered(l), ClusterLabel::Clustered(r)) if l == r => {}
            (ClusterLabel::Unconnected { .. }, ClusterLabel::Clustered(id)) => {
                self.assimilate(edge.source(), id);
            }
            (ClusterLabel::Clustered(id), ClusterLabel::Unconnected { .. }) => {
                self.assimilate(edge.target(), id);
            }
            (ClusterLabel::Clustered(l), ClusterLabel::Clustered(r)) => {
                self.unite(l.min(r), l.max(r));
            }
        }
        Ok(())
    }

    fn label_checked(&self, index: usize) -> Result<ClusterLabel> {
        self.label(index).ok_or(LinkageError::InvalidPointIndex {
            index,
            point_count: self.labels.len(),
        })
    }

    fn mint(&mut self, left: usize, right: usize) -> ClusterId {
        let id = ClusterId::new(self.members.len() as u64);
        self.labels[left] = ClusterLabel::Clustered(id);
        self.labels[right] = ClusterLabel::Clustered(id);
        self.members.push(vec![left, right]);
        self.clusters += 1;
        self.unconnected -= 2;
        id
    }

    fn assimilate(&mut self, point: usize, id: ClusterId) {
        self.labels[point] = ClusterLabel::Clustered(id);
        self.members[slot(id)].push(point);
        self.unconnected -= 1;
        trace!(point, cluster = %id, "assimilated point");
    }

    fn unite(&mut self, survivor: ClusterId, absorbed: ClusterId) {
        let moved = mem::take(&mut self.members[slot(absorbed)]);
        for &point in &moved {
            self.labels[point] = ClusterLabel::Clustered(survivor);
        }
        trace!(
            survivor = %survivor,
            absorbed = %absorbed,
            moved = moved.len(),
            "united clusters"
        );
        self.members[slot(survivor)].extend(moved);
        self.clusters -= 1;
    }
}

/// Position of `id` in the reverse index. Ids are minted from its length, so
/// the conversion never truncates.
const fn slot(id: ClusterId) -> usize {
    id.get() as usize
}

#[cfg(test)]
mod property;

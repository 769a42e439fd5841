//! Candidate connections and their ascending processing order.

use std::cmp::Ordering;

use crate::{distance, point::Point};

/// A candidate connection between two points in canonical form
/// (`source < target`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    distance: u128,
    source: usize,
    target: usize,
    sequence: u64,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    ///
    /// Endpoints are swapped when needed so that `source <= target`.
    ///
    /// # Examples
    /// ```
    /// use linkage_core::Edge;
    ///
    /// let edge = Edge::new(27, 1, 0, 0);
    /// assert_eq!((edge.source(), edge.target()), (0, 1));
    /// ```
    #[must_use]
    pub const fn new(distance: u128, source: usize, target: usize, sequence: u64) -> Self {
        let (source, target) = if source <= target {
            (source, target)
        } else {
            (target, source)
        };
        Self {
            distance,
            source,
            target,
            sequence,
        }
    }

    /// Returns the squared Euclidean distance between the endpoints.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distance(&self) -> u128 { self.distance }

    /// Returns the smaller endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the position of the pair in enumeration order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sequence(&self) -> u64 { self.sequence }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.sequence.cmp(&other.sequence))
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Edges sorted ascending by distance.
///
/// Ties keep enumeration order. This is the budgeted processing order used by
/// [`crate::ClusterTracker`] and the scan order used by [`crate::find_bridge`].
///
/// # Examples
/// ```
/// use linkage_core::{EdgeSequence, Point};
///
/// let points = [Point::new(1, 2, 3), Point::new(4, 5, 6), Point::new(7, 8, 10)];
/// let sequence = EdgeSequence::from_points(&points);
/// let distances: Vec<u128> = sequence.iter().map(|edge| edge.distance()).collect();
/// assert_eq!(distances, [27, 34, 121]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeSequence {
    edges: Vec<Edge>,
}

impl EdgeSequence {
    /// Computes every pairwise edge over `points` and sorts them.
    ///
    /// With the `cpu` feature the distance pass runs on the Rayon pool.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        #[cfg(feature = "cpu")]
        let edges = distance::par_pairwise_edges(points);
        #[cfg(not(feature = "cpu"))]
        let edges = distance::pairwise_edges(points);
        Self::from_edges(edges)
    }

    /// Sorts an existing edge list into processing order.
    ///
    /// The sort is stable on distance, so edges with equal distance keep the
    /// order in which they were supplied.
    #[must_use]
    pub fn from_edges(mut edges: Vec<Edge>) -> Self {
        edges.sort_by_key(Edge::distance);
        Self { edges }
    }

    /// Returns the edges in processing order.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_slice(&self) -> &[Edge] { &self.edges }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when the sequence holds no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns the edge at `position` in processing order.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Edge> {
        self.edges.get(position)
    }

    /// Iterates the edges in processing order.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }
}

impl<'a> IntoIterator for &'a EdgeSequence {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl AsRef<[Edge]> for EdgeSequence {
    fn as_ref(&self) -> &[Edge] {
        &self.edges
    }
}

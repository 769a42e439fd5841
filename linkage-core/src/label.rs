//! Cluster identifiers and per-point labels.
//!
//! Every point carries a [`ClusterLabel`]. A point starts out
//! [`ClusterLabel::Unconnected`], remembering its own index so two unconnected
//! points never compare equal, and becomes [`ClusterLabel::Clustered`] once an
//! edge joins it to another point.

use core::fmt;

/// Identifier minted by a [`crate::ClusterTracker`] for a formed cluster.
///
/// Identifiers are sequential per tracker and only their equality and order
/// carry meaning: when two clusters unite the lower identifier survives.
///
/// # Examples
/// ```
/// use linkage_core::ClusterId;
///
/// let id = ClusterId::new(4);
/// assert_eq!(id.get(), 4);
/// assert!(ClusterId::new(1) < id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(u64);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Membership state of a single point.
///
/// Unconnected labels order before clustered ones, so sorting groups by
/// `(size, label)` never ranks an unconnected group above a formed cluster of
/// the same size.
///
/// # Examples
/// ```
/// use linkage_core::{ClusterId, ClusterLabel};
///
/// let lonely = ClusterLabel::unconnected(3);
/// assert!(lonely.is_unconnected());
/// assert_eq!(lonely.cluster(), None);
///
/// let joined = ClusterLabel::Clustered(ClusterId::new(0));
/// assert_eq!(joined.cluster(), Some(ClusterId::new(0)));
/// assert_ne!(ClusterLabel::unconnected(0), ClusterLabel::unconnected(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClusterLabel {
    /// The point has not been joined to anything yet.
    Unconnected {
        /// Index of the point carrying this label.
        index: usize,
    },
    /// The point belongs to the formed cluster with this identifier.
    Clustered(ClusterId),
}

impl ClusterLabel {
    /// Returns the initial label of the point at `index`.
    #[must_use]
    pub const fn unconnected(index: usize) -> Self {
        Self::Unconnected { index }
    }

    /// Returns `true` when the point has not joined any cluster.
    #[must_use]
    pub const fn is_unconnected(&self) -> bool {
        matches!(self, Self::Unconnected { .. })
    }

    /// Returns the cluster identifier for formed clusters.
    #[must_use]
    pub const fn cluster(&self) -> Option<ClusterId> {
        match self {
            Self::Clustered(id) => Some(*id),
            Self::Unconnected { .. } => None,
        }
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconnected { index } => write!(f, "unconnected({index})"),
            Self::Clustered(id) => write!(f, "cluster({id})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unconnected_before_clustered(
        ClusterLabel::unconnected(9),
        ClusterLabel::Clustered(ClusterId::new(0))
    )]
    #[case::by_index(ClusterLabel::unconnected(1), ClusterLabel::unconnected(2))]
    #[case::by_id(
        ClusterLabel::Clustered(ClusterId::new(1)),
        ClusterLabel::Clustered(ClusterId::new(3))
    )]
    fn labels_order_unconnected_first(#[case] lower: ClusterLabel, #[case] higher: ClusterLabel) {
        assert!(lower < higher);
    }

    #[rstest]
    #[case(ClusterLabel::unconnected(4), "unconnected(4)")]
    #[case(ClusterLabel::Clustered(ClusterId::new(2)), "cluster(2)")]
    fn labels_display_their_state(#[case] label: ClusterLabel, #[case] expected: &str) {
        assert_eq!(label.to_string(), expected);
    }
}

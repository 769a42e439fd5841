//! Cluster size aggregation and the product-of-sizes score.

use std::collections::{HashMap, hash_map::Entry};

use crate::label::ClusterLabel;

/// Number of points sharing one label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClusterGroup {
    size: usize,
    label: ClusterLabel,
}

impl ClusterGroup {
    /// Creates a group of `size` points sharing `label`.
    #[must_use]
    pub const fn new(size: usize, label: ClusterLabel) -> Self {
        Self { size, label }
    }

    /// Returns the number of points in the group.
    #[must_use]
    #[rustfmt::skip]
    pub const fn size(&self) -> usize { self.size }

    /// Returns the label shared by the group.
    #[must_use]
    #[rustfmt::skip]
    pub const fn label(&self) -> ClusterLabel { self.label }

    /// Returns `true` when the group is made of unconnected points.
    #[must_use]
    pub const fn is_unconnected(&self) -> bool {
        self.label.is_unconnected()
    }
}

/// Snapshot of cluster sizes, one group per distinct label.
///
/// Groups appear in the order their label is first met when scanning points
/// by index. Building the snapshot never mutates labels, so repeated calls on
/// unchanged labels produce identical results.
///
/// # Examples
/// ```
/// use linkage_core::{ClusterId, ClusterLabel, ClusterStatistics};
///
/// let a = ClusterLabel::Clustered(ClusterId::new(0));
/// let labels = [ClusterLabel::unconnected(0), a, a];
/// let stats = ClusterStatistics::from_labels(&labels);
///
/// assert_eq!(stats.len(), 2);
/// assert_eq!(stats.total(), 3);
/// assert!(stats.has_unconnected());
/// assert_eq!(stats.formed_count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClusterStatistics {
    groups: Vec<ClusterGroup>,
}

impl ClusterStatistics {
    /// Groups `labels` by value, preserving first-encounter order.
    #[must_use]
    pub fn from_labels(labels: &[ClusterLabel]) -> Self {
        let mut positions: HashMap<ClusterLabel, usize> = HashMap::new();
        let mut groups: Vec<ClusterGroup> = Vec::new();
        for &label in labels {
            match positions.entry(label) {
                Entry::Occupied(entry) => groups[*entry.get()].size += 1,
                Entry::Vacant(entry) => {
                    entry.insert(groups.len());
                    groups.push(ClusterGroup::new(1, label));
                }
            }
        }
        Self { groups }
    }

    /// Builds a snapshot from explicit groups.
    #[must_use]
    pub const fn from_groups(groups: Vec<ClusterGroup>) -> Self {
        Self { groups }
    }

    /// Returns the groups in first-encounter order.
    #[must_use]
    #[rustfmt::skip]
    pub fn groups(&self) -> &[ClusterGroup] { &self.groups }

    /// Returns the number of distinct labels.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.groups.len() }

    /// Returns `true` when no labels were grouped.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.groups.is_empty() }

    /// Returns `true` when any group consists of unconnected points.
    #[must_use]
    pub fn has_unconnected(&self) -> bool {
        self.groups.iter().any(ClusterGroup::is_unconnected)
    }

    /// Returns the number of formed clusters.
    #[must_use]
    pub fn formed_count(&self) -> usize {
        self.groups.iter().filter(|group| !group.is_unconnected()).count()
    }

    /// Returns the total number of points across all groups.
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.iter().map(ClusterGroup::size).sum()
    }
}

/// Multiplies the sizes of the `top_n` largest formed clusters.
///
/// Groups are ranked by `(size, label)` and scanned from the largest.
/// Unconnected groups never contribute. The product starts at 1, so zero
/// qualifying groups score 1. Returns `None` when the product overflows `u64`.
///
/// # Examples
/// ```
/// use linkage_core::{ClusterGroup, ClusterId, ClusterLabel, ClusterStatistics, score};
///
/// let stats = ClusterStatistics::from_groups(vec![
///     ClusterGroup::new(5, ClusterLabel::unconnected(0)),
///     ClusterGroup::new(3, ClusterLabel::Clustered(ClusterId::new(1))),
///     ClusterGroup::new(2, ClusterLabel::Clustered(ClusterId::new(100))),
/// ]);
/// assert_eq!(score(&stats, 1), Some(3));
/// assert_eq!(score(&stats, 2), Some(6));
/// assert_eq!(score(&stats, 3), Some(6));
/// ```
#[must_use]
pub fn score(stats: &ClusterStatistics, top_n: usize) -> Option<u64> {
    let mut ranked = stats.groups.clone();
    ranked.sort_unstable();
    ranked
        .iter()
        .rev()
        .filter(|group| !group.is_unconnected())
        .take(top_n)
        .try_fold(1_u64, |product, group| {
            product.checked_mul(u64::try_from(group.size).ok()?)
        })
}

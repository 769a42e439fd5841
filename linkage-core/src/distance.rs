//! Pairwise squared Euclidean distances over a point set.
//!
//! Distances are kept squared and integral: the ordering is identical to the
//! true Euclidean ordering and no floating-point rounding enters comparisons.
//! Differences are widened to `i64` and squares accumulated in `u128`, so any
//! pair of `i32` coordinates is representable.

#[cfg(feature = "cpu")]
use rayon::prelude::*;

use crate::{edge::Edge, point::Point};

/// Computes the squared Euclidean distance between two points.
///
/// # Examples
/// ```
/// use linkage_core::{Point, squared_distance};
///
/// let a = Point::new(1, 2, 3);
/// let b = Point::new(4, 5, 6);
/// assert_eq!(squared_distance(&a, &b), 27);
/// ```
#[must_use]
pub fn squared_distance(left: &Point, right: &Point) -> u128 {
    left.coordinates()
        .iter()
        .zip(right.coordinates().iter())
        .map(|(&l, &r)| {
            let diff = (i64::from(l) - i64::from(r)).unsigned_abs();
            u128::from(diff) * u128::from(diff)
        })
        .sum()
}

/// Returns the number of unordered pairs over `point_count` points.
#[must_use]
pub const fn pair_count(point_count: usize) -> usize {
    point_count.saturating_mul(point_count.saturating_sub(1)) / 2
}

/// Enumerates one [`Edge`] per unordered pair of points.
///
/// Pairs are produced with increasing first index, then increasing second
/// index; each edge's sequence number records that position.
///
/// # Examples
/// ```
/// use linkage_core::{Point, pairwise_edges};
///
/// let points = [Point::new(1, 2, 3), Point::new(4, 5, 6), Point::new(7, 8, 10)];
/// let edges = pairwise_edges(&points);
/// let distances: Vec<u128> = edges.iter().map(|edge| edge.distance()).collect();
/// assert_eq!(distances, [27, 121, 34]);
/// ```
#[must_use]
pub fn pairwise_edges(points: &[Point]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(pair_count(points.len()));
    for (source, left) in points.iter().enumerate() {
        for (target, right) in points.iter().enumerate().skip(source + 1) {
            edges.push(Edge::new(
                squared_distance(left, right),
                source,
                target,
                edges.len() as u64,
            ));
        }
    }
    edges
}

/// Parallel counterpart of [`pairwise_edges`].
///
/// Rows are sharded by first index across the Rayon pool and gathered back in
/// enumeration order, so the output is identical to the sequential version.
#[cfg(feature = "cpu")]
#[cfg_attr(docsrs, doc(cfg(feature = "cpu")))]
#[must_use]
pub fn par_pairwise_edges(points: &[Point]) -> Vec<Edge> {
    let len = points.len();
    points
        .par_iter()
        .enumerate()
        .flat_map_iter(|(source, left)| {
            let row_start = row_offset(len, source);
            points
                .iter()
                .enumerate()
                .skip(source + 1)
                .map(move |(target, right)| {
                    let sequence = row_start + (target - source - 1);
                    Edge::new(
                        squared_distance(left, right),
                        source,
                        target,
                        sequence as u64,
                    )
                })
        })
        .collect()
}

/// Sequence number of the first pair whose first index is `source`.
#[cfg(feature = "cpu")]
const fn row_offset(len: usize, source: usize) -> usize {
    // Rows before `source` hold (len - 1) + (len - 2) + ... + (len - source) pairs.
    source * len - source * (source + 1) / 2
}

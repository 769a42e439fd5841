//! Property-based tests for the cluster tracker and bridge finder.
//!
//! The tracker's partition after consuming a prefix of the edge order must
//! match the connected components of that prefix, with points untouched by
//! any consumed edge left unconnected. A plain sequential union-find serves
//! as the oracle, and the bridge must be the last edge that oracle accepts.
//! Coordinates are drawn from a narrow range so distance ties are frequent.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;

use crate::{
    ClusterLabel, EdgeSequence, LinkageError, Point, find_bridge, pair_count, pairwise_edges,
    stats::ClusterStatistics, test_utils::suite_proptest_config,
};

use super::ClusterTracker;

const MAX_POINTS: usize = 24;
const COORDINATE_RANGE: std::ops::Range<i32> = -12..12;

fn points_strategy(min: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(
        (COORDINATE_RANGE, COORDINATE_RANGE, COORDINATE_RANGE).prop_map(Point::from),
        min..MAX_POINTS,
    )
}

fn fixture_strategy() -> impl Strategy<Value = (Vec<Point>, usize)> {
    points_strategy(0).prop_flat_map(|points| {
        let edges = pair_count(points.len());
        (Just(points), 0..=edges.saturating_add(2))
    })
}

/// Shape of a seeded point cloud.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
enum Layout {
    /// Points spread across a wide cube, so ties are rare.
    #[weight(3)]
    Scattered,
    /// Points packed into a tiny cube, so duplicates and ties dominate.
    #[weight(2)]
    Tight,
    /// Points on the x-axis.
    #[weight(1)]
    Line,
}

fn layout_points(layout: Layout, len: usize, seed: u64) -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..len)
        .map(|_| match layout {
            Layout::Scattered => Point::new(
                rng.gen_range(-1_000..1_000),
                rng.gen_range(-1_000..1_000),
                rng.gen_range(-1_000..1_000),
            ),
            Layout::Tight => Point::new(
                rng.gen_range(-2..3),
                rng.gen_range(-2..3),
                rng.gen_range(-2..3),
            ),
            Layout::Line => Point::new(rng.gen_range(-50..50), 0, 0),
        })
        .collect()
}

/// Sequential union-find used as a reference partition.
struct Oracle {
    parent: Vec<usize>,
    touched: Vec<bool>,
}

impl Oracle {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            touched: vec![false; n],
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            let grandparent = self.parent[self.parent[node]];
            self.parent[node] = grandparent;
            node = grandparent;
        }
        node
    }

    /// Joins the sets holding `left` and `right`, returning whether they were
    /// distinct.
    fn union(&mut self, left: usize, right: usize) -> bool {
        self.touched[left] = true;
        self.touched[right] = true;
        let l = self.find(left);
        let r = self.find(right);
        if l == r {
            return false;
        }
        self.parent[r] = l;
        true
    }
}

fn check_partition(points: &[Point], budget: usize) -> TestCaseResult {
    let edges = EdgeSequence::from_points(points);
    let mut tracker = ClusterTracker::new(points.len());
    tracker
        .run(edges.as_slice(), budget)
        .map_err(|err| TestCaseError::fail(format!("run failed: {err}")))?;

    let mut oracle = Oracle::new(points.len());
    for edge in edges.iter().take(budget) {
        oracle.union(edge.source(), edge.target());
    }

    for i in 0..points.len() {
        let label = tracker.labels()[i];
        prop_assert_eq!(
            label.is_unconnected(),
            !oracle.touched[i],
            "point {} connectivity disagrees with oracle",
            i
        );
        if let ClusterLabel::Unconnected { index } = label {
            prop_assert_eq!(index, i);
        }
        for j in (i + 1)..points.len() {
            let same_label = tracker.same_cluster(i, j);
            let same_root = oracle.touched[i] && oracle.find(i) == oracle.find(j);
            prop_assert_eq!(same_label, same_root, "pair ({}, {}) disagrees", i, j);
        }
    }

    for group in tracker.statistics().groups() {
        if let Some(id) = group.label().cluster() {
            let members = tracker.members(id).unwrap_or_default();
            prop_assert_eq!(members.len(), group.size());
        }
    }
    Ok(())
}

fn check_monotonic(points: &[Point]) -> TestCaseResult {
    let edges = EdgeSequence::from_points(points);
    let mut tracker = ClusterTracker::new(points.len());
    let mut previous: Option<(ClusterStatistics, Vec<ClusterLabel>)> = None;

    for budget in 0..=edges.len() {
        tracker
            .advance_to(edges.as_slice(), budget)
            .map_err(|err| TestCaseError::fail(format!("advance failed: {err}")))?;
        let stats = tracker.statistics();
        prop_assert_eq!(stats.total(), points.len());
        prop_assert_eq!(&stats, &tracker.statistics());

        if let Some((before_stats, before_labels)) = &previous {
            prop_assert!(stats.len() <= before_stats.len());
            for i in 0..points.len() {
                for j in (i + 1)..points.len() {
                    let was_merged = !before_labels[i].is_unconnected()
                        && before_labels[i] == before_labels[j];
                    if was_merged {
                        prop_assert!(tracker.same_cluster(i, j), "pair ({}, {}) split", i, j);
                    }
                }
            }
        }
        previous = Some((stats, tracker.labels().to_vec()));
    }

    let mut restarted = ClusterTracker::new(points.len());
    restarted
        .run(edges.as_slice(), edges.len())
        .map_err(|err| TestCaseError::fail(format!("run failed: {err}")))?;
    prop_assert_eq!(restarted.labels(), tracker.labels());
    Ok(())
}

fn check_bridge(points: &[Point]) -> TestCaseResult {
    let edges = EdgeSequence::from_points(points);
    let mut oracle = Oracle::new(points.len());
    let mut last = None;
    for edge in &edges {
        if oracle.union(edge.source(), edge.target()) {
            last = Some(*edge);
        }
    }

    let mut tracker = ClusterTracker::new(points.len());
    let outcome = find_bridge(points, edges.as_slice(), &mut tracker);
    match (last, outcome) {
        (Some(edge), Ok(bridge)) if points.len() > 2 => {
            prop_assert_eq!(bridge.edge(), edge);
            prop_assert_eq!(
                bridge.x_product(),
                i64::from(points[edge.source()].x()) * i64::from(points[edge.target()].x())
            );
            prop_assert_eq!(tracker.cluster_count() + tracker.unconnected_count(), 2);
        }
        (Some(_), Err(LinkageError::BridgeUnreachable { clusters, unconnected, .. }))
            if points.len() == 2 =>
        {
            prop_assert_eq!((clusters, unconnected), (1, 0));
        }
        (last, outcome) => {
            return Err(TestCaseError::fail(format!(
                "oracle {last:?} disagrees with finder {outcome:?}"
            )));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn pairwise_edges_cover_every_pair_once(points in points_strategy(0)) {
        let edges = pairwise_edges(&points);
        prop_assert_eq!(edges.len(), pair_count(points.len()));
        let mut seen = vec![false; edges.len()];
        for edge in &edges {
            prop_assert!(edge.source() < edge.target());
            prop_assert!(edge.target() < points.len());
            let slot = pair_count(points.len())
                - pair_count(points.len() - edge.source())
                + (edge.target() - edge.source() - 1);
            prop_assert!(!seen[slot], "pair ({}, {}) repeated", edge.source(), edge.target());
            seen[slot] = true;
        }
        prop_assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn edge_sequence_is_sorted_and_stable(points in points_strategy(0)) {
        let sequence = EdgeSequence::from_points(&points);
        for window in sequence.as_slice().windows(2) {
            prop_assert!(window[0] <= window[1]);
        }
    }

    #[test]
    fn partition_matches_oracle((points, budget) in fixture_strategy()) {
        check_partition(&points, budget)?;
    }

    #[test]
    fn growth_is_monotonic_and_resumable(points in points_strategy(0)) {
        check_monotonic(&points)?;
    }

    #[test]
    fn bridge_matches_final_kruskal_edge(points in points_strategy(2)) {
        check_bridge(&points)?;
    }

    #[test]
    fn seeded_layouts_keep_invariants(
        layout in any::<Layout>(),
        len in 0..MAX_POINTS,
        seed in any::<u64>(),
    ) {
        let points = layout_points(layout, len, seed);
        check_partition(&points, len)?;
        check_monotonic(&points)?;
        if len >= 2 {
            check_bridge(&points)?;
        }
    }
}

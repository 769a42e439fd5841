//! Core orchestration for the linkage analyses.
//!
//! Provides the [`Linkage`] runtime entry point, which computes the edge order
//! once and derives both the budgeted score and the bridge edge from it.

use std::{num::NonZeroUsize, sync::Arc};

use tracing::{info, instrument, warn};

use crate::{
    Result,
    bridge::{Bridge, find_bridge},
    datasource::PointSource,
    edge::EdgeSequence,
    error::{LinkageError, PointSourceError},
    point::Point,
    stats::{ClusterStatistics, score},
    tracker::ClusterTracker,
};

/// Outcome of a [`Linkage::run`] invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkageReport {
    point_count: usize,
    statistics: ClusterStatistics,
    score: u64,
    bridge: Bridge,
}

impl LinkageReport {
    /// Returns the number of points analysed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn point_count(&self) -> usize { self.point_count }

    /// Returns the cluster groups left by the budgeted run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn statistics(&self) -> &ClusterStatistics { &self.statistics }

    /// Returns the product of the largest cluster sizes after the budgeted
    /// run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn score(&self) -> u64 { self.score }

    /// Returns the edge joining the final two clusters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn bridge(&self) -> &Bridge { &self.bridge }
}

/// Entry point for running both analyses over a point source.
///
/// # Examples
/// ```
/// use linkage_core::{LinkageBuilder, Point};
///
/// let points = [
///     Point::new(0, 0, 0),
///     Point::new(1, 0, 0),
///     Point::new(10, 0, 0),
///     Point::new(12, 0, 0),
/// ];
/// let linkage = LinkageBuilder::new()
///     .with_pair_budget(1)
///     .with_top_clusters(2)
///     .build()?;
/// let report = linkage.run(&points[..])?;
/// assert_eq!(report.score(), 2);
/// assert_eq!(report.bridge().x_product(), 10);
/// # Ok::<(), linkage_core::LinkageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Linkage {
    pair_budget: usize,
    top_clusters: NonZeroUsize,
}

impl Linkage {
    pub(crate) const fn new(pair_budget: usize, top_clusters: NonZeroUsize) -> Self {
        Self {
            pair_budget,
            top_clusters,
        }
    }

    /// Returns the number of edges consumed before scoring.
    #[must_use]
    pub const fn pair_budget(&self) -> usize {
        self.pair_budget
    }

    /// Returns how many of the largest clusters are multiplied into the score.
    #[must_use]
    pub const fn top_clusters(&self) -> NonZeroUsize {
        self.top_clusters
    }

    /// Runs the budgeted score and the bridge search against `source`.
    ///
    /// # Errors
    /// Returns [`LinkageError::EmptySource`] when the source is empty,
    /// [`LinkageError::PointSource`] when reading points fails,
    /// [`LinkageError::ScoreOverflow`] when the score does not fit in `u64`,
    /// and any error raised by [`find_bridge`].
    #[instrument(
        name = "core.run",
        err,
        skip(self, source),
        fields(data_source = source.name(), points = source.len()),
    )]
    pub fn run<S: PointSource + ?Sized>(&self, source: &S) -> Result<LinkageReport> {
        let points = Self::load(source)?;
        self.run_points(&points)
    }

    /// Runs both analyses over an in-memory point set.
    ///
    /// # Errors
    /// As [`Self::run`], minus point source failures.
    #[instrument(
        name = "core.analyse",
        err,
        skip(self, points),
        fields(
            points = points.len(),
            pair_budget = self.pair_budget,
            top_clusters = %self.top_clusters,
        ),
    )]
    pub fn run_points(&self, points: &[Point]) -> Result<LinkageReport> {
        let edges = EdgeSequence::from_points(points);
        let mut tracker = ClusterTracker::new(points.len());

        tracker.run(edges.as_slice(), self.pair_budget)?;
        let statistics = tracker.statistics();
        let score = score(&statistics, self.top_clusters.get()).ok_or(
            LinkageError::ScoreOverflow {
                top_clusters: self.top_clusters.get(),
            },
        )?;
        info!(
            score,
            clusters = statistics.formed_count(),
            "budgeted score computed"
        );

        let bridge = find_bridge(points, edges.as_slice(), &mut tracker)?;
        info!(
            x_product = bridge.x_product(),
            budget = bridge.budget(),
            "bridge edge located"
        );

        Ok(LinkageReport {
            point_count: points.len(),
            statistics,
            score,
            bridge,
        })
    }

    fn load<S: PointSource + ?Sized>(source: &S) -> Result<Vec<Point>> {
        if source.is_empty() {
            warn!(
                data_source = source.name(),
                "point source is empty, returning error"
            );
            return Err(LinkageError::EmptySource {
                data_source: Arc::from(source.name()),
            });
        }
        source
            .points()
            .map_err(|error| wrap_source_error(source, error))
    }
}

fn wrap_source_error<S: PointSource + ?Sized>(source: &S, error: PointSourceError) -> LinkageError {
    LinkageError::PointSource {
        data_source: Arc::from(source.name()),
        error,
    }
}

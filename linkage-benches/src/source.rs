//! Seeded synthetic point sets for benchmarking.

use linkage_core::Point;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur while generating benchmark points.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested point count was zero.
    #[error("point count must be greater than zero")]
    ZeroPoints,
    /// The coordinate extent was zero.
    #[error("coordinate extent must be greater than zero")]
    ZeroExtent,
    /// The requested cluster count was zero.
    #[error("cluster count must be greater than zero")]
    ZeroClusters,
    /// The configured cluster count exceeded the available points.
    #[error("cluster count ({cluster_count}) must not exceed point count ({point_count})")]
    ClusterCountExceedsPointCount {
        /// Number of clusters requested.
        cluster_count: usize,
        /// Number of points requested.
        point_count: usize,
    },
}

/// Uniformly scattered points in the cube `[0, extent)^3`.
#[derive(Clone, Debug)]
pub struct UniformConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Exclusive upper bound for every coordinate.
    pub extent: i32,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Points scattered around a handful of well-separated centres.
#[derive(Clone, Debug)]
pub struct BlobConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Number of centres; points are assigned round-robin.
    pub cluster_count: usize,
    /// Exclusive upper bound for centre coordinates.
    pub extent: i32,
    /// Maximum offset of a point from its centre along each axis.
    pub spread: i32,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates [`UniformConfig::point_count`] uniformly random points.
///
/// # Errors
/// Returns [`SyntheticError`] when the point count or extent is zero.
///
/// # Examples
/// ```
/// use linkage_benches::source::{UniformConfig, uniform_points};
///
/// let points = uniform_points(&UniformConfig { point_count: 8, extent: 100, seed: 7 })?;
/// assert_eq!(points.len(), 8);
/// # Ok::<(), linkage_benches::source::SyntheticError>(())
/// ```
pub fn uniform_points(config: &UniformConfig) -> Result<Vec<Point>, SyntheticError> {
    if config.point_count == 0 {
        return Err(SyntheticError::ZeroPoints);
    }
    if config.extent <= 0 {
        return Err(SyntheticError::ZeroExtent);
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);
    Ok((0..config.point_count)
        .map(|_| random_point(&mut rng, 0..config.extent))
        .collect())
}

/// Generates points grouped around [`BlobConfig::cluster_count`] centres.
///
/// # Errors
/// Returns [`SyntheticError`] when a count or the extent is zero, or when
/// there are more centres than points.
pub fn blob_points(config: &BlobConfig) -> Result<Vec<Point>, SyntheticError> {
    if config.point_count == 0 {
        return Err(SyntheticError::ZeroPoints);
    }
    if config.cluster_count == 0 {
        return Err(SyntheticError::ZeroClusters);
    }
    if config.cluster_count > config.point_count {
        return Err(SyntheticError::ClusterCountExceedsPointCount {
            cluster_count: config.cluster_count,
            point_count: config.point_count,
        });
    }
    if config.extent <= 0 {
        return Err(SyntheticError::ZeroExtent);
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let centres: Vec<Point> = (0..config.cluster_count)
        .map(|_| random_point(&mut rng, 0..config.extent))
        .collect();
    let spread = config.spread.max(0);
    Ok(centres
        .iter()
        .cycle()
        .take(config.point_count)
        .map(|centre| {
            let offset = random_point(&mut rng, -spread..spread + 1);
            Point::new(
                centre.x().saturating_add(offset.x()),
                centre.y().saturating_add(offset.y()),
                centre.z().saturating_add(offset.z()),
            )
        })
        .collect())
}

fn random_point(rng: &mut SmallRng, range: std::ops::Range<i32>) -> Point {
    Point::new(
        rng.gen_range(range.clone()),
        rng.gen_range(range.clone()),
        rng.gen_range(range),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn uniform_points_are_seeded_and_bounded() {
        let config = UniformConfig {
            point_count: 64,
            extent: 50,
            seed: 3,
        };
        let first = uniform_points(&config).expect("config is valid");
        let second = uniform_points(&config).expect("config is valid");
        assert_eq!(first, second);
        assert!(
            first
                .iter()
                .flat_map(|point| point.coordinates())
                .all(|value| (0..50).contains(&value))
        );
    }

    #[rstest]
    #[case::zero_points(UniformConfig { point_count: 0, extent: 10, seed: 0 }, SyntheticError::ZeroPoints)]
    #[case::zero_extent(UniformConfig { point_count: 4, extent: 0, seed: 0 }, SyntheticError::ZeroExtent)]
    fn uniform_points_rejects_invalid_config(
        #[case] config: UniformConfig,
        #[case] expected: SyntheticError,
    ) {
        assert_eq!(uniform_points(&config), Err(expected));
    }

    #[rstest]
    fn blob_points_stay_near_their_centres() {
        let config = BlobConfig {
            point_count: 30,
            cluster_count: 3,
            extent: 10_000,
            spread: 5,
            seed: 11,
        };
        let points = blob_points(&config).expect("config is valid");
        assert_eq!(points.len(), 30);
        for (index, point) in points.iter().enumerate() {
            let sibling = points[index % 3];
            for (a, b) in point.coordinates().into_iter().zip(sibling.coordinates()) {
                assert!((a - b).abs() <= 10, "point {index} drifted from its blob");
            }
        }
    }

    #[rstest]
    #[case::zero_clusters(0, 4, SyntheticError::ZeroClusters)]
    #[case::too_many_clusters(5, 4, SyntheticError::ClusterCountExceedsPointCount { cluster_count: 5, point_count: 4 })]
    fn blob_points_rejects_invalid_config(
        #[case] cluster_count: usize,
        #[case] point_count: usize,
        #[case] expected: SyntheticError,
    ) {
        let config = BlobConfig {
            point_count,
            cluster_count,
            extent: 100,
            spread: 2,
            seed: 0,
        };
        assert_eq!(blob_points(&config), Err(expected));
    }
}

//! Point source abstractions for the linkage runtime.

use crate::{error::PointSourceError, point::Point};

/// Abstraction over an ordered collection of points.
///
/// # Examples
/// ```
/// use linkage_core::{Point, PointSource, PointSourceError};
///
/// struct Fixed(Vec<Point>);
///
/// impl PointSource for Fixed {
///     fn len(&self) -> usize { self.0.len() }
///     fn name(&self) -> &str { "fixed" }
///     fn point(&self, index: usize) -> Result<Point, PointSourceError> {
///         self.0.get(index).copied().ok_or(PointSourceError::OutOfBounds { index })
///     }
/// }
///
/// let src = Fixed(vec![Point::new(1, 2, 3), Point::new(4, 5, 6)]);
/// assert_eq!(src.len(), 2);
/// assert_eq!(src.point(1)?, Point::new(4, 5, 6));
/// assert_eq!(src.points()?.len(), 2);
/// # Ok::<(), PointSourceError>(())
/// ```
pub trait PointSource {
    /// Returns number of points in the source.
    fn len(&self) -> usize;

    /// Returns whether the source contains no points.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the point at `index`.
    ///
    /// # Errors
    /// Implementations must return [`PointSourceError::OutOfBounds`] for
    /// invalid indices.
    fn point(&self, index: usize) -> Result<Point, PointSourceError>;

    /// Collects every point in source order.
    ///
    /// Implementations backed by a contiguous buffer can override this to
    /// avoid per-point calls.
    ///
    /// # Errors
    /// Returns any [`PointSourceError`] surfaced by [`PointSource::point`].
    fn points(&self) -> Result<Vec<Point>, PointSourceError> {
        (0..self.len()).map(|index| self.point(index)).collect()
    }
}

impl PointSource for [Point] {
    fn len(&self) -> usize {
        <[Point]>::len(self)
    }

    fn name(&self) -> &str {
        "points"
    }

    fn point(&self, index: usize) -> Result<Point, PointSourceError> {
        self.get(index)
            .copied()
            .ok_or(PointSourceError::OutOfBounds { index })
    }

    fn points(&self) -> Result<Vec<Point>, PointSourceError> {
        Ok(self.to_vec())
    }
}

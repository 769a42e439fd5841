//! Text provider for line-based coordinate files implementing `PointSource`.
//!
//! Each non-blank line holds one point as three comma-separated integers,
//! `x,y,z`. Surrounding whitespace on the line and around each coordinate is
//! ignored.
use std::io::BufRead;

use linkage_core::{Point, PointSource, PointSourceError};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading points from text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextProviderError {
    /// Reading from the underlying reader failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The input held no points.
    #[error("input contains no points")]
    EmptyInput,
    /// A line could not be parsed as `x,y,z`.
    #[error("line {line}: {reason}")]
    InvalidLine {
        /// One-based line number.
        line: usize,
        /// Why the line was rejected.
        reason: String,
    },
}

/// Points read from a text source, kept in file order.
#[derive(Clone, Debug)]
pub struct TextPointSource {
    points: Vec<Point>,
    name: String,
}

impl TextPointSource {
    /// Creates a source over already parsed points.
    ///
    /// # Examples
    /// ```
    /// use linkage_core::{Point, PointSource};
    /// use linkage_providers_text::TextPointSource;
    ///
    /// let source = TextPointSource::new("demo", vec![Point::new(1, 2, 3)]);
    /// assert_eq!(source.len(), 1);
    /// assert_eq!(source.name(), "demo");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            points,
            name: name.into(),
        }
    }

    /// Parses one point per non-blank line of `reader`.
    ///
    /// # Errors
    /// Returns [`TextProviderError::Io`] when reading fails,
    /// [`TextProviderError::InvalidLine`] for malformed lines and
    /// [`TextProviderError::EmptyInput`] when no point was read.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    ///
    /// use linkage_core::{Point, PointSource};
    /// use linkage_providers_text::TextPointSource;
    ///
    /// let source = TextPointSource::try_from_reader("demo", Cursor::new("1,2,3\n-4, 5 ,6\n"))?;
    /// assert_eq!(source.point(1)?, Point::new(-4, 5, 6));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, TextProviderError> {
        let mut points = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let point = parse_point(trimmed).map_err(|reason| TextProviderError::InvalidLine {
                line: index + 1,
                reason,
            })?;
            points.push(point);
        }
        if points.is_empty() {
            return Err(TextProviderError::EmptyInput);
        }
        let source = Self::new(name, points);
        debug!(
            data_source = %source.name,
            points = source.points.len(),
            "text points loaded"
        );
        Ok(source)
    }

    /// Returns the parsed points in input order.
    #[must_use]
    pub fn as_points(&self) -> &[Point] {
        &self.points
    }
}

fn parse_point(line: &str) -> Result<Point, String> {
    let mut fields = line.split(',').map(str::trim);
    let mut next = |axis: &str| -> Result<i32, String> {
        let raw = fields
            .next()
            .ok_or_else(|| format!("missing {axis} coordinate"))?;
        raw.parse::<i32>()
            .map_err(|error| format!("invalid {axis} coordinate `{raw}`: {error}"))
    };
    let x = next("x")?;
    let y = next("y")?;
    let z = next("z")?;
    if fields.next().is_some() {
        return Err("expected exactly three coordinates".to_owned());
    }
    Ok(Point::new(x, y, z))
}

impl PointSource for TextPointSource {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn point(&self, index: usize) -> Result<Point, PointSourceError> {
        self.points
            .get(index)
            .copied()
            .ok_or(PointSourceError::OutOfBounds { index })
    }

    fn points(&self) -> Result<Vec<Point>, PointSourceError> {
        Ok(self.points.clone())
    }
}

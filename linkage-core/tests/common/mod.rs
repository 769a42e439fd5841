#![allow(dead_code, reason = "each test binary uses a different subset of these helpers")]

use linkage_core::{Point, PointSource, PointSourceError};

/// In-memory source that can be told to fail at one index.
#[derive(Clone)]
pub struct Fixture {
    points: Vec<Point>,
    fail_at: Option<usize>,
}

impl Fixture {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            fail_at: None,
        }
    }

    #[must_use]
    pub fn failing_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }
}

impl PointSource for Fixture {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn name(&self) -> &str {
        "fixture"
    }

    fn point(&self, index: usize) -> Result<Point, PointSourceError> {
        if self.fail_at == Some(index) {
            return Err(PointSourceError::OutOfBounds { index });
        }
        self.points
            .get(index)
            .copied()
            .ok_or(PointSourceError::OutOfBounds { index })
    }
}

/// Twenty points whose budget-10 score is 40 and whose bridge product is
/// 25272.
#[must_use]
#[rustfmt::skip]
pub fn reference_points() -> Vec<Point> {
    [
        (162, 817, 812), (57, 618, 57), (906, 360, 560), (592, 479, 940),
        (352, 342, 300), (466, 668, 158), (542, 29, 236), (431, 825, 988),
        (739, 650, 466), (52, 470, 668), (216, 146, 977), (819, 987, 18),
        (117, 168, 530), (805, 96, 715), (346, 949, 466), (970, 615, 88),
        (941, 993, 340), (862, 61, 35), (984, 92, 344), (425, 690, 689),
    ]
    .into_iter()
    .map(Point::from)
    .collect()
}

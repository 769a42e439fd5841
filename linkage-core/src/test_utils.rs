//! Shared test utilities for `linkage-core`.

use linkage_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{datasource::PointSource, error::PointSourceError, point::Point};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`PointSource`] implementation that records point lookups for tests.
#[derive(Clone)]
pub(crate) struct CountingSource {
    data: Vec<Point>,
    calls: Arc<AtomicUsize>,
}

impl CountingSource {
    #[must_use]
    pub(crate) fn new(data: Vec<Point>, calls: Arc<AtomicUsize>) -> Self {
        Self { data, calls }
    }

    /// Returns the backing lookup counter for assertions.
    #[must_use]
    pub(crate) fn calls(&self) -> &Arc<AtomicUsize> {
        &self.calls
    }
}

impl PointSource for CountingSource {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn name(&self) -> &str {
        "counting"
    }

    fn point(&self, index: usize) -> Result<Point, PointSourceError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.data
            .get(index)
            .copied()
            .ok_or(PointSourceError::OutOfBounds { index })
    }
}

//! Builder utilities for configuring [`Linkage`] analyses.
//!
//! Exposes the pair budget and score width, validated before constructing
//! [`Linkage`] instances.

use std::num::NonZeroUsize;

use crate::{Result, error::LinkageError, linkage::Linkage};

/// Edges consumed before scoring when no budget is configured.
pub const DEFAULT_PAIR_BUDGET: usize = 1000;

/// Largest clusters multiplied into the score when not configured.
pub const DEFAULT_TOP_CLUSTERS: usize = 3;

/// Configures and constructs [`Linkage`] instances.
///
/// # Examples
/// ```
/// use linkage_core::LinkageBuilder;
///
/// let linkage = LinkageBuilder::new()
///     .with_pair_budget(10)
///     .with_top_clusters(3)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(linkage.pair_budget(), 10);
/// assert_eq!(linkage.top_clusters().get(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct LinkageBuilder {
    pair_budget: usize,
    top_clusters: usize,
}

impl Default for LinkageBuilder {
    fn default() -> Self {
        Self {
            pair_budget: DEFAULT_PAIR_BUDGET,
            top_clusters: DEFAULT_TOP_CLUSTERS,
        }
    }
}

impl LinkageBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use linkage_core::LinkageBuilder;
    ///
    /// let builder = LinkageBuilder::new();
    /// assert_eq!(builder.pair_budget(), 1000);
    /// assert_eq!(builder.top_clusters(), 3);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides how many ascending-order edges are consumed before scoring.
    ///
    /// Budgets beyond the number of available edges are clamped when the
    /// analysis runs.
    #[must_use]
    pub const fn with_pair_budget(mut self, budget: usize) -> Self {
        self.pair_budget = budget;
        self
    }

    /// Returns the configured pair budget.
    #[must_use]
    pub const fn pair_budget(&self) -> usize {
        self.pair_budget
    }

    /// Overrides how many of the largest clusters are multiplied into the
    /// score.
    #[must_use]
    pub const fn with_top_clusters(mut self, count: usize) -> Self {
        self.top_clusters = count;
        self
    }

    /// Returns the configured score width.
    #[must_use]
    pub const fn top_clusters(&self) -> usize {
        self.top_clusters
    }

    /// Validates the configuration and constructs a [`Linkage`] instance.
    ///
    /// # Errors
    /// Returns [`LinkageError::InvalidTopClusters`] when the score width is
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use linkage_core::{LinkageBuilder, LinkageError};
    ///
    /// let err = LinkageBuilder::new().with_top_clusters(0).build().unwrap_err();
    /// assert_eq!(err, LinkageError::InvalidTopClusters { got: 0 });
    /// ```
    pub fn build(self) -> Result<Linkage> {
        let top_clusters = NonZeroUsize::new(self.top_clusters).ok_or(
            LinkageError::InvalidTopClusters {
                got: self.top_clusters,
            },
        )?;

        Ok(Linkage::new(self.pair_budget, top_clusters))
    }
}

//! Error types for the linkage core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::PointSource`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PointSourceError {
    /// Requested index was outside the source's bounds.
    #[error("index {index} is out of bounds")]
    OutOfBounds {
        /// The requested point that exceeded the source bounds.
        index: usize,
    },
    /// Point source contained no points.
    #[error("point source contains no points")]
    EmptyData,
}

define_error_codes! {
    /// Stable codes describing [`PointSourceError`] variants.
    enum PointSourceErrorCode for PointSourceError {
        /// Requested index was outside the source's bounds.
        OutOfBounds => OutOfBounds { .. } => "POINT_SOURCE_OUT_OF_BOUNDS",
        /// Point source contained no points.
        EmptyData => EmptyData => "POINT_SOURCE_EMPTY",
    }
}

/// Error type produced when configuring or running [`crate::Linkage`] and the
/// individual clustering stages.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LinkageError {
    /// The score must multiply at least one cluster size.
    #[error("top_clusters must be at least 1 (got {got})")]
    InvalidTopClusters {
        /// The invalid cluster count supplied by the caller.
        got: usize,
    },
    /// The supplied [`crate::PointSource`] contained no points.
    #[error("point source `{data_source}` contains no points")]
    EmptySource {
        /// Identifier for the empty point source.
        data_source: Arc<str>,
    },
    /// The bridge analysis needs at least one pair of points.
    #[error("at least 2 points are required to find a bridge (got {points})")]
    InsufficientPoints {
        /// Number of points available.
        points: usize,
    },
    /// An edge referenced a point outside the tracked set.
    #[error("edge references point {index}, but point_count is {point_count}")]
    InvalidPointIndex {
        /// The invalid point index referenced by an edge.
        index: usize,
        /// The number of points tracked.
        point_count: usize,
    },
    /// Consuming edges never reduced the network to exactly two
    /// components.
    #[error(
        "no bridge edge exists: {clusters} cluster(s) and {unconnected} unconnected point(s) after {consumed} edges"
    )]
    BridgeUnreachable {
        /// Formed clusters when the search stopped.
        clusters: usize,
        /// Points still unconnected when the search stopped.
        unconnected: usize,
        /// Edges consumed when the search stopped.
        consumed: usize,
    },
    /// The product of the largest cluster sizes does not fit in `u64`.
    #[error("score over the {top_clusters} largest clusters overflows u64")]
    ScoreOverflow {
        /// Number of clusters multiplied into the score.
        top_clusters: usize,
    },
    /// A [`crate::PointSource`] operation failed while running the analysis.
    #[error("point source `{data_source}` failed: {error}")]
    PointSource {
        /// Identifier for the point source that produced the error.
        data_source: Arc<str>,
        #[source]
        /// Underlying point source error bubbled up by the analysis.
        error: PointSourceError,
    },
}

define_error_codes! {
    /// Stable codes describing [`LinkageError`] variants.
    enum LinkageErrorCode for LinkageError {
        /// The score must multiply at least one cluster size.
        InvalidTopClusters => InvalidTopClusters { .. } => "LINKAGE_INVALID_TOP_CLUSTERS",
        /// The supplied [`crate::PointSource`] contained no points.
        EmptySource => EmptySource { .. } => "LINKAGE_EMPTY_SOURCE",
        /// The bridge analysis needs at least one pair of points.
        InsufficientPoints => InsufficientPoints { .. } => "LINKAGE_INSUFFICIENT_POINTS",
        /// An edge referenced a point outside the tracked set.
        InvalidPointIndex => InvalidPointIndex { .. } => "LINKAGE_INVALID_POINT_INDEX",
        /// No budget reduced the network to exactly two components.
        BridgeUnreachable => BridgeUnreachable { .. } => "LINKAGE_BRIDGE_UNREACHABLE",
        /// The product of the largest cluster sizes overflowed.
        ScoreOverflow => ScoreOverflow { .. } => "LINKAGE_SCORE_OVERFLOW",
        /// A [`crate::PointSource`] operation failed while running the analysis.
        PointSourceFailure => PointSource { .. } => "LINKAGE_POINT_SOURCE_FAILURE",
    }
}

impl LinkageError {
    /// Retrieve the inner [`PointSourceErrorCode`] when the error originated
    /// in a [`crate::PointSource`].
    #[must_use]
    pub const fn point_source_code(&self) -> Option<PointSourceErrorCode> {
        match self {
            Self::PointSource { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, LinkageError>;

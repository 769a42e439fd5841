//! Linkage core library.
//!
//! Clusters integer 3-D points by connecting the nearest pairs in ascending
//! squared-distance order under an edge budget, then derives two analytics
//! from the cluster structure: the product of the largest cluster sizes and
//! the edge that completes full connectivity by joining the last two
//! components.
//!
//! Edge ties are broken by pair enumeration order (increasing first index,
//! then increasing second index), and uniting clusters keeps the lower id, so
//! every analysis is deterministic for a given point order.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bridge;
mod builder;
mod datasource;
mod distance;
mod edge;
mod error;
mod label;
mod linkage;
mod point;
mod stats;
#[cfg(test)]
mod test_utils;
mod tracker;

pub use crate::{
    bridge::{Bridge, find_bridge},
    builder::{DEFAULT_PAIR_BUDGET, DEFAULT_TOP_CLUSTERS, LinkageBuilder},
    datasource::PointSource,
    edge::{Edge, EdgeSequence},
    error::{LinkageError, LinkageErrorCode, PointSourceError, PointSourceErrorCode, Result},
    label::{ClusterId, ClusterLabel},
    linkage::{Linkage, LinkageReport},
    point::Point,
    stats::{ClusterGroup, ClusterStatistics, score},
    tracker::ClusterTracker,
};

#[cfg(feature = "cpu")]
pub use crate::distance::par_pairwise_edges;
pub use crate::distance::{pair_count, pairwise_edges, squared_distance};

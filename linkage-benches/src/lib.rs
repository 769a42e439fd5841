//! Benchmark support crate for linkage.
//!
//! Provides seeded synthetic point sets and parameter types used by the
//! Criterion benchmarks for edge sequencing, the budgeted tracker run and the
//! bridge search.

pub mod error;
pub mod params;
pub mod source;

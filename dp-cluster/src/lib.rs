//! Neighbor-joining reduction of a labelled distance matrix.
//!
//! This is a greedy matrix-reduction procedure, unrelated to the alignment
//! engines: each round scores every pair of entries, merges the closest
//! pair into one, and shrinks the matrix by one row and column until a
//! single entry remains.

mod matrix;
mod table;

#[cfg(test)]
mod tests;

pub use matrix::{closest_pair, neighbor_join, DistanceMatrix, Merge};
pub use table::format_table;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {value:?} is not a number")]
    BadNumber { line: usize, value: String },
    #[error("line {line}: expected {expected} distances, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("a distance matrix needs at least two labelled entries")]
    TooSmall,
}

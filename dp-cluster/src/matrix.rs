//! The distance matrix and its per-round reduction.

use crate::ClusterError;
use log::debug;
use std::path::Path;

/// A symmetric matrix of pairwise distances between labelled entries.
///
/// Shrinks by one entry per [`DistanceMatrix::merge`] until a single merged
/// entry remains.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    labels: Vec<String>,
    rows: Vec<Vec<f64>>,
}

/// One completed merge: the two entries joined and the label of the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Merge {
    pub left: String,
    pub right: String,
    pub merged: String,
}

impl DistanceMatrix {
    pub fn new(labels: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, ClusterError> {
        if labels.len() < 2 {
            return Err(ClusterError::TooSmall);
        }
        if rows.len() != labels.len() {
            return Err(ClusterError::RowCount {
                expected: labels.len(),
                found: rows.len(),
            });
        }
        Ok(DistanceMatrix { labels, rows })
    }

    /// Reads a matrix file.
    ///
    /// The first line is a corner token followed by the labels; every
    /// following line is a row label followed by that row's distances.
    pub fn from_path(path: &Path) -> Result<Self, ClusterError> {
        let text = std::fs::read_to_string(path).map_err(|source| ClusterError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ClusterError> {
        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines.next().ok_or(ClusterError::TooSmall)?;
        // The first header token is the corner placeholder above the row
        // labels.
        let labels: Vec<String> = header
            .split_whitespace()
            .skip(1)
            .map(str::to_owned)
            .collect();
        if labels.len() < 2 {
            return Err(ClusterError::TooSmall);
        }

        let mut rows = Vec::with_capacity(labels.len());
        for (index, line) in lines {
            let mut fields = line.split_whitespace();
            // Row label; the header labels are authoritative.
            fields.next();
            let row = fields
                .map(|field| {
                    field.parse::<f64>().map_err(|_| ClusterError::BadNumber {
                        line: index + 1,
                        value: field.to_owned(),
                    })
                })
                .collect::<Result<Vec<f64>, _>>()?;
            if row.len() != labels.len() {
                return Err(ClusterError::RowLength {
                    line: index + 1,
                    expected: labels.len(),
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        Self::new(labels, rows)
    }

    /// Entries remaining.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn distances(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row_sums(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.iter().sum()).collect()
    }

    /// The pair scores driving each round:
    /// `Q(i, j) = (n - 1) * d(i, j) - rowsum(i) - rowsum(j)`, with a zero
    /// diagonal and mirrored off-diagonal entries.
    pub fn q_matrix(&self, row_sums: &[f64]) -> Vec<Vec<f64>> {
        let n = self.len();
        let mut q = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let score = (n - 1) as f64 * self.rows[i][j] - row_sums[i] - row_sums[j];
                q[i][j] = score;
                q[j][i] = score;
            }
        }
        q
    }

    /// Merges entries `i` and `j` (`i < j`) into one.
    ///
    /// The merged entry keeps slot `i` under the concatenated label with
    /// `d(ij, k) = (d(i, k) + d(j, k) - d(i, j)) / 2` to every survivor;
    /// row and column `j` disappear.
    pub fn merge(&mut self, i: usize, j: usize) -> Merge {
        debug_assert!(i < j && j < self.len());

        let d_ij = self.rows[i][j];
        for k in 0..self.len() {
            if k == i || k == j {
                continue;
            }
            let merged = (self.rows[i][k] + self.rows[j][k] - d_ij) / 2.0;
            self.rows[i][k] = merged;
            self.rows[k][i] = merged;
        }
        self.rows[i][i] = 0.0;

        self.rows.remove(j);
        for row in &mut self.rows {
            row.remove(j);
        }

        let right = self.labels.remove(j);
        let left = self.labels[i].clone();
        let merged = format!("{left}{right}");
        debug!("merged {left} and {right} into {merged}");
        self.labels[i] = merged.clone();

        Merge {
            left,
            right,
            merged,
        }
    }
}

/// The lowest-scoring pair in the strict upper triangle of `q`, first in
/// row-major order on ties.
pub fn closest_pair(q: &[Vec<f64>]) -> (usize, usize) {
    debug_assert!(q.len() >= 2);
    let (mut best, mut best_at) = (q[0][1], (0, 1));
    for i in 0..q.len() {
        for j in (i + 1)..q.len() {
            if q[i][j] < best {
                (best, best_at) = (q[i][j], (i, j));
            }
        }
    }
    best_at
}

/// Runs rounds until a single entry remains, returning the merges in order.
pub fn neighbor_join(matrix: &mut DistanceMatrix) -> Vec<Merge> {
    let mut merges = Vec::with_capacity(matrix.len().saturating_sub(1));
    while matrix.len() >= 2 {
        let row_sums = matrix.row_sums();
        let q = matrix.q_matrix(&row_sums);
        let (i, j) = closest_pair(&q);
        merges.push(matrix.merge(i, j));
    }
    merges
}

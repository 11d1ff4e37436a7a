//! Local alignment: the highest-scoring pair of contiguous substrings.

use crate::grid::{Dir, Grid};
use crate::scoring::{AlignError, ScoringScheme};
use dp_types::{Alignment, Cost, Pos, Seq, GAP, I};
use log::debug;

/// Optimal local alignment of `a` and `b`.
///
/// Phase 1 fills a `(|a|+1) x (|b|+1)` table where each cell holds the best
/// score of an alignment ending exactly there, floored at zero so a local
/// alignment never drags a negative-scoring prefix along. Candidates are
/// tried in the fixed order zero, diagonal, up, left and the first maximum
/// wins; in particular a zero-scoring tie terminates the cell, keeping tied
/// alignments as short as possible.
///
/// Phase 2 walks back from the first row-major occurrence of the table
/// maximum until it reaches a cell without a predecessor.
///
/// Totally dissimilar sequences leave the whole table at zero; the result is
/// then score 0 with an empty alignment, which is a valid outcome and not an
/// error.
pub fn local_align(
    a: Seq,
    b: Seq,
    scheme: &ScoringScheme,
) -> Result<(Cost, Alignment), AlignError> {
    scheme.validate(a)?;
    scheme.validate(b)?;

    let (m, n) = (a.len(), b.len());
    debug!("local: filling a {}x{} table", m + 1, n + 1);

    let mut score = Grid::<Cost>::new(m + 1, n + 1);
    let mut dir = Grid::<Dir>::new(m + 1, n + 1);

    // Strictly-greater updates keep the first row-major occurrence on ties;
    // on an all-zero table the traceback starts (and ends) at the origin.
    let (mut best, mut best_at) = (0, Pos(0, 0));

    for i in 1..=m {
        for j in 1..=n {
            let sub = score[(i - 1, j - 1)] + scheme.score(a[i - 1], b[j - 1])?;
            let from_a = score[(i - 1, j)] + scheme.gap();
            let from_b = score[(i, j - 1)] + scheme.gap();

            // Candidate order zero, diagonal, up, left; first maximum wins.
            let (mut cell, mut d) = (0, Dir::End);
            if sub > cell {
                (cell, d) = (sub, Dir::Diag);
            }
            if from_a > cell {
                (cell, d) = (from_a, Dir::Up);
            }
            if from_b > cell {
                (cell, d) = (from_b, Dir::Left);
            }

            score[(i, j)] = cell;
            dir[(i, j)] = d;
            if cell > best {
                (best, best_at) = (cell, Pos(i as I, j as I));
            }
        }
    }

    Ok((best, traceback(a, b, &dir, best_at)))
}

/// The traceback state machine: `Diag` consumes a symbol from both rows,
/// `Up` from `a` only, `Left` from `b` only; `End` is the sole absorbing
/// state.
fn traceback(a: Seq, b: Seq, dir: &Grid<Dir>, from: Pos) -> Alignment {
    let Pos(i, j) = from;
    let (mut i, mut j) = (i as usize, j as usize);
    let mut row_a = Vec::new();
    let mut row_b = Vec::new();
    loop {
        match dir[(i, j)] {
            Dir::End => break,
            Dir::Diag => {
                i -= 1;
                j -= 1;
                row_a.push(a[i]);
                row_b.push(b[j]);
            }
            Dir::Up => {
                i -= 1;
                row_a.push(a[i]);
                row_b.push(GAP);
            }
            Dir::Left => {
                j -= 1;
                row_a.push(GAP);
                row_b.push(b[j]);
            }
        }
    }
    row_a.reverse();
    row_b.reverse();
    Alignment::new(row_a, row_b)
}

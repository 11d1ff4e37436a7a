//! Global alignment: every symbol of both sequences is consumed exactly once.

use crate::grid::{Dir, Grid};
use crate::scoring::{AlignError, ScoringScheme};
use dp_types::{Alignment, Cost, Seq, GAP};
use log::debug;

/// Per-call counters, returned next to the result rather than kept in
/// ambient state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlobalStats {
    /// Base-case subproblems resolved (one prefix empty). The table resolves
    /// each exactly once, so this is `a.len() + b.len() + 1`.
    pub base_cases: usize,
    /// Interior subproblems filled: `a.len() * b.len()`.
    pub expanded: usize,
}

/// Optimal end-to-end alignment of `a` and `b`.
///
/// See [`global_align_with_stats`]; this drops the counters.
pub fn global_align(
    a: Seq,
    b: Seq,
    scheme: &ScoringScheme,
) -> Result<(Cost, Alignment), AlignError> {
    global_align_with_stats(a, b, scheme).map(|(score, alignment, _)| (score, alignment))
}

/// Optimal end-to-end alignment of `a` and `b`, with counters.
///
/// Subproblems are prefix pairs `(i, j)`, solved bottom-up over a pre-sized
/// `(|a|+1) x (|b|+1)` table; the naive recursion over the same subproblems
/// is exponential and deliberately absent. Base cases force the rest of the
/// non-empty side against gaps.
///
/// When several choices tie, the diagonal wins, then consuming from `a`,
/// then consuming from `b`, so the reported alignment is fully
/// deterministic. Swapping the arguments always preserves the score, but a
/// tied gap placement may land on the other side.
pub fn global_align_with_stats(
    a: Seq,
    b: Seq,
    scheme: &ScoringScheme,
) -> Result<(Cost, Alignment, GlobalStats), AlignError> {
    scheme.validate(a)?;
    scheme.validate(b)?;

    let (m, n) = (a.len(), b.len());
    debug!("global: filling a {}x{} table", m + 1, n + 1);

    let mut score = Grid::<Cost>::new(m + 1, n + 1);
    let mut dir = Grid::<Dir>::new(m + 1, n + 1);

    for i in 1..=m {
        score[(i, 0)] = i as Cost * scheme.gap();
        dir[(i, 0)] = Dir::Up;
    }
    for j in 1..=n {
        score[(0, j)] = j as Cost * scheme.gap();
        dir[(0, j)] = Dir::Left;
    }

    for i in 1..=m {
        for j in 1..=n {
            let sub = score[(i - 1, j - 1)] + scheme.score(a[i - 1], b[j - 1])?;
            let from_a = score[(i - 1, j)] + scheme.gap();
            let from_b = score[(i, j - 1)] + scheme.gap();

            // Fixed tie-break: diagonal, then consume from a, then from b.
            let (mut best, mut d) = (sub, Dir::Diag);
            if from_a > best {
                (best, d) = (from_a, Dir::Up);
            }
            if from_b > best {
                (best, d) = (from_b, Dir::Left);
            }
            score[(i, j)] = best;
            dir[(i, j)] = d;
        }
    }

    let stats = GlobalStats {
        base_cases: m + n + 1,
        expanded: m * n,
    };
    Ok((score[(m, n)], traceback(a, b, &dir), stats))
}

/// Walks the direction grid from `(|a|, |b|)` back to the origin.
fn traceback(a: Seq, b: Seq, dir: &Grid<Dir>) -> Alignment {
    let (mut i, mut j) = (a.len(), b.len());
    let mut row_a = Vec::with_capacity(i + j);
    let mut row_b = Vec::with_capacity(i + j);
    while i > 0 || j > 0 {
        match dir[(i, j)] {
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
            Dir::End => unreachable!("every cell off the origin has a predecessor"),
        }
    }
    row_a.reverse();
    row_b.reverse();
    Alignment::new(row_a, row_b)
}

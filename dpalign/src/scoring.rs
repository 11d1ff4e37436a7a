//! The scoring model shared by both alignment engines.

use dp_types::{Alignment, Cost, Seq, GAP};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AlignError {
    /// A sequence contains a symbol the scoring scheme does not know.
    #[error("symbol {0:?} is not in the scoring alphabet")]
    UnknownSymbol(char),
}

/// Per-symbol match rewards over a small fixed alphabet, plus one mismatch
/// penalty and one gap penalty.
///
/// Constant for the lifetime of the process; both engines borrow it
/// unchanged. Symbols outside the alphabet are a configuration error, not a
/// case to score silently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringScheme {
    rewards: Vec<(u8, Cost)>,
    mismatch: Cost,
    gap: Cost,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self::dna()
    }
}

impl ScoringScheme {
    pub fn new(rewards: Vec<(u8, Cost)>, mismatch: Cost, gap: Cost) -> Self {
        debug_assert!(rewards.iter().all(|&(sym, _)| sym != GAP));
        ScoringScheme {
            rewards,
            mismatch,
            gap,
        }
    }

    /// The DNA scheme: A=3, C=2, G=1, T=2, mismatch -3, gap -4.
    pub fn dna() -> Self {
        ScoringScheme::new(vec![(b'A', 3), (b'C', 2), (b'G', 1), (b'T', 2)], -3, -4)
    }

    /// The fixed penalty for aligning any symbol against a gap.
    pub fn gap(&self) -> Cost {
        self.gap
    }

    fn reward(&self, sym: u8) -> Option<Cost> {
        self.rewards
            .iter()
            .find(|&&(s, _)| s == sym)
            .map(|&(_, r)| r)
    }

    pub fn contains(&self, sym: u8) -> bool {
        self.reward(sym).is_some()
    }

    /// Fails on the first symbol outside the alphabet.
    ///
    /// The engines call this before allocating any table, so a bad sequence
    /// never produces partial work.
    pub fn validate(&self, seq: Seq) -> Result<(), AlignError> {
        match seq.iter().find(|&&sym| !self.contains(sym)) {
            Some(&sym) => Err(AlignError::UnknownSymbol(sym as char)),
            None => Ok(()),
        }
    }

    /// Score of one alignment column.
    ///
    /// A gap on either side scores the gap penalty, identical alphabet
    /// symbols score that symbol's reward, and two distinct alphabet symbols
    /// score the mismatch penalty.
    pub fn score(&self, a: u8, b: u8) -> Result<Cost, AlignError> {
        if a == GAP || b == GAP {
            return Ok(self.gap);
        }
        let reward = self.reward(a).ok_or(AlignError::UnknownSymbol(a as char))?;
        if a == b {
            Ok(reward)
        } else {
            self.reward(b).ok_or(AlignError::UnknownSymbol(b as char))?;
            Ok(self.mismatch)
        }
    }

    /// Sum of [`ScoringScheme::score`] over all columns of `alignment`.
    ///
    /// For a global alignment this reproduces the reported score exactly.
    pub fn alignment_score(&self, alignment: &Alignment) -> Result<Cost, AlignError> {
        std::iter::zip(&alignment.a, &alignment.b)
            .map(|(&x, &y)| self.score(x, y))
            .sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dna_scheme() {
        let scheme = ScoringScheme::dna();
        assert_eq!(scheme.score(b'A', b'A'), Ok(3));
        assert_eq!(scheme.score(b'C', b'C'), Ok(2));
        assert_eq!(scheme.score(b'G', b'G'), Ok(1));
        assert_eq!(scheme.score(b'T', b'T'), Ok(2));
        assert_eq!(scheme.score(b'T', b'G'), Ok(-3));
        assert_eq!(scheme.score(b'A', GAP), Ok(-4));
        assert_eq!(scheme.score(GAP, b'C'), Ok(-4));
    }

    #[test]
    fn unknown_symbol() {
        let scheme = ScoringScheme::dna();
        assert_eq!(scheme.score(b'N', b'A'), Err(AlignError::UnknownSymbol('N')));
        assert_eq!(scheme.score(b'A', b'X'), Err(AlignError::UnknownSymbol('X')));
        assert_eq!(scheme.validate(b"ACGU"), Err(AlignError::UnknownSymbol('U')));
        assert_eq!(scheme.validate(b"ACGT"), Ok(()));
        assert_eq!(scheme.validate(b""), Ok(()));
    }

    #[test]
    fn column_sum() {
        let scheme = ScoringScheme::dna();
        let alignment = Alignment::new(b"AG-".to_vec(), b"ACT".to_vec());
        // A-A match, G-C mismatch, gap.
        assert_eq!(scheme.alignment_score(&alignment), Ok(3 - 3 - 4));
    }
}

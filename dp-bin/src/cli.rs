use clap::{value_parser, Parser, Subcommand};
use std::path::PathBuf;

/// Optimal pairwise DNA alignment and distance-matrix clustering.
#[derive(Parser)]
#[clap(author, about)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Align two sequences end-to-end, consuming every symbol of both.
    Global {
        /// File holding the first sequence as raw text.
        #[clap(value_parser = value_parser!(PathBuf))]
        a: PathBuf,
        /// File holding the second sequence as raw text.
        #[clap(value_parser = value_parser!(PathBuf))]
        b: PathBuf,
    },
    /// Find the highest-scoring pair of contiguous subsequences.
    Local {
        /// File holding the first sequence as raw text.
        #[clap(value_parser = value_parser!(PathBuf))]
        a: PathBuf,
        /// File holding the second sequence as raw text.
        #[clap(value_parser = value_parser!(PathBuf))]
        b: PathBuf,
    },
    /// Neighbor-joining reduction of a labelled distance matrix.
    Cluster {
        /// Matrix file: a header of labels, then one labelled row per entry.
        #[clap(value_parser = value_parser!(PathBuf))]
        matrix: PathBuf,
    },
}

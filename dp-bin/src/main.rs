mod cli;

use clap::Parser;
use cli::{Cli, Command};
use dp_cluster::{closest_pair, format_table, DistanceMatrix};
use dp_types::{seq_to_string, Alignment, Sequence};
use dpalign::{global_align_with_stats, local_align, ScoringScheme};
use log::info;
use std::{fmt::Display, path::Path, time::Instant};

fn main() {
    env_logger::init();
    let args = Cli::parse();
    let scheme = ScoringScheme::dna();

    match args.command {
        Command::Global { a, b } => {
            let a = read_sequence(&a);
            let b = read_sequence(&b);
            info!("global alignment of {} x {} symbols", a.len(), b.len());
            let start = Instant::now();
            let (score, alignment, stats) =
                or_exit(global_align_with_stats(&a, &b, &scheme));

            println!("Base cases resolved: {}", stats.base_cases);
            println!("Time taken: {:?}", start.elapsed());
            println!("Best (score {score}):");
            print_alignment(&alignment);
        }
        Command::Local { a, b } => {
            let a = read_sequence(&a);
            let b = read_sequence(&b);
            info!("local alignment of {} x {} symbols", a.len(), b.len());
            let start = Instant::now();
            let (score, alignment) = or_exit(local_align(&a, &b, &scheme));

            println!("Time taken: {:?}", start.elapsed());
            println!("Best (score {score}):");
            print_alignment(&alignment);
        }
        Command::Cluster { matrix } => {
            let mut matrix = or_exit(DistanceMatrix::from_path(&matrix));
            while matrix.len() >= 2 {
                let row_sums = matrix.row_sums();
                println!("\nDISTANCE + (row sums):");
                println!(
                    "{}",
                    format_table(matrix.labels(), matrix.distances(), Some(&row_sums))
                );

                let q = matrix.q_matrix(&row_sums);
                println!("\nQ SCORES:");
                println!("{}", format_table(matrix.labels(), &q, None));

                let (i, j) = closest_pair(&q);
                let merge = matrix.merge(i, j);
                println!("\nMerged {} and {} into {}", merge.left, merge.right, merge.merged);
            }
        }
    }
}

/// Loads a raw sequence file, trimming surrounding whitespace.
fn read_sequence(path: &Path) -> Sequence {
    let text = std::fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("failed to read {}: {err}", path.display());
        std::process::exit(1)
    });
    text.trim().bytes().collect()
}

/// Two rows plus a marker line flagging identical columns.
fn print_alignment(alignment: &Alignment) {
    println!("Alignment");
    println!("String1: {}", seq_to_string(&alignment.a));
    println!("         {}", alignment.markers());
    println!("String2: {}", seq_to_string(&alignment.b));
}

fn or_exit<T, E: Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(1)
    })
}

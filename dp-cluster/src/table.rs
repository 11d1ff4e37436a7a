//! Aligned text rendering of a labelled square matrix.

use itertools::Itertools;

/// Renders `values` with `labels` along both axes, one text row per entry.
///
/// `annotations`, when given, appends `(value)` to each row; the caller uses
/// this to decorate the distance matrix with its row sums.
pub fn format_table(labels: &[String], values: &[Vec<f64>], annotations: Option<&[f64]>) -> String {
    let cells: Vec<Vec<String>> = values
        .iter()
        .map(|row| row.iter().map(|value| value.to_string()).collect())
        .collect();

    let label_width = labels.iter().map(String::len).max().unwrap_or(0);
    let column_widths: Vec<usize> = (0..labels.len())
        .map(|j| {
            cells
                .iter()
                .map(|row| row[j].len())
                .chain([labels[j].len()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header = format!(
        "{:label_width$} | {}",
        "",
        labels
            .iter()
            .enumerate()
            .map(|(j, label)| format!("{label:>width$}", width = column_widths[j]))
            .join("  ")
    );

    let rows = cells.iter().enumerate().map(|(i, row)| {
        let body = row
            .iter()
            .enumerate()
            .map(|(j, cell)| format!("{cell:>width$}", width = column_widths[j]))
            .join("  ");
        match annotations {
            Some(annotations) => {
                format!("{:label_width$} | {body}  ({})", labels[i], annotations[i])
            }
            None => format!("{:label_width$} | {body}", labels[i]),
        }
    });

    [header].into_iter().chain(rows).join("\n")
}

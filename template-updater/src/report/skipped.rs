//! Skipped projects table.

use crate::model::SkippedProject;
use console::{measure_text_width, pad_str, Alignment};
use std::fmt::Write;

const HEADERS: [&str; 3] = ["Project", "URL", "Skip reason"];

pub(super) fn render(skipped: &[SkippedProject]) -> String {
    let mut sorted: Vec<&SkippedProject> = skipped.iter().collect();
    sorted.sort_by_key(|project| project.reason.to_string());

    let rows: Vec<[String; 3]> = sorted
        .iter()
        .map(|project| {
            [
                project.name.clone(),
                project.url.clone(),
                project.reason.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(measure_text_width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let mut out = format!("Skipped projects: {}\n\n", skipped.len());
    write_row(&mut out, &HEADERS, &widths);
    write_row(&mut out, &widths.map(|width| "-".repeat(width)), &widths);
    for row in &rows {
        write_row(&mut out, row, &widths);
    }
    out
}

fn write_row<S: AsRef<str>>(out: &mut String, cells: &[S; 3], widths: &[usize; 3]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_str(cell.as_ref(), *width, Alignment::Left, None).into_owned())
        .collect();
    let _ = writeln!(out, "{}", padded.join("  ").trim_end());
}

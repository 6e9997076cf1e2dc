use std::io::{self, Write};
use std::time::{Duration, Instant};

use log::{info, warn};
use mergeinsert::{Sequence, is_sorted, sort, theoretical_minimum};

/// Outcome of sorting the input with one backing container.
#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) container: &'static str,
    pub(crate) sorted: Vec<u32>,
    pub(crate) comparisons: usize,
    pub(crate) elapsed: Duration,
}

impl Run {
    pub(crate) fn is_sorted(&self) -> bool {
        is_sorted(&self.sorted)
    }
}

/// Sorts `input` and times only the sort itself.
pub(crate) fn timed_sort<S>(container: &'static str, input: S) -> Run
where
    S: Sequence<Item = u32> + IntoIterator<Item = u32>,
{
    let start = Instant::now();
    let result = sort(input);
    let elapsed = start.elapsed();
    info!(
        "{container}: {} elements in {elapsed:?}, {} comparisons",
        result.sequence.len(),
        result.comparisons
    );

    Run {
        container,
        sorted: result.sequence.into_iter().collect(),
        comparisons: result.comparisons,
        elapsed,
    }
}

pub(crate) fn format_sequence(values: &[u32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes the before/after lines, timings and comparison counts.
///
/// Returns `false` if any run produced an unsorted sequence.
pub(crate) fn write_report<W: Write>(
    out: &mut W,
    before: &[u32],
    runs: &[Run],
    quiet: bool,
) -> io::Result<bool> {
    let limit = theoretical_minimum(before.len());
    let width = runs.iter().map(|run| run.container.len()).max().unwrap_or(0);

    if !quiet {
        writeln!(out, "Before: {}", format_sequence(before))?;
        if let Some(first) = runs.first() {
            writeln!(out, "After:  {}", format_sequence(&first.sorted))?;
        }
    }

    for run in runs {
        writeln!(
            out,
            "Time to process a range of {} elements with {:<width$} : {:.3} us",
            run.sorted.len(),
            run.container,
            run.elapsed.as_secs_f64() * 1e6,
        )?;
    }

    let mut all_sorted = true;
    for run in runs {
        writeln!(
            out,
            "Comparisons with {} vs. theoretical limit{:pad$} : {} / {limit}",
            run.container,
            "",
            run.comparisons,
            pad = width - run.container.len(),
        )?;
        if run.comparisons > limit {
            warn!(
                "{}: {} comparisons exceed the limit of {limit}",
                run.container, run.comparisons
            );
        }
        if !run.is_sorted() {
            warn!("{}: result is not sorted", run.container);
            all_sorted = false;
        }
    }

    if let [first, rest @ ..] = runs {
        for run in rest.iter().filter(|run| run.sorted != first.sorted) {
            warn!("{} and {} disagree on the result", first.container, run.container);
        }
    }

    Ok(all_sorted)
}

use std::fmt::{Display, Write};

use super::types::Comparison;
use perf_bench::Verdict;

/// Renders one comparison as the plain-text report printed to stdout.
pub fn render<T: Display + PartialEq>(title: &str, comparison: &Comparison<T>) -> String {
    let mut out = String::new();
    let first = &comparison.first;
    let second = &comparison.second;

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "Dataset size: {} elements", comparison.size);
    let _ = writeln!(out, "Iterations: {}", comparison.iterations);

    for run in [first, second] {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} results:", run.name);
        let _ = writeln!(out, "  Result: {}", run.result);
        let _ = writeln!(out, "  Total time: {:?}", run.measurement.total);
        let _ = writeln!(
            out,
            "  Average per operation: {:?}",
            run.measurement.average()
        );
    }

    let _ = writeln!(out);
    match comparison.verdict {
        Verdict::FirstFaster(ratio) => {
            let _ = writeln!(out, "{} is {:.2}x faster than {}", first.name, ratio, second.name);
        }
        Verdict::SecondFaster(ratio) => {
            let _ = writeln!(out, "{} is {:.2}x faster than {}", second.name, ratio, first.name);
        }
        Verdict::Tie => {
            let _ = writeln!(out, "Both variants have similar performance");
        }
    }

    if comparison.results_match() {
        let _ = writeln!(out, "Both variants produce the same result: {}", first.result);
    } else {
        let _ = writeln!(
            out,
            "Results differ: {}=({}) vs {}=({})",
            first.name, first.result, second.name, second.result
        );
    }

    out
}

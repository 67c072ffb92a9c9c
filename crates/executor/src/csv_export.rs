use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use super::error::Error;
use super::types::Comparison;

/// One CSV line per comparison.
#[derive(Debug, Serialize)]
pub struct CsvRow<'a> {
    pub scenario: &'a str,
    pub size: usize,
    pub iterations: u32,
    pub first_variant: &'a str,
    pub first_total_ns: u64,
    pub first_avg_ns: u64,
    pub second_variant: &'a str,
    pub second_total_ns: u64,
    pub second_avg_ns: u64,
    pub verdict: &'a str,
    pub ratio: f64,
    pub results_match: bool,
}

impl<'a, T: PartialEq> From<&'a Comparison<T>> for CsvRow<'a> {
    fn from(c: &'a Comparison<T>) -> Self {
        CsvRow {
            scenario: c.scenario,
            size: c.size,
            iterations: c.iterations,
            first_variant: c.first.name,
            first_total_ns: c.first.measurement.total.as_nanos() as u64,
            first_avg_ns: c.first.measurement.average().as_nanos() as u64,
            second_variant: c.second.name,
            second_total_ns: c.second.measurement.total.as_nanos() as u64,
            second_avg_ns: c.second.measurement.average().as_nanos() as u64,
            verdict: c.verdict.label(),
            ratio: c.verdict.ratio(),
            results_match: c.results_match(),
        }
    }
}

/// Writes comparisons to a CSV file with a header row.
pub struct CsvExporter {
    writer: Writer<File>,
}

impl CsvExporter {
    pub fn create(path: &Path) -> Result<Self, Error> {
        let file = File::create(path)?;
        Ok(CsvExporter {
            writer: Writer::from_writer(file),
        })
    }

    pub fn write_comparison<T: PartialEq>(&mut self, comparison: &Comparison<T>) -> Result<(), Error> {
        self.writer.serialize(CsvRow::from(comparison))?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Error> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VariantRun;
    use perf_bench::{Measurement, Verdict};
    use std::fs;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn sample() -> Comparison<i64> {
        Comparison {
            scenario: "layout",
            size: 100,
            iterations: 2,
            first: VariantRun {
                name: "row-oriented",
                result: 4950,
                measurement: Measurement {
                    total: Duration::from_nanos(3_000),
                    iterations: 2,
                },
            },
            second: VariantRun {
                name: "column-oriented",
                result: 4950,
                measurement: Measurement {
                    total: Duration::from_nanos(1_000),
                    iterations: 2,
                },
            },
            verdict: Verdict::SecondFaster(3.0),
        }
    }

    #[test]
    fn test_export_writes_header_and_row() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");

        let mut exporter = CsvExporter::create(temp_file.path()).expect("Failed to create exporter");
        exporter.write_comparison(&sample()).expect("Failed to write row");
        exporter.finish().expect("Failed to flush");

        let content = fs::read_to_string(temp_file.path()).expect("Failed to read export");
        let mut lines = content.lines();

        assert_eq!(
            lines.next(),
            Some("scenario,size,iterations,first_variant,first_total_ns,first_avg_ns,second_variant,second_total_ns,second_avg_ns,verdict,ratio,results_match")
        );
        assert_eq!(
            lines.next(),
            Some("layout,100,2,row-oriented,3000,1500,column-oriented,1000,500,second_faster,3.0,true")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let result = CsvExporter::create(Path::new("no_such_dir/report.csv"));

        if let Err(Error::IoError(e)) = result {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
        } else {
            panic!("Expected IoError");
        }
    }
}

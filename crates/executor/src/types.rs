use std::str::FromStr;

use super::error::Error;
use perf_bench::{Measurement, Verdict};

/// Which comparisons a run executes, chosen by the first CLI argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Layout,
    FalseSharing,
    All,
}

impl Scenario {
    pub fn includes_layout(self) -> bool {
        matches!(self, Scenario::Layout | Scenario::All)
    }

    pub fn includes_false_sharing(self) -> bool {
        matches!(self, Scenario::FalseSharing | Scenario::All)
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "layout" => Ok(Scenario::Layout),
            "false-sharing" | "false_sharing" => Ok(Scenario::FalseSharing),
            "all" => Ok(Scenario::All),
            _ => Err(Error::UnknownScenario(s.to_string())),
        }
    }
}

/// One timed variant and the result of its last call.
#[derive(Debug, Clone)]
pub struct VariantRun<T> {
    pub name: &'static str,
    pub result: T,
    pub measurement: Measurement,
}

/// Two variants timed over the same dataset.
#[derive(Debug, Clone)]
pub struct Comparison<T> {
    pub scenario: &'static str,
    pub size: usize,
    pub iterations: u32,
    pub first: VariantRun<T>,
    pub second: VariantRun<T>,
    pub verdict: Verdict,
}

impl<T: PartialEq> Comparison<T> {
    pub fn results_match(&self) -> bool {
        self.first.result == self.second.result
    }
}

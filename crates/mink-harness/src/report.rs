//! Suite result reporting

use serde::{Deserialize, Serialize};

use crate::checker::Checker;
use crate::sink::Sink;

/// Summary of one suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Total number of checks
    pub total: usize,
    /// Number of passed checks
    pub passed: usize,
    /// Number of failed checks
    pub failed: usize,
    /// Pass rate as percentage
    pub pass_rate: f64,
}

impl SuiteReport {
    /// Snapshot a checker's counters.
    pub fn from_checker<S: Sink>(checker: &Checker<S>) -> Self {
        let passed = checker.passed();
        let failed = checker.failed();
        let total = passed + failed;
        let pass_rate = if total > 0 {
            (passed as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        Self {
            total,
            passed,
            failed,
            pass_rate,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Print a summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Suite Results ===");
        println!("Total:  {}", self.total);
        println!("Passed: {} ({:.1}%)", self.passed, self.pass_rate);
        println!("Failed: {}", self.failed);
    }
}

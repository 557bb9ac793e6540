//! Pass/fail checker
//!
//! One line per verdict, byte-for-byte fixed, plus running counters so a
//! hosting harness can map a whole run to an exit status afterwards.

use crate::sink::Sink;

/// Emitted for a passing check, exactly these 3 bytes.
pub const PASS_LINE: &str = "OK\n";

/// Emitted for a failing check, exactly these 14 bytes.
pub const FAIL_LINE: &str = "*** ERROR ***\n";

/// Assertion reporter writing fixed verdict lines to an injected sink.
///
/// `check` cannot fail: a sink write problem is the sink's concern, never a
/// verdict. The boolean passes through unchanged so call sites can chain it.
#[derive(Debug)]
pub struct Checker<S: Sink> {
    sink: S,
    passed: usize,
    failed: usize,
}

impl<S: Sink> Checker<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            passed: 0,
            failed: 0,
        }
    }

    /// Report one verdict: `OK` for true, `*** ERROR ***` for false.
    /// Returns `result` unchanged.
    pub fn check(&mut self, result: bool) -> bool {
        if result {
            self.passed += 1;
            self.sink.emit(PASS_LINE);
        } else {
            self.failed += 1;
            self.sink.emit(FAIL_LINE);
        }
        result
    }

    /// Informational line, no verdict and no counting.
    pub fn note(&mut self, text: &str) {
        self.sink.emit(text);
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

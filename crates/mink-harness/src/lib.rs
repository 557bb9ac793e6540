//! # Mink harness
//!
//! The conformance side of mink: an output sink abstraction, the checker that
//! turns booleans into `OK` / `*** ERROR ***` lines, the scripted
//! date-mutation suite those lines report on, and a summary report type.
//!
//! The sink is an injected dependency rather than a process-global binding,
//! so the exact bytes a run emits can be captured and asserted on.

#![warn(clippy::all)]

pub mod checker;
pub mod report;
pub mod sink;
pub mod suite;

pub use checker::{Checker, FAIL_LINE, PASS_LINE};
pub use report::SuiteReport;
pub use sink::{Sink, StdoutSink};
pub use suite::run_full_year_suite;

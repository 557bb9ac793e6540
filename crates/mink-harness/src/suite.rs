//! Scripted date-mutation conformance suite
//!
//! One mutable [`DateValue`] driven through a fixed sequence of full-year
//! mutations, each rendering compared against a known-good string. The
//! printed verdict lines are the suite's only pass/fail signal; the first
//! rendering is informational output with no check attached.

use chrono::FixedOffset;
use mink_datetime::DateValue;
use tracing::debug;

use crate::checker::Checker;
use crate::sink::Sink;

/// Run the full-year mutation sequence against one date value built in
/// `offset`. Returns whether every check passed.
///
/// The expected strings hold for any fixed offset because the value is
/// constructed from local fields and every expectation is a local rendering.
pub fn run_full_year_suite<S: Sink>(checker: &mut Checker<S>, offset: FixedOffset) -> bool {
    // July 18 2007, 00:40:59 local time.
    let mut d = DateValue::new_in(offset, 2007, 6, 18, 0, 40, 59);

    let s = d.to_locale_string();
    debug!(rendered = %s, "initial value");
    checker.note(&s);
    checker.note("\n");

    d.set_utc_full_year(2005, None, None);
    let s = d.to_locale_string();
    debug!(rendered = %s, "after setUTCFullYear(2005)");
    checker.check(s == "Mon Jul 18 00:40:59 2005");

    d.set_full_year(2007, Some(5), None);
    let s = d.to_locale_string();
    debug!(rendered = %s, "after setFullYear(2007, 5)");
    checker.check(s == "Mon Jun 18 00:40:59 2007");

    d.set_full_year(1999, Some(6), Some(30));
    let s = d.to_locale_string();
    debug!(rendered = %s, "after setFullYear(1999, 6, 30)");
    checker.check(s == "Fri Jul 30 00:40:59 1999");

    checker.all_passed()
}

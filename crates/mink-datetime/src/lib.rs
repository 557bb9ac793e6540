//! # Mink datetime
//!
//! ECMAScript-`Date`-style calendar values on top of chrono:
//! - 0-based months on every API boundary
//! - paired local/UTC field getters and setters
//! - `Date.UTC`-style timestamp construction and `Date.parse`-style parsing
//! - fixed-format renderers (`toString`, `toISOString`, `toUTCString`,
//!   `toLocaleString` shapes), with `"Invalid Date"` for the invalid state
//!
//! Calendar arithmetic, leap years, and offset conversion are chrono's job;
//! this crate only maps the ECMAScript field semantics onto it.

#![warn(clippy::all)]

pub mod date;

pub use date::{DateValue, ParseDateError};

//! ECMAScript-style date value
//!
//! Field semantics follow `Date`:
//! - months are 0-based (0 = January) everywhere in this API
//! - weekday numbering is 0 = Sunday .. 6 = Saturday
//! - setters write fields in place and return the new timestamp
//! - an unrepresentable date leaves the value in the Invalid Date state,
//!   which every renderer reports as the literal `"Invalid Date"`

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Timelike, Utc,
};
use thiserror::Error;

/// Error returned when a date string matches none of the accepted formats.
#[derive(Debug, Clone, Error)]
#[error("unrecognized date string: {0:?}")]
pub struct ParseDateError(String);

/// A mutable calendar instant with ECMAScript `Date` field semantics.
///
/// Internally a millisecond timestamp since the Unix epoch plus the fixed
/// offset used for "local" operations. The offset is captured at construction
/// (the process-local offset by default, or any offset via [`DateValue::new_in`]),
/// so every operation on the value is deterministic afterwards.
///
/// `millis` of `None` is the Invalid Date state (the NaN time value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateValue {
    millis: Option<i64>,
    offset: FixedOffset,
}

/// Strptime fallbacks tried by [`DateValue::from_str`] after RFC 3339 and
/// RFC 2822, all interpreted as UTC.
const PARSE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
];

impl DateValue {
    /// Current instant in the process-local offset.
    pub fn now() -> Self {
        Self::at_offset(Utc::now().timestamp_millis(), local_offset())
    }

    /// Build from local calendar fields in the process-local offset.
    /// `month0` is 0-based.
    pub fn new(year: i32, month0: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        Self::new_in(local_offset(), year, month0, day, hour, min, sec)
    }

    /// Build from calendar fields interpreted in an explicit offset.
    pub fn new_in(
        offset: FixedOffset,
        year: i32,
        month0: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
    ) -> Self {
        let millis = NaiveDate::from_ymd_opt(year, month0 + 1, day)
            .zip(NaiveTime::from_hms_opt(hour, min, sec))
            .and_then(|(date, time)| {
                offset
                    .from_local_datetime(&NaiveDateTime::new(date, time))
                    .single()
            })
            .map(|dt| dt.timestamp_millis());
        Self { millis, offset }
    }

    /// Wrap a millisecond timestamp, rendering in the process-local offset.
    pub fn from_timestamp_millis(millis: i64) -> Self {
        Self::at_offset(millis, local_offset())
    }

    /// Wrap a millisecond timestamp with an explicit rendering offset.
    pub fn at_offset(millis: i64, offset: FixedOffset) -> Self {
        Self {
            millis: Some(millis),
            offset,
        }
    }

    /// The Invalid Date value.
    pub fn invalid() -> Self {
        Self {
            millis: None,
            offset: local_offset(),
        }
    }

    /// `Date.UTC`: timestamp for calendar fields interpreted in UTC.
    /// Years 0..=99 map to 1900..=1999. `month0` is 0-based.
    pub fn utc(
        year: i32,
        month0: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
        millis: u32,
    ) -> Option<i64> {
        let year = if (0..100).contains(&year) {
            1900 + year
        } else {
            year
        };
        let date = NaiveDate::from_ymd_opt(year, month0 + 1, day)?;
        let time = NaiveTime::from_hms_milli_opt(hour, min, sec, millis)?;
        let dt = Utc.from_utc_datetime(&NaiveDateTime::new(date, time));
        Some(dt.timestamp_millis())
    }

    /// Milliseconds since the Unix epoch, `None` for Invalid Date.
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.millis
    }

    /// `getTimezoneOffset`: minutes behind UTC (negative east of it).
    pub fn timezone_offset_minutes(&self) -> i32 {
        -(self.offset.local_minus_utc() / 60)
    }

    // ---- local getters ----

    pub fn full_year(&self) -> Option<i32> {
        self.local_dt().map(|dt| dt.year())
    }

    /// 0-based month.
    pub fn month(&self) -> Option<u32> {
        self.local_dt().map(|dt| dt.month0())
    }

    /// Day of the month, 1-based.
    pub fn date(&self) -> Option<u32> {
        self.local_dt().map(|dt| dt.day())
    }

    /// Day of the week, 0 = Sunday.
    pub fn day(&self) -> Option<u32> {
        self.local_dt().map(|dt| dt.weekday().num_days_from_sunday())
    }

    pub fn hours(&self) -> Option<u32> {
        self.local_dt().map(|dt| dt.hour())
    }

    pub fn minutes(&self) -> Option<u32> {
        self.local_dt().map(|dt| dt.minute())
    }

    pub fn seconds(&self) -> Option<u32> {
        self.local_dt().map(|dt| dt.second())
    }

    pub fn milliseconds(&self) -> Option<u32> {
        self.local_dt().map(|dt| dt.nanosecond() / 1_000_000)
    }

    // ---- UTC getters ----

    pub fn utc_full_year(&self) -> Option<i32> {
        self.utc_dt().map(|dt| dt.year())
    }

    /// 0-based month in UTC.
    pub fn utc_month(&self) -> Option<u32> {
        self.utc_dt().map(|dt| dt.month0())
    }

    pub fn utc_date(&self) -> Option<u32> {
        self.utc_dt().map(|dt| dt.day())
    }

    /// Day of the week in UTC, 0 = Sunday.
    pub fn utc_day(&self) -> Option<u32> {
        self.utc_dt().map(|dt| dt.weekday().num_days_from_sunday())
    }

    pub fn utc_hours(&self) -> Option<u32> {
        self.utc_dt().map(|dt| dt.hour())
    }

    pub fn utc_minutes(&self) -> Option<u32> {
        self.utc_dt().map(|dt| dt.minute())
    }

    pub fn utc_seconds(&self) -> Option<u32> {
        self.utc_dt().map(|dt| dt.second())
    }

    pub fn utc_milliseconds(&self) -> Option<u32> {
        self.utc_dt().map(|dt| dt.nanosecond() / 1_000_000)
    }

    // ---- local setters ----

    /// `setFullYear(year[, month0[, day]])`: replaces the local year and,
    /// when given, the month and day, keeping the local time of day.
    pub fn set_full_year(
        &mut self,
        year: i32,
        month0: Option<u32>,
        day: Option<u32>,
    ) -> Option<i64> {
        let dt = self.local_or_now();
        let month = month0.map(|m| m + 1).unwrap_or(dt.month());
        let day = day.unwrap_or(dt.day());
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => self.rebuild_local(date, dt.time()),
            None => self.invalidate(),
        }
    }

    /// `setMonth(month0[, day])`, 0-based month.
    pub fn set_month(&mut self, month0: u32, day: Option<u32>) -> Option<i64> {
        let dt = self.local_or_now();
        let day = day.unwrap_or(dt.day());
        match NaiveDate::from_ymd_opt(dt.year(), month0 + 1, day) {
            Some(date) => self.rebuild_local(date, dt.time()),
            None => self.invalidate(),
        }
    }

    /// `setDate(day)`, 1-based day of month.
    pub fn set_date(&mut self, day: u32) -> Option<i64> {
        let dt = self.local_or_now();
        match NaiveDate::from_ymd_opt(dt.year(), dt.month(), day) {
            Some(date) => self.rebuild_local(date, dt.time()),
            None => self.invalidate(),
        }
    }

    /// `setHours(hours[, minutes[, seconds[, ms]]])`.
    pub fn set_hours(
        &mut self,
        hours: u32,
        minutes: Option<u32>,
        seconds: Option<u32>,
        millis: Option<u32>,
    ) -> Option<i64> {
        let dt = self.local_or_now();
        let min = minutes.unwrap_or(dt.minute());
        let sec = seconds.unwrap_or(dt.second());
        let ms = millis.unwrap_or(dt.nanosecond() / 1_000_000);
        match NaiveTime::from_hms_milli_opt(hours, min, sec, ms) {
            Some(time) => self.rebuild_local(dt.date_naive(), time),
            None => self.invalidate(),
        }
    }

    /// `setMinutes(minutes[, seconds[, ms]])`.
    pub fn set_minutes(
        &mut self,
        minutes: u32,
        seconds: Option<u32>,
        millis: Option<u32>,
    ) -> Option<i64> {
        let dt = self.local_or_now();
        let sec = seconds.unwrap_or(dt.second());
        let ms = millis.unwrap_or(dt.nanosecond() / 1_000_000);
        match NaiveTime::from_hms_milli_opt(dt.hour(), minutes, sec, ms) {
            Some(time) => self.rebuild_local(dt.date_naive(), time),
            None => self.invalidate(),
        }
    }

    /// `setSeconds(seconds[, ms])`.
    pub fn set_seconds(&mut self, seconds: u32, millis: Option<u32>) -> Option<i64> {
        let dt = self.local_or_now();
        let ms = millis.unwrap_or(dt.nanosecond() / 1_000_000);
        match NaiveTime::from_hms_milli_opt(dt.hour(), dt.minute(), seconds, ms) {
            Some(time) => self.rebuild_local(dt.date_naive(), time),
            None => self.invalidate(),
        }
    }

    /// `setMilliseconds(ms)`.
    pub fn set_milliseconds(&mut self, millis: u32) -> Option<i64> {
        let dt = self.local_or_now();
        match NaiveTime::from_hms_milli_opt(dt.hour(), dt.minute(), dt.second(), millis) {
            Some(time) => self.rebuild_local(dt.date_naive(), time),
            None => self.invalidate(),
        }
    }

    /// `setTime(ms)`: replaces the timestamp outright.
    pub fn set_time(&mut self, millis: i64) -> i64 {
        self.millis = Some(millis);
        millis
    }

    // ---- UTC setters ----

    /// `setUTCFullYear(year[, month0[, day]])`: replaces the UTC year and,
    /// when given, the month and day, keeping the UTC time of day. Rendering
    /// stays in the value's own offset.
    pub fn set_utc_full_year(
        &mut self,
        year: i32,
        month0: Option<u32>,
        day: Option<u32>,
    ) -> Option<i64> {
        let dt = self.utc_or_now();
        let month = month0.map(|m| m + 1).unwrap_or(dt.month());
        let day = day.unwrap_or(dt.day());
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => self.rebuild_utc(date, dt.time()),
            None => self.invalidate(),
        }
    }

    /// `setUTCMonth(month0[, day])`.
    pub fn set_utc_month(&mut self, month0: u32, day: Option<u32>) -> Option<i64> {
        let dt = self.utc_or_now();
        let day = day.unwrap_or(dt.day());
        match NaiveDate::from_ymd_opt(dt.year(), month0 + 1, day) {
            Some(date) => self.rebuild_utc(date, dt.time()),
            None => self.invalidate(),
        }
    }

    /// `setUTCDate(day)`.
    pub fn set_utc_date(&mut self, day: u32) -> Option<i64> {
        let dt = self.utc_or_now();
        match NaiveDate::from_ymd_opt(dt.year(), dt.month(), day) {
            Some(date) => self.rebuild_utc(date, dt.time()),
            None => self.invalidate(),
        }
    }

    /// `setUTCHours(hours[, minutes[, seconds[, ms]]])`.
    pub fn set_utc_hours(
        &mut self,
        hours: u32,
        minutes: Option<u32>,
        seconds: Option<u32>,
        millis: Option<u32>,
    ) -> Option<i64> {
        let dt = self.utc_or_now();
        let min = minutes.unwrap_or(dt.minute());
        let sec = seconds.unwrap_or(dt.second());
        let ms = millis.unwrap_or(dt.nanosecond() / 1_000_000);
        match NaiveTime::from_hms_milli_opt(hours, min, sec, ms) {
            Some(time) => self.rebuild_utc(dt.date_naive(), time),
            None => self.invalidate(),
        }
    }

    /// `setUTCMinutes(minutes[, seconds[, ms]])`.
    pub fn set_utc_minutes(
        &mut self,
        minutes: u32,
        seconds: Option<u32>,
        millis: Option<u32>,
    ) -> Option<i64> {
        let dt = self.utc_or_now();
        let sec = seconds.unwrap_or(dt.second());
        let ms = millis.unwrap_or(dt.nanosecond() / 1_000_000);
        match NaiveTime::from_hms_milli_opt(dt.hour(), minutes, sec, ms) {
            Some(time) => self.rebuild_utc(dt.date_naive(), time),
            None => self.invalidate(),
        }
    }

    /// `setUTCSeconds(seconds[, ms])`.
    pub fn set_utc_seconds(&mut self, seconds: u32, millis: Option<u32>) -> Option<i64> {
        let dt = self.utc_or_now();
        let ms = millis.unwrap_or(dt.nanosecond() / 1_000_000);
        match NaiveTime::from_hms_milli_opt(dt.hour(), dt.minute(), seconds, ms) {
            Some(time) => self.rebuild_utc(dt.date_naive(), time),
            None => self.invalidate(),
        }
    }

    /// `setUTCMilliseconds(ms)`.
    pub fn set_utc_milliseconds(&mut self, millis: u32) -> Option<i64> {
        let dt = self.utc_or_now();
        match NaiveTime::from_hms_milli_opt(dt.hour(), dt.minute(), dt.second(), millis) {
            Some(time) => self.rebuild_utc(dt.date_naive(), time),
            None => self.invalidate(),
        }
    }

    // ---- renderers ----

    /// `toLocaleString` shape: `"Mon Jul 18 00:40:59 2005"`. Three-letter
    /// English weekday and month names, zero-padded day and time fields,
    /// recomputed from the timestamp on every call.
    pub fn to_locale_string(&self) -> String {
        match self.local_dt() {
            Some(dt) => dt.format("%a %b %d %H:%M:%S %Y").to_string(),
            None => "Invalid Date".to_string(),
        }
    }

    /// `toDateString` shape: `"Mon Jul 18 2005"`.
    pub fn to_date_string(&self) -> String {
        match self.local_dt() {
            Some(dt) => dt.format("%a %b %d %Y").to_string(),
            None => "Invalid Date".to_string(),
        }
    }

    /// `toTimeString` shape: `"00:40:59 GMT+0000"`.
    pub fn to_time_string(&self) -> String {
        match self.local_dt() {
            Some(dt) => dt.format("%H:%M:%S GMT%z").to_string(),
            None => "Invalid Date".to_string(),
        }
    }

    /// `toISOString` shape: `"2005-07-18T00:40:59.000Z"`. `None` for
    /// Invalid Date, which has no ISO rendering.
    pub fn to_iso_string(&self) -> Option<String> {
        self.utc_dt()
            .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
    }

    /// `toUTCString` shape: `"Mon, 18 Jul 2005 00:40:59 GMT"`.
    pub fn to_utc_string(&self) -> String {
        match self.utc_dt() {
            Some(dt) => dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
            None => "Invalid Date".to_string(),
        }
    }

    // ---- internals ----

    fn local_dt(&self) -> Option<DateTime<FixedOffset>> {
        self.utc_dt().map(|dt| dt.with_timezone(&self.offset))
    }

    fn utc_dt(&self) -> Option<DateTime<Utc>> {
        let ms = self.millis?;
        DateTime::from_timestamp(ms.div_euclid(1000), (ms.rem_euclid(1000) * 1_000_000) as u32)
    }

    /// Setter base for an invalid value: the current instant.
    fn local_or_now(&self) -> DateTime<FixedOffset> {
        self.local_dt()
            .unwrap_or_else(|| Utc::now().with_timezone(&self.offset))
    }

    fn utc_or_now(&self) -> DateTime<Utc> {
        self.utc_dt().unwrap_or_else(Utc::now)
    }

    fn rebuild_local(&mut self, date: NaiveDate, time: NaiveTime) -> Option<i64> {
        self.millis = self
            .offset
            .from_local_datetime(&NaiveDateTime::new(date, time))
            .single()
            .map(|dt| dt.timestamp_millis());
        self.millis
    }

    fn rebuild_utc(&mut self, date: NaiveDate, time: NaiveTime) -> Option<i64> {
        let dt = Utc.from_utc_datetime(&NaiveDateTime::new(date, time));
        self.millis = Some(dt.timestamp_millis());
        self.millis
    }

    fn invalidate(&mut self) -> Option<i64> {
        self.millis = None;
        None
    }
}

/// `toString` shape: `"Mon Jul 18 2005 00:40:59 GMT+0000"`.
impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.local_dt() {
            Some(dt) => write!(f, "{}", dt.format("%a %b %d %Y %H:%M:%S GMT%z")),
            None => f.write_str("Invalid Date"),
        }
    }
}

/// `Date.parse` shape: RFC 3339 first, then RFC 2822, then a short list of
/// common formats interpreted as UTC.
impl FromStr for DateValue {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from_timestamp_millis(dt.timestamp_millis()));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            return Ok(Self::from_timestamp_millis(dt.timestamp_millis()));
        }
        for fmt in PARSE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                let dt = Utc.from_utc_datetime(&naive);
                return Ok(Self::from_timestamp_millis(dt.timestamp_millis()));
            }
            if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
                let naive = NaiveDateTime::new(date, NaiveTime::MIN);
                let dt = Utc.from_utc_datetime(&naive);
                return Ok(Self::from_timestamp_millis(dt.timestamp_millis()));
            }
        }
        Err(ParseDateError(s.to_string()))
    }
}

fn local_offset() -> FixedOffset {
    *Local::now().offset()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc0() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn construct_and_read_fields() {
        let d = DateValue::new_in(utc0(), 2007, 6, 18, 0, 40, 59);
        assert_eq!(d.full_year(), Some(2007));
        assert_eq!(d.month(), Some(6)); // July, 0-based
        assert_eq!(d.date(), Some(18));
        assert_eq!(d.day(), Some(3)); // Wednesday
        assert_eq!(d.hours(), Some(0));
        assert_eq!(d.minutes(), Some(40));
        assert_eq!(d.seconds(), Some(59));
        assert_eq!(d.milliseconds(), Some(0));
    }

    #[test]
    fn set_utc_full_year_keeps_other_fields() {
        let mut d = DateValue::new_in(utc0(), 2007, 6, 18, 0, 40, 59);
        d.set_utc_full_year(2005, None, None);
        assert_eq!(d.to_locale_string(), "Mon Jul 18 00:40:59 2005");
    }

    #[test]
    fn set_full_year_with_month_keeps_day_and_time() {
        let mut d = DateValue::new_in(utc0(), 2007, 6, 18, 0, 40, 59);
        d.set_utc_full_year(2005, None, None);
        d.set_full_year(2007, Some(5), None);
        assert_eq!(d.to_locale_string(), "Mon Jun 18 00:40:59 2007");
    }

    #[test]
    fn set_full_year_with_month_and_day_recomputes_weekday() {
        let mut d = DateValue::new_in(utc0(), 2007, 6, 18, 0, 40, 59);
        d.set_full_year(1999, Some(6), Some(30));
        assert_eq!(d.to_locale_string(), "Fri Jul 30 00:40:59 1999");
    }

    #[test]
    fn utc_setter_renders_in_value_offset() {
        // Constructed at +02:00 the UTC instant is Jul 17 22:40:59, but the
        // year rewrite must still come out as local Jul 18.
        let plus2 = FixedOffset::east_opt(2 * 3600).unwrap();
        let mut d = DateValue::new_in(plus2, 2007, 6, 18, 0, 40, 59);
        assert_eq!(d.utc_date(), Some(17));
        d.set_utc_full_year(2005, None, None);
        assert_eq!(d.to_locale_string(), "Mon Jul 18 00:40:59 2005");
    }

    #[test]
    fn epoch_iso_rendering() {
        let d = DateValue::at_offset(0, utc0());
        assert_eq!(d.to_iso_string().as_deref(), Some("1970-01-01T00:00:00.000Z"));
        assert_eq!(d.to_utc_string(), "Thu, 01 Jan 1970 00:00:00 GMT");
    }

    #[test]
    fn pre_epoch_timestamps_round_trip() {
        let d = DateValue::at_offset(-1, utc0());
        assert_eq!(d.utc_full_year(), Some(1969));
        assert_eq!(d.milliseconds(), Some(999));
    }

    #[test]
    fn invalid_date_renders_as_literal() {
        let d = DateValue::invalid();
        assert_eq!(d.to_locale_string(), "Invalid Date");
        assert_eq!(d.to_string(), "Invalid Date");
        assert_eq!(d.to_iso_string(), None);
        assert_eq!(d.full_year(), None);
    }

    #[test]
    fn unrepresentable_month_invalidates() {
        let mut d = DateValue::new_in(utc0(), 2007, 6, 18, 0, 40, 59);
        assert_eq!(d.set_month(12, None), None);
        assert_eq!(d.timestamp_millis(), None);
        assert_eq!(d.to_locale_string(), "Invalid Date");
    }

    #[test]
    fn date_utc_two_digit_years() {
        // Date.UTC(70, 0, 1) is 1970-01-01.
        assert_eq!(DateValue::utc(70, 0, 1, 0, 0, 0, 0), Some(0));
        assert_eq!(
            DateValue::utc(2026, 0, 23, 12, 30, 45, 500),
            Some(1_769_171_445_500)
        );
    }

    #[test]
    fn set_time_replaces_timestamp() {
        let mut d = DateValue::invalid();
        assert_eq!(d.set_time(1000), 1000);
        assert_eq!(d.timestamp_millis(), Some(1000));
    }

    #[test]
    fn set_hours_cascade_defaults() {
        let mut d = DateValue::new_in(utc0(), 2007, 6, 18, 0, 40, 59);
        d.set_hours(13, None, None, None);
        assert_eq!(d.to_locale_string(), "Wed Jul 18 13:40:59 2007");
        d.set_minutes(5, Some(6), None);
        assert_eq!(d.to_locale_string(), "Wed Jul 18 13:05:06 2007");
    }

    #[test]
    fn utc_setters_modify_utc_fields() {
        let mut d = DateValue::new_in(utc0(), 2007, 6, 18, 0, 40, 59);
        d.set_utc_hours(6, Some(7), Some(8), Some(9));
        assert_eq!(
            d.to_iso_string().as_deref(),
            Some("2007-07-18T06:07:08.009Z")
        );
        d.set_utc_month(0, Some(2));
        assert_eq!(d.utc_month(), Some(0));
        assert_eq!(d.utc_date(), Some(2));
        d.set_utc_date(28);
        d.set_utc_minutes(59, None, None);
        d.set_utc_seconds(1, Some(500));
        d.set_utc_milliseconds(0);
        assert_eq!(
            d.to_iso_string().as_deref(),
            Some("2007-01-28T06:59:01.000Z")
        );
    }

    #[test]
    fn day_and_second_setters() {
        let mut d = DateValue::new_in(utc0(), 2007, 6, 18, 0, 40, 59);
        d.set_date(1);
        d.set_seconds(2, Some(345));
        assert_eq!(
            d.to_iso_string().as_deref(),
            Some("2007-07-01T00:40:02.345Z")
        );
        d.set_milliseconds(0);
        assert_eq!(d.milliseconds(), Some(0));
    }

    #[test]
    fn now_is_recent() {
        let d = DateValue::now();
        assert!(d.timestamp_millis().unwrap() > 1_700_000_000_000); // after 2023
    }

    #[test]
    fn parse_rfc2822() {
        let d: DateValue = "Mon, 18 Jul 2005 00:40:59 +0000".parse().unwrap();
        assert_eq!(d.utc_day(), Some(1));
        assert_eq!(d.utc_full_year(), Some(2005));
    }

    #[test]
    fn parse_rfc3339() {
        let d: DateValue = "2005-07-18T00:40:59Z".parse().unwrap();
        assert_eq!(d.utc_full_year(), Some(2005));
        assert_eq!(d.utc_month(), Some(6));
        assert_eq!(d.utc_date(), Some(18));
    }

    #[test]
    fn parse_date_only() {
        let d: DateValue = "1999/07/30".parse().unwrap();
        assert_eq!(d.utc_day(), Some(5)); // Friday
        assert_eq!(d.utc_hours(), Some(0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("not a date".parse::<DateValue>().is_err());
    }

    #[test]
    fn timezone_offset_sign_convention() {
        let plus2 = FixedOffset::east_opt(2 * 3600).unwrap();
        let d = DateValue::at_offset(0, plus2);
        assert_eq!(d.timezone_offset_minutes(), -120);
    }
}

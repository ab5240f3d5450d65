//! Lexical formatting and parsing rules for the built-in XML Schema kinds.
//!
//! Generated code calls one `format_*` function when writing a scalar and the
//! matching `parse_*` function when reading it back. Each pair round-trips:
//! parsing the formatted text of a value yields the same value.

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use num_traits::Float;
use std::fmt::Display;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S%.f";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Formats a value of the integer family.
#[must_use]
pub fn format_integer<T: Display>(value: &T) -> String {
    value.to_string()
}

/// Parses a value of the integer family. Surrounding whitespace is ignored
/// and a single leading sign is accepted.
///
/// # Errors
/// Returns [`Error::InvalidValue`] if the text is not an integer in range.
pub fn parse_integer<T: FromStr>(text: &str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| Error::invalid_value("integer", text))
}

/// Formats a value of the floating family using the XML Schema spellings
/// for infinities and NaN.
#[must_use]
pub fn format_float<T: Float + Display>(value: &T) -> String {
    let value = *value;
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() { "INF" } else { "-INF" }.to_string()
    } else {
        value.to_string()
    }
}

/// Parses a value of the floating family.
///
/// # Errors
/// Returns [`Error::InvalidValue`] if the text is not a number.
pub fn parse_float<T: Float + FromStr>(text: &str) -> Result<T> {
    match text.trim() {
        "NaN" => Ok(T::nan()),
        "INF" | "+INF" => Ok(T::infinity()),
        "-INF" => Ok(T::neg_infinity()),
        other => other
            .parse()
            .map_err(|_| Error::invalid_value("float", text)),
    }
}

/// Formats a value of the text family (string, anyURI, language).
#[must_use]
pub fn format_text(value: &str) -> String {
    value.to_string()
}

/// Formats a boolean as `true` or `false`.
#[must_use]
pub fn format_boolean(value: &bool) -> String {
    value.to_string()
}

/// Parses a boolean, accepting `true`, `false`, `1` and `0`.
///
/// # Errors
/// Returns [`Error::InvalidValue`] for any other text.
pub fn parse_boolean(text: &str) -> Result<bool> {
    match text.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(Error::invalid_value("boolean", text)),
    }
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(value: &NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

/// Parses a date in `YYYY-MM-DD` form.
///
/// # Errors
/// Returns [`Error::InvalidValue`] if the text is not a valid date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| Error::invalid_value("date", text))
}

/// Formats a time as `hh:mm:ss[.fff]`.
#[must_use]
pub fn format_time(value: &NaiveTime) -> String {
    value.format(TIME_FORMAT).to_string()
}

/// Parses a time in `hh:mm:ss[.fff]` form.
///
/// # Errors
/// Returns [`Error::InvalidValue`] if the text is not a valid time.
pub fn parse_time(text: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(text.trim(), TIME_FORMAT)
        .map_err(|_| Error::invalid_value("time", text))
}

/// Formats a date-time as `YYYY-MM-DDThh:mm:ss[.fff]`.
#[must_use]
pub fn format_date_time(value: &NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

/// Parses a date-time in `YYYY-MM-DDThh:mm:ss[.fff]` form.
///
/// # Errors
/// Returns [`Error::InvalidValue`] if the text is not a valid date-time.
pub fn parse_date_time(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), DATE_TIME_FORMAT)
        .map_err(|_| Error::invalid_value("dateTime", text))
}

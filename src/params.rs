//! Parameter encoding for outgoing requests.
//!
//! The API expects UpperCamelCase parameter names on the wire, while this
//! crate (like the rest of the Rust ecosystem) uses `snake_case` argument
//! names. [`Params`] holds arguments in local naming and [`Params::encode`]
//! produces the wire pairs used for both query strings and form bodies.
//!
//! Name translation additionally supports range filters: a trailing `__gt`
//! or `__lt` on an argument name becomes a literal `>` or `<` suffix on the
//! wire name, so `start_time__gt` encodes as `StartTime>`.
//!
//! The codec is never applied to response payloads.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::Params;
//! use chrono::NaiveDate;
//!
//! let params = Params::new()
//!     .with("status", "completed")
//!     .with("page_size", 50)
//!     .with("start_time__gt", NaiveDate::from_ymd_opt(2010, 4, 1).unwrap());
//!
//! let wire = params.encode();
//! assert!(wire.contains(&("StartTime>".to_string(), "2010-04-01".to_string())));
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

/// A single argument value.
///
/// Values keep their local type until encoding: booleans render as the
/// literal strings `"true"` / `"false"`, dates and datetimes render as an
/// ISO calendar date (date only, no time), integers render in decimal, and
/// strings pass through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A string value, passed through unchanged.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A boolean value.
    Bool(bool),
    /// A calendar date.
    Date(NaiveDate),
    /// A point in time; only its calendar date reaches the wire.
    DateTime(DateTime<Utc>),
}

impl ParamValue {
    fn to_wire(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            Self::Bool(b) => if *b { "true" } else { "false" }.to_string(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::DateTime(dt) => dt.date_naive().format("%Y-%m-%d").to_string(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

/// An ordered map of argument names to values.
///
/// Ordering is deterministic (sorted by argument name), which keeps encoded
/// query strings and form bodies stable across calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Creates an empty argument map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an argument, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds an argument in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Whether the map holds no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of arguments held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Encodes all arguments into wire (name, value) pairs.
    #[must_use]
    pub fn encode(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(name, value)| (wire_name(name), value.to_wire()))
            .collect()
    }
}

/// Translates a local argument name into its wire form.
///
/// The comparison-operator suffix is rewritten first, so the trailing `>` or
/// `<` survives camel-casing: `start_time__gt` → `start_time>` →
/// `StartTime>`.
fn wire_name(name: &str) -> String {
    let name = name.replace("__gt", ">").replace("__lt", "<");
    camel_case(&name)
}

/// `underscore_separated` → `UpperCamelCase`. Also used to derive URL path
/// segments from resource-type names.
pub(crate) fn camel_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_cases_underscore_names() {
        assert_eq!(wire_name("from"), "From");
        assert_eq!(wire_name("phone_number"), "PhoneNumber");
        assert_eq!(wire_name("sms_url"), "SmsUrl");
    }

    #[test]
    fn no_underscore_survives_encoding() {
        for name in ["a_b_c_d", "start_time__gt", "already", "trailing_"] {
            assert!(!wire_name(name).contains('_'), "underscore left in {name}");
        }
    }

    #[test]
    fn comparison_suffixes_become_operators() {
        assert_eq!(wire_name("start_time__gt"), "StartTime>");
        assert_eq!(wire_name("end_time__lt"), "EndTime<");
    }

    #[test]
    fn booleans_render_as_lowercase_words() {
        let wire = Params::new().with("is_active", true).encode();
        assert_eq!(wire, vec![("IsActive".to_string(), "true".to_string())]);

        let wire = Params::new().with("muted", false).encode();
        assert_eq!(wire, vec![("Muted".to_string(), "false".to_string())]);
    }

    #[test]
    fn dates_render_as_iso_calendar_dates() {
        let date = NaiveDate::from_ymd_opt(2010, 4, 1).unwrap();
        let wire = Params::new().with("created", date).encode();
        assert_eq!(wire, vec![("Created".to_string(), "2010-04-01".to_string())]);
    }

    #[test]
    fn datetimes_lose_their_time_component() {
        let moment = DateTime::parse_from_rfc3339("2010-04-01T13:45:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let wire = Params::new().with("start_time__gt", moment).encode();
        assert_eq!(
            wire,
            vec![("StartTime>".to_string(), "2010-04-01".to_string())]
        );
    }

    #[test]
    fn integers_render_in_decimal() {
        let wire = Params::new().with("page_size", 50).encode();
        assert_eq!(wire, vec![("PageSize".to_string(), "50".to_string())]);
    }

    #[test]
    fn strings_pass_through_unchanged() {
        let wire = Params::new().with("to", "+15105551234").encode();
        assert_eq!(wire, vec![("To".to_string(), "+15105551234".to_string())]);
    }

    #[test]
    fn encoding_is_deterministically_ordered() {
        let params = Params::new()
            .with("to", "+1555")
            .with("from", "+1444")
            .with("body", "hi");
        let names: Vec<String> = params.encode().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Body", "From", "To"]);
    }
}

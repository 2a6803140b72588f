use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Calendar date, the only time type. Classes and bookings have day resolution.
pub type Day = NaiveDate;

/// A scheduled class occupying the inclusive date range `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    #[serde(rename = "class_name")]
    pub name: String,
    #[serde(rename = "start_date")]
    pub start: Day,
    #[serde(rename = "end_date")]
    pub end: Day,
    pub capacity: u32,
}

impl Class {
    pub fn new(name: impl Into<String>, start: Day, end: Day, capacity: u32) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            capacity,
        }
    }
}

/// A booking for a single day. Admissible only inside some class's range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub name: String,
    pub date: Day,
}

impl Booking {
    pub fn new(name: impl Into<String>, date: Day) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }
}

// ── Forms (decoded, not yet validated) ───────────────────────────

/// Caller-supplied class shape. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassForm {
    #[serde(deserialize_with = "null_as_default")]
    pub class_name: String,
    #[serde(deserialize_with = "wire_date::deserialize")]
    pub start_date: Option<Day>,
    #[serde(deserialize_with = "wire_date::deserialize")]
    pub end_date: Option<Day>,
    #[serde(deserialize_with = "null_as_default")]
    pub capacity: i32,
}

/// Caller-supplied booking shape. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookingForm {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "wire_date::deserialize")]
    pub date: Option<Day>,
}

/// The zero day, 0001-01-01. A form date equal to it counts as missing.
pub fn zero_day() -> Day {
    NaiveDate::MIN.with_year(1).unwrap_or(NaiveDate::MIN)
}

pub fn is_zero_day(day: Day) -> bool {
    day == zero_day()
}

/// Explicit `null` leaves the field at its empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Dates arrive either as `YYYY-MM-DD` or as a full RFC 3339 timestamp.
/// A timestamp keeps the calendar date of its own offset.
pub mod wire_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer};

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(day);
        }
        DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.date_naive())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) => parse(&s).map(Some).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid date: {s:?}"))
            }),
        }
    }
}

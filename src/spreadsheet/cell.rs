use crate::spreadsheet::reference::index_to_reference;
use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use iso8601_duration::Duration as IsoDuration;
use std::fmt::Display;

const MICROS_PER_DAY: i64 = 86_400_000_000;

/// Kind of value a cell holds, as far as the workbook reader tells us.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) enum CellType {
    #[default]
    Empty,
    /// Boolean values (true/false)
    Boolean,
    /// Numbers without a fractional part
    Integer,
    /// Any other number
    Float,
    /// Date without time of day
    Date,
    /// Time of day or a duration shorter than one day
    Time,
    /// Date with a time of day
    DateTime,
    /// Strings and durations that do not fit in a day
    Text,
    /// Error values such as `#DIV/0!`
    Error,
}

/// A single cell with its position in the sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// Row index (0-based)
    pub(crate) row: usize,
    /// Column index (0-based)
    pub(crate) col: usize,
    pub(crate) value: Data,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize, value: Data) -> Self {
        Self { row, col, value }
    }

    /// Returns the Excel-style cell reference (e.g., "A1", "B2").
    pub fn reference(&self) -> String {
        index_to_reference(self.row, self.col)
    }

    pub fn is_empty(&self) -> bool {
        match &self.value {
            Data::Empty => true,
            Data::String(value) => value.is_empty(),
            _ => false,
        }
    }

    pub(crate) fn kind(&self) -> CellType {
        match &self.value {
            Data::Empty => CellType::Empty,
            Data::String(value) if value.is_empty() => CellType::Empty,
            Data::String(_) => CellType::Text,
            Data::Bool(_) => CellType::Boolean,
            Data::Int(_) => CellType::Integer,
            Data::Float(value) if is_integral(*value) => CellType::Integer,
            Data::Float(_) => CellType::Float,
            Data::DateTime(value) if value.is_duration() => {
                if value.as_f64() >= 0.0 && value.as_f64() < 1.0 {
                    CellType::Time
                } else {
                    CellType::Text
                }
            }
            Data::DateTime(value) => {
                let serial = value.as_f64();
                if value.as_datetime().is_none() {
                    CellType::Text
                } else if serial < 1.0 {
                    CellType::Time
                } else if serial.fract() == 0.0 {
                    CellType::Date
                } else {
                    CellType::DateTime
                }
            }
            Data::DateTimeIso(value) => {
                if parse_iso_datetime(value).is_some() {
                    CellType::DateTime
                } else if parse_iso_date(value).is_some() {
                    CellType::Date
                } else if parse_iso_time(value).is_some() {
                    CellType::Time
                } else {
                    CellType::Text
                }
            }
            Data::DurationIso(value) => match iso_duration_micros(value) {
                Some(micros) if (0..MICROS_PER_DAY).contains(&micros) => CellType::Time,
                _ => CellType::Text,
            },
            Data::Error(_) => CellType::Error,
        }
    }

    pub(crate) fn to_boolean(&self) -> Result<bool, String> {
        match &self.value {
            Data::Bool(value) => Ok(*value),
            _ => Err(format!("cast '{}' to boolean failed", self)),
        }
    }

    pub(crate) fn to_bigint(&self) -> Result<i64, String> {
        match &self.value {
            Data::Int(value) => Ok(*value),
            Data::Float(value) if is_integral(*value) => Ok(*value as i64),
            _ => Err(format!("cast '{}' to bigint failed", self)),
        }
    }

    pub(crate) fn to_double(&self) -> Result<f64, String> {
        match &self.value {
            Data::Int(value) => Ok(*value as f64),
            Data::Float(value) => Ok(*value),
            _ => Err(format!("cast '{}' to double failed", self)),
        }
    }

    /// Days since 1970-01-01.
    pub(crate) fn to_date(&self) -> Result<i32, String> {
        let date = match &self.value {
            Data::DateTime(value) => value.as_datetime().map(|datetime| datetime.date()),
            Data::DateTimeIso(value) => parse_iso_datetime(value)
                .map(|datetime| datetime.date())
                .or_else(|| parse_iso_date(value)),
            _ => None,
        };
        date.map(|date| (date - unix_epoch()).num_days() as i32)
            .ok_or_else(|| format!("cast '{}' to date failed", self))
    }

    /// Microseconds since midnight.
    pub(crate) fn to_time(&self) -> Result<i64, String> {
        let micros = match &self.value {
            Data::DateTime(value) if value.is_duration() => {
                Some((value.as_f64() * MICROS_PER_DAY as f64).round() as i64)
            }
            Data::DateTime(value) => value.as_datetime().map(|datetime| time_micros(&datetime.time())),
            Data::DateTimeIso(value) => parse_iso_time(value)
                .or_else(|| parse_iso_datetime(value).map(|datetime| datetime.time()))
                .map(|time| time_micros(&time)),
            Data::DurationIso(value) => iso_duration_micros(value),
            _ => None,
        };
        micros.ok_or_else(|| format!("cast '{}' to time failed", self))
    }

    /// Microseconds since 1970-01-01 00:00:00. Time-only values are placed on 1970-01-01.
    pub(crate) fn to_datetime(&self) -> Result<i64, String> {
        if self.kind() == CellType::Time {
            return self
                .to_time()
                .map_err(|_| format!("cast '{}' to timestamp failed", self));
        }
        let datetime = match &self.value {
            Data::DateTime(value) => value.as_datetime(),
            Data::DateTimeIso(value) => parse_iso_datetime(value).or_else(|| {
                parse_iso_date(value).and_then(|date| date.and_hms_opt(0, 0, 0))
            }),
            _ => None,
        };
        datetime
            .map(|datetime| datetime.and_utc().timestamp_micros())
            .ok_or_else(|| format!("cast '{}' to timestamp failed", self))
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Data::Empty => Ok(()),
            Data::String(value) => write!(f, "{value}"),
            Data::Bool(value) => write!(f, "{value}"),
            Data::Int(value) => write!(f, "{value}"),
            Data::Float(value) => write!(f, "{value}"),
            Data::DateTime(value) => match self.kind() {
                CellType::Time => match value.as_datetime() {
                    Some(datetime) if !value.is_duration() => write!(f, "{}", datetime.time()),
                    _ => write!(f, "{}", format_micros((value.as_f64() * MICROS_PER_DAY as f64).round() as i64)),
                },
                CellType::Date => match value.as_datetime() {
                    Some(datetime) => write!(f, "{}", datetime.date()),
                    None => write!(f, "{}", value.as_f64()),
                },
                _ => match value.as_datetime() {
                    Some(datetime) if !value.is_duration() => write!(f, "{datetime}"),
                    _ => write!(f, "{}", value.as_f64()),
                },
            },
            Data::DateTimeIso(value) => write!(f, "{}", value.replace('T', " ")),
            Data::DurationIso(value) => write!(f, "{value}"),
            Data::Error(error) => write!(f, "{error}"),
        }
    }
}

/// Whole numbers that fit a BIGINT. `i64::MAX as f64` rounds up to 2^63, hence the open bound.
fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64
}

fn unix_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("NaiveDate Literal")
}

fn time_micros(time: &NaiveTime) -> i64 {
    let seconds = time.num_seconds_from_midnight() as i64;
    let nanoseconds = time.nanosecond() as i64;
    seconds * 1_000_000 + nanoseconds / 1_000
}

fn format_micros(micros: i64) -> String {
    let seconds = micros / 1_000_000;
    format!("{:02}:{:02}:{:02}", seconds / 3600, seconds / 60 % 60, seconds % 60)
}

fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn parse_iso_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S%.f").ok()
}

fn iso_duration_micros(value: &str) -> Option<i64> {
    let duration = value.parse::<IsoDuration>().ok()?;
    if duration.year != 0.0 || duration.month != 0.0 {
        return None;
    }
    let seconds = duration.day as f64 * 86_400.0
        + duration.hour as f64 * 3_600.0
        + duration.minute as f64 * 60.0
        + duration.second as f64;
    Some((seconds * 1_000_000.0).round() as i64)
}

//! Human readable durations.
//!
//! [`format_duration`] turns a number of seconds into text such as
//! `"1 day, 2 hours, 3 minutes"`, and [`parse_duration`] reads compact
//! unit-suffixed text such as `"1d"` or `"2h30m"` back into seconds.

use std::fmt;

use crate::text::is_numeric;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
}

impl DurationUnit {
    /// Every unit, largest first.
    pub const ALL: [DurationUnit; 6] = [
        DurationUnit::Year,
        DurationUnit::Month,
        DurationUnit::Week,
        DurationUnit::Day,
        DurationUnit::Hour,
        DurationUnit::Minute,
    ];

    /// The case-sensitive letter used for this unit in compact durations.
    pub fn suffix(&self) -> char {
        match self {
            DurationUnit::Year => 'y',
            DurationUnit::Month => 'M',
            DurationUnit::Week => 'w',
            DurationUnit::Day => 'd',
            DurationUnit::Hour => 'h',
            DurationUnit::Minute => 'm',
        }
    }

    pub fn seconds(&self) -> u64 {
        match self {
            // mean Gregorian year
            DurationUnit::Year => 31_556_952,
            DurationUnit::Month => 30 * SECONDS_PER_DAY,
            DurationUnit::Week => 7 * SECONDS_PER_DAY,
            DurationUnit::Day => SECONDS_PER_DAY,
            DurationUnit::Hour => SECONDS_PER_HOUR,
            DurationUnit::Minute => SECONDS_PER_MINUTE,
        }
    }

    pub fn from_suffix(c: char) -> Option<DurationUnit> {
        DurationUnit::ALL.into_iter().find(|unit| unit.suffix() == c)
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Formats seconds as a comma separated list of days, hours, minutes and
/// seconds, leaving out the zero parts. Zero seconds formats as `""`.
pub fn format_duration(total_seconds: u64) -> String {
    let total_minutes = total_seconds / SECONDS_PER_MINUTE;
    let total_hours = total_seconds / SECONDS_PER_HOUR;
    let days = total_seconds / SECONDS_PER_DAY;
    let hours = total_hours - days * 24;
    let minutes = total_minutes - total_hours * 60;
    let seconds = total_seconds - total_minutes * 60;

    [(days, "day"), (hours, "hour"), (minutes, "minute"), (seconds, "second")]
        .into_iter()
        .filter(|(amount, _)| *amount > 0)
        .map(|(amount, label)| {
            let plural = if amount > 1 { "s" } else { "" };
            format!("{amount} {label}{plural}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Converts compact duration text into seconds.
///
/// Each unit is looked up on its own: the amount for a unit is the text in
/// front of the unit letter's first occurrence, counted from just after the
/// closest preceding unit letter. Amounts that are not numeric count as zero,
/// so malformed input never fails, it only contributes nothing.
///
/// ```
/// use schemautil::parse_duration;
/// assert_eq!(parse_duration("2h30m"), 9_000);
/// assert_eq!(parse_duration("1w"), 604_800);
/// assert_eq!(parse_duration("soon"), 0);
/// ```
pub fn parse_duration(text: &str) -> u64 {
    let total = DurationUnit::ALL
        .into_iter()
        .filter_map(|unit| seconds_for(text, unit))
        .fold(0i128, i128::saturating_add);
    // negative amounts may push the sum below zero
    u64::try_from(total.max(0)).unwrap_or(u64::MAX)
}

/// Seconds contributed by one unit, truncated toward zero.
fn seconds_for(text: &str, unit: DurationUnit) -> Option<i128> {
    let end = text.find(unit.suffix())?;
    let before = &text[..end];
    let start = before
        .char_indices()
        .filter(|(_, c)| DurationUnit::from_suffix(*c).is_some())
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    let amount = &before[start..];
    if !is_numeric(amount) {
        return None;
    }

    let (negative, digits) = match amount.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, amount),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let unit_seconds = u128::from(unit.seconds());
    let whole = whole
        .bytes()
        .fold(0u128, |acc, b| acc.saturating_mul(10).saturating_add(u128::from(b - b'0')));
    // floor(0.d1d2..dn * unit_seconds), folded from the last digit so it stays small
    let fraction = fraction
        .bytes()
        .rev()
        .fold(0u128, |carry, b| (u128::from(b - b'0') * unit_seconds + carry) / 10);
    let seconds = whole.saturating_mul(unit_seconds).saturating_add(fraction);
    let seconds = i128::try_from(seconds).unwrap_or(i128::MAX);
    Some(if negative { -seconds } else { seconds })
}

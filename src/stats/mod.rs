//! Pure aggregation over fetched records for the dashboard charts.
//!
//! Everything here is deterministic and I/O-free: lists in, counts and
//! averages out. Unparsable or missing values never panic; they land in the
//! "unknown" bucket or are skipped from averages.

use chrono::{Datelike, Local, NaiveDate};
use std::collections::HashMap;

use crate::models::{Customer, Encounter};

/// Label used when a grouped field is absent or unusable.
pub const UNKNOWN: &str = "unknown";

/// Customer fields the dashboard groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Gender,
    AstrologicalSign,
    AgeBracket,
}

/// Tally customers per distinct value of `field`. Key order is irrelevant;
/// the charts sort for themselves.
pub fn group_by(customers: &[Customer], field: GroupField) -> HashMap<String, usize> {
    group_by_as_of(customers, field, today())
}

/// [`group_by`] with an explicit reference date for age brackets.
pub fn group_by_as_of(
    customers: &[Customer],
    field: GroupField,
    as_of: NaiveDate,
) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for customer in customers {
        let key = match field {
            GroupField::Gender => customer.gender.clone(),
            GroupField::AstrologicalSign => customer.astrological_sign.clone(),
            GroupField::AgeBracket => customer
                .birth_date
                .as_deref()
                .and_then(|birth| age_of(birth, as_of))
                .map(|age| age_bracket(age).to_string()),
        };
        let key = key.unwrap_or_else(|| UNKNOWN.to_string());
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Age in whole years at `as_of`: calendar-year difference, minus one when
/// the birthday has not been reached yet that year.
///
/// Accepts partial ISO dates; a missing month or day is treated as its
/// minimum (`"1989"` reads as 1989-01-01). Returns `None` for anything that
/// does not start with a usable date.
pub fn age_of(birth_date: &str, as_of: NaiveDate) -> Option<i32> {
    let birth = parse_partial_date(birth_date)?;
    let mut age = as_of.year() - birth.year();
    if (as_of.month(), as_of.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Some(age)
}

/// [`age_of`] against the local calendar date.
pub fn age_of_today(birth_date: &str) -> Option<i32> {
    age_of(birth_date, today())
}

/// Bracket label for the age charts. Boundaries are half-open upward: 25
/// already falls in "25-34".
pub fn age_bracket(age: i32) -> &'static str {
    if age < 25 {
        "18-24"
    } else if age < 35 {
        "25-34"
    } else if age < 45 {
        "35-44"
    } else if age < 55 {
        "45-54"
    } else {
        "55+"
    }
}

/// Mean age over customers with a parsable birth date. `None` when no
/// customer has one, never NaN.
pub fn average_age(customers: &[Customer], as_of: NaiveDate) -> Option<f64> {
    let ages: Vec<i32> = customers
        .iter()
        .filter_map(|c| c.birth_date.as_deref())
        .filter_map(|birth| age_of(birth, as_of))
        .collect();
    if ages.is_empty() {
        return None;
    }
    Some(ages.iter().sum::<i32>() as f64 / ages.len() as f64)
}

/// Chart-facing rendering of an average age, with the "N/A" sentinel for
/// the empty case.
pub fn format_average_age(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("{:.0}", value),
        None => "N/A".to_string(),
    }
}

/// One point of the encounter trends chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyEncounters {
    pub date: NaiveDate,
    pub count: usize,
    pub average_rating: f64,
}

/// Encounter count and mean rating per calendar day, sorted by date.
/// Encounters with unparsable dates are skipped.
pub fn encounters_per_day(encounters: &[Encounter]) -> Vec<DailyEncounters> {
    let mut per_day: HashMap<NaiveDate, (usize, i64)> = HashMap::new();
    for encounter in encounters {
        if let Some(date) = parse_partial_date(&encounter.date) {
            let entry = per_day.entry(date).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += encounter.rating;
        }
    }

    let mut days: Vec<DailyEncounters> = per_day
        .into_iter()
        .map(|(date, (count, rating_sum))| DailyEncounters {
            date,
            count,
            average_rating: rating_sum as f64 / count as f64,
        })
        .collect();
    days.sort_by_key(|day| day.date);
    days
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse an ISO date that may omit the day or the month, per the partial
/// date convention: missing components default to 1. Trailing time parts
/// ("2000-06-15T10:00:00") are ignored.
fn parse_partial_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split('T').next()?.trim();
    if date_part.is_empty() {
        return None;
    }
    let mut parts = date_part.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = match parts.next() {
        Some(month) => month.parse().ok()?,
        None => 1,
    };
    let day: u32 = match parts.next() {
        Some(day) => day.parse().ok()?,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

//! Statement-period resolution.
//!
//! Transaction rows mostly carry MM/DD only; the year comes from the
//! statement's printed date range. Chase prints a "through" range
//! ("December 26, 2024 through January 24, 2025"), Capital One an
//! abbreviated one ("Oct 1 - Oct 31, 2024"). A range spanning a year
//! boundary needs month-aware year assignment per transaction.

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;

const MONTHS: &str = concat!(
    "January|February|March|April|May|June|July|August|",
    "September|October|November|December"
);

/// Resolved statement date range, months 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementPeriod {
    pub start_month: u32,
    pub start_year: i32,
    pub end_month: u32,
    pub end_year: i32,
}

impl StatementPeriod {
    /// Year for a transaction that only carries month/day.
    ///
    /// On a wrapped period (Dec into Jan), months equal to the start month
    /// or past the end month belong to the earlier year.
    pub fn year_for(&self, month: u32) -> i32 {
        if self.start_year == self.end_year {
            return self.end_year;
        }
        if month == self.start_month || month > self.end_month {
            self.start_year
        } else {
            self.end_year
        }
    }

    pub fn date_for(&self, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year_for(month), month, day)
    }
}

/// Month number from a full or abbreviated English name.
pub fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    let key = lower.get(..3)?;
    let month = match key {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Best-effort period resolution over the full document text.
///
/// Tried in order: the "through" range, the abbreviated dash range, then a
/// bare 4-digit year scan (months default to January..December). With no
/// year anywhere, the current year is assumed; imprecise, but it keeps the
/// parse lenient.
pub fn resolve(text: &str) -> StatementPeriod {
    if let Some(period) = match_through_range(text) {
        return period;
    }
    if let Some(period) = match_abbreviated_range(text) {
        return period;
    }
    fallback_year(text)
}

fn match_through_range(text: &str) -> Option<StatementPeriod> {
    let re = Regex::new(&format!(
        r"(?i)\b(?P<m1>{MONTHS})\s+\d{{1,2}},\s+(?P<y1>\d{{4}})\s+through\s+(?P<m2>{MONTHS})\s+\d{{1,2}},\s+(?P<y2>\d{{4}})"
    ))
    .ok()?;
    let caps = re.captures(text)?;
    Some(StatementPeriod {
        start_month: month_number(&caps["m1"])?,
        start_year: caps["y1"].parse().ok()?,
        end_month: month_number(&caps["m2"])?,
        end_year: caps["y2"].parse().ok()?,
    })
}

fn match_abbreviated_range(text: &str) -> Option<StatementPeriod> {
    let re = Regex::new(
        r"(?i)\b(?P<m1>[A-Za-z]{3})\.?\s+\d{1,2}\s*-\s*(?P<m2>[A-Za-z]{3})\.?\s+\d{1,2},\s+(?P<y>\d{4})",
    )
    .ok()?;
    for caps in re.captures_iter(text) {
        let (Some(start_month), Some(end_month)) =
            (month_number(&caps["m1"]), month_number(&caps["m2"]))
        else {
            continue;
        };
        let end_year: i32 = match caps["y"].parse() {
            Ok(y) => y,
            Err(_) => continue,
        };
        let start_year = if start_month > end_month {
            end_year - 1
        } else {
            end_year
        };
        return Some(StatementPeriod {
            start_month,
            start_year,
            end_month,
            end_year,
        });
    }
    None
}

fn fallback_year(text: &str) -> StatementPeriod {
    let year = Regex::new(r"\b(\d{4})\b")
        .ok()
        .and_then(|re| {
            re.captures_iter(text)
                .filter_map(|c| c[1].parse::<i32>().ok())
                .find(|y| (1990..=2100).contains(y))
        })
        .unwrap_or_else(|| Utc::now().year());
    StatementPeriod {
        start_month: 1,
        start_year: year,
        end_month: 12,
        end_year: year,
    }
}

use chrono::{Datelike, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parses the calendar date of an ISO 8601 value.
///
/// Accepts `YYYY-MM-DD` (zero padding optional) and full timestamps such as
/// `2024-06-15T08:30:00Z`, in which case only the date part is kept.
pub fn parse_date(datestr: &str) -> anyhow::Result<NaiveDate> {
    let datestr = datestr.trim();
    let date_part = datestr.split(['T', ' ']).next().unwrap_or_default();
    let dates = date_part.split('-').collect::<Vec<_>>();
    if dates.len() != 3 {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }
    let year = dates[0].parse::<i32>();
    let month = dates[1].parse::<u32>();
    let day = dates[2].parse::<u32>();

    let (year, month, day) = match (year, month, day) {
        (Ok(year), Ok(month), Ok(day)) => (year, month, day),
        _ => return Err(anyhow::Error::msg(datestr.to_string())),
    };

    if !(1..=12).contains(&month) {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    let month_length = get_month_length(year, month);

    if day < 1 || day > month_length {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow::Error::msg(datestr.to_string()))
}

/// Parses an optional date field, treating absent and malformed values alike
pub fn parse_optional_date(datestr: Option<&str>) -> Option<NaiveDate> {
    datestr.and_then(|d| parse_date(d).ok())
}

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn get_month_length(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Signed number of whole days from `from` to `to`
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// The month/day of `date` placed in `year`. A 29 February falls on 1 March
/// in common years.
pub fn anniversary_in_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// First anniversary of `date` on or after `reference`
pub fn next_anniversary(date: NaiveDate, reference: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in_year(date, reference.year())?;
    if this_year < reference {
        anniversary_in_year(date, reference.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Completed years between `from` and `to`, `None` when `to` lies before `from`
pub fn full_years_between(from: NaiveDate, to: NaiveDate) -> Option<u32> {
    if to < from {
        return None;
    }
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_month_day(date: &NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

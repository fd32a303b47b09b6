use chrono::NaiveDate;

/// `?date=YYYY-MM-DD` when a reference date is given
pub(crate) fn date_query(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("?date={}", date.format("%Y-%m-%d")),
        None => String::new(),
    }
}

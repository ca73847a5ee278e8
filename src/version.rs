use chrono::Datelike;

/// returned in place of a date string when no date is available
pub const NULL_DATE: &str = "null date";

/// build the full `year ++ month ++ day` string for a date
///
/// month is the zero based index (January is "00"), day is the day of the month,
/// both padded to two digits. the year is written as is.
pub fn date_to_version_string<D: Datelike>(date: Option<&D>) -> String {
    let date = match date {
        Some(d) => d,
        None => return NULL_DATE.to_string(),
    };
    format!("{}{:02}{:02}", date.year(), date.month0(), date.day())
}

/// drop the century digits and keep the next six characters
pub fn version_code(full: &str) -> String {
    full.chars().skip(2).take(6).collect()
}

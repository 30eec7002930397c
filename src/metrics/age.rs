use chrono::{Datelike, NaiveDate};
use log::warn;

/// Age in whole years on `today`; `None` for a missing or malformed `YYYY-MM-DD` date.
pub fn age_on(birth_date: Option<&str>, today: NaiveDate) -> Option<i32> {
    let raw = birth_date?.trim();
    if raw.is_empty() {
        return None;
    }

    let birth = match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date,
        Err(e) => {
            warn!("Ignoring malformed birth date '{}': {}", raw, e);
            return None;
        }
    };

    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    Some(years)
}

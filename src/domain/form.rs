//! Entry form model
//!
//! Holds raw field text the way a user typed it. Counters are coerced only
//! when the form is submitted, so a blank or garbled field becomes 0.

use crate::domain::entry::{amount_from_str, count_from_str, date_key, validate_date};
use crate::domain::Entry;
use crate::error::Result;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub date: String,
    pub physics: String,
    pub chemistry: String,
    pub maths: String,
    pub mocks: String,
}

impl EntryForm {
    /// Fresh form: today's date, every counter at 0
    pub fn blank(today: NaiveDate) -> Self {
        EntryForm {
            date: date_key(today),
            physics: "0".to_string(),
            chemistry: "0".to_string(),
            maths: "0".to_string(),
            mocks: "0".to_string(),
        }
    }

    /// Populate every field from a stored entry
    pub fn from_entry(entry: &Entry) -> Self {
        let stored = Entry::new(
            entry.date.clone(),
            entry.physics,
            entry.chemistry,
            entry.maths,
            entry.mocks,
        );
        EntryForm {
            date: stored.date,
            physics: stored.physics.to_string(),
            chemistry: stored.chemistry.to_string(),
            maths: stored.maths.to_string(),
            mocks: stored.mocks.to_string(),
        }
    }

    /// Validate the date and coerce the counters into an entry
    pub fn submit(&self) -> Result<Entry> {
        let date = validate_date(&self.date)?;
        Ok(Entry::new(
            date,
            amount_from_str(&self.physics),
            amount_from_str(&self.chemistry),
            amount_from_str(&self.maths),
            count_from_str(&self.mocks),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudyLogError;

    #[test]
    fn test_blank_form() {
        let form = EntryForm::blank(NaiveDate::from_ymd_opt(2025, 1, 7).unwrap());
        assert_eq!(form.date, "2025-01-07");
        assert_eq!(form.physics, "0");
        assert_eq!(form.mocks, "0");
    }

    #[test]
    fn test_submit_coerces_fields() {
        let form = EntryForm {
            date: "2025-01-07".to_string(),
            physics: "2.5".to_string(),
            chemistry: "".to_string(),
            maths: "lots".to_string(),
            mocks: "1".to_string(),
        };

        let entry = form.submit().unwrap();
        assert_eq!(entry, Entry::new("2025-01-07", 2.5, 0.0, 0.0, 1));
    }

    #[test]
    fn test_submit_rejects_bad_date() {
        let mut form = EntryForm::blank(NaiveDate::from_ymd_opt(2025, 1, 7).unwrap());
        form.date = "07/01/2025".to_string();

        match form.submit().unwrap_err() {
            StudyLogError::InvalidDate(d) => assert_eq!(d, "07/01/2025"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_from_entry_populates_fields() {
        let entry = Entry::new("2024-03-02", 3.0, 1.5, 0.0, 2);
        let form = EntryForm::from_entry(&entry);

        assert_eq!(form.date, "2024-03-02");
        assert_eq!(form.physics, "3");
        assert_eq!(form.chemistry, "1.5");
        assert_eq!(form.maths, "0");
        assert_eq!(form.mocks, "2");
        assert_eq!(form.submit().unwrap(), entry);
    }

    #[test]
    fn test_from_entry_coerces_invalid_amounts() {
        let mut entry = Entry::empty("2024-03-02");
        entry.physics = f64::NAN;
        let form = EntryForm::from_entry(&entry);
        assert_eq!(form.physics, "0");
    }
}

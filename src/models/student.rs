//! Student model.
//!
//! A student is the unit being placed: each one occupies exactly one seat in
//! exactly one room assignment over a whole generation run. Students are
//! identified by their `code`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A student to be seated for the exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Student code (natural key).
    pub code: String,
    /// Full name.
    #[serde(default)]
    pub full_name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Free-form gender field, carried through untouched.
    #[serde(default)]
    pub gender: Option<String>,
    /// Date of birth.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

impl Student {
    /// Creates a student with the given code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            full_name: String::new(),
            email: String::new(),
            gender: None,
            date_of_birth: None,
        }
    }

    /// Sets the full name.
    pub fn with_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the gender.
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Sets the date of birth.
    pub fn with_date_of_birth(mut self, date: NaiveDate) -> Self {
        self.date_of_birth = Some(date);
        self
    }
}

//! Student and person records
//!
//! Names are stored as entered and title-cased on read. Setters enforce the
//! field constraints; plain construction does not, so records read back from
//! storage are accepted as they are.

use std::fmt;

use crate::error::{Error, Result};

// ─────────────────────────────────────────────────────────────────
// Person
// ─────────────────────────────────────────────────────────────────

/// A person with a first and last name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Title-cased first name
    pub fn first_name(&self) -> String {
        title_case(&self.first_name)
    }

    /// Title-cased last name
    pub fn last_name(&self) -> String {
        title_case(&self.last_name)
    }

    /// Set the first name; empty or letters only
    pub fn set_first_name(&mut self, value: &str) -> Result<()> {
        if !is_valid_name(value) {
            return Err(Error::validation(
                "first_name",
                "The first name should not contain numbers.",
            ));
        }
        self.first_name = value.to_string();
        Ok(())
    }

    /// Set the last name; empty or letters only
    pub fn set_last_name(&mut self, value: &str) -> Result<()> {
        if !is_valid_name(value) {
            return Err(Error::validation(
                "last_name",
                "The last name should not contain numbers.",
            ));
        }
        self.last_name = value.to_string();
        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name(), self.last_name())
    }
}

// ─────────────────────────────────────────────────────────────────
// Student
// ─────────────────────────────────────────────────────────────────

/// A person enrolled in a course
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Student {
    person: Person,
    course_name: String,
}

impl Student {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(first_name, last_name),
            course_name: course_name.into(),
        }
    }

    pub fn first_name(&self) -> String {
        self.person.first_name()
    }

    pub fn last_name(&self) -> String {
        self.person.last_name()
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<()> {
        self.person.set_first_name(value)
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<()> {
        self.person.set_last_name(value)
    }

    /// Set the course name; must contain something other than whitespace
    pub fn set_course_name(&mut self, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::validation(
                "course_name",
                "Course name must be a non-empty string.",
            ));
        }
        self.course_name = value.to_string();
        Ok(())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is enrolled in {}", self.person, self.course_name)
    }
}

// ─────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────

/// Empty, or alphabetic characters only
pub fn is_valid_name(value: &str) -> bool {
    value.chars().all(char::is_alphabetic)
}

/// Non-empty and alphabetic only, as required for console entry
pub fn is_alphabetic_name(value: &str) -> bool {
    !value.is_empty() && is_valid_name(value)
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

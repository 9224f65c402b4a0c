//! Roster persistence
//!
//! The roster file is a JSON array of `{FirstName, LastName, CourseName}`
//! objects. `load` and `save` never fail to their caller: problems are
//! reported on the console and the session carries on.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::console::Console;
use crate::error::{Error, Result};
use crate::model::Student;

/// Default roster file, relative to the working directory
pub const DEFAULT_ROSTER_FILE: &str = "Enrollments.json";

const READ_FAILED: &str = "Error: There was a problem with reading the file.";
const WRITE_FAILED: &str = "Error: There was a problem with writing to the file.\n\
                            Please check that the file is not open by another program.";

/// On-disk form of one enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EnrollmentRecord {
    first_name: String,
    last_name: String,
    course_name: String,
}

impl From<&Student> for EnrollmentRecord {
    fn from(student: &Student) -> Self {
        Self {
            first_name: student.first_name(),
            last_name: student.last_name(),
            course_name: student.course_name().to_string(),
        }
    }
}

impl From<EnrollmentRecord> for Student {
    fn from(record: EnrollmentRecord) -> Self {
        Student::new(record.first_name, record.last_name, record.course_name)
    }
}

// ─────────────────────────────────────────────────────────────────
// Fallible core
// ─────────────────────────────────────────────────────────────────

/// Read every enrollment in `path`
pub fn read_roster(path: &Path) -> Result<Vec<Student>> {
    let content = fs::read_to_string(path).map_err(|e| Error::RosterRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let records: Vec<EnrollmentRecord> =
        serde_json::from_str(&content).map_err(|e| Error::RosterParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(records.into_iter().map(Student::from).collect())
}

/// Replace the contents of `path` with `students`
///
/// The document is fully serialized before the file is opened.
pub fn write_roster(path: &Path, students: &[Student]) -> Result<()> {
    let records: Vec<EnrollmentRecord> = students.iter().map(EnrollmentRecord::from).collect();
    let json = serde_json::to_string_pretty(&records).map_err(Error::RosterSerialize)?;

    fs::write(path, json).map_err(|e| Error::RosterWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// ─────────────────────────────────────────────────────────────────
// Console-facing operations
// ─────────────────────────────────────────────────────────────────

/// Append the stored roster to `students`
///
/// On failure the error is shown on the console and `students` is returned
/// unchanged.
pub fn load<R: BufRead, W: Write>(
    path: &Path,
    mut students: Vec<Student>,
    console: &mut Console<R, W>,
) -> Vec<Student> {
    match read_roster(path) {
        Ok(loaded) => {
            info!(path = %path.display(), count = loaded.len(), "Roster loaded");
            students.extend(loaded);
        }
        Err(e) => {
            info!(error = %e.format_for_log(), "Roster load failed");
            console.display_error(READ_FAILED, Some(&e));
        }
    }
    students
}

/// Persist `students`, then echo them as confirmation
///
/// The confirmation is only printed after a successful write.
pub fn save<R: BufRead, W: Write>(path: &Path, students: &[Student], console: &mut Console<R, W>) {
    match write_roster(path, students) {
        Ok(()) => {
            info!(path = %path.display(), count = students.len(), "Roster saved");
            console.display_roster(students);
        }
        Err(e) => {
            warn!(error = %e.format_for_log(), "Roster save failed");
            console.display_error(WRITE_FAILED, Some(&e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn console() -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(Vec::new()), Vec::new())
    }

    fn sample() -> Vec<Student> {
        vec![
            Student::new("jane", "doe", "History"),
            Student::new("Ada", "LOVELACE", "Mathematics"),
            Student::new("jane", "doe", "History"),
        ]
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_ROSTER_FILE);

        for n in 0..=3 {
            let students: Vec<Student> = sample().into_iter().take(n).collect();
            write_roster(&path, &students).unwrap();
            let loaded = read_roster(&path).unwrap();

            assert_eq!(loaded.len(), n);
            for (saved, read) in students.iter().zip(&loaded) {
                assert_eq!(saved.first_name(), read.first_name());
                assert_eq!(saved.last_name(), read.last_name());
                assert_eq!(saved.course_name(), read.course_name());
            }
        }
    }

    #[test]
    fn test_file_uses_pascal_case_keys_and_title_case_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        write_roster(&path, &sample()[..1]).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "FirstName": "Jane", "LastName": "Doe", "CourseName": "History" }
            ])
        );
    }

    #[test]
    fn test_read_accepts_compact_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(
            &path,
            r#"[{"FirstName": "Bob", "LastName": "Smith", "CourseName": "Python 100"}]"#,
        )
        .unwrap();

        let loaded = read_roster(&path).unwrap();
        assert_eq!(loaded[0].to_string(), "Bob Smith is enrolled in Python 100");
    }

    #[test]
    fn test_load_missing_file_reports_and_returns_empty() {
        let dir = TempDir::new().unwrap();
        let mut console = console();

        let students = load(&dir.path().join("absent.json"), Vec::new(), &mut console);

        assert!(students.is_empty());
        let out = console.transcript();
        assert!(out.contains(READ_FAILED));
        assert!(out.contains("-- Technical Error Message -- "));
        assert!(out.contains("IoError (E304)"));
    }

    #[test]
    fn test_load_malformed_file_keeps_existing_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, r#"[{"FirstName": "Bob", "LastName": "Smith"}]"#).unwrap();
        let mut console = console();

        let existing = vec![Student::new("Ada", "Lovelace", "Math")];
        let students = load(&path, existing.clone(), &mut console);

        assert_eq!(students, existing);
        assert!(console.transcript().contains("FormatError (E301)"));
    }

    #[test]
    fn test_load_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        write_roster(&path, &sample()[1..2]).unwrap();
        let mut console = console();

        let students = load(&path, sample()[..1].to_vec(), &mut console);

        assert_eq!(students.len(), 2);
        assert_eq!(students[1].last_name(), "Lovelace");
        assert!(console.transcript().is_empty());
    }

    #[test]
    fn test_save_echoes_roster_on_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        let mut console = console();

        save(&path, &sample()[..1], &mut console);

        assert!(path.exists());
        let out = console.transcript();
        assert!(out.contains("Jane Doe is enrolled in History"));
        assert!(out.starts_with(&"-".repeat(50)));
    }

    #[test]
    fn test_save_failure_reports_without_confirmation() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be overwritten as a file
        let mut console = console();

        save(dir.path(), &sample(), &mut console);

        let out = console.transcript();
        assert!(out.contains("There was a problem with writing to the file."));
        assert!(out.contains("not open by another program"));
        assert!(!out.contains("is enrolled in"));
    }
}

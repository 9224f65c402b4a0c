//! Error types for course registration
//!
//! Provides structured error handling with:
//! - Numeric error codes and a kind name for diagnostics
//! - A fixed description per kind, shown in technical error output
//! - User-facing hints and CLI exit codes

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for registration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Numeric error codes for diagnostics and exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ErrorCode {
    // Validation errors (1xx)
    InvalidName = 100,
    InvalidCourse = 101,
    InvalidMenuChoice = 102,
    InputClosed = 103,
    OutputClosed = 104,

    // Configuration errors (2xx)
    ConfigNotFound = 200,
    ConfigParseError = 201,
    ConfigValidation = 202,

    // Storage errors (3xx)
    RosterRead = 300,
    RosterParse = 301,
    RosterWrite = 302,
    RosterSerialize = 303,
    IoNotFound = 304,
    IoPermission = 305,

    // Internal errors (9xx)
    InternalError = 900,
}

impl ErrorCode {
    /// Get the string code (e.g., "E100")
    pub fn as_str(&self) -> String {
        format!("E{}", *self as u16)
    }

    /// Get the exit code for CLI
    pub fn exit_code(&self) -> i32 {
        match *self as u16 {
            100..=199 => 10,
            200..=299 => 20,
            300..=399 => 30,
            900..=999 => 90,
            _ => 1,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type
#[derive(Error, Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Validation Errors
    // ─────────────────────────────────────────────────────────────

    /// A record field failed its format check
    #[error("{message}")]
    Validation { field: &'static str, message: String },

    /// Menu input was not one of the listed options
    #[error("Please, choose only 1, 2, 3, or 4")]
    InvalidMenuChoice { input: String },

    /// Standard input reached end of stream
    #[error("Input stream closed")]
    InputClosed,

    /// Prompts can no longer be written to the console
    #[error("Console output closed: {0}")]
    OutputClosed(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration parse error
    #[error("Failed to parse configuration: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<toml::de::Error>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {message}")]
    ConfigValidation { message: String, field: Option<String> },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    // ─────────────────────────────────────────────────────────────
    // Storage Errors
    // ─────────────────────────────────────────────────────────────

    /// Roster file could not be opened or read
    #[error("Failed to read roster file {path}: {source}")]
    RosterRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Roster file content is not a valid enrollment list
    #[error("Failed to parse roster file {path}: {source}")]
    RosterParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Roster file could not be written
    #[error("Failed to write roster file {path}: {source}")]
    RosterWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Roster could not be serialized
    #[error("Failed to serialize roster: {0}")]
    RosterSerialize(#[source] serde_json::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    // ─────────────────────────────────────────────────────────────
    // Internal Errors
    // ─────────────────────────────────────────────────────────────

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    // ─────────────────────────────────────────────────────────────
    // Error Classification
    // ─────────────────────────────────────────────────────────────

    /// Get the numeric error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Validation { field: "course_name", .. } => ErrorCode::InvalidCourse,
            Error::Validation { .. } => ErrorCode::InvalidName,
            Error::InvalidMenuChoice { .. } => ErrorCode::InvalidMenuChoice,
            Error::InputClosed => ErrorCode::InputClosed,
            Error::OutputClosed(_) => ErrorCode::OutputClosed,

            Error::ConfigNotFound { .. } => ErrorCode::ConfigNotFound,
            Error::ConfigParse { .. } => ErrorCode::ConfigParseError,
            Error::ConfigValidation { .. } => ErrorCode::ConfigValidation,
            Error::Config(_) => ErrorCode::ConfigValidation,

            Error::RosterRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::IoNotFound,
                std::io::ErrorKind::PermissionDenied => ErrorCode::IoPermission,
                _ => ErrorCode::RosterRead,
            },
            Error::RosterParse { .. } => ErrorCode::RosterParse,
            Error::RosterWrite { source, .. } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => ErrorCode::IoPermission,
                _ => ErrorCode::RosterWrite,
            },
            Error::RosterSerialize(_) => ErrorCode::RosterSerialize,
            Error::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::IoNotFound,
                std::io::ErrorKind::PermissionDenied => ErrorCode::IoPermission,
                _ => ErrorCode::RosterRead,
            },
            Error::Toml(_) => ErrorCode::ConfigParseError,

            Error::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Short classification name, shown alongside the code
    pub fn kind_name(&self) -> &'static str {
        match self {
            Error::Validation { .. } | Error::InvalidMenuChoice { .. } => "ValidationError",
            Error::InputClosed => "InputClosed",
            Error::OutputClosed(_) => "OutputClosed",
            Error::ConfigNotFound { .. }
            | Error::ConfigParse { .. }
            | Error::ConfigValidation { .. }
            | Error::Config(_)
            | Error::Toml(_) => "ConfigError",
            Error::RosterParse { .. } | Error::RosterSerialize(_) => "FormatError",
            Error::RosterRead { .. } | Error::RosterWrite { .. } | Error::Io(_) => "IoError",
            Error::Internal(_) => "InternalError",
        }
    }

    /// Fixed documentation text for this kind of error
    pub fn description(&self) -> &'static str {
        match self {
            Error::Validation { .. } => "A record field does not satisfy its format constraint.",
            Error::InvalidMenuChoice { .. } => "The menu selection is not one of the listed options.",
            Error::InputClosed => "No further console input is available.",
            Error::OutputClosed(_) => "The console can no longer display prompts.",
            Error::ConfigNotFound { .. } => "The requested configuration file does not exist.",
            Error::ConfigParse { .. } | Error::Toml(_) => "The configuration file is not valid TOML.",
            Error::ConfigValidation { .. } | Error::Config(_) => {
                "A configuration value is out of range or malformed."
            }
            Error::RosterRead { .. } => "The roster file could not be opened or read.",
            Error::RosterParse { .. } => {
                "The roster file is not a JSON list of FirstName/LastName/CourseName entries."
            }
            Error::RosterWrite { .. } => "The roster file could not be written.",
            Error::RosterSerialize(_) => "The roster could not be converted to JSON.",
            Error::Io(_) => "An operating system I/O operation failed.",
            Error::Internal(_) => "An unexpected internal failure occurred.",
        }
    }

    /// Check if the error originates from user-supplied data
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::Validation { .. } | Error::InvalidMenuChoice { .. }
        )
    }

    /// Get the exit code for CLI
    pub fn exit_code(&self) -> i32 {
        self.code().exit_code()
    }

    // ─────────────────────────────────────────────────────────────
    // User-Friendly Messages
    // ─────────────────────────────────────────────────────────────

    /// Get a user-friendly suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Error::ConfigNotFound { .. } => Some(
                "Run 'course-registration config init' to create a default configuration file.",
            ),
            Error::ConfigParse { .. } => Some(
                "Check your configuration file syntax. Run 'course-registration config validate' to see details.",
            ),
            Error::ConfigValidation { .. } => {
                Some("Review the configuration file and fix the invalid values.")
            }
            Error::RosterParse { .. } => Some(
                "Fix or remove the roster file; saving from the menu will write a fresh one.",
            ),
            Error::RosterWrite { .. } => {
                Some("Please check that the file is not open by another program.")
            }
            _ => None,
        }
    }

    /// Format the error for terminal display with colors
    pub fn format_for_terminal(&self) -> String {
        let mut output = format!("\x1b[31mError [{}]\x1b[0m: {}\n", self.code().as_str(), self);

        if let Some(hint) = self.suggestion() {
            output.push_str(&format!("\n\x1b[33mHint\x1b[0m: {}\n", hint));
        }

        output
    }

    /// Format the error for logging (no colors)
    pub fn format_for_log(&self) -> String {
        let code = self.code();
        match self {
            Error::InvalidMenuChoice { input } => format!("[{}] {} (got {:?})", code, self, input),
            Error::ConfigValidation {
                field: Some(field), ..
            } => format!("[{}] {} (field: {})", code, self, field),
            _ => format!("[{}] {}", code, self),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    /// Create a field validation error
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Error::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Error::ConfigNotFound { path: path.into() }
    }

    /// Create a config validation error with field name
    pub fn config_field_invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ConfigValidation {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_format() {
        assert_eq!(ErrorCode::InvalidName.as_str(), "E100");
        assert_eq!(ErrorCode::ConfigNotFound.as_str(), "E200");
        assert_eq!(ErrorCode::RosterWrite.as_str(), "E302");
    }

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(ErrorCode::InvalidMenuChoice.exit_code(), 10);
        assert_eq!(ErrorCode::ConfigParseError.exit_code(), 20);
        assert_eq!(ErrorCode::RosterRead.exit_code(), 30);
        assert_eq!(ErrorCode::InternalError.exit_code(), 90);
    }

    #[test]
    fn test_validation_codes_by_field() {
        let err = Error::validation("first_name", "bad");
        assert_eq!(err.code(), ErrorCode::InvalidName);
        assert_eq!(err.kind_name(), "ValidationError");
        assert!(err.is_validation());

        let err = Error::validation("course_name", "bad");
        assert_eq!(err.code(), ErrorCode::InvalidCourse);
    }

    #[test]
    fn test_validation_display_is_message() {
        let err = Error::validation("last_name", "The last name should not contain numbers.");
        assert_eq!(err.to_string(), "The last name should not contain numbers.");
    }

    #[test]
    fn test_roster_read_not_found_code() {
        let err = Error::RosterRead {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.code(), ErrorCode::IoNotFound);
        assert_eq!(err.kind_name(), "IoError");
        assert!(err.to_string().contains("missing.json"));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_write_failure_suggests_closing_file() {
        let err = Error::RosterWrite {
            path: PathBuf::from("Enrollments.json"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "locked"),
        };
        assert!(err.suggestion().unwrap().contains("not open by another program"));
    }

    #[test]
    fn test_format_for_terminal() {
        let err = Error::config_not_found("/test/config.toml");
        let formatted = err.format_for_terminal();

        assert!(formatted.contains("E200"));
        assert!(formatted.contains("\x1b[31m"));
        assert!(formatted.contains("Hint"));
    }

    #[test]
    fn test_format_for_log() {
        let err = Error::InvalidMenuChoice { input: "9".into() };
        let formatted = err.format_for_log();

        assert!(formatted.contains("[E102]"));
        assert!(formatted.contains("\"9\""));
        assert!(!formatted.contains("\x1b["));
    }

    #[test]
    fn test_every_kind_has_description() {
        let errors = [
            Error::validation("first_name", "x"),
            Error::InputClosed,
            Error::OutputClosed(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "x")),
            Error::config_field_invalid("logging.level", "x"),
            Error::Internal("x".into()),
        ];
        for err in errors {
            assert!(!err.description().is_empty());
        }
    }
}

//! Console interaction: menu, prompts, roster and error display
//!
//! The console is generic over its reader and writer so a whole session can
//! be driven from an in-memory script.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::model::{is_alphabetic_name, Student};

// ─────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────

/// Main menu text
pub const MENU: &str = "\
---- Course Registration Program ----
  Select from the following menu:
    1. Register a Student for a Course.
    2. Show current data.
    3. Save data to a file.
    4. Exit the program.
-----------------------------------------";

/// Width of the rule printed around the roster
pub const SEPARATOR_WIDTH: usize = 50;

const MENU_PROMPT: &str = "Enter your menu choice number: ";
const FIRST_NAME_PROMPT: &str = "Enter the student's first name: ";
const LAST_NAME_PROMPT: &str = "Enter the student's last name: ";
const COURSE_PROMPT: &str = "Please enter the name of the course: ";

// ─────────────────────────────────────────────────────────────────
// Menu Input
// ─────────────────────────────────────────────────────────────────

/// One of the four menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    ShowData,
    Save,
    Exit,
}

impl MenuChoice {
    /// Parse the exact menu token ("1" through "4")
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "1" => Some(MenuChoice::Register),
            "2" => Some(MenuChoice::ShowData),
            "3" => Some(MenuChoice::Save),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Outcome of reading a menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Selected(MenuChoice),
    /// The entered text matched no option (already reported)
    Invalid,
    /// Standard input is exhausted or prompts can no longer be shown
    Closed,
}

// ─────────────────────────────────────────────────────────────────
// Console
// ─────────────────────────────────────────────────────────────────

/// Text console over a reader and a writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output
    pub fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.output, "{}", text) {
            warn!(error = %e, "Console write failed");
        }
    }

    /// Print the menu framed by blank lines
    pub fn display_menu(&mut self) {
        self.line("");
        self.line(MENU);
        self.line("");
    }

    /// Prompt for a menu selection
    pub fn read_menu_choice(&mut self) -> MenuInput {
        let token = match self.prompt(MENU_PROMPT) {
            Ok(token) => token,
            Err(Error::InputClosed) => return MenuInput::Closed,
            Err(e @ Error::OutputClosed(_)) => {
                warn!(error = %e, "Ending session");
                return MenuInput::Closed;
            }
            Err(e) => {
                self.display_error("Error: There was a problem reading your choice.", Some(&e));
                return MenuInput::Invalid;
            }
        };

        match MenuChoice::from_token(&token) {
            Some(choice) => {
                debug!(?choice, "Menu choice read");
                MenuInput::Selected(choice)
            }
            None => {
                let err = Error::InvalidMenuChoice { input: token };
                debug!(error = %err.format_for_log(), "Rejected menu input");
                self.display_error(&err.to_string(), None);
                MenuInput::Invalid
            }
        }
    }

    /// Print every record between two separator rules
    pub fn display_roster(&mut self, students: &[Student]) {
        let rule = "-".repeat(SEPARATOR_WIDTH);
        self.line(&rule);
        for student in students {
            self.line(student);
        }
        self.line(&rule);
    }

    /// Prompt for a new student and append it to `students`
    ///
    /// Nothing is appended when any field is rejected or input fails.
    /// Returns whether a record was added.
    pub fn read_new_student(&mut self, students: &mut Vec<Student>) -> bool {
        match self.prompt_student() {
            Ok((student, confirmation)) => {
                info!(student = %student, "Student registered");
                students.push(student);
                self.line(confirmation);
                true
            }
            Err(e) if e.is_validation() => {
                self.display_error("Input data is not valid!", Some(&e));
                false
            }
            Err(e) => {
                self.display_error("Error: There was a problem with your entered data.", Some(&e));
                false
            }
        }
    }

    /// Print a message, plus technical detail about the cause when given
    pub fn display_error(&mut self, message: &str, error: Option<&Error>) {
        self.line(message);
        self.line("");

        if let Some(err) = error {
            self.line("-- Technical Error Message -- ");
            self.line(err);
            self.line(err.description());
            self.line(format!("{} ({})", err.kind_name(), err.code()));
        }
    }

    fn prompt_student(&mut self) -> Result<(Student, String)> {
        let first_name = self.prompt(FIRST_NAME_PROMPT)?;
        if !is_alphabetic_name(&first_name) {
            return Err(Error::validation(
                "first_name",
                "First name should only contain letters.",
            ));
        }

        let last_name = self.prompt(LAST_NAME_PROMPT)?;
        if !is_alphabetic_name(&last_name) {
            return Err(Error::validation(
                "last_name",
                "Last name should only contain letters.",
            ));
        }

        let course_name = self.prompt(COURSE_PROMPT)?;

        let confirmation = format!(
            "You have registered {} {} for {}.",
            first_name, last_name, course_name
        );
        let mut student = Student::new("", "", course_name);
        student.set_first_name(&first_name)?;
        student.set_last_name(&last_name)?;
        Ok((student, confirmation))
    }

    /// Show a prompt and read one line without its terminator
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)
            .and_then(|_| self.output.flush())
            .map_err(Error::OutputClosed)?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(Error::InputClosed);
        }

        let trimmed = buf.strip_suffix('\n').unwrap_or(&buf);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
impl<R: BufRead> Console<R, Vec<u8>> {
    /// Everything written so far
    pub fn transcript(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

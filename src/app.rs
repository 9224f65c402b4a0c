//! Interactive session: load, menu loop, exit

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::console::{Console, MenuChoice, MenuInput};
use crate::model::Student;
use crate::store;

const INVALID_CHOICE_REMINDER: &str = "Please only choose option 1, 2, 3, or 4";
const GOODBYE: &str = "Program Ended";

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Registering,
    Displaying,
    Saving,
    Terminated,
}

impl State {
    /// Where a menu selection made while idle leads
    pub fn after(input: MenuInput) -> Self {
        match input {
            MenuInput::Selected(MenuChoice::Register) => State::Registering,
            MenuInput::Selected(MenuChoice::ShowData) => State::Displaying,
            MenuInput::Selected(MenuChoice::Save) => State::Saving,
            MenuInput::Selected(MenuChoice::Exit) | MenuInput::Closed => State::Terminated,
            MenuInput::Invalid => State::Idle,
        }
    }
}

/// One registration session; owns the roster for its lifetime
pub struct App<R, W> {
    console: Console<R, W>,
    roster_path: PathBuf,
    students: Vec<Student>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(console: Console<R, W>, roster_path: impl Into<PathBuf>) -> Self {
        Self {
            console,
            roster_path: roster_path.into(),
            students: Vec::new(),
        }
    }

    /// Load the stored roster and run the menu until the user exits
    pub fn run(&mut self) {
        let loaded = std::mem::take(&mut self.students);
        self.students = store::load(&self.roster_path, loaded, &mut self.console);
        info!(
            path = %self.roster_path.display(),
            count = self.students.len(),
            "Session started"
        );

        let mut state = State::Idle;
        while state != State::Terminated {
            state = self.step(state);
        }

        info!(count = self.students.len(), "Session ended");
        self.console.line(GOODBYE);
    }

    /// Perform the work of `state` and return the next one
    fn step(&mut self, state: State) -> State {
        debug!(?state, "Entering state");
        match state {
            State::Idle => {
                self.console.display_menu();
                let input = self.console.read_menu_choice();
                if input == MenuInput::Invalid {
                    self.console.line(INVALID_CHOICE_REMINDER);
                }
                State::after(input)
            }
            State::Registering => {
                self.console.read_new_student(&mut self.students);
                State::Idle
            }
            State::Displaying => {
                self.console.display_roster(&self.students);
                State::Idle
            }
            State::Saving => {
                store::save(&self.roster_path, &self.students, &mut self.console);
                State::Idle
            }
            State::Terminated => State::Terminated,
        }
    }
}

#[cfg(test)]
impl<R: BufRead> App<R, Vec<u8>> {
    fn students(&self) -> &[Student] {
        &self.students
    }

    fn transcript(&self) -> String {
        self.console.transcript()
    }
}

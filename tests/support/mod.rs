// ABOUTME: Shared test support for tabkit integration tests.
// ABOUTME: Provides a recording fake runner with scripted exit codes.

use std::cell::RefCell;
use std::rc::Rc;
use tabkit::invocation::Invocation;
use tabkit::runner::{CommandRunner, RunnerError};

/// Fake runner: records every invocation and replies with scripted exit
/// codes (0 once the script is exhausted). Cloning shares the recording,
/// so tests keep one handle and hand the other to the session.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    calls: Rc<RefCell<Vec<Vec<String>>>>,
    codes: Rc<RefCell<Vec<i32>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(codes: &[i32]) -> Self {
        Self {
            calls: Rc::default(),
            codes: Rc::new(RefCell::new(codes.to_vec())),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<i32, RunnerError> {
        let tokens = invocation.tokens().iter().map(|t| t.to_string()).collect();
        self.calls.borrow_mut().push(tokens);
        let mut codes = self.codes.borrow_mut();
        Ok(if codes.is_empty() { 0 } else { codes.remove(0) })
    }
}

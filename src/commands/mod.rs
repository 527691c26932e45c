// ABOUTME: Command module aggregator for the tabkit CLI.
// ABOUTME: Re-exports login, logout, refresh, and export command handlers.

mod export;
mod login;
mod logout;
mod refresh;

pub use export::{export, export_options};
pub use login::login;
pub use logout::logout;
pub use refresh::refresh;

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use tabkit::invocation::Invocation;
    use tabkit::output::{Output, OutputMode};
    use tabkit::runner::{CommandRunner, RunnerError};
    use tabkit::session::Session;

    /// Fake runner shared by the handler tests. Records every invocation
    /// and replies with scripted exit codes (0 once exhausted). Cloning
    /// shares the recording.
    #[derive(Clone, Default)]
    pub struct RecordingRunner {
        calls: Rc<RefCell<Vec<Vec<String>>>>,
        codes: Rc<RefCell<Vec<i32>>>,
    }

    impl RecordingRunner {
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

    /// Session wired to a fresh recording runner with the given exit codes.
    pub fn recording_session(codes: &[i32]) -> (RecordingRunner, Session<RecordingRunner>) {
        let runner = RecordingRunner {
            calls: Rc::default(),
            codes: Rc::new(RefCell::new(codes.to_vec())),
        };
        let session = Session::with_runner("tabcmd", false, runner.clone());
        (runner, session)
    }

    pub fn silent_output() -> Output {
        Output::new(OutputMode::Quiet)
    }
}

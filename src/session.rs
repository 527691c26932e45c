// ABOUTME: Session over the external tabcmd client.
// ABOUTME: Builds argument lists per operation and tracks login state from exit codes.

use crate::error::{Error, Result};
use crate::export::ExportOptions;
use crate::invocation::Invocation;
use crate::runner::{CommandRunner, ProcessRunner};

/// Token disabling TLS certificate validation in tabcmd.
pub const NO_CERTCHECK_FLAG: &str = "--no-certcheck";

/// Conventional executable name, resolved via the platform search path.
pub const DEFAULT_EXECUTABLE: &str = "tabcmd";

/// A tabcmd session: immutable connection configuration plus login status.
///
/// Each operation spawns one tabcmd process with inherited stdio and blocks
/// until it exits. There is no timeout and no retry; a hung tabcmd hangs
/// the caller. The only error path is failing to spawn the process; the
/// wrapped tool's own failures surface solely through exit codes.
pub struct Session<R = ProcessRunner> {
    executable: String,
    certcheck: bool,
    logged_in: bool,
    runner: R,
}

impl Session<ProcessRunner> {
    /// Session with defaults: `tabcmd` from the search path, cert checks
    /// disabled.
    pub fn new() -> Self {
        Self::with_runner(DEFAULT_EXECUTABLE, false, ProcessRunner)
    }

    /// Session with an explicit executable path and certcheck policy.
    pub fn with_executable(executable: impl Into<String>, certcheck: bool) -> Self {
        Self::with_runner(executable, certcheck, ProcessRunner)
    }
}

impl Default for Session<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> Session<R> {
    /// Session with a custom runner. Tests substitute a fake here.
    pub fn with_runner(executable: impl Into<String>, certcheck: bool, runner: R) -> Self {
        Self {
            executable: executable.into(),
            certcheck,
            logged_in: false,
            runner,
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn certcheck(&self) -> bool {
        self.certcheck
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Access the underlying runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run a raw invocation through tabcmd and return its exit code.
    ///
    /// The executable path is prepended unless it is already the first
    /// token; when cert checks are disabled the skip token is appended
    /// last. No other reordering occurs.
    pub fn execute(&mut self, invocation: Invocation) -> Result<i32> {
        let mut invocation = invocation.ensure_program(&self.executable);
        if !self.certcheck {
            invocation = invocation.push_last(NO_CERTCHECK_FLAG);
        }
        tracing::debug!("running {:?}", invocation.redacted());
        let code = self.runner.run(&invocation)?;
        tracing::debug!("tabcmd exited with code {code}");
        Ok(code)
    }

    /// Log in to a Tableau server.
    ///
    /// The logged-in flag is set iff tabcmd exits 0. The password passes
    /// through as a plain `-p` argument, exactly as tabcmd expects it.
    pub fn login(&mut self, site: &str, username: &str, password: &str) -> Result<()> {
        let invocation = Invocation::new(&self.executable)
            .arg("login")
            .args(["-s", site])
            .args(["-u", username])
            .args(["-p", password]);
        let code = self.execute(invocation)?;
        self.logged_in = code == 0;
        Ok(())
    }

    /// Log out of the session.
    ///
    /// A zero exit clears the logged-in flag; any non-zero exit sets it to
    /// true regardless of prior state, so a failed logout always reads as
    /// a logged-in session afterwards.
    pub fn logout(&mut self) -> Result<()> {
        let invocation = Invocation::new(&self.executable).arg("logout");
        let code = self.execute(invocation)?;
        self.logged_in = code != 0;
        Ok(())
    }

    /// Trigger an extract refresh for a data source.
    ///
    /// The exit code is discarded: a non-zero exit is logged at warn level
    /// and otherwise invisible to the caller. Login state is untouched.
    pub fn refresh_data_source(&mut self, data_source: &str) -> Result<()> {
        let invocation = Invocation::new(&self.executable)
            .arg("refreshextracts")
            .args(["--datasource", data_source]);
        let code = self.execute(invocation)?;
        if code != 0 {
            tracing::warn!("refreshextracts exited with code {code}");
        }
        Ok(())
    }

    /// Export a view to a local file.
    ///
    /// As with refresh, the exit code is discarded apart from a warn-level
    /// log line.
    pub fn export(&mut self, view_path: &str, file_path: &str, options: &ExportOptions) -> Result<()> {
        let invocation = Invocation::new(&self.executable)
            .arg("export")
            .arg(view_path)
            .args(["--filename", file_path])
            .arg(options.format.flag())
            .arg("--pagelayout")
            .arg(options.page_layout)
            .arg("--pagesize")
            .arg(options.page_size)
            .arg("--width")
            .arg(options.width)
            .arg("--height")
            .arg(options.height);
        let code = self.execute(invocation)?;
        if code != 0 {
            tracing::warn!("export exited with code {code}");
        }
        Ok(())
    }

    /// Scheduled-job execution is not part of this wrapper.
    ///
    /// Spawns nothing and changes no state.
    pub fn run_schedule(&self) -> Result<()> {
        Err(Error::NotImplemented("run_schedule"))
    }
}

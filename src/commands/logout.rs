// ABOUTME: Logout command implementation.
// ABOUTME: Reports the session state tabcmd leaves behind.

use tabkit::error::{Error, Result};
use tabkit::output::Output;
use tabkit::runner::CommandRunner;
use tabkit::session::Session;

/// Log out. Exits non-zero when the session still reports logged-in,
/// which is what a failed tabcmd logout leaves behind.
pub fn logout<R: CommandRunner>(session: &mut Session<R>, output: &Output) -> Result<()> {
    output.progress("Logging out");
    session.logout()?;

    if session.is_logged_in() {
        Err(Error::LogoutFailed)
    } else {
        output.success("Logged out");
        Ok(())
    }
}

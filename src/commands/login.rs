// ABOUTME: Login command implementation.
// ABOUTME: Fills site/user defaults from config and reports the session outcome.

use tabkit::config::Config;
use tabkit::error::{Error, Result};
use tabkit::output::Output;
use tabkit::runner::CommandRunner;
use tabkit::session::Session;

/// Log in, filling site and user from configuration when not given on the
/// command line. Exits non-zero when the session does not report logged-in
/// afterwards.
pub fn login<R: CommandRunner>(
    session: &mut Session<R>,
    config: &Config,
    site: Option<&str>,
    user: Option<&str>,
    password: &str,
    output: &Output,
) -> Result<()> {
    let site = site
        .or(config.site.as_deref())
        .ok_or(Error::MissingArgument("site"))?;
    let user = user
        .or(config.user.as_deref())
        .ok_or(Error::MissingArgument("user"))?;

    output.progress(&format!("Logging in to {site} as {user}"));
    session.login(site, user, password)?;

    if session.is_logged_in() {
        output.success("Logged in");
        Ok(())
    } else {
        Err(Error::LoginFailed)
    }
}

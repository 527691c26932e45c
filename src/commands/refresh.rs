// ABOUTME: Refresh command implementation.
// ABOUTME: Triggers an extract refresh; tabcmd reports progress on inherited stdio.

use tabkit::error::Result;
use tabkit::output::Output;
use tabkit::runner::CommandRunner;
use tabkit::session::Session;

/// Trigger an extract refresh for a data source. The wrapped tool's exit
/// code is discarded, so this only fails when tabcmd cannot be spawned.
pub fn refresh<R: CommandRunner>(
    session: &mut Session<R>,
    datasource: &str,
    output: &Output,
) -> Result<()> {
    output.progress(&format!("Refreshing extracts for {datasource}"));
    session.refresh_data_source(datasource)?;
    output.success("Refresh requested");
    Ok(())
}

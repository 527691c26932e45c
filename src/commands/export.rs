// ABOUTME: Export command implementation.
// ABOUTME: Merges CLI overrides onto configured export defaults and runs the export.

use tabkit::config::Config;
use tabkit::error::Result;
use tabkit::export::{ExportFormat, ExportOptions, PageLayout, PageSize};
use tabkit::output::Output;
use tabkit::runner::CommandRunner;
use tabkit::session::Session;

/// Export a view to a local file. As with refresh, the wrapped tool's
/// exit code is discarded.
pub fn export<R: CommandRunner>(
    session: &mut Session<R>,
    view: &str,
    filename: &str,
    options: &ExportOptions,
    output: &Output,
) -> Result<()> {
    output.progress(&format!("Exporting {view} to {filename}"));
    session.export(view, filename, options)?;
    output.success(&format!("Exported {view}"));
    Ok(())
}

/// Merge CLI overrides onto the configured export defaults.
pub fn export_options(
    config: &Config,
    format: Option<ExportFormat>,
    page_layout: Option<PageLayout>,
    page_size: Option<PageSize>,
    width: Option<u32>,
    height: Option<u32>,
) -> ExportOptions {
    let mut options = config.export;
    if let Some(format) = format {
        options.format = format;
    }
    if let Some(page_layout) = page_layout {
        options.page_layout = page_layout;
    }
    if let Some(page_size) = page_size {
        options.page_size = page_size;
    }
    if let Some(width) = width {
        options.width = width;
    }
    if let Some(height) = height {
        options.height = height;
    }
    options
}

// ABOUTME: Export vocabulary for tabcmd view exports.
// ABOUTME: Format flags, page layout/size names, and option defaults.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// Output format of an exported view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lower")]
pub enum ExportFormat {
    #[default]
    Csv,
    Pdf,
    Png,
    FullPdf,
}

impl ExportFormat {
    /// The tabcmd flag selecting this format.
    pub fn flag(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "--csv",
            ExportFormat::Pdf => "--pdf",
            ExportFormat::Png => "--png",
            ExportFormat::FullPdf => "--fullpdf",
        }
    }
}

/// Page orientation for paginated formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PageLayout {
    #[default]
    Landscape,
    Portrait,
}

impl PageLayout {
    /// The value tabcmd expects for `--pagelayout`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageLayout::Landscape => "landscape",
            PageLayout::Portrait => "portrait",
        }
    }
}

impl fmt::Display for PageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paper size for paginated formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    Unspecified,
    #[default]
    Letter,
    Legal,
    #[serde(rename = "note folio")]
    NoteFolio,
    Tabloid,
    Ledger,
    Statement,
    Executive,
    A3,
    A4,
    A5,
    B4,
    B5,
    Quarto,
}

impl PageSize {
    /// The value tabcmd expects for `--pagesize`. Note folio carries an
    /// embedded space on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageSize::Unspecified => "unspecified",
            PageSize::Letter => "letter",
            PageSize::Legal => "legal",
            PageSize::NoteFolio => "note folio",
            PageSize::Tabloid => "tabloid",
            PageSize::Ledger => "ledger",
            PageSize::Statement => "statement",
            PageSize::Executive => "executive",
            PageSize::A3 => "a3",
            PageSize::A4 => "a4",
            PageSize::A5 => "a5",
            PageSize::B4 => "b4",
            PageSize::B5 => "b5",
            PageSize::Quarto => "quarto",
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`crate::session::Session::export`].
///
/// Defaults: CSV format, landscape layout, letter size, 800x600.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub page_layout: PageLayout,
    pub page_size: PageSize,
    pub width: u32,
    pub height: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            page_layout: PageLayout::Landscape,
            page_size: PageSize::Letter,
            width: 800,
            height: 600,
        }
    }
}

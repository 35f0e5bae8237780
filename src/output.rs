//! Rendering of a [`Resolution`] for people and pipelines

use crate::error::Result;
use crate::resolver::Resolution;
use crate::ui;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// How the result is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable summary
    #[default]
    Text,
    /// `{"currentTag": ..., "nextTag": ..., "nextVersion": ...}`
    Json,
    /// `key=value` lines for GitHub Actions step outputs
    Github,
}

/// Render as pretty JSON
pub fn to_json(resolution: &Resolution) -> Result<String> {
    let json = serde_json::to_string_pretty(resolution)?;
    Ok(json)
}

/// Render as `key=value` lines, one per field
pub fn to_github_lines(resolution: &Resolution) -> String {
    format!(
        "currentTag={}\nnextTag={}\nnextVersion={}\n",
        resolution.current_tag, resolution.next_tag, resolution.next_version
    )
}

/// Append step outputs to the file GitHub Actions exposes as `$GITHUB_OUTPUT`
pub fn append_github_output(resolution: &Resolution, path: &Path) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(to_github_lines(resolution).as_bytes())?;
    log::debug!("wrote step outputs to {}", path.display());
    Ok(())
}

/// Write `resolution` in `format`
///
/// For [`OutputFormat::Github`] the lines go to `github_output` when given,
/// otherwise to `out`.
pub fn emit<W: Write>(
    resolution: &Resolution,
    format: OutputFormat,
    out: &mut W,
    github_output: Option<&Path>,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", ui::format_resolution(resolution))?,
        OutputFormat::Json => writeln!(out, "{}", to_json(resolution)?)?,
        OutputFormat::Github => match github_output {
            Some(path) => append_github_output(resolution, path)?,
            None => out.write_all(to_github_lines(resolution).as_bytes())?,
        },
    }
    Ok(())
}

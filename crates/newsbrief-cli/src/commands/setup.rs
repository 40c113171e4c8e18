//! Setup command implementation.

use crate::config::AppConfig;
use crate::error::{CliError, Result};
use newsbrief_nlp::NlpToolkit;
use std::io::Write;
use std::path::Path;

/// Execute the setup command.
pub fn execute_setup(config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let dir = config.nlp_data_dir().ok_or_else(|| {
        CliError::Config("Could not determine the NLP data directory".to_string())
    })?;
    install_assets(&dir, out)
}

/// Install any missing assets into `dir` and report what happened.
pub fn install_assets(dir: &Path, out: &mut impl Write) -> Result<()> {
    let (_toolkit, report) = NlpToolkit::initialize(dir)?;

    for kind in &report.installed {
        writeln!(out, "Installed {}", dir.join(kind.file_name()).display())?;
    }
    for kind in &report.present {
        writeln!(out, "Already present {}", dir.join(kind.file_name()).display())?;
    }
    if report.is_noop() {
        writeln!(out, "NLP data is up to date in {}", dir.display())?;
    }
    Ok(())
}

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::analysis::analyze;
use crate::cli::OutputFormat;
use crate::io::output::{create_file_writer, create_writer};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> anyhow::Result<()> {
    let source = read_source(&config.path)?;
    let report = analyze(&source)?;
    log::info!(
        "found {} issue(s) across {} line(s)",
        report.issues.len(),
        report.line_count
    );

    let format = config.format.into();
    let mut writer = match config.output {
        Some(ref path) => create_file_writer(format, path)?,
        None => create_writer(format),
    };
    writer.write_report(&report)
}

pub(crate) fn read_source(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

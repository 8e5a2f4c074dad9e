//! Code review subcommands: analyze, fix, and format.

use crate::config::resolve_config;
use anyhow::{Context, Result};
use provider::review::{
    AnalysisReport, SourceFile, analyze_prompt, fix_prompt, format_prompt, strip_code_fence,
};
use provider::{Dispatcher, Registry, Session};
use std::path::Path;

/// Analyze source files with the active provider and print the report.
pub async fn analyze(config_flag: Option<&str>, files: &[std::path::PathBuf], json: bool) -> Result<()> {
    let sources = files
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(SourceFile {
                path: path.display().to_string(),
                content,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let completion = dispatch(config_flag, &analyze_prompt(&sources)).await?;
    let report = AnalysisReport::from_completion(&completion)
        .context("provider returned a malformed analysis report")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.summary);
    for issue in &report.issues {
        println!(
            "{}:{} [{}] {}",
            issue.file_name, issue.line, issue.severity, issue.message
        );
        if let Some(fix) = &issue.suggested_fix {
            println!("  fix: {fix}");
        }
    }
    Ok(())
}

/// Ask the active provider to fix one reported issue and print the
/// rewritten file.
pub async fn fix(
    config_flag: Option<&str>,
    file: &Path,
    line: u32,
    message: &str,
    direction: Option<&str>,
) -> Result<()> {
    let content =
        std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let completion = dispatch(config_flag, &fix_prompt(&content, line, message, direction)).await?;
    println!("{}", strip_code_fence(&completion));
    Ok(())
}

/// Ask the active provider to reformat a file and print the result.
pub async fn format(config_flag: Option<&str>, file: &Path) -> Result<()> {
    let content =
        std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let completion = dispatch(config_flag, &format_prompt(&content)).await?;
    println!("{}", strip_code_fence(&completion));
    Ok(())
}

async fn dispatch(config_flag: Option<&str>, prompt: &str) -> Result<String> {
    let config = resolve_config(config_flag)?;
    let session = Session::from_config(&config);
    let dispatcher = Dispatcher::new(Registry::from_config(&config));
    let response = dispatcher
        .send(session.active(), prompt, &session.credentials())
        .await?;
    Ok(response)
}

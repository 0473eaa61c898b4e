//! Implementation of the `tally rename` command.
//!
//! Responsibility: resolve the old and new names, confirm with the user,
//! call the core rename service over the local filesystem, and report.

use tracing::{debug, instrument};

use tally_adapters::LocalFilesystem;
use tally_core::application::{RenameReport, RenameRequest, RenameService};

use crate::{
    cli::{RenameArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `tally rename` command.
///
/// 1. Resolve the old name (flag, then `rename.old_name` from config)
/// 2. Confirm unless `--yes`, `--dry-run`, `--quiet` or JSON output
/// 3. Run the rename through [`RenameService`]
/// 4. Print the summary
#[instrument(skip_all, fields(new_name = %args.new_name))]
pub fn execute(
    args: RenameArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let ask = needs_confirmation(&args, &global, &output);
    let request = build_request(args, &config);
    debug!(
        root = %request.root.display(),
        old_name = %request.old_name,
        "Rename request resolved"
    );

    if ask {
        output.header(&format!(
            "Rename '{}' to '{}' in {}",
            request.old_name,
            request.new_name,
            request.root.display()
        ))?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    if request.dry_run {
        output.info("Dry run: no files will be modified")?;
    }

    let service = RenameService::new(Box::new(LocalFilesystem::new()));
    let report = service
        .rename_project(&request)
        .with_cli_context(|| "renaming project")?;

    if output.is_json() {
        output.json(&report)?;
    } else {
        print_summary(&report, &output)?;
    }

    Ok(())
}

fn build_request(args: RenameArgs, config: &AppConfig) -> RenameRequest {
    RenameRequest {
        root: args.root,
        old_name: args
            .old_name
            .unwrap_or_else(|| config.rename.old_name.clone()),
        new_name: args.new_name,
        dry_run: args.dry_run,
    }
}

fn needs_confirmation(args: &RenameArgs, global: &GlobalArgs, output: &OutputManager) -> bool {
    !(args.yes || args.dry_run || global.quiet || output.is_json())
}

fn print_summary(report: &RenameReport, output: &OutputManager) -> CliResult<()> {
    for file in report.files.iter().filter(|f| f.replacements_made > 0) {
        output.print(&format!(
            "  {} ({} replacements)",
            file.path.display(),
            file.replacements_made
        ))?;
    }

    output.header("Summary")?;
    output.print(&format!("Files processed: {}", report.files_processed()))?;
    output.print(&format!("Files modified: {}", report.files_modified()))?;
    output.print(&format!("Total replacements: {}", report.total_replacements()))?;
    if report.directory_renamed {
        output.print("Directories renamed: 1")?;
    }

    if report.files_processed() == 0 {
        output.warning("No target files found to process")?;
    } else if report.dry_run {
        output.info("This was a dry run. No files were actually modified.")?;
        output.info("Remove --dry-run to apply these changes.")?;
    } else {
        output.success("Project name updated successfully!")?;
    }

    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

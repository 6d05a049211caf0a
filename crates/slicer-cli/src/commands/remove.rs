//! `slicer remove`: delete a feature's generated files and print the
//! navigation clean-up the user still has to do.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use slicer_core::domain::{Feature, RemovalReport};

use super::{SliceInputs, confirm, print_navigation, resolve_inputs, slice_service};
use crate::{
    cli::{GlobalArgs, RemoveArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct RemoveOutput<'a> {
    removed_at: DateTime<Utc>,
    manifest: &'a PathBuf,
    feature: &'a Feature,
    #[serde(flatten)]
    report: &'a RemovalReport,
}

/// Removal deletes whatever sits at a template destination, including files
/// that `generate` skipped as collisions.
fn removal_prompt(feature: &Feature, projects: usize) -> String {
    format!(
        "Delete every existing file at a {} template destination in {projects} project(s), \
         hand-edited or not?",
        feature.component_prefix()
    )
}

#[instrument(skip_all, fields(prefix = args.feature.prefix.as_deref().unwrap_or("-")))]
pub fn execute(
    args: RemoveArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let SliceInputs {
        feature,
        projects,
        manifest,
    } = resolve_inputs(&args.feature, &args.projects, &config)?;

    if !confirm(&removal_prompt(&feature, projects.len()), args.yes, &output)? {
        return Err(CliError::Cancelled);
    }

    let service = slice_service(args.projects.templates.as_deref(), &config);
    let report = service.remove(&feature, &projects)?;
    info!(run_id = %report.run_id, removed = report.removed.len(), "Remove finished");

    if output.is_json() {
        return output.json(&RemoveOutput {
            removed_at: Utc::now(),
            manifest: &manifest,
            feature: &feature,
            report: &report,
        });
    }

    output.header(&format!("Removed {}:", feature))?;
    for path in &report.removed {
        output.print(&format!("  - {}", path.display()))?;
    }
    if !report.missing.is_empty() && !output.is_quiet() {
        output.info(&format!(
            "{} expected file(s) were already absent",
            report.missing.len()
        ))?;
        for path in &report.missing {
            output.print(&format!("    {}", path.display()))?;
        }
    }
    output.success(&format!("{} file(s) removed", report.removed.len()))?;
    print_navigation(&report.navigation, &output)
}

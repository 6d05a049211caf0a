//! `slicer generate`: instantiate a feature slice across the manifest's
//! projects.
//!
//! Responsibility: translate CLI arguments into a `Feature`, project list and
//! `GenerationOptions`, call the slice service, and display the report.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument};

use slicer_core::{
    application::{CollisionPolicy, GenerationOptions},
    domain::{Feature, GenerationReport},
};

use super::{SliceInputs, confirm, print_navigation, resolve_inputs, slice_service};
use crate::{
    cli::{GenerateArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// JSON document printed with `--output-format json`.
#[derive(Debug, Serialize)]
struct GenerateOutput<'a> {
    generated_at: DateTime<Utc>,
    manifest: &'a PathBuf,
    feature: &'a Feature,
    collision: CollisionPolicy,
    #[serde(flatten)]
    report: &'a GenerationReport,
}

#[instrument(skip_all, fields(prefix = args.feature.prefix.as_deref().unwrap_or("-")))]
pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let SliceInputs {
        feature,
        projects,
        manifest,
    } = resolve_inputs(&args.feature, &args.projects, &config)?;

    let options = GenerationOptions {
        collision: if args.overwrite {
            CollisionPolicy::Overwrite
        } else {
            config.generation.collision
        },
        dry_run: args.dry_run,
    };
    debug!(?options, "Generation options");

    let service = slice_service(args.projects.templates.as_deref(), &config);

    if options.collision == CollisionPolicy::Overwrite && !options.dry_run {
        let plan = service.plan(&feature, &projects, &options)?;
        if !plan.overwrites.is_empty() {
            for path in &plan.overwrites {
                output.warning(&format!("will replace {}", path.display()))?;
            }
            let prompt = format!("Replace {} existing file(s)?", plan.overwrites.len());
            if !confirm(&prompt, args.yes, &output)? {
                return Err(CliError::Cancelled);
            }
        }
    }

    let spinner = output.spinner(&format!("Generating {}...", feature.component_prefix()));
    let result = service.generate(&feature, &projects, &options);
    spinner.finish_and_clear();
    let report = result?;

    info!(run_id = %report.run_id, written = report.written.len(), "Generate finished");

    if output.is_json() {
        return output.json(&GenerateOutput {
            generated_at: Utc::now(),
            manifest: &manifest,
            feature: &feature,
            collision: options.collision,
            report: &report,
        });
    }

    print_report(&feature, &report, &output)
}

fn print_report(
    feature: &Feature,
    report: &GenerationReport,
    output: &OutputManager,
) -> CliResult<()> {
    let (title, marker) = if report.applied {
        (format!("Generated {}:", feature), "+")
    } else {
        (format!("Dry run for {}, nothing written:", feature), "~")
    };
    output.header(&title)?;
    for file in &report.written {
        output.print(&format!("  {marker} {}", file.path.display()))?;
    }
    for collision in &report.skipped {
        output.warning(&collision.to_string())?;
    }

    let summary = format!(
        "{} file(s) {}, {} skipped",
        report.written.len(),
        if report.applied { "written" } else { "planned" },
        report.skipped.len()
    );
    if report.applied {
        output.success(&summary)?;
    } else {
        output.info(&summary)?;
    }

    if let Some(navigation) = &report.navigation {
        print_navigation(navigation, output)?;
    }
    Ok(())
}

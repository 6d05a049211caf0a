//! `slicer list`: show the templates of the active store.

use slicer_core::application::{TemplateInfo, TemplateService};

use super::template_store;
use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = TemplateService::new(template_store(args.templates.as_deref(), &config));
    let templates = match args.kind {
        Some(kind) => service.for_kind(kind)?,
        None => service.list()?,
    };

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header(&format!("Templates ({}):", service.source()))?;
            let width = templates
                .iter()
                .map(|t| t.kind.as_str().len())
                .max()
                .unwrap_or(0);
            for t in &templates {
                output.print(&format!(
                    "  {:<width$}  {:<10}  {}",
                    t.kind.as_str(),
                    t.category.as_str(),
                    t.destination,
                ))?;
            }
            output.print(&format!("{} template(s)", templates.len()))?;
        }

        // Machine-readable formats bypass quiet mode.
        ListFormat::Json => output.json(&templates)?,

        ListFormat::List => {
            for t in &templates {
                println!("{}", t.store_path);
            }
        }

        ListFormat::Csv => print!("{}", to_csv(&templates)),
    }

    Ok(())
}

fn to_csv(templates: &[TemplateInfo]) -> String {
    let mut out = String::from("store_path,kind,category,destination\n");
    for t in templates {
        out.push_str(&format!(
            "{},{},{},{}\n",
            csv_field(&t.store_path),
            t.kind,
            t.category,
            csv_field(&t.destination)
        ));
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicer_core::domain::{ProjectKind, TemplateCategory};

    #[test]
    fn csv_has_header_and_rows() {
        let rows = vec![TemplateInfo {
            store_path: "Controllers/Form/Controllers/X.cs".into(),
            kind: ProjectKind::Controllers,
            category: TemplateCategory::Form,
            destination: "Controllers/X.cs".into(),
        }];
        let csv = to_csv(&rows);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("store_path,kind,category,destination"));
        assert_eq!(
            lines.next(),
            Some("Controllers/Form/Controllers/X.cs,Controllers,Form,Controllers/X.cs")
        );
    }

    #[test]
    fn csv_quotes_commas() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("plain"), "plain");
    }
}

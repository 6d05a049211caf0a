//! Everything the commands print to stdout goes through [`OutputManager`].

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// `--output-format` wins over `output.format` from the config; `auto`
    /// resolves to human on a TTY and plain otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => parse_format(&config.output.format),
            explicit => explicit,
        };
        let format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    /// Plain line on stdout, dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2713}', msg, |line| line.green().to_string())
    }

    /// Unlike the other markers this one ignores `--quiet`.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(&self.paint(&format!("\u{2717} {msg}"), |line| {
            line.red().bold().to_string()
        }))
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{26a0}', msg, |line| line.yellow().to_string())
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2139}', msg, |line| line.blue().to_string())
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term
            .write_line(&self.paint(text, |line| line.cyan().bold().to_string()))
    }

    fn marked(&self, symbol: char, msg: &str, style: fn(&str) -> String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term
            .write_line(&self.paint(&format!("{symbol} {msg}"), style))
    }

    fn paint(&self, line: &str, style: fn(&str) -> String) -> String {
        if self.no_color {
            line.to_owned()
        } else {
            style(line)
        }
    }

    /// Pretty JSON document on stdout. Printed even in quiet mode so
    /// pipelines always get a parseable result.
    pub fn json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        let rendered = serde_json::to_string_pretty(value)?;
        self.term.write_line(&rendered)?;
        Ok(())
    }

    /// Spinner on stderr for the duration of a run. Hidden when quiet, in
    /// JSON mode, or when stderr is not a terminal.
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.quiet || self.is_json() || !io::stderr().is_terminal() {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }

    /// Whether the user can be asked questions.
    pub fn is_interactive(&self) -> bool {
        !self.quiet && !self.is_json() && io::stdin().is_terminal() && io::stdout().is_terminal()
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Never `Auto`; that is settled in [`OutputManager::new`].
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

fn parse_format(value: &str) -> OutputFormat {
    match value.to_ascii_lowercase().as_str() {
        "human" => OutputFormat::Human,
        "plain" => OutputFormat::Plain,
        "json" => OutputFormat::Json,
        _ => OutputFormat::Auto,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(format: OutputFormat, quiet: bool, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
            log_file: None,
        }
    }

    fn human(quiet: bool, no_color: bool) -> OutputManager {
        OutputManager::new(
            &global(OutputFormat::Human, quiet, no_color),
            &AppConfig::default(),
        )
    }

    #[test]
    fn quiet_print_is_ok() {
        assert!(human(true, true).print("hello").is_ok());
    }

    #[test]
    fn error_is_written_in_quiet_mode() {
        assert!(human(true, true).error("something went wrong").is_ok());
    }

    #[test]
    fn no_color_flag_turns_colour_off() {
        assert!(human(false, false).supports_color());
        assert!(!human(false, true).supports_color());
    }

    #[test]
    fn plain_format_disables_color() {
        let out = OutputManager::new(
            &global(OutputFormat::Plain, false, false),
            &AppConfig::default(),
        );
        assert!(!out.supports_color());
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = OutputManager::new(&global(OutputFormat::Auto, false, false), &config);
        assert!(out.is_json());

        let flag_wins = OutputManager::new(&global(OutputFormat::Human, false, false), &config);
        assert_eq!(flag_wins.format(), OutputFormat::Human);
    }

    #[test]
    fn quiet_spinner_is_hidden() {
        assert!(human(true, true).spinner("working").is_hidden());
        assert!(!human(true, true).is_interactive());
    }

    #[test]
    fn parse_format_falls_back_to_auto() {
        assert_eq!(parse_format("JSON"), OutputFormat::Json);
        assert_eq!(parse_format("fancy"), OutputFormat::Auto);
    }
}

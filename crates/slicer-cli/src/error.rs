//! The CLI's error type.
//!
//! Every failure a command can hit ends up as a [`CliError`], which knows
//! its exit code and what the user can do about it.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use slicer_core::error::SlicerError;

pub use slicer_core::error::ErrorCategory as CoreCategory;

type BoxedCause = Box<dyn Error + Send + Sync>;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Flags or file contents that do not describe a valid run.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<BoxedCause>,
    },

    /// No project manifest where one was expected.
    #[error("Project manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    /// A manifest or feature file exists but cannot be used.
    #[error("Invalid file {}: {reason}", path.display())]
    InvalidFile { path: PathBuf, reason: String },

    /// The layered settings could not be read, merged, or saved.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<BoxedCause>,
    },

    /// Raised by `slicer-core` or one of the adapters.
    #[error("Slice generation failed: {0}")]
    Core(#[from] SlicerError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A report could not be rendered as JSON.
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    /// The user answered "no" at a confirmation prompt.
    #[error("Operation cancelled")]
    Cancelled,

    /// A prompt was needed but the binary was built without `interactive`.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        let message = source.to_string();
        CliError::IoError { message, source }
    }
}

impl CliError {
    /// Config failure wrapping an `anyhow` error from the config layer.
    pub fn config(message: impl Into<String>, err: anyhow::Error) -> Self {
        Self::ConfigError {
            message: format!("{}: {err:#}", message.into()),
            source: Some(err.into()),
        }
    }

    /// What the user can try next.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Rejected: {message}"),
                "See `slicer generate --help` for the accepted flags".into(),
            ],

            Self::ManifestNotFound { path } => vec![
                format!("No manifest at '{}'", path.display()),
                "Pass one explicitly: slicer generate --manifest path/to/slicer.toml".into(),
                "A manifest lists the target projects:".into(),
                "  [[projects]]".into(),
                "  root = \"ExpenseTracker.ClientShared\"".into(),
                "  kind = \"ClientShared\"".into(),
                "  namespace = \"ExpenseTracker.ClientShared\"".into(),
            ],

            Self::InvalidFile { path, .. } => vec![
                format!("Fix the TOML in '{}'", path.display()),
                "Project kinds: ClientShared, ServerDataServices, Controllers, \
                 MauiNativeApp, RazorComponents, ServiceContracts"
                    .into(),
            ],

            Self::ConfigError { .. } => vec![
                "Show the config file location: slicer config path".into(),
                "Recreate a default config: slicer init --force".into(),
                "Environment overrides use SLICER_<SECTION>__<KEY>".into(),
            ],

            Self::Core(inner) => inner.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("While {message}"),
                "Make sure the solution directory is writable".into(),
            ],

            Self::Render(_) => vec!["Retry with --output-format plain".into()],

            Self::Cancelled => vec!["Nothing was written or deleted".into()],

            Self::FeatureNotAvailable { feature } => vec![
                format!("This build of slicer lacks the '{feature}' feature"),
                format!("Reinstall with it: cargo install slicer-cli --features {feature}"),
                "Or pass --yes to skip the prompt".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::InvalidFile { .. } | Self::Cancelled => {
                ErrorCategory::UserError
            }
            Self::ManifestNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::Core(inner) => ErrorCategory::from(inner.category()),
            Self::IoError { .. } | Self::Render(_) => ErrorCategory::Internal,
        }
    }

    /// Process exit status; see the table in `main.rs`.
    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// Render the error for stderr: message, cause chain when `verbose`,
    /// suggestions, and a hint about `-v` otherwise.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_string() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("\u{2717} Error:", |t| t.red().bold().to_string()),
            paint(&self.to_string(), |t| t.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!(
                    "  {}\n",
                    paint(&format!("caused by: {err}"), |t| t.dimmed().to_string())
                ));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", |t| t.yellow().bold().to_string())
            ));
            for line in suggestions {
                out.push_str(&format!("  {line}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Run with -v / --verbose for more details.", |t| t
                    .dimmed()
                    .to_string())
            ));
        }

        out
    }

    /// Record the failure in the log before it is shown to the user.
    pub fn log(&self) {
        let category = self.category();
        let cause = self.source().map(ToString::to_string);
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, cause = cause.as_deref(), "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, cause = cause.as_deref(), "{self}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl ErrorCategory {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
        }
    }
}

impl From<CoreCategory> for ErrorCategory {
    fn from(category: CoreCategory) -> Self {
        match category {
            CoreCategory::Validation | CoreCategory::Template => Self::UserError,
            CoreCategory::NotFound => Self::NotFound,
            CoreCategory::Configuration => Self::Configuration,
            CoreCategory::Internal => Self::Internal,
        }
    }
}

/// Attach a "while doing X" message when lifting a foreign error.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, SlicerError> {
    /// Core errors already carry their context; the message is ignored.
    fn with_cli_context<F, S>(self, _f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(CliError::Core)
    }
}

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Which way a manual navigation edit goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationEdit {
    Add,
    Remove,
}

/// An edit a human has to make to the navigation-definition file.
///
/// Navigation files are never parsed or rewritten; this is the to-do item the
/// caller surfaces instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManualAction {
    pub edit: NavigationEdit,
    /// Route segment, e.g. `invoices`.
    pub route: String,
    /// Navigation-definition file, when a project hosting one was supplied.
    pub file: Option<PathBuf>,
    /// Markup to add or remove, verbatim.
    pub snippet: String,
}

impl fmt::Display for ManualAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.edit {
            NavigationEdit::Add => "Add",
            NavigationEdit::Remove => "Remove",
        };
        let preposition = match self.edit {
            NavigationEdit::Add => "to",
            NavigationEdit::Remove => "from",
        };
        match &self.file {
            Some(file) => write!(
                f,
                "{verb} route '{}' {preposition} {}: {}",
                self.route,
                file.display(),
                self.snippet
            ),
            None => write!(
                f,
                "{verb} route '{}' {preposition} the navigation definition: {}",
                self.route, self.snippet
            ),
        }
    }
}

/// Outcome of a navigation update or removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NavigationOutcome {
    /// Nothing to do, with the reason.
    NotApplicable { reason: String },
    /// A human has to edit the navigation file.
    ManualActionRequired(ManualAction),
}

impl NavigationOutcome {
    pub fn manual_action(&self) -> Option<&ManualAction> {
        match self {
            Self::ManualActionRequired(action) => Some(action),
            Self::NotApplicable { .. } => None,
        }
    }
}

impl fmt::Display for NavigationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable { reason } => write!(f, "No navigation changes: {reason}"),
            Self::ManualActionRequired(action) => action.fmt(f),
        }
    }
}

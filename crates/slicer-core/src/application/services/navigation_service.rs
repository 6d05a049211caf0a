//! Navigation Service - guidance for wiring a feature into app navigation.
//!
//! Advisory only. The navigation-definition file is never opened; the service
//! computes the route, logs what a human has to change and returns it as a
//! [`NavigationOutcome`].

use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use crate::{
    application::ApplicationError,
    domain::{
        Feature, ManualAction, NavigationEdit, NavigationOutcome, Pluralizer, Project,
        ProjectKind,
    },
    error::SlicerResult,
};

/// Navigation-definition file of the native app shell.
pub const DEFAULT_NAVIGATION_FILE: &str = "AppShell.xaml";

/// Composes navigation guidance for a feature.
#[derive(Debug, Clone)]
pub struct NavigationService {
    pluralizer: Pluralizer,
    navigation_file: PathBuf,
}

impl Default for NavigationService {
    fn default() -> Self {
        Self::new(Pluralizer::default(), DEFAULT_NAVIGATION_FILE)
    }
}

impl NavigationService {
    /// `navigation_file` is relative to the `MauiNativeApp` project root.
    pub fn new(pluralizer: Pluralizer, navigation_file: impl Into<PathBuf>) -> Self {
        Self {
            pluralizer,
            navigation_file: navigation_file.into(),
        }
    }

    /// Route segment for a feature: plural of the prefix, lower-cased.
    pub fn route_for(&self, feature: &Feature) -> String {
        self.pluralizer
            .pluralize(feature.component_prefix())
            .to_lowercase()
    }

    /// Guidance for registering the feature's listing page.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::NavigationGuidance`] when no usable route can be
    /// derived. The error is logged before it is returned.
    pub fn update(&self, feature: &Feature, projects: &[Project]) -> SlicerResult<NavigationOutcome> {
        let outcome = self.guidance(feature, projects)?;
        match &outcome {
            NavigationOutcome::ManualActionRequired(action) => info!(
                feature = %feature,
                route = %action.route,
                file = ?action.file,
                "Manual navigation update required: {}",
                action
            ),
            NavigationOutcome::NotApplicable { .. } => {
                info!(feature = %feature, "Feature has no listing, navigation unchanged")
            }
        }
        Ok(outcome)
    }

    /// Same outcome as [`NavigationService::update`] for a run that wrote
    /// nothing, so it is only logged at DEBUG.
    pub fn preview(&self, feature: &Feature, projects: &[Project]) -> SlicerResult<NavigationOutcome> {
        let outcome = self.guidance(feature, projects)?;
        if let Some(action) = outcome.manual_action() {
            debug!(feature = %feature, route = %action.route, "Dry run, navigation would need: {}", action);
        }
        Ok(outcome)
    }

    fn guidance(&self, feature: &Feature, projects: &[Project]) -> SlicerResult<NavigationOutcome> {
        if !feature.has_listing() {
            return Ok(NavigationOutcome::NotApplicable {
                reason: format!("{} has no listing page", feature.component_prefix()),
            });
        }

        let action = self
            .compose(feature, projects, NavigationEdit::Add)
            .inspect_err(|e| error!(feature = %feature, error = %e, "Navigation guidance failed"))?;
        Ok(NavigationOutcome::ManualActionRequired(action))
    }

    /// Guidance for unregistering the feature. Never fails.
    pub fn remove(&self, feature: &Feature, projects: &[Project]) -> NavigationOutcome {
        if !feature.has_listing() {
            warn!(feature = %feature, "Feature has no listing, navigation unchanged");
            return NavigationOutcome::NotApplicable {
                reason: format!("{} has no listing page", feature.component_prefix()),
            };
        }

        match self.compose(feature, projects, NavigationEdit::Remove) {
            Ok(action) => {
                warn!(
                    feature = %feature,
                    route = %action.route,
                    file = ?action.file,
                    "Manual navigation removal required: {}",
                    action
                );
                NavigationOutcome::ManualActionRequired(action)
            }
            Err(e) => {
                warn!(feature = %feature, error = %e, "Could not compose navigation removal guidance");
                NavigationOutcome::NotApplicable {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn compose(
        &self,
        feature: &Feature,
        projects: &[Project],
        edit: NavigationEdit,
    ) -> Result<ManualAction, ApplicationError> {
        let route = self.route_for(feature);
        validate_route(&route).map_err(|reason| ApplicationError::NavigationGuidance {
            feature: feature.component_prefix().to_string(),
            reason,
        })?;

        let file = projects
            .iter()
            .find(|p| p.kind() == ProjectKind::MauiNativeApp)
            .map(|p| p.root_path().join(&self.navigation_file));

        let prefix = feature.component_prefix();
        let snippet = format!(
            r#"<ShellContent Title="{prefix}" Route="{route}" ContentTemplate="{{DataTemplate local:{prefix}ListPage}}" />"#
        );

        Ok(ManualAction {
            edit,
            route,
            file,
            snippet,
        })
    }
}

fn validate_route(route: &str) -> Result<(), String> {
    if route.is_empty() {
        return Err("derived route segment is empty".into());
    }
    if let Some(c) = route
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(format!("route segment '{route}' contains '{c}'"));
    }
    Ok(())
}

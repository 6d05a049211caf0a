//! Slice Service - the template instantiation engine.
//!
//! Workflow for one feature:
//! 1. Resolve the substitution map
//! 2. Select templates by project kind and enabled category
//! 3. Substitute paths and contents, validating every file
//! 4. Check destinations against the collision policy
//! 5. Write everything, or nothing
//!
//! Steps 1-4 never touch the disk beyond existence checks, so a validation
//! error leaves the project trees exactly as they were. Step 5 is not a
//! filesystem transaction: on an I/O error the files already written in this
//! run are rolled back on a best-effort basis.
//!
//! The engine does not lock anything. Two runs against the same project tree
//! must be serialized by the caller.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError, NavigationService,
        ports::{Filesystem, TemplateStore},
    },
    domain::{
        DestinationCollision, DomainError, Feature, GeneratedFile, GenerationPlan,
        GenerationReport, Project, RelativePath, RemovalReport, SubstitutionMap, TemplateFile,
        TokenResolver,
    },
    error::{SlicerError, SlicerResult},
};

/// What to do when a destination file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Leave the existing file alone and report it.
    #[default]
    Skip,
    /// Replace the existing file.
    Overwrite,
}

/// Per-run options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    pub collision: CollisionPolicy,
    /// Plan and report, write nothing.
    pub dry_run: bool,
}

impl GenerationOptions {
    pub fn overwrite() -> Self {
        Self {
            collision: CollisionPolicy::Overwrite,
            ..Self::default()
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// A write that happened during the current run, for rollback.
enum Written {
    Created(PathBuf),
    Replaced { path: PathBuf, previous: String },
}

/// Template instantiation engine.
pub struct SliceService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
    navigation: NavigationService,
}

impl SliceService {
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            store,
            filesystem,
            navigation: NavigationService::default(),
        }
    }

    /// Replace the navigation service used by [`SliceService::generate`] and
    /// [`SliceService::remove`].
    pub fn with_navigation(mut self, navigation: NavigationService) -> Self {
        self.navigation = navigation;
        self
    }

    pub fn navigation(&self) -> &NavigationService {
        &self.navigation
    }

    /// Compute every file of the batch and its collision status. Writes nothing.
    ///
    /// # Errors
    ///
    /// - [`DomainError::UnsupportedType`] for a key or select-list tag without spelling
    /// - [`DomainError::UnresolvedToken`] for the first template with an unmapped token
    /// - [`DomainError::DuplicatePath`] when two templates share a destination
    /// - [`ApplicationError::NoTemplates`] when nothing is selected
    #[instrument(skip_all, fields(feature = %feature, projects = projects.len()))]
    pub fn plan(
        &self,
        feature: &Feature,
        projects: &[Project],
        options: &GenerationOptions,
    ) -> SlicerResult<GenerationPlan> {
        let files = self.substitute_all(feature, projects)?;

        let mut plan = GenerationPlan::default();
        for file in files {
            if !self.filesystem.exists(&file.path) {
                plan.files.push(file);
                continue;
            }
            match options.collision {
                CollisionPolicy::Skip => {
                    debug!(path = %file.path.display(), "Destination exists, skipping");
                    plan.collisions.push(DestinationCollision {
                        path: file.path,
                        template: file.template,
                    });
                }
                CollisionPolicy::Overwrite => {
                    debug!(path = %file.path.display(), "Destination exists, overwriting");
                    plan.overwrites.push(file.path.clone());
                    plan.files.push(file);
                }
            }
        }

        info!(
            files = plan.files.len(),
            collisions = plan.collisions.len(),
            overwrites = plan.overwrites.len(),
            "Generation planned"
        );
        Ok(plan)
    }

    /// Instantiate every applicable template for `feature` into `projects`.
    ///
    /// All-or-nothing with respect to validation: either every template
    /// substitutes cleanly and the batch is written, or nothing is written.
    /// Existing destinations are skipped or replaced per `options.collision`.
    #[instrument(skip_all, fields(feature = %feature, run_id = tracing::field::Empty))]
    pub fn instantiate(
        &self,
        feature: &Feature,
        projects: &[Project],
        options: &GenerationOptions,
    ) -> SlicerResult<GenerationReport> {
        let run_id = Uuid::new_v4();
        tracing::Span::current().record("run_id", tracing::field::display(run_id));

        let plan = self.plan(feature, projects, options)?;

        for collision in &plan.collisions {
            warn!(path = %collision.path.display(), "{}", collision);
        }

        if options.dry_run {
            info!(files = plan.files.len(), "Dry run, nothing written");
            return Ok(GenerationReport {
                run_id,
                written: plan.files,
                skipped: plan.collisions,
                applied: false,
                navigation: None,
            });
        }

        self.write_batch(&plan.files)?;

        info!(
            written = plan.files.len(),
            skipped = plan.collisions.len(),
            "Feature generated"
        );
        Ok(GenerationReport {
            run_id,
            written: plan.files,
            skipped: plan.collisions,
            applied: true,
            navigation: None,
        })
    }

    /// Instantiate, then produce navigation guidance.
    ///
    /// A navigation failure is returned to the caller but generated files are
    /// kept: guidance is advisory, not part of the batch.
    pub fn generate(
        &self,
        feature: &Feature,
        projects: &[Project],
        options: &GenerationOptions,
    ) -> SlicerResult<GenerationReport> {
        let mut report = self.instantiate(feature, projects, options)?;
        let navigation = if report.applied {
            self.navigation.update(feature, projects)
        } else {
            self.navigation.preview(feature, projects)
        };
        if navigation.is_err() && report.applied {
            warn!(
                files = report.written.len(),
                "Generated files were kept despite the navigation failure"
            );
        }
        report.navigation = Some(navigation?);
        Ok(report)
    }

    /// Delete the files `feature` would generate, then emit navigation
    /// removal guidance.
    ///
    /// Missing files are reported, not errors. Navigation guidance never fails.
    #[instrument(skip_all, fields(feature = %feature, run_id = tracing::field::Empty))]
    pub fn remove(&self, feature: &Feature, projects: &[Project]) -> SlicerResult<RemovalReport> {
        let run_id = Uuid::new_v4();
        tracing::Span::current().record("run_id", tracing::field::display(run_id));

        let files = self.substitute_all(feature, projects)?;

        let mut removed = Vec::new();
        let mut missing = Vec::new();
        for file in files {
            if self.filesystem.exists(&file.path) {
                self.filesystem.remove_file(&file.path)?;
                debug!(path = %file.path.display(), "Removed");
                removed.push(file.path);
            } else {
                missing.push(file.path);
            }
        }

        info!(
            removed = removed.len(),
            missing = missing.len(),
            "Feature files removed"
        );

        let navigation = self.navigation.remove(feature, projects);
        Ok(RemovalReport {
            run_id,
            removed,
            missing,
            navigation,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Resolve, select and substitute the whole batch.
    fn substitute_all(
        &self,
        feature: &Feature,
        projects: &[Project],
    ) -> SlicerResult<Vec<GeneratedFile>> {
        feature.validate()?;
        let feature_map = TokenResolver::resolve(feature)?;
        let templates = self.store.templates()?;
        debug!(templates = templates.len(), source = %self.store.source(), "Templates loaded");

        let mut files = Vec::new();
        let mut destinations = BTreeSet::new();

        for project in projects {
            let map = TokenResolver::for_project(&feature_map, project)?;
            for template in templates
                .iter()
                .filter(|t| t.kind() == project.kind() && feature.enables(t.category()))
            {
                let file = substitute(template, &map, project)?;
                if !destinations.insert(file.path.clone()) {
                    return Err(DomainError::DuplicatePath {
                        path: file.path.display().to_string(),
                    }
                    .into());
                }
                files.push(file);
            }
        }

        if files.is_empty() {
            return Err(ApplicationError::NoTemplates {
                feature: feature.to_string(),
            }
            .into());
        }
        Ok(files)
    }

    /// Write the batch, rolling back this run's writes on the first failure.
    fn write_batch(&self, files: &[GeneratedFile]) -> SlicerResult<()> {
        // Previous contents are captured up front so a read failure aborts
        // before anything is written.
        let mut previous: HashMap<&PathBuf, String> = HashMap::new();
        for file in files {
            if self.filesystem.exists(&file.path) {
                previous.insert(&file.path, self.filesystem.read_to_string(&file.path)?);
            }
        }

        let mut journal = Vec::with_capacity(files.len());
        for file in files {
            if let Err(e) = self.write_one(file) {
                warn!(path = %file.path.display(), error = %e, "Write failed, attempting rollback");
                self.rollback(journal);
                return Err(e);
            }
            journal.push(match previous.remove(&file.path) {
                Some(previous) => Written::Replaced {
                    path: file.path.clone(),
                    previous,
                },
                None => Written::Created(file.path.clone()),
            });
        }
        Ok(())
    }

    fn write_one(&self, file: &GeneratedFile) -> SlicerResult<()> {
        if let Some(parent) = file.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&file.path, &file.content)
    }

    /// Best-effort rollback, newest write first. Failures are logged only.
    fn rollback(&self, journal: Vec<Written>) {
        let mut failures = 0usize;
        for entry in journal.into_iter().rev() {
            let (path, result) = match &entry {
                Written::Created(path) => (path, self.filesystem.remove_file(path)),
                Written::Replaced { path, previous } => {
                    (path, self.filesystem.write_file(path, previous))
                }
            };
            if let Err(e) = result {
                failures += 1;
                let e = match e {
                    SlicerError::Application(ApplicationError::FilesystemError {
                        reason, ..
                    }) => ApplicationError::RollbackFailed {
                        path: path.clone(),
                        reason,
                    },
                    other => ApplicationError::RollbackFailed {
                        path: path.clone(),
                        reason: other.to_string(),
                    },
                };
                warn!(error = %e, "Rollback step failed");
            }
        }
        if failures == 0 {
            info!("Rollback successful");
        }
    }
}

/// Substitute one template for one project.
fn substitute(
    template: &TemplateFile,
    map: &SubstitutionMap,
    project: &Project,
) -> SlicerResult<GeneratedFile> {
    let name = template.store_path();
    let destination = map.substitute(&template.destination().to_slash_string(), name)?;
    let relative = RelativePath::try_from(destination.as_str())?;
    let content = map.substitute(template.content(), name)?;
    let path = project.resolve(&relative);

    Ok(GeneratedFile::new(
        template.kind(),
        template.category(),
        name,
        relative,
        path,
        content,
    )?)
}

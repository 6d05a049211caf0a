pub mod common;
pub mod feature;
pub mod generated;
pub mod navigation;
pub mod project;
pub mod template;

pub use crate::domain::DomainError;
pub use feature::{Feature, FeatureBuilder};
pub use generated::{
    DestinationCollision, GeneratedFile, GenerationPlan, GenerationReport, RemovalReport,
};
pub use navigation::{ManualAction, NavigationEdit, NavigationOutcome};
pub use project::Project;
pub use template::TemplateFile;

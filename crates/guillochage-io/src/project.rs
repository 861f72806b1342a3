//! Project files.
//!
//! A project is the workpiece shape plus the layer stack, stored as pretty
//! printed JSON: `{"version": "1.0", "forme": {...}, "calques": [...]}`.

use crate::error::{ProjectError, ProjectResult};
use guillochage_core::{Layer, LayerStack, ShapeDescriptor};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Project file format version
pub const PROJECT_FORMAT_VERSION: &str = "1.0";

/// Usual extension of project files.
pub const PROJECT_EXTENSION: &str = "guillo";

fn default_version() -> String {
    PROJECT_FORMAT_VERSION.to_string()
}

/// Complete project state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(default = "default_version")]
    pub version: String,
    /// Workpiece outline.
    #[serde(default)]
    pub forme: ShapeDescriptor,
    /// Layers, bottom first.
    #[serde(default)]
    pub calques: Vec<Layer>,
}

impl Default for ProjectFile {
    fn default() -> Self {
        Self::new(ShapeDescriptor::default(), vec![Layer::new("Calque 1", "#000000")])
    }
}

impl ProjectFile {
    pub fn new(forme: ShapeDescriptor, calques: Vec<Layer>) -> Self {
        Self {
            version: default_version(),
            forme,
            calques,
        }
    }

    /// Snapshot of a shape and an editable layer stack.
    pub fn from_stack(forme: ShapeDescriptor, stack: &LayerStack) -> Self {
        Self::new(forme, stack.layers().to_vec())
    }

    /// Editable stack built from the stored layers.
    pub fn layer_stack(&self) -> LayerStack {
        LayerStack::from_layers(self.calques.clone())
    }

    /// Parses a project and checks its format version.
    pub fn from_json(json: &str) -> ProjectResult<Self> {
        let project: ProjectFile = serde_json::from_str(json)?;
        project.check_version()?;
        Ok(project)
    }

    pub fn to_json(&self) -> ProjectResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load project from file
    pub fn load(path: impl AsRef<Path>) -> ProjectResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let project = Self::from_json(&content)?;
        debug!(
            path = %path.display(),
            layers = project.calques.len(),
            "project loaded"
        );
        Ok(project)
    }

    /// Save project to file
    pub fn save(&self, path: impl AsRef<Path>) -> ProjectResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), "project saved");
        Ok(())
    }

    /// Files of the same major version are accepted.
    fn check_version(&self) -> ProjectResult<()> {
        let major = self.version.split('.').next().unwrap_or_default();
        if major.trim() == "1" {
            Ok(())
        } else {
            Err(ProjectError::UnsupportedVersion(self.version.clone()))
        }
    }
}

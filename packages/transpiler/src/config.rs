//! Transpiler configuration
//!
//! Read from the `transpiler` section of a project file, or built in code.

use crate::logging::{ConsoleLogger, LogLevel};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Unrecognized directives are never configurable: they always fail the
/// query, so an unknown key here is rejected rather than ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TranspilerConfig {
    pub log_level: LogLevel,
}

#[derive(Debug, Deserialize)]
struct ProjectFile {
    #[serde(default)]
    transpiler: TranspilerConfig,
}

impl TranspilerConfig {
    /// Loads the `transpiler` section of a JSON project file. A missing section
    /// yields the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        let project: ProjectFile = serde_json::from_str(content)?;
        Ok(project.transpiler)
    }

    pub fn logger(&self) -> ConsoleLogger {
        ConsoleLogger::new(self.log_level)
    }
}

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

use crate::limits::DEFAULT_ANNOTATIONS;

fn default_annotations() -> Vec<String> {
    DEFAULT_ANNOTATIONS.iter().map(|s| (*s).to_string()).collect()
}

/// Resolver settings for one build invocation.
///
/// ```json
/// { "annotations": ["com.example.BindView"] }
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResolverConfig {
    /// Fully qualified annotation type names whose usages are scanned.
    #[serde(default = "default_annotations")]
    pub annotations: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            annotations: default_annotations(),
        }
    }
}

impl ResolverConfig {
    pub fn from_json_str(source: &str) -> Result<Self> {
        let mut config: ResolverConfig =
            serde_json::from_str(source).context("failed to parse resolver config")?;
        config.normalize()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read resolver config {}", path.display()))?;
        Self::from_json_str(&source)
            .with_context(|| format!("invalid resolver config {}", path.display()))
    }

    /// Trims names, drops duplicates (first occurrence kept) and rejects an
    /// empty set.
    fn normalize(&mut self) -> Result<()> {
        let mut seen = Vec::with_capacity(self.annotations.len());
        for name in self.annotations.drain(..) {
            let name = name.trim().to_string();
            if name.is_empty() {
                bail!("annotation names must not be empty");
            }
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        if seen.is_empty() {
            bail!("at least one annotation type must be configured");
        }
        self.annotations = seen;
        Ok(())
    }
}

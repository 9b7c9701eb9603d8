use crate::capability::{build_default_capabilities, CapabilitySet};
use crate::path::VirtualPath;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default, rename = "backend")]
    pub backends: Vec<Backend>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Defaults {
    #[serde(default)]
    pub capabilities: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Backend {
    pub name: String,
    #[serde(default)]
    pub root: VirtualPath,
    #[serde(default)]
    pub capabilities: Option<String>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CapabilitySource {
    Backend,
    Defaults,
    System,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ResolvedBackend {
    #[serde(rename = "backend")]
    pub name: String,
    pub root: VirtualPath,
    pub capabilities: CapabilitySet,
    pub source: CapabilitySource,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Ok(serde_json::from_str(&raw)?)
        } else {
            Ok(toml::from_str(&raw)?)
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.backends.is_empty() { anyhow::bail!("at least one [[backend]] must be configured"); }
        let mut seen = HashSet::new();
        for b in &self.backends {
            if b.name.trim().is_empty() { anyhow::bail!("backend name must not be empty"); }
            if !seen.insert(b.name.as_str()) { anyhow::bail!("duplicate backend name: {}", b.name); }
        }
        self.resolve().map(|_| ())
    }

    /// Capability precedence: backend string, then `[defaults]`, then every capability.
    pub fn resolve(&self) -> anyhow::Result<Vec<ResolvedBackend>> {
        let defaults = build_default_capabilities(self.defaults.capabilities.as_deref())
            .context("parsing [defaults] capabilities")?;
        self.backends
            .iter()
            .map(|b| {
                let own = build_default_capabilities(b.capabilities.as_deref())
                    .with_context(|| format!("parsing capabilities for backend `{}`", b.name))?;
                let (capabilities, source) = match (own, &defaults) {
                    (Some(set), _) => (set, CapabilitySource::Backend),
                    (None, Some(set)) => (set.clone(), CapabilitySource::Defaults),
                    (None, None) => (CapabilitySet::all(), CapabilitySource::System),
                };
                Ok(ResolvedBackend { name: b.name.clone(), root: b.root.clone(), capabilities, source })
            })
            .collect()
    }
}

pub fn canonical_path(path: &Path) -> anyhow::Result<PathBuf> {
    let c = dunce::canonicalize(path)?;
    Ok(c)
}

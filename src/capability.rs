//! File-manager capabilities and their resolution from configuration strings.

use crate::errors::{FmError, FmResult};
use serde::Serialize;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// A single operation a backend may permit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum Capability {
    Select,
    Delete,
    Rename,
    Download,
    Upload,
    Create,
    CreateFolder,
    Replace,
    Edit,
    View,
    Info,
}

impl Capability {
    /// Every capability, in canonical order.
    pub const ALL: [Capability; 11] = [
        Capability::Select,
        Capability::Delete,
        Capability::Rename,
        Capability::Download,
        Capability::Upload,
        Capability::Create,
        Capability::CreateFolder,
        Capability::Replace,
        Capability::Edit,
        Capability::View,
        Capability::Info,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Select => "select",
            Capability::Delete => "delete",
            Capability::Rename => "rename",
            Capability::Download => "download",
            Capability::Upload => "upload",
            Capability::Create => "create",
            Capability::CreateFolder => "createfolder",
            Capability::Replace => "replace",
            Capability::Edit => "edit",
            Capability::View => "view",
            Capability::Info => "info",
        }
    }
}

impl FromStr for Capability {
    type Err = FmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let lowered = token.to_lowercase();
        Capability::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| FmError::InvalidCapabilityToken(token.to_string()))
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, duplicate-free capabilities. Order is first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CapabilitySet {
    caps: Vec<Capability>,
}

impl CapabilitySet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Capability::ALL.into_iter().collect()
    }

    pub fn contains(&self, cap: Capability) -> bool {
        self.caps.contains(&cap)
    }

    pub fn ensure(&self, cap: Capability) -> FmResult<()> {
        if self.contains(cap) {
            Ok(())
        } else {
            Err(FmError::CapabilityDenied(cap))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.caps.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.caps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caps.is_empty()
    }

    pub fn as_slice(&self) -> &[Capability] {
        &self.caps
    }

    fn insert(&mut self, cap: Capability) {
        if !self.contains(cap) {
            self.caps.push(cap);
        }
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut set = Self::empty();
        for cap in iter {
            set.insert(cap);
        }
        set
    }
}

impl<'a> IntoIterator for &'a CapabilitySet {
    type Item = Capability;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Capability>>;

    fn into_iter(self) -> Self::IntoIter {
        self.caps.iter().copied()
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cap) in self.caps.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(cap.as_str())?;
        }
        Ok(())
    }
}

/// Parses a comma-separated capability list.
///
/// `None` or a blank string yields `Ok(None)`: the caller should fall back to
/// its default set. Any unrecognised token fails the whole list.
pub fn build_default_capabilities(raw: Option<&str>) -> FmResult<Option<CapabilitySet>> {
    let raw = match raw.map(str::trim) {
        Some(r) if !r.is_empty() => r,
        _ => return Ok(None),
    };
    let set = raw
        .split(',')
        .map(Capability::from_str)
        .collect::<FmResult<CapabilitySet>>()?;
    tracing::debug!(raw, resolved = %set, "resolved capability set");
    Ok(Some(set))
}

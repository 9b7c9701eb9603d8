//! Virtual filesystem paths.
//!
//! A [`VirtualPath`] always ends in a single `/`, never contains `//`, and
//! starts with `/` only when the seed it was built from did. The empty path
//! `""` has no segments and therefore no separator at all.

use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const SEPARATOR: char = '/';

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathBuilder {
    buf: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: &str) -> Self {
        let mut builder = Self::new();
        if seed.starts_with(SEPARATOR) {
            builder.buf.push(SEPARATOR);
        }
        builder.push_segments(seed);
        builder
    }

    /// Appends `segment`, ignoring separators around it. Empty input is a no-op.
    pub fn add_folder(&mut self, segment: &str) -> &mut Self {
        if segment.trim_matches(SEPARATOR).is_empty() {
            tracing::trace!(segment, "ignoring empty path segment");
            return self;
        }
        self.push_segments(segment);
        self
    }

    /// Consuming form of [`add_folder`](Self::add_folder) for one-expression builds.
    pub fn with_folder(mut self, segment: &str) -> Self {
        self.add_folder(segment);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn build(self) -> VirtualPath {
        VirtualPath(self.buf)
    }

    fn push_segments(&mut self, raw: &str) {
        for piece in raw.split(SEPARATOR).filter(|p| !p.is_empty()) {
            self.buf.push_str(piece);
            self.buf.push(SEPARATOR);
        }
    }
}

impl From<&str> for PathBuilder {
    fn from(seed: &str) -> Self {
        Self::from_seed(seed)
    }
}

impl fmt::Display for PathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct VirtualPath(String);

impl VirtualPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_absolute(&self) -> bool {
        self.0.starts_with(SEPARATOR)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.split(SEPARATOR).filter(|s| !s.is_empty())
    }

    /// The path without its last segment, or `None` for `""` and `"/"`.
    pub fn parent(&self) -> Option<VirtualPath> {
        let body = self.0.strip_suffix(SEPARATOR)?;
        if body.is_empty() {
            return None;
        }
        let cut = body.rfind(SEPARATOR).map(|i| i + 1).unwrap_or(0);
        Some(VirtualPath(body[..cut].to_string()))
    }
}

impl FromStr for VirtualPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PathBuilder::from_seed(s).build())
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VirtualPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<VirtualPath> for String {
    fn from(p: VirtualPath) -> Self {
        p.0
    }
}

impl From<PathBuilder> for VirtualPath {
    fn from(b: PathBuilder) -> Self {
        b.build()
    }
}

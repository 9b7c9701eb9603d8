//! Path shaping and capability resolution for file-manager storage backends.

pub mod capability;
pub mod config;
pub mod errors;
pub mod logging;
pub mod path;
pub mod security;

pub use capability::{build_default_capabilities, Capability, CapabilitySet};
pub use errors::{FmError, FmResult};
pub use path::{PathBuilder, VirtualPath};

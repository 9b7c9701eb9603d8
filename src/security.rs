use crate::capability::{Capability, CapabilitySet};
use crate::errors::FmResult;

/// Gate for a single file-manager operation.
pub fn require_capability(caps: &CapabilitySet, op: Capability) -> FmResult<()> {
    caps.ensure(op).map_err(|e| {
        tracing::warn!(op = %op, allowed = %caps, "capability denied");
        e
    })
}

/// Stops at the first operation the set does not grant.
pub fn require_all(caps: &CapabilitySet, ops: &[Capability]) -> FmResult<()> {
    ops.iter().try_for_each(|op| require_capability(caps, *op))
}

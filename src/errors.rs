use crate::capability::Capability;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FmError {
    #[error("invalid capability token: `{0}`")]
    InvalidCapabilityToken(String),
    #[error("capability denied: {0}")]
    CapabilityDenied(Capability),
}

impl FmError {
    pub fn code(&self) -> &'static str {
        match self {
            FmError::InvalidCapabilityToken(_) => "InvalidCapabilityToken",
            FmError::CapabilityDenied(_) => "CapabilityDenied",
        }
    }
}

pub type FmResult<T> = Result<T, FmError>;

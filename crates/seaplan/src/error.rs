use std::fmt;

/// Error type shared by geometry and configuration entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeaError {
    InvalidPolygon { reason: String },
    InvalidConfiguration { reason: String },
}

impl SeaError {
    pub(crate) fn polygon(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }

    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SeaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPolygon { reason } => write!(f, "invalid polygon: {reason}"),
            Self::InvalidConfiguration { reason } => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for SeaError {}

#![warn(missing_docs)]
//! Optrace specific error structures
use std::{error::Error, fmt::Display};

/// Optrace application specific Result type
pub type OptResult<T> = std::result::Result<T, OptraceError>;

/// Errors that can be returned by various optrace functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptraceError {
    /// a material name could not be resolved against the glass catalog
    UnknownMaterial(String),
    /// errors while evaluating a dispersion model (e.g. wavelength outside the valid range)
    Dispersion(String),
    /// a ray does not intersect with a surface
    NoIntersection(String),
    /// the angle of incidence exceeds the critical angle for the given index ratio
    TotalInternalReflection(String),
    /// a ray direction vector of zero length was given
    DegenerateRayDirection(String),
    /// an invalid surface sequence (e.g. a negative thickness) was given
    SurfaceOrder(String),
    /// errors while setting up a [`SequentialSystem`](crate::sequential_system::SequentialSystem)
    SystemSetup(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for OptraceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMaterial(m) => {
                write!(f, "UnknownMaterial:{m}")
            }
            Self::Dispersion(m) => {
                write!(f, "Dispersion:{m}")
            }
            Self::NoIntersection(m) => {
                write!(f, "NoIntersection:{m}")
            }
            Self::TotalInternalReflection(m) => {
                write!(f, "TotalInternalReflection:{m}")
            }
            Self::DegenerateRayDirection(m) => {
                write!(f, "DegenerateRayDirection:{m}")
            }
            Self::SurfaceOrder(m) => {
                write!(f, "SurfaceOrder:{m}")
            }
            Self::SystemSetup(m) => {
                write!(f, "SystemSetup:{m}")
            }
            Self::Other(m) => write!(f, "Optrace Error:Other:{m}"),
        }
    }
}
impl Error for OptraceError {}

impl std::convert::From<String> for OptraceError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn from() {
        let error = OptraceError::from("test".to_string());
        assert_eq!(error, OptraceError::Other("test".to_string()));
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", OptraceError::UnknownMaterial("test".to_string())),
            "UnknownMaterial:test"
        );
        assert_eq!(
            format!("{}", OptraceError::Dispersion("test".to_string())),
            "Dispersion:test"
        );
        assert_eq!(
            format!("{}", OptraceError::NoIntersection("test".to_string())),
            "NoIntersection:test"
        );
        assert_eq!(
            format!(
                "{}",
                OptraceError::TotalInternalReflection("test".to_string())
            ),
            "TotalInternalReflection:test"
        );
        assert_eq!(
            format!("{}", OptraceError::DegenerateRayDirection("test".to_string())),
            "DegenerateRayDirection:test"
        );
        assert_eq!(
            format!("{}", OptraceError::SurfaceOrder("test".to_string())),
            "SurfaceOrder:test"
        );
        assert_eq!(
            format!("{}", OptraceError::SystemSetup("test".to_string())),
            "SystemSetup:test"
        );
        assert_eq!(
            format!("{}", OptraceError::Other("test".to_string())),
            "Optrace Error:Other:test"
        );
    }
    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", OptraceError::UnknownMaterial("test".to_string())),
            "UnknownMaterial(\"test\")"
        );
    }
}

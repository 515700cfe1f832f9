use failure::Fail;

use crate::types::*;

#[derive(Debug, Fail)]
pub enum RenderError {
    #[fail(display = "division of a vector by near-zero scalar {}", divisor)]
    DegenerateDivision { divisor: Float },

    #[fail(display = "sphere radius must be positive and finite, got {}", radius)]
    InvalidGeometry { radius: Float },

    #[fail(display = "degenerate camera: {}", reason)]
    DegenerateCamera { reason: String },

    #[fail(display = "invalid configuration: {}", reason)]
    InvalidConfig { reason: String },
}

impl RenderError {
    pub fn camera<S: Into<String>>(reason: S) -> Self {
        RenderError::DegenerateCamera { reason: reason.into() }
    }

    pub fn config<S: Into<String>>(reason: S) -> Self {
        RenderError::InvalidConfig { reason: reason.into() }
    }
}

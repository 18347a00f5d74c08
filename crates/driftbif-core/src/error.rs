use thiserror::Error;

/// Errors raised at the public boundary, before any simulation work begins.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// A caller-supplied parameter is out of its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl SimulationError {
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Rejects a non-finite or non-positive scalar parameter.
pub fn require_positive(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SimulationError::invalid_parameter(
            name,
            format!("must be a positive finite number, got {value}"),
        ));
    }
    Ok(())
}

/// Rejects a non-finite or negative scalar parameter (zero allowed).
pub fn require_non_negative(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SimulationError::invalid_parameter(
            name,
            format!("must be a non-negative finite number, got {value}"),
        ));
    }
    Ok(())
}

/// Rejects a zero count. Step and sample counts must be at least one.
pub fn require_positive_count(name: &'static str, value: usize) -> Result<(), SimulationError> {
    if value == 0 {
        return Err(SimulationError::invalid_parameter(name, "must be positive"));
    }
    Ok(())
}

use crate::domain::waterfall::value_objects::ZoomDirection;

/// Layout and zoom errors. All are surfaced synchronously to the caller;
/// the computations are deterministic, so there is no retry path.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// The observed value range collapsed to a point, so no meaningful
    /// scale factor exists. Callers should render an empty-state chart.
    DegenerateRange { min_value: f64, max_value: f64 },
    /// Strict-mode zoom step requested while already resting at a bound.
    InvalidZoomRequest { level: f64, direction: ZoomDirection },
    /// Layout export could not be serialized.
    Serialization(String),
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::DegenerateRange { min_value, max_value } => {
                write!(f, "Degenerate Range: min {} == max {}", min_value, max_value)
            }
            ChartError::InvalidZoomRequest { level, direction } => {
                write!(f, "Invalid Zoom Request: {} at level {}", direction, level)
            }
            ChartError::Serialization(msg) => write!(f, "Serialization Error: {}", msg),
        }
    }
}

impl std::error::Error for ChartError {}

// Simple convenience type aliases
pub type LayoutResult<T> = Result<T, ChartError>;
pub type ZoomResult<T> = Result<T, ChartError>;

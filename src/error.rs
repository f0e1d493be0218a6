// src/error.rs

use thiserror::Error;

/// Recoverable numerical failures raised by the geometry and visibility code.
///
/// None of these are fatal to a frame: the caller logs and skips the offending
/// boundary or ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("cannot derive a direction from a zero-length vector")]
    DegenerateDirection,
    #[error("ray capacity exceeded: {requested} rays requested, limit is {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },
}

use thiserror::Error;

use crate::geometry::{Side, Wall};

/// Top-level error type for room layout operations.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Builder(#[from] BuilderError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised when a size, gap or height is out of its legal range.
#[derive(Debug, Error, PartialEq)]
pub enum DimensionError {
    #[error("{quantity} must be positive, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },

    #[error("{quantity} cannot be negative, got {value}")]
    Negative { quantity: &'static str, value: f64 },
}

/// Errors raised when an item does not fit where it was asked to go.
#[derive(Debug, Error, PartialEq)]
pub enum PlacementError {
    #[error("wall items cannot be placed on the {0}")]
    IllegalWall(Wall),

    #[error(
        "{name} ({width} x {length}) does not fit at ({x}, {y}) in a {room_width} x {room_length} room"
    )]
    OutOfBounds {
        name: String,
        x: f64,
        y: f64,
        width: f64,
        length: f64,
        room_width: f64,
        room_length: f64,
    },

    #[error("{name} is {height} high but the room is only {room_height} high")]
    TooTall {
        name: String,
        height: f64,
        room_height: f64,
    },

    #[error("item of width {width} does not fit on {wall} wall at position {position} (wall length {wall_length})")]
    OffWall {
        wall: Side,
        position: f64,
        width: f64,
        wall_length: f64,
    },

    #[error("item of height {height} does not fit vertically at {bottom_height} above the floor (room height {room_height})")]
    NotVertical {
        bottom_height: f64,
        height: f64,
        room_height: f64,
    },
}

/// Errors raised by an incompletely configured builder.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuilderError {
    #[error("side must be specified for relative placement")]
    MissingSide,
}

/// Errors raised when looking up items in a room by id.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} not found in room")]
    NotFound(&'static str),
}

/// Convenience type alias for results using [`LayoutError`].
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Fails with [`DimensionError::NonPositive`] unless `value > 0`.
pub(crate) fn ensure_positive(quantity: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(DimensionError::NonPositive { quantity, value }.into())
    }
}

/// Fails with [`DimensionError::Negative`] unless `value >= 0`.
pub(crate) fn ensure_non_negative(quantity: &'static str, value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(DimensionError::Negative { quantity, value }.into())
    }
}

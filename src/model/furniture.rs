use std::fmt;

use crate::error::{ensure_positive, Result};
use crate::math::span::normalize_degrees;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a piece of furniture stored in a room.
    pub struct FurnitureId;
}

/// An immutable piece of furniture with a floor position.
///
/// `position` is the north-west corner of the footprint. The footprint is
/// always the axis-aligned `width x length` rectangle; `rotation` is carried
/// for consumers but never changes fit checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Furniture {
    name: String,
    width: f64,
    length: f64,
    height: f64,
    position: Point2,
    rotation: f64,
}

impl Furniture {
    /// Creates a piece of furniture at `(x, y)` with no rotation.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::NonPositive` if any extent is not positive.
    pub fn new(
        name: impl Into<String>,
        width: f64,
        length: f64,
        height: f64,
        x: f64,
        y: f64,
    ) -> Result<Self> {
        ensure_positive("furniture width", width)?;
        ensure_positive("furniture length", length)?;
        ensure_positive("furniture height", height)?;
        Ok(Self {
            name: name.into(),
            width,
            length,
            height,
            position: Point2::new(x, y),
            rotation: 0.0,
        })
    }

    /// Returns a copy with the given rotation, normalized to `[0, 360)` degrees.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = normalize_degrees(degrees);
        self
    }

    /// Returns a copy moved to `position`.
    #[must_use]
    pub(crate) fn moved_to(&self, position: Point2) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extent along the x (east-west) axis.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Extent along the y (north-south) axis.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// North-west corner of the footprint.
    #[must_use]
    pub fn position(&self) -> Point2 {
        self.position
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Rotation in degrees, in `[0, 360)`.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Centre of the footprint.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.length / 2.0,
        )
    }
}

impl fmt::Display for Furniture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.1}x{:.1}x{:.1}m at ({:.1}, {:.1})",
            self.name, self.width, self.length, self.height, self.position.x, self.position.y
        )
    }
}

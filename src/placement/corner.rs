use crate::geometry::{Corner, Gap};
use crate::math::{Point2, Vector2};

use super::PlacementContext;

/// Anchors furniture in a room corner, then applies a signed shift.
///
/// The gap pulls the furniture away from both walls meeting at the corner.
/// The shift is added afterwards and is never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerPlacement {
    corner: Corner,
    gap: Gap,
    shift: Vector2,
}

impl CornerPlacement {
    /// Creates a corner placement with no shift.
    #[must_use]
    pub fn new(corner: Corner, gap: Gap) -> Self {
        Self {
            corner,
            gap,
            shift: Vector2::zeros(),
        }
    }

    /// Returns a copy shifted by `(shift_x, shift_y)`: east and south positive.
    #[must_use]
    pub fn with_shift(mut self, shift_x: f64, shift_y: f64) -> Self {
        self.shift = Vector2::new(shift_x, shift_y);
        self
    }

    #[must_use]
    pub fn corner(&self) -> Corner {
        self.corner
    }

    #[must_use]
    pub fn gap(&self) -> Gap {
        self.gap
    }

    #[must_use]
    pub fn shift(&self) -> Vector2 {
        self.shift
    }

    /// Computes the north-west corner for the context's furniture.
    #[must_use]
    pub fn calculate_position(&self, context: &PlacementContext<'_>) -> Point2 {
        let room = context.room();
        let furniture = context.furniture();
        let gap = self.gap.value();

        let x = if self.corner.is_west() {
            gap
        } else {
            room.width() - furniture.width() - gap
        };
        let y = if self.corner.is_north() {
            gap
        } else {
            room.length() - furniture.length() - gap
        };

        Point2::new(x, y) + self.shift
    }
}

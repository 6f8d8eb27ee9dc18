use crate::math::span::centered_start;
use crate::math::{Point2, Vector2};

use super::PlacementContext;

/// Centres furniture in the room, then moves it by a signed offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterPlacement {
    offset: Vector2,
}

impl CenterPlacement {
    /// Creates a centre placement offset by `(x_offset, y_offset)`.
    #[must_use]
    pub fn new(x_offset: f64, y_offset: f64) -> Self {
        Self {
            offset: Vector2::new(x_offset, y_offset),
        }
    }

    #[must_use]
    pub fn offset(&self) -> Vector2 {
        self.offset
    }

    /// Computes the north-west corner for the context's furniture.
    #[must_use]
    pub fn calculate_position(&self, context: &PlacementContext<'_>) -> Point2 {
        let room = context.room();
        let furniture = context.furniture();
        Point2::new(
            centered_start(room.width(), furniture.width()),
            centered_start(room.length(), furniture.length()),
        ) + self.offset
    }
}

impl Default for CenterPlacement {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::model::Furniture;
    use crate::room::Room;

    #[test]
    fn centred_in_room() {
        let room = Room::new(8.0, 6.0, 2.7).unwrap();
        let table = Furniture::new("Table", 1.2, 0.6, 0.75, 0.0, 0.0).unwrap();
        let ctx = PlacementContext::new(&room, &table);

        let p = CenterPlacement::default().calculate_position(&ctx);
        assert_relative_eq!(p.x, 3.4, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.7, epsilon = 1e-12);

        let p = CenterPlacement::new(0.5, -1.0).calculate_position(&ctx);
        assert_relative_eq!(p.x, 3.9, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.7, epsilon = 1e-12);
    }
}

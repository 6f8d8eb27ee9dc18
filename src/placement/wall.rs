use crate::geometry::{Gap, Side};
use crate::math::span::centered_start;
use crate::math::Point2;

use super::PlacementContext;

/// How an item is positioned along a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallAlignment {
    /// Centred on the wall, then moved by the offset.
    #[default]
    Centered,
    /// `offset` away from the wall's start endpoint.
    FromStart,
    /// `offset` away from the wall's end endpoint.
    FromEnd,
}

impl WallAlignment {
    /// Along-wall start coordinate of an item of `extent` on a wall of
    /// `wall_length`.
    #[must_use]
    pub fn along_wall(self, wall_length: f64, extent: f64, offset: f64) -> f64 {
        match self {
            Self::Centered => centered_start(wall_length, extent) + offset,
            Self::FromStart => offset,
            Self::FromEnd => wall_length - extent - offset,
        }
    }
}

/// Puts furniture flush against a wall, positioned along it by alignment and
/// a signed offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPlacement {
    wall: Side,
    alignment: WallAlignment,
    gap: Gap,
    offset: f64,
}

impl WallPlacement {
    #[must_use]
    pub fn new(wall: Side, alignment: WallAlignment, gap: Gap, offset: f64) -> Self {
        Self {
            wall,
            alignment,
            gap,
            offset,
        }
    }

    #[must_use]
    pub fn wall(&self) -> Side {
        self.wall
    }

    #[must_use]
    pub fn alignment(&self) -> WallAlignment {
        self.alignment
    }

    #[must_use]
    pub fn gap(&self) -> Gap {
        self.gap
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Computes the north-west corner for the context's furniture.
    #[must_use]
    pub fn calculate_position(&self, context: &PlacementContext<'_>) -> Point2 {
        let room = context.room();
        let furniture = context.furniture();
        let gap = self.gap.value();
        let wall_length = room.wall_length(self.wall);

        match self.wall {
            Side::North | Side::South => {
                let x = self
                    .alignment
                    .along_wall(wall_length, furniture.width(), self.offset);
                let y = if self.wall == Side::North {
                    gap
                } else {
                    room.length() - furniture.length() - gap
                };
                Point2::new(x, y)
            }
            Side::East | Side::West => {
                let y = self
                    .alignment
                    .along_wall(wall_length, furniture.length(), self.offset);
                let x = if self.wall == Side::West {
                    gap
                } else {
                    room.width() - furniture.width() - gap
                };
                Point2::new(x, y)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::model::Furniture;
    use crate::room::Room;

    fn position(w: f64, l: f64, placement: WallPlacement) -> Point2 {
        let room = Room::new(6.0, 4.0, 2.5).unwrap();
        let item = Furniture::new("Item", w, l, 0.8, 0.0, 0.0).unwrap();
        placement.calculate_position(&PlacementContext::new(&room, &item))
    }

    #[test]
    fn alignment_formulas() {
        assert_relative_eq!(WallAlignment::Centered.along_wall(6.0, 1.5, 0.0), 2.25);
        assert_relative_eq!(WallAlignment::Centered.along_wall(6.0, 1.5, -0.25), 2.0);
        assert_relative_eq!(WallAlignment::FromStart.along_wall(6.0, 1.5, 0.7), 0.7);
        assert_relative_eq!(WallAlignment::FromEnd.along_wall(6.0, 1.5, 0.5), 4.0);
    }

    #[test]
    fn north_centered() {
        let p = position(
            1.5,
            0.3,
            WallPlacement::new(Side::North, WallAlignment::Centered, Gap::ZERO, 0.0),
        );
        assert_relative_eq!(p.x, 2.25, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn east_from_start() {
        let p = position(
            0.3,
            1.0,
            WallPlacement::new(Side::East, WallAlignment::FromStart, Gap::ZERO, 1.0),
        );
        assert_relative_eq!(p.x, 5.7, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn south_with_gap_from_end() {
        let p = position(
            2.0,
            0.9,
            WallPlacement::new(
                Side::South,
                WallAlignment::FromEnd,
                Gap::of(0.1).unwrap(),
                0.5,
            ),
        );
        assert_relative_eq!(p.x, 3.5, epsilon = 1e-12);
        assert_relative_eq!(p.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn west_with_gap_centered() {
        let p = position(
            0.4,
            2.0,
            WallPlacement::new(
                Side::West,
                WallAlignment::Centered,
                Gap::of(0.2).unwrap(),
                0.0,
            ),
        );
        assert_relative_eq!(p.x, 0.2, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }
}

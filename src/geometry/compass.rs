use std::fmt;

use crate::error::PlacementError;
use crate::math::{Point2, Vector2};

/// One of the four floor corners of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Corner {
    /// All corners, clockwise from north-west.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Returns whether the corner touches the north wall.
    #[must_use]
    pub fn is_north(self) -> bool {
        matches!(self, Self::NorthWest | Self::NorthEast)
    }

    /// Returns whether the corner touches the west wall.
    #[must_use]
    pub fn is_west(self) -> bool {
        matches!(self, Self::NorthWest | Self::SouthWest)
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NorthWest => "NORTH_WEST",
            Self::NorthEast => "NORTH_EAST",
            Self::SouthWest => "SOUTH_WEST",
            Self::SouthEast => "SOUTH_EAST",
        };
        f.write_str(name)
    }
}

/// A compass side: used for wall selection and relative placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    South,
    East,
    West,
}

impl Side {
    /// All four sides.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Returns whether a wall on this side runs east-west.
    ///
    /// Along-wall coordinates on such walls are measured eastward from the
    /// west end; on the other two walls they are measured southward from the
    /// north end.
    #[must_use]
    pub fn runs_east_west(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// Start endpoint of this wall in floor coordinates.
    #[must_use]
    pub fn wall_start(self, room_width: f64, room_length: f64) -> Point2 {
        match self {
            Self::North | Self::West => Point2::origin(),
            Self::South => Point2::new(0.0, room_length),
            Self::East => Point2::new(room_width, 0.0),
        }
    }

    /// Unit direction in which along-wall positions grow.
    #[must_use]
    pub fn along_direction(self) -> Vector2 {
        if self.runs_east_west() {
            Vector2::new(1.0, 0.0)
        } else {
            Vector2::new(0.0, 1.0)
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Wall::from(*self), f)
    }
}

/// A room surface. Only the four side walls accept doors and windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    North,
    South,
    East,
    West,
    Floor,
    Ceiling,
}

impl From<Side> for Wall {
    fn from(side: Side) -> Self {
        match side {
            Side::North => Self::North,
            Side::South => Self::South,
            Side::East => Self::East,
            Side::West => Self::West,
        }
    }
}

impl TryFrom<Wall> for Side {
    type Error = PlacementError;

    fn try_from(wall: Wall) -> Result<Self, Self::Error> {
        match wall {
            Wall::North => Ok(Self::North),
            Wall::South => Ok(Self::South),
            Wall::East => Ok(Self::East),
            Wall::West => Ok(Self::West),
            Wall::Floor | Wall::Ceiling => Err(PlacementError::IllegalWall(wall)),
        }
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::Floor => "Floor",
            Self::Ceiling => "Ceiling",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn floor_and_ceiling_are_not_sides() {
        assert_eq!(
            Side::try_from(Wall::Floor),
            Err(PlacementError::IllegalWall(Wall::Floor))
        );
        assert_eq!(
            Side::try_from(Wall::Ceiling),
            Err(PlacementError::IllegalWall(Wall::Ceiling))
        );
    }

    #[test]
    fn side_wall_round_trip() {
        for side in Side::ALL {
            assert_eq!(Side::try_from(Wall::from(side)).unwrap(), side);
        }
    }

    #[test]
    fn wall_start_convention() {
        assert_eq!(Side::North.wall_start(6.0, 4.0), Point2::new(0.0, 0.0));
        assert_eq!(Side::South.wall_start(6.0, 4.0), Point2::new(0.0, 4.0));
        assert_eq!(Side::East.wall_start(6.0, 4.0), Point2::new(6.0, 0.0));
        assert_eq!(Side::West.wall_start(6.0, 4.0), Point2::new(0.0, 0.0));
        assert_eq!(Side::South.along_direction(), Vector2::new(1.0, 0.0));
        assert_eq!(Side::West.along_direction(), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn display_names() {
        assert_eq!(Wall::Ceiling.to_string(), "Ceiling");
        assert_eq!(Side::East.to_string(), "East");
        assert_eq!(Corner::SouthWest.to_string(), "SOUTH_WEST");
    }

    #[test]
    fn corner_predicates() {
        assert!(Corner::NorthWest.is_north() && Corner::NorthWest.is_west());
        assert!(!Corner::SouthEast.is_north() && !Corner::SouthEast.is_west());
    }
}

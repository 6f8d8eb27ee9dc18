//! Position-resolving strategies.
//!
//! A strategy is a pure configuration: given a room and a provisional piece of
//! furniture of known size it returns the floor position of the furniture's
//! north-west corner. Strategies never check fit; [`PositionResolver`] does.

mod center;
mod corner;
mod relative;
mod resolver;
mod wall;

pub use center::CenterPlacement;
pub use corner::CornerPlacement;
pub use relative::RelativePlacement;
pub use resolver::PositionResolver;
pub use wall::{WallAlignment, WallPlacement};

use crate::math::Point2;
use crate::model::Furniture;
use crate::room::Room;

/// Inputs a strategy may read.
#[derive(Debug, Clone, Copy)]
pub struct PlacementContext<'a> {
    room: &'a Room,
    furniture: &'a Furniture,
}

impl<'a> PlacementContext<'a> {
    /// Creates a context for placing `furniture` in `room`.
    #[must_use]
    pub fn new(room: &'a Room, furniture: &'a Furniture) -> Self {
        Self { room, furniture }
    }

    #[must_use]
    pub fn room(&self) -> &'a Room {
        self.room
    }

    /// The provisional furniture; only its extents are meaningful.
    #[must_use]
    pub fn furniture(&self) -> &'a Furniture {
        self.furniture
    }
}

/// The closed set of placement behaviours.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementStrategy {
    Corner(CornerPlacement),
    Wall(WallPlacement),
    Relative(RelativePlacement),
    Center(CenterPlacement),
}

impl PlacementStrategy {
    /// Computes the north-west corner for the context's furniture.
    #[must_use]
    pub fn calculate_position(&self, context: &PlacementContext<'_>) -> Point2 {
        let position = match self {
            Self::Corner(s) => s.calculate_position(context),
            Self::Wall(s) => s.calculate_position(context),
            Self::Relative(s) => s.calculate_position(context),
            Self::Center(s) => s.calculate_position(context),
        };
        tracing::trace!(
            strategy = self.kind(),
            x = position.x,
            y = position.y,
            "computed placement"
        );
        position
    }

    /// Short name of the variant, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Corner(_) => "corner",
            Self::Wall(_) => "wall",
            Self::Relative(_) => "relative",
            Self::Center(_) => "center",
        }
    }
}

impl From<CornerPlacement> for PlacementStrategy {
    fn from(s: CornerPlacement) -> Self {
        Self::Corner(s)
    }
}

impl From<WallPlacement> for PlacementStrategy {
    fn from(s: WallPlacement) -> Self {
        Self::Wall(s)
    }
}

impl From<RelativePlacement> for PlacementStrategy {
    fn from(s: RelativePlacement) -> Self {
        Self::Relative(s)
    }
}

impl From<CenterPlacement> for PlacementStrategy {
    fn from(s: CenterPlacement) -> Self {
        Self::Center(s)
    }
}

use crate::error::{PlacementError, Result};
use crate::math::span::fits_within;
use crate::math::Point2;
use crate::model::Furniture;
use crate::room::Room;

use super::{PlacementContext, PlacementStrategy};

/// Runs a strategy, checks the planar fit of its result and materializes the
/// positioned furniture.
///
/// Vertical fit is left to [`Room::add_furniture`].
#[derive(Debug, Clone)]
pub struct PositionResolver {
    strategy: PlacementStrategy,
}

impl PositionResolver {
    /// Creates a new `PositionResolver` for `strategy`.
    #[must_use]
    pub fn new(strategy: impl Into<PlacementStrategy>) -> Self {
        Self {
            strategy: strategy.into(),
        }
    }

    #[must_use]
    pub fn strategy(&self) -> &PlacementStrategy {
        &self.strategy
    }

    /// Computes and validates the position for `provisional` in `room`.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::OutOfBounds` if the footprint at the computed
    /// position leaves the floor.
    pub fn resolve(&self, room: &Room, provisional: &Furniture) -> Result<Point2> {
        let position = self
            .strategy
            .calculate_position(&PlacementContext::new(room, provisional));

        let fits = fits_within(position.x, provisional.width(), room.width())
            && fits_within(position.y, provisional.length(), room.length());
        if !fits {
            return Err(PlacementError::OutOfBounds {
                name: provisional.name().to_owned(),
                x: position.x,
                y: position.y,
                width: provisional.width(),
                length: provisional.length(),
                room_width: room.width(),
                room_length: room.length(),
            }
            .into());
        }
        Ok(position)
    }

    /// Executes the resolver, returning `provisional` moved to its resolved
    /// position.
    ///
    /// # Errors
    ///
    /// See [`PositionResolver::resolve`].
    pub fn execute(&self, room: &Room, provisional: &Furniture) -> Result<Furniture> {
        let position = self.resolve(room, provisional)?;
        Ok(provisional.moved_to(position))
    }
}

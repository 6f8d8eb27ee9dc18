use crate::error::{BuilderError, Result};
use crate::geometry::{Corner, Gap, Side};
use crate::model::Furniture;
use crate::placement::{
    CenterPlacement, CornerPlacement, PlacementStrategy, PositionResolver, RelativePlacement,
    WallAlignment, WallPlacement,
};
use crate::room::Room;

/// Entry point for placing one piece of furniture in a room.
///
/// Pick exactly one mode with [`in_corner`](Self::in_corner),
/// [`on_wall`](Self::on_wall), [`next_to`](Self::next_to) or
/// [`in_center`](Self::in_center), refine it, then call `build()`.
#[derive(Debug)]
pub struct FurniturePlacementBuilder<'a> {
    room: &'a mut Room,
    name: String,
    width: f64,
    length: f64,
    height: f64,
}

impl<'a> FurniturePlacementBuilder<'a> {
    pub(crate) fn new(
        room: &'a mut Room,
        name: impl Into<String>,
        width: f64,
        length: f64,
        height: f64,
    ) -> Self {
        Self {
            room,
            name: name.into(),
            width,
            length,
            height,
        }
    }

    #[must_use]
    pub fn in_corner(self, corner: Corner) -> CornerPlacementBuilder<'a> {
        CornerPlacementBuilder {
            target: self,
            corner,
            gap: Gap::ZERO,
            shift_x: 0.0,
            shift_y: 0.0,
        }
    }

    #[must_use]
    pub fn on_wall(self, wall: Side) -> WallPlacementBuilder<'a> {
        WallPlacementBuilder {
            target: self,
            wall,
            alignment: WallAlignment::Centered,
            gap: Gap::ZERO,
            offset: 0.0,
        }
    }

    /// Places the furniture beside `reference`, which is copied.
    #[must_use]
    pub fn next_to(self, reference: &Furniture) -> RelativePlacementBuilder<'a> {
        RelativePlacementBuilder {
            target: self,
            reference: reference.clone(),
            side: None,
            gap: Gap::ZERO,
        }
    }

    #[must_use]
    pub fn in_center(self) -> CenterPlacementBuilder<'a> {
        CenterPlacementBuilder {
            target: self,
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }

    /// Resolves `strategy` and registers the result with the room. Nothing is
    /// registered on failure.
    fn place(self, strategy: PlacementStrategy) -> Result<Furniture> {
        let provisional = Furniture::new(self.name, self.width, self.length, self.height, 0.0, 0.0)?;
        let placed = PositionResolver::new(strategy).execute(self.room, &provisional)?;
        self.room.add_furniture(placed.clone())?;
        Ok(placed)
    }
}

/// Corner placement: gap from both walls plus accumulated shifts.
#[derive(Debug)]
pub struct CornerPlacementBuilder<'a> {
    target: FurniturePlacementBuilder<'a>,
    corner: Corner,
    gap: Gap,
    shift_x: f64,
    shift_y: f64,
}

impl CornerPlacementBuilder<'_> {
    /// Keeps `gap` clear of both walls meeting at the corner.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::Negative` if `gap` is negative.
    pub fn with_gap(mut self, gap: f64) -> Result<Self> {
        self.gap = Gap::of(gap)?;
        Ok(self)
    }

    #[must_use]
    pub fn shift_north(mut self, distance: f64) -> Self {
        self.shift_y -= distance;
        self
    }

    #[must_use]
    pub fn shift_south(mut self, distance: f64) -> Self {
        self.shift_y += distance;
        self
    }

    #[must_use]
    pub fn shift_east(mut self, distance: f64) -> Self {
        self.shift_x += distance;
        self
    }

    #[must_use]
    pub fn shift_west(mut self, distance: f64) -> Self {
        self.shift_x -= distance;
        self
    }

    /// Places the furniture and adds it to the room.
    ///
    /// # Errors
    ///
    /// Returns an error if the extents are invalid or the furniture does not
    /// fit at the computed position.
    pub fn build(self) -> Result<Furniture> {
        let strategy =
            CornerPlacement::new(self.corner, self.gap).with_shift(self.shift_x, self.shift_y);
        self.target.place(strategy.into())
    }
}

/// Wall placement: flush against a wall, aligned along it.
///
/// Alignment calls replace the offset, so shifts made before the last
/// alignment call are discarded.
#[derive(Debug)]
pub struct WallPlacementBuilder<'a> {
    target: FurniturePlacementBuilder<'a>,
    wall: Side,
    alignment: WallAlignment,
    gap: Gap,
    offset: f64,
}

impl WallPlacementBuilder<'_> {
    #[must_use]
    pub fn centered(mut self) -> Self {
        self.alignment = WallAlignment::Centered;
        self.offset = 0.0;
        self
    }

    /// `distance` from the north end of an east or west wall.
    #[must_use]
    pub fn from_north(mut self, distance: f64) -> Self {
        self.alignment = WallAlignment::FromStart;
        self.offset = distance;
        self
    }

    /// `distance` from the south end of an east or west wall.
    #[must_use]
    pub fn from_south(mut self, distance: f64) -> Self {
        self.alignment = WallAlignment::FromEnd;
        self.offset = distance;
        self
    }

    /// `distance` from the east end of a north or south wall.
    #[must_use]
    pub fn from_east(mut self, distance: f64) -> Self {
        self.alignment = WallAlignment::FromEnd;
        self.offset = distance;
        self
    }

    /// `distance` from the west end of a north or south wall.
    #[must_use]
    pub fn from_west(mut self, distance: f64) -> Self {
        self.alignment = WallAlignment::FromStart;
        self.offset = distance;
        self
    }

    /// Moves the furniture `gap` away from the wall.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::Negative` if `gap` is negative.
    pub fn with_gap(mut self, gap: f64) -> Result<Self> {
        self.gap = Gap::of(gap)?;
        Ok(self)
    }

    #[must_use]
    pub fn shift_north(mut self, distance: f64) -> Self {
        self.offset -= distance;
        self
    }

    #[must_use]
    pub fn shift_south(mut self, distance: f64) -> Self {
        self.offset += distance;
        self
    }

    #[must_use]
    pub fn shift_east(mut self, distance: f64) -> Self {
        self.offset += distance;
        self
    }

    #[must_use]
    pub fn shift_west(mut self, distance: f64) -> Self {
        self.offset -= distance;
        self
    }

    /// Places the furniture and adds it to the room.
    ///
    /// # Errors
    ///
    /// Returns an error if the extents are invalid or the furniture does not
    /// fit at the computed position.
    pub fn build(self) -> Result<Furniture> {
        let strategy = WallPlacement::new(self.wall, self.alignment, self.gap, self.offset);
        self.target.place(strategy.into())
    }
}

/// Relative placement beside a reference item. A side is mandatory.
#[derive(Debug)]
pub struct RelativePlacementBuilder<'a> {
    target: FurniturePlacementBuilder<'a>,
    reference: Furniture,
    side: Option<Side>,
    gap: Gap,
}

impl RelativePlacementBuilder<'_> {
    #[must_use]
    pub fn on_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Keeps `gap` clear of the reference item.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::Negative` if `gap` is negative.
    pub fn with_gap(mut self, gap: f64) -> Result<Self> {
        self.gap = Gap::of(gap)?;
        Ok(self)
    }

    /// Places the furniture and adds it to the room.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingSide` if no side was chosen, otherwise an
    /// error if the extents are invalid or the furniture does not fit.
    pub fn build(self) -> Result<Furniture> {
        let side = self.side.ok_or(BuilderError::MissingSide)?;
        let strategy = RelativePlacement::new(self.reference, side, self.gap);
        self.target.place(strategy.into())
    }
}

/// Centre placement with accumulated shifts.
#[derive(Debug)]
pub struct CenterPlacementBuilder<'a> {
    target: FurniturePlacementBuilder<'a>,
    x_offset: f64,
    y_offset: f64,
}

impl CenterPlacementBuilder<'_> {
    #[must_use]
    pub fn shift_north(mut self, distance: f64) -> Self {
        self.y_offset -= distance;
        self
    }

    #[must_use]
    pub fn shift_south(mut self, distance: f64) -> Self {
        self.y_offset += distance;
        self
    }

    #[must_use]
    pub fn shift_east(mut self, distance: f64) -> Self {
        self.x_offset += distance;
        self
    }

    #[must_use]
    pub fn shift_west(mut self, distance: f64) -> Self {
        self.x_offset -= distance;
        self
    }

    /// Places the furniture and adds it to the room.
    ///
    /// # Errors
    ///
    /// Returns an error if the extents are invalid or the furniture does not
    /// fit at the computed position.
    pub fn build(self) -> Result<Furniture> {
        let strategy = CenterPlacement::new(self.x_offset, self.y_offset);
        self.target.place(strategy.into())
    }
}

use std::fmt;

use crate::error::{ensure_non_negative, ensure_positive, Result};
use crate::geometry::{Side, Wall};
use crate::math::Point2;
use crate::room::Room;

use super::DEFAULT_TYPE_LABEL;

slotmap::new_key_type! {
    /// Unique identifier for a door stored in a room.
    pub struct DoorId;
}

slotmap::new_key_type! {
    /// Unique identifier for a window stored in a room.
    pub struct WindowId;
}

/// An opening in one of the four side walls.
///
/// `position` is measured along the wall from its start endpoint: the west end
/// for north and south walls, the north end for east and west walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallItem {
    wall: Side,
    position: f64,
    width: f64,
    height: f64,
    bottom_height: f64,
}

impl WallItem {
    /// Creates a wall item.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError` if `width` or `height` is not positive or
    /// `bottom_height` is negative, and `PlacementError::IllegalWall` for the
    /// floor or ceiling.
    pub fn new(
        wall: Wall,
        position: f64,
        width: f64,
        height: f64,
        bottom_height: f64,
    ) -> Result<Self> {
        ensure_positive("wall item width", width)?;
        ensure_positive("wall item height", height)?;
        ensure_non_negative("bottom height", bottom_height)?;
        let wall = Side::try_from(wall)?;
        Ok(Self {
            wall,
            position,
            width,
            height,
            bottom_height,
        })
    }

    #[must_use]
    pub fn wall(&self) -> Wall {
        self.wall.into()
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.wall
    }

    /// Along-wall start coordinate.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Along-wall extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Distance from the floor to the lower edge.
    #[must_use]
    pub fn bottom_height(&self) -> f64 {
        self.bottom_height
    }

    /// Floor-plan endpoints of the opening, in the order of increasing
    /// along-wall position.
    #[must_use]
    pub fn span_on_floor(&self, room: &Room) -> (Point2, Point2) {
        let start = self.wall.wall_start(room.width(), room.length());
        let dir = self.wall.along_direction();
        (
            start + dir * self.position,
            start + dir * (self.position + self.width),
        )
    }
}

/// A door. Its lower edge always sits on the floor.
#[derive(Debug, Clone, PartialEq)]
pub struct Door {
    item: WallItem,
    kind: String,
}

impl Door {
    /// Creates a standard door.
    ///
    /// # Errors
    ///
    /// See [`WallItem::new`].
    pub fn new(wall: Wall, position: f64, width: f64, height: f64) -> Result<Self> {
        Ok(Self {
            item: WallItem::new(wall, position, width, height, 0.0)?,
            kind: DEFAULT_TYPE_LABEL.to_owned(),
        })
    }

    /// Returns a copy with the given type label.
    #[must_use]
    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub(crate) fn from_item(item: WallItem, kind: String) -> Self {
        Self { item, kind }
    }

    #[must_use]
    pub fn item(&self) -> &WallItem {
        &self.item
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Door on {} wall: {:.1}m wide x {:.1}m high at position {:.1}m",
            self.kind, self.item.wall, self.item.width, self.item.height, self.item.position
        )
    }
}

/// A window, placed at an explicit height above the floor.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    item: WallItem,
    kind: String,
}

impl Window {
    /// Creates a standard window.
    ///
    /// # Errors
    ///
    /// See [`WallItem::new`].
    pub fn new(
        wall: Wall,
        position: f64,
        width: f64,
        height: f64,
        bottom_height: f64,
    ) -> Result<Self> {
        Ok(Self {
            item: WallItem::new(wall, position, width, height, bottom_height)?,
            kind: DEFAULT_TYPE_LABEL.to_owned(),
        })
    }

    /// Returns a copy with the given type label.
    #[must_use]
    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub(crate) fn from_item(item: WallItem, kind: String) -> Self {
        Self { item, kind }
    }

    #[must_use]
    pub fn item(&self) -> &WallItem {
        &self.item
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Window on {} wall: {:.1}m wide x {:.1}m high at position {:.1}m, {:.1}m from floor",
            self.kind,
            self.item.wall,
            self.item.width,
            self.item.height,
            self.item.position,
            self.item.bottom_height
        )
    }
}

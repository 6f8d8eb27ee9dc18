use std::marker::PhantomData;

use crate::error::Result;
use crate::geometry::{Side, Wall};
use crate::model::{Door, WallItem, Window, DEFAULT_TYPE_LABEL};
use crate::placement::WallAlignment;
use crate::room::Room;

/// An item that can be mounted in a wall and stored by a room.
pub trait WallMounted: Clone + Sized {
    /// Wraps a positioned wall item placed under `name`.
    fn mount(item: WallItem, name: String) -> Self;

    /// Adds the item to `room`.
    ///
    /// # Errors
    ///
    /// Returns an error if the room rejects the item.
    fn admit(self, room: &mut Room) -> Result<()>;
}

impl WallMounted for Door {
    /// Doors take the placement name as their type label.
    fn mount(item: WallItem, name: String) -> Self {
        Door::from_item(item, name)
    }

    fn admit(self, room: &mut Room) -> Result<()> {
        room.add_door(self).map(|_| ())
    }
}

impl WallMounted for Window {
    /// Windows keep the default type label; the placement name is not stored.
    fn mount(item: WallItem, _name: String) -> Self {
        Window::from_item(item, DEFAULT_TYPE_LABEL.to_owned())
    }

    fn admit(self, room: &mut Room) -> Result<()> {
        room.add_window(self).map(|_| ())
    }
}

/// Entry point for placing a door or window.
#[derive(Debug)]
pub struct WallItemPlacementBuilder<'a, T> {
    room: &'a mut Room,
    name: String,
    width: f64,
    height: f64,
    bottom_height: f64,
    _kind: PhantomData<T>,
}

impl<'a, T: WallMounted> WallItemPlacementBuilder<'a, T> {
    pub(crate) fn new(
        room: &'a mut Room,
        name: impl Into<String>,
        width: f64,
        height: f64,
        bottom_height: f64,
    ) -> Self {
        Self {
            room,
            name: name.into(),
            width,
            height,
            bottom_height,
            _kind: PhantomData,
        }
    }

    /// Selects the wall. The item starts centred with no offset.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::IllegalWall` for the floor or ceiling.
    pub fn on_wall(self, wall: Wall) -> Result<WallItemWallBuilder<'a, T>> {
        let wall = Side::try_from(wall)?;
        Ok(WallItemWallBuilder {
            target: self,
            wall,
            alignment: WallAlignment::Centered,
            offset: 0.0,
        })
    }
}

/// Along-wall positioning for a door or window.
///
/// Alignment calls replace the offset, so shifts made before the last
/// alignment call are discarded.
#[derive(Debug)]
pub struct WallItemWallBuilder<'a, T> {
    target: WallItemPlacementBuilder<'a, T>,
    wall: Side,
    alignment: WallAlignment,
    offset: f64,
}

impl<T: WallMounted> WallItemWallBuilder<'_, T> {
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

    /// Along-wall position the item would get.
    #[must_use]
    pub fn position(&self) -> f64 {
        let wall_length = self.target.room.wall_length(self.wall);
        self.alignment
            .along_wall(wall_length, self.target.width, self.offset)
    }

    /// Places the item and adds it to the room.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError` for invalid extents, `PlacementError::OffWall`
    /// if the item overruns its wall and `PlacementError::NotVertical` if it
    /// does not fit between floor and ceiling.
    pub fn build(self) -> Result<T> {
        let position = self.position();
        let target = self.target;
        let item = WallItem::new(
            self.wall.into(),
            position,
            target.width,
            target.height,
            target.bottom_height,
        )?;
        let mounted = T::mount(item, target.name);
        mounted.clone().admit(target.room)?;
        Ok(mounted)
    }
}

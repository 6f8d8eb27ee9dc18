use std::fmt;

use slotmap::SlotMap;

use crate::builder::{FurniturePlacementBuilder, WallItemPlacementBuilder};
use crate::error::{ensure_positive, PlacementError, Result, StoreError};
use crate::geometry::Side;
use crate::math::span::fits_within;
use crate::model::{Door, DoorId, Furniture, FurnitureId, WallItem, Window, WindowId};

/// A rectangular room and everything placed in it.
///
/// The origin is the north-west floor corner; x grows east, y grows south.
/// Every admitted item is checked against the room's extents. Overlap between
/// items is never checked.
///
/// Items live in `SlotMap` arenas, whose iteration follows slot order. That
/// equals insertion order only while nothing has been removed; snapshots
/// rely on this, so any future removal must keep a separate order.
#[derive(Debug)]
pub struct Room {
    width: f64,
    length: f64,
    height: f64,
    furniture: SlotMap<FurnitureId, Furniture>,
    doors: SlotMap<DoorId, Door>,
    windows: SlotMap<WindowId, Window>,
}

impl Room {
    /// Creates an empty room.
    ///
    /// `width` is the east-west extent, `length` the north-south extent and
    /// `height` the floor-to-ceiling distance.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::NonPositive` if any dimension is not positive.
    pub fn new(width: f64, length: f64, height: f64) -> Result<Self> {
        ensure_positive("room width", width)?;
        ensure_positive("room length", length)?;
        ensure_positive("room height", height)?;
        Ok(Self {
            width,
            length,
            height,
            furniture: SlotMap::with_key(),
            doors: SlotMap::with_key(),
            windows: SlotMap::with_key(),
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Length of the wall on `side`: the room width for north and south, the
    /// room length for east and west.
    #[must_use]
    pub fn wall_length(&self, side: Side) -> f64 {
        if side.runs_east_west() {
            self.width
        } else {
            self.length
        }
    }

    // --- Fluent placement ---

    /// Starts placing a piece of furniture.
    #[must_use]
    pub fn place(
        &mut self,
        name: impl Into<String>,
        width: f64,
        length: f64,
        height: f64,
    ) -> FurniturePlacementBuilder<'_> {
        FurniturePlacementBuilder::new(self, name, width, length, height)
    }

    /// Places a piece of furniture in the centre of the room.
    ///
    /// # Errors
    ///
    /// Returns an error if the furniture has invalid extents or does not fit.
    pub fn place_in_center(
        &mut self,
        name: impl Into<String>,
        width: f64,
        length: f64,
        height: f64,
    ) -> Result<Furniture> {
        self.place(name, width, length, height).in_center().build()
    }

    /// Starts placing a door.
    #[must_use]
    pub fn place_door(
        &mut self,
        name: impl Into<String>,
        width: f64,
        height: f64,
    ) -> WallItemPlacementBuilder<'_, Door> {
        WallItemPlacementBuilder::new(self, name, width, height, 0.0)
    }

    /// Starts placing a window whose lower edge is `bottom_height` above the
    /// floor.
    #[must_use]
    pub fn place_window(
        &mut self,
        name: impl Into<String>,
        width: f64,
        height: f64,
        bottom_height: f64,
    ) -> WallItemPlacementBuilder<'_, Window> {
        WallItemPlacementBuilder::new(self, name, width, height, bottom_height)
    }

    // --- Direct admission ---

    /// Adds a positioned piece of furniture and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::OutOfBounds` if the footprint leaves the floor
    /// and `PlacementError::TooTall` if it is higher than the room.
    pub fn add_furniture(&mut self, item: Furniture) -> Result<FurnitureId> {
        self.check_furniture(&item)?;
        tracing::debug!(
            name = item.name(),
            x = item.x(),
            y = item.y(),
            "furniture added"
        );
        Ok(self.furniture.insert(item))
    }

    /// Adds a door and returns its ID.
    ///
    /// # Errors
    ///
    /// See [`Room::check_wall_item`].
    pub fn add_door(&mut self, door: Door) -> Result<DoorId> {
        self.check_wall_item(door.item())?;
        tracing::debug!(
            wall = %door.item().wall(),
            position = door.item().position(),
            "door added"
        );
        Ok(self.doors.insert(door))
    }

    /// Adds a window and returns its ID.
    ///
    /// # Errors
    ///
    /// See [`Room::check_wall_item`].
    pub fn add_window(&mut self, window: Window) -> Result<WindowId> {
        self.check_wall_item(window.item())?;
        tracing::debug!(
            wall = %window.item().wall(),
            position = window.item().position(),
            "window added"
        );
        Ok(self.windows.insert(window))
    }

    /// Checks that `item` lies on the floor and under the ceiling.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::OutOfBounds` or `PlacementError::TooTall`.
    pub fn check_furniture(&self, item: &Furniture) -> Result<()> {
        let planar = fits_within(item.x(), item.width(), self.width)
            && fits_within(item.y(), item.length(), self.length);
        if !planar {
            return Err(PlacementError::OutOfBounds {
                name: item.name().to_owned(),
                x: item.x(),
                y: item.y(),
                width: item.width(),
                length: item.length(),
                room_width: self.width,
                room_length: self.length,
            }
            .into());
        }
        if item.height() > self.height {
            return Err(PlacementError::TooTall {
                name: item.name().to_owned(),
                height: item.height(),
                room_height: self.height,
            }
            .into());
        }
        Ok(())
    }

    /// Checks that `item` lies within its wall, both along it and vertically.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::OffWall` if the item overruns either end of its
    /// wall and `PlacementError::NotVertical` if it is not between floor and
    /// ceiling.
    pub fn check_wall_item(&self, item: &WallItem) -> Result<()> {
        let wall_length = self.wall_length(item.side());
        if !fits_within(item.position(), item.width(), wall_length) {
            return Err(PlacementError::OffWall {
                wall: item.side(),
                position: item.position(),
                width: item.width(),
                wall_length,
            }
            .into());
        }
        if !fits_within(item.bottom_height(), item.height(), self.height) {
            return Err(PlacementError::NotVertical {
                bottom_height: item.bottom_height(),
                height: item.height(),
                room_height: self.height,
            }
            .into());
        }
        Ok(())
    }

    // --- Snapshots ---

    /// Returns a copy of all furniture, in insertion order.
    #[must_use]
    pub fn furniture(&self) -> Vec<Furniture> {
        self.furniture.values().cloned().collect()
    }

    /// Returns a copy of all doors, in insertion order.
    #[must_use]
    pub fn doors(&self) -> Vec<Door> {
        self.doors.values().cloned().collect()
    }

    /// Returns a copy of all windows, in insertion order.
    #[must_use]
    pub fn windows(&self) -> Vec<Window> {
        self.windows.values().cloned().collect()
    }

    // --- Lookup ---

    /// Returns the furniture with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID does not belong to this room.
    pub fn furniture_item(&self, id: FurnitureId) -> Result<&Furniture> {
        self.furniture
            .get(id)
            .ok_or_else(|| StoreError::NotFound("furniture").into())
    }

    /// Returns the door with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID does not belong to this room.
    pub fn door(&self, id: DoorId) -> Result<&Door> {
        self.doors
            .get(id)
            .ok_or_else(|| StoreError::NotFound("door").into())
    }

    /// Returns the window with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID does not belong to this room.
    pub fn window(&self, id: WindowId) -> Result<&Window> {
        self.windows
            .get(id)
            .ok_or_else(|| StoreError::NotFound("window").into())
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room: {:.1}m x {:.1}m x {:.1}m (W x L x H)",
            self.width, self.length, self.height
        )
    }
}

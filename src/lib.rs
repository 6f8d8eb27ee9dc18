//! Room layout placement core.
//!
//! Places furniture, doors and windows in a rectangular room using corners,
//! walls, neighbouring items and the room centre as anchors:
//!
//! ```
//! use room_layout::geometry::{Corner, Wall};
//! use room_layout::Room;
//!
//! # fn main() -> room_layout::Result<()> {
//! let mut room = Room::new(6.0, 4.0, 2.7)?;
//! let sofa = room
//!     .place("Sofa", 2.0, 0.8, 0.8)
//!     .in_corner(Corner::SouthWest)
//!     .with_gap(0.2)?
//!     .shift_east(0.3)
//!     .build()?;
//! assert!((sofa.x() - 0.5).abs() < 1e-9);
//!
//! let door = room.place_door("Main Door", 0.9, 2.1).on_wall(Wall::North)?.centered().build()?;
//! assert!((door.item().position() - 2.55).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod geometry;
pub mod math;
pub mod model;
pub mod placement;
pub mod room;

pub use error::{LayoutError, Result};
pub use model::{Door, Furniture, WallItem, Window};
pub use room::Room;

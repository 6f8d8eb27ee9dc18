mod furniture;
mod wall_item;

pub use furniture::{Furniture, FurnitureId};
pub use wall_item::{Door, DoorId, WallItem, Window, WindowId};

/// Type label given to doors and windows created without one.
pub const DEFAULT_TYPE_LABEL: &str = "Standard";

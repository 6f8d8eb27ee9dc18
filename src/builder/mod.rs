//! Fluent placement surfaces bound to a [`Room`](crate::room::Room).

mod furniture;
mod wall_item;

pub use furniture::{
    CenterPlacementBuilder, CornerPlacementBuilder, FurniturePlacementBuilder,
    RelativePlacementBuilder, WallPlacementBuilder,
};
pub use wall_item::{WallItemPlacementBuilder, WallItemWallBuilder, WallMounted};

//! Property-based invariant tests for room admission and placement.
//!
//! 1. Every admitted piece of furniture lies on the floor and under the ceiling.
//! 2. Every admitted door or window lies within its wall.
//! 3. Rotation is normalized to [0, 360).
//! 4. Snapshots are detached from the room.
//! 5. Strategies are deterministic.
//! 6. A failed build registers nothing.

#![allow(clippy::unwrap_used)]

mod common;

use proptest::prelude::*;
use room_layout::geometry::{Corner, Gap, Side, Wall};
use room_layout::placement::{
    CenterPlacement, CornerPlacement, PlacementContext, PlacementStrategy, WallAlignment,
    WallPlacement,
};
use room_layout::{Furniture, Room};

// ── Helpers ─────────────────────────────────────────────────────────────

fn corner() -> impl Strategy<Value = Corner> {
    prop::sample::select(Corner::ALL.to_vec())
}

fn side() -> impl Strategy<Value = Side> {
    prop::sample::select(Side::ALL.to_vec())
}

fn room_dims() -> impl Strategy<Value = (f64, f64, f64)> {
    (1.0f64..10.0, 1.0f64..10.0, 2.0f64..4.0)
}

fn extents() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.1f64..4.0, 0.1f64..4.0, 0.1f64..3.0)
}

/// Builds a furniture placement from a mode selector and parameters; any
/// error is ignored, only the room's state is inspected afterwards.
fn try_place(
    room: &mut Room,
    mode: u8,
    (w, l, h): (f64, f64, f64),
    (c, s): (Corner, Side),
    (a, b): (f64, f64),
) {
    let builder = room.place("Item", w, l, h);
    let _ = match mode % 3 {
        0 => builder.in_corner(c).shift_east(a).shift_north(b).build(),
        1 => builder.on_wall(s).from_west(a.abs()).shift_south(b).build(),
        _ => builder.in_center().shift_west(a).shift_south(b).build(),
    };
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Admitted furniture fits
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn admitted_furniture_fits(
        (rw, rl, rh) in room_dims(),
        items in prop::collection::vec(
            (any::<u8>(), extents(), corner(), side(), -2.0f64..2.0, -2.0f64..2.0),
            1..12,
        ),
    ) {
        common::init_tracing();
        let mut room = Room::new(rw, rl, rh).unwrap();
        for (mode, ext, c, s, a, b) in items {
            try_place(&mut room, mode, ext, (c, s), (a, b));
        }
        for f in room.furniture() {
            prop_assert!(f.x() >= 0.0 && f.y() >= 0.0);
            prop_assert!(f.x() + f.width() <= rw);
            prop_assert!(f.y() + f.length() <= rl);
            prop_assert!(f.height() <= rh);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Admitted wall items fit
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn admitted_wall_items_fit(
        (rw, rl, rh) in room_dims(),
        items in prop::collection::vec(
            (side(), 0.1f64..3.0, 0.1f64..3.0, 0.0f64..2.0, -3.0f64..3.0, any::<bool>()),
            1..12,
        ),
    ) {
        let mut room = Room::new(rw, rl, rh).unwrap();
        for (s, width, height, bottom, offset, is_door) in items {
            if is_door {
                let _ = room
                    .place_door("Door", width, height)
                    .on_wall(Wall::from(s))
                    .unwrap()
                    .shift_east(offset)
                    .build();
            } else {
                let _ = room
                    .place_window("Window", width, height, bottom)
                    .on_wall(Wall::from(s))
                    .unwrap()
                    .from_south(offset)
                    .build();
            }
        }
        let items = room
            .doors()
            .iter()
            .map(|d| *d.item())
            .chain(room.windows().iter().map(|w| *w.item()))
            .collect::<Vec<_>>();
        for item in items {
            let wall_length = room.wall_length(item.side());
            prop_assert!(item.position() >= 0.0);
            prop_assert!(item.position() + item.width() <= wall_length);
            prop_assert!(item.bottom_height() >= 0.0);
            prop_assert!(item.bottom_height() + item.height() <= rh);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Rotation normalization
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rotation_in_range(angle in -1.0e6f64..1.0e6) {
        let f = Furniture::new("Chair", 0.5, 0.5, 0.9, 0.0, 0.0)
            .unwrap()
            .with_rotation(angle);
        prop_assert!((0.0..360.0).contains(&f.rotation()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Snapshots are detached
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn snapshots_detached(count in 1usize..8) {
        let mut room = Room::new(10.0, 10.0, 3.0).unwrap();
        for i in 0..count {
            room.place(format!("Item {i}"), 0.5, 0.5, 0.5).in_center().build().unwrap();
        }
        let mut snapshot = room.furniture();
        snapshot.truncate(0);
        prop_assert_eq!(room.furniture().len(), count);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn strategies_deterministic(
        (rw, rl, rh) in room_dims(),
        (w, l, h) in extents(),
        c in corner(),
        s in side(),
        gap in 0.0f64..1.0,
        offset in -1.0f64..1.0,
    ) {
        let room = Room::new(rw, rl, rh).unwrap();
        let item = Furniture::new("Item", w, l, h, 0.0, 0.0).unwrap();
        let ctx = PlacementContext::new(&room, &item);
        let gap = Gap::of(gap).unwrap();
        let strategies: [PlacementStrategy; 3] = [
            CornerPlacement::new(c, gap).with_shift(offset, -offset).into(),
            WallPlacement::new(s, WallAlignment::FromEnd, gap, offset).into(),
            CenterPlacement::new(offset, offset).into(),
        ];
        for strategy in &strategies {
            prop_assert_eq!(
                strategy.calculate_position(&ctx),
                strategy.clone().calculate_position(&ctx)
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Failed builds are side-effect free
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn failed_build_registers_nothing(
        (w, l, h) in extents(),
        c in corner(),
        shift in 10.0f64..20.0,
    ) {
        let mut room = Room::new(5.0, 5.0, 3.0).unwrap();
        let result = room.place("Item", w, l, h).in_corner(c).shift_east(shift).build();
        prop_assert!(result.is_err());
        prop_assert!(room.furniture().is_empty());
    }
}

use crate::geometry::{Gap, Side};
use crate::math::Point2;
use crate::model::Furniture;

use super::PlacementContext;

/// Places furniture beside an already-positioned reference item.
///
/// The new item shares the reference's x (north/south) or y (east/west)
/// coordinate and sits `gap` away from the named edge.
#[derive(Debug, Clone, PartialEq)]
pub struct RelativePlacement {
    reference: Furniture,
    side: Side,
    gap: Gap,
}

impl RelativePlacement {
    #[must_use]
    pub fn new(reference: Furniture, side: Side, gap: Gap) -> Self {
        Self {
            reference,
            side,
            gap,
        }
    }

    #[must_use]
    pub fn reference(&self) -> &Furniture {
        &self.reference
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn gap(&self) -> Gap {
        self.gap
    }

    /// Computes the north-west corner for the context's furniture.
    #[must_use]
    pub fn calculate_position(&self, context: &PlacementContext<'_>) -> Point2 {
        let furniture = context.furniture();
        let r = &self.reference;
        let gap = self.gap.value();

        match self.side {
            Side::North => Point2::new(r.x(), r.y() - furniture.length() - gap),
            Side::South => Point2::new(r.x(), r.y() + r.length() + gap),
            Side::East => Point2::new(r.x() + r.width() + gap, r.y()),
            Side::West => Point2::new(r.x() - furniture.width() - gap, r.y()),
        }
    }
}

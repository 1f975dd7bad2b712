//! Which part of the crop outline the active gesture holds.

use crate::geometry::Corner;

/// The edge or corner grabbed by the current drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngagedEdges {
    #[default]
    None,
    Left,
    Right,
    Top,
    Bottom,
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
}

impl EngagedEdges {
    /// Build from per-edge hits. Left wins over right and top over bottom,
    /// which only matters when the crop is thinner than the touch ring.
    pub fn from_flags(left: bool, right: bool, top: bool, bottom: bool) -> Self {
        let horizontal = if left {
            Some(true)
        } else if right {
            Some(false)
        } else {
            None
        };
        let vertical = if top {
            Some(true)
        } else if bottom {
            Some(false)
        } else {
            None
        };
        match (horizontal, vertical) {
            (None, None) => EngagedEdges::None,
            (Some(true), None) => EngagedEdges::Left,
            (Some(false), None) => EngagedEdges::Right,
            (None, Some(true)) => EngagedEdges::Top,
            (None, Some(false)) => EngagedEdges::Bottom,
            (Some(true), Some(true)) => EngagedEdges::LeftTop,
            (Some(true), Some(false)) => EngagedEdges::LeftBottom,
            (Some(false), Some(true)) => EngagedEdges::RightTop,
            (Some(false), Some(false)) => EngagedEdges::RightBottom,
        }
    }

    pub fn is_engaged(self) -> bool {
        self != EngagedEdges::None
    }

    pub fn has_left(self) -> bool {
        matches!(
            self,
            EngagedEdges::Left | EngagedEdges::LeftTop | EngagedEdges::LeftBottom
        )
    }

    pub fn has_right(self) -> bool {
        matches!(
            self,
            EngagedEdges::Right | EngagedEdges::RightTop | EngagedEdges::RightBottom
        )
    }

    pub fn has_top(self) -> bool {
        matches!(
            self,
            EngagedEdges::Top | EngagedEdges::LeftTop | EngagedEdges::RightTop
        )
    }

    pub fn has_bottom(self) -> bool {
        matches!(
            self,
            EngagedEdges::Bottom | EngagedEdges::LeftBottom | EngagedEdges::RightBottom
        )
    }

    /// The grabbed corner, if this is a corner engagement.
    pub fn corner(self) -> Option<Corner> {
        match self {
            EngagedEdges::LeftTop => Some(Corner::TopLeft),
            EngagedEdges::RightTop => Some(Corner::TopRight),
            EngagedEdges::RightBottom => Some(Corner::BottomRight),
            EngagedEdges::LeftBottom => Some(Corner::BottomLeft),
            _ => None,
        }
    }
}

/// Records that a single side was promoted to a corner under a ratio lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidePromotion {
    /// Promoted from the top or bottom side: horizontal drag is ignored.
    FromHorizontalSide,
    /// Promoted from the left or right side: vertical drag is ignored.
    FromVerticalSide,
}

impl SidePromotion {
    /// Zero the drag component orthogonal to the side that was grabbed.
    pub fn mask(self, dx: f64, dy: f64) -> (f64, f64) {
        match self {
            SidePromotion::FromHorizontalSide => (0.0, dy),
            SidePromotion::FromVerticalSide => (dx, 0.0),
        }
    }
}

/// Touch state of the active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Engagement {
    pub edges: EngagedEdges,
    pub promotion: Option<SidePromotion>,
}

impl Engagement {
    pub const IDLE: Engagement = Engagement {
        edges: EngagedEdges::None,
        promotion: None,
    };

    /// Under a ratio lock only corners can move. A lone side becomes the
    /// corner on the half of the crop that was touched.
    pub fn promote_side_to_corner(&mut self, touch_before_center_x: bool, touch_before_center_y: bool) {
        match self.edges {
            EngagedEdges::Left | EngagedEdges::Right => {
                let left = self.edges == EngagedEdges::Left;
                self.edges = EngagedEdges::from_flags(
                    left,
                    !left,
                    touch_before_center_y,
                    !touch_before_center_y,
                );
                self.promotion = Some(SidePromotion::FromVerticalSide);
            }
            EngagedEdges::Top | EngagedEdges::Bottom => {
                let top = self.edges == EngagedEdges::Top;
                self.edges = EngagedEdges::from_flags(
                    touch_before_center_x,
                    !touch_before_center_x,
                    top,
                    !top,
                );
                self.promotion = Some(SidePromotion::FromHorizontalSide);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(EngagedEdges::from_flags(false, false, false, false), EngagedEdges::None);
        assert_eq!(EngagedEdges::from_flags(true, false, true, false), EngagedEdges::LeftTop);
        assert_eq!(EngagedEdges::from_flags(false, true, false, true), EngagedEdges::RightBottom);
        assert_eq!(EngagedEdges::from_flags(false, false, false, true), EngagedEdges::Bottom);
        // left wins when both sides are hit
        assert_eq!(EngagedEdges::from_flags(true, true, false, false), EngagedEdges::Left);
    }

    #[test]
    fn test_edge_queries() {
        assert!(EngagedEdges::LeftBottom.has_left());
        assert!(EngagedEdges::LeftBottom.has_bottom());
        assert!(!EngagedEdges::LeftBottom.has_top());
        assert!(!EngagedEdges::LeftBottom.has_right());
        assert!(!EngagedEdges::None.is_engaged());
        assert_eq!(EngagedEdges::RightTop.corner(), Some(Corner::TopRight));
        assert_eq!(EngagedEdges::Right.corner(), None);
    }

    #[test]
    fn test_promote_vertical_side() {
        let mut engagement = Engagement {
            edges: EngagedEdges::Left,
            promotion: None,
        };
        engagement.promote_side_to_corner(true, false);
        assert_eq!(engagement.edges, EngagedEdges::LeftBottom);
        assert_eq!(engagement.promotion, Some(SidePromotion::FromVerticalSide));
    }

    #[test]
    fn test_promote_horizontal_side() {
        let mut engagement = Engagement {
            edges: EngagedEdges::Top,
            promotion: None,
        };
        engagement.promote_side_to_corner(false, true);
        assert_eq!(engagement.edges, EngagedEdges::RightTop);
        assert_eq!(engagement.promotion, Some(SidePromotion::FromHorizontalSide));
    }

    #[test]
    fn test_corner_is_not_promoted() {
        let mut engagement = Engagement {
            edges: EngagedEdges::RightBottom,
            promotion: None,
        };
        engagement.promote_side_to_corner(true, true);
        assert_eq!(engagement.edges, EngagedEdges::RightBottom);
        assert_eq!(engagement.promotion, None);
    }

    #[test]
    fn test_mask() {
        assert_eq!(SidePromotion::FromHorizontalSide.mask(3.0, 4.0), (0.0, 4.0));
        assert_eq!(SidePromotion::FromVerticalSide.mask(3.0, 4.0), (3.0, 0.0));
    }
}

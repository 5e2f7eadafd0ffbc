//! Four diagonal spokes around an opaque hub.

use super::{Design, Hub, Measure, Node, Segment, Vertex};
use crate::colors::Accent;

/// Horizontal and vertical reach of each spoke.
pub const SPOKE_REACH: i32 = 48;

const NODE: Measure = Measure::new(9, 3);

const SEGMENTS: [Segment; 4] = [
    Segment::new(Vertex::Center, Vertex::NorthEast, Accent::Orange),
    Segment::new(Vertex::Center, Vertex::SouthEast, Accent::Gold),
    Segment::new(Vertex::Center, Vertex::SouthWest, Accent::Purple),
    Segment::new(Vertex::Center, Vertex::NorthWest, Accent::Blue),
];

const NODES: [Node; 4] = [
    Node::new(Vertex::NorthEast, Accent::Orange, NODE),
    Node::new(Vertex::SouthEast, Accent::Gold, NODE),
    Node::new(Vertex::SouthWest, Accent::Purple, NODE),
    Node::new(Vertex::NorthWest, Accent::Blue, NODE),
];

pub static HUB_SPOKES: Design = Design {
    name: "hub-spokes",
    corner_radius: Measure::exact(45),
    line_width: Measure::new(4, 1),
    segments: &SEGMENTS,
    nodes: &NODES,
    hub: Hub {
        outer: Measure::new(16, 4),
        outer_color: Accent::Highlight,
        outer_alpha: 255,
        inner: Measure::new(8, 2),
        inner_color: Accent::Purple,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spokes_radiate_from_center() {
        assert!(SEGMENTS.iter().all(|s| s.from == Vertex::Center));
    }

    #[test]
    fn spoke_and_end_node_share_color() {
        for (segment, node) in SEGMENTS.iter().zip(NODES.iter()) {
            assert_eq!(segment.to, node.vertex);
            assert_eq!(segment.color, node.color);
        }
    }

    #[test]
    fn hub_is_opaque() {
        assert_eq!(HUB_SPOKES.hub.outer_alpha, 255);
        assert!(HUB_SPOKES.hub.outer.at(16) > HUB_SPOKES.hub.inner.at(16));
    }
}

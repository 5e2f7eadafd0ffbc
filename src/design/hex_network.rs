//! Two stacked hexagon skeletons sharing the center vertex.

use super::{Design, Hub, Measure, Node, Segment, Vertex};
use crate::colors::Accent;

/// Horizontal offset of the hexagon sides.
pub const HEX_WIDTH: i32 = 30;
/// Vertical offset of the top and bottom apexes.
pub const HEX_HEIGHT: i32 = 60;

const NODE: Measure = Measure::new(7, 2);

const SEGMENTS: [Segment; 12] = [
    // Top hexagon, orange into gold
    Segment::new(Vertex::TopApex, Vertex::TopRightUpper, Accent::Orange),
    Segment::new(Vertex::TopRightUpper, Vertex::TopRightLower, Accent::Gold),
    Segment::new(Vertex::TopRightLower, Vertex::Center, Accent::Gold),
    Segment::new(Vertex::Center, Vertex::TopLeftLower, Accent::Gold),
    Segment::new(Vertex::TopLeftLower, Vertex::TopLeftUpper, Accent::Orange),
    Segment::new(Vertex::TopLeftUpper, Vertex::TopApex, Accent::Orange),
    // Bottom hexagon, blue into purple
    Segment::new(Vertex::Center, Vertex::BottomRightLower, Accent::Blue),
    Segment::new(Vertex::BottomRightLower, Vertex::BottomRightUpper, Accent::Purple),
    Segment::new(Vertex::BottomRightUpper, Vertex::BottomApex, Accent::Purple),
    Segment::new(Vertex::BottomApex, Vertex::BottomLeftUpper, Accent::Purple),
    Segment::new(Vertex::BottomLeftUpper, Vertex::BottomLeftLower, Accent::Blue),
    Segment::new(Vertex::BottomLeftLower, Vertex::Center, Accent::Blue),
];

const NODES: [Node; 10] = [
    Node::new(Vertex::TopApex, Accent::Orange, NODE),
    Node::new(Vertex::TopRightUpper, Accent::Gold, NODE),
    Node::new(Vertex::TopRightLower, Accent::Gold, NODE),
    Node::new(Vertex::TopLeftUpper, Accent::Orange, NODE),
    Node::new(Vertex::TopLeftLower, Accent::Gold, NODE),
    Node::new(Vertex::BottomRightLower, Accent::Blue, NODE),
    Node::new(Vertex::BottomRightUpper, Accent::Purple, NODE),
    Node::new(Vertex::BottomLeftUpper, Accent::Purple, NODE),
    Node::new(Vertex::BottomLeftLower, Accent::Blue, NODE),
    Node::new(Vertex::BottomApex, Accent::Purple, NODE),
];

pub static HEX_NETWORK: Design = Design {
    name: "hex-network",
    corner_radius: Measure::exact(48),
    line_width: Measure::new(3, 1),
    segments: &SEGMENTS,
    nodes: &NODES,
    hub: Hub {
        outer: Measure::new(10, 3),
        outer_color: Accent::Highlight,
        outer_alpha: 220,
        inner: Measure::new(6, 2),
        inner_color: Accent::Purple,
    },
};

//! Declarative glyph designs.
//!
//! A [`Design`] is a set of static tables drawn against a 200px reference
//! canvas:
//! - named [`Vertex`] positions, as offsets from the canvas center
//! - [`Segment`]s between vertices, each with a fixed [`Accent`]
//! - [`Node`]s drawn on vertices, each with a fixed [`Accent`] and radius
//! - a two-circle [`Hub`] at the center
//!
//! Nothing in this module draws. [`Layout`] resolves a design for one
//! pixel size so the geometry can be checked in isolation from the canvas.

pub mod hex_network;
pub mod hub_spokes;

pub use hex_network::HEX_NETWORK;
pub use hub_spokes::HUB_SPOKES;

use crate::colors::Accent;
use serde::{Deserialize, Serialize};

/// Edge length of the reference design, in pixels.
pub const REFERENCE_SIZE: u32 = 200;

// ============================================================================
// Measure
// ============================================================================

/// A length in reference-design pixels, with a minimum in real pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measure {
    pub reference: u32,
    pub floor: u32,
}

impl Measure {
    pub const fn new(reference: u32, floor: u32) -> Self {
        Self { reference, floor }
    }

    /// A measure without a floor.
    pub const fn exact(reference: u32) -> Self {
        Self::new(reference, 0)
    }

    /// Scales to `size`, truncating, then raises to the floor.
    pub fn at(self, size: u32) -> u32 {
        scale_length(self.reference, size).max(self.floor)
    }
}

fn scale_length(reference: u32, size: u32) -> u32 {
    (u64::from(reference) * u64::from(size) / u64::from(REFERENCE_SIZE)) as u32
}

/// Scales a signed offset, truncating toward zero so the glyph stays
/// symmetric about the center.
fn scale_offset(reference: i32, size: u32) -> i32 {
    let magnitude = scale_length(reference.unsigned_abs(), size) as i32;
    if reference < 0 { -magnitude } else { magnitude }
}

// ============================================================================
// Vertices
// ============================================================================

/// Named glyph points. Each design uses a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertex {
    Center,

    // Hexagon network
    TopApex,
    TopRightUpper,
    TopRightLower,
    TopLeftUpper,
    TopLeftLower,
    BottomRightLower,
    BottomLeftLower,
    BottomRightUpper,
    BottomLeftUpper,
    BottomApex,

    // Hub and spokes
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Vertex {
    /// Offset from the canvas center in reference-design pixels.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Vertex::Center => (0, 0),
            Vertex::TopApex => (0, -hex_network::HEX_HEIGHT),
            Vertex::TopRightUpper => (hex_network::HEX_WIDTH, -40),
            Vertex::TopRightLower => (hex_network::HEX_WIDTH, -20),
            Vertex::TopLeftUpper => (-hex_network::HEX_WIDTH, -40),
            Vertex::TopLeftLower => (-hex_network::HEX_WIDTH, -20),
            Vertex::BottomRightLower => (hex_network::HEX_WIDTH, 20),
            Vertex::BottomLeftLower => (-hex_network::HEX_WIDTH, 20),
            Vertex::BottomRightUpper => (hex_network::HEX_WIDTH, 40),
            Vertex::BottomLeftUpper => (-hex_network::HEX_WIDTH, 40),
            Vertex::BottomApex => (0, hex_network::HEX_HEIGHT),
            Vertex::NorthEast => (hub_spokes::SPOKE_REACH, -hub_spokes::SPOKE_REACH),
            Vertex::SouthEast => (hub_spokes::SPOKE_REACH, hub_spokes::SPOKE_REACH),
            Vertex::SouthWest => (-hub_spokes::SPOKE_REACH, hub_spokes::SPOKE_REACH),
            Vertex::NorthWest => (-hub_spokes::SPOKE_REACH, -hub_spokes::SPOKE_REACH),
        }
    }
}

// ============================================================================
// Tables
// ============================================================================

/// A straight line between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: Vertex,
    pub to: Vertex,
    pub color: Accent,
}

impl Segment {
    pub const fn new(from: Vertex, to: Vertex, color: Accent) -> Self {
        Self { from, to, color }
    }
}

/// A filled circle centered on a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub vertex: Vertex,
    pub color: Accent,
    pub radius: Measure,
}

impl Node {
    pub const fn new(vertex: Vertex, color: Accent, radius: Measure) -> Self {
        Self {
            vertex,
            color,
            radius,
        }
    }
}

/// Two concentric circles at the canvas center, outer drawn first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hub {
    pub outer: Measure,
    pub outer_color: Accent,
    /// Alpha of the outer circle; below 255 gives a translucent glow.
    pub outer_alpha: u8,
    pub inner: Measure,
    pub inner_color: Accent,
}

/// A complete glyph design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Design {
    pub name: &'static str,
    pub corner_radius: Measure,
    pub line_width: Measure,
    pub segments: &'static [Segment],
    pub nodes: &'static [Node],
    pub hub: Hub,
}

impl Design {
    /// Every vertex the design refers to, in first-use order.
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut seen = Vec::new();
        let used = self
            .segments
            .iter()
            .flat_map(|s| [s.from, s.to])
            .chain(self.nodes.iter().map(|n| n.vertex));
        for vertex in used {
            if !seen.contains(&vertex) {
                seen.push(vertex);
            }
        }
        seen
    }

    /// Resolves the design at a pixel size.
    pub fn layout(&'static self, size: u32) -> Layout {
        Layout::new(self, size)
    }
}

// ============================================================================
// Variant
// ============================================================================

/// Selects one of the alternate glyph designs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Two stacked hexagon skeletons joined at the center.
    #[default]
    HexNetwork,
    /// Four diagonal spokes radiating from a central hub.
    HubSpokes,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::HexNetwork, Variant::HubSpokes];

    pub fn design(self) -> &'static Design {
        match self {
            Variant::HexNetwork => &HEX_NETWORK,
            Variant::HubSpokes => &HUB_SPOKES,
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Integer pixel position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

/// A [`Design`] resolved for one pixel size.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub design: &'static Design,
    pub size: u32,
    pub center: PixelPoint,
    pub corner_radius: u32,
    pub line_width: u32,
    pub hub_outer: u32,
    pub hub_inner: u32,
}

impl Layout {
    pub fn new(design: &'static Design, size: u32) -> Self {
        let half = (size / 2) as i32;
        Self {
            design,
            size,
            center: PixelPoint { x: half, y: half },
            corner_radius: design.corner_radius.at(size),
            line_width: design.line_width.at(size),
            hub_outer: design.hub.outer.at(size),
            hub_inner: design.hub.inner.at(size),
        }
    }

    /// Pixel position of a named vertex.
    pub fn point(&self, vertex: Vertex) -> PixelPoint {
        let (dx, dy) = vertex.offset();
        PixelPoint {
            x: self.center.x + scale_offset(dx, self.size),
            y: self.center.y + scale_offset(dy, self.size),
        }
    }

    pub fn node_radius(&self, node: &Node) -> u32 {
        node.radius.at(self.size)
    }
}

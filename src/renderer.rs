//! Glyph rendering.

use tracing::debug;

use crate::canvas::Canvas;
use crate::colors::with_alpha;
use crate::design::Layout;
use crate::error::Result;
use crate::icon::{IconImage, IconSet};
use crate::profile::RenderProfile;

/// Renders glyphs for one immutable [`RenderProfile`].
///
/// Output depends only on the profile and the requested size, so rendering
/// the same size twice yields identical pixels.
///
/// # Paint order
///
/// 1. Rounded-rectangle background
/// 2. Outline segments, in table order
/// 3. Vertex nodes, in table order
/// 4. Hub, outer circle then inner circle
#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    profile: RenderProfile,
}

impl IconRenderer {
    pub fn new(profile: RenderProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &RenderProfile {
        &self.profile
    }

    /// Renders a `size`×`size` RGBA icon.
    pub fn render(&self, size: u32) -> Result<IconImage> {
        let mut canvas = Canvas::new(size, self.profile.anti_alias)?;
        let palette = &self.profile.palette;
        let design = self.profile.variant.design();
        let layout = Layout::new(design, size);

        debug!(
            design = design.name,
            size,
            corner_radius = layout.corner_radius,
            line_width = layout.line_width,
            hub_outer = layout.hub_outer,
            hub_inner = layout.hub_inner,
            "rendering glyph"
        );

        canvas.fill_rounded_rect(layout.corner_radius, palette.background)?;

        for segment in design.segments {
            canvas.stroke_line(
                layout.point(segment.from),
                layout.point(segment.to),
                layout.line_width,
                palette.accent(segment.color),
            )?;
        }

        for node in design.nodes {
            canvas.fill_circle(
                layout.point(node.vertex),
                layout.node_radius(node),
                palette.accent(node.color),
            )?;
        }

        let hub = &design.hub;
        let glow = with_alpha(palette.accent(hub.outer_color), hub.outer_alpha);
        canvas.fill_circle(layout.center, layout.hub_outer, glow)?;
        canvas.fill_circle(layout.center, layout.hub_inner, palette.accent(hub.inner_color))?;

        Ok(IconImage::new(canvas.into_image()))
    }

    /// Renders every size, in order.
    pub fn render_all(&self, sizes: &[u32]) -> Result<IconSet> {
        sizes.iter().map(|&size| self.render(size)).collect()
    }
}

/// Renders one icon with `profile`.
pub fn render(size: u32, profile: &RenderProfile) -> Result<IconImage> {
    IconRenderer::new(*profile).render(size)
}

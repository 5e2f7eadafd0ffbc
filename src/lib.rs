//! netglyph: procedural favicon renderer
//!
//! This crate draws a small network glyph (two stacked hexagons, or four
//! spokes around a hub) at fixed pixel sizes, writes each size as a PNG and
//! packs the smallest ones into a multi-resolution ICO container.
//!
//! # Example
//!
//! ```
//! use netglyph::{IconRenderer, RenderProfile, Variant};
//!
//! let renderer = IconRenderer::new(RenderProfile::new(Variant::HexNetwork));
//! let icon = renderer.render(32).unwrap();
//! assert_eq!(icon.dimensions().width, 32);
//!
//! // Corners fall outside the rounded background
//! assert_eq!(icon.data.get_pixel(0, 0)[3], 0);
//! ```
//!
//! # Writing favicons
//!
//! ```no_run
//! use netglyph::{generate, IconRenderer, OutputPlan, Progress};
//! use std::path::Path;
//!
//! let report = generate(
//!     &IconRenderer::default(),
//!     &OutputPlan::FAVICONS,
//!     Path::new("public"),
//!     |step| {
//!         if let Progress::Png { path, .. } = step {
//!             println!("Created {}", path.display());
//!         }
//!     },
//! )
//! .unwrap();
//! assert_eq!(report.files().count(), 5);
//! ```

pub mod bundle;
mod canvas;
mod colors;
pub mod design;
mod error;
mod generate;
mod icon;
mod profile;
mod renderer;

pub use bundle::{encode_icon_dir, read_container_sizes, write_container};
pub use colors::{Accent, Palette};
pub use design::{Design, Layout, Measure, Variant, Vertex};
pub use error::{Error, Result};
pub use generate::{GenerationReport, OutputPlan, Progress, generate};
pub use icon::{IconImage, IconSet, SizePx};
pub use profile::RenderProfile;
pub use renderer::{IconRenderer, render};

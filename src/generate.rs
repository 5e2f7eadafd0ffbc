//! Favicon output driver.
//!
//! Renders the planned PNG sizes into an output directory, then reloads the
//! container sizes from disk and packs them into one ICO file. Every step
//! runs in list order; the container is only built after all PNGs exist.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::bundle;
use crate::error::{Error, Result};
use crate::icon::{IconImage, IconSet};
use crate::renderer::IconRenderer;

/// Fixed list of files a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputPlan {
    /// Sizes written as individual PNG files.
    pub png_sizes: &'static [u32],
    /// Sizes packed into the ICO container. Each must also be a PNG size.
    pub container_sizes: &'static [u32],
    pub container_name: &'static str,
}

impl OutputPlan {
    pub const FAVICONS: OutputPlan = OutputPlan {
        png_sizes: &[16, 32, 48, 180],
        container_sizes: &[16, 32, 48],
        container_name: "favicon.ico",
    };

    /// File name of the PNG for `size`.
    pub fn png_name(&self, size: u32) -> String {
        format!("favicon-{size}.png")
    }

    /// Every file name the plan writes, PNGs first.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.png_sizes.iter().map(|&s| self.png_name(s)).collect();
        names.push(self.container_name.to_string());
        names
    }
}

impl Default for OutputPlan {
    fn default() -> Self {
        Self::FAVICONS
    }
}

/// Steps reported while a run progresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// A PNG was written.
    Png { size: u32, path: PathBuf },
    /// Container assembly started.
    BundleStarted,
    /// The container was written.
    Container { path: PathBuf },
}

/// Files written by a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub pngs: Vec<PathBuf>,
    pub container: PathBuf,
}

impl GenerationReport {
    /// All written paths, PNGs first.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.pngs
            .iter()
            .map(PathBuf::as_path)
            .chain(std::iter::once(self.container.as_path()))
    }
}

/// Writes every file in `plan` into `out_dir`.
///
/// `on_progress` is called after each step completes. Any I/O or encoding
/// failure stops the run immediately.
pub fn generate(
    renderer: &IconRenderer,
    plan: &OutputPlan,
    out_dir: &Path,
    mut on_progress: impl FnMut(&Progress),
) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();

    for &size in plan.png_sizes {
        let icon = renderer.render(size)?;
        let path = out_dir.join(plan.png_name(size));
        icon.data
            .save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| Error::image_at(&path, e))?;
        info!(path = %path.display(), size, "wrote png");

        on_progress(&Progress::Png {
            size,
            path: path.clone(),
        });
        report.pngs.push(path);
    }

    on_progress(&Progress::BundleStarted);
    let reloaded = reload_pngs(plan, out_dir)?;
    let container = out_dir.join(plan.container_name);
    bundle::write_container(&container, &reloaded, plan.container_sizes)?;
    on_progress(&Progress::Container {
        path: container.clone(),
    });
    report.container = container;

    Ok(report)
}

/// Reads the container-size PNGs back from `out_dir`.
fn reload_pngs(plan: &OutputPlan, out_dir: &Path) -> Result<IconSet> {
    plan.container_sizes
        .iter()
        .map(|&size| -> Result<IconImage> {
            let path = out_dir.join(plan.png_name(size));
            let img = image::open(&path).map_err(|e| Error::image_at(&path, e))?;
            Ok(IconImage::new(img.to_rgba8()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::Variant;
    use crate::icon::SizePx;
    use crate::profile::RenderProfile;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("netglyph-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn plan_names_match_sizes() {
        let plan = OutputPlan::default();
        assert_eq!(
            plan.file_names(),
            vec![
                "favicon-16.png",
                "favicon-32.png",
                "favicon-48.png",
                "favicon-180.png",
                "favicon.ico"
            ]
        );
        for size in plan.container_sizes {
            assert!(plan.png_sizes.contains(size));
        }
    }

    #[test]
    fn generate_writes_exactly_the_planned_files() {
        let dir = scratch_dir("full-run");
        let plan = OutputPlan::default();
        let mut events = Vec::new();

        let report = generate(&IconRenderer::default(), &plan, &dir, |p| events.push(p.clone())).unwrap();

        let mut expected = plan.file_names();
        expected.sort();
        assert_eq!(listing(&dir), expected);
        assert_eq!(report.files().count(), 5);

        assert_eq!(events.len(), 6);
        assert_eq!(events[4], Progress::BundleStarted);
        assert_eq!(
            events.last(),
            Some(&Progress::Container {
                path: dir.join("favicon.ico")
            })
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn pngs_have_matching_dimensions() {
        let dir = scratch_dir("png-dims");
        let report = generate(
            &IconRenderer::new(RenderProfile::new(Variant::HubSpokes)),
            &OutputPlan::default(),
            &dir,
            |_| {},
        )
        .unwrap();

        for (path, size) in report.pngs.iter().zip([16, 32, 48, 180]) {
            let img = image::open(path).unwrap();
            assert_eq!((img.width(), img.height()), (size, size));
            assert!(img.color().has_alpha());
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn container_round_trips_three_sizes() {
        let dir = scratch_dir("container");
        let report = generate(&IconRenderer::default(), &OutputPlan::default(), &dir, |_| {}).unwrap();

        let sizes = bundle::read_container_sizes(&report.container).unwrap();
        assert_eq!(
            sizes,
            vec![SizePx::square(16), SizePx::square(32), SizePx::square(48)]
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn written_png_matches_render() {
        let dir = scratch_dir("png-pixels");
        let renderer = IconRenderer::default();
        let report = generate(&renderer, &OutputPlan::default(), &dir, |_| {}).unwrap();

        let on_disk = image::open(&report.pngs[1]).unwrap().to_rgba8();
        assert_eq!(on_disk, renderer.render(32).unwrap().data);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_output_directory_fails() {
        let dir = std::env::temp_dir().join(format!("netglyph-{}-absent/nested", std::process::id()));
        let result = generate(&IconRenderer::default(), &OutputPlan::default(), &dir, |_| {});
        match result {
            Err(Error::Io { path, .. }) => assert_eq!(path, dir.join("favicon-16.png")),
            other => panic!("expected an I/O error naming the PNG, got {other:?}"),
        }
    }
}

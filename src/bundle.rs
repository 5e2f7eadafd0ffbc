//! Multi-resolution ICO containers.
//!
//! Packs square RGBA images from an [`IconSet`] into a single `.ico` file
//! and reads back the resolutions a container embeds.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use ico::{IconDir, IconDirEntry, ResourceType};
use tracing::info;

use crate::error::{Error, Result};
use crate::icon::{IconSet, SizePx};

/// Builds an icon directory with one entry per requested size, in order.
///
/// Every size must be present in `icons`.
pub fn encode_icon_dir(icons: &IconSet, sizes: &[u32]) -> Result<IconDir> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for &size in sizes {
        let icon = icons.find_by_size(size).ok_or(Error::MissingSize(size))?;
        let image = ico::IconImage::from_rgba_data(size, size, icon.as_raw().to_vec());
        let entry = IconDirEntry::encode(&image)
            .map_err(|source| Error::Encode { size, source })?;
        icon_dir.add_entry(entry);
    }

    Ok(icon_dir)
}

/// Writes `sizes` from `icons` to a single container file at `path`.
pub fn write_container(path: &Path, icons: &IconSet, sizes: &[u32]) -> Result<()> {
    let icon_dir = encode_icon_dir(icons, sizes)?;
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    icon_dir
        .write(BufWriter::new(file))
        .map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), ?sizes, "wrote icon container");
    Ok(())
}

/// Lists the dimensions of every image embedded in the container at `path`.
pub fn read_container_sizes(path: &Path) -> Result<Vec<SizePx>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let icon_dir =
        IconDir::read(BufReader::new(file)).map_err(|source| Error::MalformedContainer {
            path: path.to_path_buf(),
            source,
        })?;
    icon_dir
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| -> Result<SizePx> {
            // Decode rather than trust the directory header.
            let image = entry.decode().map_err(|source| Error::Decode {
                path: path.to_path_buf(),
                index,
                source,
            })?;
            Ok(SizePx::new(image.width(), image.height()))
        })
        .collect()
}

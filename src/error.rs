//! Error type shared by rendering, bundling and the output driver.

use std::path::PathBuf;

/// Errors produced while rendering glyphs or writing icon files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("icon size must be greater than zero")]
    InvalidSize,

    #[error("failed to allocate a {0}x{0} pixmap")]
    PixmapAllocation(u32),

    #[error("shape '{0}' produced an empty path")]
    EmptyPath(&'static str),

    #[error("no {0}x{0} image available for the icon container")]
    MissingSize(u32),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {size}x{size} container entry: {source}")]
    Encode {
        size: u32,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed icon container {}: {source}", path.display())]
    MalformedContainer {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("entry {index} of {} does not decode: {source}", path.display())]
    Decode {
        path: PathBuf,
        index: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid render profile: {0}")]
    Profile(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Keeps the file path when `image` reports an I/O failure.
    pub(crate) fn image_at(path: &std::path::Path, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(source) => Self::io(path, source),
            other => Self::Image(other),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

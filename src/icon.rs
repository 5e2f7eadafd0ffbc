//! Rendered icon images and multi-size icon sets.

use image::RgbaImage;

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn square(edge: u32) -> Self {
        Self::new(edge, edge)
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// A single rendered icon image.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in RGBA format.
    pub data: RgbaImage,
}

impl IconImage {
    pub fn new(data: RgbaImage) -> Self {
        Self { data }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Edge length of a square icon (the width otherwise).
    pub fn edge(&self) -> u32 {
        self.data.width()
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.data.as_raw()
    }
}

/// A collection of icon images representing one glyph at various sizes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSet {
    pub images: Vec<IconImage>,
}

impl IconSet {
    /// Creates a new empty icon set.
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Creates an icon set from a vector of images.
    pub fn from_images(images: Vec<IconImage>) -> Self {
        Self { images }
    }

    /// Adds an image to the icon set.
    pub fn add_image(&mut self, image: IconImage) {
        self.images.push(image);
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Finds the square image with exactly this edge length.
    pub fn find_by_size(&self, edge: u32) -> Option<&IconImage> {
        self.images
            .iter()
            .find(|img| img.dimensions() == SizePx::square(edge))
    }

    /// Dimensions of every image, in insertion order.
    pub fn sizes(&self) -> Vec<SizePx> {
        self.images.iter().map(IconImage::dimensions).collect()
    }

    /// Returns an iterator over the icon images.
    pub fn iter(&self) -> impl Iterator<Item = &IconImage> {
        self.images.iter()
    }
}

impl FromIterator<IconImage> for IconSet {
    fn from_iter<I: IntoIterator<Item = IconImage>>(iter: I) -> Self {
        Self::from_images(iter.into_iter().collect())
    }
}

impl IntoIterator for IconSet {
    type Item = IconImage;
    type IntoIter = std::vec::IntoIter<IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.into_iter()
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a IconImage;
    type IntoIter = std::slice::Iter<'a, IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

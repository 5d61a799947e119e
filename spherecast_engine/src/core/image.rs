use crate::core::colour::ColourRgb;
use crate::core::types::{Channel, Colour};
use derivative::Derivative;
use getset::{CopyGetters, Getters};
use num_integer::Integer;
use std::ops::{Deref, Index};

/// A row-major grid of pixels. This is the framebuffer the renderer fills in.
///
/// Pixel `(x, y)` is stored at index `x + (y * width)`, with `(0, 0)` the top-left corner.
#[derive(CopyGetters, Getters, Derivative, Clone, PartialEq)]
#[derivative(Debug)]
pub struct Image<Col = Colour> {
    #[get_copy = "pub"]
    width: usize,
    #[get_copy = "pub"]
    height: usize,
    #[get_copy = "pub"]
    len: usize,
    #[derivative(Debug = "ignore")]
    #[get = "pub"]
    data: Box<[Col]>,
}

// region Constructors

impl<Col: Clone + Default> Image<Col> {
    /// Creates a new image with the specified dimensions, and the default pixel value
    pub fn new_blank(width: usize, height: usize) -> Self { Self::new_filled(width, height, Col::default()) }
}

impl<Col: Clone> Image<Col> {
    /// Creates a new image with the specified dimensions, and the given fill pixel value
    pub fn new_filled(width: usize, height: usize, fill: Col) -> Self {
        Self::new_from(width, height, vec![fill; width * height])
    }
}

impl<Col> Image<Col> {
    /// Creates an image from the image's dimensions, and a slice of pixels
    ///
    /// # Panics
    /// The length of the `data` must be equal to the number of pixels `width * height`.
    pub fn new_from(width: usize, height: usize, data: impl Into<Box<[Col]>>) -> Self {
        let data = data.into();
        let len = width * height;
        assert_eq!(data.len(), len, "number of pixels does not match dimensions");

        Self {
            width,
            height,
            data,
            len,
        }
    }

    /// Creates an image from the image's dimensions, using the given function to calculate pixel values
    pub fn from_fn(width: usize, height: usize, mut func: impl FnMut(usize, usize) -> Col) -> Self {
        let data = (0..width * height)
            .map(|i| {
                let (x, y) = Self::decompress_index_dims(i, width);
                func(x, y)
            })
            .collect::<Vec<_>>();

        Self::new_from(width, height, data)
    }
}

// endregion Constructors

// region Pixel Accessors

impl<Col> Image<Col> {
    fn compress_index(&self, x: usize, y: usize) -> usize { x + (y * self.width) }

    fn decompress_index_dims(n: usize, width: usize) -> (usize, usize) {
        let (y, x) = usize::div_rem(&n, &width);
        (x, y)
    }

    /// Mutable access to each row of pixels, top to bottom.
    ///
    /// Rows are disjoint, so they can be handed out to separate workers.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, Col> {
        // `chunks_exact_mut` panics on a zero chunk size, and a zero-width image has no rows anyway
        let width = self.width.max(1);
        self.data.chunks_exact_mut(width)
    }
}

impl<Col> Index<usize> for Image<Col> {
    type Output = Col;

    /// Direct access to the pixel buffer, in row-major order
    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < self.len, "invalid pixel index {} for len {}", index, self.len);
        &self.data[index]
    }
}

impl<Col> Index<(usize, usize)> for Image<Col> {
    type Output = Col;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        assert!(
            x < self.width && y < self.height,
            "invalid pixel index ({}, {}) for dims ({},{})",
            x,
            y,
            self.width,
            self.height
        );
        self.index(self.compress_index(x, y))
    }
}

// endregion Pixel Accessors

// region Raw bytes

impl Image<ColourRgb> {
    /// Flattens the image into interleaved `RGBRGB...` bytes, row by row
    pub fn to_rgb_bytes(&self) -> Vec<Channel> { self.data.iter().flat_map(|px| px.0).collect() }
}

// endregion Raw bytes

// region Deref

impl<Col> Deref for Image<Col> {
    type Target = [Col];

    fn deref(&self) -> &Self::Target { self.data.deref() }
}

// endregion Deref

// region Iteration (Ref)

/// An enumerated iterator over the pixels of an image reference.
///
/// Will iterate the pixels row-by-row, returning the position of the pixel as well
///
/// # Returns
/// Each value returned will be `(x, y, &pixel)`
pub struct ImageIterator<'img, Col> {
    image: &'img Image<Col>,
    index: usize,
}

impl<'img, Col> ImageIterator<'img, Col> {
    pub fn new(image: &'img Image<Col>) -> Self { Self { image, index: 0 } }
}

impl<'img, Col> Iterator for ImageIterator<'img, Col> {
    type Item = (usize, usize, &'img Col);

    fn next(&mut self) -> Option<Self::Item> {
        let px = self.image.data.get(self.index)?;
        let (x, y) = Image::<Col>::decompress_index_dims(self.index, self.image.width);
        self.index += 1;
        Some((x, y, px))
    }
}

impl<'img, Col> IntoIterator for &'img Image<Col> {
    type Item = (usize, usize, &'img Col);
    type IntoIter = ImageIterator<'img, Col>;

    fn into_iter(self) -> Self::IntoIter { ImageIterator::new(self) }
}

impl<Col> Image<Col> {
    /// See [ImageIterator]
    pub fn indexed_iter(&self) -> ImageIterator<'_, Col> { ImageIterator::new(self) }
}

// endregion Iteration (Ref)

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_layout() {
        let img = Image::from_fn(3, 2, |x, y| (x, y));
        assert_eq!(img.len(), 6);
        assert_eq!(img[1], (1, 0));
        assert_eq!(img[3], (0, 1));
        assert_eq!(img[(2, 1)], (2, 1));
    }

    #[test]
    fn indexed_iter_visits_every_pixel_once() {
        let img = Image::from_fn(4, 3, |x, y| x * 10 + y);
        let visited = img.indexed_iter().map(|(x, y, &v)| (x, y, v)).collect::<Vec<_>>();
        assert_eq!(visited.len(), 12);
        assert!(visited.iter().all(|&(x, y, v)| v == x * 10 + y));
        assert_eq!(visited.last(), Some(&(3, 2, 32)));
    }

    #[test]
    fn rows_mut_are_disjoint_rows() {
        let mut img = Image::<usize>::new_blank(3, 4);
        img.rows_mut().enumerate().for_each(|(y, row)| row.fill(y));
        assert_eq!(img.rows_mut().count(), 4);
        assert!(img.indexed_iter().all(|(_, y, &v)| v == y));
    }

    #[test]
    fn rgb_bytes_are_interleaved() {
        let img = Image::new_from(2, 1, vec![ColourRgb::RED, ColourRgb::new([1, 2, 3])]);
        assert_eq!(img.to_rgb_bytes(), vec![255, 0, 0, 1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "number of pixels does not match dimensions")]
    fn mismatched_dims_panic() { let _ = Image::new_from(2, 2, vec![0_u8; 3]); }
}

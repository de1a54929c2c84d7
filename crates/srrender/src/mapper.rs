//! World-to-pixel coordinate mapping.

use srrender_common::{Image, Movie, RenderFloat, Roi};

/// Affine map from ROI world coordinates onto a `pixels_x x pixels_y` grid.
///
/// The ROI's full extent covers the full grid: `xmin` maps to the left edge of
/// column 0 and `xmax` to the right edge of the last column. The mapper does no
/// rounding; truncation to a pixel index is done by [`PixelMapper::pixel_offset`]
/// or by the caller. A degenerate ROI yields non-finite ratios and every point
/// is then dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelMapper<F> {
    xmin: F,
    ymin: F,
    size_ratio_x: F,
    size_ratio_y: F,
    pixels_x: usize,
    pixels_y: usize,
}

impl<F: RenderFloat> PixelMapper<F> {
    pub fn new(roi: &Roi<F>, pixels_x: usize, pixels_y: usize) -> Self {
        Self {
            xmin: roi.xmin,
            ymin: roi.ymin,
            size_ratio_x: F::from_usize(pixels_x) / roi.width(),
            size_ratio_y: F::from_usize(pixels_y) / roi.height(),
            pixels_x,
            pixels_y,
        }
    }

    /// Mapper onto the pixel grid of `image`.
    pub fn for_image(roi: &Roi<F>, image: &Image<F>) -> Self {
        Self::new(roi, image.cols(), image.rows())
    }

    /// Mapper onto the pixel grid of each frame of `movie`.
    pub fn for_movie(roi: &Roi<F>, movie: &Movie<F>) -> Self {
        Self::new(roi, movie.cols(), movie.rows())
    }

    /// Pixels per world unit along x.
    pub fn size_ratio_x(&self) -> F {
        self.size_ratio_x
    }

    /// Pixels per world unit along y.
    pub fn size_ratio_y(&self) -> F {
        self.size_ratio_y
    }

    pub fn pixels_x(&self) -> usize {
        self.pixels_x
    }

    pub fn pixels_y(&self) -> usize {
        self.pixels_y
    }

    #[inline]
    pub fn map_x(&self, x: F) -> F {
        (x - self.xmin) * self.size_ratio_x
    }

    #[inline]
    pub fn map_y(&self, y: F) -> F {
        (y - self.ymin) * self.size_ratio_y
    }

    /// Row-major offset of the pixel containing world point `(x, y)`.
    ///
    /// Pixel-space coordinates are truncated toward zero. Returns `None` when
    /// the index falls outside the grid or the coordinate is not finite.
    #[inline]
    pub fn pixel_offset(&self, x: F, y: F) -> Option<usize> {
        let ix = self.map_x(x).to_isize()?;
        let iy = self.map_y(y).to_isize()?;
        if ix < 0 || iy < 0 {
            return None;
        }
        let (ix, iy) = (ix as usize, iy as usize);
        if ix >= self.pixels_x || iy >= self.pixels_y {
            return None;
        }
        Some(iy * self.pixels_x + ix)
    }
}

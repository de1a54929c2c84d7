//! Region of interest in world coordinates.

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};
use crate::float::RenderFloat;

/// A world-coordinate rectangle mapped onto the full extent of an output grid.
///
/// Units are whatever the localizations are expressed in (typically nm or
/// camera pixels). `xmax > xmin` and `ymax > ymin` are expected but not
/// enforced; see [`Roi::is_degenerate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Roi<F> {
    pub xmin: F,
    pub xmax: F,
    pub ymin: F,
    pub ymax: F,
}

impl<F: RenderFloat> Roi<F> {
    /// Create a new ROI from its extents.
    pub fn new(xmin: F, xmax: F, ymin: F, ymax: F) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Parse the 4-element `[xmin, xmax, ymin, ymax]` vector form.
    pub fn from_slice(roi: &[F]) -> RenderResult<Self> {
        match *roi {
            [xmin, xmax, ymin, ymax] => Ok(Self::new(xmin, xmax, ymin, ymax)),
            _ => Err(RenderError::InvalidRoi(roi.len())),
        }
    }

    /// The `[xmin, xmax, ymin, ymax]` vector form.
    pub fn to_array(&self) -> [F; 4] {
        [self.xmin, self.xmax, self.ymin, self.ymax]
    }

    /// Width of the ROI in world units.
    pub fn width(&self) -> F {
        self.xmax - self.xmin
    }

    /// Height of the ROI in world units.
    pub fn height(&self) -> F {
        self.ymax - self.ymin
    }

    /// True when either axis has zero (or negative, or non-finite) extent.
    /// Rendering into a degenerate ROI produces meaningless values.
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > F::zero() && self.height() > F::zero())
            || !self.width().is_finite()
            || !self.height().is_finite()
    }
}

//! Common types shared by the srrender engine and its tests.

pub mod error;
pub mod float;
pub mod image;
pub mod points;
pub mod roi;

pub use error::{RenderError, RenderResult};
pub use float::RenderFloat;
pub use image::{Image, Movie};
pub use points::{columns, PointLayout, PointTable};
pub use roi::Roi;

/// Default truncation radius for Gaussian rendering, in standard deviations.
pub const DEFAULT_SIGMA_ACCURACY: f64 = 5.0;

//! Rendering of super-resolution microscopy localizations.
//!
//! Two rendering styles are implemented, each for a single image and for a
//! frame-indexed movie:
//! - Histogram: each point's intensity lands in the pixel containing it
//! - Gaussian: each point is splatted as an exact pixel-integrated 2D Gaussian
//!
//! The free functions in [`hist`], [`gauss`] and [`movie`] are the kernels.
//! [`Renderer`] wraps them with shape validation, configuration and an
//! optional dedicated worker pool.

pub mod config;
pub mod gauss;
pub mod hist;
pub mod mapper;
pub mod movie;
mod parallel;
pub mod renderer;
pub mod stencil;
pub mod strategy;

pub use config::RenderConfig;
pub use gauss::{render_gauss, render_gauss_parallel, render_gauss_sequential, render_gauss_with};
pub use hist::{render_hist, render_hist_parallel, render_hist_sequential, render_hist_with};
pub use mapper::PixelMapper;
pub use movie::{render_gauss_movie, render_hist_movie};
pub use renderer::Renderer;
pub use stencil::fill_stencil;
pub use strategy::{Strategy, StrategyPolicy};

pub use srrender_common::{
    columns, Image, Movie, PointLayout, PointTable, RenderError, RenderFloat, RenderResult, Roi,
    DEFAULT_SIGMA_ACCURACY,
};

//! Validating entry point for the four render operations.
//!
//! The kernels in [`crate::hist`], [`crate::gauss`] and [`crate::movie`]
//! trust their inputs. `Renderer` is the boundary in front of them: it checks
//! ROI length, point-table columns and sigma accuracy, optionally sanity-checks
//! every point, and runs the kernel on the configured worker pool.

use rayon::{ThreadPool, ThreadPoolBuilder};
use srrender_common::{
    Image, Movie, PointLayout, PointTable, RenderError, RenderFloat, RenderResult, Roi,
};
use tracing::{debug, warn};

use crate::config::RenderConfig;
use crate::{gauss, hist, movie};

/// Renders localization tables into caller-owned images and movies.
pub struct Renderer {
    config: RenderConfig,
    pool: Option<ThreadPool>,
}

impl Renderer {
    /// Build a renderer, creating a dedicated pool when `num_threads` is set.
    pub fn new(config: RenderConfig) -> RenderResult<Self> {
        config.validate()?;

        let pool = match config.num_threads {
            Some(n) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("srrender-{}", i))
                    .build()
                    .map_err(|e| RenderError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        debug!(
            num_threads = ?config.num_threads,
            strategy = ?config.strategy,
            sigma_accuracy = config.sigma_accuracy,
            "Created renderer"
        );

        Ok(Self { config, pool })
    }

    /// Build a renderer from `SRRENDER_*` environment variables.
    pub fn from_env() -> RenderResult<Self> {
        Self::new(RenderConfig::from_env())
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Worker threads parallel renders will run on.
    pub fn num_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Histogram of `points` (`[I, x, y, ..]`) accumulated into `image`.
    pub fn render_hist<F: RenderFloat>(
        &self,
        points: &PointTable<'_, F>,
        roi: &[F],
        image: &mut Image<F>,
    ) -> RenderResult<()> {
        let roi = self.prepare(points, roi, PointLayout::Hist)?;
        let strategy = self.config.strategy.resolve(points.len(), image.len());
        self.install(|| hist::render_hist_with(strategy, points, &roi, image));
        Ok(())
    }

    /// Gaussian render of `points` (`[I, x, y, sigmaX, sigmaY, ..]`) into
    /// `image`, which is cleared first.
    pub fn render_gauss<F: RenderFloat>(
        &self,
        points: &PointTable<'_, F>,
        roi: &[F],
        image: &mut Image<F>,
        sigma_accuracy: F,
    ) -> RenderResult<()> {
        check_sigma_accuracy(sigma_accuracy)?;
        let roi = self.prepare(points, roi, PointLayout::Gauss)?;
        let strategy = self.config.strategy.resolve(points.len(), image.len());
        self.install(|| gauss::render_gauss_with(strategy, points, &roi, image, sigma_accuracy));
        Ok(())
    }

    /// [`Renderer::render_gauss`] at the configured sigma accuracy.
    pub fn render_gauss_default<F: RenderFloat>(
        &self,
        points: &PointTable<'_, F>,
        roi: &[F],
        image: &mut Image<F>,
    ) -> RenderResult<()> {
        let accuracy = F::from_f64(self.config.sigma_accuracy);
        self.render_gauss(points, roi, image, accuracy)
    }

    /// Per-frame histogram of `points` (`[I, x, y, _, _, frame, ..]`)
    /// accumulated into `stack`.
    pub fn render_hist_movie<F: RenderFloat>(
        &self,
        points: &PointTable<'_, F>,
        roi: &[F],
        stack: &mut Movie<F>,
    ) -> RenderResult<()> {
        let roi = self.prepare(points, roi, PointLayout::HistMovie)?;
        self.install(|| movie::render_hist_movie(points, &roi, stack));
        Ok(())
    }

    /// Per-frame Gaussian render of `points` (`[I, x, y, sigmaX, sigmaY, frame, ..]`)
    /// accumulated into `stack`. The stack is not cleared.
    pub fn render_gauss_movie<F: RenderFloat>(
        &self,
        points: &PointTable<'_, F>,
        roi: &[F],
        stack: &mut Movie<F>,
        sigma_accuracy: F,
    ) -> RenderResult<()> {
        check_sigma_accuracy(sigma_accuracy)?;
        let roi = self.prepare(points, roi, PointLayout::GaussMovie)?;
        self.install(|| movie::render_gauss_movie(points, &roi, stack, sigma_accuracy));
        Ok(())
    }

    /// [`Renderer::render_gauss_movie`] at the configured sigma accuracy.
    pub fn render_gauss_movie_default<F: RenderFloat>(
        &self,
        points: &PointTable<'_, F>,
        roi: &[F],
        stack: &mut Movie<F>,
    ) -> RenderResult<()> {
        let accuracy = F::from_f64(self.config.sigma_accuracy);
        self.render_gauss_movie(points, roi, stack, accuracy)
    }

    fn prepare<F: RenderFloat>(
        &self,
        points: &PointTable<'_, F>,
        roi: &[F],
        layout: PointLayout,
    ) -> RenderResult<Roi<F>> {
        let roi = Roi::from_slice(roi)?;
        points.require(layout)?;
        if self.config.check_points {
            points.check_points(layout)?;
        }
        if roi.is_degenerate() {
            warn!(roi = ?roi.to_array(), operation = layout.operation(), "Degenerate ROI");
        }
        Ok(roi)
    }

    fn install<R, OP>(&self, op: OP) -> R
    where
        R: Send,
        OP: FnOnce() -> R + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            config: RenderConfig::default(),
            pool: None,
        }
    }
}

fn check_sigma_accuracy<F: RenderFloat>(sigma_accuracy: F) -> RenderResult<()> {
    if sigma_accuracy.is_finite() && sigma_accuracy > F::zero() {
        Ok(())
    } else {
        Err(RenderError::InvalidSigmaAccuracy(
            sigma_accuracy.to_f64().unwrap_or(f64::NAN),
        ))
    }
}

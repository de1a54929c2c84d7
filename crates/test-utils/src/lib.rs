//! Shared test utilities for the srrender workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Seeded synthetic localization generators
//! - Common ROI and point fixtures
//! - Approximate floating-point assertions
//! - Tracing setup for tests and benches
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, LocalizationGenerator};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honoring `RUST_LOG`, once per process.
///
/// Safe to call from every test; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Assert two slices are equal element-wise within a relative tolerance.
///
/// Each pair must satisfy `|a - b| <= rel_tol * max(|a|, |b|, floor)` where
/// `floor` is a thousandth of the largest magnitude in `expected` (at least 1).
pub fn assert_slices_close(actual: &[f64], expected: &[f64], rel_tol: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );
    let scale = expected.iter().fold(0.0f64, |m, v| m.max(v.abs())).max(1.0);
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let tol = rel_tol * a.abs().max(e.abs()).max(scale * 1e-3);
        assert!(
            (a - e).abs() <= tol,
            "element {} differs: actual {} expected {} (tol {})",
            i,
            a,
            e,
            tol
        );
    }
}

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}
